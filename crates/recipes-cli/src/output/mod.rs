use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(match serde_json::to_value(value)? {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) if is_page(&map) => render_page_table(&map),
        Value::Object(map) => render_object_table(map),
        scalar => {
            table::render_entity_table(&["value"], &[vec![value_to_cell(&scalar)]], options())
        }
    })
}

fn is_page(map: &Map<String, Value>) -> bool {
    map.get("content").is_some_and(Value::is_array) && map.contains_key("pageNo")
}

/// Page content as rows, followed by a one-line position summary.
fn render_page_table(map: &Map<String, Value>) -> String {
    let rows = map
        .get("content")
        .and_then(Value::as_array)
        .map_or_else(|| String::from("(no rows)"), |items| render_array_table(items));
    let field = |key: &str| map.get(key).and_then(Value::as_u64).unwrap_or_default();
    format!(
        "{rows}\n\npage {} of {} ({} recipes)",
        field("pageNo") + 1,
        field("totalPages").max(1),
        field("totalElements")
    )
}

/// Key/value rows; arrays of objects become their own tables below.
fn render_object_table(map: Map<String, Value>) -> String {
    let mut rows = Vec::with_capacity(map.len());
    let mut nested = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) if items.iter().any(Value::is_object) => nested.push((key, items)),
            other => rows.push(vec![key, value_to_cell(&other)]),
        }
    }

    let mut sections = vec![table::render_entity_table(&["key", "value"], &rows, options())];
    for (key, items) in nested {
        sections.push(format!("{key}:\n{}", render_array_table(&items)));
    }
    sections.join("\n\n")
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.is_empty() => String::from("-"),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
