#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Terminal width to shrink columns into.
    pub max_width: Option<usize>,
    /// Highlight dietary types and booleans.
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

/// Render an aligned table; numeric cells are right-aligned.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let text = truncate(row.get(index).map_or("-", String::as_str), width);
                let padded = pad(&text, width, is_numeric(&text));
                if options.color {
                    highlight(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join(GAP));
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect()
}

/// Narrow the widest shrinkable column one char at a time until the table
/// fits or no column can shrink below its header.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|&(index, &width)| width > headers[index].len().max(MIN_COLUMN))
            .max_by_key(|&(_, &width)| width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// Wrap the padded cell in an ANSI color chosen by its bare text.
fn highlight(text: &str, padded: String) -> String {
    let code = match text {
        "VEGETARIAN" | "true" => "32",
        "NON_VEGETARIAN" => "33",
        "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn aligns_text_left_and_numbers_right() {
        let table = render_entity_table(
            &["id", "name"],
            &[row(&["7", "Spaghetti"]), row(&["12", "Steak"])],
            PLAIN,
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "id      name     ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "     7  Spaghetti");
        assert_eq!(lines[3], "    12  Steak    ");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_entity_table(&["id", "name"], &[row(&["1"])], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with("-     ")));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let long = "a very long set of instructions that will not fit";
        let table = render_entity_table(
            &["id", "instructions"],
            &[row(&["1", long])],
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let body = table.lines().nth(2).expect("row");
        assert_eq!(body.chars().count(), 40);
        assert!(body.ends_with('…'));
    }

    #[test]
    fn colors_dietary_types() {
        let table = render_entity_table(
            &["recipeType"],
            &[row(&["VEGETARIAN"])],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32mVEGETARIAN"));
    }
}
