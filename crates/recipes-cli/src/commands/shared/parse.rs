use recipes_core::errors::RecipeError;
use recipes_core::pagination::SortOrder;

/// Parse every `PROP[,PROP...][,asc|desc]` parameter, in order.
pub fn parse_sort(params: &[String]) -> Result<Vec<SortOrder>, RecipeError> {
    let mut orders = Vec::new();
    for param in params {
        orders.extend(SortOrder::parse_param(param)?);
    }
    Ok(orders)
}

/// Flatten repeated and comma-separated name lists into single names.
pub fn split_names(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::to_string)
        .collect()
}
