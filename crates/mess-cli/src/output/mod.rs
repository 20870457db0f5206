use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns pinned to the left of list tables, in this order, when present.
const LEADING_COLUMNS: &[&str] = &["id", "meal", "title", "student_name", "status"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) => render_rows(items),
        Value::Object(map) => render_key_value(map),
        scalar => table::render_entity_table(&["value"], &[vec![cell(scalar)]], table_options()),
    }
}

/// One row per record; nested objects collapse into a single cell.
fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let headers = column_order(items.iter().filter_map(Value::as_object));
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn render_key_value(map: &Map<String, Value>) -> String {
    let keys = column_order(std::iter::once(map));
    let rows = keys
        .into_iter()
        .map(|key| {
            let value = map.get(&key).map_or_else(|| String::from("-"), cell);
            vec![key, value]
        })
        .collect::<Vec<_>>();
    table::render_entity_table(&["field", "value"], &rows, table_options())
}

fn column_order<'a>(maps: impl Iterator<Item = &'a Map<String, Value>>) -> Vec<String> {
    let mut rest = Vec::<String>::new();
    for map in maps {
        for key in map.keys() {
            if !rest.contains(key) {
                rest.push(key.clone());
            }
        }
    }
    rest.sort();

    let mut ordered = LEADING_COLUMNS
        .iter()
        .filter(|name| rest.iter().any(|key| key == *name))
        .map(|name| (*name).to_string())
        .collect::<Vec<_>>();
    rest.retain(|key| !ordered.contains(key));
    ordered.append(&mut rest);
    ordered
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) if map.contains_key("kind") => author_cell(map),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

/// Authors show their display name; anonymous ones show the tag only.
fn author_cell(map: &Map<String, Value>) -> String {
    map.get("name")
        .or_else(|| map.get("kind"))
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}
