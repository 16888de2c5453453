use edu_app::Page;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Table banner for pages built from demo fixtures.
pub const DEMO_BANNER: &str = "[modo demo] datos de demostración, no provienen del servidor";

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_value(&serde_json::to_value(value)?, options))
        }
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render a controller page. JSON keeps `source` as a field; tables get a
/// banner when the data is demo data.
pub fn render_page<T: Serialize>(page: &Page<T>, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = render(page, format)?;
    if format == OutputFormat::Table && page.is_demo() {
        return Ok(format!("{DEMO_BANNER}\n{rendered}"));
    }
    Ok(rendered)
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a controller page in the requested format.
pub fn output_page<T: Serialize>(page: &Page<T>, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_page(page, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(items, options),
        Value::Object(map) => render_object(map, options),
        scalar => table::render_table(&["value"], &[vec![cell(scalar)]], options),
    }
}

/// Scalars go into one key/value table; arrays and nested objects follow as
/// titled sections.
fn render_object(map: &Map<String, Value>, options: table::TableOptions) -> String {
    let mut fields = Vec::new();
    let mut sections = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(_) | Value::Object(_) => sections.push((key, value)),
            scalar => fields.push(vec![key.clone(), cell(scalar)]),
        }
    }

    let mut blocks = Vec::with_capacity(sections.len() + 1);
    if !fields.is_empty() {
        blocks.push(table::render_table(&["key", "value"], &fields, options));
    }
    for (key, value) in sections {
        blocks.push(format!("{key}:\n{}", render_value(value, options)));
    }
    blocks.join("\n\n")
}

fn render_rows(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(sin resultados)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    // Column order follows the first row, later rows may add columns.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key.as_str());
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, options)
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
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use edu_app::Page;
    use edu_app::view::MessageView;
    use edu_client::Source;
    use serde::Serialize;
    use serde_json::json;

    use super::{DEMO_BANNER, cell, render, render_page};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        codigo: &'static str,
        cupo: u32,
    }

    fn message_page(source: Source) -> Page<MessageView> {
        Page::new(
            source,
            MessageView {
                message: "Nota registrada".into(),
            },
        )
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            codigo: "MAT101",
            cupo: 25,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["codigo"], "MAT101");
        assert_eq!(parsed["cupo"], 25);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            codigo: "MAT101",
            cupo: 25,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn page_json_carries_source_field() {
        let out = render_page(&message_page(Source::Demo), OutputFormat::Json)
            .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["source"], "demo");
        assert_eq!(parsed["message"], "Nota registrada");
        assert!(!out.contains(DEMO_BANNER));
    }

    #[test]
    fn demo_page_table_has_banner() {
        let demo = render_page(&message_page(Source::Demo), OutputFormat::Table)
            .expect("table render should work");
        assert!(demo.starts_with(DEMO_BANNER));

        let live = render_page(&message_page(Source::Live), OutputFormat::Table)
            .expect("table render should work");
        assert!(!live.contains(DEMO_BANNER));
    }

    #[test]
    fn table_renders_nested_lists_as_sections() {
        let value = json!({
            "source": "live",
            "courses": [
                {"codigo": "MAT101", "nombre": "Cálculo I", "prerequisitos": []},
                {"codigo": "FIS102", "nombre": "Física I", "prerequisitos": ["MAT101"]},
            ],
        });
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.contains("courses:"));
        assert!(out.contains("Cálculo I"));
        assert!(out.contains("source"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&json!({"enrollments": []}), OutputFormat::Table)
            .expect("table render should work");
        assert!(out.contains("(sin resultados)"));
    }

    #[test]
    fn string_lists_join_into_one_cell() {
        assert_eq!(cell(&json!(["MAT101", "FIS102"])), "MAT101, FIS102");
        assert_eq!(cell(&json!(null)), "-");
    }
}
