//! `lexm operations`: the operation catalog.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use lexmodel_core::{HttpMethod, OPERATIONS};

pub fn list_operations(json: bool) -> Result<()> {
    if json {
        let ops: Vec<_> = OPERATIONS
            .iter()
            .map(|op| {
                serde_json::json!({
                    "name": op.name,
                    "method": op.method.as_str(),
                    "path": op.path,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&ops)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Operation").fg(Color::White),
        Cell::new("Method").fg(Color::White),
        Cell::new("Path").fg(Color::White),
    ]);

    for op in OPERATIONS {
        let method = match op.method {
            HttpMethod::Get => Cell::new("GET").fg(Color::Green),
            HttpMethod::Put => Cell::new("PUT").fg(Color::Yellow),
            HttpMethod::Post => Cell::new("POST").fg(Color::Blue),
            HttpMethod::Delete => Cell::new("DELETE").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(op.name).fg(Color::Cyan),
            method,
            Cell::new(op.path),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} operations", style(OPERATIONS.len()).bold());
    println!();

    Ok(())
}
