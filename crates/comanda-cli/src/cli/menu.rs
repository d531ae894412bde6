//! Menu preview command.
//!
//! Parses the menu file the same way a chat session would and prints
//! the structured view, which is handy for spotting lines the
//! recognizer skipped before opening for business.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use comanda_core::menu::MenuCache;

use crate::state::AppState;

/// Print the parsed menu entries as a table.
pub async fn show_menu(state: &AppState, menu_path: Option<&str>, json: bool) -> Result<()> {
    let menu = match menu_path {
        Some(path) => MenuCache::new(path).get().await?,
        None => state.menu_cache.get().await?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&menu.entries)?);
        return Ok(());
    }

    if menu.entries.is_empty() {
        println!();
        println!(
            "  {} No dish lines recognized in the menu file.",
            style("!").yellow().bold()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Dish").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("Image").fg(Color::White),
    ]);

    for entry in &menu.entries {
        let image_cell = match &entry.image {
            Some(image) => Cell::new(image).fg(Color::DarkGrey),
            None => Cell::new("-").fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(&entry.name).fg(Color::Cyan),
            Cell::new(format!("${}", entry.price)),
            image_cell,
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} dish{}, {} with images",
        style(menu.entries.len()).bold(),
        if menu.entries.len() == 1 { "" } else { "es" },
        menu.image_index.len()
    );
    println!();

    Ok(())
}
