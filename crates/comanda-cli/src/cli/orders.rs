//! Read-only order inspection commands: list, show.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use comanda_core::order::OrderRepository;
use comanda_types::llm::MessageRole;
use comanda_types::menu::Menu;
use comanda_types::order::OrderRecord;

use crate::cli::chat::renderer::ChatRenderer;
use crate::state::AppState;

/// List recorded orders in a table, most recent first.
pub async fn list_orders(state: &AppState, limit: Option<i64>, json: bool) -> Result<()> {
    let orders = state.order_service.repo().list(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
        return Ok(());
    }

    if orders.is_empty() {
        println!();
        println!(
            "  {} No orders yet. Take one with: {}",
            style("i").blue().bold(),
            style("comanda chat").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Turns").fg(Color::White),
        Cell::new("First request").fg(Color::White),
    ]);

    for order in &orders {
        let turns = order
            .transcript
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count();

        let first_request = order
            .transcript
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| truncate(&m.content, 50))
            .unwrap_or_default();

        table.add_row(vec![
            Cell::new(order.id).fg(Color::Cyan),
            Cell::new(format_relative_time(&order.created_at)).fg(Color::DarkGrey),
            Cell::new(format!("● {}", order.status)).fg(Color::Yellow),
            Cell::new(turns),
            Cell::new(first_request),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} order{}",
        style(orders.len()).bold(),
        if orders.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show one order's full transcript.
pub async fn show_order(state: &AppState, id: i64, json: bool) -> Result<()> {
    let order = state.order_service.repo().get(id).await?;

    let Some(order) = order else {
        println!();
        println!("  {} Order #{id} not found.", style("!").yellow().bold());
        println!();
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    // Replay uses the same renderer as the live session; a missing menu
    // file just means image tags fall back to their raw references.
    let menu = state
        .menu_cache
        .get()
        .await
        .map(|m| (*m).clone())
        .unwrap_or_default();
    let renderer = ChatRenderer::new(state.config.gallery_columns);
    let image_dir = Path::new(&state.config.image_dir);

    print_order(&order, &renderer, &menu, image_dir);
    Ok(())
}

fn print_order(order: &OrderRecord, renderer: &ChatRenderer, menu: &Menu, image_dir: &Path) {
    println!();
    println!(
        "  {} Order {}",
        style("#").bold(),
        style(order.id).cyan().bold()
    );
    println!(
        "  {}  {}",
        style("Created:").bold(),
        style(order.created_at.format("%Y-%m-%d %H:%M UTC")).dim()
    );
    println!(
        "  {}   {}",
        style("Status:").bold(),
        style(&order.status).yellow()
    );
    println!();

    for message in &order.transcript {
        match message.role {
            MessageRole::User => {
                println!("  {} {}", style("You >").green().bold(), message.content);
            }
            MessageRole::Assistant => {
                println!("  {}", style("Comanda >").cyan().bold());
                print!("{}", renderer.render_final(&message.content, menu, image_dir));
            }
            MessageRole::System => {
                println!("  {} {}", style("System >").dim(), message.content);
            }
        }
    }
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}

fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let delta = Utc::now().signed_duration_since(*dt);
    if delta.num_minutes() < 1 {
        "just now".to_string()
    } else if delta.num_hours() < 1 {
        format!("{}m ago", delta.num_minutes())
    } else if delta.num_days() < 1 {
        format!("{}h ago", delta.num_hours())
    } else {
        format!("{}d ago", delta.num_days())
    }
}
