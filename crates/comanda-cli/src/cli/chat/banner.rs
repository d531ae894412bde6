//! Welcome banner display for ordering sessions.

use console::style;

/// Print the welcome banner at the start of a session.
///
/// Shows the restaurant greeting, the menu source, the model in use,
/// and a hint about slash commands.
pub fn print_welcome_banner(menu_path: &str, dish_count: usize, model: &str) {
    println!();
    println!("  {} {}", "🌮", style("Comanda").cyan().bold());
    println!("  {}", style("Your table is ready. What can I get you?").dim());
    println!();
    println!(
        "  {}   {} ({} dishes)",
        style("Menu:").bold(),
        style(menu_path).dim(),
        dish_count
    );
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /confirm to place the order, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
