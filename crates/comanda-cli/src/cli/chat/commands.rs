//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the order
//! workflow plus the two quick actions from the original side panel,
//! which pre-fill fixed menu phrases instead of free text.

use console::style;

/// Fixed phrase sent by the full-menu quick action.
pub const FULL_MENU_PHRASE: &str = "show full menu";

/// Fixed phrase sent by the promotions quick action.
pub const PROMOTIONS_PHRASE: &str = "show promotions";

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Discard history and start the conversation over.
    Reset,
    /// Remove the last user/assistant exchange.
    Undo,
    /// Record the conversation as a pending order.
    Confirm,
    /// Quick action: ask for the full menu.
    FullMenu,
    /// Quick action: ask for current promotions.
    Promotions,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    match trimmed.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        "/reset" => Some(ChatCommand::Reset),
        "/undo" => Some(ChatCommand::Undo),
        "/confirm" => Some(ChatCommand::Confirm),
        "/menu" => Some(ChatCommand::FullMenu),
        "/promos" | "/promotions" => Some(ChatCommand::Promotions),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     {}", style("/menu").cyan(), "Ask for the full menu");
    println!("  {}   {}", style("/promos").cyan(), "Ask for current promotions");
    println!("  {}  {}", style("/confirm").cyan(), "Record the order");
    println!("  {}     {}", style("/undo").cyan(), "Remove the last exchange");
    println!("  {}    {}", style("/reset").cyan(), "Start the conversation over");
    println!("  {}    {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}     {}", style("/help").cyan(), "Show this help message");
    println!("  {}     {}", style("/exit").cyan(), "End the session");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_order_workflow() {
        assert_eq!(parse("/reset"), Some(ChatCommand::Reset));
        assert_eq!(parse("/undo"), Some(ChatCommand::Undo));
        assert_eq!(parse("/confirm"), Some(ChatCommand::Confirm));
    }

    #[test]
    fn test_parse_quick_actions() {
        assert_eq!(parse("/menu"), Some(ChatCommand::FullMenu));
        assert_eq!(parse("/promos"), Some(ChatCommand::Promotions));
        assert_eq!(parse("/promotions"), Some(ChatCommand::Promotions));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("dos tacos al pastor"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
