//! Main chat loop orchestration.
//!
//! Coordinates the complete ordering conversation: menu loading, system
//! prompt composition, provider setup, welcome banner, input loop with
//! streaming replies, slash commands, and order confirmation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use console::style;

use comanda_core::chat::{ChatSession, SendOutcome, UndoOutcome};
use comanda_core::chat::session::SessionSettings;
use comanda_core::menu::MenuCache;
use comanda_core::prompt;
use comanda_infra::llm::OpenAiCompatibleProvider;
use comanda_infra::secret::require_api_key;
use comanda_types::error::OrderError;
use comanda_types::menu::Menu;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand, FULL_MENU_PHRASE, PROMOTIONS_PHRASE};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive ordering conversation.
pub async fn run_chat(
    state: &AppState,
    menu_override: Option<&str>,
    model_override: Option<&str>,
) -> anyhow::Result<()> {
    // Both fatal startup conditions surface here, before any UI.
    let api_key = require_api_key()?;

    let menu = match menu_override {
        Some(path) => MenuCache::new(path).get().await?,
        None => state.menu_cache.get().await?,
    };

    let model = model_override.unwrap_or(&state.config.model).to_string();
    let system_prompt = prompt::compose(&menu.raw);

    let provider = OpenAiCompatibleProvider::deepseek(api_key, &model);
    let settings = SessionSettings {
        model: model.clone(),
        temperature: state.config.temperature,
        max_tokens: state.config.max_tokens,
    };
    let mut session = ChatSession::start(provider, system_prompt, settings);

    let menu_path = menu_override.unwrap_or(&state.config.menu_path);
    print_welcome_banner(menu_path, menu.entries.len(), &model);

    let renderer = ChatRenderer::new(state.config.gallery_columns);
    let image_dir = PathBuf::from(&state.config.image_dir);

    let prompt_line = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt_line)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Hasta pronto.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep ordering.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Hasta pronto.").dim());
                            break;
                        }
                        ChatCommand::Reset => {
                            session.reset();
                            println!(
                                "\n  {} Conversation cleared. What can I get you?\n",
                                style("*").cyan().bold()
                            );
                            continue;
                        }
                        ChatCommand::Undo => {
                            match session.undo() {
                                UndoOutcome::Removed => println!(
                                    "\n  {} Last exchange removed.\n",
                                    style("*").cyan().bold()
                                ),
                                UndoOutcome::NothingToRemove => println!(
                                    "\n  {} Nothing to remove yet.\n",
                                    style("!").yellow().bold()
                                ),
                            }
                            continue;
                        }
                        ChatCommand::Confirm => {
                            confirm_order(state, &session).await;
                            continue;
                        }
                        ChatCommand::FullMenu => {
                            run_turn(&mut session, FULL_MENU_PHRASE, &renderer, &menu, &image_dir)
                                .await;
                            continue;
                        }
                        ChatCommand::Promotions => {
                            run_turn(&mut session, PROMOTIONS_PHRASE, &renderer, &menu, &image_dir)
                                .await;
                            continue;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                run_turn(&mut session, &text, &renderer, &menu, &image_dir).await;
            }
        }
    }

    Ok(())
}

/// One streamed conversation turn with spinner and gallery rendering.
async fn run_turn<P: comanda_core::llm::LlmProvider>(
    session: &mut ChatSession<P>,
    text: &str,
    renderer: &ChatRenderer,
    menu: &Arc<Menu>,
    image_dir: &std::path::Path,
) {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let model = session.settings().model.clone();
    let mut first_token = true;
    let outcome = session
        .send(text, |fragment| {
            if first_token {
                spinner.finish_and_clear();
                first_token = false;
                print!("\n  {} ", style("Comanda >").cyan().bold());
                let _ = std::io::stdout().flush();
            }
            renderer.print_streaming_token(fragment);
        })
        .await;

    if first_token {
        spinner.finish_and_clear();
    }

    match outcome {
        Ok(SendOutcome::Ignored) => {}
        Ok(SendOutcome::Replied(reply)) => {
            println!();
            renderer.print_galleries(&reply.content, menu, image_dir);
            renderer.print_stats_footer(reply.usage.output_tokens, reply.response_ms, &model);
            println!();
        }
        Err(e) => {
            eprintln!("\n  {} {e}", style("!").red().bold());
            eprintln!(
                "  {}",
                style("Your message was not added. Try again, or /exit to quit.").dim()
            );
        }
    }
}

/// Record the current conversation as a pending order.
async fn confirm_order<P: comanda_core::llm::LlmProvider>(
    state: &AppState,
    session: &ChatSession<P>,
) {
    let transcript = session.transcript().without_system();
    match state.order_service.confirm(transcript).await {
        Ok(record) => {
            println!(
                "\n  {} Order {} recorded ({}). The kitchen has it from here.\n",
                style("✓").green().bold(),
                style(format!("#{}", record.id)).cyan().bold(),
                record.status
            );
        }
        Err(OrderError::EmptyTranscript) => {
            println!(
                "\n  {} Nothing to confirm yet. Order something first.\n",
                style("!").yellow().bold()
            );
        }
        Err(e) => {
            eprintln!(
                "\n  {} Could not record the order: {e}",
                style("!").red().bold()
            );
            eprintln!("  {}\n", style("Your conversation is intact. Try /confirm again.").dim());
        }
    }
}
