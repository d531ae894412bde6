//! Interactive ordering conversation.
//!
//! This module implements the full chat loop: streaming assistant
//! replies, image-tag gallery rendering, slash commands for the order
//! workflow (reset, undo, confirm), and quick actions that pre-fill the
//! fixed menu phrases. Entry point: `loop_runner::run_chat`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
