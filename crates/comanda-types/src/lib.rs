//! Shared domain types for Comanda.
//!
//! This crate holds the data shapes used across the workspace: chat
//! messages and LLM streaming events, menu entries, order records,
//! configuration, and the error enums. It has no I/O and no business
//! logic; those live in `comanda-core` and `comanda-infra`.

pub mod config;
pub mod error;
pub mod llm;
pub mod menu;
pub mod order;
