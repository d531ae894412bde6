//! Business logic for Comanda.
//!
//! Everything here is backend-agnostic: the menu loader and cache, the
//! prompt composer, the conversation session engine, the reply segmenter
//! with its gallery layout policies, the order service, and the
//! `LlmProvider` seam. Concrete backends (SQLite, the OpenAI-compatible
//! HTTP client) live in `comanda-infra`.

pub mod chat;
pub mod llm;
pub mod menu;
pub mod order;
pub mod prompt;
pub mod render;
