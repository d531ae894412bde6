//! Infrastructure backends for Comanda.
//!
//! Concrete implementations of the seams defined in `comanda-core`: the
//! OpenAI-compatible completion client, the SQLite order store, plus
//! configuration and credential loading.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;
