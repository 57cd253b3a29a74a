//! textlens - interactive text summarization and entity annotation.
//!
//! The functional core is three request/response operations: extractive
//! summarization (two interchangeable strategies), paragraph-text fetching
//! from a URL, and named-entity annotation rendered as inline HTML. A small
//! axum web UI drives them.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod server;
pub mod services;
pub mod utils;
