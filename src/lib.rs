//! Gluten ingredient analysis service
//!
//! This library provides the core of the gluten-check API: it resolves the
//! response language, asks an LLM chat-completion service for a verdict on an
//! ingredients list, and normalizes the reply into a fixed JSON contract.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
