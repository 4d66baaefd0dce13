//! lexgate - connectivity and health diagnostics for a legal-assistant QA service
//!
//! This library provides the typed gateway client, the diagnostic probe
//! sequence, and the live health poller used by the dashboard and the CLI.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod gateway;
pub mod logging;
pub mod poller;
