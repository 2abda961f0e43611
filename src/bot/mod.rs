//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: routes commands and per-state text messages
//! - `callback_handler`: routes inline keyboard callback queries
//! - `dialogue_manager`: the state handlers behind both routers
//! - `ui_builder`: creates keyboards and owns button labels

pub mod callback_handler;
pub mod dialogue_manager;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

use teloxide::types::ChatId;

use crate::catalog::Catalog;

/// Shared dependencies injected into every handler.
pub struct AppContext {
    pub catalog: Catalog,
    /// Chat that receives completed orders. `None` disables forwarding.
    pub courier_chat: Option<ChatId>,
}
