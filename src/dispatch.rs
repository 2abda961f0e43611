//! Forwarding completed orders to the courier channel.

use std::fmt;

use teloxide::prelude::*;
use tracing::{info, warn};

/// Everything a courier needs to fulfil one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub complex: String,
    pub order_text: String,
    pub address_details: String,
    pub customer_name: String,
    pub customer_handle: Option<String>,
}

/// Errors raised while forwarding an order
#[derive(Debug)]
pub enum DispatchError {
    /// The courier chat rejected the message or the network failed
    DeliveryFailed(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::DeliveryFailed(msg) => write!(f, "delivery failed: {msg}"),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Renders the fixed courier message.
///
/// Downstream tooling parses these lines; the labels and emoji prefixes must
/// stay stable.
pub fn format_order_message(form: &OrderForm) -> String {
    let customer = match &form.customer_handle {
        Some(handle) => format!("{} (@{handle})", form.customer_name),
        None => form.customer_name.clone(),
    };
    format!(
        "📦 New order!\n🏠 Complex: {}\n🛒 Order: {}\n📍 Address details: {}\n👤 Customer: {customer}",
        form.complex, form.order_text, form.address_details
    )
}

/// Sends the order to the courier chat.
///
/// An unconfigured destination is a no-op that still reports success; the
/// customer flow continues as if the order went out.
pub async fn dispatch_order(
    bot: &Bot,
    destination: Option<ChatId>,
    form: &OrderForm,
) -> Result<(), DispatchError> {
    let Some(chat) = destination else {
        warn!("COURIER_GROUP_ID is not configured, dropping order");
        return Ok(());
    };

    bot.send_message(chat, format_order_message(form))
        .await
        .map_err(|e| DispatchError::DeliveryFailed(e.to_string()))?;
    info!(complex = %form.complex, "order forwarded to couriers");
    Ok(())
}
