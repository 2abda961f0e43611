//! Conversation state for the ordering dialogue.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// Per-chat conversation state.
///
/// Order scratch data travels inside the variants, so leaving a state drops
/// it; there is no separate session bag to clear.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum OrderState {
    /// No conversation in progress.
    #[default]
    Idle,
    /// Customer is picking a residential complex from the inline list.
    SelectingAddress,
    /// Complex chosen; waiting for the free-text order.
    SendingOrder { selected_address: String },
    /// Order captured; waiting for apartment/entrance/phone details.
    WaitingForAddressDetails {
        selected_address: String,
        order_text: String,
    },
    /// Admin panel is showing.
    AdminMenu,
    /// Admin is typing the name of a new complex.
    AdminAddAddress,
    /// Admin is picking a complex to delete from the inline list.
    AdminRemoveAddress,
    /// Admin is typing the replacement product listing.
    AdminUpdateProducts,
}

/// Type alias for the per-chat ordering dialogue
pub type OrderDialogue = Dialogue<OrderState, InMemStorage<OrderState>>;

/// Validates an admin-entered complex name
pub fn validate_address_name(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    if trimmed.len() > 255 {
        return Err("too_long");
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_name_validation() {
        // Valid names
        assert!(validate_address_name("Riverside Towers").is_ok());
        assert!(validate_address_name("  Hilltop  ").is_ok());

        // Invalid names
        assert!(validate_address_name("").is_err());
        assert!(validate_address_name("   ").is_err());
        assert!(validate_address_name(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_address_name_trimming() {
        let result = validate_address_name("  Riverside  ");
        assert_eq!(result.unwrap(), "Riverside");
    }
}
