use anyhow::Result;

use orderbot::dialogue::{validate_address_name, OrderState};

#[test]
fn default_state_is_idle() {
    assert!(matches!(OrderState::default(), OrderState::Idle));
}

#[test]
fn order_scratch_travels_with_the_state() {
    let state = OrderState::WaitingForAddressDetails {
        selected_address: "Riverside".to_string(),
        order_text: "2 apples".to_string(),
    };

    match state {
        OrderState::WaitingForAddressDetails {
            selected_address,
            order_text,
        } => {
            assert_eq!(selected_address, "Riverside");
            assert_eq!(order_text, "2 apples");
        }
        _ => panic!("unexpected dialogue state"),
    }
}

/// Test that dialogue states survive serialization, keeping checkpointed
/// storage backends an option.
#[test]
fn states_round_trip_through_serde() -> Result<()> {
    let state = OrderState::SendingOrder {
        selected_address: "Hilltop".to_string(),
    };

    let serialized = serde_json::to_string(&state)?;
    let deserialized: OrderState = serde_json::from_str(&serialized)?;

    assert!(matches!(
        deserialized,
        OrderState::SendingOrder { selected_address } if selected_address == "Hilltop"
    ));
    Ok(())
}

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
