//! UI Builder module for creating keyboards and button labels

use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

/// Title shown above the admin reply keyboard.
pub const ADMIN_PANEL_TITLE: &str = "Admin panel";

// Reply keyboard labels; the admin menu matches incoming text against them
// verbatim.
pub const BTN_CUSTOMER_MODE: &str = "👤 Customer mode";
pub const BTN_ADD_ADDRESS: &str = "➕ Add complex";
pub const BTN_REMOVE_ADDRESS: &str = "➖ Remove complex";
pub const BTN_UPDATE_PRODUCTS: &str = "📝 Update products";

// Callback payload prefixes. These are the bot's own protocol, not
// Telegram's; the callback handler strips them to recover the complex name.
pub const SELECT_PREFIX: &str = "address_";
pub const REMOVE_PREFIX: &str = "remove_";

/// The admin home menu.
pub fn admin_menu_keyboard() -> KeyboardMarkup {
    let mut keyboard = KeyboardMarkup::new([
        vec![KeyboardButton::new(BTN_CUSTOMER_MODE)],
        vec![
            KeyboardButton::new(BTN_ADD_ADDRESS),
            KeyboardButton::new(BTN_REMOVE_ADDRESS),
        ],
        vec![KeyboardButton::new(BTN_UPDATE_PRODUCTS)],
    ]);
    keyboard.resize_keyboard = true;
    keyboard
}

/// One button per complex, payload `address_<name>`.
pub fn address_selection_keyboard(addresses: &[String]) -> InlineKeyboardMarkup {
    address_keyboard(addresses, SELECT_PREFIX)
}

/// Same list, removal payloads (`remove_<name>`).
pub fn address_removal_keyboard(addresses: &[String]) -> InlineKeyboardMarkup {
    address_keyboard(addresses, REMOVE_PREFIX)
}

fn address_keyboard(addresses: &[String], prefix: &str) -> InlineKeyboardMarkup {
    let buttons: Vec<Vec<InlineKeyboardButton>> = addresses
        .iter()
        .map(|address| {
            vec![InlineKeyboardButton::callback(
                address.clone(),
                format!("{prefix}{address}"),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn admin_menu_has_all_four_actions() {
        let keyboard = admin_menu_keyboard();
        let labels: Vec<&str> = keyboard
            .keyboard
            .iter()
            .flatten()
            .map(|button| button.text.as_str())
            .collect();

        assert_eq!(
            labels,
            vec![
                BTN_CUSTOMER_MODE,
                BTN_ADD_ADDRESS,
                BTN_REMOVE_ADDRESS,
                BTN_UPDATE_PRODUCTS
            ]
        );
        assert!(keyboard.resize_keyboard);
    }

    #[test]
    fn selection_keyboard_encodes_addresses() {
        let addresses = vec!["Riverside".to_string(), "Hilltop".to_string()];
        let keyboard = address_selection_keyboard(&addresses);

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        let first = &keyboard.inline_keyboard[0][0];
        assert_eq!(first.text, "Riverside");
        match &first.kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "address_Riverside"),
            other => panic!("unexpected button kind: {other:?}"),
        }
    }

    #[test]
    fn removal_keyboard_uses_the_remove_prefix() {
        let addresses = vec!["Riverside".to_string()];
        let keyboard = address_removal_keyboard(&addresses);

        match &keyboard.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "remove_Riverside"),
            other => panic!("unexpected button kind: {other:?}"),
        }
    }

    #[test]
    fn empty_address_list_builds_an_empty_keyboard() {
        let keyboard = address_selection_keyboard(&[]);
        assert!(keyboard.inline_keyboard.is_empty());
    }
}
