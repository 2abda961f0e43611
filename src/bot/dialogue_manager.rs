//! Dialogue Manager module holding the per-state conversation handlers

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info};

use crate::catalog::{AddOutcome, MAX_ADDRESSES};
use crate::dialogue::{validate_address_name, OrderDialogue, OrderState};
use crate::dispatch::{dispatch_order, OrderForm};
use crate::roles::{resolve_role, UserRole};

use super::ui_builder::{
    address_removal_keyboard, address_selection_keyboard, admin_menu_keyboard, ADMIN_PANEL_TITLE,
    BTN_ADD_ADDRESS, BTN_CUSTOMER_MODE, BTN_REMOVE_ADDRESS, BTN_UPDATE_PRODUCTS,
};
use super::AppContext;

/// `/start`: reset the session and re-derive the entry state from the
/// caller's role.
pub async fn handle_start(
    bot: &Bot,
    msg: &Message,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
) -> Result<()> {
    let Some(user) = msg.from.as_ref() else {
        // Channel posts and service messages carry no sender.
        return Ok(());
    };

    match resolve_role(&ctx.catalog, user.id)? {
        UserRole::Admin => {
            info!(user_id = %user.id, "admin entered the panel");
            show_admin_panel(bot, msg.chat.id).await?;
            dialogue.update(OrderState::AdminMenu).await?;
            Ok(())
        }
        UserRole::Customer => enter_customer_flow(bot, msg.chat.id, dialogue, ctx).await,
    }
}

/// Role-independent customer entry, shared by `/start` and the admin's
/// "customer mode" button (which forces the customer flow without
/// re-resolving the identity).
pub async fn enter_customer_flow(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
) -> Result<()> {
    let addresses = ctx.catalog.addresses()?;
    if addresses.is_empty() {
        bot.send_message(
            chat_id,
            "No residential complexes are available right now. \
             Please contact the administrator.",
        )
        .await?;
        dialogue.exit().await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Select your residential complex:")
        .reply_markup(address_selection_keyboard(&addresses))
        .await?;
    dialogue.update(OrderState::SelectingAddress).await?;
    Ok(())
}

/// Admin menu label dispatch. Unrecognized text re-displays the panel and
/// stays in `AdminMenu`.
pub async fn handle_admin_menu_input(
    bot: &Bot,
    msg: &Message,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
    text: &str,
) -> Result<()> {
    match text {
        BTN_CUSTOMER_MODE => enter_customer_flow(bot, msg.chat.id, dialogue, ctx).await,
        BTN_ADD_ADDRESS => {
            bot.send_message(msg.chat.id, "Send the name of the new residential complex:")
                .await?;
            dialogue.update(OrderState::AdminAddAddress).await?;
            Ok(())
        }
        BTN_REMOVE_ADDRESS => {
            let addresses = ctx.catalog.addresses()?;
            if addresses.is_empty() {
                bot.send_message(msg.chat.id, "The complex list is empty.")
                    .await?;
                return Ok(());
            }
            bot.send_message(msg.chat.id, "Select the complex to remove:")
                .reply_markup(address_removal_keyboard(&addresses))
                .await?;
            dialogue.update(OrderState::AdminRemoveAddress).await?;
            Ok(())
        }
        BTN_UPDATE_PRODUCTS => {
            let listing = ctx.catalog.products()?;
            bot.send_message(
                msg.chat.id,
                format!("Current product list:\n{listing}\n\nSend the new product list:"),
            )
            .await?;
            dialogue.update(OrderState::AdminUpdateProducts).await?;
            Ok(())
        }
        _ => {
            bot.send_message(msg.chat.id, "Pick an action:")
                .reply_markup(admin_menu_keyboard())
                .await?;
            Ok(())
        }
    }
}

/// `AdminAddAddress` text: validate, persist, report the outcome, and return
/// to the menu in every case.
pub async fn handle_admin_add_address_input(
    bot: &Bot,
    msg: &Message,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
    text: &str,
) -> Result<()> {
    match validate_address_name(text) {
        Ok(name) => {
            let reply = match ctx.catalog.add_address(&name).await? {
                AddOutcome::Added => format!("Complex '{name}' added."),
                AddOutcome::Duplicate => format!("Complex '{name}' already exists."),
                AddOutcome::CapReached => format!(
                    "The maximum of {MAX_ADDRESSES} complexes is reached. Remove one first."
                ),
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
        Err("too_long") => {
            bot.send_message(msg.chat.id, "That name is too long.")
                .await?;
        }
        Err(_) => {
            bot.send_message(msg.chat.id, "A complex name cannot be blank.")
                .await?;
        }
    }

    show_admin_panel(bot, msg.chat.id).await?;
    dialogue.update(OrderState::AdminMenu).await?;
    Ok(())
}

/// `AdminUpdateProducts` text: overwrite the listing wholesale.
pub async fn handle_admin_update_products_input(
    bot: &Bot,
    msg: &Message,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
    text: &str,
) -> Result<()> {
    ctx.catalog.set_products(text).await?;
    bot.send_message(msg.chat.id, "Product list updated.")
        .await?;

    show_admin_panel(bot, msg.chat.id).await?;
    dialogue.update(OrderState::AdminMenu).await?;
    Ok(())
}

/// `SendingOrder` text: capture the order, ask for delivery details.
pub async fn handle_order_input(
    bot: &Bot,
    msg: &Message,
    dialogue: &OrderDialogue,
    selected_address: String,
    text: &str,
) -> Result<()> {
    bot.send_message(
        msg.chat.id,
        "Specify the exact address (apartment, entrance, phone number):",
    )
    .await?;
    dialogue
        .update(OrderState::WaitingForAddressDetails {
            selected_address,
            order_text: text.to_string(),
        })
        .await?;
    Ok(())
}

/// `WaitingForAddressDetails` text: assemble the order, forward it, report
/// the outcome, and finish the conversation either way.
pub async fn handle_address_details_input(
    bot: &Bot,
    msg: &Message,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
    selected_address: String,
    order_text: String,
    text: &str,
) -> Result<()> {
    let (customer_name, customer_handle) = match msg.from.as_ref() {
        Some(user) => (user.first_name.clone(), user.username.clone()),
        None => ("Unknown".to_string(), None),
    };

    let form = OrderForm {
        complex: selected_address,
        order_text,
        address_details: text.to_string(),
        customer_name,
        customer_handle,
    };

    match dispatch_order(bot, ctx.courier_chat, &form).await {
        Ok(()) => {
            bot.send_message(msg.chat.id, "Your order has been forwarded to the couriers.")
                .await?;
        }
        Err(e) => {
            error!(chat_id = %msg.chat.id, error = %e, "failed to forward order");
            bot.send_message(
                msg.chat.id,
                "Something went wrong while forwarding your order. Please try again later.",
            )
            .await?;
        }
    }

    dialogue.exit().await?;
    Ok(())
}

/// Sends the admin panel with its reply keyboard.
pub async fn show_admin_panel(bot: &Bot, chat_id: ChatId) -> Result<()> {
    bot.send_message(chat_id, ADMIN_PANEL_TITLE)
        .reply_markup(admin_menu_keyboard())
        .await?;
    Ok(())
}
