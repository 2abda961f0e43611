//! Callback Handler module for processing inline keyboard callback queries

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, warn};

use crate::catalog::RemoveOutcome;
use crate::dialogue::{OrderDialogue, OrderState};

use super::dialogue_manager::show_admin_panel;
use super::ui_builder::{REMOVE_PREFIX, SELECT_PREFIX};
use super::AppContext;

/// Routes a callback query by dialogue state and payload prefix.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    dialogue: OrderDialogue,
    ctx: Arc<AppContext>,
) -> Result<()> {
    debug!(user_id = %q.from.id, data = ?q.data, "received callback query");

    let state = dialogue.get().await?.unwrap_or_default();
    let data = q.data.as_deref().unwrap_or("");

    match state {
        OrderState::SelectingAddress => {
            if let Some(address) = data.strip_prefix(SELECT_PREFIX) {
                handle_address_selected(&bot, &q, &dialogue, &ctx, address).await?;
            }
        }
        OrderState::AdminRemoveAddress => {
            if let Some(address) = data.strip_prefix(REMOVE_PREFIX) {
                handle_address_removed(&bot, &q, &dialogue, &ctx, address).await?;
            }
        }
        state => {
            warn!(user_id = %q.from.id, state = ?state, "no callback handler for current state");
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;
    Ok(())
}

/// `SelectingAddress` → `SendingOrder`: record the choice and swap the menu
/// message for the product listing plus the order prompt.
async fn handle_address_selected(
    bot: &Bot,
    q: &CallbackQuery,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
    address: &str,
) -> Result<()> {
    let listing = ctx.catalog.products()?;
    if let Some(msg) = q.message.as_ref() {
        bot.edit_message_text(
            msg.chat().id,
            msg.id(),
            format!("Complex: {address}\n\n{listing}\n\nSend a message with your order:"),
        )
        .await?;
    }
    dialogue
        .update(OrderState::SendingOrder {
            selected_address: address.to_string(),
        })
        .await?;
    Ok(())
}

/// `AdminRemoveAddress` → `AdminMenu`: delete the complex and report the
/// outcome in place.
async fn handle_address_removed(
    bot: &Bot,
    q: &CallbackQuery,
    dialogue: &OrderDialogue,
    ctx: &AppContext,
    address: &str,
) -> Result<()> {
    let reply = match ctx.catalog.remove_address(address).await? {
        RemoveOutcome::Removed => format!("Complex '{address}' removed."),
        RemoveOutcome::NotFound => format!("Complex '{address}' was not found."),
    };
    if let Some(msg) = q.message.as_ref() {
        bot.edit_message_text(msg.chat().id, msg.id(), reply).await?;
    }

    // An edited inline message cannot carry the reply keyboard, so the panel
    // comes back as a fresh message.
    show_admin_panel(bot, dialogue.chat_id()).await?;
    dialogue.update(OrderState::AdminMenu).await?;
    Ok(())
}
