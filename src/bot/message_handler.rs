//! Message Handler module routing commands and per-state text input

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, warn};

use crate::dialogue::{OrderDialogue, OrderState};

use super::dialogue_manager::{
    handle_address_details_input, handle_admin_add_address_input, handle_admin_menu_input,
    handle_admin_update_products_input, handle_order_input, handle_start,
};
use super::AppContext;

const START_COMMAND: &str = "/start";
const CANCEL_COMMAND: &str = "/cancel";

/// Routes an incoming message: global commands first, then the handler
/// registered for the chat's current dialogue state.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    dialogue: OrderDialogue,
    ctx: Arc<AppContext>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "ignoring non-text message");
        return Ok(());
    };

    // Entry point and global fallback, valid from any state.
    if text == START_COMMAND {
        return handle_start(&bot, &msg, &dialogue, &ctx).await;
    }
    if text == CANCEL_COMMAND {
        bot.send_message(msg.chat.id, "Operation cancelled.").await?;
        dialogue.exit().await?;
        return Ok(());
    }
    if text.starts_with('/') {
        warn!(chat_id = %msg.chat.id, command = text, "unknown command");
        return Ok(());
    }

    match dialogue.get().await?.unwrap_or_default() {
        OrderState::AdminMenu => handle_admin_menu_input(&bot, &msg, &dialogue, &ctx, text).await,
        OrderState::AdminAddAddress => {
            handle_admin_add_address_input(&bot, &msg, &dialogue, &ctx, text).await
        }
        OrderState::AdminUpdateProducts => {
            handle_admin_update_products_input(&bot, &msg, &dialogue, &ctx, text).await
        }
        OrderState::SendingOrder { selected_address } => {
            handle_order_input(&bot, &msg, &dialogue, selected_address, text).await
        }
        OrderState::WaitingForAddressDetails {
            selected_address,
            order_text,
        } => {
            handle_address_details_input(
                &bot,
                &msg,
                &dialogue,
                &ctx,
                selected_address,
                order_text,
                text,
            )
            .await
        }
        state @ (OrderState::Idle
        | OrderState::SelectingAddress
        | OrderState::AdminRemoveAddress) => {
            // These states only react to buttons or /start; plain text has no
            // handler and the state is left untouched.
            warn!(chat_id = %msg.chat.id, state = ?state, "no text handler for current state");
            Ok(())
        }
    }
}
