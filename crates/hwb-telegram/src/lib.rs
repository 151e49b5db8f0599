//! Telegram adapter (teloxide).
//!
//! Implements the `hwb-core` Notifier port over the Telegram Bot API. One
//! chat, plain text, no retry: a failed delivery is the orchestrator's
//! problem to swallow, not ours to paper over.

use async_trait::async_trait;
use teloxide::prelude::*;

use hwb_core::{domain::ChatId, errors::Error, ports::Notifier, Result};

#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()> {
        match self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
        {
            Ok(_) => {
                tracing::debug!(chat_id = chat_id.0, "notification delivered");
                Ok(())
            }
            Err(err) => {
                tracing::error!(chat_id = chat_id.0, "failed to deliver notification: {err}");
                Err(Error::Delivery(err.to_string()))
            }
        }
    }
}
