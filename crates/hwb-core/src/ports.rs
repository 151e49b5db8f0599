use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde_json::Value;

use crate::{domain::ChatId, Result};

/// Port for the homework-review API.
///
/// One operation: fetch everything reviewed since `from_date` (Unix
/// timestamp). The HTTP adapter lives in `hwb-practicum`; tests inject fakes.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    async fn fetch_updates(&self, from_date: i64) -> Result<Value>;
}

/// Port for the outbound notification channel.
///
/// Telegram is the only implementation today; the shape leaves room for other
/// messengers behind the same interface.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()>;
}

/// Port for "now" and sleeping, so the poll loop can run in tests without
/// real delays.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
    async fn sleep(&self, period: Duration);
}

/// Wall-clock / tokio-timer implementation used by the binary.
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    async fn sleep(&self, period: Duration) {
        tokio::time::sleep(period).await;
    }
}
