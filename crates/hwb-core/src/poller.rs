//! The polling orchestrator: fetch → validate → format → notify → sleep.
//!
//! Single task, fully sequential. The only mutable state is the last
//! notification text sent; the fetch cursor is computed once at startup and
//! never advanced (every cycle re-requests the same 30-day window — upstream
//! behavior, kept until a requirements review says otherwise).

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Local};
use tokio_util::sync::CancellationToken;

use crate::{
    domain::ChatId,
    errors::Error,
    ports::{Clock, Notifier, ReviewApi},
    response, verdict, Result,
};

/// Fixed sleep between cycles. This is also the only retry mechanism: a
/// failed cycle just waits the same period and tries again.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// How far back the fetch window starts.
pub const LOOKBACK_DAYS: i64 = 30;

pub struct Poller {
    api: Arc<dyn ReviewApi>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    chat_id: ChatId,
    retry_period: Duration,
    from_date: i64,
    current_status: String,
}

impl Poller {
    pub fn new(
        api: Arc<dyn ReviewApi>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        chat_id: ChatId,
    ) -> Self {
        let from_date = initial_cursor(clock.now());
        Self {
            api,
            notifier,
            clock,
            chat_id,
            retry_period: RETRY_PERIOD,
            from_date,
            current_status: String::new(),
        }
    }

    /// Run until the token is cancelled. The binary hands in a token it never
    /// cancels; there is no graceful-shutdown path beyond killing the process.
    pub async fn run(&mut self, cancel: CancellationToken) {
        loop {
            self.cycle().await;
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = self.clock.sleep(self.retry_period) => {}
            }
        }
    }

    /// One poll cycle. Never returns an error: everything recoverable is
    /// reported here so the loop outlives any single bad cycle.
    pub async fn cycle(&mut self) {
        match self.poll_once().await {
            Ok(()) => {}
            // The notifier already logged the failure; a follow-up
            // notification about a notification failure would only storm.
            Err(Error::Delivery(_)) => {}
            Err(err) => {
                tracing::error!("poll cycle failed: {err}");
                let notice = format!("Сбой в работе программы: {err}");
                // Best effort; a failure here is logged by the notifier and
                // otherwise dropped.
                let _ = self.notifier.send_message(self.chat_id, &notice).await;
            }
        }
    }

    async fn poll_once(&mut self) -> Result<()> {
        let response = self.api.fetch_updates(self.from_date).await?;
        let homeworks = response::extract_homeworks(&response)?;

        let Some(latest) = homeworks.first() else {
            tracing::debug!("no homeworks in the fetch window");
            return Ok(());
        };

        let verdict = verdict::format_verdict(latest)?;
        if verdict == self.current_status {
            tracing::debug!("review status unchanged");
            return Ok(());
        }

        // Update before sending: a lost notification is not re-sent for the
        // same status on the next cycle (upstream behavior).
        self.current_status = verdict.clone();
        self.notifier.send_message(self.chat_id, &verdict).await?;
        Ok(())
    }
}

fn initial_cursor(now: DateTime<Local>) -> i64 {
    (now - chrono::Duration::days(LOOKBACK_DAYS)).timestamp()
}
