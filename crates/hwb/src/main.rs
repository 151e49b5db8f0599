use std::sync::Arc;

use teloxide::Bot;
use tokio_util::sync::CancellationToken;

use hwb_core::{config::Config, domain::ChatId, poller::Poller, ports::SystemClock, Error};
use hwb_practicum::PracticumClient;
use hwb_telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    hwb_core::logging::init("hwb")?;

    let cfg = Config::load()?;
    let chat_id = ChatId(cfg.telegram_chat_id.trim().parse().map_err(|err| {
        Error::Config(format!("TELEGRAM_CHAT_ID must be a numeric chat id: {err}"))
    })?);

    let bot = Bot::new(cfg.telegram_token.clone());
    let api = Arc::new(PracticumClient::new(cfg.practicum_token.clone()));
    let notifier = Arc::new(TelegramNotifier::new(bot));

    let mut poller = Poller::new(api, notifier, Arc::new(SystemClock), chat_id);

    tracing::info!("starting homework status poller for chat {}", chat_id.0);
    // No graceful shutdown: the process runs until killed.
    poller.run(CancellationToken::new()).await;

    Ok(())
}
