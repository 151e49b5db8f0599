/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the poll loop
/// can match on error kind (recoverable vs delivery vs fatal-at-startup)
/// instead of catching broad error categories.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required environment variables are absent or empty. Fatal at startup.
    #[error("missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("config error: {0}")]
    Config(String),

    /// The endpoint answered, but not with a usable payload: bad HTTP status,
    /// unparseable body, or an `error`/`code` key in the body.
    #[error("bad api response: {0}")]
    Response(String),

    /// Network-level failure: timeout, connection failure, or other transport
    /// breakage before a response could be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response parsed, but its shape does not match the documented API.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// A mapping is missing a key the API documents as present.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A homework status outside the known verdict table.
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    /// The notification could not be handed to the messaging backend.
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

pub type Result<T> = std::result::Result<T, Error>;
