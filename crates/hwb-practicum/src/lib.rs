//! Practicum API adapter (reqwest).
//!
//! Implements the `hwb-core` ReviewApi port against the fixed homework-status
//! endpoint. Transport and response interpretation are split so the
//! classification rules are unit-testable without a live server.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use hwb_core::{errors::Error, ports::ReviewApi, Result};

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: ENDPOINT.to_string(),
            token,
        }
    }
}

#[async_trait]
impl ReviewApi for PracticumClient {
    /// One authenticated GET, no retries. The poll loop's fixed sleep is the
    /// only retry mechanism.
    async fn fetch_updates(&self, from_date: i64) -> Result<Value> {
        tracing::debug!(from_date, "requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport)?;
        interpret_response(status, &body)
    }
}

/// Classify network-level failures distinctly from endpoint-reported ones.
fn map_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Transport(format!("request to {ENDPOINT} timed out: {err}"))
    } else if err.is_connect() {
        Error::Transport(format!("connection to {ENDPOINT} failed: {err}"))
    } else {
        Error::Transport(format!("{ENDPOINT} unreachable: {err}"))
    }
}

/// Apply the endpoint's documented error conventions to a raw reply.
///
/// A usable reply is HTTP 200 with a JSON body carrying neither an `error`
/// nor a `code` key; anything else is a `Response` error.
fn interpret_response(status: StatusCode, body: &str) -> Result<Value> {
    if status != StatusCode::OK {
        return Err(Error::Response(format!(
            "unexpected status {status} from {ENDPOINT}"
        )));
    }

    let parsed: Value = serde_json::from_str(body)
        .map_err(|err| Error::Response(format!("body is not valid json: {err}")))?;

    if let Some(error) = parsed.get("error") {
        return Err(Error::Response(format!(
            "{ENDPOINT} reported error: {error}"
        )));
    }
    if let Some(code) = parsed.get("code") {
        return Err(Error::Response(format!(
            "{ENDPOINT} reported code: {code}"
        )));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_ok_statuses_are_response_errors() {
        for status in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
            match interpret_response(status, "{}") {
                Err(Error::Response(msg)) => {
                    assert!(msg.contains(status.as_str()), "{msg}")
                }
                other => panic!("expected Response error for {status}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unparseable_body_is_a_response_error() {
        match interpret_response(StatusCode::OK, "<html>teapot</html>") {
            Err(Error::Response(_)) => {}
            other => panic!("expected Response error, got {other:?}"),
        }
    }

    #[test]
    fn error_key_in_body_is_a_response_error() {
        let body = json!({ "error": "bad_request" }).to_string();
        match interpret_response(StatusCode::OK, &body) {
            Err(Error::Response(msg)) => assert!(msg.contains("bad_request"), "{msg}"),
            other => panic!("expected Response error, got {other:?}"),
        }
    }

    #[test]
    fn code_key_in_body_is_a_response_error() {
        let body = json!({ "code": "not_authenticated" }).to_string();
        match interpret_response(StatusCode::OK, &body) {
            Err(Error::Response(msg)) => {
                assert!(msg.contains("not_authenticated"), "{msg}")
            }
            other => panic!("expected Response error, got {other:?}"),
        }
    }

    #[test]
    fn valid_reply_passes_through() {
        let body = json!({
            "homeworks": [{ "status": "approved", "homework_name": "hw" }],
            "current_date": 1690000000,
        });
        let parsed = interpret_response(StatusCode::OK, &body.to_string()).unwrap();
        assert_eq!(parsed, body);
    }
}
