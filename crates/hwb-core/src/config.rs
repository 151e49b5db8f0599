use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// Names of the required environment variables, in reporting order.
pub const CREDENTIAL_NAMES: [&str; 3] =
    ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Typed configuration: the three secrets the bot needs.
///
/// All three are opaque strings here; the binary parses the chat id into a
/// numeric `ChatId` when wiring the Telegram adapter.
#[derive(Clone, Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    /// Load configuration from the process environment, after a best-effort
    /// `.env` read that never overrides already-set variables.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any name→value lookup. Missing and empty values are treated
    /// the same and reported together, so a broken deployment surfaces every
    /// problem in one message.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let values: Vec<Option<String>> = CREDENTIAL_NAMES
            .iter()
            .map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
            .collect();

        let missing: Vec<String> = CREDENTIAL_NAMES
            .iter()
            .zip(&values)
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            tracing::error!("missing credentials: {}", missing.join(", "));
            return Err(Error::MissingCredentials(missing));
        }

        let mut values = values.into_iter().flatten();
        Ok(Self {
            practicum_token: values.next().unwrap_or_default(),
            telegram_token: values.next().unwrap_or_default(),
            telegram_chat_id: values.next().unwrap_or_default(),
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn loads_all_three_credentials() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "t-token"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap();
        assert_eq!(cfg.practicum_token, "p-token");
        assert_eq!(cfg.telegram_token, "t-token");
        assert_eq!(cfg.telegram_chat_id, "12345");
    }

    #[test]
    fn missing_variable_is_fatal_and_named() {
        let err = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap_err();
        match err {
            Error::MissingCredentials(names) => {
                assert_eq!(names, vec!["TELEGRAM_TOKEN".to_string()]);
            }
            other => panic!("expected MissingCredentials, got {other:?}"),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", ""),
            ("TELEGRAM_TOKEN", "   "),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap_err();
        match err {
            Error::MissingCredentials(names) => {
                assert_eq!(
                    names,
                    vec!["PRACTICUM_TOKEN".to_string(), "TELEGRAM_TOKEN".to_string()]
                );
            }
            other => panic!("expected MissingCredentials, got {other:?}"),
        }
    }
}
