use serde_json::Value;

use crate::{errors::Error, Result};

/// Fixed verdict table: known review statuses and their user-facing text.
pub fn verdict_text(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Render one homework record as the notification sentence.
///
/// An unrecognized status is a hard error, not a skip. That is deliberately
/// strict for a polling notifier (a new status value upstream stalls
/// notifications until someone looks); kept as-is pending a policy review.
pub fn format_verdict(homework: &Value) -> Result<String> {
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MissingField("status".to_string()))?;
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MissingField("homework_name".to_string()))?;

    let verdict = verdict_text(status)
        .ok_or_else(|| Error::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_all_known_statuses() {
        for status in ["approved", "reviewing", "rejected"] {
            let hw = json!({ "status": status, "homework_name": "fractals" });
            let sentence = format_verdict(&hw).unwrap();
            assert!(sentence.contains("\"fractals\""), "{sentence}");
            assert!(sentence.ends_with(verdict_text(status).unwrap()), "{sentence}");
        }
    }

    #[test]
    fn unknown_status_is_a_hard_error() {
        let hw = json!({ "status": "resubmitted", "homework_name": "fractals" });
        match format_verdict(&hw) {
            Err(Error::UnknownStatus(status)) => assert_eq!(status, "resubmitted"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn missing_status_or_name_is_rejected() {
        let no_status = json!({ "homework_name": "fractals" });
        match format_verdict(&no_status) {
            Err(Error::MissingField(key)) => assert_eq!(key, "status"),
            other => panic!("expected MissingField, got {other:?}"),
        }

        let no_name = json!({ "status": "approved" });
        match format_verdict(&no_name) {
            Err(Error::MissingField(key)) => assert_eq!(key, "homework_name"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
