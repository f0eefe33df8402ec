//! `lexm decode-error`: classify a captured error response.

use std::path::Path;

use anyhow::Result;
use console::style;

use lexmodel_core::ServiceError;

use super::request::read_input;

pub async fn decode_error(
    status: u16,
    error_type: Option<&str>,
    retry_after: Option<&str>,
    file: &Path,
    json: bool,
) -> Result<()> {
    let body = read_input(file).await?;
    let error = classify(status, error_type, retry_after, body.as_bytes());

    if json {
        println!("{}", serde_json::to_string_pretty(&error_json(status, &error))?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} (HTTP {})",
        style("✗").red().bold(),
        style(error.code()).cyan(),
        status
    );
    println!("  {}", error);
    match &error {
        ServiceError::LimitExceeded {
            retry_after_seconds: Some(seconds),
            ..
        } => println!("  Retry after: {}s", style(seconds).bold()),
        ServiceError::ResourceInUse {
            reference_type,
            example_reference,
            ..
        } => {
            if let Some(kind) = reference_type {
                println!("  Referenced by: {}", style(kind).yellow());
            }
            if let Some(reference) = example_reference {
                println!(
                    "  Example: {} version {}",
                    reference.name.as_deref().unwrap_or("?"),
                    reference.version.as_deref().unwrap_or("?")
                );
            }
        }
        _ => {}
    }
    println!(
        "  Retryable: {}",
        if error.is_retryable() {
            style("yes").green()
        } else {
            style("no").dim()
        }
    );
    println!();

    Ok(())
}

fn classify(
    status: u16,
    error_type: Option<&str>,
    retry_after: Option<&str>,
    body: &[u8],
) -> ServiceError {
    let mut headers = Vec::new();
    if let Some(value) = error_type {
        headers.push(("x-amzn-ErrorType", value));
    }
    if let Some(value) = retry_after {
        headers.push(("Retry-After", value));
    }
    ServiceError::from_response(status, &headers, body)
}

fn error_json(status: u16, error: &ServiceError) -> serde_json::Value {
    let mut out = serde_json::json!({
        "status": status,
        "code": error.code(),
        "message": error.to_string(),
        "retryable": error.is_retryable(),
    });
    match error {
        ServiceError::LimitExceeded {
            retry_after_seconds,
            ..
        } => {
            out["retryAfterSeconds"] = serde_json::json!(retry_after_seconds);
        }
        ServiceError::ResourceInUse {
            reference_type,
            example_reference,
            ..
        } => {
            out["referenceType"] = serde_json::json!(reference_type);
            out["exampleReference"] = serde_json::json!(example_reference.as_ref().map(|r| {
                serde_json::json!({ "name": r.name, "version": r.version })
            }));
        }
        _ => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_flags_as_headers() {
        let error = classify(
            429,
            Some("LimitExceededException"),
            Some("12"),
            br#"{"message": "too many"}"#,
        );
        let out = error_json(429, &error);
        assert_eq!(out["code"], "LimitExceededException");
        assert_eq!(out["retryAfterSeconds"], "12");
        assert_eq!(out["retryable"], true);
    }

    #[test]
    fn resource_in_use_reference_in_json() {
        let body = br#"{"referenceType": "BotAlias", "exampleReference": {"name": "prod", "version": "2"}}"#;
        let error = classify(400, Some("ResourceInUseException"), None, body);
        let out = error_json(400, &error);
        assert_eq!(out["referenceType"], "BotAlias");
        assert_eq!(out["exampleReference"]["name"], "prod");
    }
}
