//! `lexm validate` and `lexm render`: work on one request document.

use std::path::Path;

use anyhow::{Context, Result, bail};
use console::style;
use tokio::io::AsyncReadExt;

use lexmodel_core::operation::PreparedRequest;
use lexmodel_core::{AnyRequest, PrepareError, ValidationReport};
use lexmodel_types::config::{ClientConfig, ValidationMode};

/// Read a whole input file, or stdin when `path` is `-`.
pub async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

async fn load_request(operation: &str, file: &Path) -> Result<AnyRequest> {
    let document = read_input(file).await?;
    let request = AnyRequest::from_json(operation, &document)?;
    tracing::debug!(operation = request.name(), "request document parsed");
    Ok(request)
}

pub async fn validate_request(operation: &str, file: &Path, json: bool, quiet: bool) -> Result<()> {
    let request = load_request(operation, file).await?;
    let outcome = request.validate();

    if json {
        let violations = match &outcome {
            Ok(()) => Vec::new(),
            Err(report) => violations_json(report),
        };
        let out = serde_json::json!({
            "operation": request.name(),
            "valid": outcome.is_ok(),
            "violations": violations,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if !quiet {
        match &outcome {
            Ok(()) => {
                println!();
                println!(
                    "  {} {} request is valid",
                    style("✓").green().bold(),
                    style(request.name()).cyan()
                );
                println!();
            }
            Err(report) => print_report(request.name(), report),
        }
    }

    match outcome {
        Ok(()) => Ok(()),
        Err(report) => bail!("{} constraint violation(s)", report.violations.len()),
    }
}

pub async fn render_request(
    config: &ClientConfig,
    operation: &str,
    file: &Path,
    no_validate: bool,
    json: bool,
) -> Result<()> {
    let request = load_request(operation, file).await?;

    let mut config = config.clone();
    if no_validate {
        config.validation = ValidationMode::Off;
    }

    let prepared = match request.prepare(&config) {
        Ok(prepared) => prepared,
        Err(PrepareError::Validation(report)) => {
            if !json {
                print_report(request.name(), &report);
            }
            bail!(
                "{} constraint violation(s); pass --no-validate to bind anyway",
                report.violations.len()
            );
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&prepared_json(&prepared))?);
    } else {
        print_prepared(&prepared);
    }
    Ok(())
}

fn violations_json(report: &ValidationReport) -> Vec<serde_json::Value> {
    report
        .violations
        .iter()
        .map(|v| {
            serde_json::json!({
                "path": v.path,
                "message": v.kind.to_string(),
            })
        })
        .collect()
}

fn print_report(operation: &str, report: &ValidationReport) {
    println!();
    println!(
        "  {} {} request has {} violation{}",
        style("✗").red().bold(),
        style(operation).cyan(),
        style(report.violations.len()).bold(),
        if report.violations.len() == 1 { "" } else { "s" }
    );
    println!();
    for violation in &report.violations {
        println!(
            "  {} {}",
            style(&violation.path).yellow(),
            violation.kind
        );
    }
    println!();
}

fn prepared_json(prepared: &PreparedRequest) -> serde_json::Value {
    let headers: serde_json::Map<String, serde_json::Value> = prepared
        .headers
        .iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::from(value.as_str())))
        .collect();
    let body = prepared
        .body
        .as_deref()
        .and_then(|body| serde_json::from_slice::<serde_json::Value>(body).ok());
    serde_json::json!({
        "operation": prepared.operation,
        "method": prepared.method.as_str(),
        "url": prepared.url.as_str(),
        "headers": headers,
        "body": body,
    })
}

fn print_prepared(prepared: &PreparedRequest) {
    println!();
    println!(
        "  {} {}",
        style(prepared.method).bold(),
        style(prepared.url.as_str()).cyan()
    );
    for (name, value) in &prepared.headers {
        println!("  {}: {}", style(name).dim(), value);
    }
    if let Some(body) = prepared.body.as_deref() {
        println!();
        let pretty = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok());
        match pretty {
            Some(text) => {
                for line in text.lines() {
                    println!("  {line}");
                }
            }
            None => println!("  {}", String::from_utf8_lossy(body)),
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use lexmodel_types::config::ClientConfig;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn read_input_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("get-bot.json");
        tokio::fs::write(&path, r#"{"name": "PizzaBot"}"#).await.unwrap();
        assert_eq!(read_input(&path).await.unwrap(), r#"{"name": "PizzaBot"}"#);
    }

    #[tokio::test]
    async fn read_input_missing_file_names_path() {
        let err = read_input(Path::new("/nonexistent/request.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/request.json"));
    }

    #[tokio::test]
    async fn validate_request_fails_on_violations() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("get-intent.json");
        tokio::fs::write(&path, r#"{"name": "OrderPizza"}"#).await.unwrap();

        let err = validate_request("GetIntent", &path, true, false)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "1 constraint violation(s)");
    }

    #[tokio::test]
    async fn render_request_binds_valid_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("get-import.json");
        tokio::fs::write(&path, r#"{"importId": "imp-1"}"#).await.unwrap();

        render_request(&ClientConfig::default(), "get-import", &path, false, true)
            .await
            .unwrap();
    }

    #[test]
    fn prepared_json_parses_body() {
        let request = AnyRequest::from_json(
            "CreateBotVersion",
            r#"{"name": "PizzaBot", "checksum": "abc"}"#,
        )
        .unwrap();
        let prepared = request.prepare(&ClientConfig::default()).unwrap();
        let out = prepared_json(&prepared);
        assert_eq!(out["method"], "POST");
        assert_eq!(out["body"]["checksum"], "abc");
        assert_eq!(out["headers"]["content-type"], "application/x-amz-json-1.1");
    }
}
