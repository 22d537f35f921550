// ABOUTME: CLI binary for pagemeta.
// ABOUTME: Fetches a URL (or reads an HTML file) and prints the extracted metadata or an error envelope as JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use pagemeta::{Client, ErrorResponse};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pagemeta")]
#[command(about = "Extract title, subtitle, author and creation date from a web page")]
struct Args {
    /// URL of the page to extract
    #[arg()]
    url: Option<String>,

    /// Read markup from a local HTML file instead of fetching
    #[arg(long = "html", conflicts_with = "url")]
    html: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long = "timeout", default_value_t = 30)]
    timeout: u64,

    /// Override the User-Agent header
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Extra request header as NAME:VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Output compact JSON instead of pretty
    #[arg(long = "compact")]
    compact: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {raw:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> ExitCode {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    match rendered {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error serializing output: {}", e);
            ExitCode::from(1)
        }
    }
}

fn fail(resp: ErrorResponse, compact: bool) -> ExitCode {
    tracing::debug!(status = resp.status, error = %resp.error, "request failed");
    print_json(&resp, compact);
    ExitCode::from(1)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = pagemeta::logging::init_logging("warn") {
        eprintln!("error: {}", e);
    }

    let mut builder = Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .allow_private_networks(args.allow_private_networks);
    if let Some(ua) = &args.user_agent {
        builder = builder.user_agent(ua);
    }
    for (name, value) in &args.headers {
        builder = builder.header(name, value);
    }
    let client = builder.build();

    if let Some(html_path) = &args.html {
        return match fs::read_to_string(html_path) {
            Ok(html) => print_json(&client.extract_html(&html), args.compact),
            Err(e) => {
                eprintln!("error reading file {:?}: {}", html_path, e);
                ExitCode::from(1)
            }
        };
    }

    let Some(url) = args.url.as_deref().filter(|u| !u.trim().is_empty()) else {
        return fail(ErrorResponse::missing_url(), args.compact);
    };

    match client.extract(url).await {
        Ok(result) => print_json(&result, args.compact),
        Err(e) => fail(ErrorResponse::fetch_failed(&e), args.compact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_header_splits_on_first_colon() {
        assert_eq!(
            parse_header("Referer: https://example.com/a").unwrap(),
            ("Referer".to_string(), "https://example.com/a".to_string())
        );
    }

    #[test]
    fn parse_header_rejects_missing_colon() {
        assert!(parse_header("NoColon").is_err());
        assert!(parse_header(":value").is_err());
    }
}
