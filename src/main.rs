// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read};
use the_scribe::backends::thread::ThreadWorkerSpawner;
use the_scribe::config::{load_and_validate_config, GatewayConfig};
use the_scribe::gateway::OffloadGateway;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: the-scribe [--config <file.yaml|file.toml>] <clean|headers|html|strip|analyze> <FILE|->";

/// Command-line arguments after parsing
struct Args {
    config: Option<String>,
    operation: String,
    input: String,
}

fn parse_args(mut args: Vec<String>) -> Result<Args> {
    let mut config = None;
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            bail!("--config requires a file path\n{}", USAGE);
        }
        config = Some(args.remove(1));
        args.remove(0);
    }

    match args.as_slice() {
        [operation, input] => Ok(Args {
            config,
            operation: operation.clone(),
            input: input.clone(),
        }),
        _ => bail!("{}", USAGE),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read '{}'", input))
}

async fn run(args: Args) -> Result<String> {
    let config = match &args.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load config '{}'", path))?,
        None => GatewayConfig::default(),
    };
    let text = read_input(&args.input)?;

    let spawner = ThreadWorkerSpawner::from_config(&config.worker);
    let gateway = OffloadGateway::start(&spawner, config);

    let output = match args.operation.as_str() {
        "clean" => serde_json::to_string_pretty(&gateway.clean_markdown(&text).await?)?,
        "headers" => serde_json::to_string_pretty(&gateway.extract_headers(&text).await?)?,
        "html" => gateway.markdown_to_html(&text).await?,
        "strip" => gateway.strip_markdown(&text).await?,
        "analyze" => serde_json::to_string_pretty(&gateway.analyze_text(&text).await?)?,
        other => bail!("Unknown operation '{}'\n{}", other, USAGE),
    };

    gateway.dispose();
    Ok(output)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match run(args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}
