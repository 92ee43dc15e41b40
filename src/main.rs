// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! webjobs CLI - start remote web-data jobs and wait for their results
//!
//! Reads the API key from `WEBJOBS_API_KEY` and an optional base URL from
//! `WEBJOBS_BASE_URL`.

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use serde::Serialize;
use serde_json::json;

use webjobs::{Client, JobFamily, WaitOptions};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "webjobs=info".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "scrape" => {
            if args.len() < 3 {
                eprintln!("Usage: webjobs scrape <url>");
                return ExitCode::from(1);
            }
            scrape(&args[2]).await
        }
        "crawl" => {
            if args.len() < 3 {
                eprintln!("Usage: webjobs crawl <url> [--limit N] [--first-page]");
                return ExitCode::from(1);
            }
            crawl(&args[2], &args[3..]).await
        }
        "extract" => {
            if args.len() < 4 {
                eprintln!("Usage: webjobs extract <url> <prompt>");
                return ExitCode::from(1);
            }
            extract(&args[2], &args[3]).await
        }
        "agent" => {
            if args.len() < 3 {
                eprintln!("Usage: webjobs agent <task>");
                return ExitCode::from(1);
            }
            agent(&args[2..].join(" ")).await
        }
        "status" => {
            if args.len() < 4 {
                eprintln!("Usage: webjobs status <family> <job_id>");
                return ExitCode::from(1);
            }
            status(&args[2], &args[3]).await
        }
        "stop" => {
            if args.len() < 4 {
                eprintln!("Usage: webjobs stop <family> <job_id>");
                return ExitCode::from(1);
            }
            stop(&args[2], &args[3]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("webjobs {}", webjobs::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"webjobs - start remote web-data jobs and wait for their results

USAGE:
    webjobs <COMMAND> [OPTIONS]

COMMANDS:
    scrape <url>                 Scrape one page
    crawl <url> [--limit N]      Crawl a site and collect every result page
          [--first-page]         Only fetch the first result page
    extract <url> <prompt>       Extract structured data from a page
    agent <task>                 Run a browser agent task
    status <family> <job_id>     Show the status of a job
    stop <family> <job_id>       Stop a running agent task
    help                         Show this help message
    version                      Show version information

FAMILIES:
    scrape, extract, crawl, batch-scrape, browser-agent, computer-agent

ENVIRONMENT:
    WEBJOBS_API_KEY              API key (required)
    WEBJOBS_BASE_URL             Override the API base URL
    RUST_LOG                     Log filter, e.g. webjobs=debug

EXAMPLES:
    webjobs scrape https://example.com
    webjobs crawl https://example.com --limit 50
    webjobs extract https://example.com/pricing "List every plan and its price"
    webjobs status crawl job_123
"#
    );
}

fn client() -> anyhow::Result<Client> {
    Client::from_env().context("Failed to configure client")
}

fn family(name: &str) -> anyhow::Result<JobFamily> {
    match JobFamily::from_name(name) {
        Some(family) => Ok(family),
        None => bail!("Unknown job family: {}", name),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn scrape(url: &str) -> anyhow::Result<()> {
    let client = client()?;
    println!("Scraping: {}", url);

    let result = client
        .scrape()
        .start_and_wait(&json!({ "url": url }), &WaitOptions::default())
        .await
        .context("Scrape failed")?;

    print_json(&result)
}

async fn crawl(url: &str, flags: &[String]) -> anyhow::Result<()> {
    let mut params = json!({ "url": url });
    let mut options = WaitOptions::default();

    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        match flag.as_str() {
            "--limit" => {
                let limit: u32 = flags
                    .next()
                    .context("--limit needs a value")?
                    .parse()
                    .context("--limit must be a number")?;
                params["limit"] = json!(limit);
            }
            "--first-page" => options = options.return_all_pages(false),
            other => bail!("Unknown crawl option: {}", other),
        }
    }

    let client = client()?;
    println!("Crawling: {}", url);

    let result = client
        .crawl()
        .start_and_wait(&params, &options)
        .await
        .context("Crawl failed")?;

    println!(
        "\n=== Crawl Results ({} items, page {} of {}) ===",
        result.data.len(),
        result.current_page_batch,
        result.total_page_batches
    );
    print_json(&result)
}

async fn extract(url: &str, prompt: &str) -> anyhow::Result<()> {
    let client = client()?;
    println!("Extracting from: {}", url);

    let result = client
        .extract()
        .start_and_wait(&json!({ "urls": [url], "prompt": prompt }), &WaitOptions::default())
        .await
        .context("Extract failed")?;

    print_json(&result)
}

async fn agent(task: &str) -> anyhow::Result<()> {
    let client = client()?;
    println!("Running agent task: {}", task);

    let result = client
        .browser_agent()
        .start_and_wait(&json!({ "task": task }), &WaitOptions::default())
        .await
        .context("Agent task failed")?;

    print_json(&result)
}

async fn status(family_name: &str, job_id: &str) -> anyhow::Result<()> {
    let family = family(family_name)?;
    let client = client()?;

    let status = client
        .jobs(family)
        .get_status(job_id)
        .await
        .with_context(|| format!("Failed to read status of {}", family.operation_label(job_id)))?;

    let terminal = if family.is_terminal(&status.status) {
        " (terminal)"
    } else {
        ""
    };
    println!("{}: {}{}", family.operation_label(job_id), status.status, terminal);
    Ok(())
}

async fn stop(family_name: &str, job_id: &str) -> anyhow::Result<()> {
    let family = family(family_name)?;
    let client = client()?;

    let response = client
        .jobs(family)
        .stop(job_id)
        .await
        .with_context(|| format!("Failed to stop {}", family.operation_label(job_id)))?;

    if response.success {
        println!("Stopped {}", family.operation_label(job_id));
    } else {
        println!("Stop request for {} was not accepted", family.operation_label(job_id));
    }
    Ok(())
}
