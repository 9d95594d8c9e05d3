//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, DirectionArg};
use crate::error::Result;
use crate::http::{PageClient, PageClientConfig};
use crate::link::parse_link_header;
use crate::types::{Direction, JsonValue, Query};
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Parse { header, pretty } => Self::parse(header, *pretty),
            Commands::Fetch {
                url,
                follow,
                direction,
                timeout,
            } => Self::fetch(url, *follow, *direction, *timeout).await,
        }
    }

    /// Parse a link header and print the result as JSON
    fn parse(header: &str, pretty: bool) -> Result<()> {
        let links = parse_link_header(Some(header));
        let output = if pretty {
            serde_json::to_string_pretty(&links)?
        } else {
            serde_json::to_string(&links)?
        };
        println!("{output}");
        Ok(())
    }

    /// Fetch a page, then follow its link header up to `follow` hops
    async fn fetch(url: &str, follow: u32, direction: DirectionArg, timeout: u64) -> Result<()> {
        let direction = Direction::from(direction);
        let config = PageClientConfig::builder()
            .timeout(Duration::from_secs(timeout))
            .build();
        let client = PageClient::with_config(config)?;

        let mut url = url.to_string();
        let mut remaining = follow;

        loop {
            let page = client.fetch_page(&url, &Query::new()).await?;

            println!(
                "{}",
                serde_json::to_string(&json!({
                    "url": &url,
                    "status": page.status,
                    "records": record_count(page.body.as_ref()),
                    "links": &page.links,
                }))?
            );

            let descriptor = page.links.get(direction);

            if remaining == 0 {
                break;
            }
            if !descriptor.results {
                info!(%direction, "no further results");
                break;
            }
            if descriptor.href.is_empty() {
                warn!(%direction, "link header advertises results but no href");
                break;
            }

            info!(%direction, cursor = %descriptor.cursor, "following link header");
            url = descriptor.href.clone();
            remaining -= 1;
        }

        Ok(())
    }
}

/// Best-effort record count for a JSON body
fn record_count(body: Option<&JsonValue>) -> Option<usize> {
    match body {
        Some(JsonValue::Array(items)) => Some(items.len()),
        _ => None,
    }
}
