//! Reads one HTML page from stdin and prints the parse result as JSON.
//!
//! Usage: `parse_stdin <page-url> < page.html`
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=catalog_page_parser=trace`).

use catalog_page_parser::parse;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(page_url) = std::env::args().nth(1) else {
        eprintln!("usage: parse_stdin <page-url> < page.html");
        std::process::exit(1);
    };

    let mut content = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut content) {
        tracing::error!(%err, "failed to read from stdin");
        std::process::exit(1);
    }

    match parse(&content, &page_url) {
        Ok(page) => match serde_json::to_string(&page) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(%err, "failed to serialize result");
                std::process::exit(1);
            }
        },
        Err(err) => {
            tracing::error!(%err, url = page_url.as_str(), "parse failed");
            std::process::exit(1);
        }
    }
}
