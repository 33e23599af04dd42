// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use order_document_core::{load_order, order_summary, parse_order, SAMPLE_ORDER_JSON};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "order-summary", about = "Decode an order document and print its summary")]
struct Cli {
    /// Order JSON file; the built-in sample order is used when omitted
    path: Option<PathBuf>,

    /// Print the decoded order as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let order = match &cli.path {
        Some(path) => load_order(path)?,
        None => {
            eprintln!("No order file given, using the built-in sample");
            parse_order(SAMPLE_ORDER_JSON)?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    for line in order_summary(&order)? {
        println!("{}", line);
    }
    Ok(())
}
