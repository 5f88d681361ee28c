//! Print the OpenAPI document as JSON, or write it to `--output`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use pharmacy_backend::doc::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(about = "Export the pharmacy backend OpenAPI document")]
struct Args {
    /// Write the document to this file instead of standard output.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("failed to serialise OpenAPI document")?;

    match args.output {
        Some(path) => std::fs::write(&path, json)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
