//! widlgen - generate Closure Compiler externs from WebIDL declarations.
//!
//! Thin I/O wrapper around `widlgen-core`: read the upstream parser's
//! JSON dump, run the pipeline, write the externs text. Nothing is
//! written when the pipeline fails; partial output is never usable.

mod args;
mod tracing_config;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use crate::args::CliArgs;

fn main() {
    tracing_config::init_tracing();
    let args = CliArgs::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let json = read_input(args.input.as_deref())?;
    let decls =
        widlgen_ast::loader::from_json(&json).context("failed to parse the declaration JSON")?;
    tracing::debug!(declarations = decls.len(), "declarations loaded");

    let externs = widlgen_core::generate(&decls)?;

    match &args.output {
        Some(path) => fs::write(path, externs)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{externs}"),
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
