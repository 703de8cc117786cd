use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the widlgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "widlgen",
    version,
    about = "Generate Closure Compiler externs from a WebIDL declaration dump"
)]
pub struct CliArgs {
    /// Parsed WebIDL declarations as JSON (webidl2 AST dump).
    /// Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Write the generated externs here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}
