//! `jsonshape` CLI — infer a TypeScript type declaration from a JSON sample.
//!
//! ## Usage
//!
//! ```sh
//! # Infer from stdin, declaration on stdout
//! echo '{"name":"Alice","age":30}' | jsonshape
//!
//! # Infer from file to file
//! jsonshape -i data.json -o data.d.ts
//!
//! # Only classify the first element of each array
//! cat big.json | jsonshape --strategy first
//! ```
//!
//! The declaration name is fixed (`MyCustomType`); the tool does one thing.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};

use jsonshape_core::{infer, render_pretty, SampleStrategy};

/// Name used in the emitted `type <Name> = …;` declaration.
const TYPE_NAME: &str = "MyCustomType";

#[derive(Parser)]
#[command(
    name = "jsonshape",
    version,
    about = "Infer a TypeScript type declaration from a JSON sample"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Array sampling strategy: first, first+last, first+mid+last, all
    #[arg(long, default_value = "all")]
    strategy: SampleStrategy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = read_input(cli.input.as_deref())?;
    let shape = infer(&json, cli.strategy).context("Failed to infer a type from the input")?;
    let declaration = format!("type {} = {};\n", TYPE_NAME, render_pretty(&shape));
    write_output(cli.output.as_deref(), &declaration)?;

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
