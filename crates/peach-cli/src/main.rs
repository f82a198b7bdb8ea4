use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "peach",
    about = "Decode and validate JSON, re-emitting it via serde_json",
    version
)]
struct Args {
    /// Decode oversized integer literals to their exact digit strings
    #[arg(long)]
    bigint_as_string: bool,

    /// Validate only; print nothing on success
    #[arg(short, long)]
    check: bool,

    /// Pretty-print the decoded document
    #[arg(long)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = peach::DecodeOptions {
        bigint_as_string: args.bigint_as_string,
    };
    let value = peach::decode_with_options(&buf, &options)?;

    if args.check {
        return Ok(());
    }

    let json: serde_json::Value = value.into();
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", serde_json::to_string(&json)?);
    }

    Ok(())
}
