use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use whatwg_encoding::{DecodeOptions, ErrorMode, bom_encoding, decode, label_to_name, names};

#[derive(Parser)]
#[command(name = "wenc")]
#[command(about = "Decode text in any WHATWG encoding to UTF-8", long_about = None)]
struct Cli {
    /// Encoding label of the input (e.g. "latin1", "shift_jis")
    #[arg(short = 'e', long, default_value = "utf-8")]
    encoding: String,

    /// Malformed-input policy: "replacement" or "fatal"
    #[arg(long, default_value = "replacement")]
    error_mode: String,

    /// Report the byte-order mark of the input, if any, and exit
    #[arg(long)]
    bom: bool,

    /// List the canonical encoding names and exit
    #[arg(long)]
    list: bool,

    /// Input file (stdin if omitted)
    #[arg(name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for name in names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let input = read_input(cli.file.as_deref())?;

    if cli.bom {
        match bom_encoding(&input) {
            Some(name) => println!("{}", name),
            None => println!("none"),
        }
        return Ok(());
    }

    let name = label_to_name(&cli.encoding)
        .ok_or_else(|| anyhow::anyhow!("unknown encoding label: {:?}", cli.encoding))?;
    let error_mode: ErrorMode = cli.error_mode.parse()?;

    let text = decode(&input, name, DecodeOptions { error_mode })?;
    io::stdout().write_all(text.as_bytes())?;

    Ok(())
}

fn read_input(file: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}
