//! OxiGba CLI - GBA LZ77 compressor
//!
//! Compresses a file into the GBA LZ77 type 0x10 format and writes the
//! compressed stream to standard output.
//!
//! Exit codes: 0 on success, 1 for argument errors, 2 when the input file
//! cannot be opened, 3 when it cannot be read, 4 when compression fails.

use clap::Parser;
use clap::error::ErrorKind;
use oxigba_lz10::{Lz10Config, compress_with_config};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxigba")]
#[command(
    author,
    version,
    about = "GBA LZ77 (type 0x10) compressor - writes the compressed stream to stdout"
)]
#[command(long_about = "
Compresses a file into the LZ77 variant the GBA BIOS decompresses
(type byte 0x10), as used by graphics and data pipelines targeting
the platform.

Examples:
  oxigba tileset.4bpp > tileset.4bpp.lz
  oxigba --window-size 256 map.bin > map.bin.lz
")]
struct Cli {
    /// File to compress
    input: PathBuf,

    /// Sliding window size in bytes (2-4096)
    #[arg(long, default_value_t = 4096)]
    window_size: usize,

    /// Maximum match length per reference token (3-18)
    #[arg(long, default_value_t = 18)]
    read_ahead: usize,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let mut file = match File::open(&cli.input) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("couldn't open file:");
            eprintln!("  {}: {}", cli.input.display(), e);
            std::process::exit(2);
        }
    };

    let mut input = Vec::new();
    if let Err(e) = file.read_to_end(&mut input) {
        eprintln!("couldn't read from file:");
        eprintln!("  {}: {}", cli.input.display(), e);
        std::process::exit(3);
    }

    let compressed = match Lz10Config::new(cli.window_size, cli.read_ahead)
        .and_then(|config| compress_with_config(&input, config))
    {
        Ok(compressed) => compressed,
        Err(e) => {
            eprintln!("compression failed:");
            eprintln!("  {}", e);
            std::process::exit(4);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(&compressed).and_then(|()| stdout.flush()) {
        eprintln!("couldn't write output:");
        eprintln!("  {}", e);
        std::process::exit(4);
    }
}
