use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use huffman_codec::prelude::*;

fn validate_file_exists(s: &OsStr) -> Result<PathBuf, std::io::Error> {
    let path = PathBuf::from(s);
    if path.exists() && path.is_file() {
        return Ok(path);
    }
    Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found or not a regular file",
    ))
}

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compresses a file into the container format
    Encode {
        #[clap(parse(try_from_os_str = validate_file_exists))]
        input: PathBuf,
        output: PathBuf,

        /// Number of worker threads for histogramming and encoding (0 = detect)
        #[clap(short, long, default_value_t = 0)]
        threads: usize,
    },
    /// Decompresses a container file back to its original bytes
    Decode {
        #[clap(parse(try_from_os_str = validate_file_exists))]
        input: PathBuf,
        output: PathBuf,
    },
    /// Prints header info (original size, histogram summary) without decoding
    Stat {
        #[clap(parse(try_from_os_str = validate_file_exists))]
        input: PathBuf,
    },
}

fn config_for(threads: usize) -> CodecConfig {
    if threads == 0 {
        CodecConfig::default()
    } else {
        CodecConfig::with_threads(threads)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            threads,
        } => {
            let config = config_for(threads);
            let out_len = huffman_encode_file(&input, &output, config)?;
            let in_len = std::fs::metadata(&input)?.len();
            println!("Input:\t\t{} bytes", in_len);
            println!("Output:\t\t{} bytes", out_len);
            if in_len > 0 {
                println!("Ratio:\t\t{:.1}%", 100.0 * out_len as f64 / in_len as f64);
            }
        }
        Commands::Decode { input, output } => {
            huffman_decode_file(&input, &output)?;
            let out_len = std::fs::metadata(&output)?.len();
            println!("Decoded:\t{} bytes", out_len);
        }
        Commands::Stat { input } => {
            let container = std::fs::read(&input)?;
            if container.len() < HUFFMAN_HEADER_SIZE {
                anyhow::bail!("file too short to contain a valid header");
            }
            let payload_len = u64::from_le_bytes(container[0..8].try_into().unwrap());
            let mut distinct = 0usize;
            let mut max_count = 0u64;
            let mut max_symbol = 0u8;
            for symbol in 0..NUM_SYMBOLS {
                let offset = 8 + symbol * 8;
                let count = u64::from_le_bytes(container[offset..offset + 8].try_into().unwrap());
                if count > 0 {
                    distinct += 1;
                    if count > max_count {
                        max_count = count;
                        max_symbol = symbol as u8;
                    }
                }
            }
            println!("Input file:\t{}", input.display());
            println!("Original size:\t{} bytes", payload_len);
            println!("Container size:\t{} bytes", container.len());
            println!("Distinct symbols:\t{}", distinct);
            println!("Most frequent byte:\t{:#04x} ({} occurrences)", max_symbol, max_count);
        }
    }

    Ok(())
}
