//! Transmission decoding utility
//! Reads a hex transmission from a file and prints its version sum and value

use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};
use transmission_rs::{load_transmission, DecoderConfig, Transmission};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut input_file = None;
    let mut show_tree = false;
    let mut show_json = false;
    let mut max_depth = None;

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--tree" => show_tree = true,
            "--json" => show_json = true,
            "--max-depth" => {
                let value = rest
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--max-depth needs a value"))?;
                max_depth = Some(value.parse::<usize>()?);
            }
            other if input_file.is_none() => input_file = Some(other.to_string()),
            other => anyhow::bail!("Unexpected argument: {}", other),
        }
    }

    let Some(input_file) = input_file else {
        let program = args.first().map_or("decode-transmission", String::as_str);
        eprintln!(
            "Usage: {} <input_file> [--tree] [--json] [--max-depth N]",
            program
        );
        eprintln!("\nThe first non-blank line of the file is decoded as the transmission.");
        std::process::exit(1);
    };

    let mut config = DecoderConfig::default();
    if let Some(depth) = max_depth {
        config = config.with_max_depth(depth);
    }

    let hex = load_transmission(&input_file)?;
    tracing::info!("Loaded {} hex digits from {}", hex.len(), input_file);

    let transmission = Transmission::from_hex_with_config(&hex, config)?;
    let root = transmission.root();
    tracing::info!(
        "Decoded {} messages, {} bits used, {} bits of padding",
        root.count(),
        root.encoded_bit_length(),
        transmission.padding_bits()
    );

    if show_tree {
        print!("{}", root);
    }
    if show_json {
        println!("{}", root.to_json_pretty()?);
    }

    println!("Version sum: {}", transmission.version_sum());
    println!("Value: {}", transmission.evaluate()?);

    Ok(())
}
