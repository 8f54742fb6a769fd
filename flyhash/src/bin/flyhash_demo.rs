//! Fly hash demo: fingerprint documents and report their distances.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p flyhash --bin flyhash-demo --release
//! cargo run -p flyhash --bin flyhash-demo -- --seed 42 "first doc" "second doc"
//! RUST_LOG=flyhash_core=debug cargo run -p flyhash --bin flyhash-demo -- --config fly.json
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use flyhash::{FlyHash, FlyHashConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Reference phrases: a near-duplicate, a moderate edit, and an unrelated one.
const REFERENCE_DOCS: &[&str] = &[
    "this is a test phrase",
    "this is a test phrass",
    "this is one of test phrases",
    "different test phrase",
];

/// CLI arguments for the demo.
#[derive(Parser, Debug)]
#[command(name = "flyhash-demo")]
#[command(about = "Fingerprint documents with a fly hash and compare them")]
struct Args {
    /// JSON config file; missing fields use the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the connectivity seed.
    #[arg(long)]
    seed: Option<i64>,

    /// Override the KC dimension (fingerprint bits).
    #[arg(long)]
    n_kc: Option<usize>,

    /// Documents to hash. Defaults to four reference phrases.
    docs: Vec<String>,
}

fn load_config(args: &Args) -> Result<FlyHashConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("cannot parse {}: {}", path.display(), e))?
        }
        None => FlyHashConfig::DEFAULT,
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(n_kc) = args.n_kc {
        config = config.with_n_kc(n_kc);
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(&args)?;
    let fly = FlyHash::new(config).map_err(|e| e.to_string())?;

    let docs: Vec<String> = if args.docs.is_empty() {
        REFERENCE_DOCS.iter().map(|s| s.to_string()).collect()
    } else {
        args.docs
    };

    let mut hashes = Vec::with_capacity(docs.len());
    for doc in &docs {
        let fp = fly.hash(doc.as_bytes()).map_err(|e| format!("{:?}: {}", doc, e))?;
        println!("flyhash of {:?}: {}", doc, fp);
        hashes.push(fp);
    }

    if let Some((first, rest)) = hashes.split_first() {
        for (doc, fp) in docs[1..].iter().zip(rest) {
            let d = FlyHash::compare(first, fp).map_err(|e| e.to_string())?;
            println!("distance {:?} <-> {:?}: {}", docs[0], doc, d);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
