use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use randomart::charset::{self, Charset};
use randomart::render::{Fingerprint, Renderer, RendererConfig, DEFAULT_HASH_NAME, DEFAULT_KEY_NAME};
use randomart::walk::Dims;

mod input;

/// Random art CLI — draw drunken bishop art for key fingerprints
#[derive(Parser)]
#[command(name = "randomart", version)]
struct Args {
    /// Hex-encoded digests (colons allowed, e.g. MD5:16:27:ac:a5)
    digests: Vec<String>,

    /// Files holding raw digest bytes
    #[arg(short, long)]
    file: Vec<PathBuf>,

    /// Caption for the top border, usually the key type and size
    #[arg(short, long, default_value = DEFAULT_KEY_NAME)]
    key_name: String,

    /// Caption for the bottom border, usually the digest algorithm
    #[arg(long, default_value = DEFAULT_HASH_NAME)]
    hash_name: String,

    /// Grid width in cells (odd, at least 3)
    #[arg(long, default_value = "17")]
    width: usize,

    /// Grid height in cells (odd, at least 3)
    #[arg(long, default_value = "9")]
    height: usize,

    /// Charset name (built-in) or path to a .toml charset
    #[arg(short, long, default_value = "unicode")]
    charset: String,

    /// Emit JSON records instead of bare art
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct OutputArt {
    source: String,
    art: String,
}

/// Load a charset by name (built-in) or path (.toml file).
fn load_charset(name_or_path: &str) -> Result<Charset> {
    if let Some(charset) = charset::builtin_charset(name_or_path) {
        return Ok(charset);
    }

    let toml_path = Path::new(name_or_path);
    if toml_path.exists() {
        let toml_str = std::fs::read_to_string(toml_path)
            .with_context(|| format!("reading {}", toml_path.display()))?;
        let charset = Charset::from_toml(&toml_str)
            .with_context(|| format!("parsing charset from {}", toml_path.display()))?;
        return Ok(charset);
    }

    anyhow::bail!(
        "unknown charset '{}'. Built-in charsets: {}, or provide a .toml path.",
        name_or_path,
        charset::BUILTIN_CHARSETS.join(", ")
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    anyhow::ensure!(
        !args.digests.is_empty() || !args.file.is_empty(),
        "no input: pass hex digests or --file paths"
    );

    let dims = Dims::new(args.width, args.height).context("invalid grid size")?;
    let charset = load_charset(&args.charset)?;
    let renderer = Renderer::new(RendererConfig { dims, charset })?;

    let mut sources = Vec::new();
    let mut fingerprints = Vec::new();

    for digest in &args.digests {
        let bytes = input::parse_hex(digest)?;
        sources.push(digest.clone());
        fingerprints.push(Fingerprint::new(bytes, &args.key_name, &args.hash_name));
    }

    for path in &args.file {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        sources.push(path.display().to_string());
        fingerprints.push(Fingerprint::new(bytes, &args.key_name, &args.hash_name));
    }

    if !args.quiet {
        eprintln!(
            "rendering {} digest(s) on a {}x{} grid",
            fingerprints.len(),
            dims.width,
            dims.height
        );
    }

    let arts = renderer.render_batch(&fingerprints);

    for (source, art) in sources.into_iter().zip(arts) {
        if args.json {
            let record = OutputArt { source, art };
            let json = if args.pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{json}");
        } else {
            println!("{art}");
        }
    }

    Ok(())
}
