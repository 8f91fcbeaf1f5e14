use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figcache::{default_cache, Font, FontCache, DEFAULT_CAPACITY};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::console::{describe_font, describe_stats};
mod console;

#[derive(Parser)]
#[command(name = "figcache", about = "Render text with FIGlet fonts")]
struct Cli {
    /// Maximum number of parsed fonts kept in the cache
    #[arg(long, global = true, default_value_t = DEFAULT_CAPACITY)]
    cache_capacity: usize,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text with a font
    Render {
        #[arg(short, long)]
        font: PathBuf,
        /// Text to render; each value is rendered as its own block
        #[arg(short, long, required = true, num_args = 1..)]
        text: Vec<String>,
        /// Render every text this many times
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        repeat: u64,
        /// Print cache statistics to stderr afterwards
        #[arg(long)]
        stats: bool,
    },
    /// Inspect font metadata
    Inspect {
        #[arg(short, long)]
        font: PathBuf,
    },
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Font::source_from_bytes(&bytes).with_context(|| format!("decoding {}", path.display()))
}

fn render(
    cache: &FontCache,
    path: &Path,
    texts: &[String],
    repeat: u64,
    stats: bool,
) -> Result<()> {
    let source = read_source(path)?;
    for _ in 0..repeat {
        for text in texts {
            let font = cache
                .get_or_parse(&source)
                .with_context(|| format!("parsing {}", path.display()))?;
            println!("{}", font.render(text));
        }
    }
    if stats {
        eprintln!("{}", describe_stats(&cache.stats()));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let cache = default_cache();
    cache.set_capacity(cli.cache_capacity);
    log::debug!("font cache capacity {}", cache.capacity());

    match cli.command {
        Cmd::Render {
            font,
            text,
            repeat,
            stats,
        } => render(cache, &font, &text, repeat, stats)?,
        Cmd::Inspect { font } => {
            let source = read_source(&font)?;
            let parsed = cache
                .get_or_parse(&source)
                .with_context(|| format!("parsing {}", font.display()))?;
            print!("{}", describe_font(&font.display().to_string(), &parsed));
        }
    }
    Ok(())
}
