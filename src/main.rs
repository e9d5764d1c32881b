use std::io;
use std::path::PathBuf;

use clap::Parser;
use readme2html::{Config, Highlighter};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "readme2html")]
#[command(about = "Convert a README to a standalone HTML page")]
struct Cli {
    /// Input Markdown file
    #[arg(default_value = "README.md")]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,

    /// TOML config layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Highlighting theme (see --list-themes)
    #[arg(long)]
    theme: Option<String>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Print the available highlighting themes and exit
    #[arg(long)]
    list_themes: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    if cli.list_themes {
        let highlighter = Highlighter::new();
        for theme in highlighter.themes() {
            println!("{}", theme);
        }
        return;
    }

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };
    if let Some(theme) = cli.theme {
        config.highlight.theme = theme;
    }
    if let Some(title) = cli.title {
        config.page.title = title;
    }

    if let Err(e) = readme2html::convert_file(&cli.input, &cli.output, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "✅ {} converted to {}",
        cli.input.display(),
        cli.output.display()
    );
}
