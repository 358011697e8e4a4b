use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

use binarycookies::cookies::{
    export::{save_json, save_netscape},
    reader::{default_cookie_file, BinaryCookieReader},
    summary::{render_table, summarize},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Netscape,
}

#[derive(Parser, Debug)]
#[command(
    name = "binarycookies",
    about = "Extract and parse cookies from Cookies.binarycookies files"
)]
struct Args {
    /// Path to Cookies.binarycookies file [default: Safari's cookie store]
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to save output file (extension is replaced per format)
    #[arg(short = 'o', value_name = "FILE")]
    output: PathBuf,

    /// Output format
    #[arg(short = 'f', value_enum)]
    format: Option<Format>,

    /// Only export cookies matching this domain (netscape format)
    #[arg(long)]
    domain: Option<String>,

    /// Log each decoded page
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("An error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let input = match &args.input {
        Some(path) => path.clone(),
        None => default_cookie_file()
            .context("no -i given and no Safari cookie file found under $HOME")?,
    };

    let mut reader = BinaryCookieReader::new(&input);
    if let Some(domain) = &args.domain {
        reader = reader.domain(domain);
    }

    info!("Reading the binary cookies file {}...", input.display());
    let container = reader.read()?;
    info!("Number of pages: {}", container.page_count());
    info!("Total Cookies Processed: {}", container.total_cookies);

    let rows = summarize(&container);
    if rows.is_empty() {
        info!("No Secure or HttpOnly cookies found.");
    } else {
        info!("Summary of Cookies Processed:");
        println!("\n{}", render_table(&rows));
    }

    match args.format {
        Some(Format::Json) => {
            let path = args.output.with_extension("json");
            save_json(&container, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        Some(Format::Netscape) => {
            let path = args.output.with_extension("txt");
            save_netscape(&container, &path, reader.domain_filter())
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {}
    }

    Ok(())
}
