use anyhow::{Context, Result};
use clap::Parser;
use pdf_logger::{ItemError, ItemScope, LoggerConfig, PdfError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ITEMS: &[&str] = &["Page A", "Page B", "Page C"];

#[derive(Parser)]
#[command(name = "pdf-logger")]
#[command(about = "Run PDF items with error containment and write a grouped JSON log")]
#[command(version)]
struct Cli {
    /// YAML logger configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report file (overrides the config)
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Collapse single-message groups to a bare value
    #[arg(long)]
    slim: bool,

    /// Truncate the report file instead of appending
    #[arg(long)]
    overwrite: bool,

    /// Do not mirror entries to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Items to generate, in order
    #[arg(long, num_args = 1..)]
    items: Vec<String>,

    /// Items whose input data is insufficient
    #[arg(long, num_args = 1.., default_value = "Page B")]
    bad: Vec<String>,
}

impl Cli {
    fn resolve_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load(path)?,
            None => LoggerConfig::default(),
        };
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        config.slim |= self.slim;
        config.overwrite |= self.overwrite;
        if self.quiet {
            config.console = false;
        }
        Ok(config)
    }
}

fn generate_item(name: &str, bad: &[String]) -> Result<(), ItemError> {
    if bad.iter().any(|b| b == name) {
        return Err(PdfError::bad_data("Not enough data points").into());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_logger=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let mut logger = config.build_logger()?;

    let items: Vec<String> = if cli.items.is_empty() {
        DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.items.clone()
    };

    let mut scopes = Vec::with_capacity(items.len());
    for item in &items {
        let mut scope = ItemScope::open(item.as_str());
        scope
            .run(&mut logger, || generate_item(item, &cli.bad))
            .with_context(|| format!("Critical failure while generating {}", item))?;
        scopes.push(scope);
    }

    if let Some((item, error)) = scopes
        .iter()
        .find_map(|s| s.error().map(|e| (s.item_name(), e)))
    {
        println!("Error in {}: {}", item, error.message);
    }

    println!("{}", logger.to_json(config.slim)?);
    logger.flush_sinks();
    logger.write_to_file(&config.log_file, config.slim, config.overwrite)?;

    tracing::info!(
        path = %config.log_file.display(),
        entries = logger.len(),
        "Log written"
    );
    Ok(())
}
