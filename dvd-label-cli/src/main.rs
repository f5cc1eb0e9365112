use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use dvd_label::{render_page, write_label_pdf, LabelConfig, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "dvd-label",
    about = "Generate a printable DVD/CD label PDF",
    version
)]
struct Cli {
    /// Version string printed on the label, e.g. "206"
    #[arg(long = "ver", value_name = "VERSION", value_parser = NonEmptyStringValueParser::new())]
    ver: String,

    /// Draw outline (useful for debugging)
    #[arg(long)]
    outline: bool,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Logo image (PNG or JPEG)
    #[arg(long, default_value = "../logo.png")]
    logo: PathBuf,

    /// Date printed on the label (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print the draw commands as JSON instead of writing a PDF
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dvd_label=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = LabelConfig::new(cli.ver, cli.outline)?;
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    debug!(version = config.version(), outline = config.include_outline(), %date, "label settings");

    if cli.dry_run {
        let commands = render_page(&config, &date);
        let json =
            serde_json::to_string_pretty(&commands).context("Failed to serialize draw commands")?;
        println!("{json}");
        return Ok(());
    }

    write_label_pdf(&config, &date, &cli.logo, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("✓ Wrote {}", cli.output.display());
    Ok(())
}
