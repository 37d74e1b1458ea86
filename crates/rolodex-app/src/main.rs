use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use rolodex_core::config::load_config;
use rolodex_service::export::{BatchOptions, write_ldif};
use rolodex_service::source::{self, ContactSource};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    // stdout carries the LDIF
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let mut settings = load_config(cli.config.as_deref())?;
    cli.apply(&mut settings);

    if let Ok(filter) = EnvFilter::try_new(settings.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %settings.logging.level, "Invalid log level in config, keeping info");
    }

    tracing::info!(
        input = %cli.input().display(),
        format = %settings.input.format,
        "Reading contacts"
    );
    let contacts = source::open(cli.input(), settings.input.format).contacts()?;

    let options = BatchOptions::from(&settings);
    let report = match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_ldif(&contacts, &mut out, options)?
        }
        None => write_ldif(&contacts, &mut io::stdout().lock(), options)?,
    };

    for rejected in &report.rejected {
        tracing::warn!(
            index = rejected.index,
            name = rejected.name.as_deref().unwrap_or_default(),
            reason = %rejected.reason,
            "Record was not exported"
        );
    }

    Ok(())
}
