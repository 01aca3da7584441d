use clap::Parser;
use sieve::catalog::Catalog;
use sieve::commands;
use sieve::config::{config_dir, OutputFormat, SieveConfig};
use sieve::error::Result;
use sieve::query::{MatchMode, Query};
use sieve::spec::{ColorSpecification, NameSpecification, SizeSpecification};
use std::io;
use tracing::{debug, warn};

mod args;
mod print;
use args::{Cli, Commands, LogLevel};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Attrs) => handle_attrs(),
        None => handle_filter(cli, &load_config()),
    }
}

fn load_config() -> SieveConfig {
    let Some(dir) = config_dir() else {
        debug!("no config directory available, using defaults");
        return SieveConfig::default();
    };

    match SieveConfig::load(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            SieveConfig::default()
        }
    }
}

fn handle_filter(cli: &Cli, config: &SieveConfig) -> Result<()> {
    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample(),
    };

    let spec = build_query(cli, config)?.build();
    let result = commands::filter::run(&catalog, &spec);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.format
    };

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => print::write_products(&mut out, &result.matched)?,
        OutputFormat::Json => print::write_products_json(&mut out, &result.matched)?,
    }
    print::print_messages(&result.messages);
    Ok(())
}

/// Criteria flags on the command line replace the configured criteria.
fn build_query(cli: &Cli, config: &SieveConfig) -> Result<Query> {
    let mode = if cli.any {
        MatchMode::Any
    } else {
        config.match_mode
    };
    let mut query = Query::new(mode).inverted(cli.invert);

    if cli.has_criteria() {
        if let Some(color) = cli.color {
            query = query.with(ColorSpecification::new(color));
        }
        if let Some(size) = cli.size {
            query = query.with(SizeSpecification::new(size));
        }
        if let Some(name) = &cli.name {
            query = query.with(NameSpecification::new(name.clone()));
        }
    } else {
        for filter in config.criteria_filters()? {
            query = query.with(filter);
        }
    }

    debug!(criteria = query.len(), ?mode, "query assembled");
    Ok(query)
}

fn handle_attrs() -> Result<()> {
    let result = commands::attributes::run();
    let mut out = io::stdout().lock();
    print::write_attributes(&mut out, &result.attributes)?;
    print::print_messages(&result.messages);
    Ok(())
}
