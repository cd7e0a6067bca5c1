use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use unitconv::catalog::Catalog;
use unitconv::cli::{self, Cli, Command};
use unitconv::config::Config;
use unitconv::logging::init_tracing;
use unitconv::shutdown::ShutdownHandle;
use unitconv::ui::app::App;
use unitconv::ui::conversion::ConversionState;
use unitconv::ui::runtime;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "Exiting with error");
        let message = err.to_string();
        eprintln!("Error: {message}");
        for cause in err.chain().skip(1) {
            let cause = cause.to_string();
            if !message.contains(&cause) {
                eprintln!("  caused by: {cause}");
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = Arc::new(Catalog::standard());
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path, &catalog)?;
    let digits = config.display.max_fraction_digits;

    match cli.command {
        Some(Command::Convert {
            category,
            from,
            to,
            value,
        }) => {
            let output = cli::run_convert(&catalog, &category, &from, &to, &value, digits)?;
            println!("{output}");
        }
        Some(Command::List { category, json }) => {
            let output = cli::run_list(&catalog, category.as_deref(), json)?;
            println!("{output}");
        }
        None => {
            if let Some(category) = cli.category {
                cli::resolve_category(&catalog, &category)?;
                // Configured units belong to the configured category only
                if config.defaults.category.as_deref() != Some(category.as_str()) {
                    config.defaults.input_unit = None;
                    config.defaults.output_unit = None;
                }
                config.defaults.category = Some(category);
            }

            let state = ConversionState::configured(Arc::clone(&catalog), &config.defaults, digits)
                .context("Invalid starting selection")?;
            let shutdown = ShutdownHandle::new();
            shutdown
                .install_signal_handlers()
                .context("Failed to install signal handlers")?;

            runtime::run(
                App::new(state),
                Duration::from_millis(config.ui.tick_rate_ms),
                shutdown,
            )
            .context("Terminal UI failed")?;
        }
    }
    Ok(())
}
