use anyhow::Context;
use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use quran_reader::core::config::{self, CliOverrides, ResolvedConfig};
use quran_reader::core::loader::{self, MissingSourcePolicy};
use quran_reader::core::state::App;
use quran_reader::tui;
use quran_reader::tui::components::Translations;

#[derive(Parser)]
#[command(name = "quran-reader", about = "Read Quranic verses with English and Urdu translations")]
struct Args {
    /// Path to the verse corpus (JSON)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// What to do when the corpus file is missing
    #[arg(long, value_enum)]
    on_missing: Option<MissingSourcePolicy>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = config::load_config().context("failed to load configuration")?;
    let cli = CliOverrides {
        data_path: args.data,
        on_missing: args.on_missing,
        log_file: args.log_file,
    };
    let resolved = config::resolve(&loaded.config, &cli).context("invalid configuration")?;

    init_logging(&resolved);
    info!("Quran Reader starting up");
    loaded.origin.log();
    info!("Resolved config: {:?}", resolved);

    // Loaded once; every session shares the same immutable document
    let outcome = match loader::load(&resolved.data_path, resolved.on_missing) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Startup aborted: {}", e);
            return Err(e).context("cannot start reader");
        }
    };
    let document = Arc::new(outcome.document);

    let app = App::new(document, outcome.source).context("document has no readable verse")?;

    tui::run(
        app,
        Translations {
            english: resolved.show_english,
            urdu: resolved.show_urdu,
        },
    )?;
    Ok(())
}
