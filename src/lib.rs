pub mod error;
pub mod filter;
pub mod html;
pub mod models;
pub mod normalize;
pub mod reader;
pub mod report;
pub mod settings;
pub mod validation;

use std::path::Path;

use tracing::info;

use crate::report::HtmlReporter;
use crate::settings::Settings;

/// Builds the schedule page: read the CSV named by the settings, render the
/// grouped document, write it to the output path.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let rows = reader::read_schedule(Path::new(&settings.input_path))?;
    info!(rows = rows.len(), "loaded schedule from {}", settings.input_path);

    let reporter = HtmlReporter::new(settings.page_title.clone());
    reporter.write_to(&rows, Path::new(&settings.output_path))?;
    info!("built {}", settings.output_path);
    Ok(())
}
