use crate::dir::CryptopowerDirectory;
use std::{fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter, LevelParseError},
    fmt::writer::BoxMakeWriter,
    prelude::*,
    util::TryInitError,
};

const GUI_LOG_FILE_NAME: &str = "cryptopower-gui.log";

/// Targets of the toolkit and its rendering stack, too verbose to be logged.
const IGNORED_TARGETS: [&str; 16] = [
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "tokio",
];

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to set the global logger: {0}")]
    Init(#[from] TryInitError),
}

fn is_ignored(target: &str) -> bool {
    IGNORED_TARGETS
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(
    log_level: LevelFilter,
    datadir: &CryptopowerDirectory,
) -> Result<(), LoggerError> {
    let file = File::create(datadir.path().join(GUI_LOG_FILE_NAME))?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Applies to *both* layers.
                .with_filter(filter::filter_fn(|metadata| !is_ignored(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, LevelParseError> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_targets() {
        assert!(is_ignored("wgpu_core::device"));
        assert!(is_ignored("iced_winit"));
        assert!(!is_ignored("cryptopower_gui::app::navigator"));
        assert!(!is_ignored("iced"));
    }
}
