use std::{
    io::{self, Write},
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn))
}

pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

pub fn set_level(level: log::LevelFilter) {
    get_logger().set_min_level(level);
    log::set_max_level(level);
}

/// Raises `level` by `steps`, saturating at `Trace`.
pub fn raise_level(level: log::LevelFilter, steps: u8) -> log::LevelFilter {
    log::LevelFilter::iter()
        .skip_while(|l| *l != level)
        .nth(steps as usize)
        .unwrap_or(log::LevelFilter::Trace)
}

fn level_color(level: log::Level) -> Color {
    match level {
        log::Level::Error => Color::Red,
        log::Level::Warn => Color::Yellow,
        log::Level::Info => Color::White,
        log::Level::Debug => Color::Blue,
        log::Level::Trace => Color::BrightBlack,
    }
}

/// Writes every enabled record to stderr as `[LEVEL module] message`.
pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_min_level(&self, level: log::LevelFilter) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    fn format(record: &Record) -> String {
        let level = record.level();
        format!(
            "[{} {}] {}",
            level.as_str().color(level_color(level)),
            record.module_path().unwrap_or("unknown").dimmed(),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        use log::LevelFilter::*;

        assert_eq!(raise_level(Warn, 0), Warn);
        assert_eq!(raise_level(Warn, 1), Info);
        assert_eq!(raise_level(Warn, 2), Debug);
        assert_eq!(raise_level(Warn, 9), Trace);
        assert_eq!(raise_level(Off, 1), Error);
    }

    #[test]
    fn filters_by_level() {
        let logger = AppLogger::new(log::LevelFilter::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));

        logger.set_min_level(log::LevelFilter::Trace);
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn record_format() {
        colored::control::set_override(false);
        let text = AppLogger::format(
            &Record::builder()
                .level(log::Level::Warn)
                .module_path(Some("hexmaze::settings"))
                .args(format_args!("bad file"))
                .build(),
        );
        assert_eq!(text, "[WARN hexmaze::settings] bad file");
    }
}
