use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: AtomicBool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self {
            prefix,
            verbose: AtomicBool::new(verbose),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    let logger = LOGGER.get_or_init(|| Logger::new(prefix, verbose));
    logger.set_verbose(verbose);
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

/// Per-tick chatter; silently dropped unless the logger was set up verbose.
pub fn log_verbose(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get()
        && logger.is_verbose()
    {
        logger.log(file, line, message);
    }
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.is_verbose())
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::log_verbose(file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None, false);
        let line = logger.format_line("common/src/games/snake/game_state.rs", 42, "hello");
        assert!(line.ends_with("[game_state.rs:42] hello"));
    }

    #[test]
    fn test_format_line_includes_prefix() {
        let logger = Logger::new(Some("Client".to_string()), false);
        let line = logger.format_line("C:\\src\\main.rs", 7, "started");
        assert!(line.contains("[Client][main.rs:7] started"));
    }

    #[test]
    fn test_verbose_flag_can_be_toggled() {
        let logger = Logger::new(None, false);
        assert!(!logger.is_verbose());
        logger.set_verbose(true);
        assert!(logger.is_verbose());
    }
}
