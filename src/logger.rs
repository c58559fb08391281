//! Coloured terminal output
//!
//! ```ignore
//! log!("conf"; "reading {}", path.display());
//! debug!("conf"; "record {:?}", fields);
//! ```

use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Stream};

/// Global verbose flag (set by --verbose)
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a coloured module prefix
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message only when --verbose is enabled
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Print an error line on stderr
pub fn error(message: &str) {
    let prefix = "[error]";
    eprintln!(
        "{} {message}",
        prefix.if_supports_color(Stream::Stderr, |p| p.bright_red().bold().to_string())
    );
}

fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let styled = prefix.if_supports_color(Stream::Stdout, |p| {
        match module.to_ascii_lowercase().as_str() {
            "conf" => p.bright_green().bold().to_string(),
            "save" => p.bright_cyan().bold().to_string(),
            "region" => p.bright_black().to_string(),
            _ => p.bright_yellow().bold().to_string(),
        }
    });
    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_wraps_module_name() {
        assert!(colorize_prefix("conf").contains("[conf]"));
        assert!(colorize_prefix("other").contains("[other]"));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
