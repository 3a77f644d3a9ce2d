//! Terminal logging.
//!
//! - `log!("module"; ...)` prints a line behind a colored `[module]` tag
//! - `debug!` does the same, but only with `--verbose`
//! - [`ProgressLine`] keeps one counter (`[build] svg(3/10)`) redrawn in place
//!
//! ```ignore
//! log!("build"; "{} svg files", count);
//!
//! let progress = ProgressLine::new("svg", count);
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    io::{StdoutLock, Write, stdout},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set while a [`ProgressLine`] owns the last terminal line.
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Log a message behind a colored `[module]` tag.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but silent unless verbose mode is on.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let mut out = stdout().lock();
    // A live progress line would otherwise be glued to the front.
    if PROGRESS_ACTIVE.load(Ordering::Acquire) {
        clear_line(&mut out);
    }
    writeln!(out, "{} {message}", tag(module)).ok();
    out.flush().ok();
}

fn tag(module: &str) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "build" => Style::new().bright_blue(),
        "done" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    format!("[{module}]")
        .if_supports_color(Stream::Stdout, |text| text.style(style.bold()))
        .to_string()
}

fn clear_line(out: &mut StdoutLock<'_>) {
    execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
}

/// A single counter redrawn in place on the current terminal line.
///
/// Redraws are skipped while another thread is drawing, so `inc` never
/// blocks.
pub struct ProgressLine {
    label: &'static str,
    total: usize,
    done: AtomicUsize,
    drawing: Mutex<()>,
}

impl ProgressLine {
    /// Start drawing; a zero `total` draws nothing.
    pub fn new(label: &'static str, total: usize) -> Self {
        let progress = Self {
            label,
            total,
            done: AtomicUsize::new(0),
            drawing: Mutex::new(()),
        };
        PROGRESS_ACTIVE.store(total > 0, Ordering::Release);
        progress.draw(false);
        progress
    }

    pub fn inc(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
        if let Some(_guard) = self.drawing.try_lock() {
            self.draw(false);
        }
    }

    fn line(&self) -> String {
        format!(
            "{}({}/{})",
            self.label,
            self.done.load(Ordering::Relaxed),
            self.total
        )
    }

    fn draw(&self, keep: bool) {
        if self.total == 0 {
            return;
        }
        let mut out = stdout().lock();
        clear_line(&mut out);
        let text = format!("{} {}", tag("build"), self.line());
        if keep {
            writeln!(out, "{text}").ok();
        } else {
            write!(out, "{text}").ok();
        }
        out.flush().ok();
    }

    /// Leave the final count on screen.
    pub fn finish(self) {
        PROGRESS_ACTIVE.store(false, Ordering::Release);
        {
            let _guard = self.drawing.lock();
            self.draw(true);
        }
        std::mem::forget(self);
    }
}

impl Drop for ProgressLine {
    // Dropped without `finish` (error path): wipe the partial line.
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::Release);
        if self.total > 0 {
            let mut out = stdout().lock();
            clear_line(&mut out);
            out.flush().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_counts() {
        let progress = ProgressLine::new("svg", 3);
        progress.inc();
        progress.inc();
        assert_eq!(progress.line(), "svg(2/3)");
        progress.finish();
    }

    #[test]
    fn test_tag_keeps_module_name() {
        assert!(tag("build").contains("[build]"));
        assert!(tag("Warning").contains("[Warning]"));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
