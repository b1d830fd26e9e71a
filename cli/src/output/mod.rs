//! Console output: message helpers, palette, and the progress reporter.
//!
//! Progress and results go to stdout; errors go to stderr so they survive
//! `--quiet` and redirection.

pub mod reporter;
pub mod styles;

use std::io::IsTerminal as _;

use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Terminal state shared by every command.
pub struct OutputContext {
    /// Palette for stdout.
    pub styles: Styles,
    /// Palette for stderr, which may be redirected independently.
    err_styles: Styles,
    /// Suppress everything except errors and requested data.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are used only on a terminal and never with `--no-color` or
    /// `NO_COLOR`.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let allow = !no_color && std::env::var_os("NO_COLOR").is_none();
        let palette = |tty: bool| {
            if allow && tty {
                Styles::colored()
            } else {
                Styles::default()
            }
        };
        Self {
            styles: palette(console::Term::stdout().is_term()),
            err_styles: palette(std::io::stderr().is_terminal()),
            quiet,
        }
    }

    fn emit(&self, symbol: &str, style: owo_colors::Style, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", symbol.style(style));
        }
    }

    pub fn step(&self, msg: &str) {
        self.emit("→", self.styles.step, msg);
    }

    pub fn success(&self, msg: &str) {
        self.emit("✓", self.styles.success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.emit("!", self.styles.warning, msg);
    }

    pub fn info(&self, msg: &str) {
        self.emit("ℹ", self.styles.info, msg);
    }

    /// Printed to stderr even when quiet.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.err_styles.error));
    }

    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// A line of requested data, e.g. a status row. Printed even when quiet.
    pub fn line(&self, msg: &str) {
        println!("{msg}");
    }
}
