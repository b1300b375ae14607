//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GistTheme, OutputMode, UserInterface};

/// Width reserved for field labels.
const FIELD_WIDTH: usize = 12;

/// Terminal UI implementation.
///
/// Documents and fields go to stdout; status and errors go to stderr so
/// piped output stays clean.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GistTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GistTheme::new()
        } else {
            GistTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_field(&mut self, key: &str, value: &str) {
        writeln!(
            self.out,
            "{}",
            self.theme.format_field(key, value, FIELD_WIDTH)
        )
        .ok();
    }

    fn output(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        if !text.ends_with('\n') {
            writeln!(self.out).ok();
        }
        self.out.flush().ok();
    }

    fn is_interactive(&self) -> bool {
        self.out.is_term()
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
