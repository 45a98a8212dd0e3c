//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{ModkitTheme, NonInteractiveUI, OutputMode, UserInterface};

/// Interactive terminal UI implementation.
///
/// Writes to stderr so that stdout stays reserved for command output.
pub struct TerminalUI {
    term: Term,
    theme: ModkitTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        let theme = if use_colors {
            ModkitTheme::new()
        } else {
            ModkitTheme::plain()
        };

        Self {
            term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_info() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }
}

/// Create the appropriate UI for the session.
///
/// Interactive sessions get the styled terminal UI; everything else gets
/// plain line-oriented output.
pub fn create_ui(interactive: bool, mode: OutputMode, use_colors: bool) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode, use_colors))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_accepts_all_message_kinds() {
        let mut ui = TerminalUI::new(OutputMode::Quiet, false);
        ui.message("info");
        ui.success("done");
        ui.warning("careful");
        ui.show_header("Header");
        ui.show_hint("hint");
    }

    #[test]
    fn terminal_ui_keeps_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, true);
        assert_eq!(ui.mode, OutputMode::Quiet);
    }

    #[test]
    fn create_ui_both_kinds() {
        let mut plain = create_ui(false, OutputMode::Normal, false);
        plain.message("plain");
        let mut styled = create_ui(true, OutputMode::Quiet, false);
        styled.message("styled");
    }
}
