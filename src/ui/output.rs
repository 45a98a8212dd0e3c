//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show informational messages, warnings and status lines.
    #[default]
    Normal,
    /// Show warnings, errors and final status only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode for the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows informational messages.
    pub fn shows_info(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
