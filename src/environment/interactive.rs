//! Interactive session detection.
//!
//! modkit may only prompt when all of the following hold:
//! 1. Debug logging is off (debug output interleaves with prompts)
//! 2. `MODKIT_FRONTEND` is not `noninteractive`
//! 3. stderr is attached to a terminal

use std::io::IsTerminal;

use super::vars::{EnvLookup, FRONTEND_VAR};

/// The `MODKIT_FRONTEND` value that disables prompting.
pub const NONINTERACTIVE_FRONTEND: &str = "noninteractive";

/// Decides whether the current process may prompt the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractivityDetector {
    debug: bool,
    frontend: Option<String>,
    stderr_is_terminal: bool,
}

impl InteractivityDetector {
    /// Capture the signals of the running process.
    ///
    /// The debug signal asks whether modkit's own debug events would be
    /// recorded, so `RUST_LOG` directives for other targets do not count.
    pub fn from_process(env: &dyn EnvLookup) -> Self {
        Self {
            debug: tracing::enabled!(target: "modkit", tracing::Level::DEBUG),
            frontend: env.get(FRONTEND_VAR),
            stderr_is_terminal: std::io::stderr().is_terminal(),
        }
    }

    /// Build from explicit signals (for testing).
    pub fn with_signals(debug: bool, frontend: Option<&str>, stderr_is_terminal: bool) -> Self {
        Self {
            debug,
            frontend: frontend.map(String::from),
            stderr_is_terminal,
        }
    }

    /// True when the frontend override asks for non-interactive mode.
    pub fn frontend_forces_noninteractive(&self) -> bool {
        self.frontend
            .as_deref()
            .is_some_and(|f| f.trim().eq_ignore_ascii_case(NONINTERACTIVE_FRONTEND))
    }

    /// Whether prompting is allowed.
    ///
    /// ```
    /// use modkit::environment::InteractivityDetector;
    ///
    /// assert!(InteractivityDetector::with_signals(false, None, true).is_interactive());
    /// assert!(!InteractivityDetector::with_signals(true, None, true).is_interactive());
    /// ```
    pub fn is_interactive(&self) -> bool {
        if self.debug {
            return false;
        }
        if self.frontend_forces_noninteractive() {
            return false;
        }
        self.stderr_is_terminal
    }

    /// Why the session is not interactive, for display.
    pub fn reason(&self) -> Option<&'static str> {
        if self.debug {
            Some("debug logging is enabled")
        } else if self.frontend_forces_noninteractive() {
            Some("MODKIT_FRONTEND=noninteractive")
        } else if !self.stderr_is_terminal {
            Some("stderr is not a terminal")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn interactive_by_default() {
        let detector = InteractivityDetector::with_signals(false, None, true);
        assert!(detector.is_interactive());
        assert_eq!(detector.reason(), None);
    }

    #[test]
    fn debug_mode_is_not_interactive() {
        let detector = InteractivityDetector::with_signals(true, None, true);
        assert!(!detector.is_interactive());
        assert_eq!(detector.reason(), Some("debug logging is enabled"));
    }

    #[test]
    fn noninteractive_frontend_is_not_interactive() {
        for value in ["noninteractive", "NonInteractive", " NONINTERACTIVE "] {
            let detector = InteractivityDetector::with_signals(false, Some(value), true);
            assert!(!detector.is_interactive(), "frontend {:?}", value);
        }
    }

    #[test]
    fn other_frontend_values_do_not_force() {
        let detector = InteractivityDetector::with_signals(false, Some("interactive"), true);
        assert!(detector.is_interactive());
    }

    #[test]
    fn other_frontend_values_do_not_override_missing_tty() {
        let detector = InteractivityDetector::with_signals(false, Some("interactive"), false);
        assert!(!detector.is_interactive());
    }

    #[test]
    fn stderr_not_a_tty_is_not_interactive() {
        let detector = InteractivityDetector::with_signals(false, None, false);
        assert!(!detector.is_interactive());
        assert_eq!(detector.reason(), Some("stderr is not a terminal"));
    }

    #[test]
    fn any_single_signal_forces_noninteractive() {
        for debug in [false, true] {
            for frontend in [None, Some("noninteractive")] {
                for tty in [false, true] {
                    let detector = InteractivityDetector::with_signals(debug, frontend, tty);
                    let expected = !debug && frontend.is_none() && tty;
                    assert_eq!(detector.is_interactive(), expected);
                }
            }
        }
    }

    #[test]
    fn from_process_reads_frontend_from_lookup() {
        let env: HashMap<String, String> =
            [(FRONTEND_VAR.to_string(), "noninteractive".to_string())].into();
        let detector = InteractivityDetector::from_process(&env);
        assert!(!detector.is_interactive());
    }

    fn detect_under_filter(directives: &str) -> InteractivityDetector {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::EnvFilter;

        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(directives));
        let env: HashMap<String, String> = HashMap::new();
        tracing::subscriber::with_default(subscriber, || InteractivityDetector::from_process(&env))
    }

    #[test]
    fn debug_for_other_targets_is_ignored() {
        let detector = detect_under_filter("somecrate=debug,modkit=info");
        assert!(!detector.debug);
    }

    #[test]
    fn modkit_debug_filter_is_detected() {
        let detector = detect_under_filter("modkit=debug");
        assert!(detector.debug);
        assert_eq!(detector.reason(), Some("debug logging is enabled"));
    }
}
