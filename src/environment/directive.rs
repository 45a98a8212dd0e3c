//! Version directives.
//!
//! A directive is a request for a particular target version, coming either
//! from a CLI option or from an environment variable. There are two kinds:
//! the tool (engine) version and the platform version.

use std::fmt;

use super::vars::{EnvLookup, PLATFORM_VERSION_VAR, TOOL_VERSION_VAR};

/// Which version a directive targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VersionKind {
    /// The engine version itself (`--tool-version`).
    Tool,
    /// A platform distribution version that maps to an engine version.
    Platform,
}

impl VersionKind {
    /// All kinds, in resolution order.
    pub const ALL: [VersionKind; 2] = [VersionKind::Tool, VersionKind::Platform];

    /// The CLI option for this kind.
    pub fn option_name(&self) -> &'static str {
        match self {
            Self::Tool => "--tool-version",
            Self::Platform => "--platform-version",
        }
    }

    /// The environment variable for this kind.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Tool => TOOL_VERSION_VAR,
            Self::Platform => PLATFORM_VERSION_VAR,
        }
    }
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tool => write!(f, "Tool"),
            Self::Platform => write!(f, "Platform"),
        }
    }
}

/// Where a directive came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveOrigin {
    /// A command-line option.
    Option,
    /// An environment variable.
    Environment,
}

/// A single present version directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDirective {
    pub kind: VersionKind,
    pub origin: DirectiveOrigin,
    pub value: String,
}

impl VersionDirective {
    /// Create a directive.
    pub fn new(kind: VersionKind, origin: DirectiveOrigin, value: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            value: value.into(),
        }
    }

    /// Human-readable label used in conflict messages.
    ///
    /// ```
    /// use modkit::environment::{DirectiveOrigin, VersionDirective, VersionKind};
    ///
    /// let d = VersionDirective::new(VersionKind::Tool, DirectiveOrigin::Environment, "5.3");
    /// assert_eq!(d.label(), "MODKIT_TOOL_VERSION environment variable");
    /// ```
    pub fn label(&self) -> String {
        match self.origin {
            DirectiveOrigin::Option => format!("{} option", self.kind.option_name()),
            DirectiveOrigin::Environment => {
                format!("{} environment variable", self.kind.env_var())
            }
        }
    }

    /// The directive as it was written, e.g. `--tool-version=5.3`.
    pub fn assignment(&self) -> String {
        match self.origin {
            DirectiveOrigin::Option => format!("{}={}", self.kind.option_name(), self.value),
            DirectiveOrigin::Environment => format!("{}={}", self.kind.env_var(), self.value),
        }
    }
}

/// The set of present directives for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDirectives {
    directives: Vec<VersionDirective>,
}

impl VersionDirectives {
    /// Collect directives from CLI option values and the environment.
    ///
    /// Empty values count as absent.
    pub fn collect(
        tool_option: Option<&str>,
        platform_option: Option<&str>,
        env: &dyn EnvLookup,
    ) -> Self {
        let mut directives = Vec::new();

        let options = [
            (VersionKind::Tool, tool_option),
            (VersionKind::Platform, platform_option),
        ];
        for (kind, value) in options {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                directives.push(VersionDirective::new(kind, DirectiveOrigin::Option, value));
            }
        }

        for kind in VersionKind::ALL {
            if let Some(value) = env.get_non_empty(kind.env_var()) {
                directives.push(VersionDirective::new(
                    kind,
                    DirectiveOrigin::Environment,
                    value,
                ));
            }
        }

        Self { directives }
    }

    /// Build from an explicit list (for testing).
    pub fn from_vec(directives: Vec<VersionDirective>) -> Self {
        Self { directives }
    }

    /// All present directives.
    pub fn iter(&self) -> impl Iterator<Item = &VersionDirective> {
        self.directives.iter()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Find the directive of a given kind and origin.
    pub fn find(&self, kind: VersionKind, origin: DirectiveOrigin) -> Option<&VersionDirective> {
        self.directives
            .iter()
            .find(|d| d.kind == kind && d.origin == origin)
    }

    /// The effective directive for a kind: the option wins over the environment.
    pub fn effective(&self, kind: VersionKind) -> Option<&VersionDirective> {
        self.find(kind, DirectiveOrigin::Option)
            .or_else(|| self.find(kind, DirectiveOrigin::Environment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn collect_with_nothing_present() {
        let directives = VersionDirectives::collect(None, None, &make_env(&[]));
        assert!(directives.is_empty());
    }

    #[test]
    fn collect_ignores_empty_values() {
        let env = make_env(&[(TOOL_VERSION_VAR, ""), (PLATFORM_VERSION_VAR, "")]);
        let directives = VersionDirectives::collect(Some(""), None, &env);
        assert!(directives.is_empty());
    }

    #[test]
    fn collect_options_and_env() {
        let env = make_env(&[(TOOL_VERSION_VAR, "5.1")]);
        let directives = VersionDirectives::collect(Some("5.3"), Some("2017.3"), &env);
        assert_eq!(directives.len(), 3);
        assert_eq!(
            directives
                .find(VersionKind::Platform, DirectiveOrigin::Option)
                .map(|d| d.value.as_str()),
            Some("2017.3")
        );
    }

    #[test]
    fn option_is_effective_over_env() {
        let env = make_env(&[(TOOL_VERSION_VAR, "5.1")]);
        let directives = VersionDirectives::collect(Some("5.3"), None, &env);
        let effective = directives.effective(VersionKind::Tool).unwrap();
        assert_eq!(effective.value, "5.3");
        assert_eq!(effective.origin, DirectiveOrigin::Option);
    }

    #[test]
    fn env_is_effective_without_option() {
        let env = make_env(&[(PLATFORM_VERSION_VAR, "2017.3.1")]);
        let directives = VersionDirectives::collect(None, None, &env);
        let effective = directives.effective(VersionKind::Platform).unwrap();
        assert_eq!(effective.origin, DirectiveOrigin::Environment);
        assert!(directives.effective(VersionKind::Tool).is_none());
    }

    #[test]
    fn labels_and_assignments() {
        let opt = VersionDirective::new(VersionKind::Platform, DirectiveOrigin::Option, "2016.2");
        assert_eq!(opt.label(), "--platform-version option");
        assert_eq!(opt.assignment(), "--platform-version=2016.2");

        let env = VersionDirective::new(VersionKind::Tool, DirectiveOrigin::Environment, "5.1");
        assert_eq!(env.assignment(), "MODKIT_TOOL_VERSION=5.1");
    }
}
