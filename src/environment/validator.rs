//! Version directive validation.
//!
//! Only one kind of version may be requested per invocation. Within a kind,
//! a CLI option silently beats the environment variable, but the user is
//! warned that both were given. Two options, two environment variables, or
//! an option and an environment variable of different kinds are conflicts.
//!
//! With more than two directives present, every cross-kind pair conflicts.
//! The pair reported is the first found in this order: option/option,
//! environment/environment, option/environment.

use crate::error::{ModkitError, Result};
use crate::ui::UserInterface;

use super::directive::{DirectiveOrigin, VersionDirective, VersionDirectives, VersionKind};

/// How a pair of present directives relates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Same kind, one option and one environment variable.
    Override,
    /// Two CLI options.
    OptionConflict,
    /// Two environment variables.
    EnvironmentConflict,
    /// An option and an environment variable of different kinds.
    CrossConflict,
}

impl PairOutcome {
    /// Classify two distinct directives.
    pub fn classify(a: &VersionDirective, b: &VersionDirective) -> Self {
        use DirectiveOrigin as O;

        match (a.origin, b.origin, a.kind == b.kind) {
            (O::Option, O::Option, _) => Self::OptionConflict,
            (O::Environment, O::Environment, _) => Self::EnvironmentConflict,
            (O::Option, O::Environment, true) | (O::Environment, O::Option, true) => Self::Override,
            (O::Option, O::Environment, false) | (O::Environment, O::Option, false) => {
                Self::CrossConflict
            }
        }
    }

    /// Lower values are reported first.
    fn priority(&self) -> Option<u8> {
        match self {
            Self::OptionConflict => Some(0),
            Self::EnvironmentConflict => Some(1),
            Self::CrossConflict => Some(2),
            Self::Override => None,
        }
    }
}

/// Validates the combination of present version directives.
pub struct VersionOptionValidator;

impl VersionOptionValidator {
    /// Fail on conflicting directives; warn when an option overrides an
    /// environment variable of the same kind.
    ///
    /// # Example
    ///
    /// ```
    /// use modkit::environment::{
    ///     DirectiveOrigin, VersionDirective, VersionDirectives, VersionKind,
    ///     VersionOptionValidator,
    /// };
    /// use modkit::ui::MockUI;
    ///
    /// let directives = VersionDirectives::from_vec(vec![
    ///     VersionDirective::new(VersionKind::Tool, DirectiveOrigin::Option, "5.3"),
    ///     VersionDirective::new(VersionKind::Tool, DirectiveOrigin::Environment, "5.1"),
    /// ]);
    /// let mut ui = MockUI::new();
    /// VersionOptionValidator::validate(&directives, &mut ui).unwrap();
    /// assert!(ui.has_warning("overrides value from environment"));
    /// ```
    pub fn validate(directives: &VersionDirectives, ui: &mut dyn UserInterface) -> Result<()> {
        let present: Vec<&VersionDirective> = directives.iter().collect();

        let mut worst: Option<(u8, &VersionDirective, &VersionDirective)> = None;
        for (i, a) in present.iter().enumerate() {
            for b in &present[i + 1..] {
                let Some(priority) = PairOutcome::classify(a, b).priority() else {
                    continue;
                };
                if worst.map_or(true, |(p, _, _)| priority < p) {
                    worst = Some((priority, *a, *b));
                }
            }
        }

        if let Some((_, a, b)) = worst {
            return Err(ModkitError::VersionConflict(conflict_message(a, b)));
        }

        for kind in VersionKind::ALL {
            if let (Some(option), Some(env)) = (
                directives.find(kind, DirectiveOrigin::Option),
                directives.find(kind, DirectiveOrigin::Environment),
            ) {
                let warning = override_warning(kind, option, env);
                tracing::debug!("{}", warning);
                ui.warning(&warning);
            }
        }

        Ok(())
    }
}

/// Conflict message naming both directives in sorted order.
fn conflict_message(a: &VersionDirective, b: &VersionDirective) -> String {
    let mut labels = [a.label(), b.label()];
    labels.sort();
    format!(
        "You cannot specify a {} and {} at the same time.",
        labels[0], labels[1]
    )
}

fn override_warning(
    kind: VersionKind,
    option: &VersionDirective,
    env: &VersionDirective,
) -> String {
    format!(
        "{} version option from command line: \"{}\" overrides value from environment: \"{}\". You should not specify both.",
        kind,
        option.assignment(),
        env.assignment()
    )
}
