//! Env command implementation.
//!
//! The `modkit env` command prints the resolved target environment on
//! stdout so that scripts can `eval` it or parse it as JSON.

use std::path::{Path, PathBuf};

use crate::cli::args::{EnvArgs, PreflightArgs};
use crate::environment::{EnvLookup, ResolvedEnvironment};
use crate::error::{ModkitError, Result};
use crate::module::ModuleMetadata;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::preflight::resolve_environment;

/// The env command implementation.
pub struct EnvCommand<'a> {
    cwd: PathBuf,
    preflight: PreflightArgs,
    args: EnvArgs,
    env: &'a dyn EnvLookup,
}

impl<'a> EnvCommand<'a> {
    /// Create a new env command.
    pub fn new(
        cwd: &Path,
        preflight: PreflightArgs,
        args: EnvArgs,
        env: &'a dyn EnvLookup,
    ) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            preflight,
            args,
            env,
        }
    }

    /// Resolve the environment without printing it.
    pub fn resolve(&self, ui: &mut dyn UserInterface) -> Result<ResolvedEnvironment> {
        let metadata = ModuleMetadata::discover(&self.cwd)?;
        resolve_environment(&self.preflight, self.env, metadata.as_ref(), ui)
    }
}

impl Command for EnvCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.resolve(ui)?;
        println!("{}", render(&resolved, self.args.json)?);
        Ok(CommandResult::success())
    }
}

/// Format a resolved environment as shell assignments or JSON.
///
/// ```
/// use modkit::catalog::BuiltinCatalog;
/// use modkit::cli::commands::env::render;
/// use modkit::environment::{VersionDirectives, VersionSourceResolver};
/// use modkit::ui::MockUI;
/// use std::collections::HashMap;
///
/// let catalog = BuiltinCatalog::embedded().unwrap();
/// let env: HashMap<String, String> = HashMap::new();
/// let directives = VersionDirectives::collect(Some("5.3"), None, &env);
/// let resolved = VersionSourceResolver::new(&catalog)
///     .resolve(&directives, None, &mut MockUI::new())
///     .unwrap();
///
/// let shell = render(&resolved, false).unwrap();
/// assert!(shell.contains("MODKIT_ENGINE_VERSION=5.3.6"));
/// ```
pub fn render(resolved: &ResolvedEnvironment, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(resolved)
            .map_err(|e| ModkitError::Other(anyhow::anyhow!(e)));
    }

    let mut lines = vec![format!("MODKIT_RUNTIME_VERSION={}", resolved.runtime_version)];
    for (name, version) in &resolved.toolset {
        lines.push(format!(
            "MODKIT_{}_VERSION={}",
            name.to_ascii_uppercase(),
            version
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn make_env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn write_metadata(dir: &Path, content: &str) {
        fs::write(dir.join("metadata.json"), content).unwrap();
    }

    #[test]
    fn resolves_latest_outside_module() {
        let temp = TempDir::new().unwrap();
        let env = make_env(&[]);
        let cmd = EnvCommand::new(temp.path(), PreflightArgs::default(), EnvArgs::default(), &env);
        let mut ui = MockUI::new();

        let resolved = cmd.resolve(&mut ui).unwrap();

        assert_eq!(resolved.runtime_version.to_string(), "2.5.3");
        assert_eq!(resolved.engine_version().unwrap().to_string(), "6.4.2");
    }

    #[test]
    fn uses_metadata_requirement_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        write_metadata(
            temp.path(),
            r#"{"name": "acme-ntp", "requirements": [{"name": "engine", "version_requirement": ">= 4.7.0 < 6.0.0"}]}"#,
        );
        let sub = temp.path().join("manifests");
        fs::create_dir(&sub).unwrap();
        let env = make_env(&[]);
        let cmd = EnvCommand::new(&sub, PreflightArgs::default(), EnvArgs::default(), &env);
        let mut ui = MockUI::new();

        let resolved = cmd.resolve(&mut ui).unwrap();

        assert_eq!(resolved.engine_version().unwrap().to_string(), "5.5.8");
        assert!(ui.has_message("Using runtime 2.4.4"));
    }

    #[test]
    fn env_variable_beats_metadata() {
        let temp = TempDir::new().unwrap();
        write_metadata(
            temp.path(),
            r#"{"requirements": [{"name": "engine", "version_requirement": ">= 6.0.0"}]}"#,
        );
        let env = make_env(&[("MODKIT_PLATFORM_VERSION", "2016.4")]);
        let cmd = EnvCommand::new(temp.path(), PreflightArgs::default(), EnvArgs::default(), &env);
        let mut ui = MockUI::new();

        let resolved = cmd.resolve(&mut ui).unwrap();

        assert_eq!(resolved.engine_version().unwrap().to_string(), "4.7.1");
    }

    #[test]
    fn invalid_metadata_fails() {
        let temp = TempDir::new().unwrap();
        write_metadata(temp.path(), "{ not json");
        let env = make_env(&[]);
        let cmd = EnvCommand::new(temp.path(), PreflightArgs::default(), EnvArgs::default(), &env);
        let mut ui = MockUI::new();

        let err = cmd.resolve(&mut ui).unwrap_err();

        assert!(matches!(err, ModkitError::MetadataParse { .. }));
    }

    #[test]
    fn render_shell_assignments() {
        let temp = TempDir::new().unwrap();
        let env = make_env(&[]);
        let cmd = EnvCommand::new(temp.path(), PreflightArgs::default(), EnvArgs::default(), &env);
        let resolved = cmd.resolve(&mut MockUI::new()).unwrap();

        let output = render(&resolved, false).unwrap();

        assert_eq!(
            output,
            "MODKIT_RUNTIME_VERSION=2.5.3\nMODKIT_ENGINE_VERSION=6.4.2"
        );
    }

    #[test]
    fn render_json() {
        let temp = TempDir::new().unwrap();
        let env = make_env(&[]);
        let cmd = EnvCommand::new(temp.path(), PreflightArgs::default(), EnvArgs::default(), &env);
        let resolved = cmd.resolve(&mut MockUI::new()).unwrap();

        let output = render(&resolved, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["runtime_version"], "2.5.3");
        assert_eq!(value["toolset"]["engine"], "6.4.2");
        assert!(value.get("source").is_none());
    }
}
