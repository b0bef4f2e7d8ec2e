use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a declarative script came from, e.g. "settings script 'settings.dcl'".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSource {
    pub file_name: String,
    pub display_name: String,
}

impl ScriptSource {
    pub fn from_file(path: impl AsRef<Path>, kind: &str) -> Self {
        let file_name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let display_name = format!("{kind} script '{}'", path.as_ref().display());
        Self { file_name, display_name }
    }
}

/// Handle to the class-loader scope a script's classes resolve against.
/// Scopes nest; a child scope sees everything its parent sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLoaderScope {
    path: Vec<String>,
}

impl ClassLoaderScope {
    pub fn root() -> Self {
        Self { path: vec!["root".to_string()] }
    }

    pub fn child(&self, name: &str) -> Self {
        let mut path = self.path.clone();
        path.push(name.to_string());
        Self { path }
    }

    /// Dotted path from the root scope, e.g. "root.settings".
    pub fn id(&self) -> String {
        self.path.join(".")
    }
}

/// Handle to the settings object a settings script configures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root_project_name: String,
    pub settings_dir: PathBuf,
}

impl Settings {
    pub fn new(root_project_name: impl Into<String>, settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_project_name: root_project_name.into(),
            settings_dir: settings_dir.into(),
        }
    }
}

/// Applies a declared software feature to the project's object graph during
/// the conversion stage. Internals live in another subsystem; the selector
/// only forwards the handle into the project interpretation sequence.
pub trait SoftwareFeatureApplicator: Send + Sync {
    fn apply_feature(&self, feature: &str) -> crate::errors::Result<()>;
}

/// Classified origin of a declarative script plus the host services resolved
/// for it. Exactly one variant is active per value; membership is fixed at
/// construction. The unresolved `SettingsScript`/`ProjectScript` variants are
/// deliberately distinct from `Unknown` even though schema selection treats
/// them alike: callers elsewhere rely on knowing which kind of script they
/// are looking at before its services arrive.
#[derive(Clone)]
pub enum ScriptContext {
    /// Script origin not yet classified.
    Unknown,
    /// A settings script whose host services are not yet resolved.
    SettingsScript,
    /// A project script whose host services are not yet resolved.
    ProjectScript,
    /// A settings script with its host services fully resolved.
    LoadedSettings {
        settings: Settings,
        target_scope: ClassLoaderScope,
        script_source: ScriptSource,
    },
    /// A project script with its host services fully resolved.
    LoadedProject {
        feature_applicator: Arc<dyn SoftwareFeatureApplicator>,
    },
}

impl ScriptContext {
    /// Short tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptContext::Unknown => "unknown",
            ScriptContext::SettingsScript => "settings (unresolved)",
            ScriptContext::ProjectScript => "project (unresolved)",
            ScriptContext::LoadedSettings { .. } => "settings (loaded)",
            ScriptContext::LoadedProject { .. } => "project (loaded)",
        }
    }
}

impl fmt::Debug for ScriptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptContext::LoadedSettings { settings, target_scope, script_source } => f
                .debug_struct("LoadedSettings")
                .field("settings", settings)
                .field("target_scope", target_scope)
                .field("script_source", script_source)
                .finish(),
            ScriptContext::LoadedProject { .. } => {
                f.debug_struct("LoadedProject").finish_non_exhaustive()
            }
            other => f.write_str(other.kind()),
        }
    }
}
