use tracing::debug;

use crate::context::{ClassLoaderScope, ScriptSource, Settings};
use crate::registry::SoftwareTypeRegistry;
use crate::schema::{EvaluationSchema, InterpretationSequence, InterpretationStep};
use crate::selector::SettingsSequenceBuilder;

pub const STEP_SETTINGS_PLUGIN_MANAGEMENT: &str = "settingsPluginManagement";
pub const STEP_SETTINGS: &str = "settings";

/// Settings scripts are interpreted in two stages: plugin management first,
/// because the plugins it resolves can shape the schema the second stage
/// evaluates the rest of the script against.
pub struct DefaultSettingsSequenceBuilder;

impl SettingsSequenceBuilder for DefaultSettingsSequenceBuilder {
    fn build(
        &self,
        settings: &Settings,
        target_scope: &ClassLoaderScope,
        script_source: &ScriptSource,
        registry: &SoftwareTypeRegistry,
    ) -> InterpretationSequence {
        debug!(
            root_project = %settings.root_project_name,
            scope = %target_scope.id(),
            source = %script_source.display_name,
            "assembling settings interpretation sequence"
        );

        InterpretationSequence::new(vec![
            InterpretationStep::new(
                STEP_SETTINGS_PLUGIN_MANAGEMENT,
                EvaluationSchema::new("Settings", vec![]),
            ),
            InterpretationStep::new(
                STEP_SETTINGS,
                EvaluationSchema::new("Settings", registry.names()),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SoftwareTypeDefinition;
    use pretty_assertions::assert_eq;

    fn build(registry: &SoftwareTypeRegistry) -> InterpretationSequence {
        DefaultSettingsSequenceBuilder.build(
            &Settings::new("demo", "/tmp/demo"),
            &ClassLoaderScope::root().child("settings"),
            &ScriptSource::from_file("settings.dcl", "settings"),
            registry,
        )
    }

    #[test]
    fn plugin_management_runs_before_settings() {
        let sequence = build(&SoftwareTypeRegistry::new());
        assert_eq!(
            sequence.step_ids(),
            vec![STEP_SETTINGS_PLUGIN_MANAGEMENT, STEP_SETTINGS]
        );
    }

    #[test]
    fn only_the_settings_step_sees_software_types() {
        let mut registry = SoftwareTypeRegistry::new();
        registry.register(SoftwareTypeDefinition::new("javaLibrary", "JavaLibrary")).unwrap();

        let sequence = build(&registry);
        let steps = sequence.steps();
        assert!(steps[0].evaluation_schema.software_types.is_empty());
        assert_eq!(steps[1].evaluation_schema.software_types, vec!["javaLibrary"]);
        assert_eq!(steps[1].evaluation_schema.top_level_receiver, "Settings");
    }
}
