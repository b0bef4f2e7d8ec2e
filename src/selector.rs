use std::sync::Arc;

use tracing::debug;

use crate::context::{ClassLoaderScope, ScriptContext, ScriptSource, Settings, SoftwareFeatureApplicator};
use crate::registry::SoftwareTypeRegistry;
use crate::schema::{InterpretationSequence, SchemaBuildingResult};

/// Builds the interpretation sequence for a loaded settings script. Owned by
/// the settings subsystem; the selector treats it as a black box.
pub trait SettingsSequenceBuilder: Send + Sync {
    fn build(
        &self,
        settings: &Settings,
        target_scope: &ClassLoaderScope,
        script_source: &ScriptSource,
        registry: &SoftwareTypeRegistry,
    ) -> InterpretationSequence;
}

/// Builds the interpretation sequence for a loaded project script.
pub trait ProjectSequenceBuilder: Send + Sync {
    fn build(
        &self,
        registry: &SoftwareTypeRegistry,
        applicator: &Arc<dyn SoftwareFeatureApplicator>,
    ) -> InterpretationSequence;
}

/// Anything that can answer "is there a schema for this script context?".
pub trait InterpretationSchemaBuilder {
    fn schema_for_script(&self, context: &ScriptContext) -> SchemaBuildingResult;
}

/// The in-process schema selector: routes a classified script context to the
/// settings or project sequence builder, or reports that no schema exists.
/// Holds no mutable state; safe to share across threads.
pub struct SchemaSelector {
    registry: SoftwareTypeRegistry,
    settings_builder: Arc<dyn SettingsSequenceBuilder>,
    project_builder: Arc<dyn ProjectSequenceBuilder>,
}

impl SchemaSelector {
    pub fn new(
        registry: SoftwareTypeRegistry,
        settings_builder: Arc<dyn SettingsSequenceBuilder>,
        project_builder: Arc<dyn ProjectSequenceBuilder>,
    ) -> Self {
        Self { registry, settings_builder, project_builder }
    }

    /// Selector wired to the default sequence builders.
    pub fn with_defaults(registry: SoftwareTypeRegistry) -> Self {
        Self::new(
            registry,
            Arc::new(crate::settings::DefaultSettingsSequenceBuilder),
            Arc::new(crate::project::DefaultProjectSequenceBuilder),
        )
    }

    pub fn registry(&self) -> &SoftwareTypeRegistry {
        &self.registry
    }
}

impl InterpretationSchemaBuilder for SchemaSelector {
    // Exhaustive over every context variant on purpose: adding a variant must
    // fail to compile here rather than silently fall through.
    fn schema_for_script(&self, context: &ScriptContext) -> SchemaBuildingResult {
        match context {
            ScriptContext::Unknown => {
                debug!(kind = context.kind(), "no schema: script not classified");
                SchemaBuildingResult::NotBuilt
            }

            ScriptContext::LoadedSettings { settings, target_scope, script_source } => {
                debug!(source = %script_source.display_name, "building settings schema");
                SchemaBuildingResult::Available(self.settings_builder.build(
                    settings,
                    target_scope,
                    script_source,
                    &self.registry,
                ))
            }

            ScriptContext::LoadedProject { feature_applicator } => {
                debug!("building project schema");
                SchemaBuildingResult::Available(
                    self.project_builder.build(&self.registry, feature_applicator),
                )
            }

            // Can't build a schema for an unresolved settings or project
            // script: its services and script data are not reachable yet.
            ScriptContext::SettingsScript | ScriptContext::ProjectScript => {
                debug!(kind = context.kind(), "no schema: host services unresolved");
                SchemaBuildingResult::NotBuilt
            }
        }
    }
}
