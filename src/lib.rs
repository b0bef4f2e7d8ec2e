pub mod errors;
pub mod context;
pub mod registry;   // software-type plugin model
pub mod schema;
pub mod selector;
pub mod settings;
pub mod project;

use selector::{InterpretationSchemaBuilder, SchemaSelector};

/// Convenience: one-shot selection with the default sequence builders.
/// Library users who inject their own builders go through [`SchemaSelector`].
pub fn select_schema(
    registry: SoftwareTypeRegistry,
    script_context: &ScriptContext,
) -> SchemaBuildingResult {
    let selector = SchemaSelector::with_defaults(registry);
    selector.schema_for_script(script_context)
}

/// Re-export the most-used types for callers wiring up the selector.
pub use context::{ClassLoaderScope, ScriptContext, ScriptSource, Settings, SoftwareFeatureApplicator};
pub use registry::{SoftwareType, SoftwareTypeDefinition, SoftwareTypeRegistry};
pub use schema::{EvaluationSchema, InterpretationSequence, InterpretationStep, SchemaBuildingResult};
pub use selector::{ProjectSequenceBuilder, SettingsSequenceBuilder};
