use std::sync::Arc;

use interpretation_schema as ischema;
use interpretation_schema::selector::{InterpretationSchemaBuilder, SchemaSelector};
use interpretation_schema::{
    ClassLoaderScope, ScriptContext, ScriptSource, Settings, SoftwareFeatureApplicator,
    SoftwareTypeDefinition, SoftwareTypeRegistry,
};
use proptest::prelude::*;

struct NoopApplicator;

impl SoftwareFeatureApplicator for NoopApplicator {
    fn apply_feature(&self, _feature: &str) -> ischema::errors::Result<()> {
        Ok(())
    }
}

// All five context kinds, parameterized enough for proptest to shuffle.
fn arb_context() -> impl Strategy<Value = ScriptContext> {
    prop_oneof![
        Just(ScriptContext::Unknown),
        Just(ScriptContext::SettingsScript),
        Just(ScriptContext::ProjectScript),
        "[a-z]{1,12}".prop_map(|name| ScriptContext::LoadedSettings {
            settings: Settings::new(name.clone(), format!("/tmp/{name}")),
            target_scope: ClassLoaderScope::root().child("settings"),
            script_source: ScriptSource::from_file(format!("{name}/settings.dcl"), "settings"),
        }),
        Just(ScriptContext::LoadedProject {
            feature_applicator: Arc::new(NoopApplicator),
        }),
    ]
}

fn selector() -> SchemaSelector {
    let mut registry = SoftwareTypeRegistry::new();
    registry
        .register(SoftwareTypeDefinition::new("javaLibrary", "JavaLibrary"))
        .unwrap();
    SchemaSelector::with_defaults(registry)
}

proptest! {
    // Availability is determined by the variant alone.
    #[test]
    fn availability_matches_variant(context in arb_context()) {
        let loaded = matches!(
            context,
            ScriptContext::LoadedSettings { .. } | ScriptContext::LoadedProject { .. }
        );
        let result = selector().schema_for_script(&context);
        prop_assert_eq!(result.is_available(), loaded);
    }

    // No hidden state: asking twice gives the same plan.
    #[test]
    fn selection_is_idempotent(context in arb_context()) {
        let selector = selector();
        let first = selector.schema_for_script(&context);
        let second = selector.schema_for_script(&context);
        prop_assert_eq!(first.is_available(), second.is_available());
        if let (Some(a), Some(b)) = (first.into_sequence(), second.into_sequence()) {
            prop_assert_eq!(a.step_ids(), b.step_ids());
        }
    }
}
