use std::sync::Arc;

use tracing::debug;

use crate::context::SoftwareFeatureApplicator;
use crate::registry::SoftwareTypeRegistry;
use crate::schema::{EvaluationSchema, InterpretationSequence, InterpretationStep};
use crate::selector::ProjectSequenceBuilder;

pub const STEP_PROJECT: &str = "project";

/// Project scripts are interpreted in a single stage against the `Project`
/// receiver. The feature applicator rides on the step so the conversion
/// phase can materialize software-type blocks later; this crate never
/// invokes it.
pub struct DefaultProjectSequenceBuilder;

impl ProjectSequenceBuilder for DefaultProjectSequenceBuilder {
    fn build(
        &self,
        registry: &SoftwareTypeRegistry,
        applicator: &Arc<dyn SoftwareFeatureApplicator>,
    ) -> InterpretationSequence {
        debug!(software_types = registry.names().len(), "assembling project interpretation sequence");

        InterpretationSequence::new(vec![InterpretationStep::new(
            STEP_PROJECT,
            EvaluationSchema::new("Project", registry.names()),
        )
        .with_applicator(Arc::clone(applicator))])
    }
}
