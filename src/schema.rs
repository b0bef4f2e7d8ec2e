use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::context::SoftwareFeatureApplicator;

/// Names one stage of an interpretation sequence, e.g. "settings" or
/// "settingsPluginManagement".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StepIdentifier(pub String);

impl StepIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for StepIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The structure one evaluation stage expects a script to conform to:
/// a top-level receiver type plus the software types that may contribute
/// blocks under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationSchema {
    pub top_level_receiver: String,
    pub software_types: Vec<String>,
}

impl EvaluationSchema {
    pub fn new(top_level_receiver: impl Into<String>, software_types: Vec<String>) -> Self {
        Self { top_level_receiver: top_level_receiver.into(), software_types }
    }
}

/// One stage of the plan. The project stage carries the feature applicator
/// along for the conversion phase, which runs outside this crate.
#[derive(Clone)]
pub struct InterpretationStep {
    pub id: StepIdentifier,
    pub evaluation_schema: EvaluationSchema,
    pub feature_applicator: Option<Arc<dyn SoftwareFeatureApplicator>>,
}

impl InterpretationStep {
    pub fn new(id: impl Into<String>, evaluation_schema: EvaluationSchema) -> Self {
        Self {
            id: StepIdentifier::new(id),
            evaluation_schema,
            feature_applicator: None,
        }
    }

    pub fn with_applicator(mut self, applicator: Arc<dyn SoftwareFeatureApplicator>) -> Self {
        self.feature_applicator = Some(applicator);
        self
    }
}

impl fmt::Debug for InterpretationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpretationStep")
            .field("id", &self.id)
            .field("evaluation_schema", &self.evaluation_schema)
            .field("has_applicator", &self.feature_applicator.is_some())
            .finish()
    }
}

/// Ordered plan describing how to evaluate a declarative script in stages.
/// Opaque to the selector; only the sequence builders give it structure.
#[derive(Debug, Clone, Default)]
pub struct InterpretationSequence {
    steps: Vec<InterpretationStep>,
}

/// Serializable description of a sequence, for CLI output.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub steps: Vec<StepReport>,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub id: StepIdentifier,
    pub schema: EvaluationSchema,
}

impl InterpretationSequence {
    pub fn new(steps: Vec<InterpretationStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[InterpretationStep] {
        &self.steps
    }

    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id.0.as_str()).collect()
    }

    pub fn report(&self) -> SequenceReport {
        SequenceReport {
            steps: self
                .steps
                .iter()
                .map(|s| StepReport { id: s.id.clone(), schema: s.evaluation_schema.clone() })
                .collect(),
        }
    }
}

/// Outcome of asking for a schema: either no schema can be built for the
/// given context, or an interpretation sequence is ready to hand to the
/// evaluation engine.
#[derive(Debug, Clone)]
pub enum SchemaBuildingResult {
    NotBuilt,
    Available(InterpretationSequence),
}

impl SchemaBuildingResult {
    pub fn is_available(&self) -> bool {
        matches!(self, SchemaBuildingResult::Available(_))
    }

    pub fn into_sequence(self) -> Option<InterpretationSequence> {
        match self {
            SchemaBuildingResult::Available(seq) => Some(seq),
            SchemaBuildingResult::NotBuilt => None,
        }
    }
}
