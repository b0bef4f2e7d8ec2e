use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use interpretation_schema::errors::{Result, SchemaError};
use interpretation_schema::selector::{InterpretationSchemaBuilder, SchemaSelector};
use interpretation_schema::{
    ClassLoaderScope, SchemaBuildingResult, ScriptContext, ScriptSource, Settings,
    SoftwareFeatureApplicator, SoftwareTypeDefinition, SoftwareTypeRegistry,
};

/// Simple runner: classify a declarative script file and print the
/// interpretation plan the evaluator would use for it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a declarative script (settings.* or a project build script)
    script: String,
    /// Software type to register, as name=ModelType (repeatable)
    #[arg(long = "software-type", value_name = "NAME=MODEL")]
    software_types: Vec<String>,
    /// Treat host services as not yet resolved (optional flag)
    #[arg(long)]
    unresolved: bool,
}

/// Conventional file-name classification. The library takes pre-classified
/// contexts; this mapping exists only at the CLI boundary.
fn classify(path: &str, unresolved: bool) -> Result<ScriptContext> {
    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    match stem {
        "settings" if unresolved => Ok(ScriptContext::SettingsScript),
        "settings" => {
            let dir = Path::new(path).parent().unwrap_or_else(|| Path::new("."));
            let root_project_name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "root".to_string());
            Ok(ScriptContext::LoadedSettings {
                settings: Settings::new(root_project_name, dir),
                target_scope: ClassLoaderScope::root().child("settings"),
                script_source: ScriptSource::from_file(path, "settings"),
            })
        }
        "build" if unresolved => Ok(ScriptContext::ProjectScript),
        "build" => Ok(ScriptContext::LoadedProject {
            feature_applicator: Arc::new(LoggingApplicator),
        }),
        "" => Ok(ScriptContext::Unknown),
        _ => Err(SchemaError::UnrecognizedScript(path.to_string())),
    }
}

/// Stand-in applicator for the CLI: real feature application happens in the
/// conversion stage of the surrounding evaluator.
struct LoggingApplicator;

impl SoftwareFeatureApplicator for LoggingApplicator {
    fn apply_feature(&self, feature: &str) -> Result<()> {
        tracing::info!(feature, "would apply software feature");
        Ok(())
    }
}

fn parse_software_types(specs: &[String]) -> Result<SoftwareTypeRegistry> {
    let mut registry = SoftwareTypeRegistry::new();
    for spec in specs {
        let (name, model) = spec.split_once('=').unwrap_or((spec.as_str(), spec.as_str()));
        registry.register(SoftwareTypeDefinition::new(name, model))?;
    }
    Ok(registry)
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Build the registry from the repeated --software-type flags.
    let registry = match parse_software_types(&args.software_types) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Classify the script path into a context.
    let context = match classify(&args.script, args.unresolved) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Select the schema and print the plan.
    let selector = SchemaSelector::with_defaults(registry);
    match selector.schema_for_script(&context) {
        SchemaBuildingResult::Available(sequence) => {
            println!("{}", serde_json::to_string_pretty(&sequence.report()).unwrap());
        }
        SchemaBuildingResult::NotBuilt => {
            println!("no schema available for {} script context", context.kind());
        }
    }
}
