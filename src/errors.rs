use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum for errors around the schema-selection machinery. The
// selector itself is total over its input and never fails; only the registry
// and the CLI classification layer produce errors.
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum SchemaError {
    // A software type with the same name was already registered
    #[error("duplicate software type: {0}")]
    DuplicateSoftwareType(String),

    // The CLI could not tell whether a file is a settings or a project script
    #[error("unrecognized script file: {0}")]
    UnrecognizedScript(String),
}

// Type alias for results that use `SchemaError` as the error type
pub type Result<T> = std::result::Result<T, SchemaError>;
