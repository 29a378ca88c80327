// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Costing — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostingError {
    #[error("Unknown fuel type: {0}")]
    InvalidFuel(String),

    #[error("Unknown confinement concept: {0}")]
    InvalidConcept(String),

    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Unknown {kind} override key: {key}")]
    UnknownOverride { kind: &'static str, key: String },

    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Input is for {input}, but the model is configured for {model}")]
    ConceptMismatch { input: String, model: String },

    #[error("Every concept failed: {}", format_failures(.0))]
    AllConceptsFailed(Vec<(String, String)>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CostingError {
    pub fn invalid_parameter(name: &str, message: impl Into<String>) -> Self {
        CostingError::InvalidParameter {
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CostingError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

fn format_failures(failures: &[(String, String)]) -> String {
    failures
        .iter()
        .map(|(concept, err)| format!("{concept}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

pub type CostingResult<T> = Result<T, CostingError>;
