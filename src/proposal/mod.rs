//! Proposal form state, validation and submission.

pub mod form;
pub mod handlers;
pub mod models;

#[cfg(test)]
mod tests;

pub use form::{ProposalForm, RemovePlanOutcome};
pub use models::{PlanField, PlanLineItem, ProposalSubmission};

use thiserror::Error;

/// Submission-time validation failures. The form is left untouched and the
/// user fixes the input and submits again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Selecione o mês de validade")]
    MissingValidity,
    #[error("Preencha todos os campos dos planos")]
    IncompletePlan,
}

impl SubmitError {
    /// Stable code used in API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::MissingValidity => "MissingValidity",
            SubmitError::IncompletePlan => "IncompletePlan",
        }
    }
}
