//! Company lookup in the public CNPJ registry.
//!
//! A raw tax id is cleaned to 14 digits, sent to the registry in a single
//! GET and mapped into a [`model::ClientRecord`]. There is no retry policy;
//! the user retries manually from the form.

pub mod client;
pub mod handlers;
pub mod model;

#[cfg(test)]
mod tests;

pub use client::CnpjRegistryClient;
pub use model::{format_cnpj, ClientRecord};

use thiserror::Error;

/// Errors surfaced by the registry lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The input did not clean up to exactly 14 digits. Raised before any
    /// network call is made.
    #[error("CNPJ inválido: informe os 14 dígitos do CNPJ")]
    InvalidIdentifier,
    /// The registry call failed or returned a non-success status. No
    /// partial record is produced.
    #[error("Não foi possível consultar o CNPJ: {0}")]
    LookupFailed(String),
}

impl LookupError {
    /// Stable code used in API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::InvalidIdentifier => "InvalidIdentifier",
            LookupError::LookupFailed(_) => "LookupFailed",
        }
    }
}
