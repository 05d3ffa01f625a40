use std::env;

use super::model::{clean_cnpj, ClientRecord, RegistryCompany};
use super::LookupError;

const DEFAULT_REGISTRY_URL: &str = "https://brasilapi.com.br/api/cnpj/v1";

/// HTTP client for the public company registry.
///
/// One lookup is a single GET keyed by the cleaned 14-digit CNPJ. A failed
/// call carries no partial record; the caller decides whether to retry.
#[derive(Debug, Clone)]
pub struct CnpjRegistryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CnpjRegistryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        CnpjRegistryClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client from `CNPJ_REGISTRY_URL`, falling back to the public
    /// registry endpoint.
    pub fn from_env() -> Self {
        let base_url =
            env::var("CNPJ_REGISTRY_URL").unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());
        Self::new(base_url)
    }

    /// Look up a company by tax id.
    ///
    /// Identifiers that do not clean up to 14 digits are rejected before
    /// any network call.
    pub async fn lookup(&self, raw: &str) -> Result<ClientRecord, LookupError> {
        let digits = clean_cnpj(raw);
        if digits.len() != 14 {
            return Err(LookupError::InvalidIdentifier);
        }

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), digits);
        log::info!("looking up CNPJ {} in the registry", digits);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::LookupFailed(err.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::LookupFailed(format!(
                "registro respondeu com status {}",
                response.status()
            )));
        }

        let company: RegistryCompany = response
            .json()
            .await
            .map_err(|err| LookupError::LookupFailed(err.to_string()))?;

        Ok(ClientRecord::from_registry(&digits, company))
    }
}
