use parking_lot::RwLock;

use crate::lookup::client::CnpjRegistryClient;
use crate::render::CatalogRenderer;
use crate::session::ProposalSession;

/// Shared application state: one in-memory proposal session plus the
/// collaborators used to fill and render it.
pub struct AppState {
    pub session: RwLock<ProposalSession>,
    pub registry: CnpjRegistryClient,
    pub renderer: CatalogRenderer,
}

impl AppState {
    /// State for the real server, with the registry endpoint taken from the
    /// environment.
    pub fn from_env() -> Self {
        Self::with_registry(CnpjRegistryClient::from_env())
    }

    /// State with an explicit registry client, used by tests to point the
    /// lookup at a controlled endpoint.
    pub fn with_registry(registry: CnpjRegistryClient) -> Self {
        AppState {
            session: RwLock::new(ProposalSession::new()),
            registry,
            renderer: CatalogRenderer,
        }
    }
}
