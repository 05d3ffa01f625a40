//! In-memory state for one interactive proposal-editing session.
//!
//! The session owns the editable form, the busy flags that guard the two
//! long-running operations (registry lookup and catalog rendering) and the
//! current rendered artifact. Installing a new artifact releases the
//! previous preview so repeated generations never accumulate documents.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::lookup::model::ClientRecord;
use crate::proposal::form::ProposalForm;
use crate::render::RenderedDocument;

/// A rendered artifact held for preview and download, addressed by a
/// preview id that stops resolving once the artifact is replaced.
#[derive(Debug)]
pub struct StoredDocument {
    pub id: Uuid,
    pub document: RenderedDocument,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct ProposalSession {
    pub form: ProposalForm,
    document: Option<StoredDocument>,
    lookup_in_flight: bool,
    render_in_flight: bool,
    released_previews: u64,
}

impl ProposalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a registry lookup as started. Returns `false` when one is
    /// already outstanding; there is no queue, the caller just reports busy.
    pub fn begin_lookup(&mut self) -> bool {
        if self.lookup_in_flight {
            return false;
        }
        self.lookup_in_flight = true;
        true
    }

    /// Clear the lookup busy flag, storing the record on success.
    ///
    /// A failed lookup passes `None` and leaves any previously stored
    /// client record untouched.
    pub fn finish_lookup(&mut self, record: Option<ClientRecord>) {
        self.lookup_in_flight = false;
        if let Some(record) = record {
            self.form.set_client(record);
        }
    }

    /// Mark a catalog render as started. Returns `false` when one is
    /// already outstanding.
    pub fn begin_render(&mut self) -> bool {
        if self.render_in_flight {
            return false;
        }
        self.render_in_flight = true;
        true
    }

    pub fn finish_render(&mut self) {
        self.render_in_flight = false;
    }

    /// Install a freshly rendered artifact, releasing the previous preview.
    pub fn install_document(&mut self, document: RenderedDocument) -> &StoredDocument {
        if let Some(previous) = self.document.take() {
            self.released_previews += 1;
            log::debug!(
                "released preview {} ({})",
                previous.id,
                previous.document.filename
            );
        }
        let stored = StoredDocument {
            id: Uuid::new_v4(),
            document,
            created_at: Utc::now(),
        };
        self.document.insert(stored)
    }

    /// Resolve a preview id. Ids of replaced artifacts no longer resolve.
    pub fn document(&self, id: &Uuid) -> Option<&StoredDocument> {
        self.document.as_ref().filter(|stored| stored.id == *id)
    }

    pub fn current_document(&self) -> Option<&StoredDocument> {
        self.document.as_ref()
    }

    /// How many previews have been released over the session's lifetime.
    pub fn released_previews(&self) -> u64 {
        self.released_previews
    }
}
