// src/application/provisioner.rs
use crate::domain::{DomainError, NewNote};
use tracing::{info, warn};

/// Port to the AnkiConnect automation API.
///
/// One method per wire action this tool uses. `Sync` because the concurrent
/// importer shares one implementation across worker threads; every call is
/// a self-contained request so implementations need no locking of their own.
pub trait AnkiService: Sync {
    /// `version` — reports the plugin's protocol version.
    fn version(&self) -> Result<i64, DomainError>;

    /// `createDeck` — idempotent on the Anki side; creating an existing
    /// deck is a no-op success there.
    fn create_deck(&self, name: &str) -> Result<(), DomainError>;

    /// `modelNames` — names of all note models in the collection.
    fn model_names(&self) -> Result<Vec<String>, DomainError>;

    /// `createModel` — creates the two-field image card model.
    fn create_model(&self) -> Result<(), DomainError>;

    /// `addNote` — creates one flashcard, returns its note id.
    fn add_note(&self, note: &NewNote) -> Result<i64, DomainError>;

    /// `deleteDecks` (with `cardsToo`) — removes a deck and its cards.
    fn delete_deck(&self, name: &str) -> Result<(), DomainError>;
}

/// Ensures the import target exists: reachable AnkiConnect, the deck, and
/// the `Basic` note model.
pub struct Provisioner<'a, S: AnkiService> {
    service: &'a S,
}

impl<'a, S: AnkiService> Provisioner<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Verify AnkiConnect is reachable and log its version.
    ///
    /// An API-level error in the version response is logged and tolerated;
    /// a transport failure propagates and ends the run before any other
    /// operation is attempted.
    pub fn check_connectivity(&self) -> Result<(), DomainError> {
        match self.service.version() {
            Ok(version) => {
                info!(version, "AnkiConnect is reachable");
                Ok(())
            }
            Err(DomainError::Api(e)) => {
                warn!(error = %e, "AnkiConnect version check returned an error");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Create the target deck. Anki treats an existing deck as success, so
    /// this is idempotent; an API error is logged and never halts the run.
    pub fn ensure_deck(&self, name: &str) -> Result<(), DomainError> {
        match self.service.create_deck(name) {
            Ok(()) => {
                info!(deck = name, "Deck is ready");
                Ok(())
            }
            Err(DomainError::Api(e)) => {
                warn!(deck = name, error = %e, "Deck creation failed");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Make sure the note model exists, creating it if absent.
    ///
    /// Failure of the `modelNames` query itself is fatal: without the list
    /// there is no way to tell whether `addNote` would land on a valid
    /// model. Failure of the creation call is logged and tolerated.
    pub fn ensure_model(&self) -> Result<(), DomainError> {
        let names = self.service.model_names()?;

        if names.iter().any(|n| n == crate::constants::MODEL_NAME) {
            info!(model = crate::constants::MODEL_NAME, "Note model already exists");
            return Ok(());
        }

        match self.service.create_model() {
            Ok(()) => {
                info!(model = crate::constants::MODEL_NAME, "Created note model");
                Ok(())
            }
            Err(DomainError::Api(e)) => {
                warn!(model = crate::constants::MODEL_NAME, error = %e, "Model creation failed");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Remove a deck and all its cards.
    pub fn remove_deck(&self, name: &str) -> Result<(), DomainError> {
        self.service.delete_deck(name)?;
        info!(deck = name, "Deleted deck");
        Ok(())
    }
}
