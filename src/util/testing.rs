// src/util/testing.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use crate::application::AnkiService;
use crate::domain::{DomainError, NewNote};

/// Every AnkiConnect action a mock saw, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Version,
    CreateDeck(String),
    ModelNames,
    CreateModel,
    /// Carries the attached image file name, which identifies the note.
    AddNote(String),
    DeleteDeck(String),
}

/// Failure an individual mock call should produce. `DomainError` is not
/// `Clone`, so behaviors are stored as this kind and materialized per call.
#[derive(Debug, Clone)]
pub enum Failure {
    Api(String),
    Unreachable(String),
}

impl Failure {
    pub fn api(message: &str) -> Self {
        Failure::Api(message.to_string())
    }

    pub fn unreachable(message: &str) -> Self {
        Failure::Unreachable(message.to_string())
    }

    fn to_error(&self) -> DomainError {
        match self {
            Failure::Api(m) => DomainError::Api(m.clone()),
            Failure::Unreachable(m) => DomainError::Unreachable(m.clone()),
        }
    }
}

/// Shared mock service for testing use cases that depend on AnkiService
///
/// Records every call behind a mutex so the concurrent importer can drive
/// it from multiple worker threads. Behavior is configurable per action
/// (and per file name for `add_note`), eliminating the need for each test
/// file to define its own mock.
///
/// # Examples
///
/// ```
/// use ankiload::util::testing::{Failure, MockAnki};
///
/// let mock = MockAnki::builder()
///     .with_models(&["Basic"])
///     .with_note_failure("b.png", Failure::api("duplicate"))
///     .build();
/// ```
pub struct MockAnki {
    calls: Mutex<Vec<RecordedCall>>,
    version_failure: Option<Failure>,
    model_names_failure: Option<Failure>,
    models: Vec<String>,
    note_failures: HashMap<String, Failure>,
    deck_failure: Option<Failure>,
    next_note_id: AtomicI64,
}

impl MockAnki {
    pub fn builder() -> MockAnkiBuilder {
        MockAnkiBuilder::new()
    }

    /// Snapshot of all recorded calls in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// File names of all `addNote` calls, in arrival order.
    pub fn added_notes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::AddNote(file) => Some(file),
                _ => None,
            })
            .collect()
    }

    /// Number of `createModel` calls recorded.
    pub fn create_model_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RecordedCall::CreateModel))
            .count()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AnkiService for MockAnki {
    fn version(&self) -> Result<i64, DomainError> {
        self.record(RecordedCall::Version);
        match &self.version_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(6),
        }
    }

    fn create_deck(&self, name: &str) -> Result<(), DomainError> {
        self.record(RecordedCall::CreateDeck(name.to_string()));
        match &self.deck_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }

    fn model_names(&self) -> Result<Vec<String>, DomainError> {
        self.record(RecordedCall::ModelNames);
        match &self.model_names_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.models.clone()),
        }
    }

    fn create_model(&self) -> Result<(), DomainError> {
        self.record(RecordedCall::CreateModel);
        Ok(())
    }

    fn add_note(&self, note: &NewNote) -> Result<i64, DomainError> {
        let file = note
            .picture
            .first()
            .map(|p| p.filename.clone())
            .unwrap_or_default();
        self.record(RecordedCall::AddNote(file.clone()));

        match self.note_failures.get(&file) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.next_note_id.fetch_add(1, Ordering::SeqCst)),
        }
    }

    fn delete_deck(&self, name: &str) -> Result<(), DomainError> {
        self.record(RecordedCall::DeleteDeck(name.to_string()));
        Ok(())
    }
}

/// Builder for MockAnki
pub struct MockAnkiBuilder {
    version_failure: Option<Failure>,
    model_names_failure: Option<Failure>,
    models: Vec<String>,
    note_failures: HashMap<String, Failure>,
    deck_failure: Option<Failure>,
}

impl MockAnkiBuilder {
    pub fn new() -> Self {
        Self {
            version_failure: None,
            model_names_failure: None,
            models: vec!["Basic".to_string()],
            note_failures: HashMap::new(),
            deck_failure: None,
        }
    }

    /// Configure the `version` call to fail
    pub fn with_version_failure(mut self, failure: Failure) -> Self {
        self.version_failure = Some(failure);
        self
    }

    /// Set the model names returned by `modelNames` (default: `["Basic"]`)
    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.models = models.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Configure the `modelNames` query itself to fail
    pub fn with_model_names_failure(mut self, failure: Failure) -> Self {
        self.model_names_failure = Some(failure);
        self
    }

    /// Configure `addNote` to fail for a specific attached file name
    pub fn with_note_failure(mut self, file: &str, failure: Failure) -> Self {
        self.note_failures.insert(file.to_string(), failure);
        self
    }

    /// Configure `createDeck` to fail
    pub fn with_deck_failure(mut self, failure: Failure) -> Self {
        self.deck_failure = Some(failure);
        self
    }

    pub fn build(self) -> MockAnki {
        MockAnki {
            calls: Mutex::new(Vec::new()),
            version_failure: self.version_failure,
            model_names_failure: self.model_names_failure,
            models: self.models,
            note_failures: self.note_failures,
            deck_failure: self.deck_failure,
            next_note_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockAnkiBuilder {
    fn default() -> Self {
        Self::new()
    }
}
