// src/infrastructure/anki_connect.rs
use crate::application::AnkiService;
use crate::constants::{
    API_VERSION, CARD_BACK, CARD_CSS, CARD_FRONT, CARD_NAME, MODEL_FIELDS, MODEL_NAME,
};
use crate::domain::{DomainError, NewNote};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// AnkiConnect request envelope, protocol version 6.
#[derive(Debug, Serialize)]
struct Request<'a, P: Serialize> {
    action: &'a str,
    version: u8,
    params: P,
}

/// AnkiConnect response envelope. Exactly one of `result`/`error` is
/// meaningful; `error` is null on success.
#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<String>,
}

/// Blocking HTTP client for the AnkiConnect endpoint.
///
/// One POST per call, no retries, no timeout override. The underlying
/// `reqwest` client pools its connection and is safe to share across the
/// importer's worker threads.
pub struct AnkiConnectClient {
    http: Client,
    endpoint: String,
}

impl AnkiConnectClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Send one request and unwrap the response envelope.
    ///
    /// Transport failures map to `Unreachable`, a non-null `error` field to
    /// `Api`, and anything that is not the documented envelope to
    /// `MalformedResponse`.
    #[instrument(level = "debug", skip(self, params))]
    fn invoke<P: Serialize>(&self, action: &str, params: P) -> Result<Value, DomainError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&Request {
                action,
                version: API_VERSION,
                params,
            })
            .send()
            .map_err(|e| DomainError::Unreachable(e.to_string()))?;

        let body: Response = response
            .json()
            .map_err(|e| DomainError::MalformedResponse(e.to_string()))?;

        match body.error {
            Some(error) => Err(DomainError::Api(error)),
            None => {
                debug!(action, "AnkiConnect call succeeded");
                Ok(body.result)
            }
        }
    }
}

impl AnkiService for AnkiConnectClient {
    fn version(&self) -> Result<i64, DomainError> {
        let result = self.invoke("version", json!({}))?;
        result
            .as_i64()
            .ok_or_else(|| DomainError::MalformedResponse(format!("non-numeric version: {result}")))
    }

    fn create_deck(&self, name: &str) -> Result<(), DomainError> {
        self.invoke("createDeck", json!({ "deck": name }))?;
        Ok(())
    }

    fn model_names(&self) -> Result<Vec<String>, DomainError> {
        let result = self.invoke("modelNames", json!({}))?;
        serde_json::from_value(result)
            .map_err(|e| DomainError::MalformedResponse(format!("modelNames: {e}")))
    }

    fn create_model(&self) -> Result<(), DomainError> {
        self.invoke(
            "createModel",
            json!({
                "modelName": MODEL_NAME,
                "inOrderFields": MODEL_FIELDS,
                "css": CARD_CSS,
                "cardTemplates": [{
                    "Name": CARD_NAME,
                    "Front": CARD_FRONT,
                    "Back": CARD_BACK,
                }],
            }),
        )?;
        Ok(())
    }

    fn add_note(&self, note: &NewNote) -> Result<i64, DomainError> {
        let result = self.invoke("addNote", json!({ "note": note }))?;
        result
            .as_i64()
            .ok_or_else(|| DomainError::MalformedResponse(format!("non-numeric note id: {result}")))
    }

    fn delete_deck(&self, name: &str) -> Result<(), DomainError> {
        self.invoke("deleteDecks", json!({ "decks": [name], "cardsToo": true }))?;
        Ok(())
    }
}
