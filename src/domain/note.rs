// src/domain/note.rs
use serde::Serialize;
use std::path::Path;

use crate::constants::{MODEL_NAME, NOTE_TAG};

/// A flashcard to be created via AnkiConnect's `addNote`.
///
/// Field names serialize to the exact keys the plugin expects.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
    pub options: NoteOptions,
    pub tags: Vec<String>,
    pub picture: Vec<MediaAttachment>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NoteFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
}

/// One media file Anki should copy into its collection. `path` points at
/// the file on disk; Anki reads the bytes itself, this tool never does.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediaAttachment {
    pub filename: String,
    pub path: String,
    pub fields: Vec<String>,
}

impl NewNote {
    /// Build an image flashcard: the image alone on the front, empty back,
    /// with the file attached so Anki copies it into the collection.
    pub fn for_image(deck_name: &str, image_dir: &Path, file_name: &str) -> Self {
        Self {
            deck_name: deck_name.to_string(),
            model_name: MODEL_NAME.to_string(),
            fields: NoteFields {
                front: format!("<img src='{file_name}'>"),
                back: String::new(),
            },
            options: NoteOptions {
                allow_duplicate: false,
            },
            tags: vec![NOTE_TAG.to_string()],
            picture: vec![MediaAttachment {
                filename: file_name.to_string(),
                path: image_dir.join(file_name).to_string_lossy().into_owned(),
                fields: vec!["Front".to_string()],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn given_image_file_when_building_note_then_serializes_addnote_payload() {
        // Arrange
        let dir = PathBuf::from("/pics");

        // Act
        let note = NewNote::for_image("Study", &dir, "dag.png");
        let value = serde_json::to_value(&note).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "deckName": "Study",
                "modelName": "Basic",
                "fields": {
                    "Front": "<img src='dag.png'>",
                    "Back": "",
                },
                "options": { "allowDuplicate": false },
                "tags": ["ankiload"],
                "picture": [{
                    "filename": "dag.png",
                    "path": "/pics/dag.png",
                    "fields": ["Front"],
                }],
            })
        );
    }

    #[test]
    fn given_note_when_building_then_image_applies_to_front_field_only() {
        let note = NewNote::for_image("Study", &PathBuf::from("/pics"), "a.jpg");

        assert_eq!(note.picture.len(), 1);
        assert_eq!(note.picture[0].fields, vec!["Front".to_string()]);
        assert!(note.fields.back.is_empty());
    }
}
