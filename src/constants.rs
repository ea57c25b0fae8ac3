// src/constants.rs
//
// Application-wide constants. The AnkiConnect values mirror what the plugin
// documents for protocol version 6; the card template values define the one
// note model this tool provisions.

/// Default AnkiConnect endpoint. The plugin binds to this port on localhost
/// and there is no discovery mechanism, so a fixed default is the norm.
///
/// Overridable via the `[anki] endpoint` config key.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8765";

/// AnkiConnect protocol version sent in every request envelope.
pub const API_VERSION: u8 = 6;

/// Note model imported cards are created with. Matches Anki's stock
/// two-field model so existing installs need no provisioning at all.
pub const MODEL_NAME: &str = "Basic";

/// Field order for the provisioned model. AnkiConnect's `createModel`
/// treats the first field as the sort field.
pub const MODEL_FIELDS: [&str; 2] = ["Front", "Back"];

/// Name of the single card template inside the provisioned model.
pub const CARD_NAME: &str = "Card 1";

/// Question side: just the front field (the image).
pub const CARD_FRONT: &str = "{{Front}}";

/// Answer side: repeat the question above a rule, then the back field.
pub const CARD_BACK: &str = "{{FrontSide}}<hr id='answer'>{{Back}}";

/// Styling applied when the model has to be created from scratch.
pub const CARD_CSS: &str = "\
.card {
    font-family: arial;
    font-size: 20px;
    text-align: center;
    color: black;
    background-color: white;
}
";

/// Tag attached to every imported note so they can be found (and bulk
/// deleted) in the Anki browser later.
pub const NOTE_TAG: &str = "ankiload";

/// File name suffixes accepted by the directory scan. Matching is
/// case-sensitive; `photo.JPG` is deliberately skipped.
pub const IMAGE_SUFFIXES: [&str; 2] = [".jpg", ".png"];
