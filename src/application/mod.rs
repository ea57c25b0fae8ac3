// src/application/mod.rs
pub mod importer;
pub mod provisioner;

pub use importer::Importer;
pub use provisioner::{AnkiService, Provisioner};
