// src/application/importer.rs
use crate::application::AnkiService;
use crate::constants::IMAGE_SUFFIXES;
use crate::domain::{DomainError, NewNote};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Creates one note per image file in a directory, either one request at a
/// time or fanned out over a bounded thread pool.
pub struct Importer<'a, S: AnkiService> {
    service: &'a S,
    deck_name: String,
    image_dir: PathBuf,
}

impl<'a, S: AnkiService> Importer<'a, S> {
    pub fn new(service: &'a S, deck_name: &str, image_dir: &Path) -> Self {
        Self {
            service,
            deck_name: deck_name.to_string(),
            image_dir: image_dir.to_path_buf(),
        }
    }

    /// List image file names in the directory, in filesystem listing order.
    ///
    /// Non-recursive, suffix match is case-sensitive, and the order is
    /// whatever the platform returns; nothing here sorts. Non-UTF-8 names
    /// are skipped with a warning.
    pub fn scan_images(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.image_dir).with_context(|| {
            format!("Failed to read image directory: {}", self.image_dir.display())
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Failed to read entry in: {}", self.image_dir.display())
            })?;
            match entry.file_name().into_string() {
                Ok(name) if IMAGE_SUFFIXES.iter().any(|s| name.ends_with(s)) => {
                    files.push(name);
                }
                Ok(name) => debug!(file = %name, "Skipping non-image file"),
                Err(name) => warn!(?name, "Skipping non-UTF-8 file name"),
            }
        }
        Ok(files)
    }

    /// Import images one request at a time, in listing order.
    ///
    /// Returns the number of files submitted. A transport failure stops
    /// the batch at that file; API-level rejections do not.
    pub fn import_sequential(&self) -> Result<usize> {
        let files = self.scan_images()?;
        info!(count = files.len(), deck = %self.deck_name, "Importing images sequentially");

        for file_name in &files {
            self.import_one(file_name)?;
        }
        Ok(files.len())
    }

    /// Import images on a thread pool of `jobs` workers.
    ///
    /// Submits one task per file, then joins on all of them. Outcomes are
    /// collected rather than short-circuited: a transport failure in one
    /// worker never cancels its siblings, and the first such failure is
    /// returned only after every task has finished. The workload is
    /// network-bound, so `jobs` bounds in-flight requests, not CPU use.
    pub fn import_concurrent(&self, jobs: usize) -> Result<usize> {
        let files = self.scan_images()?;
        info!(
            count = files.len(),
            deck = %self.deck_name,
            jobs,
            "Importing images concurrently"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("Failed to build import thread pool")?;

        let results: Vec<Result<(), DomainError>> =
            pool.install(|| files.par_iter().map(|f| self.import_one(f)).collect());

        for result in results {
            result?;
        }
        Ok(files.len())
    }

    /// One `addNote` call. Per-note API rejections (duplicate, malformed
    /// field) are logged and swallowed so the rest of the batch proceeds;
    /// transport failures surface to the caller.
    fn import_one(&self, file_name: &str) -> Result<(), DomainError> {
        let note = NewNote::for_image(&self.deck_name, &self.image_dir, file_name);
        match self.service.add_note(&note) {
            Ok(note_id) => {
                info!(file = file_name, note_id, "Added note");
                Ok(())
            }
            Err(DomainError::Api(e)) => {
                warn!(file = file_name, error = %e, "Failed to add note");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
