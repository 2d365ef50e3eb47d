//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ConfigLoader;
use crate::export::{FileExporter, MemorySheet, SheetWriter};
use crate::store::{MemoryStore, RecordStore};

/// Shared application state.
///
/// Holds the loaded configuration and the collaborators the handlers talk
/// to: the record store, the sheet writer and the document exporter.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn RecordStore>,
    sheet: Arc<dyn SheetWriter>,
    exporter: Arc<dyn FileExporter>,
    /// Held for the whole clear-write-export sequence of one sheet action.
    sheet_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates state backed by an in-memory store and sheet.
    ///
    /// The store is seeded with the candidates from the configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let store = MemoryStore::with_candidates(config.config().candidates().to_vec());
        let sheet = Arc::new(MemorySheet::new(config.sheet().name.clone()));
        Self::with_collaborators(config, Arc::new(store), sheet.clone(), sheet)
    }

    /// Creates state from explicit collaborators.
    pub fn with_collaborators(
        config: ConfigLoader,
        store: Arc<dyn RecordStore>,
        sheet: Arc<dyn SheetWriter>,
        exporter: Arc<dyn FileExporter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            sheet,
            exporter,
            sheet_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Returns the sheet writer.
    pub fn sheet(&self) -> &dyn SheetWriter {
        self.sheet.as_ref()
    }

    /// Returns the document exporter.
    pub fn exporter(&self) -> &dyn FileExporter {
        self.exporter.as_ref()
    }

    /// Returns the lock serializing sheet actions.
    pub(crate) fn sheet_lock(&self) -> &Mutex<()> {
        &self.sheet_lock
    }
}
