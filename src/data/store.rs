use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use anyhow::Result;
use tracing::debug;

use crate::data::company_record::CompanyRecord;
use crate::data::loader::load_dataset;

/// Owns the lazily-loaded, publish-once company dataset.
///
/// Nothing is read at construction; the first call to [`dataset`] pays the
/// file I/O. The load is guarded by a mutex with a re-check so concurrent
/// first queries read the file exactly once, and the published vector is
/// immutable for the rest of the process — readers share it through an
/// `Arc` with no lock on the fast path.
///
/// The store is meant to be owned by the service state and handed to the
/// query engine, not reached through a global.
///
/// [`dataset`]: CompanyStore::dataset
pub struct CompanyStore {
    source: PathBuf,
    dataset: OnceLock<Arc<Vec<CompanyRecord>>>,
    load_guard: Mutex<()>,
}

impl CompanyStore {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dataset: OnceLock::new(),
            load_guard: Mutex::new(()),
        }
    }

    /// Path of the backing source file.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// True once a dataset has been published.
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Return the dataset, loading it on first use.
    ///
    /// A failed load publishes nothing, so a later call re-attempts — an
    /// operator can fix the source file and re-trigger the load simply by
    /// querying again.
    pub fn dataset(&self) -> Result<Arc<Vec<CompanyRecord>>> {
        if let Some(dataset) = self.dataset.get() {
            return Ok(Arc::clone(dataset));
        }

        let _guard = self.load_guard.lock().unwrap();

        // Another query may have finished the load while we waited.
        if let Some(dataset) = self.dataset.get() {
            return Ok(Arc::clone(dataset));
        }

        debug!("First query, loading dataset from {}", self.source.display());
        let dataset = Arc::new(load_dataset(&self.source)?);
        let _ = self.dataset.set(Arc::clone(&dataset));
        Ok(dataset)
    }
}
