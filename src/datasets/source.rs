//! Raw dataset sources
//!
//! The store fetches each dataset document through a [`RawSource`], so the
//! fetch transport is injectable: production reads fixed files from a data
//! directory, tests serve documents from memory.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::error::Result;

use super::DatasetKind;

/// Fetches the raw document for a dataset kind
pub trait RawSource: Send + Sync {
    /// Fetch the document for `kind`.
    ///
    /// Called at most once per kind per successful load; a failed fetch is
    /// retried on the next request for that dataset.
    fn fetch<'a>(
        &'a self,
        kind: DatasetKind,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Reads dataset documents from a fixed directory on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    /// Create a source reading from `data_dir`
    #[must_use] pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory this source reads from
    #[must_use] pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl RawSource for FileSource {
    fn fetch<'a>(
        &'a self,
        kind: DatasetKind,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.data_dir.join(kind.document_name());
            log::info!("Fetching {kind} dataset from {}", path.display());
            let raw = tokio::fs::read_to_string(&path).await?;
            Ok(raw)
        })
    }
}
