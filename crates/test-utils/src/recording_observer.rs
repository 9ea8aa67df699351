use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use depviz::config::{FieldValue, LoadObserver, ValueSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkpoint {
    DocumentLoaded {
        path: Option<PathBuf>,
        root_tag: String,
    },
    FieldResolved {
        field: String,
        value: FieldValue,
        source: ValueSource,
    },
}

/// An observer that records every checkpoint it sees, in order.
///
/// Clones share the same log, so keep one handle for assertions and hand
/// another to the loader.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    seen: Arc<Mutex<Vec<Checkpoint>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkpoints(&self) -> Vec<Checkpoint> {
        self.seen.lock().unwrap().clone()
    }

    /// Field names in the order they were resolved.
    pub fn resolved_fields(&self) -> Vec<String> {
        self.checkpoints()
            .into_iter()
            .filter_map(|c| match c {
                Checkpoint::FieldResolved { field, .. } => Some(field),
                Checkpoint::DocumentLoaded { .. } => None,
            })
            .collect()
    }
}

impl LoadObserver for RecordingObserver {
    fn document_loaded(&self, path: Option<&Path>, root_tag: &str) {
        self.seen.lock().unwrap().push(Checkpoint::DocumentLoaded {
            path: path.map(Path::to_path_buf),
            root_tag: root_tag.to_string(),
        });
    }

    fn field_resolved(&self, field: &str, value: &FieldValue, source: ValueSource) {
        self.seen.lock().unwrap().push(Checkpoint::FieldResolved {
            field: field.to_string(),
            value: value.clone(),
            source,
        });
    }
}
