use thiserror::Error;

/// Input that cannot be analyzed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("Cannot analyze empty text")]
    EmptyText,

    #[error("Analysis task did not complete: {reason}")]
    Interrupted { reason: String },
}

/// Failures reported by the record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Storage connection failed: {reason}")]
    Connection { reason: String },

    #[error("Failed to write record: {reason}")]
    Write { reason: String },

    #[error("Failed to read records: {reason}")]
    Read { reason: String },

    #[error("Stored record {id} is corrupt: {reason}")]
    Corrupt { id: String, reason: String },
}

/// Errors from the ingestion pipeline.
///
/// `Processing` means the text could not be analyzed and nothing was stored;
/// `Persistence` means the analysis succeeded but the store rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl IngestError {
    /// Short stage name used in metrics and logs.
    pub fn stage(&self) -> &'static str {
        match self {
            IngestError::Processing(_) => "processing",
            IngestError::Persistence(_) => "persistence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_error_formatting() {
        let error = PersistenceError::Corrupt {
            id: "abc".to_string(),
            reason: "bad hashtags".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("abc"));
        assert!(msg.contains("bad hashtags"));
    }

    #[test]
    fn test_ingest_error_keeps_stage() {
        let processing: IngestError = ProcessingError::EmptyText.into();
        let persistence: IngestError = PersistenceError::Write {
            reason: "disk full".to_string(),
        }
        .into();

        assert_eq!(processing.stage(), "processing");
        assert_eq!(persistence.stage(), "persistence");
        assert_eq!(processing.to_string(), "Cannot analyze empty text");
        assert!(persistence.to_string().contains("disk full"));
    }
}
