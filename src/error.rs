use thiserror::Error;

use crate::terraform::{FlatmapError, StateError};

/// Top-level error for the reconstruction pipeline. Nothing is caught or
/// retried; the binary reports the first failure and exits non-zero.
#[derive(Debug, Error)]
pub enum ChtcfgError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    State(#[from] StateError),

    /// A matching resource's attribute walk failed; carries the resource
    /// address so the user knows which block is affected.
    #[error("resource '{address}': {source}")]
    Decode {
        address: String,
        source: FlatmapError,
    },

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ChtcfgError = io_err.into();
        assert!(matches!(err, ChtcfgError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_state_error_is_transparent() {
        let err: ChtcfgError = StateError::MissingModules.into();
        assert_eq!(err.to_string(), "state file has no 'modules' list");
    }

    #[test]
    fn test_decode_error_display() {
        let err = ChtcfgError::Decode {
            address: "cloudhealth_perspective.foo".to_string(),
            source: FlatmapError::Missing {
                key: "group.#".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "resource 'cloudhealth_perspective.foo': missing attribute 'group.#'"
        );
    }

    #[test]
    fn test_fmt_error_display() {
        let err: ChtcfgError = std::fmt::Error.into();
        assert!(err.to_string().starts_with("formatting error"));
    }
}
