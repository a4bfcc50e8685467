//! Domain error types.

/// Top-level error type for tavault.
#[derive(Debug, thiserror::Error)]
pub enum TavaultError {
    #[error("no data for {symbol} on {date}")]
    NoData { symbol: String, date: String },

    #[error("signals object not found under {prefix}")]
    SignalsMissing { prefix: String },

    #[error("storage error during {context}: {reason}")]
    Storage { context: String, reason: String },

    #[error("malformed artifact at {key}: {reason}")]
    MalformedArtifact { key: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TavaultError {
    /// True for the "no data" conditions a caller can do nothing about
    /// except ask for a different symbol or date.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TavaultError::NoData { .. } | TavaultError::SignalsMissing { .. }
        )
    }
}

impl From<&TavaultError> for std::process::ExitCode {
    fn from(err: &TavaultError) -> Self {
        let code: u8 = match err {
            TavaultError::Io(_) => 1,
            TavaultError::ConfigParse { .. }
            | TavaultError::ConfigMissing { .. }
            | TavaultError::ConfigInvalid { .. } => 2,
            TavaultError::Storage { .. } => 3,
            TavaultError::MalformedArtifact { .. } => 4,
            TavaultError::NoData { .. } | TavaultError::SignalsMissing { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_both_missing_variants() {
        let no_data = TavaultError::NoData {
            symbol: "RGTI".into(),
            date: "2024-05-01".into(),
        };
        let missing = TavaultError::SignalsMissing {
            prefix: "daily/2024-05-01/RGTI".into(),
        };
        assert!(no_data.is_not_found());
        assert!(missing.is_not_found());
    }

    #[test]
    fn storage_and_malformed_are_not_not_found() {
        let storage = TavaultError::Storage {
            context: "listing daily/2024-05-01/RGTI".into(),
            reason: "connection reset".into(),
        };
        let malformed = TavaultError::MalformedArtifact {
            key: "daily/2024-05-01/RGTI/signals_0900.json".into(),
            reason: "expected value at line 1".into(),
        };
        assert!(!storage.is_not_found());
        assert!(!malformed.is_not_found());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = TavaultError::MalformedArtifact {
            key: "daily/2024-05-01/RGTI/signals_0900.json".into(),
            reason: "trailing comma".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("signals_0900.json"));
        assert!(msg.contains("trailing comma"));
    }
}
