use thiserror::Error;

/// Errors raised locally while building a shape, before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate key '{key}' in '{field}'")]
    DuplicateKey { field: &'static str, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = ModelError::DuplicateKey {
            field: "botConfiguration",
            key: "apiKey".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key 'apiKey' in 'botConfiguration'");
    }
}
