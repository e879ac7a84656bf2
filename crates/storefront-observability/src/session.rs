//! Page-session identifier used to correlate log lines.

use serde::{Deserialize, Serialize};

/// A unique identifier for one page session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let id = SessionId::generate();
        assert!(id.as_str().starts_with("sess_"));
        // 18 bytes encode to 24 base64 characters without padding.
        assert_eq!(id.as_str().len(), "sess_".len() + 24);
    }

    #[test]
    fn test_generate_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }
}
