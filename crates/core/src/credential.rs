//! API credential value types.

use std::sync::{Arc, RwLock};

/// An opaque token authorizing calls to the model provider.
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Leading and trailing whitespace is stripped; the rest
    /// of the token is kept byte-for-byte. Blank input yields `None`.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() { None } else { Some(Self(token)) }
    }

    /// The raw token, for placing in a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A short hint safe for display: `"AIza***"`.
    pub fn hint(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{prefix}***")
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// A session-scoped credential slot, set interactively and shared by handle.
///
/// Cloning yields another handle to the same slot.
#[derive(Debug, Clone, Default)]
pub struct SessionCredential {
    slot: Arc<RwLock<Option<Credential>>>,
}

impl SessionCredential {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, credential: Credential) {
        match self.slot.write() {
            Ok(mut guard) => *guard = Some(credential),
            Err(poisoned) => *poisoned.into_inner() = Some(credential),
        }
    }

    pub fn get(&self) -> Option<Credential> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.slot.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_not_a_credential() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
        assert_eq!(Credential::new(" abc ").unwrap().expose(), "abc");
    }

    #[test]
    fn only_surrounding_whitespace_is_stripped() {
        let cred = Credential::new("\tAIza key/with+odd=chars \n").unwrap();
        assert_eq!(cred.expose(), "AIza key/with+odd=chars");
    }

    #[test]
    fn debug_is_redacted() {
        let cred = Credential::new("AIzaSecretValue").unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("Secret"));
        assert_eq!(cred.hint(), "AIza***");
    }

    #[test]
    fn session_handles_share_the_slot() {
        let session = SessionCredential::new();
        let handle = session.clone();
        assert!(handle.get().is_none());

        session.set(Credential::new("tok").unwrap());
        assert_eq!(handle.get().unwrap().expose(), "tok");

        handle.clear();
        assert!(session.get().is_none());
    }
}
