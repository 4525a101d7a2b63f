//! Share link token generation.

use rand::distr::{Alphanumeric, Distribution};

/// Length of generated share tokens.
const TOKEN_LENGTH: usize = 32;

/// Generates URL-safe random tokens for insight share links.
#[derive(Debug, Clone)]
pub struct ShareLinkService;

impl ShareLinkService {
    /// Creates a new share link service.
    pub fn new() -> Self {
        Self
    }

    /// Generates a random alphanumeric token for share links.
    pub fn generate_token(&self) -> String {
        Alphanumeric
            .sample_iter(&mut rand::rng())
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}

impl Default for ShareLinkService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_url_safe() {
        let service = ShareLinkService::new();
        let token = service.generate_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let service = ShareLinkService::new();
        assert_ne!(service.generate_token(), service.generate_token());
    }
}
