use rand::{Rng, distributions::Alphanumeric};

/// Random opaque string over `[a-zA-Z0-9]`. Used for invitation keys and
/// session tokens; collision probability at these lengths is negligible and
/// not checked.
pub fn alphanumeric_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_requested_length_and_charset() {
        let token = alphanumeric_token(24);
        assert_eq!(token.len(), 24);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn two_tokens_differ() {
        assert_ne!(alphanumeric_token(24), alphanumeric_token(24));
    }
}
