pub const DEFAULT_SALT_LENGTH: usize = 12;

/// Random string over `[A-Za-z0-9]`. Not suitable for secrets.
pub fn generate_salt(length: usize) -> String {
    std::iter::repeat_with(fastrand::alphanumeric)
        .take(length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_length_and_alphabet() {
        let salt = generate_salt(DEFAULT_SALT_LENGTH);
        assert_eq!(salt.len(), 12);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(generate_salt(0), "");
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(generate_salt(32), generate_salt(32));
    }
}
