/// Generate an opaque reset secret: 256 bits from the OS CSPRNG, hex-encoded
/// so it can ride in a URL query parameter.
pub fn generate_reset_secret() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_64_hex_chars() {
        let secret = generate_reset_secret();
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn secrets_are_unique() {
        let a = generate_reset_secret();
        let b = generate_reset_secret();
        assert_ne!(a, b);
    }
}
