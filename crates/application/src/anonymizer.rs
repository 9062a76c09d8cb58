/// Deterministic, keyed, one-way identifier pseudonymization.
///
/// The same plaintext under the same key always yields the same token, so
/// events stay correlatable without re-identification. Different keys must
/// yield unrelated token spaces, and no inverse operation exists.
pub trait Anonymizer: Send + Sync {
    /// Returns the stable pseudonymous token for the plaintext identifier.
    fn anonymize_string(&self, plaintext: &str) -> String;
}
