//! Keyed HMAC-SHA256 anonymizer for telemetry identity fields.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use sentra_application::Anonymizer;
use sentra_core::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

/// Anonymizer computing HMAC-SHA256 tokens under a cluster-scoped key.
///
/// Tokens are deterministic per key, so events stay correlatable inside one
/// cluster while different clusters produce unrelated token spaces. There is
/// no decryption path.
#[derive(Clone)]
pub struct HmacAnonymizer {
    mac: HmacSha256,
}

impl HmacAnonymizer {
    /// Creates an anonymizer from the cluster secret.
    pub fn new(key: impl Into<String>) -> AppResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(AppError::Validation(
                "anonymization key must not be empty or whitespace".to_owned(),
            ));
        }

        let mac = HmacSha256::new_from_slice(key.as_bytes()).map_err(|error| {
            AppError::Internal(format!("failed to initialize anonymization key: {error}"))
        })?;
        Ok(Self { mac })
    }
}

impl Anonymizer for HmacAnonymizer {
    fn anonymize_string(&self, plaintext: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(plaintext.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}
