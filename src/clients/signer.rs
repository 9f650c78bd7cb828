//! Request signing.
//!
//! Every dispatched method call carries a `sig` parameter: the lowercase hex
//! MD5 of the canonical parameter string followed by the application secret.
//! The canonical string is every `key=value` pair, sorted byte-wise by key and
//! concatenated without separators. List values are joined with `", "` first.
//!
//! # Example
//!
//! ```rust
//! use vk_api::{VkConfig, ApplicationId, ApplicationSecret, Params};
//! use vk_api::clients::RequestSigner;
//!
//! let config = VkConfig::builder()
//!     .application_id(ApplicationId::new("42").unwrap())
//!     .secret(ApplicationSecret::new("s3cr3t").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let signer = RequestSigner::new(&config, None);
//! let signed = signer.sign_at(Params::new().with("user_ids", "1"), 1_700_000_000, 7);
//! assert_eq!(signed.signature().len(), 32);
//! assert!(signer.verify(signed.params()));
//! ```

use crate::clients::Params;
use crate::config::{AccessToken, VkConfig};
use md5::{Digest, Md5};
use rand::Rng;
use subtle::ConstantTimeEq;

/// Name of the signature parameter.
pub const SIGNATURE_KEY: &str = "sig";

/// Upper bound (inclusive) of the per-request nonce.
pub const MAX_NONCE: u32 = 10_000;

/// A parameter set with the injected fields and its signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    params: Params,
    signature: String,
}

impl SignedRequest {
    /// The full parameter set, `sig` included.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// The computed signature.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Consumes the request, returning the parameters.
    #[must_use]
    pub fn into_params(self) -> Params {
        self.params
    }
}

/// Signs parameter sets with the application credentials.
#[derive(Clone, Copy, Debug)]
pub struct RequestSigner<'a> {
    config: &'a VkConfig,
    access_token: Option<&'a AccessToken>,
}

impl<'a> RequestSigner<'a> {
    /// Creates a signer for `config`, injecting `access_token` when present.
    #[must_use]
    pub const fn new(config: &'a VkConfig, access_token: Option<&'a AccessToken>) -> Self {
        Self {
            config,
            access_token,
        }
    }

    /// Signs `params` using the current time and a random nonce.
    #[must_use]
    pub fn sign(&self, params: Params) -> SignedRequest {
        let timestamp = chrono::Utc::now().timestamp();
        let nonce = rand::thread_rng().gen_range(0..=MAX_NONCE);
        self.sign_at(params, timestamp, nonce)
    }

    /// Signs `params` with a fixed timestamp and nonce.
    ///
    /// `timestamp`, `api_id` and `random` always overwrite caller values;
    /// `access_token` and `v` are only added when absent. Any `sig` passed
    /// in is discarded before signing.
    #[must_use]
    pub fn sign_at(&self, mut params: Params, timestamp: i64, nonce: u32) -> SignedRequest {
        params.remove(SIGNATURE_KEY);
        params.insert("timestamp", timestamp);
        params.insert("api_id", self.config.application_id().as_ref());
        params.insert("random", nonce);

        if let Some(token) = self.access_token {
            params.insert_if_absent("access_token", token.as_ref());
        }
        if let Some(version) = self.config.api_version() {
            params.insert_if_absent("v", version.to_string());
        }

        let signature = compute_signature(&params, self.config.secret().as_ref());
        params.insert(SIGNATURE_KEY, signature.as_str());

        SignedRequest { params, signature }
    }

    /// Recomputes the signature of a signed parameter set and compares it to
    /// its `sig` in constant time.
    #[must_use]
    pub fn verify(&self, signed: &Params) -> bool {
        let Some(received) = signed.get(SIGNATURE_KEY) else {
            return false;
        };

        let mut unsigned = signed.clone();
        unsigned.remove(SIGNATURE_KEY);
        let computed = compute_signature(&unsigned, self.config.secret().as_ref());

        constant_time_compare(&computed, &received.to_wire())
    }
}

/// Builds the canonical `k1=v1k2=v2...` string in ascending key order.
#[must_use]
pub fn canonical_string(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", value.to_wire()))
        .collect()
}

/// Computes the lowercase hex MD5 of the canonical string followed by `secret`.
#[must_use]
pub fn compute_signature(params: &Params, secret: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(canonical_string(params).as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Performs constant-time comparison of two strings.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, ApplicationId, ApplicationSecret};

    fn create_test_config(secret: &str) -> VkConfig {
        VkConfig::builder()
            .application_id(ApplicationId::new("42").unwrap())
            .secret(ApplicationSecret::new(secret).unwrap())
            .api_version(ApiVersion::new(5, 131))
            .build()
            .unwrap()
    }

    #[test]
    fn test_signature_is_md5_of_canonical_string_and_secret() {
        let params = Params::new().with("b", "2").with("a", "1");
        assert_eq!(canonical_string(&params), "a=1b=2");

        let mut hasher = Md5::new();
        hasher.update(b"a=1b=2secret");
        let expected = hex::encode(hasher.finalize());
        assert_eq!(compute_signature(&params, "secret"), expected);
    }

    #[test]
    fn test_known_md5_vector() {
        // md5("") with empty params and secret
        assert_eq!(
            compute_signature(&Params::new(), ""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let config = create_test_config("secret");
        let signer = RequestSigner::new(&config, None);
        let params = Params::new().with("user_ids", "1").with("fields", vec!["sex", "city"]);

        let first = signer.sign_at(params.clone(), 1_700_000_000, 42);
        let second = signer.sign_at(params, 1_700_000_000, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn test_signature_changes_with_any_input() {
        let config = create_test_config("secret");
        let signer = RequestSigner::new(&config, None);
        let params = Params::new().with("user_ids", "1");
        let base = signer.sign_at(params.clone(), 1_700_000_000, 42);

        let other_value = signer.sign_at(Params::new().with("user_ids", "2"), 1_700_000_000, 42);
        let other_time = signer.sign_at(params.clone(), 1_700_000_001, 42);
        let other_nonce = signer.sign_at(params.clone(), 1_700_000_000, 43);
        let other_config = create_test_config("secret2");
        let other_secret =
            RequestSigner::new(&other_config, None).sign_at(params.clone(), 1_700_000_000, 42);

        let extra_key =
            signer.sign_at(params.clone().with("extra", ""), 1_700_000_000, 42);
        let fewer_keys = signer.sign_at(Params::new(), 1_700_000_000, 42);

        for other in [
            other_value,
            other_time,
            other_nonce,
            other_secret,
            extra_key,
            fewer_keys,
        ] {
            assert_ne!(base.signature(), other.signature());
        }
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let config = create_test_config("secret");
        let signer = RequestSigner::new(&config, None);
        let forward = Params::new().with("a", "1").with("b", "2").with("c", "3");
        let backward = Params::new().with("c", "3").with("b", "2").with("a", "1");

        assert_eq!(
            signer.sign_at(forward, 1, 1).signature(),
            signer.sign_at(backward, 1, 1).signature()
        );
    }

    #[test]
    fn test_injected_fields() {
        let config = create_test_config("secret");
        let token = AccessToken::new("tok").unwrap();
        let signer = RequestSigner::new(&config, Some(&token));
        let signed = signer.sign_at(Params::new(), 1_700_000_000, 10_000);
        let params = signed.params();

        assert_eq!(params.get("timestamp").unwrap().to_wire(), "1700000000");
        assert_eq!(params.get("api_id").unwrap().to_wire(), "42");
        assert_eq!(params.get("random").unwrap().to_wire(), "10000");
        assert_eq!(params.get("access_token").unwrap().to_wire(), "tok");
        assert_eq!(params.get("v").unwrap().to_wire(), "5.131");
        assert_eq!(params.get("sig").unwrap().to_wire(), signed.signature());
    }

    #[test]
    fn test_caller_token_and_version_are_kept() {
        let config = create_test_config("secret");
        let token = AccessToken::new("bound").unwrap();
        let signer = RequestSigner::new(&config, Some(&token));
        let params = Params::new().with("access_token", "explicit").with("v", "5.0");
        let signed = signer.sign_at(params, 1, 1);

        assert_eq!(signed.params().get("access_token").unwrap().to_wire(), "explicit");
        assert_eq!(signed.params().get("v").unwrap().to_wire(), "5.0");
    }

    #[test]
    fn test_signature_excludes_itself() {
        let config = create_test_config("secret");
        let signer = RequestSigner::new(&config, None);
        let with_stale_sig = Params::new().with("a", "1").with("sig", "stale");

        assert_eq!(
            signer.sign_at(with_stale_sig, 1, 1).signature(),
            signer.sign_at(Params::new().with("a", "1"), 1, 1).signature()
        );
    }

    #[test]
    fn test_list_values_are_signed_as_joined_text() {
        let listed = Params::new().with("fields", vec!["sex", "city"]);
        let joined = Params::new().with("fields", "sex, city");
        assert_eq!(
            compute_signature(&listed, "secret"),
            compute_signature(&joined, "secret")
        );
    }

    #[test]
    fn test_verify_detects_tampering() {
        let config = create_test_config("secret");
        let signer = RequestSigner::new(&config, None);
        let signed = signer.sign(Params::new().with("q", "rust"));
        assert!(signer.verify(signed.params()));

        let mut tampered = signed.into_params();
        tampered.insert("q", "go");
        assert!(!signer.verify(&tampered));
        assert!(!signer.verify(&Params::new()));
    }

    #[test]
    fn test_nonce_stays_in_range() {
        let config = create_test_config("secret");
        let signer = RequestSigner::new(&config, None);
        for _ in 0..100 {
            let signed = signer.sign(Params::new());
            let nonce: u32 = signed.params().get("random").unwrap().to_wire().parse().unwrap();
            assert!(nonce <= MAX_NONCE);
        }
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
    }
}
