//! Shared helpers for integration tests

#![allow(dead_code)]

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rsa::RsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use serde::Serialize;
use std::sync::OnceLock;

pub const SECRET: &[u8] = b"your-256-bit-secret";

/// PEM-encoded RSA key pair, generated once per test binary
pub struct RsaKeys {
    pub private_pem: String,
    pub public_pem: String,
}

pub fn rsa_keys() -> &'static RsaKeys {
    static KEYS: OnceLock<RsaKeys> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
        let private_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .expect("Failed to serialize to PKCS#8")
            .as_str()
            .to_string();
        let public_pem = private_key
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .expect("Failed to serialize public key");

        RsaKeys {
            private_pem,
            public_pem,
        }
    })
}

/// Sign claims with an HMAC secret
pub fn sign_hmac(algorithm: Algorithm, claims: &impl Serialize, secret: &[u8]) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("Failed to sign token")
}

/// Sign claims with the shared RSA test key
pub fn sign_rsa(algorithm: Algorithm, claims: &impl Serialize) -> String {
    let key = EncodingKey::from_rsa_pem(rsa_keys().private_pem.as_bytes())
        .expect("Failed to load RSA private key");
    encode(&Header::new(algorithm), claims, &key).expect("Failed to sign token")
}

/// Request with an optional `Authorization` header value
pub fn request(authorization: Option<&str>) -> http::Request<()> {
    let mut builder = http::Request::builder().uri("/protected");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(()).expect("Failed to build request")
}

/// Request carrying `Authorization: Bearer <token>`
pub fn bearer(token: &str) -> http::Request<()> {
    request(Some(&format!("Bearer {token}")))
}
