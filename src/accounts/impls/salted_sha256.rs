use rand::RngExt;
use sha2::{Digest, Sha256};
use crate::accounts::structs::salted_sha256::SaltedSha256;
use crate::accounts::traits::credential_hasher::CredentialHasher;

fn digest(salt: &str, password: &str) -> String
{
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

impl CredentialHasher for SaltedSha256 {
    fn hash(&self, password: &str) -> String
    {
        let salt_bytes: [u8; 16] = rand::rng().random();
        let salt = hex::encode(salt_bytes);
        format!("{}${}", salt, digest(&salt, password))
    }

    fn verify(&self, password: &str, stored: &str) -> bool
    {
        match stored.split_once('$') {
            Some((salt, expected)) => digest(salt, password) == expected,
            None => false,
        }
    }
}
