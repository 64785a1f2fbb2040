/// Salted SHA-256 credential hasher.
///
/// Stored form is `"<salt hex>$<sha256(salt:password) hex>"` with a fresh
/// random 16-byte salt per hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct SaltedSha256;
