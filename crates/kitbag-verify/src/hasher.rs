use sha2::digest::Digest;

/// Incremental digest over a byte stream.
///
/// Minimal on purpose: `update` folds bytes in, `finalize` yields the raw
/// digest. Anything implementing this can back [`file_digest`].
///
/// [`file_digest`]: crate::file_digest
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// SHA-512 hasher backed by `sha2`.
pub struct Sha512Hasher(sha2::Sha512);

impl Hasher for Sha512Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

impl Default for Sha512Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512Hasher {
    pub fn new() -> Self {
        Self(sha2::Sha512::new())
    }

    /// One-shot digest of an in-memory buffer.
    pub fn digest(data: &[u8]) -> Vec<u8> {
        sha2::Sha512::digest(data).to_vec()
    }
}
