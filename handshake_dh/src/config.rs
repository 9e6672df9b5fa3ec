/// Settings for a [`DhContext`](crate::DhContext).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DhConfig {
    /// Length of the private exponent in bits. Capped at the modulus size.
    pub key_bits: usize,
    /// Upper bound on candidate key pairs tried by one generation call.
    /// `0` keeps retrying until a candidate passes.
    pub max_keygen_attempts: u32,
}

pub const DEFAULT_KEY_BITS: usize = 1024;
pub const DEFAULT_MAX_KEYGEN_ATTEMPTS: u32 = 64;

impl DhConfig {
    pub fn new(key_bits: usize) -> Self {
        Self {
            key_bits,
            ..Self::default()
        }
    }

    pub fn with_max_keygen_attempts(mut self, attempts: u32) -> Self {
        self.max_keygen_attempts = attempts;
        self
    }
}

impl Default for DhConfig {
    fn default() -> Self {
        Self {
            key_bits: DEFAULT_KEY_BITS,
            max_keygen_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS,
        }
    }
}
