use std::fmt::{self, Debug, Formatter};

use zeroize::Zeroizing;

use crate::media::mp3::AncillaryStrategy;
use crate::media::payload::{Cipher, Plain, Vigenere};
use crate::result::Result;
use crate::SteganoError;

/// longest accepted key, counted in characters
pub const MAX_KEY_CHARS: usize = 25;

/// Number of low bits of every ancillary byte that carry hidden data, 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LsbBits(u8);

impl LsbBits {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(bits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(SteganoError::config(format!(
                "lsb bits must be between {} and {}, got {bits}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// bit mask selecting the carrier bits of a byte
    pub fn mask(self) -> u8 {
        (1u8 << self.0) - 1
    }
}

impl Default for LsbBits {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for LsbBits {
    type Error = SteganoError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

/// The key used for encryption and for shuffling the frame order.
/// It is wiped from memory on drop and never shows up in debug output.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Key(Zeroizing<String>);

impl Key {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", "*".repeat(self.char_count()))
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(Zeroizing::new(key.to_string()))
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(Zeroizing::new(key))
    }
}

impl From<Option<String>> for Key {
    fn from(key: Option<String>) -> Self {
        key.map(Key::from).unwrap_or_default()
    }
}

/// Everything that has to match between hiding and unveiling.
///
/// Validated once on construction, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    use_encryption: bool,
    random_embedding: bool,
    lsb_bits: LsbBits,
    key: Key,
    ancillary_strategy: AncillaryStrategy,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            use_encryption: false,
            random_embedding: false,
            lsb_bits: LsbBits::default(),
            key: Key::default(),
            ancillary_strategy: AncillaryStrategy::default(),
        }
    }
}

impl Configuration {
    pub fn new(
        use_encryption: bool,
        random_embedding: bool,
        lsb_bits: u8,
        key: impl Into<Key>,
    ) -> Result<Self> {
        Self::builder()
            .with_encryption(use_encryption)
            .with_random_embedding(random_embedding)
            .with_lsb_bits(lsb_bits)
            .with_key(key)
            .build()
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn use_encryption(&self) -> bool {
        self.use_encryption
    }

    pub fn random_embedding(&self) -> bool {
        self.random_embedding
    }

    pub fn lsb_bits(&self) -> LsbBits {
        self.lsb_bits
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn ancillary_strategy(&self) -> AncillaryStrategy {
        self.ancillary_strategy
    }

    /// The payload cipher selected by this configuration.
    pub fn cipher(&self) -> Result<Cipher> {
        if self.use_encryption {
            Ok(Vigenere::new(self.key.as_bytes())?.into())
        } else {
            Ok(Plain.into())
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    use_encryption: bool,
    random_embedding: bool,
    lsb_bits: Option<u8>,
    key: Key,
    ancillary_strategy: AncillaryStrategy,
}

impl ConfigurationBuilder {
    pub fn with_encryption(mut self, use_encryption: bool) -> Self {
        self.use_encryption = use_encryption;
        self
    }

    pub fn with_random_embedding(mut self, random_embedding: bool) -> Self {
        self.random_embedding = random_embedding;
        self
    }

    pub fn with_lsb_bits(mut self, lsb_bits: u8) -> Self {
        self.lsb_bits = Some(lsb_bits);
        self
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_ancillary_strategy(mut self, strategy: AncillaryStrategy) -> Self {
        self.ancillary_strategy = strategy;
        self
    }

    pub fn build(self) -> Result<Configuration> {
        let lsb_bits = match self.lsb_bits {
            Some(bits) => LsbBits::new(bits)?,
            None => LsbBits::default(),
        };

        if self.key.char_count() > MAX_KEY_CHARS {
            return Err(SteganoError::config(format!(
                "the key must not be longer than {MAX_KEY_CHARS} characters"
            )));
        }
        if self.use_encryption && self.key.is_empty() {
            return Err(SteganoError::config("encryption requires a key"));
        }

        Ok(Configuration {
            use_encryption: self.use_encryption,
            random_embedding: self.random_embedding,
            lsb_bits,
            key: self.key,
            ancillary_strategy: self.ancillary_strategy,
        })
    }
}
