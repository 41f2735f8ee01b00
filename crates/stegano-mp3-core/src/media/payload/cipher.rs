use std::fmt::{self, Debug, Formatter};

use enum_dispatch::enum_dispatch;
use zeroize::Zeroizing;

use crate::result::Result;
use crate::SteganoError;

/// Byte-wise, length preserving transformation of the payload.
#[enum_dispatch]
pub trait StreamCipher {
    fn encrypt(&self, data: &mut [u8]);
    fn decrypt(&self, data: &mut [u8]);
}

#[enum_dispatch(StreamCipher)]
#[derive(Debug, Clone)]
pub enum Cipher {
    Plain,
    Vigenere,
}

/// leaves the payload as it is
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl StreamCipher for Plain {
    fn encrypt(&self, _data: &mut [u8]) {}
    fn decrypt(&self, _data: &mut [u8]) {}
}

/// Vigenère cipher over bytes: the key is cycled over the data and added modulo 256.
#[derive(Clone)]
pub struct Vigenere {
    key: Zeroizing<Vec<u8>>,
}

impl Vigenere {
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.is_empty() {
            return Err(SteganoError::config("encryption requires a key"));
        }

        Ok(Self {
            key: Zeroizing::new(key.to_vec()),
        })
    }
}

impl Debug for Vigenere {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vigenere({})", "*".repeat(self.key.len()))
    }
}

impl StreamCipher for Vigenere {
    fn encrypt(&self, data: &mut [u8]) {
        for (b, k) in data.iter_mut().zip(self.key.iter().cycle()) {
            *b = b.wrapping_add(*k);
        }
    }

    fn decrypt(&self, data: &mut [u8]) {
        for (b, k) in data.iter_mut().zip(self.key.iter().cycle()) {
            *b = b.wrapping_sub(*k);
        }
    }
}
