//! Byte and hex encodings of keys and ciphertexts.
//!
//! The layout is the compressed canonical encoding of arkworks, element by
//! element, with no length prefix for fixed-shape types.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::{Result, SheError};

pub trait ByteCodec: CanonicalSerialize + CanonicalDeserialize {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut buf)?;
        Ok(buf)
    }

    /// Writes into the front of `buf` and returns the number of bytes written.
    fn serialize_into(&self, buf: &mut [u8]) -> Result<usize> {
        let needed = self.compressed_size();
        if buf.len() < needed {
            return Err(SheError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }
        self.serialize_compressed(&mut buf[..needed])?;
        Ok(needed)
    }

    /// Reads a value occupying all of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = bytes;
        let value = Self::deserialize_compressed(&mut reader)?;
        if !reader.is_empty() {
            return Err(SheError::TrailingBytes(reader.len()));
        }
        Ok(value)
    }

    fn to_hex(&self) -> Result<String> {
        Ok(hex::encode(self.to_bytes()?))
    }

    fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }
}

impl<T: CanonicalSerialize + CanonicalDeserialize> ByteCodec for T {}
