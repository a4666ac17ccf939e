#![doc = include_str!("../README.md")]

pub(crate) mod arith;
pub mod ciphertext;
pub use ciphertext::{CipherText, CipherTextG1, CipherTextG2, CipherTextGT, Group};
pub mod codec;
pub mod context;
pub use context::{Context, DlpConfig};
pub mod curve;
pub use curve::{CurveId, SheCurve};
pub mod decrypt;
pub use decrypt::SecretKey;
pub mod dlp;
pub mod encrypt;
pub use encrypt::{Encrypt, PublicKey};
pub mod error;
pub use error::{Result, SheError};
pub mod key_gen;
pub use key_gen::key_gen;
pub mod precomputed;
pub use precomputed::PrecomputedPublicKey;
pub mod serialize;
pub use serialize::ByteCodec;
