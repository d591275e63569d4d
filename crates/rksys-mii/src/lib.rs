//! Wii Mii block codec.
//!
//! Miis travel between games and channels as a fixed 74-byte block, packed
//! big-endian with sub-byte fields. This crate decodes a block into a
//! validated [`Mii`], encodes it back bit-for-bit, and derives the obfuscated
//! render key Nintendo's Mii Studio image endpoint accepts.
//!
//! # Block Format
//!
//! All multi-byte words are big-endian; most fields are narrower than a byte:
//! - 2 bytes: header (validity, gender, birthday, favorite color)
//! - 20 bytes: owner name (UTF-16BE, zero padded)
//! - 2 bytes: height and weight
//! - 4 bytes: Mii id (0 means "no avatar")
//! - 4 bytes: authoring console id
//! - 22 bytes: packed face, hair, eyebrow, eye, nose, lip, glasses,
//!   facial hair and mole words
//! - 20 bytes: creator name
//!
//! # Example
//!
//! ```no_run
//! use rksys_mii::{codec, studio};
//!
//! let raw: [u8; codec::BLOCK_LEN] = std::fs::read("mii.bin")?.try_into().unwrap();
//! let mut mii = codec::deserialize(&raw)?;
//! println!("{} ({})", mii.name, if mii.girl { "girl" } else { "boy" });
//!
//! // Tweak and re-encode
//! mii.favorite = true;
//! let block = codec::serialize(&mii)?;
//!
//! // Render key for the Mii Studio image endpoint
//! println!("{}", studio::render_key(&mii));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod enums;
mod error;
mod mii;
mod name;
pub mod parts;
pub mod studio;

pub use error::{Error, Result};
pub use mii::Mii;
pub use name::{MiiName, NAME_UNITS};

// Re-export commonly used types at crate root
pub use codec::BLOCK_LEN;
pub use enums::FavoriteColor;
