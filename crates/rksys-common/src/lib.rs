//! Common utilities for rksys.
//!
//! This crate provides the foundational pieces shared by the rksys crates:
//!
//! - [`be`] - Big-endian field access at fixed byte offsets
//! - [`BinaryReader`] - A big-endian cursor for sequentially-laid-out regions
//! - [`crc`] - The standard reflected CRC-32 used by the save-file checksum
//!
//! Everything in the rksys save format is big-endian (the file was written
//! by a PowerPC console). Fixed-layout fields go through [`be`]; regions
//! whose extent is not yet trusted go through the fallible [`BinaryReader`].

pub mod be;
pub mod crc;
mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;
