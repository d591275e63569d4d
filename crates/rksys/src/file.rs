//! The rksys.dat container.
//!
//! A save is a single fixed-size blob: an 8-byte magic, four license slots
//! of 0x8CC0 bytes each, shared sections, and a CRC-32 at 0x27FFC covering
//! everything before it. Parsing never copies slot data out; licenses are
//! decoded on demand from the owned buffer, and mutations write back into
//! it so an unrecognized byte is never lost on save.

use std::fs;
use std::path::Path;

use rksys_common::{be, crc, BinaryReader};
use rksys_mii::{codec, Mii};

use crate::license::{self, License};
use crate::{Error, Result};

/// Exact size of a save file in bytes.
pub const SAVE_LEN: usize = 0x2BC000;
/// Magic at the start of the file.
pub const MAGIC: &[u8; 8] = b"RKSD0006";
/// Number of license slots.
pub const LICENSE_COUNT: usize = 4;

const SLOT_MAGIC: &[u8; 4] = b"RKPD";
const SLOT_STRIDE: usize = 0x8CC0;
// The checksum covers every byte before its own offset.
const CHECKSUM_OFFSET: usize = 0x27FFC;

/// An opened save file.
///
/// Owns the raw buffer for the session. Reads decode from it in place and
/// writes mutate it in place; [`RksysFile::save`] is the only path back to
/// disk and always refreshes the checksum first.
#[derive(Debug, Clone)]
pub struct RksysFile {
    data: Vec<u8>,
}

impl RksysFile {
    /// Take ownership of a raw save buffer.
    ///
    /// Only the length is validated here. Magic and slot validity are
    /// per-slot concerns that degrade to placeholders instead of failing
    /// the whole file.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        if data.len() != SAVE_LEN {
            return Err(Error::InvalidSize {
                expected: SAVE_LEN,
                actual: data.len(),
            });
        }
        Ok(RksysFile { data })
    }

    /// A zeroed container, as a console that never saved would present.
    /// All four slots decode as placeholders.
    pub fn empty() -> Self {
        RksysFile {
            data: vec![0; SAVE_LEN],
        }
    }

    /// Read and parse a save file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(fs::read(path)?)
    }

    /// Fix the checksum and write the buffer back to disk, creating parent
    /// directories as needed.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.fix_checksum();
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.data)?;
        Ok(())
    }

    /// The raw save bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the file, returning the raw buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether the file-level magic is present.
    pub fn has_magic(&self) -> bool {
        BinaryReader::new(&self.data).expect_magic(MAGIC).is_ok()
    }

    /// Whether `slot` carries a license.
    pub fn slot_in_use(&self, slot: usize) -> bool {
        slot < LICENSE_COUNT
            && self.has_magic()
            && BinaryReader::new_at(&self.data, slot_offset(slot))
                .expect_magic(SLOT_MAGIC)
                .is_ok()
    }

    /// Decode all four license slots.
    ///
    /// A missing file magic degrades every slot to a placeholder; a missing
    /// slot magic degrades that slot only.
    pub fn licenses(&self) -> [License; LICENSE_COUNT] {
        std::array::from_fn(|slot| self.license_at(slot))
    }

    /// Decode one license slot.
    pub fn license(&self, slot: usize) -> Result<License> {
        if slot >= LICENSE_COUNT {
            return Err(Error::InvalidSlot(slot));
        }
        Ok(self.license_at(slot))
    }

    fn license_at(&self, slot: usize) -> License {
        if !self.slot_in_use(slot) {
            return License::Placeholder;
        }
        License::Valid(Box::new(license::parse(&self.data, slot_offset(slot))))
    }

    /// Rename the license in `slot`.
    ///
    /// Runs of whitespace collapse to single spaces first; the result must
    /// be non-empty and fit the 10 code unit name field. Nothing is written
    /// unless every check passes.
    pub fn change_name(&mut self, slot: usize, name: &str) -> Result<()> {
        let base = self.writable_slot(slot)?;
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        let units = be::utf16_len(&name);
        if units > license::NAME_UNITS {
            return Err(Error::NameTooLong(units));
        }
        be::write_utf16(
            &mut self.data,
            base + license::NAME_OFFSET,
            license::NAME_UNITS,
            &name,
        );
        Ok(())
    }

    /// Point the license in `slot` at a different Mii.
    ///
    /// The Mii must serialize (nonzero id, every trait in range). Writes
    /// the avatar and console ids and the Mii's name into the slot; nothing
    /// is written unless every check passes.
    pub fn change_mii(&mut self, slot: usize, mii: &Mii) -> Result<()> {
        let base = self.writable_slot(slot)?;
        codec::serialize(mii)?;
        be::write_u32(&mut self.data, base + license::AVATAR_ID_OFFSET, mii.mii_id);
        be::write_u32(&mut self.data, base + license::CLIENT_ID_OFFSET, mii.system_id);
        mii.name.write_field(&mut self.data, base + license::NAME_OFFSET);
        Ok(())
    }

    fn writable_slot(&self, slot: usize) -> Result<usize> {
        if slot >= LICENSE_COUNT {
            return Err(Error::InvalidSlot(slot));
        }
        if !self.slot_in_use(slot) {
            return Err(Error::SlotNotInUse(slot));
        }
        Ok(slot_offset(slot))
    }

    /// Recompute the checksum and store it at its slot.
    pub fn fix_checksum(&mut self) {
        let sum = crc::checksum(&self.data[..CHECKSUM_OFFSET]);
        be::write_u32(&mut self.data, CHECKSUM_OFFSET, sum);
    }

    /// The checksum the buffer currently deserves.
    pub fn computed_checksum(&self) -> u32 {
        crc::checksum(&self.data[..CHECKSUM_OFFSET])
    }

    /// The checksum the buffer currently stores.
    pub fn stored_checksum(&self) -> u32 {
        be::read_u32(&self.data, CHECKSUM_OFFSET)
    }
}

/// Byte offset of license slot `slot`.
pub const fn slot_offset(slot: usize) -> usize {
    MAGIC.len() + slot * SLOT_STRIDE
}
