//! License slots and their decoded profiles.
//!
//! The save holds four license slots. A slot either carries a license
//! (magic `RKPD`) or it does not; the distinction is carried as an enum so
//! callers cannot read fields of a license that is not there. Absent or
//! corrupt slots present the placeholder contract the game's own UI shows:
//! friend code `0000-0000-0000`, 5000 VR/BR, zero counters, no friends.

use rksys_common::be;
use rksys_mii::{codec, Mii};

use crate::friend_code;
use crate::statistics::Statistics;

pub(crate) const NAME_OFFSET: usize = 0x14;
pub(crate) const NAME_UNITS: usize = 10;
pub(crate) const AVATAR_ID_OFFSET: usize = 0x28;
pub(crate) const CLIENT_ID_OFFSET: usize = 0x2C;
const PID_OFFSET: usize = 0x5C;
const VR_OFFSET: usize = 0xB0;
const BR_OFFSET: usize = 0xB2;
const TOTAL_RACES_OFFSET: usize = 0xB4;
const TOTAL_WINS_OFFSET: usize = 0xDC;
// The region word lives outside the slots, in the RKGD section.
const REGION_OFFSET: usize = 0x26B0A;

const FRIENDS_OFFSET: usize = 0x56D0;
const FRIEND_STRIDE: usize = 0x1C0;
const MAX_FRIENDS: usize = 30;
const FRIEND_PID_OFFSET: usize = 0x04;
const FRIEND_LOSSES_OFFSET: usize = 0x12;
const FRIEND_WINS_OFFSET: usize = 0x14;
const FRIEND_VR_OFFSET: usize = 0x16;
const FRIEND_BR_OFFSET: usize = 0x18;
const FRIEND_MII_OFFSET: usize = 0x1A;
const FRIEND_COUNTRY_OFFSET: usize = 0x68;
const FRIEND_REGION_OFFSET: usize = 0x69;

/// Placeholder friend code shown for slots without a license.
pub const PLACEHOLDER_FRIEND_CODE: &str = "0000-0000-0000";
/// Placeholder VR and BR shown for slots without a license.
pub const PLACEHOLDER_RATING: u16 = 5000;

/// One of the four license slots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum License {
    /// The slot carries a license.
    Valid(Box<LicenseProfile>),
    /// The slot is vacant or its data is unreadable.
    Placeholder,
}

impl License {
    /// The decoded profile, if the slot carries one.
    pub fn profile(&self) -> Option<&LicenseProfile> {
        match self {
            License::Valid(profile) => Some(profile),
            License::Placeholder => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, License::Placeholder)
    }

    /// VersusRating, or the placeholder 5000.
    pub fn vr(&self) -> u16 {
        self.profile().map_or(PLACEHOLDER_RATING, |p| p.vr)
    }

    /// BattleRating, or the placeholder 5000.
    pub fn br(&self) -> u16 {
        self.profile().map_or(PLACEHOLDER_RATING, |p| p.br)
    }

    /// Friend code, or the placeholder `0000-0000-0000`.
    pub fn friend_code(&self) -> &str {
        self.profile()
            .map_or(PLACEHOLDER_FRIEND_CODE, |p| p.friend_code.as_str())
    }

    /// Lifetime race count; placeholders have raced zero times.
    pub fn total_races(&self) -> u32 {
        self.profile().map_or(0, |p| p.total_races)
    }

    /// Lifetime win count; placeholders have won zero times.
    pub fn total_wins(&self) -> u32 {
        self.profile().map_or(0, |p| p.total_wins)
    }

    /// Friends, empty for placeholders.
    pub fn friends(&self) -> &[FriendProfile] {
        self.profile().map_or(&[], |p| p.friends.as_slice())
    }
}

/// A decoded license slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LicenseProfile {
    /// License display name. Usually, but not always, the Mii's name.
    pub name: String,
    /// Mii id of the license's avatar.
    pub avatar_id: u32,
    /// Id of the console the license lives on.
    pub client_id: u32,
    /// Derived friend code; empty if the license never went online.
    pub friend_code: String,
    pub vr: u16,
    pub br: u16,
    pub total_races: u32,
    pub total_wins: u32,
    /// Region of the save, from the RKGD section.
    pub region_id: u16,
    pub statistics: Statistics,
    pub friends: Vec<FriendProfile>,
}

/// One entry of a license's friend roster.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FriendProfile {
    pub friend_code: String,
    pub wins: u16,
    pub losses: u16,
    pub vr: u16,
    pub br: u16,
    pub country_code: u8,
    pub region_id: u8,
    pub mii: Mii,
}

/// Decode the license slot at `base`. The caller has already verified the
/// slot magic and the buffer length.
pub(crate) fn parse(data: &[u8], base: usize) -> LicenseProfile {
    LicenseProfile {
        name: be::read_utf16(data, base + NAME_OFFSET, NAME_UNITS),
        avatar_id: be::read_u32(data, base + AVATAR_ID_OFFSET),
        client_id: be::read_u32(data, base + CLIENT_ID_OFFSET),
        friend_code: friend_code::friend_code(data, base + PID_OFFSET),
        vr: be::read_u16(data, base + VR_OFFSET),
        br: be::read_u16(data, base + BR_OFFSET),
        total_races: be::read_u32(data, base + TOTAL_RACES_OFFSET),
        total_wins: be::read_u32(data, base + TOTAL_WINS_OFFSET),
        region_id: be::read_u16(data, REGION_OFFSET) / 4096,
        statistics: Statistics::parse(data, base),
        friends: parse_friends(data, base),
    }
}

/// Scan the 30 friend entries of the slot at `base`.
///
/// An entry whose 74 Mii bytes are all zero is vacant. An entry whose Mii
/// bytes fail to decode is dropped; the rest of the roster still loads.
fn parse_friends(data: &[u8], base: usize) -> Vec<FriendProfile> {
    let mut friends = Vec::new();
    for i in 0..MAX_FRIENDS {
        let entry = base + FRIENDS_OFFSET + i * FRIEND_STRIDE;
        let mii_bytes = &data[entry + FRIEND_MII_OFFSET..entry + FRIEND_MII_OFFSET + codec::BLOCK_LEN];
        if mii_bytes.iter().all(|&b| b == 0) {
            continue;
        }
        let Ok(mii) = codec::deserialize(mii_bytes) else {
            continue;
        };
        friends.push(FriendProfile {
            friend_code: friend_code::friend_code(data, entry + FRIEND_PID_OFFSET),
            wins: be::read_u16(data, entry + FRIEND_WINS_OFFSET),
            losses: be::read_u16(data, entry + FRIEND_LOSSES_OFFSET),
            vr: be::read_u16(data, entry + FRIEND_VR_OFFSET),
            br: be::read_u16(data, entry + FRIEND_BR_OFFSET),
            country_code: data[entry + FRIEND_COUNTRY_OFFSET],
            region_id: data[entry + FRIEND_REGION_OFFSET],
            mii,
        });
    }
    friends
}

/// Byte offset of friend entry `index` within a slot. Exposed for tests and
/// tools that patch rosters in place.
pub fn friend_entry_offset(index: usize) -> usize {
    FRIENDS_OFFSET + index * FRIEND_STRIDE
}

/// Byte offset of the Mii block within a friend entry.
pub const fn friend_mii_offset() -> usize {
    FRIEND_MII_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_contract() {
        let license = License::Placeholder;
        assert!(license.is_placeholder());
        assert_eq!(license.friend_code(), "0000-0000-0000");
        assert_eq!(license.vr(), 5000);
        assert_eq!(license.br(), 5000);
        assert_eq!(license.total_races(), 0);
        assert_eq!(license.total_wins(), 0);
        assert!(license.friends().is_empty());
        assert!(license.profile().is_none());
    }
}
