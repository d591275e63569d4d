//! The decoded Mii.

use crate::enums::FavoriteColor;
use crate::name::MiiName;
use crate::parts::{
    Eye, Eyebrow, FacialFeatures, FacialHair, Glasses, Hair, Lip, Mole, Nose, Scale,
};

/// One avatar, decoded from (or destined for) a 74-byte block.
///
/// Trait records are validated value types, so any `Mii` you can construct
/// re-encodes to a block the game accepts. The one exception is `mii_id` 0,
/// which means "no avatar" and is rejected at serialization time, since the
/// slot scanner could not tell such a block from an empty one.
///
/// The id splits as a timestamp plus type bits and `system_id` identifies
/// the console that authored the Mii; both are opaque to this crate and are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mii {
    /// Marked unusable by the console (header bit 15).
    pub invalid: bool,
    pub girl: bool,
    /// 1-12; the block has no year field.
    pub birth_month: u8,
    /// 1-31.
    pub birth_day: u8,
    pub favorite_color: FavoriteColor,
    /// Shown in the favorites row of the Mii channel.
    pub favorite: bool,
    pub name: MiiName,
    pub height: Scale,
    pub weight: Scale,
    /// Also called the avatar id. Zero means "no avatar".
    pub mii_id: u32,
    /// Id of the authoring console, also called the client id.
    pub system_id: u32,
    pub facial: FacialFeatures,
    pub hair: Hair,
    pub eyebrow: Eyebrow,
    pub eye: Eye,
    pub nose: Nose,
    pub lip: Lip,
    pub glasses: Glasses,
    pub facial_hair: FacialHair,
    pub mole: Mole,
    pub creator_name: MiiName,
}

impl Default for Mii {
    fn default() -> Self {
        Mii {
            invalid: false,
            girl: false,
            birth_month: 1,
            birth_day: 1,
            favorite_color: FavoriteColor::Red,
            favorite: false,
            name: MiiName::default(),
            height: Scale::default(),
            weight: Scale::default(),
            mii_id: 0,
            system_id: 0,
            facial: FacialFeatures::default(),
            hair: Hair::default(),
            eyebrow: Eyebrow::default(),
            eye: Eye::default(),
            nose: Nose::default(),
            lip: Lip::default(),
            glasses: Glasses::default(),
            facial_hair: FacialHair::default(),
            mole: Mole::default(),
            creator_name: MiiName::default(),
        }
    }
}
