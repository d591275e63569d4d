//! Mii Studio render keys.
//!
//! Nintendo's Mii Studio image endpoint takes a 46-byte parameter array,
//! obfuscated and hex-encoded, as its `data` query parameter. The array uses
//! its own index layout and its own color tables, so the 74-byte block is
//! remapped rather than passed through.
//!
//! Only visual fields feed the key. Names, birthdays and ids are dropped
//! first so that two Miis that look alike render from the same key, which
//! keeps image caches keyed on the string warm across renames.

use rksys_common::be;

use crate::codec;
use crate::Mii;

const STUDIO_LEN: usize = 46;

// Facial feature indices that are makeup on the studio side, and the studio
// makeup id each maps to. Everything else in the slot maps to 0.
const MAKEUP_MAP: [u8; 12] = [0, 1, 6, 9, 0, 0, 0, 0, 0, 10, 0, 0];
// Same table for the wrinkle overlay.
const WRINKLES_MAP: [u8; 12] = [0, 0, 0, 0, 5, 2, 3, 7, 8, 0, 9, 11];

/// Build the obfuscated hex key that renders `mii` in Mii Studio.
///
/// Works for any Mii, including ones whose id is 0: the key is derived from
/// a visual-only copy with a pinned id.
pub fn render_key(mii: &Mii) -> String {
    let visual = Mii {
        girl: mii.girl,
        favorite_color: mii.favorite_color,
        height: mii.height,
        weight: mii.weight,
        facial: mii.facial,
        hair: mii.hair,
        eyebrow: mii.eyebrow,
        eye: mii.eye,
        nose: mii.nose,
        lip: mii.lip,
        glasses: mii.glasses,
        facial_hair: mii.facial_hair,
        mole: mii.mole,
        mii_id: 1,
        ..Mii::default()
    };
    encode(&remap(&codec::pack(&visual)))
}

/// Remap a serialized block into the studio parameter array.
fn remap(block: &[u8; codec::BLOCK_LEN]) -> [u8; STUDIO_LEN] {
    let mut studio = [0u8; STUDIO_LEN];

    let header = be::read_u16(block, 0x00);
    studio[0x16] = ((header >> 14) & 1) as u8; // gender
    studio[0x15] = ((header >> 1) & 0x0F) as u8; // favorite color
    studio[0x1E] = block[0x16]; // height
    studio[0x02] = block[0x17]; // weight

    let face = be::read_u16(block, 0x20);
    let feature = ((face >> 6) & 0x0F) as usize;
    studio[0x13] = (face >> 13) as u8;
    studio[0x11] = ((face >> 10) & 0x07) as u8;
    studio[0x12] = MAKEUP_MAP.get(feature).copied().unwrap_or(0);
    studio[0x14] = WRINKLES_MAP.get(feature).copied().unwrap_or(0);

    let hair = be::read_u16(block, 0x22);
    let hair_color = ((hair >> 6) & 0x07) as u8;
    studio[0x1D] = (hair >> 9) as u8;
    studio[0x1B] = zero_to_eight(hair_color);
    studio[0x1C] = ((hair >> 5) & 1) as u8;

    let brow = be::read_u32(block, 0x24);
    let brow_color = ((brow >> 13) & 0x07) as u8;
    studio[0x0E] = (brow >> 27) as u8;
    studio[0x0C] = ((brow >> 22) & 0x0F) as u8;
    studio[0x0B] = zero_to_eight(brow_color);
    studio[0x0D] = ((brow >> 9) & 0x0F) as u8;
    studio[0x0A] = 3; // aspect: fixed, the block has no such field
    studio[0x10] = ((brow >> 4) & 0x1F) as u8;
    studio[0x0F] = (brow & 0x0F) as u8;

    let eye = be::read_u32(block, 0x28);
    studio[0x07] = (eye >> 26) as u8;
    studio[0x05] = ((eye >> 21) & 0x07) as u8;
    studio[0x09] = ((eye >> 16) & 0x1F) as u8;
    // Studio eye colors 8-13 are the console's 0-5.
    studio[0x04] = ((eye >> 13) & 0x07) as u8 + 8;
    studio[0x06] = ((eye >> 9) & 0x07) as u8;
    studio[0x03] = 3; // aspect
    studio[0x08] = ((eye >> 5) & 0x0F) as u8;

    let nose = be::read_u16(block, 0x2C);
    studio[0x2C] = (nose >> 12) as u8;
    studio[0x2B] = ((nose >> 8) & 0x0F) as u8;
    studio[0x2D] = ((nose >> 3) & 0x1F) as u8;

    let lip = be::read_u16(block, 0x2E);
    let lip_color = ((lip >> 9) & 0x03) as u8;
    studio[0x26] = (lip >> 11) as u8;
    // Studio lip colors 19-22 are the console's 0-3.
    studio[0x24] = if lip_color < 4 { lip_color + 19 } else { 0 };
    studio[0x25] = ((lip >> 5) & 0x0F) as u8;
    studio[0x23] = 3; // aspect
    studio[0x27] = (lip & 0x1F) as u8;

    let fh = be::read_u16(block, 0x32);
    let fh_color = ((fh >> 9) & 0x07) as u8;
    studio[0x29] = (fh >> 14) as u8;
    studio[0x01] = ((fh >> 12) & 0x03) as u8;
    studio[0x00] = zero_to_eight(fh_color);
    studio[0x28] = ((fh >> 5) & 0x0F) as u8;
    studio[0x2A] = (fh & 0x1F) as u8;

    let glasses = be::read_u16(block, 0x30);
    let glasses_color = ((glasses >> 9) & 0x07) as u8;
    studio[0x19] = (glasses >> 12) as u8;
    studio[0x17] = match glasses_color {
        0 => 8,
        1..=5 => glasses_color + 13,
        _ => 0,
    };
    studio[0x18] = ((glasses >> 5) & 0x07) as u8;
    studio[0x1A] = (glasses & 0x1F) as u8;

    let mole = be::read_u16(block, 0x34);
    studio[0x20] = (mole >> 15) as u8;
    studio[0x1F] = ((mole >> 11) & 0x0F) as u8;
    studio[0x22] = ((mole >> 6) & 0x1F) as u8;
    studio[0x21] = ((mole >> 1) & 0x1F) as u8;

    studio
}

/// The studio color tables have no 0 entry for hair; black lives at 8.
fn zero_to_eight(color: u8) -> u8 {
    if color == 0 {
        8
    } else {
        color
    }
}

/// Obfuscate the parameter array the way the studio endpoint expects.
///
/// Each output byte is `(7 + (input ^ previous_output)) & 0xFF`, chained
/// from 0, rendered as lowercase hex after a fixed "00" prefix.
fn encode(studio: &[u8; STUDIO_LEN]) -> String {
    let mut out = String::with_capacity((STUDIO_LEN + 1) * 2);
    out.push_str("00");
    let mut prev = 0u8;
    for &b in studio {
        prev = (b ^ prev).wrapping_add(7);
        out.push_str(&format!("{prev:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{EyeColor, FavoriteColor, GlassesColor, GlassesType, HairColor, LipColor};
    use crate::name::MiiName;
    use crate::parts::{Eye, Glasses, Hair, Lip};

    #[test]
    fn test_key_shape() {
        let key = render_key(&Mii::default());
        assert_eq!(key.len(), 2 + STUDIO_LEN * 2);
        assert!(key.starts_with("00"));
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_encode_chains_from_zero() {
        // First byte of output is 7 + (input ^ 0).
        let mut studio = [0u8; STUDIO_LEN];
        studio[0] = 0x10;
        studio[1] = 0x20;
        let key = encode(&studio);
        assert_eq!(&key[0..2], "00");
        assert_eq!(&key[2..4], "17"); // 0x10 + 7
        assert_eq!(&key[4..6], "3e"); // (0x20 ^ 0x17) + 7
    }

    #[test]
    fn test_non_visual_fields_do_not_change_key() {
        let base = Mii {
            mii_id: 0xAABB_CCDD,
            name: MiiName::new("Somebody").unwrap(),
            ..Mii::default()
        };
        let renamed = Mii {
            mii_id: 0x1122_3344,
            name: MiiName::new("Other").unwrap(),
            birth_month: 9,
            birth_day: 2,
            favorite: true,
            system_id: 77,
            creator_name: MiiName::new("x").unwrap(),
            ..base.clone()
        };
        assert_eq!(render_key(&base), render_key(&renamed));
    }

    #[test]
    fn test_visual_fields_change_key() {
        let base = Mii::default();
        let other = Mii {
            hair: Hair::new(30, HairColor::Blonde, false).unwrap(),
            ..Mii::default()
        };
        assert_ne!(render_key(&base), render_key(&other));
    }

    #[test]
    fn test_color_remaps() {
        let mii = Mii {
            favorite_color: FavoriteColor::Pink,
            eye: Eye::new(1, 6, 7, EyeColor::Green, 3, 6).unwrap(),
            lip: Lip::new(1, LipColor::Pink, 4, 9).unwrap(),
            glasses: Glasses::new(GlassesType::Oval, GlassesColor::Blue, 4, 1).unwrap(),
            ..Mii::default()
        };
        let studio = remap(&codec::pack(&Mii { mii_id: 1, ..mii }));
        assert_eq!(studio[0x15], FavoriteColor::Pink as u8);
        assert_eq!(studio[0x04], EyeColor::Green as u8 + 8);
        assert_eq!(studio[0x24], LipColor::Pink as u8 + 19);
        assert_eq!(studio[0x17], GlassesColor::Blue as u8 + 13);
        // Black hair maps to the studio's slot 8.
        assert_eq!(studio[0x1B], 8);
        assert_eq!(studio[0x00], 8);
        // Aspect slots are pinned.
        assert_eq!(studio[0x0A], 3);
        assert_eq!(studio[0x03], 3);
        assert_eq!(studio[0x23], 3);
    }
}
