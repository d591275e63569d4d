//! The 74-byte Mii block codec.
//!
//! Block layout (all words big-endian):
//!
//! | Offset      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | 0x00-0x01   | header: invalid, girl, birth month/day, color, fav    |
//! | 0x02-0x15   | owner name (10 UTF-16BE units)                        |
//! | 0x16        | height                                                |
//! | 0x17        | weight                                                |
//! | 0x18-0x1B   | Mii id                                                |
//! | 0x1C-0x1F   | system id                                             |
//! | 0x20-0x21   | face: shape, skin, feature, mingle-off, downloaded    |
//! | 0x22-0x23   | hair: style, color, flip                              |
//! | 0x24-0x27   | eyebrow: style, rotation, color, size, y, spacing     |
//! | 0x28-0x2B   | eye: style, rotation, y, color, size, spacing         |
//! | 0x2C-0x2D   | nose: style, size, y                                  |
//! | 0x2E-0x2F   | lip: style, color, size, y                            |
//! | 0x30-0x31   | glasses: style, color, size, y                        |
//! | 0x32-0x33   | facial hair: mustache, beard, color, size, y          |
//! | 0x34-0x35   | mole: visible, size, y, x                             |
//! | 0x36-0x49   | creator name (10 UTF-16BE units)                      |
//!
//! The shift positions are an external contract shared with the console: an
//! off-by-one produces a block that still decodes but draws the wrong face,
//! which is why every word has a boundary test below.

use rksys_common::be;

use crate::enums::{
    BeardType, EyeColor, FaceShape, FacialFeature, FavoriteColor, GlassesColor, GlassesType,
    HairColor, LipColor, MustacheType, NoseType, SkinColor,
};
use crate::name::MiiName;
use crate::parts::{
    Eye, Eyebrow, FacialFeatures, FacialHair, Glasses, Hair, Lip, Mole, Nose, Scale,
};
use crate::{Error, Mii, Result};

/// Size of a serialized Mii block in bytes.
pub const BLOCK_LEN: usize = 74;

/// Serialize a Mii into its 74-byte block.
///
/// Fails with [`Error::ZeroId`] when `mii_id` is 0: a zero id marks "no
/// avatar" on disk and the result would be indistinguishable from a vacant
/// slot on the way back in.
pub fn serialize(mii: &Mii) -> Result<[u8; BLOCK_LEN]> {
    if mii.mii_id == 0 {
        return Err(Error::ZeroId);
    }
    Ok(pack(mii))
}

/// Encode without the id guard. Shared with the studio transcoder, which
/// pins the id itself.
pub(crate) fn pack(mii: &Mii) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];

    let mut header = 0u16;
    if mii.invalid {
        header |= 0x8000;
    }
    if mii.girl {
        header |= 0x4000;
    }
    header |= u16::from(mii.birth_month & 0x0F) << 10;
    header |= u16::from(mii.birth_day & 0x1F) << 5;
    header |= u16::from(mii.favorite_color as u8 & 0x0F) << 1;
    if mii.favorite {
        header |= 0x0001;
    }
    be::write_u16(&mut block, 0x00, header);

    mii.name.write_field(&mut block, 0x02);

    block[0x16] = mii.height.value();
    block[0x17] = mii.weight.value();

    be::write_u32(&mut block, 0x18, mii.mii_id);
    be::write_u32(&mut block, 0x1C, mii.system_id);

    let facial = &mii.facial;
    let mut face = 0u16;
    face |= u16::from(facial.face_shape() as u8 & 0x07) << 13;
    face |= u16::from(facial.skin_color() as u8 & 0x07) << 10;
    face |= u16::from(facial.feature() as u8 & 0x0F) << 6;
    face |= u16::from(facial.mingle_off()) << 2;
    face |= u16::from(facial.downloaded());
    be::write_u16(&mut block, 0x20, face);

    let mut hair = 0u16;
    hair |= u16::from(mii.hair.style() & 0x7F) << 9;
    hair |= u16::from(mii.hair.color() as u8 & 0x07) << 6;
    hair |= u16::from(mii.hair.flipped()) << 5;
    be::write_u16(&mut block, 0x22, hair);

    let brow = &mii.eyebrow;
    let mut eyebrow = 0u32;
    eyebrow |= u32::from(brow.style() & 0x1F) << 27;
    eyebrow |= u32::from(brow.rotation() & 0x0F) << 22;
    eyebrow |= u32::from(brow.color() as u8 & 0x07) << 13;
    eyebrow |= u32::from(brow.size() & 0x0F) << 9;
    eyebrow |= u32::from(brow.vertical() & 0x1F) << 4;
    eyebrow |= u32::from(brow.spacing() & 0x0F);
    be::write_u32(&mut block, 0x24, eyebrow);

    let mut eye = 0u32;
    eye |= u32::from(mii.eye.style() & 0x3F) << 26;
    eye |= u32::from(mii.eye.rotation() & 0x07) << 21;
    eye |= u32::from(mii.eye.vertical() & 0x1F) << 16;
    eye |= u32::from(mii.eye.color() as u8 & 0x07) << 13;
    eye |= u32::from(mii.eye.size() & 0x07) << 9;
    eye |= u32::from(mii.eye.spacing() & 0x0F) << 5;
    be::write_u32(&mut block, 0x28, eye);

    let mut nose = 0u16;
    nose |= u16::from(mii.nose.style() as u8 & 0x0F) << 12;
    nose |= u16::from(mii.nose.size() & 0x0F) << 8;
    nose |= u16::from(mii.nose.vertical() & 0x1F) << 3;
    be::write_u16(&mut block, 0x2C, nose);

    let mut lip = 0u16;
    lip |= u16::from(mii.lip.style() & 0x1F) << 11;
    lip |= u16::from(mii.lip.color() as u8 & 0x03) << 9;
    lip |= u16::from(mii.lip.size() & 0x0F) << 5;
    lip |= u16::from(mii.lip.vertical() & 0x1F);
    be::write_u16(&mut block, 0x2E, lip);

    let mut glasses = 0u16;
    glasses |= u16::from(mii.glasses.style() as u8 & 0x0F) << 12;
    glasses |= u16::from(mii.glasses.color() as u8 & 0x07) << 9;
    glasses |= u16::from(mii.glasses.size() & 0x07) << 5;
    glasses |= u16::from(mii.glasses.vertical() & 0x1F);
    be::write_u16(&mut block, 0x30, glasses);

    let fh = &mii.facial_hair;
    let mut facial_hair = 0u16;
    facial_hair |= u16::from(fh.mustache() as u8 & 0x03) << 14;
    facial_hair |= u16::from(fh.beard() as u8 & 0x03) << 12;
    facial_hair |= u16::from(fh.color() as u8 & 0x07) << 9;
    facial_hair |= u16::from(fh.size() & 0x0F) << 5;
    facial_hair |= u16::from(fh.vertical() & 0x1F);
    be::write_u16(&mut block, 0x32, facial_hair);

    let mut mole = 0u16;
    mole |= u16::from(mii.mole.visible()) << 15;
    mole |= u16::from(mii.mole.size() & 0x0F) << 11;
    mole |= u16::from(mii.mole.vertical() & 0x1F) << 6;
    mole |= u16::from(mii.mole.horizontal() & 0x1F) << 1;
    be::write_u16(&mut block, 0x34, mole);

    mii.creator_name.write_field(&mut block, 0x36);

    block
}

/// Deserialize a 74-byte block into a Mii.
///
/// The input must be exactly [`BLOCK_LEN`] bytes; a block that is entirely
/// 0x00 or 0xFF is reported as empty rather than decoded. Every trait field
/// is range-checked on the way in, so a success here guarantees the value
/// re-serializes.
pub fn deserialize(data: &[u8]) -> Result<Mii> {
    if data.len() != BLOCK_LEN {
        return Err(Error::InvalidLength(data.len()));
    }
    if data.iter().all(|&b| b == 0x00) || data.iter().all(|&b| b == 0xFF) {
        return Err(Error::EmptyBlock);
    }

    let header = be::read_u16(data, 0x00);
    let invalid = header & 0x8000 != 0;
    let girl = header & 0x4000 != 0;
    let birth_month = (((header >> 10) & 0x0F) as u8).clamp(1, 12);
    let birth_day = (((header >> 5) & 0x1F) as u8).clamp(1, 31);
    let favorite_color = enum_field(FavoriteColor::from_u8, "favorite color", (header >> 1) & 0x0F)?;
    let favorite = header & 0x0001 != 0;

    let name = MiiName::from_field(data, 0x02);
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    let height = Scale::new(data[0x16])?;
    let weight = Scale::new(data[0x17])?;

    let mii_id = be::read_u32(data, 0x18);
    let system_id = be::read_u32(data, 0x1C);

    let face = be::read_u16(data, 0x20);
    let facial = FacialFeatures::new(
        enum_field(FaceShape::from_u8, "face shape", (face >> 13) & 0x07)?,
        enum_field(SkinColor::from_u8, "skin color", (face >> 10) & 0x07)?,
        enum_field(FacialFeature::from_u8, "facial feature", (face >> 6) & 0x0F)?,
        face & 0x0004 != 0,
        face & 0x0001 != 0,
    );

    let hair_word = be::read_u16(data, 0x22);
    let hair = Hair::new(
        ((hair_word >> 9) & 0x7F) as u8,
        enum_field(HairColor::from_u8, "hair color", (hair_word >> 6) & 0x07)?,
        hair_word & 0x0020 != 0,
    )?;

    let brow = be::read_u32(data, 0x24);
    let eyebrow = Eyebrow::new(
        ((brow >> 27) & 0x1F) as u8,
        ((brow >> 22) & 0x0F) as u8,
        enum_field(HairColor::from_u8, "eyebrow color", ((brow >> 13) & 0x07) as u16)?,
        ((brow >> 9) & 0x0F) as u8,
        ((brow >> 4) & 0x1F) as u8,
        (brow & 0x0F) as u8,
    )?;

    let eye_word = be::read_u32(data, 0x28);
    let eye = Eye::new(
        ((eye_word >> 26) & 0x3F) as u8,
        ((eye_word >> 21) & 0x07) as u8,
        ((eye_word >> 16) & 0x1F) as u8,
        enum_field(EyeColor::from_u8, "eye color", ((eye_word >> 13) & 0x07) as u16)?,
        ((eye_word >> 9) & 0x07) as u8,
        ((eye_word >> 5) & 0x0F) as u8,
    )?;

    let nose_word = be::read_u16(data, 0x2C);
    let nose = Nose::new(
        enum_field(NoseType::from_u8, "nose style", (nose_word >> 12) & 0x0F)?,
        ((nose_word >> 8) & 0x0F) as u8,
        ((nose_word >> 3) & 0x1F) as u8,
    )?;

    let lip_word = be::read_u16(data, 0x2E);
    let lip = Lip::new(
        ((lip_word >> 11) & 0x1F) as u8,
        enum_field(LipColor::from_u8, "lip color", (lip_word >> 9) & 0x03)?,
        ((lip_word >> 5) & 0x0F) as u8,
        (lip_word & 0x1F) as u8,
    )?;

    let glasses_word = be::read_u16(data, 0x30);
    let glasses = Glasses::new(
        enum_field(GlassesType::from_u8, "glasses style", (glasses_word >> 12) & 0x0F)?,
        enum_field(GlassesColor::from_u8, "glasses color", (glasses_word >> 9) & 0x07)?,
        ((glasses_word >> 5) & 0x07) as u8,
        (glasses_word & 0x1F) as u8,
    )?;

    let fh_word = be::read_u16(data, 0x32);
    let facial_hair = FacialHair::new(
        enum_field(MustacheType::from_u8, "mustache style", (fh_word >> 14) & 0x03)?,
        enum_field(BeardType::from_u8, "beard style", (fh_word >> 12) & 0x03)?,
        enum_field(HairColor::from_u8, "facial hair color", (fh_word >> 9) & 0x07)?,
        ((fh_word >> 5) & 0x0F) as u8,
        (fh_word & 0x1F) as u8,
    )?;

    let mole_word = be::read_u16(data, 0x34);
    let mole = Mole::new(
        mole_word & 0x8000 != 0,
        ((mole_word >> 11) & 0x0F) as u8,
        ((mole_word >> 6) & 0x1F) as u8,
        ((mole_word >> 1) & 0x1F) as u8,
    )?;

    let creator_name = MiiName::from_field(data, 0x36);

    Ok(Mii {
        invalid,
        girl,
        birth_month,
        birth_day,
        favorite_color,
        favorite,
        name,
        height,
        weight,
        mii_id,
        system_id,
        facial,
        hair,
        eyebrow,
        eye,
        nose,
        lip,
        glasses,
        facial_hair,
        mole,
        creator_name,
    })
}

fn enum_field<T>(from: impl Fn(u8) -> Option<T>, field: &'static str, raw: u16) -> Result<T> {
    from(raw as u8).ok_or(Error::InvalidValue { field, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mii() -> Mii {
        Mii {
            girl: true,
            birth_month: 7,
            birth_day: 23,
            favorite_color: FavoriteColor::LightBlue,
            favorite: true,
            name: MiiName::new("Toadette").unwrap(),
            height: Scale::new(90).unwrap(),
            weight: Scale::new(64).unwrap(),
            mii_id: 0x80C4_F00D,
            system_id: 0x0EAD_BEEF,
            facial: FacialFeatures::new(
                FaceShape::Oval,
                SkinColor::Tan,
                FacialFeature::Freckles,
                true,
                false,
            ),
            hair: Hair::new(23, HairColor::LightBrown, true).unwrap(),
            eyebrow: Eyebrow::new(12, 5, HairColor::Brown, 6, 11, 4).unwrap(),
            eye: Eye::new(33, 4, 12, EyeColor::Blue, 5, 8).unwrap(),
            nose: Nose::new(NoseType::Triangle, 7, 10).unwrap(),
            lip: Lip::new(17, LipColor::Pink, 3, 14).unwrap(),
            glasses: Glasses::new(GlassesType::Circle, GlassesColor::Gold, 6, 13).unwrap(),
            facial_hair: FacialHair::new(
                MustacheType::Thin,
                BeardType::Wide,
                HairColor::Grey,
                5,
                9,
            )
            .unwrap(),
            mole: Mole::new(true, 4, 22, 11).unwrap(),
            creator_name: MiiName::new("wizard").unwrap(),
            ..Mii::default()
        }
    }

    #[test]
    fn test_round_trip() {
        let mii = sample_mii();
        let block = serialize(&mii).unwrap();
        assert_eq!(deserialize(&block).unwrap(), mii);
    }

    #[test]
    fn test_round_trip_boundary_values() {
        let mii = Mii {
            invalid: true,
            girl: true,
            birth_month: 12,
            birth_day: 31,
            favorite_color: FavoriteColor::Gray,
            favorite: true,
            name: MiiName::new("WWWWWWWWWW").unwrap(),
            height: Scale::new(127).unwrap(),
            weight: Scale::new(127).unwrap(),
            mii_id: u32::MAX,
            system_id: u32::MAX,
            facial: FacialFeatures::new(
                FaceShape::Square,
                SkinColor::Brown,
                FacialFeature::Aged,
                true,
                true,
            ),
            hair: Hair::new(71, HairColor::White, true).unwrap(),
            eyebrow: Eyebrow::new(23, 11, HairColor::White, 8, 18, 12).unwrap(),
            eye: Eye::new(47, 7, 18, EyeColor::Green, 7, 12).unwrap(),
            nose: Nose::new(NoseType::Tunnel, 8, 18).unwrap(),
            lip: Lip::new(23, LipColor::Pink, 8, 18).unwrap(),
            glasses: Glasses::new(GlassesType::SportSunglasses, GlassesColor::White, 7, 20)
                .unwrap(),
            facial_hair: FacialHair::new(
                MustacheType::Goatee,
                BeardType::Full,
                HairColor::White,
                8,
                16,
            )
            .unwrap(),
            mole: Mole::new(true, 8, 30, 16).unwrap(),
            creator_name: MiiName::new("WWWWWWWWWW").unwrap(),
        };
        let block = serialize(&mii).unwrap();
        assert_eq!(deserialize(&block).unwrap(), mii);
    }

    #[test]
    fn test_header_word_bit_positions() {
        let mii = sample_mii();
        let block = serialize(&mii).unwrap();
        let header = u16::from_be_bytes([block[0], block[1]]);
        assert_eq!(header & 0x8000, 0); // not invalid
        assert_ne!(header & 0x4000, 0); // girl
        assert_eq!((header >> 10) & 0x0F, 7); // month
        assert_eq!((header >> 5) & 0x1F, 23); // day
        assert_eq!((header >> 1) & 0x0F, FavoriteColor::LightBlue as u16);
        assert_eq!(header & 0x0001, 1); // favorite
    }

    #[test]
    fn test_eyebrow_word_bit_positions() {
        let mii = sample_mii();
        let block = serialize(&mii).unwrap();
        let word = u32::from_be_bytes([block[0x24], block[0x25], block[0x26], block[0x27]]);
        assert_eq!(word >> 27, 12); // style
        assert_eq!((word >> 22) & 0x0F, 5); // rotation
        assert_eq!((word >> 13) & 0x07, HairColor::Brown as u32);
        assert_eq!((word >> 9) & 0x0F, 6); // size
        assert_eq!((word >> 4) & 0x1F, 11); // vertical
        assert_eq!(word & 0x0F, 4); // spacing
    }

    #[test]
    fn test_eye_word_bit_positions() {
        let mii = sample_mii();
        let block = serialize(&mii).unwrap();
        let word = u32::from_be_bytes([block[0x28], block[0x29], block[0x2A], block[0x2B]]);
        assert_eq!(word >> 26, 33); // style
        assert_eq!((word >> 21) & 0x07, 4); // rotation
        assert_eq!((word >> 16) & 0x1F, 12); // vertical
        assert_eq!((word >> 13) & 0x07, EyeColor::Blue as u32);
        assert_eq!((word >> 9) & 0x07, 5); // size
        assert_eq!((word >> 5) & 0x0F, 8); // spacing
    }

    #[test]
    fn test_mole_word_bit_positions() {
        let mii = sample_mii();
        let block = serialize(&mii).unwrap();
        let word = u16::from_be_bytes([block[0x34], block[0x35]]);
        assert_ne!(word & 0x8000, 0); // visible
        assert_eq!((word >> 11) & 0x0F, 4); // size
        assert_eq!((word >> 6) & 0x1F, 22); // vertical
        assert_eq!((word >> 1) & 0x1F, 11); // horizontal
    }

    #[test]
    fn test_zero_id_rejected() {
        let mii = Mii {
            name: MiiName::new("NoOne").unwrap(),
            ..Mii::default()
        };
        assert_eq!(serialize(&mii).unwrap_err(), Error::ZeroId);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(deserialize(&[0u8; 73]).unwrap_err(), Error::InvalidLength(73));
        assert_eq!(deserialize(&[0u8; 75]).unwrap_err(), Error::InvalidLength(75));
    }

    #[test]
    fn test_blank_blocks_rejected() {
        assert_eq!(deserialize(&[0x00u8; 74]).unwrap_err(), Error::EmptyBlock);
        assert_eq!(deserialize(&[0xFFu8; 74]).unwrap_err(), Error::EmptyBlock);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut block = serialize(&sample_mii()).unwrap();
        block[0x02..0x16].fill(0);
        assert_eq!(deserialize(&block).unwrap_err(), Error::EmptyName);
    }

    #[test]
    fn test_out_of_range_eye_style_rejected() {
        let mut block = serialize(&sample_mii()).unwrap();
        // Eye style is the top 6 bits of the word at 0x28; 48 exceeds 47.
        block[0x28] = 48 << 2;
        let err = deserialize(&block).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                field: "eye style",
                value: 48,
                min: 0,
                max: 47,
            }
        );
    }

    #[test]
    fn test_undefined_favorite_color_rejected() {
        let mut block = serialize(&sample_mii()).unwrap();
        // Favorite color sits in header bits 1-4; 12 is undefined.
        let mut header = u16::from_be_bytes([block[0], block[1]]);
        header = (header & !0x001E) | (12 << 1);
        block[0..2].copy_from_slice(&header.to_be_bytes());
        let err = deserialize(&block).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidValue {
                field: "favorite color",
                value: 12,
            }
        );
    }

    #[test]
    fn test_month_day_clamped() {
        let mut block = serialize(&sample_mii()).unwrap();
        // Zero month/day fields decode as January 1st.
        let mut header = u16::from_be_bytes([block[0], block[1]]);
        header &= !(0x0F << 10);
        header &= !(0x1F << 5);
        block[0..2].copy_from_slice(&header.to_be_bytes());
        let mii = deserialize(&block).unwrap();
        assert_eq!(mii.birth_month, 1);
        assert_eq!(mii.birth_day, 1);
    }
}
