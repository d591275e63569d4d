//! Validated trait records.
//!
//! Each record mirrors one logical word of the 74-byte block. Constructors
//! enforce the closed range of every numeric field, so a constructed record
//! always re-encodes to a value the game accepts; fields are private and read
//! through accessors for that reason. The `Default` impls reproduce the
//! "blank" Mii the console's editor starts from.

use crate::enums::{
    BeardType, EyeColor, FaceShape, FacialFeature, GlassesColor, GlassesType, HairColor, LipColor,
    MustacheType, NoseType, SkinColor,
};
use crate::error::check_range;
use crate::Result;

/// Height or weight on the editor's 0-127 slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scale(u8);

impl Scale {
    pub fn new(value: u8) -> Result<Self> {
        check_range("scale", u16::from(value), 0, 127)?;
        Ok(Scale(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale(1)
    }
}

/// Head shape, skin tone and overlay texture, plus the two sharing flags
/// stored in the same word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FacialFeatures {
    face_shape: FaceShape,
    skin_color: SkinColor,
    feature: FacialFeature,
    mingle_off: bool,
    downloaded: bool,
}

impl FacialFeatures {
    pub fn new(
        face_shape: FaceShape,
        skin_color: SkinColor,
        feature: FacialFeature,
        mingle_off: bool,
        downloaded: bool,
    ) -> Self {
        FacialFeatures {
            face_shape,
            skin_color,
            feature,
            mingle_off,
            downloaded,
        }
    }

    pub fn face_shape(&self) -> FaceShape {
        self.face_shape
    }

    pub fn skin_color(&self) -> SkinColor {
        self.skin_color
    }

    pub fn feature(&self) -> FacialFeature {
        self.feature
    }

    pub fn mingle_off(&self) -> bool {
        self.mingle_off
    }

    pub fn downloaded(&self) -> bool {
        self.downloaded
    }
}

impl Default for FacialFeatures {
    fn default() -> Self {
        FacialFeatures::new(
            FaceShape::Bread,
            SkinColor::Light,
            FacialFeature::None,
            false,
            false,
        )
    }
}

/// Hair style, color and parting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hair {
    style: u8,
    color: HairColor,
    flipped: bool,
}

impl Hair {
    pub fn new(style: u8, color: HairColor, flipped: bool) -> Result<Self> {
        check_range("hair style", u16::from(style), 0, 71)?;
        Ok(Hair {
            style,
            color,
            flipped,
        })
    }

    pub fn style(&self) -> u8 {
        self.style
    }

    pub fn color(&self) -> HairColor {
        self.color
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }
}

impl Default for Hair {
    fn default() -> Self {
        Hair {
            style: 1,
            color: HairColor::Black,
            flipped: false,
        }
    }
}

/// Eyebrow style and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Eyebrow {
    style: u8,
    rotation: u8,
    color: HairColor,
    size: u8,
    vertical: u8,
    spacing: u8,
}

impl Eyebrow {
    pub fn new(
        style: u8,
        rotation: u8,
        color: HairColor,
        size: u8,
        vertical: u8,
        spacing: u8,
    ) -> Result<Self> {
        check_range("eyebrow style", u16::from(style), 0, 23)?;
        check_range("eyebrow rotation", u16::from(rotation), 0, 11)?;
        check_range("eyebrow size", u16::from(size), 0, 8)?;
        // The editor never moves eyebrows above row 3.
        check_range("eyebrow vertical position", u16::from(vertical), 3, 18)?;
        check_range("eyebrow spacing", u16::from(spacing), 0, 12)?;
        Ok(Eyebrow {
            style,
            rotation,
            color,
            size,
            vertical,
            spacing,
        })
    }

    pub fn style(&self) -> u8 {
        self.style
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn color(&self) -> HairColor {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }

    pub fn spacing(&self) -> u8 {
        self.spacing
    }
}

impl Default for Eyebrow {
    fn default() -> Self {
        Eyebrow {
            style: 1,
            rotation: 0,
            color: HairColor::Black,
            size: 4,
            vertical: 10,
            spacing: 1,
        }
    }
}

/// Eye style and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Eye {
    style: u8,
    rotation: u8,
    vertical: u8,
    color: EyeColor,
    size: u8,
    spacing: u8,
}

impl Eye {
    pub fn new(
        style: u8,
        rotation: u8,
        vertical: u8,
        color: EyeColor,
        size: u8,
        spacing: u8,
    ) -> Result<Self> {
        check_range("eye style", u16::from(style), 0, 47)?;
        check_range("eye rotation", u16::from(rotation), 0, 7)?;
        check_range("eye vertical position", u16::from(vertical), 0, 18)?;
        check_range("eye size", u16::from(size), 0, 7)?;
        check_range("eye spacing", u16::from(spacing), 0, 12)?;
        Ok(Eye {
            style,
            rotation,
            vertical,
            color,
            size,
            spacing,
        })
    }

    pub fn style(&self) -> u8 {
        self.style
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }

    pub fn color(&self) -> EyeColor {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn spacing(&self) -> u8 {
        self.spacing
    }
}

impl Default for Eye {
    fn default() -> Self {
        Eye {
            style: 1,
            rotation: 6,
            vertical: 7,
            color: EyeColor::Black,
            size: 3,
            spacing: 6,
        }
    }
}

/// Nose shape and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Nose {
    style: NoseType,
    size: u8,
    vertical: u8,
}

impl Nose {
    pub fn new(style: NoseType, size: u8, vertical: u8) -> Result<Self> {
        check_range("nose size", u16::from(size), 0, 8)?;
        check_range("nose vertical position", u16::from(vertical), 0, 18)?;
        Ok(Nose {
            style,
            size,
            vertical,
        })
    }

    pub fn style(&self) -> NoseType {
        self.style
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }
}

impl Default for Nose {
    fn default() -> Self {
        Nose {
            style: NoseType::Standard,
            size: 6,
            vertical: 4,
        }
    }
}

/// Mouth style and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lip {
    style: u8,
    color: LipColor,
    size: u8,
    vertical: u8,
}

impl Lip {
    pub fn new(style: u8, color: LipColor, size: u8, vertical: u8) -> Result<Self> {
        check_range("lip style", u16::from(style), 0, 23)?;
        check_range("lip size", u16::from(size), 0, 8)?;
        check_range("lip vertical position", u16::from(vertical), 0, 18)?;
        Ok(Lip {
            style,
            color,
            size,
            vertical,
        })
    }

    pub fn style(&self) -> u8 {
        self.style
    }

    pub fn color(&self) -> LipColor {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }
}

impl Default for Lip {
    fn default() -> Self {
        Lip {
            style: 1,
            color: LipColor::Skin,
            size: 4,
            vertical: 9,
        }
    }
}

/// Glasses style and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Glasses {
    style: GlassesType,
    color: GlassesColor,
    size: u8,
    vertical: u8,
}

impl Glasses {
    pub fn new(style: GlassesType, color: GlassesColor, size: u8, vertical: u8) -> Result<Self> {
        check_range("glasses size", u16::from(size), 0, 7)?;
        check_range("glasses vertical position", u16::from(vertical), 0, 20)?;
        Ok(Glasses {
            style,
            color,
            size,
            vertical,
        })
    }

    pub fn style(&self) -> GlassesType {
        self.style
    }

    pub fn color(&self) -> GlassesColor {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }
}

impl Default for Glasses {
    fn default() -> Self {
        Glasses {
            style: GlassesType::None,
            color: GlassesColor::Dark,
            size: 4,
            vertical: 1,
        }
    }
}

/// Mustache and beard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FacialHair {
    mustache: MustacheType,
    beard: BeardType,
    color: HairColor,
    size: u8,
    vertical: u8,
}

impl FacialHair {
    pub fn new(
        mustache: MustacheType,
        beard: BeardType,
        color: HairColor,
        size: u8,
        vertical: u8,
    ) -> Result<Self> {
        check_range("facial hair size", u16::from(size), 0, 8)?;
        check_range("facial hair vertical position", u16::from(vertical), 0, 16)?;
        Ok(FacialHair {
            mustache,
            beard,
            color,
            size,
            vertical,
        })
    }

    pub fn mustache(&self) -> MustacheType {
        self.mustache
    }

    pub fn beard(&self) -> BeardType {
        self.beard
    }

    pub fn color(&self) -> HairColor {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }
}

impl Default for FacialHair {
    fn default() -> Self {
        FacialHair {
            mustache: MustacheType::None,
            beard: BeardType::None,
            color: HairColor::Black,
            size: 1,
            vertical: 1,
        }
    }
}

/// The beauty mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Mole {
    visible: bool,
    size: u8,
    vertical: u8,
    horizontal: u8,
}

impl Mole {
    pub fn new(visible: bool, size: u8, vertical: u8, horizontal: u8) -> Result<Self> {
        check_range("mole size", u16::from(size), 0, 8)?;
        check_range("mole vertical position", u16::from(vertical), 0, 30)?;
        check_range("mole horizontal position", u16::from(horizontal), 0, 16)?;
        Ok(Mole {
            visible,
            size,
            vertical,
            horizontal,
        })
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn vertical(&self) -> u8 {
        self.vertical
    }

    pub fn horizontal(&self) -> u8 {
        self.horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_ranges_are_closed() {
        assert!(Scale::new(127).is_ok());
        assert!(Scale::new(128).is_err());

        assert!(Hair::new(71, HairColor::Blonde, true).is_ok());
        assert!(Hair::new(72, HairColor::Blonde, true).is_err());

        assert!(Eye::new(47, 7, 18, EyeColor::Green, 7, 12).is_ok());
        assert!(Eye::new(48, 0, 0, EyeColor::Black, 0, 0).is_err());

        assert!(Mole::new(true, 8, 30, 16).is_ok());
        assert!(Mole::new(true, 9, 0, 0).is_err());
    }

    #[test]
    fn test_eyebrow_vertical_floor() {
        assert!(Eyebrow::new(0, 0, HairColor::Black, 0, 3, 0).is_ok());
        let err = Eyebrow::new(0, 0, HairColor::Black, 0, 2, 0).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                field: "eyebrow vertical position",
                value: 2,
                min: 3,
                max: 18,
            }
        );
    }

    #[test]
    fn test_defaults_are_valid() {
        // Every default must survive its own validating constructor.
        let eb = Eyebrow::default();
        assert!(Eyebrow::new(
            eb.style(),
            eb.rotation(),
            eb.color(),
            eb.size(),
            eb.vertical(),
            eb.spacing()
        )
        .is_ok());
        let eye = Eye::default();
        assert!(Eye::new(
            eye.style(),
            eye.rotation(),
            eye.vertical(),
            eye.color(),
            eye.size(),
            eye.spacing()
        )
        .is_ok());
    }
}
