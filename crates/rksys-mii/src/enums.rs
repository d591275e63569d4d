//! Closed enumerations used by the Mii block.
//!
//! Every enumeration here is a closed on-disk contract: the numeric value is
//! what the 74-byte block stores, and values outside the listed range mean
//! the block is corrupt. `from_u8` is the decode path; casting with `as u8`
//! is the encode path.

/// A Mii's favorite color (header word, 4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum FavoriteColor {
    #[default]
    Red = 0,
    Orange,
    Yellow,
    Green,
    Blue,
    LightBlue,
    Pink,
    Purple,
    Brown,
    White,
    Black,
    Gray,
}

impl FavoriteColor {
    /// Decode from the stored value.
    pub fn from_u8(value: u8) -> Option<Self> {
        use FavoriteColor::*;
        Some(match value {
            0 => Red,
            1 => Orange,
            2 => Yellow,
            3 => Green,
            4 => Blue,
            5 => LightBlue,
            6 => Pink,
            7 => Purple,
            8 => Brown,
            9 => White,
            10 => Black,
            11 => Gray,
            _ => return Option::None,
        })
    }
}

/// Overall head shape (face word, 3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum FaceShape {
    #[default]
    RoundPointedChin = 0,
    Circle,
    Oval,
    BlobFlatChin,
    AngularPointedChin,
    Bread,
    Octagon,
    Square,
}

impl FaceShape {
    pub fn from_u8(value: u8) -> Option<Self> {
        use FaceShape::*;
        Some(match value {
            0 => RoundPointedChin,
            1 => Circle,
            2 => Oval,
            3 => BlobFlatChin,
            4 => AngularPointedChin,
            5 => Bread,
            6 => Octagon,
            7 => Square,
            _ => return Option::None,
        })
    }
}

/// Skin tone (face word, 3 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum SkinColor {
    #[default]
    Light = 0,
    LightTan,
    Tan,
    Pink,
    DarkBrown,
    Brown,
}

impl SkinColor {
    pub fn from_u8(value: u8) -> Option<Self> {
        use SkinColor::*;
        Some(match value {
            0 => Light,
            1 => LightTan,
            2 => Tan,
            3 => Pink,
            4 => DarkBrown,
            5 => Brown,
            _ => return Option::None,
        })
    }
}

/// Wrinkles, makeup and other overlay textures (face word, 4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum FacialFeature {
    #[default]
    None = 0,
    Blush,
    BlushAndEyeShadow,
    Freckles,
    BaggyEyes,
    Wrinkles,
    Tired,
    Chin,
    EyeShadow,
    Stubble,
    MouthCorners,
    Aged,
}

impl FacialFeature {
    pub fn from_u8(value: u8) -> Option<Self> {
        use FacialFeature::*;
        Some(match value {
            0 => None,
            1 => Blush,
            2 => BlushAndEyeShadow,
            3 => Freckles,
            4 => BaggyEyes,
            5 => Wrinkles,
            6 => Tired,
            7 => Chin,
            8 => EyeShadow,
            9 => Stubble,
            10 => MouthCorners,
            11 => Aged,
            _ => return Option::None,
        })
    }
}

/// Hair color, shared by hair, eyebrows and facial hair (3 bits each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum HairColor {
    #[default]
    Black = 0,
    Brown,
    Red,
    LightRed,
    Grey,
    LightBrown,
    Blonde,
    White,
}

impl HairColor {
    pub fn from_u8(value: u8) -> Option<Self> {
        use HairColor::*;
        Some(match value {
            0 => Black,
            1 => Brown,
            2 => Red,
            3 => LightRed,
            4 => Grey,
            5 => LightBrown,
            6 => Blonde,
            7 => White,
            _ => return Option::None,
        })
    }
}

/// Iris color (eye word, 3 bits, only 0-5 defined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum EyeColor {
    #[default]
    Black = 0,
    Grey,
    Red,
    Gold,
    Blue,
    Green,
}

impl EyeColor {
    pub fn from_u8(value: u8) -> Option<Self> {
        use EyeColor::*;
        Some(match value {
            0 => Black,
            1 => Grey,
            2 => Red,
            3 => Gold,
            4 => Blue,
            5 => Green,
            _ => return Option::None,
        })
    }
}

/// Nose shape (nose word, 4 bits, only 0-11 defined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum NoseType {
    #[default]
    Standard = 0,
    SemiCircle,
    Dots,
    VShape,
    Full,
    Triangle,
    FlatC,
    UpsideDownC,
    Droopy,
    ArrowDown,
    Flat,
    Tunnel,
}

impl NoseType {
    pub fn from_u8(value: u8) -> Option<Self> {
        use NoseType::*;
        Some(match value {
            0 => Standard,
            1 => SemiCircle,
            2 => Dots,
            3 => VShape,
            4 => Full,
            5 => Triangle,
            6 => FlatC,
            7 => UpsideDownC,
            8 => Droopy,
            9 => ArrowDown,
            10 => Flat,
            11 => Tunnel,
            _ => return Option::None,
        })
    }
}

/// Lip color (lip word, 2 bits, only 0-2 defined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum LipColor {
    #[default]
    Skin = 0,
    Red,
    Pink,
}

impl LipColor {
    pub fn from_u8(value: u8) -> Option<Self> {
        use LipColor::*;
        Some(match value {
            0 => Skin,
            1 => Red,
            2 => Pink,
            _ => return Option::None,
        })
    }
}

/// Glasses frame style (glasses word, 4 bits, only 0-8 defined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum GlassesType {
    #[default]
    None = 0,
    Square,
    Rectangle,
    Circle,
    Oval,
    HalfRim,
    DarkSunglasses,
    Sunglasses,
    SportSunglasses,
}

impl GlassesType {
    pub fn from_u8(value: u8) -> Option<Self> {
        use GlassesType::*;
        Some(match value {
            0 => None,
            1 => Square,
            2 => Rectangle,
            3 => Circle,
            4 => Oval,
            5 => HalfRim,
            6 => DarkSunglasses,
            7 => Sunglasses,
            8 => SportSunglasses,
            _ => return Option::None,
        })
    }
}

/// Glasses frame color (glasses word, 3 bits, only 0-5 defined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum GlassesColor {
    #[default]
    Dark = 0,
    DarkGold,
    Red,
    Blue,
    Gold,
    White,
}

impl GlassesColor {
    pub fn from_u8(value: u8) -> Option<Self> {
        use GlassesColor::*;
        Some(match value {
            0 => Dark,
            1 => DarkGold,
            2 => Red,
            3 => Blue,
            4 => Gold,
            5 => White,
            _ => return Option::None,
        })
    }
}

/// Mustache style (facial hair word, 2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum MustacheType {
    #[default]
    None = 0,
    Thick,
    Thin,
    Goatee,
}

impl MustacheType {
    pub fn from_u8(value: u8) -> Option<Self> {
        use MustacheType::*;
        Some(match value {
            0 => None,
            1 => Thick,
            2 => Thin,
            3 => Goatee,
            _ => return Option::None,
        })
    }
}

/// Beard style (facial hair word, 2 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum BeardType {
    #[default]
    None = 0,
    Thin,
    Wide,
    Full,
}

impl BeardType {
    pub fn from_u8(value: u8) -> Option<Self> {
        use BeardType::*;
        Some(match value {
            0 => None,
            1 => Thin,
            2 => Wide,
            3 => Full,
            _ => return Option::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_discriminant() {
        for v in 0..12 {
            assert_eq!(FavoriteColor::from_u8(v).unwrap() as u8, v);
        }
        assert_eq!(FavoriteColor::from_u8(12), None);
        for v in 0..9 {
            assert_eq!(GlassesType::from_u8(v).unwrap() as u8, v);
        }
        assert_eq!(GlassesType::from_u8(9), None);
        assert_eq!(EyeColor::from_u8(6), None);
        assert_eq!(LipColor::from_u8(3), None);
    }
}
