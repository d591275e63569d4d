//! Game regions and their save locations.
//!
//! Each regional release of the game has its own id, and the console files
//! saves under `<save root>/<game id>/rksys.dat`.

use std::path::{Path, PathBuf};

/// A regional release of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Region {
    Americas,
    Europe,
    Japan,
    Korea,
}

impl Region {
    /// All regions, in game-id order.
    pub const fn all() -> [Region; 4] {
        [
            Region::Americas,
            Region::Europe,
            Region::Japan,
            Region::Korea,
        ]
    }

    /// The 4-character id of this region's release.
    pub const fn game_id(self) -> &'static str {
        match self {
            Region::Americas => "RMCE",
            Region::Europe => "RMCP",
            Region::Japan => "RMCJ",
            Region::Korea => "RMCK",
        }
    }

    /// Human-readable region name.
    pub const fn name(self) -> &'static str {
        match self {
            Region::Americas => "Americas",
            Region::Europe => "Europe",
            Region::Japan => "Japan",
            Region::Korea => "Korea",
        }
    }

    /// Where this region's save lives under `base`.
    pub fn save_path(self, base: &Path) -> PathBuf {
        base.join(self.game_id()).join("rksys.dat")
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_ids() {
        assert_eq!(Region::Americas.game_id(), "RMCE");
        assert_eq!(Region::Europe.game_id(), "RMCP");
        assert_eq!(Region::Japan.game_id(), "RMCJ");
        assert_eq!(Region::Korea.game_id(), "RMCK");
    }

    #[test]
    fn test_save_path() {
        let path = Region::Europe.save_path(Path::new("/saves"));
        assert_eq!(path, Path::new("/saves/RMCP/rksys.dat"));
    }
}
