//! Mario Kart Wii save-file (rksys.dat) parser and editor.
//!
//! The save is a single 0x2BC000-byte blob holding four license slots,
//! their friend rosters and statistics, and a CRC-32 the game verifies on
//! boot. This crate can read, edit, and write those saves without
//! disturbing the bytes it does not understand.
//!
//! # File Format
//!
//! - 8 bytes: magic (`RKSD0006`)
//! - 4 license slots of 0x8CC0 bytes each, magic `RKPD`: license name,
//!   avatar and console ids, ratings, the statistics grid, and 30 friend
//!   entries of 0x1C0 bytes each
//! - 4 bytes at 0x27FFC: CRC-32 over everything before it
//!
//! # Example
//!
//! ```no_run
//! use rksys::RksysFile;
//!
//! let mut save = RksysFile::load("rksys.dat")?;
//! for license in &save.licenses() {
//!     println!("{} VR, {} BR, {} friends",
//!         license.vr(), license.br(), license.friends().len());
//! }
//!
//! save.change_name(0, "New Name")?;
//! save.save("rksys.dat")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod file;
pub mod friend_code;
pub mod license;
pub mod region;
pub mod statistics;

pub use error::{Error, Result};
pub use file::{slot_offset, RksysFile, LICENSE_COUNT, MAGIC, SAVE_LEN};

// Re-export commonly used types at crate root
pub use license::{FriendProfile, License, LicenseProfile};
pub use region::Region;
pub use statistics::Statistics;
