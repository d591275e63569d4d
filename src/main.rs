//! rksys CLI - Command-line tool for Mario Kart Wii save files.
//!
//! This is the main entry point for the rksys command-line application.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rksys::{License, RksysFile};
use rksys_mii::{codec, studio};

/// rksys - Mario Kart Wii save file inspector and editor
#[derive(Parser)]
#[command(name = "rksys")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the licenses in a save file
    Info {
        /// Path to rksys.dat
        #[arg(short, long, env = "RKSYS_SAVE")]
        save: PathBuf,

        /// Also list each license's friend roster
        #[arg(short, long)]
        friends: bool,

        /// Also show lifetime statistics
        #[arg(long)]
        stats: bool,
    },

    /// Rename a license
    Rename {
        /// Path to rksys.dat
        #[arg(short, long, env = "RKSYS_SAVE")]
        save: PathBuf,

        /// License slot (0-3)
        #[arg(long)]
        slot: usize,

        /// New name, at most 10 characters
        name: String,
    },

    /// Point a license at the Mii in a 74-byte block file
    SetMii {
        /// Path to rksys.dat
        #[arg(short, long, env = "RKSYS_SAVE")]
        save: PathBuf,

        /// License slot (0-3)
        #[arg(long)]
        slot: usize,

        /// Path to a raw 74-byte Mii block
        #[arg(short, long)]
        mii: PathBuf,
    },

    /// Recompute and store the save checksum
    FixCrc {
        /// Path to rksys.dat
        #[arg(short, long, env = "RKSYS_SAVE")]
        save: PathBuf,
    },

    /// Print the Mii Studio render key for a 74-byte block file
    StudioKey {
        /// Path to a raw 74-byte Mii block
        #[arg(short, long)]
        mii: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { save, friends, stats } => {
            cmd_info(&save, friends, stats)?;
        }
        Commands::Rename { save, slot, name } => {
            cmd_rename(&save, slot, &name)?;
        }
        Commands::SetMii { save, slot, mii } => {
            cmd_set_mii(&save, slot, &mii)?;
        }
        Commands::FixCrc { save } => {
            cmd_fix_crc(&save)?;
        }
        Commands::StudioKey { mii } => {
            cmd_studio_key(&mii)?;
        }
    }

    Ok(())
}

fn cmd_info(save: &PathBuf, friends: bool, stats: bool) -> Result<()> {
    let file = RksysFile::load(save).context("Failed to load save file")?;

    for (slot, license) in file.licenses().iter().enumerate() {
        match license {
            License::Placeholder => {
                println!("Slot {slot}: (no license)");
            }
            License::Valid(profile) => {
                println!(
                    "Slot {slot}: {:10}  {}  VR {}  BR {}  {} races, {} wins",
                    profile.name,
                    if profile.friend_code.is_empty() {
                        "(offline)"
                    } else {
                        &profile.friend_code
                    },
                    profile.vr,
                    profile.br,
                    profile.total_races,
                    profile.total_wins,
                );

                if friends {
                    for friend in &profile.friends {
                        println!(
                            "    {:10}  {}  VR {}  BR {}  {}W/{}L",
                            friend.mii.name.as_str(),
                            friend.friend_code,
                            friend.vr,
                            friend.br,
                            friend.wins,
                            friend.losses,
                        );
                    }
                }

                if stats {
                    let s = &profile.statistics;
                    println!(
                        "    favorites: {} / {} / {} / {}",
                        s.favorite_character().name(),
                        s.favorite_vehicle().name(),
                        s.favorite_course().name(),
                        s.favorite_stage().name(),
                    );
                    println!(
                        "    online: {} matches ({}W/{}L vs, {}W/{}L battle)",
                        s.online_races(),
                        s.online_vs.wins,
                        s.online_vs.losses,
                        s.online_battle.wins,
                        s.online_battle.losses,
                    );
                    println!(
                        "    {:.1} km driven, {}% of VS distance in first, drift {:?}",
                        s.distance_total / 1000.0,
                        s.percent_time_in_first(),
                        s.drift,
                    );
                }
            }
        }
    }

    let stored = file.stored_checksum();
    let computed = file.computed_checksum();
    if stored == computed {
        println!("Checksum OK ({stored:08X})");
    } else {
        println!("Checksum MISMATCH: stored {stored:08X}, computed {computed:08X}");
    }

    Ok(())
}

fn cmd_rename(save: &PathBuf, slot: usize, name: &str) -> Result<()> {
    let mut file = RksysFile::load(save).context("Failed to load save file")?;
    file.change_name(slot, name)
        .context("Failed to rename license")?;
    file.save(save).context("Failed to write save file")?;
    println!("Renamed slot {slot} to \"{name}\"");
    Ok(())
}

fn cmd_set_mii(save: &PathBuf, slot: usize, mii_path: &PathBuf) -> Result<()> {
    let block = fs::read(mii_path).context("Failed to read Mii block file")?;
    let mii = codec::deserialize(&block).context("Failed to decode Mii block")?;

    let mut file = RksysFile::load(save).context("Failed to load save file")?;
    file.change_mii(slot, &mii)
        .context("Failed to change license Mii")?;
    file.save(save).context("Failed to write save file")?;
    println!("Slot {slot} now uses Mii \"{}\"", mii.name);
    Ok(())
}

fn cmd_fix_crc(save: &PathBuf) -> Result<()> {
    let mut file = RksysFile::load(save).context("Failed to load save file")?;
    let before = file.stored_checksum();
    file.save(save).context("Failed to write save file")?;
    let after = file.stored_checksum();
    if before == after {
        println!("Checksum already correct ({after:08X})");
    } else {
        println!("Checksum fixed: {before:08X} -> {after:08X}");
    }
    Ok(())
}

fn cmd_studio_key(mii_path: &PathBuf) -> Result<()> {
    let block = fs::read(mii_path).context("Failed to read Mii block file")?;
    if block.len() != codec::BLOCK_LEN {
        bail!(
            "Mii block must be exactly {} bytes, got {}",
            codec::BLOCK_LEN,
            block.len()
        );
    }
    let mii = codec::deserialize(&block).context("Failed to decode Mii block")?;
    println!("{}", studio::render_key(&mii));
    Ok(())
}
