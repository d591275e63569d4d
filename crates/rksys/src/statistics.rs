//! The per-license statistics block.
//!
//! Each license records lifetime playtime counters in a fixed grid starting
//! 0x88 bytes into its slot: win/loss tuples per mode, distance and item
//! counters, per-character/vehicle/course/stage usage tallies, and the
//! trophy cabinet. Everything here is read-only; the game maintains these
//! fields itself.

use rksys_common::be;

/// Wins and losses for one play mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    /// Total matches in this mode.
    pub const fn total(self) -> u32 {
        self.wins + self.losses
    }
}

/// Drift setting the player uses most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DriftKind {
    #[default]
    Standard,
    Manual,
    Automatic,
}

/// The 24 playable characters, in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Character {
    Mario = 0,
    BabyPeach,
    Waluigi,
    Bowser,
    BabyDaisy,
    DryBones,
    BabyMario,
    Luigi,
    Toad,
    DonkeyKong,
    Yoshi,
    Wario,
    BabyLuigi,
    Toadette,
    KoopaTroopa,
    Daisy,
    Peach,
    Birdo,
    DiddyKong,
    KingBoo,
    BowserJr,
    DryBowser,
    FunkyKong,
    Rosalina,
}

impl Character {
    pub const COUNT: usize = 24;

    /// All characters, in tally order.
    pub const fn all() -> [Character; Self::COUNT] {
        use Character::*;
        [
            Mario, BabyPeach, Waluigi, Bowser, BabyDaisy, DryBones, BabyMario, Luigi, Toad,
            DonkeyKong, Yoshi, Wario, BabyLuigi, Toadette, KoopaTroopa, Daisy, Peach, Birdo,
            DiddyKong, KingBoo, BowserJr, DryBowser, FunkyKong, Rosalina,
        ]
    }

    pub const fn name(self) -> &'static str {
        use Character::*;
        match self {
            Mario => "Mario",
            BabyPeach => "Baby Peach",
            Waluigi => "Waluigi",
            Bowser => "Bowser",
            BabyDaisy => "Baby Daisy",
            DryBones => "Dry Bones",
            BabyMario => "Baby Mario",
            Luigi => "Luigi",
            Toad => "Toad",
            DonkeyKong => "Donkey Kong",
            Yoshi => "Yoshi",
            Wario => "Wario",
            BabyLuigi => "Baby Luigi",
            Toadette => "Toadette",
            KoopaTroopa => "Koopa Troopa",
            Daisy => "Daisy",
            Peach => "Peach",
            Birdo => "Birdo",
            DiddyKong => "Diddy Kong",
            KingBoo => "King Boo",
            BowserJr => "Bowser Jr.",
            DryBowser => "Dry Bowser",
            FunkyKong => "Funky Kong",
            Rosalina => "Rosalina",
        }
    }
}

/// The 36 vehicles, in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Vehicle {
    StandardKartS = 0,
    StandardKartM,
    StandardKartL,
    BoosterSeat,
    ClassicDragster,
    Offroader,
    MiniBeast,
    WildWing,
    FlameFlyer,
    CheepCharger,
    SuperBlooper,
    PiranhaProwler,
    TinyTitan,
    Daytripper,
    Jetsetter,
    BlueFalcon,
    Sprinter,
    Honeycoupe,
    StandardBikeS,
    StandardBikeM,
    StandardBikeL,
    BulletBike,
    MachBike,
    FlameRunner,
    BitBike,
    Sugarscoot,
    WarioBike,
    Quacker,
    ZipZip,
    ShootingStar,
    Magikruiser,
    Sneakster,
    Spear,
    JetBubble,
    DolphinDasher,
    Phantom,
}

impl Vehicle {
    pub const COUNT: usize = 36;

    /// All vehicles, in tally order.
    pub const fn all() -> [Vehicle; Self::COUNT] {
        use Vehicle::*;
        [
            StandardKartS,
            StandardKartM,
            StandardKartL,
            BoosterSeat,
            ClassicDragster,
            Offroader,
            MiniBeast,
            WildWing,
            FlameFlyer,
            CheepCharger,
            SuperBlooper,
            PiranhaProwler,
            TinyTitan,
            Daytripper,
            Jetsetter,
            BlueFalcon,
            Sprinter,
            Honeycoupe,
            StandardBikeS,
            StandardBikeM,
            StandardBikeL,
            BulletBike,
            MachBike,
            FlameRunner,
            BitBike,
            Sugarscoot,
            WarioBike,
            Quacker,
            ZipZip,
            ShootingStar,
            Magikruiser,
            Sneakster,
            Spear,
            JetBubble,
            DolphinDasher,
            Phantom,
        ]
    }

    pub const fn name(self) -> &'static str {
        use Vehicle::*;
        match self {
            StandardKartS => "Standard Kart S",
            StandardKartM => "Standard Kart M",
            StandardKartL => "Standard Kart L",
            BoosterSeat => "Booster Seat",
            ClassicDragster => "Classic Dragster",
            Offroader => "Offroader",
            MiniBeast => "Mini Beast",
            WildWing => "Wild Wing",
            FlameFlyer => "Flame Flyer",
            CheepCharger => "Cheep Charger",
            SuperBlooper => "Super Blooper",
            PiranhaProwler => "Piranha Prowler",
            TinyTitan => "Tiny Titan",
            Daytripper => "Daytripper",
            Jetsetter => "Jetsetter",
            BlueFalcon => "Blue Falcon",
            Sprinter => "Sprinter",
            Honeycoupe => "Honeycoupe",
            StandardBikeS => "Standard Bike S",
            StandardBikeM => "Standard Bike M",
            StandardBikeL => "Standard Bike L",
            BulletBike => "Bullet Bike",
            MachBike => "Mach Bike",
            FlameRunner => "Flame Runner",
            BitBike => "Bit Bike",
            Sugarscoot => "Sugarscoot",
            WarioBike => "Wario Bike",
            Quacker => "Quacker",
            ZipZip => "Zip Zip",
            ShootingStar => "Shooting Star",
            Magikruiser => "Magikruiser",
            Sneakster => "Sneakster",
            Spear => "Spear",
            JetBubble => "Jet Bubble",
            DolphinDasher => "Dolphin Dasher",
            Phantom => "Phantom",
        }
    }
}

/// The 32 race courses, in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Course {
    MarioCircuit = 0,
    MooMooMeadows,
    MushroomGorge,
    GrumbleVolcano,
    ToadsFactory,
    CoconutMall,
    DkSummit,
    WariosGoldMine,
    LuigiCircuit,
    DaisyCircuit,
    MoonviewHighway,
    MapleTreeway,
    BowsersCastle,
    RainbowRoad,
    DryDryRuins,
    KoopaCape,
    GcnPeachBeach,
    GcnMarioCircuit,
    GcnWaluigiStadium,
    GcnDkMountain,
    DsYoshiFalls,
    DsDesertHills,
    DsPeachGardens,
    DsDelfinoSquare,
    SnesMarioCircuit3,
    SnesGhostValley2,
    N64MarioRaceway,
    N64SherbetLand,
    N64BowsersCastle,
    N64DksJungleParkway,
    GbaBowserCastle3,
    GbaShyGuyBeach,
}

impl Course {
    pub const COUNT: usize = 32;

    /// All courses, in tally order.
    pub const fn all() -> [Course; Self::COUNT] {
        use Course::*;
        [
            MarioCircuit,
            MooMooMeadows,
            MushroomGorge,
            GrumbleVolcano,
            ToadsFactory,
            CoconutMall,
            DkSummit,
            WariosGoldMine,
            LuigiCircuit,
            DaisyCircuit,
            MoonviewHighway,
            MapleTreeway,
            BowsersCastle,
            RainbowRoad,
            DryDryRuins,
            KoopaCape,
            GcnPeachBeach,
            GcnMarioCircuit,
            GcnWaluigiStadium,
            GcnDkMountain,
            DsYoshiFalls,
            DsDesertHills,
            DsPeachGardens,
            DsDelfinoSquare,
            SnesMarioCircuit3,
            SnesGhostValley2,
            N64MarioRaceway,
            N64SherbetLand,
            N64BowsersCastle,
            N64DksJungleParkway,
            GbaBowserCastle3,
            GbaShyGuyBeach,
        ]
    }

    pub const fn name(self) -> &'static str {
        use Course::*;
        match self {
            MarioCircuit => "Mario Circuit",
            MooMooMeadows => "Moo Moo Meadows",
            MushroomGorge => "Mushroom Gorge",
            GrumbleVolcano => "Grumble Volcano",
            ToadsFactory => "Toad's Factory",
            CoconutMall => "Coconut Mall",
            DkSummit => "DK Summit",
            WariosGoldMine => "Wario's Gold Mine",
            LuigiCircuit => "Luigi Circuit",
            DaisyCircuit => "Daisy Circuit",
            MoonviewHighway => "Moonview Highway",
            MapleTreeway => "Maple Treeway",
            BowsersCastle => "Bowser's Castle",
            RainbowRoad => "Rainbow Road",
            DryDryRuins => "Dry Dry Ruins",
            KoopaCape => "Koopa Cape",
            GcnPeachBeach => "GCN Peach Beach",
            GcnMarioCircuit => "GCN Mario Circuit",
            GcnWaluigiStadium => "GCN Waluigi Stadium",
            GcnDkMountain => "GCN DK Mountain",
            DsYoshiFalls => "DS Yoshi Falls",
            DsDesertHills => "DS Desert Hills",
            DsPeachGardens => "DS Peach Gardens",
            DsDelfinoSquare => "DS Delfino Square",
            SnesMarioCircuit3 => "SNES Mario Circuit 3",
            SnesGhostValley2 => "SNES Ghost Valley 2",
            N64MarioRaceway => "N64 Mario Raceway",
            N64SherbetLand => "N64 Sherbet Land",
            N64BowsersCastle => "N64 Bowser's Castle",
            N64DksJungleParkway => "N64 DK's Jungle Parkway",
            GbaBowserCastle3 => "GBA Bowser Castle 3",
            GbaShyGuyBeach => "GBA Shy Guy Beach",
        }
    }
}

/// The 10 battle stages, in tally order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum BattleStage {
    DelfinoPier = 0,
    BlockPlaza,
    ChainChompWheel,
    FunkyStadium,
    ThwompDesert,
    GcnCookieLand,
    DsTwilightHouse,
    SnesBattleCourse4,
    GbaBattleCourse3,
    N64Skyscraper,
}

impl BattleStage {
    pub const COUNT: usize = 10;

    /// All stages, in tally order.
    pub const fn all() -> [BattleStage; Self::COUNT] {
        use BattleStage::*;
        [
            DelfinoPier,
            BlockPlaza,
            ChainChompWheel,
            FunkyStadium,
            ThwompDesert,
            GcnCookieLand,
            DsTwilightHouse,
            SnesBattleCourse4,
            GbaBattleCourse3,
            N64Skyscraper,
        ]
    }

    pub const fn name(self) -> &'static str {
        use BattleStage::*;
        match self {
            DelfinoPier => "Delfino Pier",
            BlockPlaza => "Block Plaza",
            ChainChompWheel => "Chain Chomp Wheel",
            FunkyStadium => "Funky Stadium",
            ThwompDesert => "Thwomp Desert",
            GcnCookieLand => "GCN Cookie Land",
            DsTwilightHouse => "DS Twilight House",
            SnesBattleCourse4 => "SNES Battle Course 4",
            GbaBattleCourse3 => "GBA Battle Course 3",
            N64Skyscraper => "N64 Skyscraper",
        }
    }
}

/// Engine classes, one trophy row per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum CupClass {
    Cc50 = 0,
    Cc100,
    Cc150,
    Mirror,
}

impl CupClass {
    pub const fn all() -> [CupClass; 4] {
        [CupClass::Cc50, CupClass::Cc100, CupClass::Cc150, CupClass::Mirror]
    }

    pub const fn name(self) -> &'static str {
        match self {
            CupClass::Cc50 => "50cc",
            CupClass::Cc100 => "100cc",
            CupClass::Cc150 => "150cc",
            CupClass::Mirror => "Mirror",
        }
    }
}

/// The 8 cups, in trophy-cabinet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Cup {
    Mushroom = 0,
    Flower,
    Star,
    Special,
    Shell,
    Banana,
    Leaf,
    Lightning,
}

impl Cup {
    pub const fn all() -> [Cup; 8] {
        use Cup::*;
        [Mushroom, Flower, Star, Special, Shell, Banana, Leaf, Lightning]
    }

    pub const fn name(self) -> &'static str {
        use Cup::*;
        match self {
            Mushroom => "Mushroom Cup",
            Flower => "Flower Cup",
            Star => "Star Cup",
            Special => "Special Cup",
            Shell => "Shell Cup",
            Banana => "Banana Cup",
            Leaf => "Leaf Cup",
            Lightning => "Lightning Cup",
        }
    }
}

/// Trophy awarded for a cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum TrophyKind {
    Gold = 0,
    Silver,
    Bronze,
    None,
}

impl TrophyKind {
    pub const fn from_u8(value: u8) -> Self {
        match value & 0x03 {
            0 => TrophyKind::Gold,
            1 => TrophyKind::Silver,
            2 => TrophyKind::Bronze,
            _ => TrophyKind::None,
        }
    }
}

/// Grand-prix rank awarded for a cup, three stars down to F.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum TrophyRank {
    ThreeStars = 0,
    TwoStars,
    OneStar,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl TrophyRank {
    pub fn from_u8(value: u8) -> Option<Self> {
        use TrophyRank::*;
        Some(match value {
            0 => ThreeStars,
            1 => TwoStars,
            2 => OneStar,
            3 => A,
            4 => B,
            5 => C,
            6 => D,
            7 => E,
            8 => F,
            _ => return None,
        })
    }
}

/// One cup's entry in the trophy cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrophyRecord {
    pub class: CupClass,
    pub cup: Cup,
    pub trophy: TrophyKind,
    /// `None` when the rank nibble holds a value outside the defined ranks.
    pub rank: Option<TrophyRank>,
    pub completed: bool,
}

// Offsets into the slot, in the order the game lays them out.
const OFFLINE_VS: usize = 0x88;
const OFFLINE_BATTLE: usize = 0x90;
const ONLINE_VS: usize = 0x98;
const ONLINE_BATTLE: usize = 0xA0;
const RACES: usize = 0xB4;
const BATTLES: usize = 0xB8;
const WHEEL_RACES: usize = 0xBC;
const WHEEL_BATTLES: usize = 0xC0;
const DISTANCE_TOTAL: usize = 0xC4;
const GHOSTS_SENT: usize = 0xC8;
const GHOSTS_RECEIVED: usize = 0xCC;
const ITEM_HITS_DEALT: usize = 0xD0;
const ITEM_HITS_RECEIVED: usize = 0xD4;
const TRICKS: usize = 0xD8;
const FIRST_PLACES: usize = 0xDC;
const DISTANCE_IN_FIRST: usize = 0xE0;
const DISTANCE_IN_VS: usize = 0xE4;
const COMPETITIONS: usize = 0xE8;
const DRIFT: usize = 0xEA;
const CHARACTER_TALLIES: usize = 0xEC;
const VEHICLE_TALLIES: usize = 0x11E;
const COURSE_TALLIES: usize = 0x166;
const STAGE_TALLIES: usize = 0x1A6;
const TROPHIES: usize = 0x1C0;
const TROPHY_STRIDE: usize = 0x60;
const TROPHY_KIND_BYTE: usize = 0x4F;
const TROPHY_RANK_BYTE: usize = 0x51;
const TROPHY_COMPLETED_BYTE: usize = 0x52;

/// Lifetime statistics of one license.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    pub offline_vs: WinLoss,
    pub offline_battle: WinLoss,
    pub online_vs: WinLoss,
    pub online_battle: WinLoss,
    pub races: u32,
    pub battles: u32,
    pub wheel_races: u32,
    pub wheel_battles: u32,
    /// Meters driven, lifetime.
    pub distance_total: f32,
    pub ghosts_sent: u32,
    pub ghosts_received: u32,
    pub item_hits_dealt: u32,
    pub item_hits_received: u32,
    pub tricks: u32,
    pub first_places: u32,
    pub distance_in_first: f32,
    pub distance_in_vs: f32,
    pub competitions: u16,
    pub drift: DriftKind,
    pub character_tallies: [u16; Character::COUNT],
    pub vehicle_tallies: [u16; Vehicle::COUNT],
    pub course_tallies: [u16; Course::COUNT],
    pub stage_tallies: [u16; BattleStage::COUNT],
    pub trophies: Vec<TrophyRecord>,
}

impl Statistics {
    /// Read the statistics block of the slot at `base`.
    pub fn parse(data: &[u8], base: usize) -> Statistics {
        let win_loss = |offset: usize| WinLoss {
            wins: be::read_u32(data, base + offset),
            losses: be::read_u32(data, base + offset + 4),
        };

        let mut character_tallies = [0u16; Character::COUNT];
        for (i, tally) in character_tallies.iter_mut().enumerate() {
            *tally = be::read_u16(data, base + CHARACTER_TALLIES + i * 2);
        }
        let mut vehicle_tallies = [0u16; Vehicle::COUNT];
        for (i, tally) in vehicle_tallies.iter_mut().enumerate() {
            *tally = be::read_u16(data, base + VEHICLE_TALLIES + i * 2);
        }
        let mut course_tallies = [0u16; Course::COUNT];
        for (i, tally) in course_tallies.iter_mut().enumerate() {
            *tally = be::read_u16(data, base + COURSE_TALLIES + i * 2);
        }
        let mut stage_tallies = [0u16; BattleStage::COUNT];
        for (i, tally) in stage_tallies.iter_mut().enumerate() {
            *tally = be::read_u16(data, base + STAGE_TALLIES + i * 2);
        }

        let mut trophies = Vec::with_capacity(32);
        for (ci, class) in CupClass::all().into_iter().enumerate() {
            for (cj, cup) in Cup::all().into_iter().enumerate() {
                let cup_base = base + TROPHIES + (ci * 8 + cj) * TROPHY_STRIDE;
                trophies.push(TrophyRecord {
                    class,
                    cup,
                    trophy: TrophyKind::from_u8(data[cup_base + TROPHY_KIND_BYTE]),
                    rank: TrophyRank::from_u8((data[cup_base + TROPHY_RANK_BYTE] >> 4) & 0x0F),
                    completed: data[cup_base + TROPHY_COMPLETED_BYTE] & 0x01 == 1,
                });
            }
        }

        Statistics {
            offline_vs: win_loss(OFFLINE_VS),
            offline_battle: win_loss(OFFLINE_BATTLE),
            online_vs: win_loss(ONLINE_VS),
            online_battle: win_loss(ONLINE_BATTLE),
            races: be::read_u32(data, base + RACES),
            battles: be::read_u32(data, base + BATTLES),
            wheel_races: be::read_u32(data, base + WHEEL_RACES),
            wheel_battles: be::read_u32(data, base + WHEEL_BATTLES),
            distance_total: be::read_f32(data, base + DISTANCE_TOTAL),
            ghosts_sent: be::read_u32(data, base + GHOSTS_SENT),
            ghosts_received: be::read_u32(data, base + GHOSTS_RECEIVED),
            item_hits_dealt: be::read_u32(data, base + ITEM_HITS_DEALT),
            item_hits_received: be::read_u32(data, base + ITEM_HITS_RECEIVED),
            tricks: be::read_u32(data, base + TRICKS),
            first_places: be::read_u32(data, base + FIRST_PLACES),
            distance_in_first: be::read_f32(data, base + DISTANCE_IN_FIRST),
            distance_in_vs: be::read_f32(data, base + DISTANCE_IN_VS),
            competitions: be::read_u16(data, base + COMPETITIONS),
            drift: match data[base + DRIFT] & 0x03 {
                1 => DriftKind::Manual,
                2 => DriftKind::Automatic,
                _ => DriftKind::Standard,
            },
            character_tallies,
            vehicle_tallies,
            course_tallies,
            stage_tallies,
            trophies,
        }
    }

    /// The most-raced character; ties resolve to the earlier tally slot.
    pub fn favorite_character(&self) -> Character {
        Character::all()[favorite_index(&self.character_tallies)]
    }

    /// The most-used vehicle.
    pub fn favorite_vehicle(&self) -> Vehicle {
        Vehicle::all()[favorite_index(&self.vehicle_tallies)]
    }

    /// The most-raced course.
    pub fn favorite_course(&self) -> Course {
        Course::all()[favorite_index(&self.course_tallies)]
    }

    /// The most-played battle stage.
    pub fn favorite_stage(&self) -> BattleStage {
        BattleStage::all()[favorite_index(&self.stage_tallies)]
    }

    /// The trophy record for one cup and engine class.
    pub fn trophy(&self, class: CupClass, cup: Cup) -> TrophyRecord {
        self.trophies[class as usize * 8 + cup as usize]
    }

    /// Share of VS distance spent in first place, as a whole percentage.
    pub fn percent_time_in_first(&self) -> u32 {
        if self.distance_in_vs == 0.0 {
            return 0;
        }
        (self.distance_in_first / self.distance_in_vs * 100.0) as u32
    }

    /// Fraction of Wii Wheel sessions that were races; 0 when the wheel was
    /// never used.
    pub fn wheel_usage_ratio(&self) -> f32 {
        let total = self.wheel_races + self.wheel_battles;
        if total == 0 {
            return 0.0;
        }
        self.wheel_races as f32 / total as f32
    }

    /// Total matches played online, both modes.
    pub fn online_races(&self) -> u32 {
        self.online_vs.total() + self.online_battle.total()
    }
}

/// Index of the largest tally; ties go to the first.
fn favorite_index(tallies: &[u16]) -> usize {
    let mut best = 0;
    for (i, &tally) in tallies.iter().enumerate() {
        if tally > tallies[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: usize = 8;

    fn empty_slot() -> Vec<u8> {
        vec![0u8; 0x9000]
    }

    #[test]
    fn test_win_loss_tuples() {
        let mut data = empty_slot();
        be::write_u32(&mut data, BASE + 0x88, 10);
        be::write_u32(&mut data, BASE + 0x8C, 4);
        be::write_u32(&mut data, BASE + 0x98, 120);
        be::write_u32(&mut data, BASE + 0x9C, 80);
        be::write_u32(&mut data, BASE + 0xA0, 7);
        be::write_u32(&mut data, BASE + 0xA4, 3);

        let stats = Statistics::parse(&data, BASE);
        assert_eq!(stats.offline_vs, WinLoss { wins: 10, losses: 4 });
        assert_eq!(stats.online_vs, WinLoss { wins: 120, losses: 80 });
        assert_eq!(stats.offline_battle, WinLoss::default());
        assert_eq!(stats.online_races(), 210);
    }

    #[test]
    fn test_counters_and_drift() {
        let mut data = empty_slot();
        be::write_u32(&mut data, BASE + 0xB4, 1500);
        be::write_u32(&mut data, BASE + 0xD8, 321);
        be::write_u16(&mut data, BASE + 0xE8, 9);
        data[BASE + 0xEA] = 0xFD; // low bits 01 -> manual

        let stats = Statistics::parse(&data, BASE);
        assert_eq!(stats.races, 1500);
        assert_eq!(stats.tricks, 321);
        assert_eq!(stats.competitions, 9);
        assert_eq!(stats.drift, DriftKind::Manual);

        data[BASE + 0xEA] = 0x02;
        assert_eq!(Statistics::parse(&data, BASE).drift, DriftKind::Automatic);
        data[BASE + 0xEA] = 0x00;
        assert_eq!(Statistics::parse(&data, BASE).drift, DriftKind::Standard);
    }

    #[test]
    fn test_favorites_max_scan() {
        let mut data = empty_slot();
        // Toadette (index 13) leads the character tallies.
        be::write_u16(&mut data, BASE + 0xEC + 13 * 2, 77);
        be::write_u16(&mut data, BASE + 0xEC + 2 * 2, 40);
        // Funky Stadium (index 3) leads the stage tallies.
        be::write_u16(&mut data, BASE + 0x1A6 + 3 * 2, 5);

        let stats = Statistics::parse(&data, BASE);
        assert_eq!(stats.favorite_character(), Character::Toadette);
        assert_eq!(stats.favorite_stage(), BattleStage::FunkyStadium);
    }

    #[test]
    fn test_favorites_tie_breaks_to_first() {
        let mut data = empty_slot();
        be::write_u16(&mut data, BASE + 0x11E + 4 * 2, 12);
        be::write_u16(&mut data, BASE + 0x11E + 20 * 2, 12);

        let stats = Statistics::parse(&data, BASE);
        assert_eq!(stats.favorite_vehicle(), Vehicle::ClassicDragster);
        // All-zero tallies resolve to the first enumerant.
        assert_eq!(stats.favorite_course(), Course::MarioCircuit);
    }

    #[test]
    fn test_trophy_cabinet() {
        let mut data = empty_slot();
        // 150cc Special Cup: gold, one star, completed.
        let cup_base = BASE + 0x1C0 + (2 * 8 + 3) * 0x60;
        data[cup_base + 0x4F] = 0x00;
        data[cup_base + 0x51] = 0x20;
        data[cup_base + 0x52] = 0x01;

        let stats = Statistics::parse(&data, BASE);
        let record = stats.trophy(CupClass::Cc150, Cup::Special);
        assert_eq!(record.trophy, TrophyKind::Gold);
        assert_eq!(record.rank, Some(TrophyRank::OneStar));
        assert!(record.completed);

        // Untouched cups read as none/incomplete.
        let other = stats.trophy(CupClass::Cc50, Cup::Mushroom);
        assert_eq!(other.trophy, TrophyKind::Gold); // 0x00 & 3
        assert!(!other.completed);
        assert_eq!(stats.trophies.len(), 32);
    }

    #[test]
    fn test_trophy_rank_nibble_out_of_range() {
        let mut data = empty_slot();
        let cup_base = BASE + 0x1C0;
        data[cup_base + 0x51] = 0xC0; // nibble 12, undefined
        let stats = Statistics::parse(&data, BASE);
        assert_eq!(stats.trophy(CupClass::Cc50, Cup::Mushroom).rank, None);
    }

    #[test]
    fn test_derived_ratios() {
        let mut data = empty_slot();
        be::write_u32(&mut data, BASE + 0xE0, 250.0f32.to_bits());
        be::write_u32(&mut data, BASE + 0xE4, 1000.0f32.to_bits());
        be::write_u32(&mut data, BASE + 0xBC, 30);
        be::write_u32(&mut data, BASE + 0xC0, 10);

        let stats = Statistics::parse(&data, BASE);
        assert_eq!(stats.percent_time_in_first(), 25);
        assert_eq!(stats.wheel_usage_ratio(), 0.75);

        // Zero denominators resolve to zero, not NaN.
        let zeroed = Statistics::parse(&empty_slot(), BASE);
        assert_eq!(zeroed.percent_time_in_first(), 0);
        assert_eq!(zeroed.wheel_usage_ratio(), 0.0);
    }
}
