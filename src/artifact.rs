use crate::{
    error::{Error, Result},
    stat::StatType,
};

use serde::{Deserialize, Serialize};

pub const SUBSTAT_COUNT: usize = 4;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Helmet,
    Chest,
    Gloves,
    Boots,
    Necklace,
    Bracelet,
    Ring,
    Earrings,
}

impl Slot {
    pub const fn from_id(id: u8) -> Option<Self> {
        use Slot::*;
        let slot = match id {
            1 => Helmet,
            2 => Chest,
            3 => Gloves,
            4 => Boots,
            5 => Necklace,
            6 => Bracelet,
            7 => Ring,
            8 => Earrings,
            _ => return None,
        };
        Some(slot)
    }

    pub const fn id(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        use Slot::*;
        match self {
            Helmet => "Helmet",
            Chest => "Chest",
            Gloves => "Gloves",
            Boots => "Boots",
            Necklace => "Necklace",
            Bracelet => "Bracelet",
            Ring => "Ring",
            Earrings => "Earrings",
        }
    }
}

impl std::convert::TryFrom<u8> for Slot {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        Self::from_id(id).ok_or(Error::UnknownSlot(id))
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Set {
    #[serde(rename = "Black_Lion")]
    BlackLion,
    Holy,
    Power,
}

impl Set {
    pub const ALL: [Set; 3] = [Set::BlackLion, Set::Holy, Set::Power];

    /// Families are numbered in blocks of eight.
    pub const fn from_family(family_id: u32) -> Self {
        match family_id {
            0..=8 => Set::BlackLion,
            9..=16 => Set::Holy,
            _ => Set::Power,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Set::BlackLion => "Black_Lion",
            Set::Holy => "Holy",
            Set::Power => "Power",
        }
    }
}

impl std::fmt::Display for Set {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One artifact as supplied by the inventory page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawArtifactRecord {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "ArtifactID")]
    pub family_id: u32,
    #[serde(rename = "Slot")]
    pub slot: u8,
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "AdditionalLevel")]
    pub enhancement_level: u32,
    #[serde(rename = "MainStatType")]
    pub main_stat: StatType,
    #[serde(rename = "SubStats")]
    pub substats: [StatType; SUBSTAT_COUNT],
    #[serde(rename = "SubStatLevels")]
    pub substat_levels: [u8; SUBSTAT_COUNT],
    #[serde(rename = "SubStatRanges")]
    pub substat_ranges: [f64; SUBSTAT_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatValue {
    pub stat: StatType,
    pub value: f64,
}

impl StatValue {
    pub const fn new(stat: StatType, value: f64) -> Self {
        Self { stat, value }
    }

    pub const fn none() -> Self {
        Self::new(StatType::NONE, 0.)
    }

    pub const fn is_none(&self) -> bool {
        self.stat.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    pub id: u64,
    pub slot: Slot,
    pub set: Set,
    pub main: StatValue,
    pub substats: [StatValue; SUBSTAT_COUNT],
}

impl Artifact {
    /// Main stat followed by every unlocked sub-stat.
    pub fn stats(&self) -> impl Iterator<Item = &StatValue> {
        std::iter::once(&self.main).chain(self.substats.iter().filter(|s| !s.is_none()))
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.slot, self.set)
    }
}
