use crate::{
    artifact::{Artifact, RawArtifactRecord, Set, Slot, StatValue, SUBSTAT_COUNT},
    error::{Error, Result},
    formula::{self, SubstatLevel},
};

use std::{collections::HashMap, convert::TryFrom};

pub const DEFAULT_ENHANCEMENT_OVERRIDE: u32 = 10;

/// Exactly one level per sub-stat slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubstatLevels([SubstatLevel; SUBSTAT_COUNT]);

impl SubstatLevels {
    pub const fn get(&self, i: usize) -> SubstatLevel {
        self.0[i]
    }
}

impl TryFrom<&[u8]> for SubstatLevels {
    type Error = Error;

    fn try_from(levels: &[u8]) -> Result<Self> {
        if levels.len() != SUBSTAT_COUNT {
            return Err(Error::InvalidSubstatLevels(levels.len()));
        }

        let mut out = [SubstatLevel::MIN_LEVEL; SUBSTAT_COUNT];
        for (slot, &level) in out.iter_mut().zip(levels) {
            *slot = SubstatLevel::try_from(level)?;
        }
        Ok(Self(out))
    }
}

#[derive(Debug, Clone)]
pub struct Options {
    pub ignore_enhancements: bool,
    pub enhancement_override: u32,
    /// Sub-stat levels by artifact id, only used when ignoring enhancements.
    pub substat_levels: HashMap<u64, Vec<u8>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            ignore_enhancements: false,
            enhancement_override: DEFAULT_ENHANCEMENT_OVERRIDE,
            substat_levels: HashMap::new(),
        }
    }
}

impl Options {
    pub fn simulate(enhancement_override: u32) -> Self {
        Self {
            ignore_enhancements: true,
            enhancement_override,
            ..Self::default()
        }
    }

    pub fn with_levels(mut self, id: u64, levels: Vec<u8>) -> Self {
        self.substat_levels.insert(id, levels);
        self
    }

    fn overrides_for(&self, id: u64) -> Result<Option<SubstatLevels>> {
        if !self.ignore_enhancements {
            return Ok(None);
        }

        self.substat_levels
            .get(&id)
            .map(|levels| SubstatLevels::try_from(levels.as_slice()))
            .transpose()
    }

    fn enhancement_for(&self, record: &RawArtifactRecord) -> u32 {
        if self.ignore_enhancements {
            self.enhancement_override
        } else {
            record.enhancement_level
        }
    }
}

pub fn decode(record: &RawArtifactRecord, options: &Options) -> Result<Artifact> {
    let slot = Slot::try_from(record.slot)?;
    let set = Set::from_family(record.family_id);

    // validate every level before computing anything
    let overrides = options.overrides_for(record.id)?;
    let mut levels = [None; SUBSTAT_COUNT];
    for (i, level) in levels.iter_mut().enumerate() {
        if record.substats[i].is_none() {
            continue;
        }
        *level = Some(match overrides {
            Some(overrides) => overrides.get(i),
            None => SubstatLevel::try_from(record.substat_levels[i])?,
        });
    }

    let main = StatValue::new(
        record.main_stat,
        formula::main_stat(
            record.main_stat,
            record.level,
            options.enhancement_for(record),
        ),
    );

    let mut substats = [StatValue::none(); SUBSTAT_COUNT];
    for (i, substat) in substats.iter_mut().enumerate() {
        if let Some(level) = levels[i] {
            let stat = record.substats[i];
            let value = formula::substat(stat, level, record.level, record.substat_ranges[i]);
            *substat = StatValue::new(stat, value);
        }
    }

    let artifact = Artifact {
        id: record.id,
        slot,
        set,
        main,
        substats,
    };
    log::trace!("decoded artifact {}", artifact);
    Ok(artifact)
}
