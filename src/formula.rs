use crate::{
    error::{Error, Result},
    stat::{StatType, KNOWN_INDICES},
};

use std::convert::TryFrom;

/// Lowest item level sub-stats are scaled from.
pub const SUBSTAT_BASE_LEVEL: u32 = 30;

/// Value used for stats without a scaling rule.
pub const PLACEHOLDER: f64 = 1.;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scaling {
    Linear(f64),
    /// Linear, but never below 1.
    Floored(f64),
}

pub use Scaling::*;

impl Scaling {
    pub fn apply(self, iln: f64) -> f64 {
        match self {
            Linear(x) => iln * x,
            Floored(x) => (iln * x).max(1.),
        }
    }
}

pub const SCALING: [Scaling; KNOWN_INDICES as usize] = [
    Floored(0.65),
    Floored(4.),
    Linear(0.31),
    Linear(0.27),
    Linear(0.34),
    Linear(0.33),
    Floored(0.31),
    Linear(0.36),
    Linear(0.19),
    Linear(0.348),
    Linear(0.32),
    Linear(0.36),
    Linear(0.32),
    Linear(0.5),
    Linear(0.29),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
    Linear(0.37),
];

pub fn scaling(stat: StatType) -> Option<Scaling> {
    stat.index()
        .and_then(|index| SCALING.get(index as usize))
        .copied()
}

/// Sub-stat roll level, always within `1..=4`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubstatLevel(u8);

impl SubstatLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub const MIN_LEVEL: Self = Self(Self::MIN);

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SubstatLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::InvalidSubstatLevel(level))
        }
    }
}

/// Level-normalised base every main stat scales from.
pub fn iln(item_level: u32, enhancement_level: u32) -> f64 {
    (15. + f64::from(item_level) * 0.3) + f64::from(enhancement_level)
}

pub fn main_stat(stat: StatType, item_level: u32, enhancement_level: u32) -> f64 {
    match scaling(stat) {
        Some(scaling) => scaling.apply(iln(item_level, enhancement_level)),
        None => {
            log::warn!("no scaling rule for stat {}, using placeholder", stat.bits());
            PLACEHOLDER
        }
    }
}

pub fn substat(stat: StatType, level: SubstatLevel, item_level: u32, range: f64) -> f64 {
    let base = main_stat(stat, item_level.max(SUBSTAT_BASE_LEVEL), 0);
    base * (f64::from(level.get()) * 0.12 + 0.2) * range
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(l: u8) -> SubstatLevel {
        SubstatLevel::try_from(l).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hp_main_stat() {
        assert!(approx(iln(40, 0), 27.));
        assert!(approx(main_stat(StatType::HP, 40, 0), 108.));
    }

    #[test]
    fn enhancement_adds_to_base() {
        assert!(approx(main_stat(StatType::SPEED, 40, 5), 32. * 0.33));
        assert!(approx(main_stat(StatType::DAMAGE_RANGE, 0, 0), 15. * 0.36));
    }

    #[test]
    fn floored_indices() {
        assert_eq!(SCALING[0], Floored(0.65));
        assert_eq!(SCALING[1], Floored(4.));
        assert_eq!(SCALING[6], Floored(0.31));
        assert_eq!(Floored(0.31).apply(1.), 1.);
        assert!(approx(Linear(0.31).apply(1.), 0.31));
    }

    #[test]
    fn unknown_index_is_placeholder() {
        assert_eq!(main_stat(StatType::from_bits(1 << 24), 80, 10), PLACEHOLDER);
        assert_eq!(main_stat(StatType::from_bits(1 << 31), 1, 0), PLACEHOLDER);
        assert_eq!(main_stat(StatType::NONE, 80, 10), PLACEHOLDER);
    }

    #[test]
    fn main_stat_grows_with_item_level() {
        for bit in 0..KNOWN_INDICES {
            let stat = StatType::from_bits(1 << bit);
            let mut last = main_stat(stat, 0, 0);
            for item_level in 1..=120 {
                let value = main_stat(stat, item_level, 0);
                assert!(value >= last, "index {} at level {}", bit, item_level);
                last = value;
            }
        }
    }

    #[test]
    fn substat_ignores_low_item_levels() {
        for bit in 0..KNOWN_INDICES {
            let stat = StatType::from_bits(1 << bit);
            for l in 1..=4 {
                for &range in &[0.1, 0.5, 1.] {
                    assert_eq!(
                        substat(stat, level(l), 10, range),
                        substat(stat, level(l), 30, range)
                    );
                    assert_eq!(
                        substat(stat, level(l), 0, range),
                        substat(stat, level(l), 30, range)
                    );
                }
            }
        }
    }

    #[test]
    fn substat_value() {
        // crit chance at level 50: iLN 30, base 9.3
        let value = substat(StatType::CRIT_CHANCE, level(2), 50, 0.5);
        assert!(approx(value, 30. * 0.31 * (2. * 0.12 + 0.2) * 0.5));
    }

    #[test]
    fn substat_level_bounds() {
        assert!(SubstatLevel::try_from(0).is_err());
        assert!(SubstatLevel::try_from(5).is_err());
        assert_eq!(level(1).get(), 1);
        assert_eq!(level(4).get(), 4);
        assert_eq!(SubstatLevel::MIN_LEVEL, level(1));
    }
}
