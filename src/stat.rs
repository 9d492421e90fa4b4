use serde::{Deserialize, Serialize};

/// Number of stat indices with a known scaling rule.
pub const KNOWN_INDICES: u32 = 24;

/// A stat identifier. Concrete stats are single bits; the bit position is the
/// stat index used to pick a scaling rule.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StatType(u32);

pub struct Info {
    pub name: &'static str,
    pub flat: bool,
}

impl Info {
    const fn new(name: &'static str, flat: bool) -> Self {
        Self { name, flat }
    }
}

impl StatType {
    /// Sub-stat slot that has not been unlocked yet.
    pub const NONE: Self = Self(0);

    pub const ATTACK: Self = Self(1);
    pub const HP: Self = Self(2);
    pub const CRIT_CHANCE: Self = Self(4);
    pub const ACCURACY: Self = Self(8);
    pub const CRIT_DAMAGE: Self = Self(16);
    pub const SPEED: Self = Self(32);
    pub const HEALING_PER_ROUND: Self = Self(64);
    pub const DAMAGE_RANGE: Self = Self(128);
    pub const DOUBLE_DAMAGE_CHANCE: Self = Self(256);
    pub const EXTRA_ROUND_CHANCE: Self = Self(512);
    pub const ATTACK_PERCENT: Self = Self(1024);
    pub const HP_PERCENT: Self = Self(2048);
    pub const EVASION: Self = Self(4096);
    pub const DAMAGE_REDUCTION: Self = Self(8192);
    pub const DEFENCE_PENETRATION: Self = Self(16384);
    pub const LIGHT_DAMAGE: Self = Self(32768);
    pub const DARK_DAMAGE: Self = Self(65536);
    pub const FIRE_DAMAGE: Self = Self(131_072);
    pub const WATER_DAMAGE: Self = Self(262_144);
    pub const WIND_DAMAGE: Self = Self(524_288);
    pub const LIGHTNING_DAMAGE: Self = Self(1_048_576);
    pub const EARTH_DAMAGE: Self = Self(2_097_152);
    pub const ENERGY_DAMAGE: Self = Self(8_388_608);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Position of the highest set bit, `None` for the empty identifier.
    pub const fn index(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(31 - self.0.leading_zeros())
        }
    }

    pub fn name(self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }

    /// Flat stats are absolute quantities, everything else is a percentage.
    pub fn is_flat(self) -> bool {
        self.info().map_or(false, |info| info.flat)
    }

    fn info(self) -> Option<Info> {
        Some(match self {
            Self::ATTACK => Info::new("Attack", true),
            Self::HP => Info::new("HP", true),
            Self::CRIT_CHANCE => Info::new("Crit Chance", false),
            Self::ACCURACY => Info::new("Accuracy", false),
            Self::CRIT_DAMAGE => Info::new("Crit Damage", false),
            Self::SPEED => Info::new("Speed", false),
            Self::HEALING_PER_ROUND => Info::new("Healing Per Round", true),
            Self::DAMAGE_RANGE => Info::new("Damage Range", false),
            Self::DOUBLE_DAMAGE_CHANCE => Info::new("x2 Damage Chance", false),
            Self::EXTRA_ROUND_CHANCE => Info::new("Extra Round Chance", false),
            Self::ATTACK_PERCENT => Info::new("Attack", false),
            Self::HP_PERCENT => Info::new("HP", false),
            Self::EVASION => Info::new("Evasion", false),
            Self::DAMAGE_REDUCTION => Info::new("Damage Reduction", false),
            Self::DEFENCE_PENETRATION => Info::new("Defence Penetration", false),
            Self::LIGHT_DAMAGE => Info::new("Light Damage", false),
            Self::DARK_DAMAGE => Info::new("Dark Damage", false),
            Self::FIRE_DAMAGE => Info::new("Fire Damage", false),
            Self::WATER_DAMAGE => Info::new("Water Damage", false),
            Self::WIND_DAMAGE => Info::new("Wind Damage", false),
            Self::LIGHTNING_DAMAGE => Info::new("Lightning Damage", false),
            Self::EARTH_DAMAGE => Info::new("Earth Damage", false),
            Self::ENERGY_DAMAGE => Info::new("Energy Damage", false),
            _ => return None,
        })
    }
}

impl std::fmt::Display for StatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Unknown({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_bit_position() {
        for bit in 0..KNOWN_INDICES {
            assert_eq!(StatType::from_bits(1 << bit).index(), Some(bit));
        }

        assert_eq!(StatType::ATTACK.index(), Some(0));
        assert_eq!(StatType::ACCURACY.index(), Some(3));
        assert_eq!(StatType::ATTACK_PERCENT.index(), Some(10));
        assert_eq!(StatType::ENERGY_DAMAGE.index(), Some(23));
        assert_eq!(StatType::NONE.index(), None);
    }

    #[test]
    fn highest_bit_wins() {
        assert_eq!(StatType::from_bits(0b1010).index(), Some(3));
    }

    #[test]
    fn names_and_flatness() {
        assert_eq!(StatType::ATTACK.name(), Some("Attack"));
        assert_eq!(StatType::ATTACK_PERCENT.name(), Some("Attack"));
        assert!(StatType::ATTACK.is_flat());
        assert!(StatType::HP.is_flat());
        assert!(StatType::HEALING_PER_ROUND.is_flat());
        assert!(!StatType::ATTACK_PERCENT.is_flat());
        assert!(!StatType::CRIT_CHANCE.is_flat());

        // bit 22 has a scaling rule but no name
        let unnamed = StatType::from_bits(4_194_304);
        assert_eq!(unnamed.name(), None);
        assert_eq!(unnamed.to_string(), "Unknown(4194304)");
    }
}
