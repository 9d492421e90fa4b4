//! Folds decoded artifacts into per-stat totals and per-set counts.

use crate::{
    artifact::{Artifact, Set},
    stat::StatType,
};

use std::collections::HashMap;

use serde::Serialize;

/// Equipped count for each set. All three sets are always present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetCounts {
    #[serde(rename = "Black_Lion")]
    black_lion: u32,
    #[serde(rename = "Holy")]
    holy: u32,
    #[serde(rename = "Power")]
    power: u32,
}

impl SetCounts {
    pub const fn get(&self, set: Set) -> u32 {
        match set {
            Set::BlackLion => self.black_lion,
            Set::Holy => self.holy,
            Set::Power => self.power,
        }
    }

    fn get_mut(&mut self, set: Set) -> &mut u32 {
        match set {
            Set::BlackLion => &mut self.black_lion,
            Set::Holy => &mut self.holy,
            Set::Power => &mut self.power,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Set, u32)> + '_ {
        let all: &'static [Set] = &Set::ALL;
        all.iter().map(move |&set| (set, self.get(set)))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Totals {
    stats: HashMap<StatType, f64>,
    sets: SetCounts,
}

impl Totals {
    /// Empty slots are `None` and are skipped.
    pub fn from_artifacts<'a, I>(artifacts: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a Artifact>>,
    {
        artifacts
            .into_iter()
            .flatten()
            .fold(Self::default(), Self::add)
    }

    pub fn add(mut self, artifact: &Artifact) -> Self {
        *self.sets.get_mut(artifact.set) += 1;
        for stat in artifact.stats() {
            *self.stats.entry(stat.stat).or_insert(0.) += stat.value;
        }
        self
    }

    /// Combines totals computed over disjoint groups of artifacts.
    pub fn merge(mut self, other: Self) -> Self {
        for set in Set::ALL.iter() {
            *self.sets.get_mut(*set) += other.sets.get(*set);
        }
        for (stat, value) in other.stats {
            *self.stats.entry(stat).or_insert(0.) += value;
        }
        self
    }

    pub fn get(&self, stat: StatType) -> Option<f64> {
        self.stats.get(&stat).copied()
    }

    pub fn stats(&self) -> &HashMap<StatType, f64> {
        &self.stats
    }

    pub const fn sets(&self) -> &SetCounts {
        &self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{Slot, StatValue};

    fn artifact(id: u64, set: Set, main: StatValue, substats: [StatValue; 4]) -> Artifact {
        Artifact {
            id,
            slot: Slot::Ring,
            set,
            main,
            substats,
        }
    }

    fn collection() -> Vec<Option<Artifact>> {
        let none = StatValue::none();
        vec![
            Some(artifact(
                1,
                Set::BlackLion,
                StatValue::new(StatType::HP, 108.),
                [none; 4],
            )),
            None,
            Some(artifact(
                2,
                Set::Power,
                StatValue::new(StatType::ATTACK, 17.55),
                [
                    StatValue::new(StatType::HP, 12.25),
                    StatValue::new(StatType::CRIT_CHANCE, 1.5),
                    none,
                    StatValue::new(StatType::ATTACK, 0.125),
                ],
            )),
            Some(artifact(
                3,
                Set::Power,
                StatValue::new(StatType::CRIT_CHANCE, 8.37),
                [StatValue::new(StatType::SPEED, 0.75), none, none, none],
            )),
        ]
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_artifact_contributes_main_stat_only() {
        let list = collection();
        let totals = Totals::from_artifacts(vec![list[0].as_ref()]);

        assert_eq!(totals.stats().len(), 1);
        assert_eq!(totals.get(StatType::HP), Some(108.));
        assert_eq!(totals.get(StatType::NONE), None);
        assert_eq!(totals.sets().get(Set::BlackLion), 1);
        assert_eq!(totals.sets().get(Set::Holy), 0);
        assert_eq!(totals.sets().get(Set::Power), 0);
    }

    #[test]
    fn sums_per_stat() {
        let list = collection();
        let totals = Totals::from_artifacts(list.iter().map(Option::as_ref));

        assert!(approx(totals.get(StatType::HP).unwrap(), 120.25));
        assert!(approx(totals.get(StatType::ATTACK).unwrap(), 17.675));
        assert!(approx(totals.get(StatType::CRIT_CHANCE).unwrap(), 9.87));
        assert!(approx(totals.get(StatType::SPEED).unwrap(), 0.75));
        assert_eq!(totals.get(StatType::NONE), None);

        let sets: Vec<_> = totals.sets().iter().collect();
        assert_eq!(sets, vec![(Set::BlackLion, 1), (Set::Holy, 0), (Set::Power, 2)]);
    }

    #[test]
    fn order_does_not_matter() {
        let list = collection();
        let forward = Totals::from_artifacts(list.iter().map(Option::as_ref));
        let backward = Totals::from_artifacts(list.iter().rev().map(Option::as_ref));
        let rotated = Totals::from_artifacts(
            list.iter()
                .cycle()
                .skip(2)
                .take(list.len())
                .map(Option::as_ref),
        );

        for other in &[backward, rotated] {
            assert_eq!(forward.sets(), other.sets());
            assert_eq!(forward.stats().len(), other.stats().len());
            for (stat, value) in forward.stats() {
                assert!(approx(*value, other.get(*stat).unwrap()));
            }
        }
    }

    #[test]
    fn merge_matches_single_fold() {
        let list = collection();
        let (left, right) = list.split_at(2);
        let merged = Totals::from_artifacts(left.iter().map(Option::as_ref))
            .merge(Totals::from_artifacts(right.iter().map(Option::as_ref)));
        let whole = Totals::from_artifacts(list.iter().map(Option::as_ref));

        assert_eq!(merged.sets(), whole.sets());
        for (stat, value) in whole.stats() {
            assert!(approx(*value, merged.get(*stat).unwrap()));
        }
    }
}
