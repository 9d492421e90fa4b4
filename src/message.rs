use crate::total::{SetCounts, Totals};

use std::fmt;
use std::fmt::Display;

use serde::Serialize;

pub trait Generator {
    type Message: Display + Serialize;

    fn generate(&self, totals: &Totals) -> Self::Message;
}

pub struct ReportGenerator {}

impl Generator for ReportGenerator {
    type Message = Report;

    fn generate(&self, totals: &Totals) -> Report {
        let mut stats: Vec<Line> = totals
            .stats()
            .iter()
            .filter(|(stat, _)| !stat.is_none())
            .map(|(&stat, &value)| {
                if stat.name().is_none() {
                    log::warn!("stat {} has no display name", stat.bits());
                }
                Line {
                    stat: stat.bits(),
                    name: stat.to_string(),
                    value,
                    percent: !stat.is_flat(),
                }
            })
            .collect();
        stats.sort_by(|a, b| a.name.cmp(&b.name).then(a.stat.cmp(&b.stat)));

        Report {
            stats,
            sets: *totals.sets(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Line {
    stat: u32,
    name: String,
    value: f64,
    percent: bool,
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.percent { "%" } else { "" };
        write!(f, "{} +{:.3}{}", self.name, self.value, suffix)
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    stats: Vec<Line>,
    sets: SetCounts,
}

impl Report {
    pub fn lines(&self) -> &[Line] {
        &self.stats
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.stats {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        write!(f, "Number of set artifacts: ")?;
        for (i, (set, count)) in self.sets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", set, count)?;
        }
        Ok(())
    }
}
