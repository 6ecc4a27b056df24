//! Peer nominations

use std::fmt;

/// Peers offered as nominees when no roster is configured
pub const DEFAULT_ROSTER: &[&str] = &[
    "Ayu", "Budi", "Citra", "Dimas", "Eka", "Farah", "Galih", "Hana", "Indra", "Joko", "Kirana",
    "Laras", "Made", "Nadia", "Oka", "Putri", "Raka", "Sari", "Tegar", "Wulan",
];

/// Nomination categories, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NominationCategory {
    BestPerformance,
    MostDiscipline,
    MostImproved,
}

impl NominationCategory {
    pub const ALL: [NominationCategory; 3] = [
        Self::BestPerformance,
        Self::MostDiscipline,
        Self::MostImproved,
    ];

    /// Form field name used on the wire
    pub const fn key(&self) -> &'static str {
        match self {
            Self::BestPerformance => "bestPerformance",
            Self::MostDiscipline => "mostDiscipline",
            Self::MostImproved => "mostImproved",
        }
    }

    /// Label shown to the reviewer
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BestPerformance => "Best Performance",
            Self::MostDiscipline => "Most Discipline",
            Self::MostImproved => "Most Improved",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for NominationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One nominee per category. Empty strings mean "not chosen yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nominations {
    pub best_performance: String,
    pub most_discipline: String,
    pub most_improved: String,
}

impl Nominations {
    pub fn get(&self, category: NominationCategory) -> &str {
        match category {
            NominationCategory::BestPerformance => &self.best_performance,
            NominationCategory::MostDiscipline => &self.most_discipline,
            NominationCategory::MostImproved => &self.most_improved,
        }
    }

    pub fn set(&mut self, category: NominationCategory, name: impl Into<String>) {
        let slot = match category {
            NominationCategory::BestPerformance => &mut self.best_performance,
            NominationCategory::MostDiscipline => &mut self.most_discipline,
            NominationCategory::MostImproved => &mut self.most_improved,
        };
        *slot = name.into();
    }

    /// True when every category holds a non-blank name
    pub fn all_filled(&self) -> bool {
        NominationCategory::ALL
            .iter()
            .all(|c| !self.get(*c).trim().is_empty())
    }

    /// True when every category holds a non-blank name other than `subject`
    pub fn is_complete_for(&self, subject: &str) -> bool {
        self.all_filled()
            && NominationCategory::ALL
                .iter()
                .all(|c| self.get(*c).trim() != subject.trim())
    }
}
