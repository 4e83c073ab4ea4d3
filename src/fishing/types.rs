//! Fishing data structures: species catalog, session and state machine.

use crate::core::constants::{
    BASE_REQUIRED_PROGRESS, CURSOR_START, ROD_PROGRESS_FACTOR, TARGET_ZONE_HIGH, TARGET_ZONE_LOW,
};
use crate::equipment::{BaitKind, RodLevel};

/// An immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishSpecies {
    pub key: &'static str,
    pub name: &'static str,
    pub base_price: u64,
    /// Relative spawn weight; higher is commoner.
    pub weight: f64,
}

/// The species catalog, in draw order.
pub const FISH_CATALOG: [FishSpecies; 8] = [
    FishSpecies {
        key: "mujair",
        name: "Mujair",
        base_price: 50,
        weight: 30.0,
    },
    FishSpecies {
        key: "parai",
        name: "Parai",
        base_price: 70,
        weight: 25.0,
    },
    FishSpecies {
        key: "betok",
        name: "Betok",
        base_price: 40,
        weight: 28.0,
    },
    FishSpecies {
        key: "tawes",
        name: "Tawes",
        base_price: 60,
        weight: 22.0,
    },
    FishSpecies {
        key: "red_devil",
        name: "Red Devil",
        base_price: 75,
        weight: 15.0,
    },
    FishSpecies {
        key: "baby_toman",
        name: "Baby Toman",
        base_price: 150,
        weight: 6.0,
    },
    FishSpecies {
        key: "monster_toman",
        name: "Monster Toman",
        base_price: 500,
        weight: 2.0,
    },
    FishSpecies {
        key: "gar",
        name: "Alligator Gar",
        base_price: 1500,
        weight: 1.0,
    },
];

pub fn species_by_key(key: &str) -> Option<&'static FishSpecies> {
    FISH_CATALOG.iter().find(|s| s.key == key)
}

/// Progress needed to land a fish. Higher rod levels need less.
pub fn required_progress(rod: RodLevel) -> f64 {
    BASE_REQUIRED_PROGRESS / (1.0 + ROD_PROGRESS_FACTOR * rod.steps())
}

/// Whether a cursor position lies strictly inside the target zone.
pub fn in_target_zone(cursor: f64) -> bool {
    cursor > TARGET_ZONE_LOW && cursor < TARGET_ZONE_HIGH
}

/// A single minigame run.
#[derive(Debug, Clone, PartialEq)]
pub struct FishingSession {
    /// Position on the skill bar, 0.0 to 100.0.
    pub cursor: f64,
    /// Catch progress in milliseconds spent in the zone, net of decay.
    pub progress: f64,
    /// Fixed at start from the rod level.
    pub required_progress: f64,
    /// Failure meter, 0.0 to 100.0.
    pub tension: f64,
    pub bait: BaitKind,
    /// Action-hold state latched on the last tick.
    pub holding: bool,
    /// Rod level the session was started with.
    pub rod: RodLevel,
    pub elapsed_ms: f64,
}

impl FishingSession {
    pub fn new(bait: BaitKind, rod: RodLevel) -> Self {
        Self {
            cursor: CURSOR_START,
            progress: 0.0,
            required_progress: required_progress(rod),
            tension: 0.0,
            bait,
            holding: false,
            rod,
            elapsed_ms: 0.0,
        }
    }

    pub fn in_zone(&self) -> bool {
        in_target_zone(self.cursor)
    }

    /// Progress as a percentage of the requirement, capped at 100.
    pub fn progress_pct(&self) -> f64 {
        (self.progress / self.required_progress * 100.0).min(100.0)
    }
}

/// How a session ended, before the catch is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Progress reached the requirement.
    Success,
    /// The fish got away without breaking the line (player cancelled).
    Escaped,
    /// Tension hit the maximum.
    LineBreak,
}

/// Fully resolved result of a session, after inventory was updated.
#[derive(Debug, Clone, PartialEq)]
pub enum FishingOutcome {
    Caught {
        species: &'static FishSpecies,
        payout: u64,
        bait: BaitKind,
    },
    Escaped {
        bait: BaitKind,
    },
    LineBroke {
        bait: BaitKind,
    },
}

impl FishingOutcome {
    pub fn is_catch(&self) -> bool {
        matches!(self, Self::Caught { .. })
    }
}

/// The fishing state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FishingMachine {
    #[default]
    Idle,
    Active(FishingSession),
    /// The run is over; the result lingers on screen before cleanup.
    Resolving {
        outcome: FishingOutcome,
        remaining_ms: f64,
    },
}

/// Phase shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishingPhase {
    Idle,
    Active,
    Resolving,
}

/// Read-only projection of the machine for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishingView {
    pub phase: FishingPhase,
    pub cursor: f64,
    pub progress_pct: f64,
    pub tension: f64,
    pub holding: bool,
    pub in_zone: bool,
    pub bait: Option<BaitKind>,
}

impl FishingView {
    pub const EMPTY: FishingView = FishingView {
        phase: FishingPhase::Idle,
        cursor: 0.0,
        progress_pct: 0.0,
        tension: 0.0,
        holding: false,
        in_zone: false,
        bait: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_unique() {
        for (i, a) in FISH_CATALOG.iter().enumerate() {
            for b in FISH_CATALOG.iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_species_lookup() {
        assert_eq!(species_by_key("gar").unwrap().name, "Alligator Gar");
        assert!(species_by_key("shark").is_none());
    }

    #[test]
    fn test_required_progress_by_rod() {
        let lv1 = required_progress(RodLevel::MIN);
        let lv2 = required_progress(RodLevel::new(2).unwrap());
        let lv4 = required_progress(RodLevel::MAX);
        assert!((lv1 - 1400.0).abs() < 1e-9);
        assert!((lv2 - 1250.0).abs() < 1e-9);
        assert!((lv4 - 1400.0 / 1.36).abs() < 1e-9);
        assert!(lv4 < lv2 && lv2 < lv1);
    }

    #[test]
    fn test_target_zone_is_exclusive() {
        assert!(!in_target_zone(42.0));
        assert!(in_target_zone(42.001));
        assert!(in_target_zone(50.0));
        assert!(!in_target_zone(58.0));
    }

    #[test]
    fn test_new_session_defaults() {
        let s = FishingSession::new(BaitKind::Shrimp, RodLevel::MIN);
        assert_eq!(s.cursor, 50.0);
        assert_eq!(s.progress, 0.0);
        assert_eq!(s.tension, 0.0);
        assert_eq!(s.bait, BaitKind::Shrimp);
        assert!(s.in_zone());
        assert_eq!(s.progress_pct(), 0.0);
    }

    #[test]
    fn test_progress_pct_is_capped() {
        let mut s = FishingSession::new(BaitKind::Worm, RodLevel::MIN);
        s.progress = 700.0;
        assert!((s.progress_pct() - 50.0).abs() < 1e-9);
        s.progress = 5000.0;
        assert_eq!(s.progress_pct(), 100.0);
    }
}
