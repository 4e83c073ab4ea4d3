//! Rod and bait state.
//!
//! Equipment is owned by [`GameState`](crate::core::game_state::GameState).
//! The fishing core reads the rod level and bait stock when a session starts
//! and decrements bait only when a session resolves.

use crate::core::constants::MAX_ROD_LEVEL;

/// Equipment tier of the fishing rod, always within `1..=MAX_ROD_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RodLevel(u8);

impl RodLevel {
    pub const MIN: RodLevel = RodLevel(1);
    pub const MAX: RodLevel = RodLevel(MAX_ROD_LEVEL);

    /// Returns `None` when `level` is outside `1..=MAX_ROD_LEVEL`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=MAX_ROD_LEVEL).contains(&level).then_some(Self(level))
    }

    /// Forces any integer into the valid range.
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(1, MAX_ROD_LEVEL as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Level steps above the base rod (0 for level 1).
    pub fn steps(self) -> f64 {
        (self.0 - 1) as f64
    }

    pub fn is_max(self) -> bool {
        self.0 >= MAX_ROD_LEVEL
    }

    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl Default for RodLevel {
    fn default() -> Self {
        Self::MIN
    }
}

/// Bait variants. Declaration order is the selection priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaitKind {
    Worm,
    Shrimp,
    Minnow,
}

impl BaitKind {
    pub const PRIORITY: [BaitKind; 3] = [BaitKind::Worm, BaitKind::Shrimp, BaitKind::Minnow];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Worm => "Worm",
            Self::Shrimp => "Shrimp",
            Self::Minnow => "Minnow",
        }
    }

    /// Whether a successful catch uses up one unit of this bait.
    /// Minnows act as a reusable lure and survive a catch.
    pub fn consumed_on_catch(&self) -> bool {
        matches!(self, Self::Worm | Self::Shrimp)
    }

    /// Whether a line break loses one unit of this bait.
    pub fn consumed_on_break(&self) -> bool {
        matches!(self, Self::Minnow)
    }
}

/// Stock count per bait kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaitStock {
    pub worm: u32,
    pub shrimp: u32,
    pub minnow: u32,
}

impl BaitStock {
    pub fn count(&self, kind: BaitKind) -> u32 {
        match kind {
            BaitKind::Worm => self.worm,
            BaitKind::Shrimp => self.shrimp,
            BaitKind::Minnow => self.minnow,
        }
    }

    fn slot_mut(&mut self, kind: BaitKind) -> &mut u32 {
        match kind {
            BaitKind::Worm => &mut self.worm,
            BaitKind::Shrimp => &mut self.shrimp,
            BaitKind::Minnow => &mut self.minnow,
        }
    }

    pub fn add(&mut self, kind: BaitKind, qty: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(qty);
    }

    /// Removes one unit, saturating at zero.
    pub fn consume_one(&mut self, kind: BaitKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(1);
    }

    pub fn total(&self) -> u64 {
        self.worm as u64 + self.shrimp as u64 + self.minnow as u64
    }

    /// First bait kind in priority order with stock remaining.
    pub fn select(&self) -> Option<BaitKind> {
        BaitKind::PRIORITY
            .into_iter()
            .find(|kind| self.count(*kind) > 0)
    }
}

/// Everything the player carries that affects fishing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Equipment {
    pub rod: RodLevel,
    pub bait: BaitStock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rod_level_bounds() {
        assert!(RodLevel::new(0).is_none());
        assert!(RodLevel::new(5).is_none());
        assert_eq!(RodLevel::new(3).unwrap().get(), 3);
        assert_eq!(RodLevel::clamped(-2), RodLevel::MIN);
        assert_eq!(RodLevel::clamped(99), RodLevel::MAX);
    }

    #[test]
    fn test_rod_level_next_stops_at_max() {
        assert_eq!(RodLevel::MIN.next(), RodLevel::new(2));
        assert!(RodLevel::MAX.next().is_none());
        assert!(RodLevel::MAX.is_max());
    }

    #[test]
    fn test_bait_selection_priority() {
        let mut stock = BaitStock {
            worm: 0,
            shrimp: 2,
            minnow: 1,
        };
        assert_eq!(stock.select(), Some(BaitKind::Shrimp));

        stock.worm = 1;
        assert_eq!(stock.select(), Some(BaitKind::Worm));

        stock = BaitStock {
            worm: 0,
            shrimp: 0,
            minnow: 3,
        };
        assert_eq!(stock.select(), Some(BaitKind::Minnow));

        assert_eq!(BaitStock::default().select(), None);
    }

    #[test]
    fn test_consume_saturates_at_zero() {
        let mut stock = BaitStock::default();
        stock.consume_one(BaitKind::Worm);
        assert_eq!(stock.worm, 0);

        stock.add(BaitKind::Worm, 10);
        stock.consume_one(BaitKind::Worm);
        assert_eq!(stock.worm, 9);
        assert_eq!(stock.total(), 9);
    }

    #[test]
    fn test_total_of_full_stock_does_not_overflow() {
        let stock = BaitStock {
            worm: u32::MAX,
            shrimp: u32::MAX,
            minnow: 1,
        };
        assert_eq!(stock.total(), 2 * u32::MAX as u64 + 1);
    }

    #[test]
    fn test_consumption_rules_per_kind() {
        assert!(BaitKind::Worm.consumed_on_catch());
        assert!(BaitKind::Shrimp.consumed_on_catch());
        assert!(!BaitKind::Minnow.consumed_on_catch());
        assert!(BaitKind::Minnow.consumed_on_break());
        assert!(!BaitKind::Worm.consumed_on_break());
    }
}
