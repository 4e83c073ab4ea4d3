//! Top-level game state: the player, their gear and wallet, and the lake.

use crate::core::constants::STARTING_MONEY;
use crate::equipment::{BaitStock, Equipment, RodLevel};
use crate::fishing::{CatchLedger, FishInventory, FishingMachine};
use crate::notifications::Notifications;
use crate::world::{spawn_world_fish, Player, WorldFish};
use rand::Rng;

/// Everything that changes while playing.
///
/// Persistent fields are mirrored by `SaveData`; the rest (fishing machine,
/// notifications, decoration) is rebuilt on every launch.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub equipment: Equipment,
    pub money: u64,
    pub fish: FishInventory,
    pub trophies: u32,

    pub fishing: FishingMachine,
    pub notifications: Notifications,
    pub shop_open: bool,
    pub world_fish: Vec<WorldFish>,
    /// Real time played this session, drives the day clock.
    pub elapsed_ms: f64,
}

impl Default for GameState {
    /// A fresh game with an empty lake (no decorative fish).
    fn default() -> Self {
        Self {
            player: Player::spawn_point(),
            equipment: Equipment {
                rod: RodLevel::MIN,
                bait: BaitStock::default(),
            },
            money: STARTING_MONEY,
            fish: FishInventory::default(),
            trophies: 0,
            fishing: FishingMachine::Idle,
            notifications: Notifications::default(),
            shop_open: false,
            world_fish: Vec::new(),
            elapsed_ms: 0.0,
        }
    }
}

impl GameState {
    /// A fresh game with the lake populated.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            world_fish: spawn_world_fish(rng),
            ..Self::default()
        }
    }

    /// Borrows the fishing machine alongside the fields a resolution writes.
    pub fn fishing_and_ledger(&mut self) -> (&mut FishingMachine, CatchLedger<'_>) {
        (
            &mut self.fishing,
            CatchLedger {
                bait: &mut self.equipment.bait,
                fish: &mut self.fish,
                money: &mut self.money,
            },
        )
    }

    /// Title badge: every species caught at least once, or a maxed rod.
    pub fn has_title(&self) -> bool {
        self.fish.has_every_species() || self.equipment.rod.is_max()
    }

    /// A session exists, including its linger, so the player cannot walk.
    pub fn is_movement_locked(&self) -> bool {
        self.fishing.is_fishing()
    }

    /// Casting and opening the shop are refused while fishing or browsing.
    pub fn is_busy(&self) -> bool {
        self.fishing.is_fishing() || self.shop_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::FISH_CATALOG;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = GameState::new(&mut rng);
        assert_eq!(state.money, 500);
        assert_eq!(state.equipment.bait.total(), 0);
        assert_eq!(state.equipment.rod.get(), 1);
        assert_eq!(state.player, Player::spawn_point());
        assert_eq!(state.world_fish.len(), 40);
        assert!(!state.is_busy());
        assert!(!state.is_movement_locked());
    }

    #[test]
    fn test_shop_makes_busy_without_locking_movement() {
        let mut state = GameState::default();
        state.shop_open = true;
        assert!(state.is_busy());
        assert!(!state.is_movement_locked());
    }

    #[test]
    fn test_title_from_max_rod() {
        let mut state = GameState::default();
        assert!(!state.has_title());
        state.equipment.rod = RodLevel::MAX;
        assert!(state.has_title());
    }

    #[test]
    fn test_title_from_full_collection() {
        let mut state = GameState::default();
        for species in FISH_CATALOG.iter().skip(1) {
            state.fish.add(species.key, 1);
        }
        assert!(!state.has_title());
        state.fish.add(FISH_CATALOG[0].key, 1);
        assert!(state.has_title());
    }

    #[test]
    fn test_ledger_writes_through() {
        let mut state = GameState::default();
        {
            let (_, ledger) = state.fishing_and_ledger();
            *ledger.money += 45;
            ledger.fish.add("betok", 1);
            ledger.bait.worm = 3;
        }
        assert_eq!(state.money, 545);
        assert_eq!(state.fish.count("betok"), 1);
        assert_eq!(state.equipment.bait.worm, 3);
    }
}
