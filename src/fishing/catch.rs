//! Catch resolution: species draw, payout and bait bookkeeping.

use super::rng::FishingRng;
use super::types::{FishSpecies, FishingOutcome, Resolution, FISH_CATALOG};
use crate::core::constants::{
    PAYOUT_BONUS_MAX, RARE_ROD_BONUS, RARE_WEIGHT, ULTRA_RARE_ROD_BONUS, ULTRA_RARE_WEIGHT,
};
use crate::equipment::{BaitKind, BaitStock, RodLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fish held by the player, keyed by species key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FishInventory(BTreeMap<String, u32>);

impl FishInventory {
    pub fn add(&mut self, key: &str, qty: u32) {
        let entry = self.0.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
    }

    pub fn count(&self, key: &str) -> u32 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Total fish across catalog species. Unknown keys from old saves are ignored.
    pub fn total(&self) -> u64 {
        FISH_CATALOG.iter().map(|s| self.count(s.key) as u64).sum()
    }

    /// Whether every catalog species is held at least once.
    pub fn has_every_species(&self) -> bool {
        FISH_CATALOG.iter().all(|s| self.count(s.key) > 0)
    }

    /// Empties the inventory, returning the catalog counts that were removed.
    pub fn drain_catalog(&mut self) -> Vec<(&'static FishSpecies, u32)> {
        let drained = FISH_CATALOG
            .iter()
            .map(|s| (s, self.count(s.key)))
            .collect();
        for species in FISH_CATALOG.iter() {
            self.0.insert(species.key.to_string(), 0);
        }
        drained
    }
}

/// Mutable slice of player state written when a session resolves.
pub struct CatchLedger<'a> {
    pub bait: &'a mut BaitStock,
    pub fish: &'a mut FishInventory,
    pub money: &'a mut u64,
}

/// Catalog weights adjusted for the rod level.
///
/// Ultra-rare species (weight <= 6) gain 14% per level above 1, rare species
/// (weight <= 15) gain 6% per level. Common species are unaffected.
pub fn adjusted_weights(rod: RodLevel) -> [f64; FISH_CATALOG.len()] {
    let steps = rod.steps();
    FISH_CATALOG.map(|species| {
        let w = species.weight;
        if w <= ULTRA_RARE_WEIGHT {
            w * (1.0 + ULTRA_RARE_ROD_BONUS * steps)
        } else if w <= RARE_WEIGHT {
            w * (1.0 + RARE_ROD_BONUS * steps)
        } else {
            w
        }
    })
}

/// Draws one species from the rod-adjusted distribution.
pub fn draw_species(rod: RodLevel, rng: &mut impl FishingRng) -> &'static FishSpecies {
    let weights = adjusted_weights(rod);
    let idx = rng.weighted_pick(&weights);
    &FISH_CATALOG[idx.min(FISH_CATALOG.len() - 1)]
}

/// Sale value of a fresh catch: base price plus a 0-28% bonus, floored.
pub fn roll_payout(species: &FishSpecies, rng: &mut impl FishingRng) -> u64 {
    let bonus = 1.0 + rng.uniform() * PAYOUT_BONUS_MAX;
    (species.base_price as f64 * bonus).floor() as u64
}

/// Applies a session resolution to the player's stash.
///
/// | resolution | inventory     | bait consumed        |
/// |------------|---------------|----------------------|
/// | Success    | +1 fish, +pay | worm or shrimp only  |
/// | Escaped    | none          | none                 |
/// | LineBreak  | none          | minnow only          |
pub fn resolve_catch(
    resolution: Resolution,
    bait: BaitKind,
    rod: RodLevel,
    ledger: &mut CatchLedger<'_>,
    rng: &mut impl FishingRng,
) -> FishingOutcome {
    match resolution {
        Resolution::Success => {
            let species = draw_species(rod, rng);
            let payout = roll_payout(species, rng);
            ledger.fish.add(species.key, 1);
            *ledger.money = ledger.money.saturating_add(payout);
            if bait.consumed_on_catch() {
                ledger.bait.consume_one(bait);
            }
            FishingOutcome::Caught {
                species,
                payout,
                bait,
            }
        }
        Resolution::Escaped => FishingOutcome::Escaped { bait },
        Resolution::LineBreak => {
            if bait.consumed_on_break() {
                ledger.bait.consume_one(bait);
            }
            FishingOutcome::LineBroke { bait }
        }
    }
}
