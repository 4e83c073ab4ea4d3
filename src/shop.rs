//! The bait shop: purchases, rod upgrades and fish sales.

use crate::core::constants::ROD_UPGRADE_BASE_COST;
use crate::core::game_state::GameState;
use crate::equipment::{BaitKind, RodLevel};
use log::info;
use thiserror::Error;

/// Things the shop sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopItem {
    WormPack,
    Minnow,
    ShrimpPack,
    Trophy,
}

impl ShopItem {
    pub const ALL: [ShopItem; 4] = [
        ShopItem::WormPack,
        ShopItem::Minnow,
        ShopItem::ShrimpPack,
        ShopItem::Trophy,
    ];

    pub fn price(&self) -> u64 {
        match self {
            Self::WormPack => 50,
            Self::Minnow => 150,
            Self::ShrimpPack => 75,
            Self::Trophy => 500,
        }
    }

    /// Units granted per purchase.
    pub fn quantity(&self) -> u32 {
        match self {
            Self::WormPack => 10,
            Self::Minnow => 1,
            Self::ShrimpPack => 5,
            Self::Trophy => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WormPack => "Worm pack (x10)",
            Self::Minnow => "Minnow lure (x1)",
            Self::ShrimpPack => "Shrimp pack (x5)",
            Self::Trophy => "Trophy",
        }
    }

    pub fn bait(&self) -> Option<BaitKind> {
        match self {
            Self::WormPack => Some(BaitKind::Worm),
            Self::Minnow => Some(BaitKind::Minnow),
            Self::ShrimpPack => Some(BaitKind::Shrimp),
            Self::Trophy => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("Not enough money (need ${needed}, have ${have})")]
    InsufficientFunds { needed: u64, have: u64 },
    #[error("Rod is already at max level")]
    MaxLevel,
}

/// Cost to upgrade from `level` to the next: 200, 400, 800.
pub fn rod_upgrade_cost(level: RodLevel) -> u64 {
    ROD_UPGRADE_BASE_COST << (level.get() - 1)
}

fn charge(state: &mut GameState, price: u64) -> Result<(), ShopError> {
    if state.money < price {
        return Err(ShopError::InsufficientFunds {
            needed: price,
            have: state.money,
        });
    }
    state.money -= price;
    Ok(())
}

pub fn buy(state: &mut GameState, item: ShopItem) -> Result<(), ShopError> {
    charge(state, item.price())?;
    match item.bait() {
        Some(kind) => state.equipment.bait.add(kind, item.quantity()),
        None => state.trophies = state.trophies.saturating_add(item.quantity()),
    }
    info!("bought {:?} for ${}", item, item.price());
    Ok(())
}

/// Upgrades the rod one level. Returns the new level.
pub fn upgrade_rod(state: &mut GameState) -> Result<RodLevel, ShopError> {
    let current = state.equipment.rod;
    let next = current.next().ok_or(ShopError::MaxLevel)?;
    charge(state, rod_upgrade_cost(current))?;
    state.equipment.rod = next;
    info!("rod upgraded to level {}", next.get());
    Ok(next)
}

/// Sells every fish at base price. Returns the amount earned.
pub fn sell_all_fish(state: &mut GameState) -> u64 {
    let total: u64 = state
        .fish
        .drain_catalog()
        .into_iter()
        .map(|(species, count)| species.base_price * count as u64)
        .sum();
    state.money = state.money.saturating_add(total);
    info!("sold all fish for ${}", total);
    total
}
