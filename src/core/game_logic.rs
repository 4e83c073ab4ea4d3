//! Player-triggered actions: the action key, shop access and transactions.
//!
//! Each action mutates [`GameState`], posts a notification and returns the
//! resulting [`TickEvent`]s, the same contract as `game_tick()`.

use crate::core::constants::{MSG_CATCH_MS, MSG_DEFAULT_MS, MSG_SHORT_MS};
use crate::core::game_state::GameState;
use crate::core::tick::{apply_fishing_event, TickEvent};
use crate::shop::{self, ShopItem};
use crate::world::{is_near_lake, is_near_shop};

/// The primary action key (space).
///
/// Near the shop board it opens the shop; otherwise it tries to cast. Does
/// nothing while a session or the shop is already open.
pub fn handle_action(state: &mut GameState) -> Vec<TickEvent> {
    if state.is_busy() {
        return Vec::new();
    }
    if is_near_shop(state.player.x, state.player.y) {
        return open_shop(state);
    }

    let near_water = is_near_lake(state.player.x, state.player.y);
    let mut events = Vec::new();
    match state.fishing.start(near_water, &state.equipment) {
        Ok(Some(event)) => apply_fishing_event(state, event, &mut events),
        Ok(None) => {}
        Err(rejection) => state
            .notifications
            .push(rejection.to_string(), MSG_DEFAULT_MS),
    }
    events
}

/// The dedicated shop key. Only works within reach of the board.
pub fn try_open_shop(state: &mut GameState) -> Vec<TickEvent> {
    if state.is_busy() {
        return Vec::new();
    }
    if !is_near_shop(state.player.x, state.player.y) {
        state
            .notifications
            .push("Walk up to the shop board to browse", MSG_SHORT_MS);
        return Vec::new();
    }
    open_shop(state)
}

fn open_shop(state: &mut GameState) -> Vec<TickEvent> {
    state.shop_open = true;
    vec![TickEvent::ShopOpened]
}

pub fn close_shop(state: &mut GameState) -> Vec<TickEvent> {
    if !state.shop_open {
        return Vec::new();
    }
    state.shop_open = false;
    vec![TickEvent::ShopClosed]
}

/// Abandons the current cast, if any.
pub fn cancel_fishing(state: &mut GameState) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if let Some(event) = state.fishing.cancel() {
        apply_fishing_event(state, event, &mut events);
    }
    events
}

/// Buys one shop item. A successful purchase closes the shop.
pub fn shop_buy(state: &mut GameState, item: ShopItem) -> Vec<TickEvent> {
    match shop::buy(state, item) {
        Ok(()) => {
            state
                .notifications
                .push(format!("Bought {}", item.label()), MSG_SHORT_MS);
            let mut events = close_shop(state);
            events.push(TickEvent::SaveRequested);
            events
        }
        Err(e) => {
            state.notifications.push(e.to_string(), MSG_DEFAULT_MS);
            Vec::new()
        }
    }
}

pub fn shop_upgrade_rod(state: &mut GameState) -> Vec<TickEvent> {
    match shop::upgrade_rod(state) {
        Ok(level) => {
            state
                .notifications
                .push(format!("Rod upgraded to Lv {}", level.get()), MSG_SHORT_MS);
            vec![TickEvent::SaveRequested]
        }
        Err(e) => {
            state.notifications.push(e.to_string(), MSG_DEFAULT_MS);
            Vec::new()
        }
    }
}

pub fn shop_sell_all(state: &mut GameState) -> Vec<TickEvent> {
    let total = shop::sell_all_fish(state);
    state
        .notifications
        .push(format!("Sold all fish for ${}", total), MSG_CATCH_MS);
    vec![TickEvent::SaveRequested]
}
