//! Game flow integration tests
//!
//! Drives `GameState` through the same entry points the binary uses:
//! walking, the shop, casting, the tick loop and persistence.

use lakeside::core::constants::REALTIME_FRAME_MS;
use lakeside::core::{
    game_tick, handle_action, shop_buy, shop_sell_all, shop_upgrade_rod, try_open_shop,
    GameState, TickEvent,
};
use lakeside::fishing::{FishingPhase, FishingRng};
use lakeside::input::InputState;
use lakeside::save_manager::SaveManager;
use lakeside::shop::ShopItem;
use lakeside::world::{is_near_lake, is_near_shop, Player, SHOP_BOARD};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME: f64 = REALTIME_FRAME_MS as f64;

struct Still;

impl FishingRng for Still {
    fn uniform(&mut self) -> f64 {
        0.5
    }
}

fn walk(state: &mut GameState, input: InputState, frames: usize) {
    for _ in 0..frames {
        game_tick(state, &input, FRAME, &mut Still);
    }
}

fn up() -> InputState {
    InputState {
        up: true,
        ..InputState::default()
    }
}

fn temp_save_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("lakeside-flow-{}-{}", std::process::id(), name))
        .join("save.json")
}

#[test]
fn test_first_catch_from_a_new_game() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut state = GameState::new(&mut rng);

    // Spawn is a few steps south of the shore
    assert!(handle_action(&mut state).is_empty());
    assert_eq!(state.notifications.text(), "Too far from the water!");

    walk(&mut state, up(), 20);
    assert!(is_near_lake(state.player.x, state.player.y));

    // No bait yet
    assert!(handle_action(&mut state).is_empty());
    assert!(!state.fishing.is_fishing());

    state.equipment.bait.worm = 1;
    let events = handle_action(&mut state);
    assert!(matches!(events[0], TickEvent::FishingStarted { .. }));

    // Hold until landed, then let the result linger out
    let holding = InputState {
        action_held: true,
        ..InputState::default()
    };
    let mut all = Vec::new();
    for _ in 0..200 {
        all.extend(game_tick(&mut state, &holding, FRAME, &mut Still));
        if all.contains(&TickEvent::FishingCleared) {
            break;
        }
    }

    assert!(all.contains(&TickEvent::FishCaught {
        name: "Betok",
        payout: 45
    }));
    assert!(all.contains(&TickEvent::SaveRequested));
    assert_eq!(state.fishing.view().phase, FishingPhase::Idle);
    assert_eq!(state.money, 545);
    assert_eq!(state.equipment.bait.worm, 0);
    assert_eq!(state.fish.count("betok"), 1);
}

#[test]
fn test_movement_is_frozen_for_the_linger_after_a_catch() {
    let mut state = GameState {
        player: Player {
            x: 1000.0,
            y: 1150.0,
        },
        ..GameState::default()
    };
    state.equipment.bait.shrimp = 1;
    handle_action(&mut state);
    let before = state.player;

    let hold_up = InputState {
        up: true,
        action_held: true,
        ..InputState::default()
    };
    let mut frames = 0;
    while !matches!(state.fishing.view().phase, FishingPhase::Resolving) {
        game_tick(&mut state, &hold_up, FRAME, &mut Still);
        frames += 1;
        assert!(frames < 500);
    }
    // Still resolving: still frozen
    game_tick(&mut state, &hold_up, FRAME, &mut Still);
    assert_eq!(state.player, before);

    walk(&mut state, hold_up, 30);
    assert!(!state.fishing.is_fishing());
    assert!(state.player.y < before.y);
}

#[test]
fn test_shop_round_trip() {
    let (cx, cy) = SHOP_BOARD.center();
    let mut state = GameState {
        player: Player { x: cx, y: cy + 90.0 },
        ..GameState::default()
    };
    assert!(is_near_shop(state.player.x, state.player.y));

    assert_eq!(try_open_shop(&mut state), vec![TickEvent::ShopOpened]);
    // Browsing refuses a cast but only a session freezes the player
    assert!(handle_action(&mut state).is_empty());
    assert!(!state.fishing.is_fishing());
    walk(&mut state, up(), 1);
    assert!(state.player.y < cy + 90.0);
    assert!(is_near_shop(state.player.x, state.player.y));

    assert_eq!(
        shop_buy(&mut state, ShopItem::ShrimpPack),
        vec![TickEvent::ShopClosed, TickEvent::SaveRequested]
    );
    assert_eq!(state.equipment.bait.shrimp, 5);
    assert_eq!(state.money, 425);

    // Space next to the board reopens the shop rather than casting
    assert_eq!(handle_action(&mut state), vec![TickEvent::ShopOpened]);
    assert_eq!(shop_upgrade_rod(&mut state), vec![TickEvent::SaveRequested]);
    assert_eq!(state.equipment.rod.get(), 2);
    assert_eq!(state.money, 225);

    // 400 for the next level is out of reach
    assert!(shop_upgrade_rod(&mut state).is_empty());
    assert_eq!(state.equipment.rod.get(), 2);

    state.fish.add("monster_toman", 1);
    shop_sell_all(&mut state);
    assert_eq!(state.money, 725);
    assert!(state.shop_open);
}

#[test]
fn test_progress_survives_save_and_reload() {
    let path = temp_save_path("reload");
    let _ = std::fs::remove_file(&path);
    let manager = SaveManager::with_path(&path);

    let mut state = GameState::default();
    state.equipment.bait.worm = 7;
    state.money = 880;
    state.fish.add("gar", 1);
    state.trophies = 2;
    walk(&mut state, up(), 10);
    manager.save(&state).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["bait_worm"], 7);
    assert_eq!(raw["fish_inventory"]["gar"], 1);
    assert!(raw["saved_at"].is_string());

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let restored = manager.load_or_default().into_state(&mut rng);
    assert_eq!(restored.money, 880);
    assert_eq!(restored.equipment, state.equipment);
    assert_eq!(restored.fish.count("gar"), 1);
    assert_eq!(restored.trophies, 2);
    assert_eq!(restored.player, state.player);
    assert!(!restored.fishing.is_fishing());
    assert_eq!(restored.world_fish.len(), 40);
}
