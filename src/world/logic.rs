//! Movement, proximity checks, decoration drift and the day clock.

use super::types::{Player, TimeOfDay, WorldFish, LAKE, MAP, SHOP_BOARD};
use crate::core::constants::{
    DIAGONAL_FACTOR, EVENING_END, EVENING_START, LAKE_PROXIMITY_MARGIN, PLAYER_COLLISION_FACTOR,
    PLAYER_SIZE, PLAYER_SPEED, REAL_SECONDS_PER_INGAME_DAY, REALTIME_FRAME_MS, SHOP_PROXIMITY,
    WORLD_FISH_COUNT,
};
use crate::fishing::FISH_CATALOG;
use crate::input::InputState;
use rand::Rng;

/// Whether a point is close enough to the lake to cast.
pub fn is_near_lake(x: f64, y: f64) -> bool {
    LAKE.expanded(LAKE_PROXIMITY_MARGIN).contains_strict(x, y)
}

/// Whether a point is within reach of the shop board (per-axis distance).
pub fn is_near_shop(x: f64, y: f64) -> bool {
    let (cx, cy) = SHOP_BOARD.center();
    (x - cx).abs() < SHOP_PROXIMITY && (y - cy).abs() < SHOP_PROXIMITY
}

/// Whether the player's body at `(x, y)` would overlap the water.
pub fn collides_with_lake(x: f64, y: f64) -> bool {
    let r = PLAYER_SIZE * PLAYER_COLLISION_FACTOR;
    LAKE.expanded(-r).contains_strict(x, y)
}

fn clamp_to_map(x: f64, y: f64) -> (f64, f64) {
    (x.clamp(MAP.x, MAP.right()), y.clamp(MAP.y, MAP.bottom()))
}

/// Moves the player by one frame of directional input.
///
/// A move into the lake is retried along each axis alone so the player slides
/// along the shore. Returns true if the position changed.
pub fn move_player(player: &mut Player, input: &InputState, dt_ms: f64) -> bool {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.up {
        dy -= PLAYER_SPEED;
    }
    if input.down {
        dy += PLAYER_SPEED;
    }
    if input.left {
        dx -= PLAYER_SPEED;
    }
    if input.right {
        dx += PLAYER_SPEED;
    }
    if dx == 0.0 && dy == 0.0 {
        return false;
    }
    if dx != 0.0 && dy != 0.0 {
        dx *= DIAGONAL_FACTOR;
        dy *= DIAGONAL_FACTOR;
    }

    let scale = dt_ms / REALTIME_FRAME_MS as f64;
    let (nx, ny) = clamp_to_map(player.x + dx * scale, player.y + dy * scale);
    let before = *player;

    if !collides_with_lake(nx, ny) {
        player.x = nx;
        player.y = ny;
    } else if !collides_with_lake(nx, player.y) {
        player.x = nx;
    } else if !collides_with_lake(player.x, ny) {
        player.y = ny;
    }

    *player != before
}

/// Scatters decorative fish across the lake.
pub fn spawn_world_fish(rng: &mut impl Rng) -> Vec<WorldFish> {
    (0..WORLD_FISH_COUNT)
        .map(|_| WorldFish {
            x: LAKE.x + rng.gen::<f64>() * LAKE.w,
            y: LAKE.y + rng.gen::<f64>() * LAKE.h,
            species: rng.gen_range(0..FISH_CATALOG.len()),
            dir: if rng.gen_bool(0.5) { -1.0 } else { 1.0 },
            speed: 0.08 + rng.gen::<f64>() * 0.5,
        })
        .collect()
}

/// Swims decorative fish back and forth, turning at the lake edges.
pub fn drift_world_fish(fish: &mut [WorldFish], dt_ms: f64) {
    for f in fish.iter_mut() {
        f.x += f.dir * f.speed * dt_ms * 0.03;
        if f.x < LAKE.x {
            f.dir = 1.0;
        }
        if f.x > LAKE.right() {
            f.dir = -1.0;
        }
    }
}

/// Fraction of the in-game day elapsed, in `[0, 1)`.
pub fn day_fraction(elapsed_ms: f64) -> f64 {
    let seconds = elapsed_ms / 1000.0;
    seconds.rem_euclid(REAL_SECONDS_PER_INGAME_DAY) / REAL_SECONDS_PER_INGAME_DAY
}

pub fn time_of_day(fraction: f64) -> TimeOfDay {
    if (EVENING_START..EVENING_END).contains(&fraction) {
        TimeOfDay::Evening
    } else {
        TimeOfDay::Day
    }
}

/// Blend factor for the evening tint, 0.0 during the day ramping to 1.0.
pub fn evening_blend(fraction: f64) -> f64 {
    if fraction >= EVENING_START {
        ((fraction - EVENING_START) / 0.35).min(1.0)
    } else {
        0.0
    }
}
