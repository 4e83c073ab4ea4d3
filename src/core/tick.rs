//! The per-frame game tick.
//!
//! `game_tick()` advances one frame of real time and returns the
//! [`TickEvent`]s that happened so the presentation layer (main.rs) can react
//! (flash the tension bar, persist the save) without the game logic
//! depending on any UI types.

use crate::core::constants::{
    MAX_FRAME_DELTA_MS, MSG_CATCH_MS, MSG_FAIL_MS, MSG_FISHING_START_MS,
};
use crate::core::game_state::GameState;
use crate::equipment::BaitKind;
use crate::fishing::{FishingEvent, FishingOutcome, FishingRng};
use crate::input::InputState;
use crate::world::{drift_world_fish, move_player};

/// A single event produced by a game tick or a player action.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Fishing ─────────────────────────────────────────────────
    FishingStarted {
        bait: BaitKind,
        required_progress: f64,
    },
    /// Bar values for this frame; sent every active tick.
    ///
    /// The terminal UI reads the same values from `FishingMachine::view()`
    /// while drawing. This event is the feed for adapters that do not hold
    /// the state, such as a haptics driver or a recorder.
    FishingProgress {
        cursor: f64,
        progress_pct: f64,
        tension: f64,
    },
    /// Tension is high enough to warn the player.
    HapticPulse { tension: f64 },
    FishCaught {
        name: &'static str,
        payout: u64,
    },
    FishEscaped,
    LineBroke { bait: BaitKind },
    /// The post-resolution linger ended; bars should reset.
    FishingCleared,

    // ── Shop ────────────────────────────────────────────────────
    ShopOpened,
    ShopClosed,

    // ── Persistence ─────────────────────────────────────────────
    /// State changed in a way worth writing to disk now.
    SaveRequested,
}

/// Translates a fishing event into tick events and player notifications.
pub(crate) fn apply_fishing_event(
    state: &mut GameState,
    event: FishingEvent,
    out: &mut Vec<TickEvent>,
) {
    match event {
        FishingEvent::Started {
            bait,
            required_progress,
        } => {
            state.notifications.push(
                format!("Casting with {}... hold SPACE to steady the line", bait.name()),
                MSG_FISHING_START_MS,
            );
            out.push(TickEvent::FishingStarted {
                bait,
                required_progress,
            });
        }
        FishingEvent::Progress {
            cursor,
            progress_pct,
            tension,
        } => out.push(TickEvent::FishingProgress {
            cursor,
            progress_pct,
            tension,
        }),
        FishingEvent::HapticPulse { tension } => out.push(TickEvent::HapticPulse { tension }),
        FishingEvent::Resolved(outcome) => match outcome {
            FishingOutcome::Caught {
                species, payout, ..
            } => {
                state.notifications.push(
                    format!("Caught a {}! +${}", species.name, payout),
                    MSG_CATCH_MS,
                );
                out.push(TickEvent::FishCaught {
                    name: species.name,
                    payout,
                });
            }
            FishingOutcome::Escaped { .. } => {
                state.notifications.push("The fish got away...", MSG_FAIL_MS);
                out.push(TickEvent::FishEscaped);
            }
            FishingOutcome::LineBroke { bait } => {
                state.notifications.push("The line snapped!", MSG_FAIL_MS);
                out.push(TickEvent::LineBroke { bait });
            }
        },
        FishingEvent::Cleared => {
            out.push(TickEvent::FishingCleared);
            out.push(TickEvent::SaveRequested);
        }
    }
}

/// Advances the game by `dt_ms` of real time.
///
/// Order: notifications, movement (skipped while a session exists), fishing machine,
/// decorative fish, clock. `dt_ms` is clamped to `[0, MAX_FRAME_DELTA_MS]`.
pub fn game_tick(
    state: &mut GameState,
    input: &InputState,
    dt_ms: f64,
    rng: &mut impl FishingRng,
) -> Vec<TickEvent> {
    let dt_ms = dt_ms.clamp(0.0, MAX_FRAME_DELTA_MS);
    let mut events = Vec::new();

    // ── 1. Notifications ────────────────────────────────────────
    state.notifications.tick(dt_ms);

    // ── 2. Movement ─────────────────────────────────────────────
    if !state.is_movement_locked() {
        move_player(&mut state.player, input, dt_ms);
    }

    // ── 3. Fishing ──────────────────────────────────────────────
    let fishing_events = {
        let (machine, mut ledger) = state.fishing_and_ledger();
        machine.update(dt_ms, input.action_held, &mut ledger, rng)
    };
    for event in fishing_events {
        apply_fishing_event(state, event, &mut events);
    }

    // ── 4. Decoration ───────────────────────────────────────────
    drift_world_fish(&mut state.world_fish, dt_ms);

    // ── 5. Clock ────────────────────────────────────────────────
    state.elapsed_ms += dt_ms;

    events
}
