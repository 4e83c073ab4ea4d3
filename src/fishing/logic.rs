//! Fishing minigame tick processing and session lifecycle.
//!
//! A session is a skill check on a 0-100 bar. The cursor drifts randomly each
//! tick; holding the action damps the drift (more so with a better rod).
//! Time spent inside the target zone builds progress, time outside bleeds it
//! and builds tension. Progress reaching the rod-dependent requirement lands
//! the fish, tension reaching 100 snaps the line.
//!
//! ```text
//!   0            42 ======== 58            100
//!   |-------------[    zone   ]-------------|
//!                      ^ cursor
//!   progress [████████░░░░░░]   tension [██░░░░░░░░░░]
//! ```

use super::catch::{resolve_catch, CatchLedger};
use super::rng::FishingRng;
use super::types::{
    FishingMachine, FishingOutcome, FishingPhase, FishingSession, FishingView, Resolution,
};
use crate::core::constants::{
    HAPTIC_TENSION_THRESHOLD, HOLD_JITTER_FACTOR, JITTER_BASE, PROGRESS_DECAY_HOLDING,
    PROGRESS_DECAY_RELEASED, RESOLVE_LINGER_MS, TENSION_HOLD_RATE, TENSION_MAX,
    TENSION_RECOVERY_RATE, TENSION_RELEASE_RATE,
};
use crate::equipment::{BaitKind, Equipment};
use log::info;
use thiserror::Error;

/// Why a session could not start. The message is shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartRejection {
    #[error("Too far from the water!")]
    TooFarFromWater,
    #[error("Out of bait! Buy some at the shop.")]
    OutOfBait,
}

/// Something the fishing core wants the rest of the game to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum FishingEvent {
    Started {
        bait: BaitKind,
        required_progress: f64,
    },
    /// Published every active tick, changed or not.
    Progress {
        cursor: f64,
        progress_pct: f64,
        tension: f64,
    },
    /// Tension is at or above the haptic threshold this tick.
    HapticPulse { tension: f64 },
    Resolved(FishingOutcome),
    /// The linger window ended; the bars should reset and state be saved.
    Cleared,
}

/// Output of one pure session step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTick {
    pub events: Vec<FishingEvent>,
    pub resolution: Option<Resolution>,
}

/// Advances one session by `dt_ms`.
///
/// Break is checked before success, so a tick that crosses both thresholds
/// always ends in a line break.
pub fn tick_session(
    session: &mut FishingSession,
    holding: bool,
    dt_ms: f64,
    rng: &mut impl FishingRng,
) -> SessionTick {
    let dt = dt_ms.max(0.0);
    let rod = session.rod.as_f64();
    session.holding = holding;
    session.elapsed_ms += dt;

    let damping = if holding { HOLD_JITTER_FACTOR / rod } else { 1.0 };
    let drift = (rng.uniform() - 0.5) * JITTER_BASE * damping;
    session.cursor = (session.cursor + drift).clamp(0.0, 100.0);

    let in_zone = session.in_zone();

    if in_zone {
        session.progress += dt;
    } else {
        let decay = if holding {
            PROGRESS_DECAY_HOLDING
        } else {
            PROGRESS_DECAY_RELEASED
        };
        session.progress = (session.progress - dt * decay).max(0.0);
    }

    if in_zone {
        session.tension = (session.tension - dt * TENSION_RECOVERY_RATE).max(0.0);
    } else {
        // Stabilizing out of zone costs more tension as the rod gets stronger.
        let rate = if holding {
            TENSION_HOLD_RATE * rod
        } else {
            TENSION_RELEASE_RATE * (1.0 / rod + 0.5)
        };
        session.tension += dt * rate;
    }
    session.tension = session.tension.clamp(0.0, TENSION_MAX);

    let mut events = vec![FishingEvent::Progress {
        cursor: session.cursor,
        progress_pct: session.progress_pct(),
        tension: session.tension,
    }];
    if session.tension >= HAPTIC_TENSION_THRESHOLD {
        events.push(FishingEvent::HapticPulse {
            tension: session.tension,
        });
    }

    let resolution = if session.tension >= TENSION_MAX {
        Some(Resolution::LineBreak)
    } else if session.progress >= session.required_progress {
        Some(Resolution::Success)
    } else {
        None
    };

    SessionTick { events, resolution }
}

impl FishingMachine {
    /// Tries to start a session.
    ///
    /// Returns `Ok(None)` when a session is already running (including the
    /// post-resolution linger); that case is silent.
    pub fn start(
        &mut self,
        near_water: bool,
        equipment: &Equipment,
    ) -> Result<Option<FishingEvent>, StartRejection> {
        if self.is_fishing() {
            return Ok(None);
        }
        if !near_water {
            return Err(StartRejection::TooFarFromWater);
        }
        let bait = equipment
            .bait
            .select()
            .ok_or(StartRejection::OutOfBait)?;

        let session = FishingSession::new(bait, equipment.rod);
        let required_progress = session.required_progress;
        info!(
            "fishing started: bait={}, rod={}, required={:.1}",
            bait.name(),
            equipment.rod.get(),
            required_progress
        );
        *self = FishingMachine::Active(session);

        Ok(Some(FishingEvent::Started {
            bait,
            required_progress,
        }))
    }

    /// Advances the machine by one frame. Does nothing while idle.
    pub fn update(
        &mut self,
        dt_ms: f64,
        holding: bool,
        ledger: &mut CatchLedger<'_>,
        rng: &mut impl FishingRng,
    ) -> Vec<FishingEvent> {
        match self {
            FishingMachine::Idle => Vec::new(),
            FishingMachine::Active(session) => {
                let SessionTick {
                    mut events,
                    resolution,
                } = tick_session(session, holding, dt_ms, rng);

                if let Some(resolution) = resolution {
                    let (bait, rod) = (session.bait, session.rod);
                    let outcome = resolve_catch(resolution, bait, rod, ledger, rng);
                    events.push(self.enter_resolving(outcome));
                }
                events
            }
            FishingMachine::Resolving { remaining_ms, .. } => {
                *remaining_ms -= dt_ms.max(0.0);
                if *remaining_ms <= 0.0 {
                    *self = FishingMachine::Idle;
                    vec![FishingEvent::Cleared]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Player-initiated abort. The fish escapes and no bait is used.
    pub fn cancel(&mut self) -> Option<FishingEvent> {
        let bait = match self {
            FishingMachine::Active(session) => session.bait,
            _ => return None,
        };
        Some(self.enter_resolving(FishingOutcome::Escaped { bait }))
    }

    fn enter_resolving(&mut self, outcome: FishingOutcome) -> FishingEvent {
        info!("fishing resolved: {:?}", outcome);
        *self = FishingMachine::Resolving {
            outcome: outcome.clone(),
            remaining_ms: RESOLVE_LINGER_MS,
        };
        FishingEvent::Resolved(outcome)
    }

    /// True from start until the linger after resolution ends.
    pub fn is_fishing(&self) -> bool {
        !matches!(self, FishingMachine::Idle)
    }

    pub fn session(&self) -> Option<&FishingSession> {
        match self {
            FishingMachine::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut FishingSession> {
        match self {
            FishingMachine::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&FishingOutcome> {
        match self {
            FishingMachine::Resolving { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn view(&self) -> FishingView {
        match self {
            FishingMachine::Idle => FishingView::EMPTY,
            FishingMachine::Active(s) => FishingView {
                phase: FishingPhase::Active,
                cursor: s.cursor,
                progress_pct: s.progress_pct(),
                tension: s.tension,
                holding: s.holding,
                in_zone: s.in_zone(),
                bait: Some(s.bait),
            },
            FishingMachine::Resolving { outcome, .. } => {
                let bait = match outcome {
                    FishingOutcome::Caught { bait, .. }
                    | FishingOutcome::Escaped { bait }
                    | FishingOutcome::LineBroke { bait } => *bait,
                };
                FishingView {
                    phase: FishingPhase::Resolving,
                    bait: Some(bait),
                    ..FishingView::EMPTY
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{BaitStock, RodLevel};
    use crate::fishing::catch::FishInventory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Returns 0.5 forever, so cursor jitter is exactly zero.
    struct Still;

    impl FishingRng for Still {
        fn uniform(&mut self) -> f64 {
            0.5
        }
    }

    fn equipment(worm: u32, shrimp: u32, minnow: u32, rod: u8) -> Equipment {
        Equipment {
            rod: RodLevel::new(rod).unwrap(),
            bait: BaitStock {
                worm,
                shrimp,
                minnow,
            },
        }
    }

    #[test]
    fn test_start_rejects_far_from_water() {
        let mut machine = FishingMachine::Idle;
        let result = machine.start(false, &equipment(5, 0, 0, 1));
        assert_eq!(result, Err(StartRejection::TooFarFromWater));
        assert_eq!(machine, FishingMachine::Idle);
    }

    #[test]
    fn test_start_rejects_without_bait() {
        let mut machine = FishingMachine::Idle;
        let result = machine.start(true, &equipment(0, 0, 0, 1));
        assert_eq!(result, Err(StartRejection::OutOfBait));
        assert!(!machine.is_fishing());
    }

    #[test]
    fn test_start_is_silent_noop_while_fishing() {
        let mut machine = FishingMachine::Idle;
        machine.start(true, &equipment(1, 0, 0, 1)).unwrap();
        let before = machine.clone();

        // Even without bait or water, an active session swallows the request
        assert_eq!(machine.start(false, &equipment(0, 0, 0, 1)), Ok(None));
        assert_eq!(machine, before);
    }

    #[test]
    fn test_start_picks_bait_by_priority() {
        let mut machine = FishingMachine::Idle;
        machine.start(true, &equipment(0, 4, 2, 1)).unwrap();
        assert_eq!(machine.session().unwrap().bait, BaitKind::Shrimp);
    }

    #[test]
    fn test_zero_jitter_holds_cursor() {
        let mut session = FishingSession::new(BaitKind::Worm, RodLevel::MIN);
        let tick = tick_session(&mut session, true, 16.0, &mut Still);
        assert_eq!(session.cursor, 50.0);
        assert_eq!(session.progress, 16.0);
        assert!(tick.resolution.is_none());
        assert_eq!(
            tick.events,
            vec![FishingEvent::Progress {
                cursor: 50.0,
                progress_pct: session.progress_pct(),
                tension: 0.0,
            }]
        );
    }

    #[test]
    fn test_holding_damps_jitter_by_rod_level() {
        struct Max;
        impl FishingRng for Max {
            fn uniform(&mut self) -> f64 {
                1.0
            }
        }

        let mut free = FishingSession::new(BaitKind::Worm, RodLevel::MIN);
        tick_session(&mut free, false, 16.0, &mut Max);
        assert!((free.cursor - 51.1).abs() < 1e-9);

        let mut held = FishingSession::new(BaitKind::Worm, RodLevel::MAX);
        tick_session(&mut held, true, 16.0, &mut Max);
        // 0.5 * 2.2 * 0.35 / 4
        assert!((held.cursor - (50.0 + 0.09625)).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_zone_decay_and_tension_rates() {
        let mut session = FishingSession::new(BaitKind::Worm, RodLevel::new(2).unwrap());
        session.cursor = 10.0;
        session.progress = 100.0;

        tick_session(&mut session, true, 10.0, &mut Still);
        // holding: progress -0.5/ms, tension +0.06*rod/ms
        assert!((session.progress - 95.0).abs() < 1e-9);
        assert!((session.tension - 1.2).abs() < 1e-9);

        tick_session(&mut session, false, 10.0, &mut Still);
        // released: progress -1.2/ms, tension +0.12*(1/2+0.5)/ms
        assert!((session.progress - 83.0).abs() < 1e-9);
        assert!((session.tension - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_in_zone_recovers_tension() {
        let mut session = FishingSession::new(BaitKind::Worm, RodLevel::MIN);
        session.tension = 10.0;
        tick_session(&mut session, false, 20.0, &mut Still);
        assert!((session.tension - 5.0).abs() < 1e-9);
        tick_session(&mut session, false, 100.0, &mut Still);
        assert_eq!(session.tension, 0.0);
    }

    #[test]
    fn test_progress_never_negative() {
        let mut session = FishingSession::new(BaitKind::Worm, RodLevel::MIN);
        session.cursor = 0.0;
        tick_session(&mut session, false, 500.0, &mut Still);
        assert_eq!(session.progress, 0.0);
    }

    #[test]
    fn test_haptic_pulse_above_threshold() {
        let mut session = FishingSession::new(BaitKind::Worm, RodLevel::MIN);
        session.cursor = 90.0;
        session.tension = 79.0;
        let tick = tick_session(&mut session, false, 10.0, &mut Still);
        assert!(tick
            .events
            .iter()
            .any(|e| matches!(e, FishingEvent::HapticPulse { .. })));
    }

    #[test]
    fn test_break_wins_over_success_on_same_tick() {
        let mut session = FishingSession::new(BaitKind::Minnow, RodLevel::MIN);
        session.cursor = 10.0;
        session.tension = 99.5;
        session.progress = session.required_progress + 1000.0;

        let tick = tick_session(&mut session, false, 10.0, &mut Still);
        assert_eq!(session.tension, 100.0);
        assert!(session.progress >= session.required_progress);
        assert_eq!(tick.resolution, Some(Resolution::LineBreak));
    }

    #[test]
    fn test_update_resolves_then_lingers_then_clears() {
        let mut machine = FishingMachine::Idle;
        let mut equip = equipment(1, 0, 0, 1);
        machine.start(true, &equip).unwrap();
        machine.session_mut().unwrap().progress = 1399.0;

        let mut fish = FishInventory::default();
        let mut money = 0;
        let mut ledger = CatchLedger {
            bait: &mut equip.bait,
            fish: &mut fish,
            money: &mut money,
        };

        let events = machine.update(16.0, true, &mut ledger, &mut Still);
        assert!(matches!(
            events.last(),
            Some(FishingEvent::Resolved(FishingOutcome::Caught { .. }))
        ));
        assert!(machine.is_fishing());
        assert_eq!(machine.view().phase, FishingPhase::Resolving);

        // Still lingering: no second resolution
        let events = machine.update(200.0, true, &mut ledger, &mut Still);
        assert!(events.is_empty());

        let events = machine.update(200.0, true, &mut ledger, &mut Still);
        assert_eq!(events, vec![FishingEvent::Cleared]);
        assert!(!machine.is_fishing());
        assert_eq!(machine.view(), FishingView::EMPTY);

        assert_eq!(equip.bait.worm, 0);
        assert_eq!(fish.total(), 1);
    }

    #[test]
    fn test_cancel_escapes_without_consuming_bait() {
        let mut machine = FishingMachine::Idle;
        let equip = equipment(0, 0, 1, 1);
        machine.start(true, &equip).unwrap();

        let event = machine.cancel();
        assert_eq!(
            event,
            Some(FishingEvent::Resolved(FishingOutcome::Escaped {
                bait: BaitKind::Minnow
            }))
        );
        assert!(machine.cancel().is_none());
        assert_eq!(equip.bait.minnow, 1);
    }

    #[test]
    fn test_update_idle_is_noop() {
        let mut machine = FishingMachine::Idle;
        let mut bait = BaitStock::default();
        let mut fish = FishInventory::default();
        let mut money = 0;
        let mut ledger = CatchLedger {
            bait: &mut bait,
            fish: &mut fish,
            money: &mut money,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(machine.update(16.0, true, &mut ledger, &mut rng).is_empty());
    }
}
