//! Session runner: drives `FishingMachine` with a scripted angler.

use super::config::{HoldPolicy, SimConfig};
use super::report::{RodReport, SimReport};
use crate::equipment::{BaitStock, Equipment, RodLevel};
use crate::fishing::{
    CatchLedger, FishInventory, FishingEvent, FishingMachine, FishingOutcome, FishingRng,
};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How a single simulated session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SessionEnd {
    Caught { species_idx: usize, payout: u64 },
    LineBroke,
    /// Hit `max_frames` without resolving.
    Stuck,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct SessionResult {
    pub end: SessionEnd,
    pub frames: u32,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let rods = config
        .rods
        .iter()
        .map(|&rod| {
            let mut rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(rod.get() as u64)),
                None => ChaCha8Rng::from_entropy(),
            };
            let results: Vec<SessionResult> = (0..config.num_runs)
                .map(|_| simulate_session(rod, config, &mut rng))
                .collect();
            debug!("rod {}: {} sessions simulated", rod.get(), results.len());
            RodReport::from_results(rod, &results, config.frame_ms)
        })
        .collect();

    SimReport {
        runs_per_rod: config.num_runs,
        seed: config.seed,
        hold_policy: config.hold_policy.label(),
        rods,
    }
}

pub(super) fn simulate_session(
    rod: RodLevel,
    config: &SimConfig,
    rng: &mut impl FishingRng,
) -> SessionResult {
    let equipment = Equipment {
        rod,
        bait: BaitStock {
            worm: 1,
            ..BaitStock::default()
        },
    };
    let mut bait = equipment.bait;
    let mut fish = FishInventory::default();
    let mut money = 0;
    let mut ledger = CatchLedger {
        bait: &mut bait,
        fish: &mut fish,
        money: &mut money,
    };

    let mut machine = FishingMachine::Idle;
    if machine.start(true, &equipment).is_err() {
        return SessionResult {
            end: SessionEnd::Stuck,
            frames: 0,
        };
    }

    for frame in 1..=config.max_frames {
        let holding = match config.hold_policy {
            HoldPolicy::Always => true,
            HoldPolicy::Never => false,
            HoldPolicy::OutOfZone => machine.session().is_some_and(|s| !s.in_zone()),
        };
        for event in machine.update(config.frame_ms, holding, &mut ledger, rng) {
            if let FishingEvent::Resolved(outcome) = event {
                let end = match outcome {
                    FishingOutcome::Caught {
                        species, payout, ..
                    } => SessionEnd::Caught {
                        species_idx: species_index(species.key),
                        payout,
                    },
                    FishingOutcome::LineBroke { .. } | FishingOutcome::Escaped { .. } => {
                        SessionEnd::LineBroke
                    }
                };
                return SessionResult { end, frames: frame };
            }
        }
    }

    SessionResult {
        end: SessionEnd::Stuck,
        frames: config.max_frames,
    }
}

fn species_index(key: &str) -> usize {
    crate::fishing::FISH_CATALOG
        .iter()
        .position(|s| s.key == key)
        .unwrap_or(0)
}
