//! Simulation configuration.

use crate::core::constants::REALTIME_FRAME_MS;
use crate::equipment::RodLevel;

/// How the scripted angler uses the action key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldPolicy {
    /// Hold for the whole session.
    Always,
    /// Never touch the key.
    Never,
    /// Hold only while the cursor is outside the zone.
    OutOfZone,
}

impl HoldPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "out-of-zone" => Some(Self::OutOfZone),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::OutOfZone => "out-of-zone",
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Sessions per rod level
    pub num_runs: u32,

    /// Rod levels to simulate, in report order
    pub rods: Vec<RodLevel>,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub hold_policy: HoldPolicy,

    /// Frame length fed to the machine
    pub frame_ms: f64,

    /// Frames before a session is abandoned as stuck
    pub max_frames: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10_000,
            rods: (1..=RodLevel::MAX.get()).filter_map(RodLevel::new).collect(),
            seed: None,
            hold_policy: HoldPolicy::Always,
            frame_ms: REALTIME_FRAME_MS as f64,
            max_frames: 100_000,
        }
    }
}
