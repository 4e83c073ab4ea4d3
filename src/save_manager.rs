//! JSON save file: what persists between sessions and where it lives.

use crate::core::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME, SAVE_PATH_ENV, SAVE_VERSION};
use crate::core::game_state::GameState;
use crate::equipment::{BaitStock, Equipment, RodLevel};
use crate::fishing::FishInventory;
use crate::world::{collides_with_lake, Player, MAP};
use chrono::Utc;
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk save format. Missing fields fall back to new-game values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub version: u32,
    pub money: u64,
    pub bait_worm: u32,
    pub bait_shrimp: u32,
    pub bait_minnow: u32,
    /// Signed so an out-of-range value still parses and can be clamped.
    pub rod_level: i64,
    pub fish_inventory: FishInventory,
    pub trophies: u32,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self::from_state(&GameState::default())
    }
}

impl SaveData {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            money: state.money,
            bait_worm: state.equipment.bait.worm,
            bait_shrimp: state.equipment.bait.shrimp,
            bait_minnow: state.equipment.bait.minnow,
            rod_level: state.equipment.rod.get() as i64,
            fish_inventory: state.fish.clone(),
            trophies: state.trophies,
            x: state.player.x,
            y: state.player.y,
            saved_at: None,
        }
    }

    /// Builds a playable state, repairing anything out of range.
    pub fn into_state(self, rng: &mut impl Rng) -> GameState {
        let rod = RodLevel::clamped(self.rod_level);
        if rod.get() as i64 != self.rod_level {
            warn!(
                "save has rod level {}, clamped to {}",
                self.rod_level,
                rod.get()
            );
        }

        GameState {
            player: restore_position(self.x, self.y),
            equipment: Equipment {
                rod,
                bait: BaitStock {
                    worm: self.bait_worm,
                    shrimp: self.bait_shrimp,
                    minnow: self.bait_minnow,
                },
            },
            money: self.money,
            fish: self.fish_inventory,
            trophies: self.trophies,
            ..GameState::new(rng)
        }
    }
}

/// Saved positions off the map or in the water go back to spawn.
fn restore_position(x: f64, y: f64) -> Player {
    let on_map = x.is_finite()
        && y.is_finite()
        && (MAP.x..=MAP.right()).contains(&x)
        && (MAP.y..=MAP.bottom()).contains(&y);
    if on_map && !collides_with_lake(x, y) {
        Player { x, y }
    } else {
        Player::spawn_point()
    }
}

/// `LAKESIDE_SAVE` if set, otherwise `~/.lakeside/save.json`.
pub fn default_save_path() -> Result<PathBuf, SaveError> {
    if let Some(path) = std::env::var_os(SAVE_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home_dir = dirs::home_dir().ok_or(SaveError::NoHomeDir)?;
    Ok(home_dir.join(SAVE_DIR_NAME).join(SAVE_FILE_NAME))
}

/// Reads and writes the save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new() -> Result<Self, SaveError> {
        Ok(Self::with_path(default_save_path()?))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Reads the save. `Ok(None)` means there is no save yet.
    pub fn load(&self) -> Result<Option<SaveData>, SaveError> {
        let json = match fs::read_to_string(&self.save_path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Reads the save, falling back to a new game on any problem.
    pub fn load_or_default(&self) -> SaveData {
        match self.load() {
            Ok(Some(data)) => {
                info!("loaded save from {}", self.save_path.display());
                data
            }
            Ok(None) => {
                info!("no save at {}, starting fresh", self.save_path.display());
                SaveData::default()
            }
            Err(e) => {
                warn!(
                    "ignoring unreadable save {}: {}",
                    self.save_path.display(),
                    e
                );
                SaveData::default()
            }
        }
    }

    /// Writes the save atomically: a temp file next to the target, then rename.
    pub fn save(&self, state: &GameState) -> Result<(), SaveError> {
        let data = SaveData {
            saved_at: Some(Utc::now().to_rfc3339()),
            ..SaveData::from_state(state)
        };
        let json = serde_json::to_string_pretty(&data)?;

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.save_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.save_path)?;

        debug!("saved to {}", self.save_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn manager_for_test() -> SaveManager {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "lakeside-test-{}-{}",
            std::process::id(),
            test_id
        ));
        let _ = fs::remove_dir_all(&dir);
        SaveManager::with_path(dir.join("save.json"))
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(9)
    }

    #[test]
    fn test_missing_file_gives_new_game() {
        let manager = manager_for_test();
        assert!(manager.load().unwrap().is_none());
        let state = manager.load_or_default().into_state(&mut rng());
        assert_eq!(state.money, 500);
        assert_eq!(state.equipment.rod, RodLevel::MIN);
        assert_eq!(state.equipment.bait.total(), 0);
    }

    #[test]
    fn test_save_then_load_restores_progress() {
        let manager = manager_for_test();
        let mut state = GameState::default();
        state.money = 1234;
        state.equipment.bait.shrimp = 4;
        state.equipment.rod = RodLevel::new(3).unwrap();
        state.fish.add("tawes", 2);
        state.trophies = 1;
        state.player = Player {
            x: 300.0,
            y: 250.0,
        };

        manager.save(&state).unwrap();
        let data = manager.load().unwrap().unwrap();
        assert!(data.saved_at.is_some());
        assert_eq!(data.version, SAVE_VERSION);

        let restored = data.into_state(&mut rng());
        assert_eq!(restored.money, 1234);
        assert_eq!(restored.equipment, state.equipment);
        assert_eq!(restored.fish.count("tawes"), 2);
        assert_eq!(restored.trophies, 1);
        assert_eq!(restored.player, state.player);
        assert!(!manager.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let manager = manager_for_test();
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();

        assert!(matches!(manager.load(), Err(SaveError::Json(_))));
        assert_eq!(manager.load_or_default(), SaveData::default());
    }

    #[test]
    fn test_partial_and_out_of_range_fields_are_repaired() {
        let data: SaveData =
            serde_json::from_str(r#"{"money": 90, "rod_level": 9, "x": 1000, "y": 800}"#).unwrap();
        assert_eq!(data.bait_worm, 0);

        let state = data.into_state(&mut rng());
        assert_eq!(state.money, 90);
        assert_eq!(state.equipment.rod, RodLevel::MAX);
        // (1000, 800) is mid-lake
        assert_eq!(state.player, Player::spawn_point());

        let low: SaveData = serde_json::from_str(r#"{"rod_level": -3}"#).unwrap();
        assert_eq!(low.into_state(&mut rng()).equipment.rod, RodLevel::MIN);
    }

    #[test]
    fn test_huge_stock_counts_load_and_total() {
        let data: SaveData = serde_json::from_str(
            r#"{"bait_worm": 4000000000, "bait_shrimp": 4000000000,
                "fish_inventory": {"mujair": 4000000000, "parai": 4000000000}}"#,
        )
        .unwrap();

        let state = data.into_state(&mut rng());
        assert_eq!(state.fish.total(), 8_000_000_000);
        assert_eq!(state.equipment.bait.total(), 8_000_000_000);
    }

    #[test]
    fn test_field_names_on_disk() {
        let json = serde_json::to_value(SaveData::default()).unwrap();
        for key in [
            "version",
            "money",
            "bait_worm",
            "bait_shrimp",
            "bait_minnow",
            "rod_level",
            "fish_inventory",
            "trophies",
            "x",
            "y",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["rod_level"], 1);
    }
}
