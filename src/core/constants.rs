// Tick and timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_DELTA_MS: f64 = 100.0;
pub const AUTOSAVE_INTERVAL_MS: u64 = 1500;
pub const RESOLVE_LINGER_MS: f64 = 300.0;

// World geometry
pub const MAP_W: f64 = 2000.0;
pub const MAP_H: f64 = 1600.0;
pub const LAKE_X: f64 = MAP_W / 2.0 - 400.0;
pub const LAKE_Y: f64 = MAP_H / 2.0 - 300.0;
pub const LAKE_W: f64 = 800.0;
pub const LAKE_H: f64 = 600.0;
pub const SHOP_BOARD_SIZE: f64 = 84.0;
pub const LAKE_PROXIMITY_MARGIN: f64 = 100.0;
pub const SHOP_PROXIMITY: f64 = 120.0;

// Player
pub const PLAYER_SIZE: f64 = 64.0;
pub const PLAYER_SPEED: f64 = 2.8; // units per 16ms
pub const PLAYER_COLLISION_FACTOR: f64 = 0.38;
pub const DIAGONAL_FACTOR: f64 = 0.7071;

// World decoration
pub const WORLD_FISH_COUNT: usize = 40;

// Time of day
pub const REAL_SECONDS_PER_INGAME_DAY: f64 = 5.0 * 60.0;
pub const EVENING_START: f64 = 0.6;
pub const EVENING_END: f64 = 0.95;

// Fishing minigame
pub const MAX_ROD_LEVEL: u8 = 4;
pub const BASE_REQUIRED_PROGRESS: f64 = 1400.0;
pub const ROD_PROGRESS_FACTOR: f64 = 0.12;
pub const CURSOR_START: f64 = 50.0;
pub const TARGET_ZONE_LOW: f64 = 42.0;
pub const TARGET_ZONE_HIGH: f64 = 58.0;
pub const JITTER_BASE: f64 = 2.2;
pub const HOLD_JITTER_FACTOR: f64 = 0.35;
pub const PROGRESS_DECAY_HOLDING: f64 = 0.5;
pub const PROGRESS_DECAY_RELEASED: f64 = 1.2;
pub const TENSION_HOLD_RATE: f64 = 0.06;
pub const TENSION_RELEASE_RATE: f64 = 0.12;
pub const TENSION_RECOVERY_RATE: f64 = 0.25;
pub const TENSION_MAX: f64 = 100.0;
pub const HAPTIC_TENSION_THRESHOLD: f64 = 80.0;

// Catch resolution
pub const ULTRA_RARE_WEIGHT: f64 = 6.0;
pub const RARE_WEIGHT: f64 = 15.0;
pub const ULTRA_RARE_ROD_BONUS: f64 = 0.14;
pub const RARE_ROD_BONUS: f64 = 0.06;
pub const PAYOUT_BONUS_MAX: f64 = 0.28;

// Economy
pub const STARTING_MONEY: u64 = 500;
pub const ROD_UPGRADE_BASE_COST: u64 = 200;

// Notification timeouts (ms)
pub const MSG_DEFAULT_MS: f64 = 3000.0;
pub const MSG_FISHING_START_MS: f64 = 2200.0;
pub const MSG_CATCH_MS: f64 = 3000.0;
pub const MSG_FAIL_MS: f64 = 1800.0;
pub const MSG_SHORT_MS: f64 = 2000.0;
pub const MSG_WELCOME_MS: f64 = 2500.0;

// Persistence
pub const SAVE_VERSION: u32 = 1;
pub const SAVE_DIR_NAME: &str = ".lakeside";
pub const SAVE_FILE_NAME: &str = "save.json";
pub const SAVE_PATH_ENV: &str = "LAKESIDE_SAVE";
