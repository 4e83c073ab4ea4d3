//! Input state for the world and the fishing minigame.
//!
//! Terminals report key presses (and auto-repeat), but most of them never
//! report key releases. [`HoldTracker`] turns that stream into a "held"
//! signal: a key counts as held until it is released, or, when releases are
//! not reported, until the repeat stream goes quiet for a grace window.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Per-frame input snapshot consumed by the game tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// The action key is being held (stabilizes the fishing cursor).
    pub action_held: bool,
}

/// How long a key stays held after its last press or repeat, in ms.
/// Covers the initial auto-repeat delay of common terminals.
pub const HOLD_GRACE_MS: u64 = 550;

/// Tracks whether a single key is currently held.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldTracker {
    last_seen_ms: Option<u64>,
    released: bool,
    /// Set once the terminal has sent a release event; from then on the grace
    /// window no longer applies.
    reports_release: bool,
}

impl HoldTracker {
    pub fn press(&mut self, now_ms: u64) {
        self.last_seen_ms = Some(now_ms);
        self.released = false;
    }

    pub fn release(&mut self) {
        self.released = true;
        self.reports_release = true;
    }

    pub fn is_held(&self, now_ms: u64) -> bool {
        match self.last_seen_ms {
            None => false,
            Some(_) if self.released => false,
            Some(_) if self.reports_release => true,
            Some(seen) => now_ms.saturating_sub(seen) <= HOLD_GRACE_MS,
        }
    }
}

/// Directional and action keys the world loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Action,
}

impl GameKey {
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Self::Down),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Self::Left),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Self::Right),
            KeyCode::Char(' ') => Some(Self::Action),
            _ => None,
        }
    }
}

/// Hold trackers for every [`GameKey`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    up: HoldTracker,
    down: HoldTracker,
    left: HoldTracker,
    right: HoldTracker,
    action: HoldTracker,
}

impl KeyboardState {
    fn tracker_mut(&mut self, key: GameKey) -> &mut HoldTracker {
        match key {
            GameKey::Up => &mut self.up,
            GameKey::Down => &mut self.down,
            GameKey::Left => &mut self.left,
            GameKey::Right => &mut self.right,
            GameKey::Action => &mut self.action,
        }
    }

    /// Feeds one key event. Returns the game key and whether this was a fresh
    /// press (not a repeat or release), so the caller can fire one-shot actions.
    pub fn handle(&mut self, event: &KeyEvent, now_ms: u64) -> Option<(GameKey, bool)> {
        let key = GameKey::from_code(event.code)?;
        let tracker = self.tracker_mut(key);
        match event.kind {
            KeyEventKind::Press => {
                let fresh = !tracker.is_held(now_ms);
                tracker.press(now_ms);
                Some((key, fresh))
            }
            KeyEventKind::Repeat => {
                tracker.press(now_ms);
                Some((key, false))
            }
            KeyEventKind::Release => {
                tracker.release();
                Some((key, false))
            }
        }
    }

    pub fn snapshot(&self, now_ms: u64) -> InputState {
        InputState {
            up: self.up.is_held(now_ms),
            down: self.down.is_held(now_ms),
            left: self.left.is_held(now_ms),
            right: self.right.is_held(now_ms),
            action_held: self.action.is_held(now_ms),
        }
    }

    /// Forgets every held key (e.g. when a modal opens).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
