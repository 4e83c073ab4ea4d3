//! World geometry and decoration types.

use crate::core::constants::{
    LAKE_H, LAKE_W, LAKE_X, LAKE_Y, MAP_H, MAP_W, SHOP_BOARD_SIZE,
};

/// Axis-aligned rectangle in world units (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict containment; points on the edge are outside.
    pub fn contains_strict(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }

    /// Grows (or with a negative margin, shrinks) on every side.
    pub fn expanded(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.w + 2.0 * margin,
            self.h + 2.0 * margin,
        )
    }
}

pub const MAP: Rect = Rect::new(0.0, 0.0, MAP_W, MAP_H);
pub const LAKE: Rect = Rect::new(LAKE_X, LAKE_Y, LAKE_W, LAKE_H);
pub const SHOP_BOARD: Rect = Rect::new(
    LAKE_X + LAKE_W + 120.0,
    LAKE_Y + 40.0,
    SHOP_BOARD_SIZE,
    SHOP_BOARD_SIZE,
);

/// Player position in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
}

impl Player {
    pub fn spawn_point() -> Self {
        Self {
            x: MAP_W / 2.0,
            y: LAKE_Y + LAKE_H + 140.0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::spawn_point()
    }
}

/// Decorative fish swimming in the lake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldFish {
    pub x: f64,
    pub y: f64,
    /// Index into the species catalog, used for colouring.
    pub species: usize,
    /// -1.0 (left) or 1.0 (right).
    pub dir: f64,
    pub speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Evening,
}

impl TimeOfDay {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Evening => "Evening",
        }
    }
}
