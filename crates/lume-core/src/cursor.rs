//! Trailing-cursor state shared with the web frontend.
//!
//! Two points: the raw pointer position, overwritten on every pointer-move
//! event, and a trailing point that approaches it by a fixed fraction each
//! frame. The trailing point converges geometrically and never overshoots.

use crate::constants::CURSOR_SMOOTHING_DIVISOR;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    pointer: Vec2,
    outer: Vec2,
    pressed: bool,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the raw pointer position. The inner marker snaps here
    /// immediately; only the outer marker is smoothed.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn outer(&self) -> Vec2 {
        self.outer
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Advance the trailing point one frame: `outer += (pointer - outer) / 8`
    /// per axis. Returns the new position for the caller to draw.
    pub fn step(&mut self) -> Vec2 {
        self.outer += (self.pointer - self.outer) / CURSOR_SMOOTHING_DIVISOR;
        self.outer
    }
}
