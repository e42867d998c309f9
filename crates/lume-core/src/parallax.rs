//! Scroll-linked parallax transforms.
//!
//! Everything here is a pure, linear function of scroll progress, so the
//! effect is deterministic and fully reversible: scrolling back reproduces
//! the exact transform for that position.

use crate::constants::{COLUMN_TRAVEL_PX, TEXT_SCREEN_DIVISOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnSide {
    Left,
    Right,
}

/// Normalized progress of the viewport through the wrapper region: 0 when
/// the wrapper top reaches the viewport top, 1 when the wrapper bottom
/// reaches the viewport bottom. Clamped outside the region.
pub fn scroll_progress(
    scroll_y: f32,
    wrapper_top: f32,
    wrapper_height: f32,
    viewport_height: f32,
) -> f32 {
    let travel = wrapper_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((scroll_y - wrapper_top) / travel).clamp(0.0, 1.0)
}

/// Leftward text translation in pixels: the text ends `screen/1.7` short of
/// having scrolled its full width off screen.
pub fn text_offset_x(progress: f32, text_width: f32, screen_width: f32) -> f32 {
    -(text_width - screen_width / TEXT_SCREEN_DIVISOR) * progress
}

/// Vertical column translation in pixels; the two sides travel the same
/// distance in opposite directions.
pub fn column_offset_y(progress: f32, side: ColumnSide) -> f32 {
    match side {
        ColumnSide::Left => -COLUMN_TRAVEL_PX * progress,
        ColumnSide::Right => COLUMN_TRAVEL_PX * progress,
    }
}
