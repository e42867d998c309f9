//! Waveform icon path generation and the audio play/pause state machine.

use crate::constants::{WAVE_AMPLITUDE, WAVE_BASELINE_Y, WAVE_FREQUENCY, WAVE_LENGTH, WAVE_POINTS};
use std::f64::consts::PI;
use std::fmt::Write;

/// Flat baseline shown whenever playback is stopped.
pub const FLAT_WAVE_PATH: &str = "M0 15 L120 15";

/// Sample the waveform at elapsed `t_ms` and render it as an SVG path of
/// `WAVE_POINTS + 1` line segments. Pure: the same `t_ms` always yields the
/// same string. Two full sine periods span the wave's width; coordinates are
/// formatted to two decimals.
pub fn wave_path(t_ms: f64) -> String {
    let mut path = String::with_capacity(16 * (WAVE_POINTS + 2));
    path.push_str("M0 15");
    let time_phase = t_ms * 2.0 * PI * WAVE_FREQUENCY;
    for i in 0..=WAVE_POINTS {
        let x = (WAVE_LENGTH as f64 / WAVE_POINTS as f64) * i as f64;
        let phase = (i as f64 / WAVE_POINTS as f64) * 4.0 * PI;
        let y = WAVE_BASELINE_Y as f64 + WAVE_AMPLITUDE as f64 * (phase + time_phase).sin();
        let _ = write!(path, " L{:.2} {:.2}", x, y);
    }
    path
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Two-state playback toggle owning the wave animation clock.
///
/// The clock anchor is cleared on every Paused→Playing transition so the
/// waveform restarts from phase zero; while Paused the wave loop is not
/// scheduled at all and the icon shows [`FLAT_WAVE_PATH`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioToggle {
    state: PlaybackState,
    clock_anchor: Option<f64>,
}

impl AudioToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Flip the state. Entering Playing clears the clock anchor so the next
    /// frame recaptures it.
    pub fn toggle(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Paused => {
                self.clock_anchor = None;
                log::debug!("[audio] playing");
                PlaybackState::Playing
            }
            PlaybackState::Playing => {
                log::debug!("[audio] paused");
                PlaybackState::Paused
            }
        };
        self.state
    }

    /// Per-frame wave sample while Playing: the first call after a
    /// (re)activation anchors the clock at `timestamp_ms`, then every call
    /// renders the path for the time elapsed since the anchor. Returns
    /// `None` while Paused.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<String> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        let anchor = *self.clock_anchor.get_or_insert(timestamp_ms);
        Some(wave_path(timestamp_ms - anchor))
    }
}
