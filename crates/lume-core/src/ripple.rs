//! Uniform state for the full-screen ripple pass.
//!
//! The only recurrent state is a scalar clock, advanced by a fixed step per
//! frame and never reset, and the pointer position in normalized
//! coordinates with the y axis inverted relative to client coordinates.

use crate::constants::{RIPPLE_ALPHA, RIPPLE_DIST_FREQ, RIPPLE_TIME_SPEED, RIPPLE_TIME_STEP};

/// Uniform block for the ripple pass. Field order matches
/// `shaders/ripple.wgsl` (vec2 first keeps the block 16 bytes, no implicit
/// padding).
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RippleUniforms {
    pub pointer_uv: [f32; 2],
    pub time: f32,
    pub _pad: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RippleState {
    uniforms: RippleUniforms,
}

impl Default for RippleState {
    fn default() -> Self {
        Self::new()
    }
}

impl RippleState {
    /// Pointer starts at screen center until the first move event.
    pub fn new() -> Self {
        Self {
            uniforms: RippleUniforms {
                pointer_uv: [0.5, 0.5],
                time: 0.0,
                _pad: 0.0,
            },
        }
    }

    /// Advance the clock one frame. Unbounded; the sine in the shader makes
    /// wrapping unnecessary.
    pub fn step_time(&mut self) -> f32 {
        self.uniforms.time += RIPPLE_TIME_STEP;
        self.uniforms.time
    }

    /// Record the pointer from client coordinates, normalizing to [0,1] and
    /// inverting y so 1 is the top of the viewport.
    pub fn set_pointer_client(&mut self, x: f32, y: f32, viewport_w: f32, viewport_h: f32) {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return;
        }
        self.uniforms.pointer_uv = [
            (x / viewport_w).clamp(0.0, 1.0),
            (1.0 - y / viewport_h).clamp(0.0, 1.0),
        ];
    }

    pub fn uniforms(&self) -> &RippleUniforms {
        &self.uniforms
    }
}

/// Reference implementation of the fragment program, used by host tests.
/// Returns premultiplication-free RGBA.
pub fn ripple_color(frag_uv: [f32; 2], pointer_uv: [f32; 2], time: f32) -> [f32; 4] {
    let dx = frag_uv[0] - pointer_uv[0];
    let dy = frag_uv[1] - pointer_uv[1];
    let dist = (dx * dx + dy * dy).sqrt();
    let ripple = (dist * RIPPLE_DIST_FREQ - time * RIPPLE_TIME_SPEED).sin();
    [0.0, 0.4 + 0.4 * ripple, 0.7, RIPPLE_ALPHA]
}
