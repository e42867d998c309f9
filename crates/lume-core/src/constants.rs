// Shared tuning constants for the page effects.

// Cursor trailing
pub const CURSOR_SMOOTHING_DIVISOR: f32 = 8.0; // per-axis blend toward the pointer each frame

// Menu tween timing (seconds)
pub const MENU_PANEL_OPEN_SECS: f32 = 0.8;
pub const MENU_PANEL_CLOSE_SECS: f32 = 0.8;
pub const MENU_LOGO_SECS: f32 = 0.6;
pub const MENU_ITEM_OPEN_SECS: f32 = 0.6;
pub const MENU_ITEM_CLOSE_SECS: f32 = 0.3;
pub const MENU_ITEM_OPEN_DELAY: f32 = 0.2; // base delay before the first item enters
pub const MENU_ITEM_OPEN_STAGGER: f32 = 0.1; // per-item offset, first item leads
pub const MENU_ITEM_CLOSE_STAGGER: f32 = 0.05; // reverse stagger, last item leads

// Menu rest geometry
pub const MENU_PANEL_HIDDEN_Y_PERCENT: f32 = -100.0; // panel parked above the viewport
pub const MENU_LOGO_OFFSET_Y: f32 = -20.0; // logo shift while the menu is open (px)
pub const MENU_LOGO_DIM_OPACITY: f32 = 0.5;
pub const MENU_ITEM_REST_OFFSET_Y: f32 = 20.0; // items park below their slot (px)

// Scroll parallax
pub const COLUMN_TRAVEL_PX: f32 = 2520.0; // vertical travel of each column over the region
pub const TEXT_SCREEN_DIVISOR: f32 = 1.7; // fraction of the viewport the text keeps on screen

// Ripple shader
pub const RIPPLE_TIME_STEP: f32 = 0.01; // clock advance per frame, never wraps
pub const RIPPLE_DIST_FREQ: f32 = 10.0;
pub const RIPPLE_TIME_SPEED: f32 = 5.0;
pub const RIPPLE_ALPHA: f32 = 0.15;

// Waveform icon geometry
pub const WAVE_LENGTH: f32 = 120.0;
pub const WAVE_AMPLITUDE: f32 = 10.0;
pub const WAVE_BASELINE_Y: f32 = 15.0;
pub const WAVE_FREQUENCY: f64 = 0.0005; // cycles per millisecond of elapsed time
pub const WAVE_POINTS: usize = 50; // line segments per path is WAVE_POINTS + 1

// Audio toggle click marker
pub const CLICK_MARKER_SIZE_PX: f64 = 60.0;
pub const CLICK_MARKER_LIFETIME_MS: i32 = 600;
