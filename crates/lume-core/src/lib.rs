pub mod constants;
pub mod cursor;
pub mod menu;
pub mod parallax;
pub mod ripple;
pub mod tween;
pub mod wave;

pub static RIPPLE_WGSL: &str = include_str!("../shaders/ripple.wgsl");

pub use constants::*;
pub use cursor::*;
pub use menu::*;
pub use parallax::*;
pub use ripple::*;
pub use tween::*;
pub use wave::*;
