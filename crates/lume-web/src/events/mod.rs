pub mod pointer;
pub mod toggle;
pub mod visibility;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use toggle::{wire_burger, wire_music_toggle, MenuWiring, MusicWiring};
pub use visibility::wire_visibility;
