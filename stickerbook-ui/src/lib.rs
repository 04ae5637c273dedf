//! stickerbook-ui - Pure view components for the album grid
//!
//! Every component here renders from props and reports user intent through
//! `EventHandler` callbacks; none of them owns application state. The desktop
//! crate wires them to the album signal.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
