//! Input subsystem.
//!
//! Public API does not expose winit types; the runtime translates window events
//! into `InputEvent`s.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
