//! Game rules.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the engine and the invariant checks share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_win, Line, WinResult, WIN_LENGTH};
