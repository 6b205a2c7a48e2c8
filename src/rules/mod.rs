//! Pure game rules: move legality and the win condition.
//!
//! These are predicates over read-only board views. They never mutate the
//! board, never probe by temporary mutation, and hold no state of their own.

pub mod validator;
pub mod win;

pub use validator::{check_add, check_toggle, IllegalMoveReason};
pub use win::is_won;
