//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from board storage so strategies and the session share one definition.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::outcome;
pub use win::{LINES, check_winner, winner};
