//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine decides when to
//! call them; these only answer questions about a board snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_won, winning_line};
