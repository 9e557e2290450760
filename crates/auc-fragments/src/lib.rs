//! Auction UI Fragments
//!
//! Self-contained presentation fragments of the auction frontend. Each
//! fragment borrows the scoped class mapping produced by the CSS build and
//! renders a markup tree owned by the caller.

pub mod welcome;

pub use welcome::Welcome;
