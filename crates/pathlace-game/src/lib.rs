//! **pathlace-game** — interactive layer of the pathlace puzzle.
//!
//! Builds on [`pathlace_core`] and [`pathlace_solve`]:
//!
//! - [`PathTracker`] — the player path state machine (`Idle` → `Drawing`
//!   → `Won`), fed one pointer sample at a time
//! - [`Session`] — the per-level facade the UI talks to: load a level,
//!   forward pointer events, poll [`GameState`], toggle the hint overlay
//! - [`CellLayout`] — the deterministic pixel-to-cell mapping for hosts
//!   that deliver pixel coordinates
//!
//! Everything here is synchronous and single-threaded; tracker methods
//! are plain state transitions meant to be called directly from input
//! event callbacks. Invalid samples (walls, jumps, off-grid) are silently
//! ignored, never errors — continuous pointer input is expected to be
//! noisy.

pub mod layout;
pub mod session;
pub mod tracker;

pub use layout::CellLayout;
pub use session::{GameState, Session};
pub use tracker::{PathTracker, TrackerStatus};
