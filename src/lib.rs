//! A terminal Space Invaders.
//!
//! Game logic runs in a logical 500×500 pixel space and is rendered onto
//! the terminal cell grid.  Everything except the binary's terminal
//! plumbing lives here, exercised by the integration tests under
//! `tests/`.

pub mod assets;
pub mod audio;
pub mod enemy;
pub mod enemy_manager;
pub mod error;
pub mod game;
pub mod geometry;
pub mod gui;
pub mod input;
pub mod printer;
pub mod scene;
pub mod ship;
pub mod state;
pub mod timer;
