//! Scenes — self-contained game modes behind one contract.
//!
//! The host drives whichever scene is current; a scene asks for a switch
//! by returning a [`SceneRequest`] from its update.  Dispatch stays one
//! level deep: menu or gameplay, nothing further.

use std::io;
use std::time::Instant;

use rand::rngs::StdRng;

use crate::input::Controller;
use crate::printer::Printer;

pub mod game;
pub mod menu;

pub use game::GameScene;
pub use menu::MainMenuScene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneRequest {
    Menu,
    Game,
}

pub trait Scene {
    /// Advance one frame.  Runs strictly before `draw` within a tick.
    fn update(
        &mut self,
        controller: &Controller,
        rng: &mut StdRng,
        now: Instant,
    ) -> Option<SceneRequest>;

    fn draw(&self, printer: &mut dyn Printer) -> io::Result<()>;

    /// Tear down timers and sounds; called before the scene is replaced.
    fn destroy(&mut self);
}
