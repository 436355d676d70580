//! Scene host: owns the printer, asset maps, controller and RNG, and
//! drives the current scene — update, then draw, every tick.

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::Assets;
use crate::error::GameError;
use crate::input::Controller;
use crate::printer::Printer;
use crate::scene::{GameScene, MainMenuScene, Scene, SceneRequest};

pub struct SpaceInvadersGame<P: Printer> {
    printer: P,
    assets: Assets,
    controller: Controller,
    rng: StdRng,
    scene: Box<dyn Scene>,
}

impl<P: Printer> SpaceInvadersGame<P> {
    /// Boots into the main menu.
    pub fn new(printer: P, assets: Assets) -> Self {
        let scene: Box<dyn Scene> = Box::new(MainMenuScene::create(&assets, &printer));

        SpaceInvadersGame {
            printer,
            assets,
            controller: Controller::new(),
            rng: StdRng::from_entropy(),
            scene,
        }
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// One frame: update the scene (switching if it asked to), then draw.
    pub fn tick(&mut self, now: Instant) -> Result<(), GameError> {
        if let Some(request) = self.scene.update(&self.controller, &mut self.rng, now) {
            self.change_scene(request, now)?;
        }

        self.scene.draw(&mut self.printer)?;
        self.printer.flush()?;
        Ok(())
    }

    fn change_scene(&mut self, request: SceneRequest, now: Instant) -> Result<(), GameError> {
        self.scene.destroy();

        self.scene = match request {
            SceneRequest::Menu => Box::new(MainMenuScene::create(&self.assets, &self.printer)),
            SceneRequest::Game => Box::new(GameScene::create(&self.assets, &self.printer, now)?),
        };

        info!("scene changed to {:?}", request);
        Ok(())
    }
}
