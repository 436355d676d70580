//! Title screen.  Shows the name of the game and waits for confirm.

use std::io;
use std::time::Instant;

use crossterm::style::Color;
use log::info;
use rand::rngs::StdRng;

use crate::assets::Assets;
use crate::geometry::Vec2;
use crate::gui::GuiElement;
use crate::input::{Command, Controller};
use crate::printer::{Printer, TextAlign};
use crate::scene::{Scene, SceneRequest};

const FONT: &str = "monospace";

pub struct MainMenuScene {
    txt_title: GuiElement,
    txt_start: GuiElement,
    txt_tips: GuiElement,
}

impl MainMenuScene {
    pub fn create(_assets: &Assets, printer: &dyn Printer) -> Self {
        let cx = printer.width() / 2.0;
        let cy = printer.height() / 2.0;

        MainMenuScene {
            txt_title: GuiElement::new(
                Vec2::new(cx, cy),
                50.0,
                FONT,
                Color::White,
                "SPACE INVADERS",
                TextAlign::Center,
            ),
            txt_start: GuiElement::new(
                Vec2::new(cx, cy + 50.0),
                25.0,
                FONT,
                Color::White,
                "PRESS ENTER TO START",
                TextAlign::Center,
            ),
            txt_tips: GuiElement::new(
                Vec2::new(cx, cy + 100.0),
                20.0,
                FONT,
                Color::White,
                "SPACE - SHOOT, ARROWS - MOVE",
                TextAlign::Center,
            ),
        }
    }
}

impl Scene for MainMenuScene {
    fn update(
        &mut self,
        controller: &Controller,
        _rng: &mut StdRng,
        _now: Instant,
    ) -> Option<SceneRequest> {
        if controller.is_command_pressed(Command::Ok) {
            info!("menu confirmed, starting game");
            return Some(SceneRequest::Game);
        }

        None
    }

    fn draw(&self, printer: &mut dyn Printer) -> io::Result<()> {
        let (width, height) = (printer.width(), printer.height());
        printer.clear()?;
        printer.draw_rect(0.0, 0.0, width, height, Color::Black)?;

        self.txt_title.draw(printer)?;
        self.txt_start.draw(printer)?;
        self.txt_tips.draw(printer)?;
        Ok(())
    }

    fn destroy(&mut self) {}
}
