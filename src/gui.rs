//! HUD and overlay text elements — purely presentational.

use std::io;

use crossterm::style::Color;

use crate::geometry::Vec2;
use crate::printer::{Printer, TextAlign};

pub struct GuiElement {
    enabled: bool,
    pos: Vec2,
    font_size: f32,
    font_family: String,
    color: Color,
    text: String,
    align: TextAlign,
}

impl GuiElement {
    pub fn new(
        pos: Vec2,
        font_size: f32,
        font_family: &str,
        color: Color,
        text: &str,
        align: TextAlign,
    ) -> Self {
        GuiElement {
            enabled: true,
            pos,
            font_size,
            font_family: font_family.to_string(),
            color,
            text: text.to_string(),
            align,
        }
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn draw(&self, printer: &mut dyn Printer) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        printer.draw_text(
            self.pos.x,
            self.pos.y,
            &self.text,
            self.color,
            &self.font_family,
            self.font_size,
            self.align,
        )
    }
}
