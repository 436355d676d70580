//! One cell of the enemy grid.
//!
//! Movement is externally paced: the manager's move tick calls [`Enemy::
//! step`], producing the classic patrol — five steps sideways, then a drop
//! and a direction flip.  Killed enemies stay in the grid, inactive.

use crossterm::style::Color;

use crate::assets::Sprite;
use crate::geometry::{CollisionBox, Vec2};
use crate::printer::Printer;
use crate::state::GameState;

const STEP_X: f32 = 10.0;
const DROP_Y: f32 = 20.0;
const SWEEP_STEPS: u8 = 5;
const BULLET_WIDTH: f32 = 5.0;
const BULLET_HEIGHT: f32 = 10.0;

pub struct Enemy {
    active: bool,
    pos: Vec2,
    width: f32,
    height: f32,
    sprite: Sprite,
    counter: u8,
    direction: f32,
    bullet_active: bool,
    bullet_pos: Vec2,
    bullet_velocity: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, sprite: Sprite) -> Self {
        Enemy {
            active: true,
            pos: Vec2::new(x, y),
            width: sprite.width(),
            height: sprite.height(),
            sprite,
            counter: 0,
            direction: 1.0,
            bullet_active: false,
            bullet_pos: Vec2::new(0.0, 0.0),
            bullet_velocity: 0.0,
        }
    }

    /// One patrol step.  On the sixth step the direction flips and the
    /// enemy drops instead of moving sideways.
    pub fn step(&mut self) {
        if self.counter == SWEEP_STEPS {
            self.direction = -self.direction;
            self.pos.y += DROP_Y;
        } else {
            self.pos.x += STEP_X * self.direction;
        }

        self.counter = (self.counter + 1) % (SWEEP_STEPS + 1);
    }

    /// Spawn a downward bullet at bottom-center, if the slot is free.
    pub fn shot(&mut self, velocity: f32) {
        if !self.bullet_active {
            self.bullet_pos = Vec2::new(
                self.pos.x + self.width / 2.0,
                self.pos.y + self.height,
            );
            self.bullet_active = true;
            self.bullet_velocity = velocity;
        }
    }

    /// Per-frame: advance the bullet, despawn it past the screen bottom.
    pub fn update(&mut self, state: &GameState) {
        if self.bullet_active {
            self.bullet_pos.y += 2.0 * self.bullet_velocity;

            if self.bullet_pos.y + BULLET_HEIGHT > state.screen_height {
                self.disable_bullet();
            }
        }
    }

    pub fn draw(&self, printer: &mut dyn Printer) -> std::io::Result<()> {
        if self.active {
            printer.draw_image(self.pos.x, self.pos.y, &self.sprite)?;
        }

        if self.bullet_active {
            printer.draw_rect(
                self.bullet_pos.x,
                self.bullet_pos.y,
                BULLET_WIDTH,
                BULLET_HEIGHT,
                Color::White,
            )?;
        }

        Ok(())
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_bullet_active(&self) -> bool {
        self.bullet_active
    }

    pub fn disable(&mut self) {
        self.active = false;
    }

    pub fn disable_bullet(&mut self) {
        self.bullet_active = false;
    }

    pub fn collision_box(&self) -> CollisionBox {
        CollisionBox::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn bullet_collision_box(&self) -> CollisionBox {
        CollisionBox::new(
            self.bullet_pos.x,
            self.bullet_pos.y,
            BULLET_WIDTH,
            BULLET_HEIGHT,
        )
    }
}
