//! The player ship: clamped horizontal movement, a single bullet slot,
//! lives, and a timed revival after each hit.

use std::time::{Duration, Instant};

use crossterm::style::Color;

use crate::assets::Sprite;
use crate::audio::SoundHandle;
use crate::geometry::{CollisionBox, Vec2};
use crate::input::{Command, Controller};
use crate::printer::Printer;
use crate::state::GameState;
use crate::timer::TimerSet;

const STARTING_LIVES: u32 = 5;
const MOVE_SPEED: f32 = 4.0;
const BULLET_SPEED: f32 = 10.0;
const BULLET_WIDTH: f32 = 5.0;
const BULLET_HEIGHT: f32 = 10.0;
const REVIVE_DELAY: Duration = Duration::from_millis(500);

enum ShipTask {
    Revive,
}

pub struct Ship {
    active: bool,
    lives: u32,
    pos: Vec2,
    current_velocity: f32,
    width: f32,
    height: f32,
    sprite: Sprite,
    bullet_sound: SoundHandle,
    die_sound: SoundHandle,
    bullet_active: bool,
    bullet_pos: Vec2,
    timers: TimerSet<ShipTask>,
}

impl Ship {
    pub fn new(
        x: f32,
        y: f32,
        sprite: Sprite,
        bullet_sound: SoundHandle,
        die_sound: SoundHandle,
    ) -> Self {
        Ship {
            active: true,
            lives: STARTING_LIVES,
            pos: Vec2::new(x, y),
            current_velocity: 0.0,
            width: sprite.width(),
            height: sprite.height(),
            sprite,
            bullet_sound,
            die_sound,
            bullet_active: false,
            bullet_pos: Vec2::new(0.0, 0.0),
            timers: TimerSet::new(),
        }
    }

    /// Back to the initial state: active, full lives, repositioned.  Any
    /// pending revival is cancelled; a bullet already in flight keeps
    /// flying.
    pub fn restart(&mut self, x: f32, y: f32) {
        self.active = true;
        self.lives = STARTING_LIVES;
        self.pos = Vec2::new(x, y);
        self.current_velocity = 0.0;
        self.timers.clear();
    }

    pub fn update(&mut self, state: &GameState, controller: &Controller, now: Instant) {
        for task in self.timers.poll(now) {
            match task {
                ShipTask::Revive => {
                    if self.lives > 0 {
                        self.active = true;
                        self.pos.x = state.screen_width / 2.0 - self.width / 2.0;
                    }
                }
            }
        }

        if self.active {
            self.do_move(state, controller);

            if controller.is_command_pressed(Command::Fire) && !self.bullet_active {
                self.bullet_active = true;
                self.bullet_pos = Vec2::new(self.pos.x + self.width / 2.0, self.pos.y);
                self.bullet_sound.restart();
            }
        }

        if self.bullet_active {
            self.bullet_pos.y -= BULLET_SPEED;

            if self.bullet_pos.y < 0.0 {
                self.bullet_active = false;
            }
        }
    }

    /// Got hit.  Deactivates immediately; if lives remain the death sound
    /// restarts and a life is spent.  Revival is scheduled either way — the
    /// timer only takes effect while lives are left.
    pub fn kill(&mut self, now: Instant) {
        self.active = false;

        if self.lives > 0 {
            self.die_sound.restart();
            self.lives -= 1;
        }

        self.timers.schedule(now, REVIVE_DELAY, ShipTask::Revive);
    }

    /// Terminal: no lives, no revival.
    pub fn disable(&mut self) {
        self.lives = 0;
        self.active = false;
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

    fn do_move(&mut self, state: &GameState, controller: &Controller) {
        self.current_velocity = 0.0;

        if controller.is_command_pressed(Command::Left) {
            self.current_velocity = -MOVE_SPEED;
        } else if controller.is_command_pressed(Command::Right) {
            self.current_velocity = MOVE_SPEED;
        }

        let outside_negative_x = self.pos.x < 0.0;
        let outside_positive_x = self.pos.x + self.width > state.screen_width;

        let block_movement = (outside_negative_x && self.current_velocity < 0.0)
            || (outside_positive_x && self.current_velocity > 0.0);

        if block_movement {
            self.current_velocity = 0.0;
        }

        self.pos.x += self.current_velocity;
        self.pos.x = self.pos.x.clamp(0.0, state.screen_width - self.width);
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_bullet_active(&self) -> bool {
        self.bullet_active
    }

    pub fn disable_bullet(&mut self) {
        self.bullet_active = false;
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn bullet_position(&self) -> Vec2 {
        self.bullet_pos
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
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
