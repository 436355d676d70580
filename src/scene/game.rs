//! The gameplay scene: ship + enemy grid + HUD, run through the
//! level / level-transition / game-over state machine.
//!
//! Level transitions are a three-step timed sequence (show the level name,
//! hide it and start the music, activate the grid) on a scene-owned timer
//! set.  Starting a new transition, restarting, or hitting game over
//! clears whatever steps were still pending, so a superseded sequence can
//! never fire into the wrong mode.

use std::io;
use std::time::{Duration, Instant};

use crossterm::style::Color;
use log::info;
use rand::rngs::StdRng;

use crate::assets::Assets;
use crate::audio::SoundHandle;
use crate::enemy_manager::EnemyManager;
use crate::error::AssetError;
use crate::geometry::Vec2;
use crate::gui::GuiElement;
use crate::input::{Command, Controller};
use crate::printer::{Printer, TextAlign};
use crate::scene::{Scene, SceneRequest};
use crate::ship::Ship;
use crate::state::{GameMode, GameState};
use crate::timer::TimerSet;

const FONT: &str = "monospace";

/// Difficulty gained per frame of active play.
const INCREMENT_PER_FRAME: f32 = 0.005;

const SHOW_NAME_DELAY: Duration = Duration::from_millis(400);
const START_MUSIC_DELAY: Duration = Duration::from_millis(800);
const START_LEVEL_DELAY: Duration = Duration::from_millis(1200);

/// Vertical margin between the ship and the screen bottom.
const SHIP_BOTTOM_MARGIN: f32 = 60.0;

pub struct LevelConfig {
    pub name: &'static str,
    pub cols: usize,
    pub rows: usize,
    pub increment: f32,
}

pub const LEVELS: [LevelConfig; 3] = [
    LevelConfig { name: "LEVEL 1", cols: 7, rows: 1, increment: 1.0 },
    LevelConfig { name: "LEVEL 2", cols: 7, rows: 2, increment: 2.0 },
    LevelConfig { name: "LEVEL 3", cols: 7, rows: 3, increment: 3.0 },
];

enum TransitionTask {
    ShowLevelName(usize),
    StartMusic,
    StartLevel(usize),
}

pub struct GameScene {
    state: GameState,
    level_index: Option<usize>,
    ship: Ship,
    enemy_manager: EnemyManager,
    end_level_sound: SoundHandle,
    level_music: SoundHandle,
    txt_lives: GuiElement,
    txt_game_over: GuiElement,
    txt_restart: GuiElement,
    txt_current_level: GuiElement,
    txt_completed: GuiElement,
    transitions: TimerSet<TransitionTask>,
}

impl GameScene {
    pub fn create(
        assets: &Assets,
        printer: &dyn Printer,
        now: Instant,
    ) -> Result<Self, AssetError> {
        let ship_sprite = assets.image("ship")?.clone();
        let alien_sprite = assets.image("alien1")?.clone();

        let state = GameState::new(printer.width(), printer.height());
        let ship_pos = Self::initial_ship_pos(&state, ship_sprite.width());

        let mut scene = GameScene {
            ship: Ship::new(
                ship_pos.x,
                ship_pos.y,
                ship_sprite,
                assets.sound("shot1")?,
                assets.sound("die")?,
            ),
            enemy_manager: EnemyManager::new(0, 0, alien_sprite, now),
            end_level_sound: assets.sound("endLevel")?,
            level_music: assets.sound("level")?,
            txt_lives: GuiElement::new(
                Vec2::new(20.0, 20.0),
                20.0,
                FONT,
                Color::White,
                "",
                TextAlign::Start,
            ),
            txt_game_over: GuiElement::new(
                Vec2::new(state.screen_width / 2.0, state.screen_height / 2.0),
                40.0,
                FONT,
                Color::White,
                "GAME OVER",
                TextAlign::Center,
            ),
            txt_restart: GuiElement::new(
                Vec2::new(state.screen_width / 2.0, state.screen_height / 2.0 + 50.0),
                30.0,
                FONT,
                Color::White,
                "PRESS ENTER TO RESTART",
                TextAlign::Center,
            ),
            txt_current_level: GuiElement::new(
                Vec2::new(state.screen_width / 2.0, state.screen_height / 2.0),
                40.0,
                FONT,
                Color::White,
                "",
                TextAlign::Center,
            ),
            txt_completed: GuiElement::new(
                Vec2::new(state.screen_width / 2.0, state.screen_height / 2.0 + 50.0),
                30.0,
                FONT,
                Color::White,
                "THANKS FOR PLAYING :)",
                TextAlign::Center,
            ),
            transitions: TimerSet::new(),
            state,
            level_index: None,
        };

        scene.txt_game_over.disable();
        scene.txt_restart.disable();
        scene.txt_current_level.disable();
        scene.txt_completed.disable();

        scene.go_next_level(now);
        Ok(scene)
    }

    // ── State machine ────────────────────────────────────────────────────────

    fn go_next_level(&mut self, now: Instant) {
        self.stop_level_music();
        self.transitions.clear();

        let next = self.level_index.map_or(0, |index| index + 1);
        self.level_index = Some(next);

        let Some(level) = LEVELS.get(next) else {
            // Past the last level: the terminal won state.
            self.txt_current_level.set_text("GAME COMPLETED!");
            self.txt_current_level.enable();
            self.txt_completed.enable();
            self.state.mode = GameMode::LevelTransition;
            info!("all levels completed");
            return;
        };

        info!("next level: {}", level.name);
        self.state.mode = GameMode::LevelTransition;
        self.state.increment = level.increment;

        self.transitions
            .schedule(now, SHOW_NAME_DELAY, TransitionTask::ShowLevelName(next));
        self.transitions
            .schedule(now, START_MUSIC_DELAY, TransitionTask::StartMusic);
        self.transitions
            .schedule(now, START_LEVEL_DELAY, TransitionTask::StartLevel(next));
    }

    fn handle_transition(&mut self, task: TransitionTask, now: Instant) {
        match task {
            TransitionTask::ShowLevelName(index) => {
                if let Some(level) = LEVELS.get(index) {
                    self.txt_current_level.set_text(level.name);
                    self.txt_current_level.enable();

                    if index > 0 {
                        self.end_level_sound.play();
                    }
                }
            }
            TransitionTask::StartMusic => {
                self.txt_current_level.disable();
                self.level_music.play();
            }
            TransitionTask::StartLevel(index) => {
                if let Some(level) = LEVELS.get(index) {
                    self.txt_current_level.disable();
                    self.enemy_manager.restart(level.rows, level.cols, now);
                    self.state.mode = GameMode::Level;
                }
            }
        }
    }

    fn update_in_game(&mut self, controller: &Controller, rng: &mut StdRng, now: Instant) {
        if self.state.mode == GameMode::Level {
            self.state.increment += INCREMENT_PER_FRAME;
        }

        if self.is_game_over() && self.state.mode != GameMode::GameOver {
            self.set_game_over();
        }

        self.ship.update(&self.state, controller, now);
        self.txt_lives
            .set_text(&format!("LIVES: {}", self.ship.lives()));
        self.enemy_manager
            .update(&self.state, &mut self.ship, rng, now);
    }

    fn is_game_over(&self) -> bool {
        self.enemy_manager.in_middle_screen() || self.ship.lives() == 0
    }

    fn set_game_over(&mut self) {
        self.ship.disable();
        self.txt_game_over.enable();
        self.txt_restart.enable();
        self.state.mode = GameMode::GameOver;
        // A pending transition must not drop us back into a level.
        self.transitions.clear();
        info!("game over");
    }

    /// Replay the current level from scratch.
    fn restart(&mut self, now: Instant) {
        let Some(level) = self.level_index.and_then(|index| LEVELS.get(index)) else {
            return;
        };

        self.stop_level_music();
        self.transitions.clear();
        self.state.mode = GameMode::Level;
        self.state.increment = level.increment;
        self.enemy_manager.restart(level.rows, level.cols, now);
        self.txt_game_over.disable();
        self.txt_restart.disable();

        let ship_pos = Self::initial_ship_pos(&self.state, self.ship.width());
        self.ship.restart(ship_pos.x, ship_pos.y);
        self.level_music.restart();
        info!("level restarted: {}", level.name);
    }

    fn initial_ship_pos(state: &GameState, ship_width: f32) -> Vec2 {
        Vec2::new(
            state.screen_width / 2.0 - ship_width / 2.0,
            state.screen_height - SHIP_BOTTOM_MARGIN,
        )
    }

    fn stop_level_music(&mut self) {
        self.level_music.stop();
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn increment(&self) -> f32 {
        self.state.increment
    }

    /// Index of the level in play; `Some(LEVELS.len())` once everything
    /// is completed.
    pub fn level_index(&self) -> Option<usize> {
        self.level_index
    }

    pub fn is_completed(&self) -> bool {
        self.level_index.is_some_and(|index| index >= LEVELS.len())
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn enemy_manager(&self) -> &EnemyManager {
        &self.enemy_manager
    }

    pub fn enemy_manager_mut(&mut self) -> &mut EnemyManager {
        &mut self.enemy_manager
    }
}

impl Scene for GameScene {
    fn update(
        &mut self,
        controller: &Controller,
        rng: &mut StdRng,
        now: Instant,
    ) -> Option<SceneRequest> {
        for task in self.transitions.poll(now) {
            self.handle_transition(task, now);
        }

        self.update_in_game(controller, rng, now);

        match self.state.mode {
            GameMode::Level => {
                if self.enemy_manager.all_enemies_killed() {
                    self.go_next_level(now);
                }
            }
            GameMode::GameOver => {
                if controller.is_command_pressed(Command::Ok) {
                    self.restart(now);
                }
            }
            GameMode::LevelTransition => {}
        }

        None
    }

    fn draw(&self, printer: &mut dyn Printer) -> io::Result<()> {
        let (width, height) = (printer.width(), printer.height());
        printer.clear()?;
        printer.draw_rect(0.0, 0.0, width, height, Color::Black)?;

        self.ship.draw(printer)?;
        self.enemy_manager.draw(printer)?;

        self.txt_lives.draw(printer)?;
        self.txt_game_over.draw(printer)?;
        self.txt_restart.draw(printer)?;
        self.txt_current_level.draw(printer)?;
        self.txt_completed.draw(printer)?;
        Ok(())
    }

    fn destroy(&mut self) {
        self.transitions.clear();
        self.enemy_manager.shutdown();
        self.stop_level_music();
    }
}
