//! The enemy grid and its pacing.
//!
//! Owns a column-major grid of enemies plus the two self-rescheduling
//! timers that pace them: a move tick every `2000 / increment` ms and a
//! shot tick every `4000 / increment` ms.  Both periods are recomputed
//! each time a tick fires, so the cadence tightens as the difficulty
//! increment rises, and both timers are cancelled and re-armed whenever
//! the grid is rebuilt.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::assets::Sprite;
use crate::enemy::Enemy;
use crate::geometry::overlaps;
use crate::printer::Printer;
use crate::ship::Ship;
use crate::state::GameState;
use crate::timer::TimerSet;

const GRID_ORIGIN: (f32, f32) = (25.0, 40.0);
const GRID_SPACING: (f32, f32) = (60.0, 60.0);
const MOVE_PERIOD_MS: f32 = 2000.0;
const SHOT_PERIOD_MS: f32 = 4000.0;
/// Grid depth past which the invasion counts as reaching the player.
const MIDDLE_SCREEN_Y: f32 = 200.0;

enum FleetTask {
    Move,
    Shot,
}

pub struct EnemyManager {
    // Column-major: enemies[col][row], rows top to bottom.
    enemies: Vec<Vec<Enemy>>,
    increment_velocity: f32,
    sprite: Sprite,
    timers: TimerSet<FleetTask>,
}

impl EnemyManager {
    pub fn new(rows: usize, cols: usize, sprite: Sprite, now: Instant) -> Self {
        let mut manager = EnemyManager {
            enemies: Vec::new(),
            increment_velocity: 1.0,
            sprite,
            timers: TimerSet::new(),
        };
        manager.restart(rows, cols, now);
        manager
    }

    /// Rebuild the grid for a level.  Pending move/shot ticks are
    /// cancelled so nothing paces a grid that no longer exists, then both
    /// timers are re-armed against the current increment.
    pub fn restart(&mut self, rows: usize, cols: usize, now: Instant) {
        self.enemies.clear();

        let mut x = GRID_ORIGIN.0;
        for _ in 0..cols {
            let mut col = Vec::with_capacity(rows);
            let mut y = GRID_ORIGIN.1;

            for _ in 0..rows {
                col.push(Enemy::new(x, y, self.sprite.clone()));
                y += GRID_SPACING.1;
            }

            x += GRID_SPACING.0;
            self.enemies.push(col);
        }

        self.timers.clear();
        self.arm_move_tick(now);
        self.arm_shot_tick(now);
    }

    pub fn update(
        &mut self,
        state: &GameState,
        ship: &mut Ship,
        rng: &mut impl Rng,
        now: Instant,
    ) {
        self.increment_velocity = state.increment;

        for task in self.timers.poll(now) {
            match task {
                FleetTask::Move => {
                    for enemy in self.enemies.iter_mut().flatten() {
                        enemy.step();
                    }
                    self.arm_move_tick(now);
                }
                FleetTask::Shot => {
                    self.shot(rng);
                    self.arm_shot_tick(now);
                }
            }
        }

        for col in &mut self.enemies {
            for enemy in col {
                Self::update_enemy(enemy, state, ship, now);
            }
        }
    }

    pub fn draw(&self, printer: &mut dyn Printer) -> std::io::Result<()> {
        for enemy in self.enemies.iter().flatten() {
            enemy.draw(printer)?;
        }
        Ok(())
    }

    /// Cancel the pacing timers for good, e.g. when the owning scene goes
    /// away.
    pub fn shutdown(&mut self) {
        self.timers.clear();
    }

    pub fn all_enemies_killed(&self) -> bool {
        self.enemies.iter().flatten().all(|e| !e.is_active())
    }

    /// Loss condition: the grid has descended to the player's half.  Only
    /// the first column's first row is sampled, matching the classic
    /// behavior — see the tests for the imprecision this carries.
    pub fn in_middle_screen(&self) -> bool {
        let invalid = self.all_enemies_killed() || self.enemies.is_empty();

        if invalid {
            return false;
        }

        match self.enemies[0].first() {
            Some(enemy) => enemy.position().y > MIDDLE_SCREEN_Y,
            None => false,
        }
    }

    fn arm_move_tick(&mut self, now: Instant) {
        let period = (MOVE_PERIOD_MS / self.increment_velocity).round() as u64;
        self.timers
            .schedule(now, Duration::from_millis(period), FleetTask::Move);
    }

    fn arm_shot_tick(&mut self, now: Instant) {
        let period = (SHOT_PERIOD_MS / self.increment_velocity).round() as u64;
        self.timers
            .schedule(now, Duration::from_millis(period), FleetTask::Shot);
    }

    fn update_enemy(enemy: &mut Enemy, state: &GameState, ship: &mut Ship, now: Instant) {
        enemy.update(state);

        if enemy.is_active() {
            let reached = ship.is_bullet_active()
                && overlaps(&enemy.collision_box(), &ship.bullet_collision_box());

            if reached {
                enemy.disable();
                ship.disable_bullet();
            }
        }

        let bullet_hit = enemy.is_bullet_active()
            && ship.is_active()
            && overlaps(&enemy.bullet_collision_box(), &ship.collision_box());

        if bullet_hit {
            enemy.disable_bullet();
            ship.kill(now);
        }
    }

    /// Fire from one random front-line enemy.
    fn shot(&mut self, rng: &mut impl Rng) {
        let velocity = self.increment_velocity;
        let near_enemies = self.near_enemies();

        if near_enemies.is_empty() {
            return;
        }

        let selected = rng.gen_range(0..near_enemies.len());
        let (col, row) = near_enemies[selected];
        self.enemies[col][row].shot(velocity);
    }

    /// The bottom-most active enemy of each column — the ones with a clear
    /// line of fire.
    fn near_enemies(&self) -> Vec<(usize, usize)> {
        let mut near = Vec::new();

        for (col_index, col) in self.enemies.iter().enumerate() {
            let front = col
                .iter()
                .enumerate()
                .filter(|(_, enemy)| enemy.is_active())
                .last();

            if let Some((row_index, _)) = front {
                near.push((col_index, row_index));
            }
        }

        near
    }

    /// Enemy count across the whole grid, dead or alive.
    pub fn grid_len(&self) -> usize {
        self.enemies.iter().map(Vec::len).sum()
    }

    /// Read access for collision-adjacent queries in tests.
    pub fn enemy(&self, col: usize, row: usize) -> Option<&Enemy> {
        self.enemies.get(col).and_then(|c| c.get(row))
    }

    pub fn enemy_mut(&mut self, col: usize, row: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(col).and_then(|c| c.get_mut(row))
    }
}
