use std::io;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_invaders::assets::{Assets, Sprite};
use space_invaders::input::Controller;
use space_invaders::printer::{Printer, TextAlign};
use space_invaders::scene::game::LEVELS;
use space_invaders::scene::{GameScene, MainMenuScene, Scene, SceneRequest};
use space_invaders::state::GameMode;

const MS: Duration = Duration::from_millis(1);

/// Printer with the logical surface size and no output.
struct StubPrinter {
    width: f32,
    height: f32,
}

impl StubPrinter {
    fn new() -> Self {
        StubPrinter { width: 500.0, height: 500.0 }
    }
}

impl Printer for StubPrinter {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn draw_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: Color) -> io::Result<()> {
        Ok(())
    }

    fn draw_text(
        &mut self,
        _: f32,
        _: f32,
        _: &str,
        _: Color,
        _: &str,
        _: f32,
        _: TextAlign,
    ) -> io::Result<()> {
        Ok(())
    }

    fn draw_image(&mut self, _: f32, _: f32, _: &Sprite) -> io::Result<()> {
        Ok(())
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn scene_at(t0: Instant) -> GameScene {
    let assets = Assets::load().expect("embedded assets are valid");
    GameScene::create(&assets, &StubPrinter::new(), t0).expect("scene assets present")
}

/// Drive the scene into active play of level 1.
fn scene_in_level(t0: Instant) -> GameScene {
    let mut scene = scene_at(t0);
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1200 * MS);
    assert_eq!(scene.mode(), GameMode::Level);
    scene
}

fn kill_grid(scene: &mut GameScene) {
    for col in 0..7 {
        for row in 0..3 {
            if let Some(enemy) = scene.enemy_manager_mut().enemy_mut(col, row) {
                enemy.disable();
            }
        }
    }
}

fn confirm() -> Controller {
    let mut controller = Controller::new();
    controller.press(KeyCode::Enter);
    controller
}

// ── Level start sequence ──────────────────────────────────────────────────────

#[test]
fn scene_boots_into_a_transition_with_an_empty_grid() {
    let t0 = Instant::now();
    let scene = scene_at(t0);

    assert_eq!(scene.mode(), GameMode::LevelTransition);
    assert_eq!(scene.level_index(), Some(0));
    assert_eq!(scene.enemy_manager().grid_len(), 0);
}

#[test]
fn transition_holds_until_the_final_step() {
    let t0 = Instant::now();
    let mut scene = scene_at(t0);

    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1199 * MS);
    assert_eq!(scene.mode(), GameMode::LevelTransition);
    assert_eq!(scene.enemy_manager().grid_len(), 0);
}

#[test]
fn transition_activates_the_level_grid() {
    let t0 = Instant::now();
    let mut scene = scene_at(t0);

    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1200 * MS);
    assert_eq!(scene.mode(), GameMode::Level);
    // Level 1: 7 columns × 1 row
    assert_eq!(scene.enemy_manager().grid_len(), 7);
}

#[test]
fn late_first_update_runs_all_steps_in_order() {
    // A single update long past every deadline must land in the same
    // state as three timely ones
    let t0 = Instant::now();
    let mut scene = scene_at(t0);

    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 5000 * MS);
    assert_eq!(scene.mode(), GameMode::Level);
    assert_eq!(scene.enemy_manager().grid_len(), 7);
}

// ── Difficulty increment ──────────────────────────────────────────────────────

#[test]
fn increment_rises_only_during_active_play() {
    let t0 = Instant::now();
    let mut scene = scene_at(t0);

    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 400 * MS);
    assert_eq!(scene.mode(), GameMode::LevelTransition);
    let during_transition = scene.increment();

    let mut scene = scene_in_level(t0);
    let base = LEVELS[0].increment;
    assert!((scene.increment() - (base + 0.005)).abs() < 1e-4);

    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1201 * MS);
    assert!((scene.increment() - (base + 0.01)).abs() < 1e-4);
    assert!((during_transition - base).abs() < 1e-4);
}

// ── Game over ─────────────────────────────────────────────────────────────────

#[test]
fn zero_lives_triggers_game_over_once() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);

    scene.ship_mut().disable();
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1201 * MS);
    assert_eq!(scene.mode(), GameMode::GameOver);
    assert!(!scene.ship().is_active());

    // Further frames stay put without re-triggering
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1202 * MS);
    assert_eq!(scene.mode(), GameMode::GameOver);
}

#[test]
fn descended_grid_triggers_game_over() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);

    for _ in 0..54 {
        if let Some(enemy) = scene.enemy_manager_mut().enemy_mut(0, 0) {
            enemy.step();
        }
    }
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1201 * MS);
    assert_eq!(scene.mode(), GameMode::GameOver);
}

#[test]
fn confirm_restarts_the_current_level() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);

    scene.ship_mut().disable();
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1201 * MS);
    assert_eq!(scene.mode(), GameMode::GameOver);

    scene.update(&confirm(), &mut seeded_rng(), t0 + 1300 * MS);
    assert_eq!(scene.mode(), GameMode::Level);
    assert_eq!(scene.level_index(), Some(0));
    assert!(scene.ship().is_active());
    assert_eq!(scene.ship().lives(), 5);
    assert_eq!(scene.enemy_manager().grid_len(), 7);
    assert!(!scene.enemy_manager().all_enemies_killed());
}

#[test]
fn restart_resets_the_increment_to_the_level_base() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);

    for frame in 0u32..100 {
        scene.update(
            &Controller::new(),
            &mut seeded_rng(),
            t0 + (1201 + frame) * MS,
        );
    }
    assert!(scene.increment() > LEVELS[0].increment + 0.4);

    scene.ship_mut().disable();
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1400 * MS);
    scene.update(&confirm(), &mut seeded_rng(), t0 + 1401 * MS);

    // The restart is the last thing in its frame, so the increment sits
    // exactly at the level base
    assert!((scene.increment() - LEVELS[0].increment).abs() < 1e-4);
}

// ── Level progression ─────────────────────────────────────────────────────────

#[test]
fn clearing_the_grid_advances_to_the_next_level() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);

    kill_grid(&mut scene);
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1201 * MS);
    assert_eq!(scene.mode(), GameMode::LevelTransition);
    assert_eq!(scene.level_index(), Some(1));

    // Level 2 grid arrives 1200 ms later: 7 × 2
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 2401 * MS);
    assert_eq!(scene.mode(), GameMode::Level);
    assert_eq!(scene.enemy_manager().grid_len(), 14);
}

#[test]
fn game_over_supersedes_a_pending_transition() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);

    // Clear level 1; its transition to level 2 is now pending
    kill_grid(&mut scene);
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1201 * MS);
    assert_eq!(scene.mode(), GameMode::LevelTransition);

    // Game over lands before the 1200 ms step
    scene.ship_mut().disable();
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 1202 * MS);
    assert_eq!(scene.mode(), GameMode::GameOver);

    // The stale step must not rebuild the grid or resurrect the level:
    // still the 7 dead cells of level 1, not a fresh 14-cell level 2
    scene.update(&Controller::new(), &mut seeded_rng(), t0 + 9999 * MS);
    assert_eq!(scene.mode(), GameMode::GameOver);
    assert_eq!(scene.enemy_manager().grid_len(), 7);
    assert!(scene.enemy_manager().all_enemies_killed());
}

#[test]
fn finishing_every_level_is_terminal() {
    let t0 = Instant::now();
    let mut scene = scene_in_level(t0);
    let mut now = t0 + 1201 * MS;

    for expected_next in 1..=2 {
        kill_grid(&mut scene);
        scene.update(&Controller::new(), &mut seeded_rng(), now);
        assert_eq!(scene.level_index(), Some(expected_next));

        now += 1200 * MS;
        scene.update(&Controller::new(), &mut seeded_rng(), now);
        assert_eq!(scene.mode(), GameMode::Level);
        now += MS;
    }

    // Clear level 3: past the end of the table
    kill_grid(&mut scene);
    scene.update(&Controller::new(), &mut seeded_rng(), now);
    assert!(scene.is_completed());
    assert_eq!(scene.mode(), GameMode::LevelTransition);

    // No amount of time or confirm input re-enters a level
    let late = now + 60_000 * MS;
    scene.update(&confirm(), &mut seeded_rng(), late);
    scene.update(&Controller::new(), &mut seeded_rng(), late + MS);
    assert_eq!(scene.mode(), GameMode::LevelTransition);
    assert!(scene.is_completed());
}

// ── Drawing and the menu ──────────────────────────────────────────────────────

#[test]
fn game_scene_draws_through_the_printer_contract() {
    let t0 = Instant::now();
    let scene = scene_in_level(t0);
    let mut printer = StubPrinter::new();
    assert!(scene.draw(&mut printer).is_ok());
}

#[test]
fn menu_requests_the_game_scene_on_confirm() {
    let t0 = Instant::now();
    let assets = Assets::load().expect("embedded assets are valid");
    let mut menu = MainMenuScene::create(&assets, &StubPrinter::new());

    let idle = menu.update(&Controller::new(), &mut seeded_rng(), t0);
    assert_eq!(idle, None);

    let confirmed = menu.update(&confirm(), &mut seeded_rng(), t0);
    assert_eq!(confirmed, Some(SceneRequest::Game));

    let mut printer = StubPrinter::new();
    assert!(menu.draw(&mut printer).is_ok());
}
