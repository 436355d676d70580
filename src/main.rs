use std::io::stdout;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use log::info;

use space_invaders::assets::Assets;
use space_invaders::error::GameError;
use space_invaders::game::SpaceInvadersGame;
use space_invaders::printer::TerminalPrinter;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Logical drawing-surface size the game was designed against.
const LOGICAL_WIDTH: f32 = 500.0;
const LOGICAL_HEIGHT: f32 = 500.0;

fn main() -> Result<(), GameError> {
    env_logger::init();

    // Asset failures abort before the terminal is touched, so the error
    // prints on a normal screen.
    let assets = Assets::load()?;
    info!("game start");

    let mut setup_out = stdout();
    terminal::enable_raw_mode()?;
    setup_out.execute(terminal::EnterAlternateScreen)?;
    setup_out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the
    // controller's hold-window expiry.
    let keyboard_enhanced = setup_out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&rx, assets);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = setup_out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = setup_out.execute(cursor::Show);
    let _ = setup_out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run(rx: &mpsc::Receiver<Event>, assets: Assets) -> Result<(), GameError> {
    let printer = TerminalPrinter::stdout(LOGICAL_WIDTH, LOGICAL_HEIGHT)?;
    let mut game = SpaceInvadersGame::new(printer, assets);

    loop {
        let frame_start = Instant::now();
        game.controller_mut().begin_frame();

        // Drain all pending input events (non-blocking)
        while let Ok(ev) = rx.try_recv() {
            if is_quit(&ev) {
                return Ok(());
            }
            game.controller_mut().handle_event(&ev);
        }

        game.tick(Instant::now())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn is_quit(ev: &Event) -> bool {
    if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) = ev {
        return matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
            || (*code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL));
    }
    false
}
