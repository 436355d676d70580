//! Sound handles.
//!
//! The terminal produces no audible output, but the game still tracks
//! playback state the way the browser-audio surface behaves: a handle can
//! be shared between owners, paused, rewound and replayed.  `restart` is
//! the stop-rewind-play sequence used for rapid-fire effects, so an effect
//! that is still sounding starts over from time zero.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

struct SoundState {
    name: String,
    playing: bool,
    plays: u32,
}

/// Cloneable shared handle to one loaded sound.
#[derive(Clone)]
pub struct SoundHandle {
    state: Rc<RefCell<SoundState>>,
}

impl SoundHandle {
    pub fn new(name: &str) -> Self {
        SoundHandle {
            state: Rc::new(RefCell::new(SoundState {
                name: name.to_string(),
                playing: false,
                plays: 0,
            })),
        }
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    pub fn play(&self) {
        let mut state = self.state.borrow_mut();
        state.playing = true;
        state.plays += 1;
        debug!("sound {} playing", state.name);
    }

    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.playing = false;
        debug!("sound {} stopped", state.name);
    }

    /// Stop, rewind to time zero, play.
    pub fn restart(&self) {
        self.stop();
        self.play();
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }

    /// Number of times playback has been started since load.
    pub fn play_count(&self) -> u32 {
        self.state.borrow().plays
    }
}
