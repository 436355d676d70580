//! Asset manifest and loading.
//!
//! Images are text-art sprite sheets embedded in the binary.  Each sheet
//! starts with a header line — logical pixel width, height and color —
//! followed by the character art; the logical size is what collision and
//! layout run on, while the art is what the terminal shows.  Sounds are
//! named handles with no backing data.
//!
//! Loading is synchronous and all-or-nothing: the first malformed sheet
//! aborts with an [`AssetError`] and the game never starts.

use std::collections::HashMap;

use crossterm::style::Color;
use log::info;

use crate::audio::SoundHandle;
use crate::error::AssetError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AssetKind {
    Image,
    Sound,
}

/// One manifest entry.  `data` carries the embedded sheet for images.
pub struct AssetSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: AssetKind,
    pub data: &'static str,
}

pub const MANIFEST: [AssetSpec; 7] = [
    AssetSpec {
        name: "ship",
        path: "assets/ship.txt",
        kind: AssetKind::Image,
        data: include_str!("../assets/ship.txt"),
    },
    AssetSpec {
        name: "alien1",
        path: "assets/alien1.txt",
        kind: AssetKind::Image,
        data: include_str!("../assets/alien1.txt"),
    },
    AssetSpec { name: "shot1", path: "assets/shot1", kind: AssetKind::Sound, data: "" },
    AssetSpec { name: "shot2", path: "assets/shot2", kind: AssetKind::Sound, data: "" },
    AssetSpec { name: "die", path: "assets/die", kind: AssetKind::Sound, data: "" },
    AssetSpec { name: "endLevel", path: "assets/endlevel", kind: AssetKind::Sound, data: "" },
    AssetSpec { name: "level", path: "assets/level", kind: AssetKind::Sound, data: "" },
];

// ── Sprites ──────────────────────────────────────────────────────────────────

/// A decoded image asset: logical pixel size plus the character art drawn
/// in its place.
#[derive(Clone, Debug)]
pub struct Sprite {
    name: String,
    width: f32,
    height: f32,
    color: Color,
    art: Vec<String>,
}

impl Sprite {
    /// Decode one sheet.  Header: `<width> <height> <color>`.
    pub fn parse(name: &str, data: &str) -> Result<Self, AssetError> {
        let corrupt = |reason: &str| AssetError::Corrupt {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let mut lines = data.lines();
        let header = lines.next().ok_or_else(|| corrupt("empty sheet"))?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(corrupt("header must be '<width> <height> <color>'"));
        }

        let width: f32 = fields[0]
            .parse()
            .map_err(|_| corrupt("width is not a number"))?;
        let height: f32 = fields[1]
            .parse()
            .map_err(|_| corrupt("height is not a number"))?;
        if width <= 0.0 || height <= 0.0 {
            return Err(corrupt("size must be positive"));
        }
        let color = parse_color(fields[2]).ok_or_else(|| corrupt("unknown color"))?;

        let art: Vec<String> = lines.map(|l| l.trim_end().to_string()).collect();
        if art.iter().all(|l| l.is_empty()) {
            return Err(corrupt("no art rows"));
        }

        Ok(Sprite {
            name: name.to_string(),
            width,
            height,
            color,
            art,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn art(&self) -> &[String] {
        &self.art
    }
}

fn parse_color(name: &str) -> Option<Color> {
    match name.to_ascii_lowercase().as_str() {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        "green" => Some(Color::Green),
        "red" => Some(Color::Red),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "grey" => Some(Color::Grey),
        "darkgrey" => Some(Color::DarkGrey),
        _ => None,
    }
}

// ── Loaded maps ──────────────────────────────────────────────────────────────

/// Ready-to-use named maps of decoded images and sound handles.
pub struct Assets {
    images: HashMap<String, Sprite>,
    sounds: HashMap<String, SoundHandle>,
}

impl Assets {
    /// Decode every manifest entry.  Returns only when all assets are
    /// ready, mirroring the all-loaded gate the game starts behind.
    pub fn load() -> Result<Assets, AssetError> {
        let mut images = HashMap::new();
        let mut sounds = HashMap::new();

        for spec in &MANIFEST {
            match spec.kind {
                AssetKind::Image => {
                    images.insert(spec.name.to_string(), Sprite::parse(spec.name, spec.data)?);
                    info!("asset image {} has loaded ({})", spec.name, spec.path);
                }
                AssetKind::Sound => {
                    sounds.insert(spec.name.to_string(), SoundHandle::new(spec.name));
                    info!("asset sound {} has loaded ({})", spec.name, spec.path);
                }
            }
        }

        info!("all {} assets ready", MANIFEST.len());
        Ok(Assets { images, sounds })
    }

    pub fn image(&self, name: &str) -> Result<&Sprite, AssetError> {
        self.images.get(name).ok_or_else(|| AssetError::Missing {
            name: name.to_string(),
        })
    }

    /// A cloned handle to a named sound; clones share playback state.
    pub fn sound(&self, name: &str) -> Result<SoundHandle, AssetError> {
        self.sounds
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::Missing {
                name: name.to_string(),
            })
    }
}
