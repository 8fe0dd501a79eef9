//! Optional game assets
//!
//! Every asset is optional. A missing or unreadable file loads as `None` and
//! the consumer uses its built-in fallback (flat colors, silence).

use std::path::{Path, PathBuf};

/// Default assets folder, relative to the working directory
pub const ASSETS_DIR: &str = "assets";

pub const PLAYER_IMAGE: &str = "player.png";
pub const ENEMY_IMAGE: &str = "enemy.png";
pub const BACKGROUND_IMAGE: &str = "background.png";
pub const EXPLOSION_SOUND: &str = "explosion.wav";

/// Flat colors used when an image is missing (RGBA, 0-1)
pub mod fallback {
    pub const PLAYER: [f32; 4] = [60.0 / 255.0, 140.0 / 255.0, 220.0 / 255.0, 1.0];
    pub const ENEMY: [f32; 4] = [230.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0, 1.0];
    /// Two-tone background gradient
    pub const BACKGROUND_TOP: [f32; 4] = [0x28 as f32 / 255.0, 0x53 as f32 / 255.0, 0x8a as f32 / 255.0, 1.0];
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0x5b as f32 / 255.0, 0xd0 as f32 / 255.0, 0x7a as f32 / 255.0, 1.0];
}

/// Raw bytes of an asset file, decoded by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Attempt to load a file; any failure yields `None`
pub fn load_optional(path: &Path) -> Option<Asset> {
    match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => {
            log::info!("Loaded asset {} ({} bytes)", path.display(), bytes.len());
            Some(Asset {
                path: path.to_path_buf(),
                bytes,
            })
        }
        Ok(_) => {
            log::warn!("Asset {} is empty, using fallback", path.display());
            None
        }
        Err(e) => {
            log::info!("Asset {} unavailable ({}), using fallback", path.display(), e);
            None
        }
    }
}

/// All optional assets the game knows about
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub player_image: Option<Asset>,
    pub enemy_image: Option<Asset>,
    pub background_image: Option<Asset>,
    pub explosion_sound: Option<Asset>,
}

impl Assets {
    pub fn load(dir: &Path) -> Self {
        Self {
            player_image: load_optional(&dir.join(PLAYER_IMAGE)),
            enemy_image: load_optional(&dir.join(ENEMY_IMAGE)),
            background_image: load_optional(&dir.join(BACKGROUND_IMAGE)),
            explosion_sound: load_optional(&dir.join(EXPLOSION_SOUND)),
        }
    }

    /// Player fill color when no sprite is available
    pub fn player_color(&self) -> Option<[f32; 4]> {
        self.player_image.is_none().then_some(fallback::PLAYER)
    }

    pub fn enemy_color(&self) -> Option<[f32; 4]> {
        self.enemy_image.is_none().then_some(fallback::ENEMY)
    }
}
