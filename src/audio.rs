//! Audio cue queue
//!
//! The core does not play sound itself. It queues cues for the host's audio
//! backend to drain once per frame. A missing sound asset or disabled sound
//! simply means nothing is queued.

use crate::assets::Asset;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player hit; explosion burst
    Explosion,
}

/// Audio manager for the game
#[derive(Debug, Default)]
pub struct AudioManager {
    explosion: Option<Asset>,
    enabled: bool,
    pending: Vec<SoundEffect>,
}

impl AudioManager {
    pub fn new(explosion: Option<Asset>, enabled: bool) -> Self {
        if explosion.is_none() {
            log::info!("No explosion sound - audio cues disabled");
        }
        Self {
            explosion,
            enabled,
            pending: Vec::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sound data for an effect, if it was loaded
    pub fn asset(&self, effect: SoundEffect) -> Option<&Asset> {
        match effect {
            SoundEffect::Explosion => self.explosion.as_ref(),
        }
    }

    /// Queue a sound effect; returns whether it was queued
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        if !self.enabled || self.asset(effect).is_none() {
            return false;
        }
        self.pending.push(effect);
        true
    }

    /// Hand queued cues to the backend
    pub fn drain(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn wav() -> Option<Asset> {
        Some(Asset {
            path: PathBuf::from("explosion.wav"),
            bytes: vec![1, 2, 3],
        })
    }

    #[test]
    fn test_play_queues_once() {
        let mut audio = AudioManager::new(wav(), true);
        assert!(audio.play(SoundEffect::Explosion));
        assert_eq!(audio.drain(), vec![SoundEffect::Explosion]);
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_missing_asset_is_silent() {
        let mut audio = AudioManager::new(None, true);
        assert!(!audio.play(SoundEffect::Explosion));
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_disabled_is_silent() {
        let mut audio = AudioManager::new(wav(), false);
        assert!(!audio.play(SoundEffect::Explosion));
        audio.set_enabled(true);
        assert!(audio.play(SoundEffect::Explosion));
        audio.set_enabled(false);
        assert!(audio.drain().is_empty());
    }
}
