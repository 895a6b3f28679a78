use std::collections::HashMap;
use std::path::Path;

use kira::sound::static_sound::StaticSoundData;
use log::{debug, warn};

use crate::config::SoundAsset;

/// Decoded sound effects kept in memory, keyed by name.
///
/// Scenes receive this through the [`Engine`](crate::engine::Engine) and
/// preload what they need on entry. Playback is left to the host.
#[derive(Default)]
pub struct AudioContext {
    sounds: HashMap<String, StaticSoundData>,
}

impl AudioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a sound file (OGG, WAV) into memory under `name`.
    /// Logs a warning and returns false if the file cannot be read or decoded.
    pub fn load_sound<P: AsRef<Path>>(&mut self, name: &str, path: P) -> bool {
        let path = path.as_ref();
        match StaticSoundData::from_file(path) {
            Ok(sound) => {
                debug!("loaded sound '{name}' from '{}'", path.display());
                self.sounds.insert(name.to_string(), sound);
                true
            }
            Err(e) => {
                warn!("failed to load sound '{name}' from '{}': {e}", path.display());
                false
            }
        }
    }

    /// Load every asset in `assets`; returns how many succeeded.
    pub fn preload(&mut self, assets: &[SoundAsset]) -> usize {
        assets
            .iter()
            .filter(|asset| self.load_sound(&asset.name, &asset.path))
            .count()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StaticSoundData> {
        self.sounds.get(name)
    }

    pub fn len(&self) -> usize { self.sounds.len() }
    pub fn is_empty(&self) -> bool { self.sounds.is_empty() }
}
