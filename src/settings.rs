//! Player settings
//!
//! Two independent volume channels. Persisted together with progression in the
//! player data document.

use crate::clamp_volume;
use crate::consts::DEFAULT_VOLUME;
use crate::platform::AudioOutput;

/// Stored volume levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsRecord {
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            music_volume: DEFAULT_VOLUME,
            sfx_volume: DEFAULT_VOLUME,
        }
    }
}

/// Owns the live settings and forwards changes to the audio output
#[derive(Debug, Clone, Default)]
pub struct SettingsModel {
    record: SettingsRecord,
}

impl SettingsModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a loaded record (out-of-range values are clamped, NaN reset)
    pub fn from_record(record: SettingsRecord) -> Self {
        let sanitize = |name: &str, vol: f32| match clamp_volume(vol) {
            Some(clamped) => {
                if clamped != vol {
                    log::warn!("Stored {name} volume {vol} out of range, using {clamped}");
                }
                clamped
            }
            None => {
                log::warn!("Stored {name} volume is not a number, using default");
                DEFAULT_VOLUME
            }
        };

        Self {
            record: SettingsRecord {
                music_volume: sanitize("music", record.music_volume),
                sfx_volume: sanitize("sfx", record.sfx_volume),
            },
        }
    }

    pub fn record(&self) -> SettingsRecord {
        self.record
    }

    pub fn music_volume(&self) -> f32 {
        self.record.music_volume
    }

    pub fn sfx_volume(&self) -> f32 {
        self.record.sfx_volume
    }

    /// Set music volume and forward it to the music channel.
    /// Returns the applied (clamped) value, or `None` if rejected.
    pub fn set_music_volume(&mut self, vol: f32, audio: &mut dyn AudioOutput) -> Option<f32> {
        let Some(vol) = clamp_volume(vol) else {
            log::warn!("Ignoring non-numeric music volume");
            return None;
        };
        self.record.music_volume = vol;
        audio.set_music_volume(vol);
        Some(vol)
    }

    /// Set sound effects volume and forward it to the effects channel.
    /// Returns the applied (clamped) value, or `None` if rejected.
    pub fn set_sfx_volume(&mut self, vol: f32, audio: &mut dyn AudioOutput) -> Option<f32> {
        let Some(vol) = clamp_volume(vol) else {
            log::warn!("Ignoring non-numeric sfx volume");
            return None;
        };
        self.record.sfx_volume = vol;
        audio.set_effects_volume(vol);
        Some(vol)
    }

    /// Push both channels to the audio output
    pub fn apply_all(&self, audio: &mut dyn AudioOutput) {
        audio.set_music_volume(self.record.music_volume);
        audio.set_effects_volume(self.record.sfx_volume);
    }
}
