//! Native audio mixer
//!
//! Holds the per-channel gain a playback backend reads from. No sound is
//! produced here; the session only needs somewhere to send volume changes.

use crate::clamp_volume;
use crate::consts::DEFAULT_VOLUME;
use crate::platform::AudioOutput;

/// Output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Background music
    Music,
    /// Sound effects
    Effects,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Music => "music",
            Channel::Effects => "effects",
        }
    }
}

/// Channel gains for the playback backend
#[derive(Debug, Clone)]
pub struct Mixer {
    music_volume: f32,
    effects_volume: f32,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            music_volume: DEFAULT_VOLUME,
            effects_volume: DEFAULT_VOLUME,
        }
    }

    /// Current gain for a channel
    pub fn volume(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Music => self.music_volume,
            Channel::Effects => self.effects_volume,
        }
    }

    fn set_channel(&mut self, channel: Channel, vol: f32) {
        let vol = clamp_volume(vol).unwrap_or(0.0);
        match channel {
            Channel::Music => self.music_volume = vol,
            Channel::Effects => self.effects_volume = vol,
        }
        log::debug!("Mixer {} volume -> {:.2}", channel.as_str(), vol);
    }
}

impl AudioOutput for Mixer {
    fn set_music_volume(&mut self, vol: f32) {
        self.set_channel(Channel::Music, vol);
    }

    fn set_effects_volume(&mut self, vol: f32) {
        self.set_channel(Channel::Effects, vol);
    }
}
