//! Volume control with mute restore semantics
//!
//! Volume range is 0-100%. Muting gates the effective output to zero but
//! keeps the stored level, so unmuting restores exactly what the user had.
//! For binding a real audio sink, the level maps to -60 dB..0 dB.

use crate::time::clamp_percent;
use serde::{Deserialize, Serialize};

/// Default level restored when unmuting from a stored level of 0
pub const DEFAULT_UNMUTE_LEVEL: u8 = 50;

/// Icon the volume button should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeIcon {
    /// Muted, or level at 0
    Muted,

    /// Audible
    Audible,
}

/// Volume controller
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Volume level (0-100), preserved across mute
    level: u8,

    /// Mute state
    muted: bool,

    /// Level substituted when unmuting with a stored level of 0
    unmute_level: u8,
}

impl Volume {
    /// Create new volume controller
    ///
    /// A level of 0 starts muted, the same as `set_level(0)`.
    pub fn new(level: u8) -> Self {
        let mut volume = Self {
            level: 0,
            muted: false,
            unmute_level: DEFAULT_UNMUTE_LEVEL,
        };
        volume.set_level(level);
        volume
    }

    /// Override the level restored when unmuting from 0
    pub fn with_unmute_level(mut self, unmute_level: u8) -> Self {
        // 0 would leave the control stuck inaudible
        self.unmute_level = unmute_level.clamp(1, 100);
        self
    }

    /// Set volume level (0-100)
    ///
    /// A level of 0 mutes, anything above unmutes.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.muted = self.level == 0;
    }

    /// Set volume from a slider value, clamping and rounding to 0-100
    pub fn set_percent(&mut self, percent: f64) {
        let level = clamp_percent(percent).round() as u8;
        self.set_level(level);
    }

    /// Get stored volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Level restored when unmuting from 0
    pub fn unmute_level(&self) -> u8 {
        self.unmute_level
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio
    ///
    /// Restores the stored level, or the unmute level if the stored level is 0.
    pub fn unmute(&mut self) {
        self.muted = false;
        if self.level == 0 {
            self.level = self.unmute_level;
        }
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.unmute();
        } else {
            self.mute();
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Audible volume (0 when muted, otherwise the stored level)
    pub fn effective_level(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.level
        }
    }

    /// Icon for the volume button
    pub fn icon(&self) -> VolumeIcon {
        if self.effective_level() == 0 {
            VolumeIcon::Muted
        } else {
            VolumeIcon::Audible
        }
    }

    /// Linear gain multiplier for an audio sink
    ///
    /// Returns 0.0 if muted, otherwise logarithmic gain based on level
    pub fn gain(&self) -> f32 {
        Self::calculate_linear_gain(self.effective_level())
    }

    /// Convert volume percentage to linear gain
    ///
    /// Formula: gain = 10^((level% - 100) * 0.6 / 20)
    /// - 0%   → silence
    /// - 50%  → -30 dB → 0.0316 gain
    /// - 100% →   0 dB → 1.0 gain
    fn calculate_linear_gain(level: u8) -> f32 {
        if level == 0 {
            return 0.0;
        }

        let db = (f32::from(level) - 100.0) * 0.6;
        10.0_f32.powf(db / 20.0)
    }

    /// Effective level in dB (-60 dB floor)
    pub fn to_db(&self) -> f32 {
        match self.effective_level() {
            0 => -60.0,
            level => (f32::from(level) - 100.0) * 0.6,
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(80)
    }
}
