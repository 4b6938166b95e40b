/// Level restored by unmute when nothing audible was ever set.
pub const DEFAULT_UNMUTE_LEVEL: f32 = 0.7;

/// Remembers the last audible level across a mute.
#[derive(Debug, Clone, Copy)]
pub struct MuteMemory {
    last_level: Option<f32>,
    fallback: f32,
}

impl Default for MuteMemory {
    fn default() -> Self {
        Self::new(DEFAULT_UNMUTE_LEVEL)
    }
}

impl MuteMemory {
    pub fn new(fallback: f32) -> Self {
        Self {
            last_level: None,
            fallback: fallback.clamp(0.0, 1.0),
        }
    }

    /// Returns the level to apply after toggling from `current`.
    pub fn toggle(&mut self, current: f32) -> f32 {
        if current > 0.0 {
            self.last_level = Some(current);
            0.0
        } else {
            self.last_level.unwrap_or(self.fallback)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    pub fn for_level(level: f32) -> Self {
        if level <= 0.0 {
            VolumeIcon::Muted
        } else if level < 0.5 {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "🔇",
            VolumeIcon::Low => "🔉",
            VolumeIcon::High => "🔊",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_level() {
        let mut mute = MuteMemory::default();
        let muted = mute.toggle(0.37);
        assert_eq!(muted, 0.0);
        assert_eq!(mute.toggle(muted), 0.37);
    }

    #[test]
    fn unmute_without_history_uses_fallback() {
        let mut mute = MuteMemory::new(0.6);
        assert_eq!(mute.toggle(0.0), 0.6);
    }

    #[test]
    fn latest_audible_level_wins() {
        let mut mute = MuteMemory::default();
        mute.toggle(0.9);
        mute.toggle(0.0);
        mute.toggle(0.2);
        assert_eq!(mute.toggle(0.0), 0.2);
    }

    #[test]
    fn icon_thresholds() {
        assert_eq!(VolumeIcon::for_level(0.0), VolumeIcon::Muted);
        assert_eq!(VolumeIcon::for_level(0.01), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(0.49), VolumeIcon::Low);
        assert_eq!(VolumeIcon::for_level(0.5), VolumeIcon::High);
        assert_eq!(VolumeIcon::for_level(1.0), VolumeIcon::High);
    }
}
