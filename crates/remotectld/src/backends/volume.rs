use std::fmt;

/// Output volume as a percentage in `0..=100`.
///
/// Construction clamps, so a level read from a sink that is boosted past
/// 100% reports as 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    /// Silent.
    pub const MIN: Self = Self(0);
    /// Full volume.
    pub const MAX: Self = Self(100);

    /// Builds a level, clamping values above 100.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        if percent > Self::MAX.0 {
            Self::MAX
        } else {
            Self(percent)
        }
    }

    /// Builds a level from a wider integer, clamping values above 100.
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        u8::try_from(percent).map_or(Self::MAX, Self::new)
    }

    /// Percentage value.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Returns `min(self + step, 100)`.
    #[must_use]
    pub const fn raised(self, step: u8) -> Self {
        Self::new(self.0.saturating_add(step))
    }

    /// Returns `max(self - step, 0)`.
    #[must_use]
    pub const fn lowered(self, step: u8) -> Self {
        Self(self.0.saturating_sub(step))
    }
}

impl fmt::Display for VolumeLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}%", self.0)
    }
}
