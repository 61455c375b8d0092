//! Game clock used to stamp records.

use serde::{Deserialize, Serialize};

/// A point on the in-game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct WorldTime {
    pub day: u32,
    pub hour: u8,
    pub minute: u8,
}

impl WorldTime {
    /// Create a new world time. Hours and minutes wrap into the next unit.
    pub fn new(day: u32, hour: u8, minute: u8) -> Self {
        Self::default().advanced_by_minutes(day as u64 * 24 * 60 + hour as u64 * 60 + minute as u64)
    }

    /// The last representable moment; the clock stops here.
    pub const END: Self = Self {
        day: u32::MAX,
        hour: 23,
        minute: 59,
    };

    /// The time `minutes` later, rolling minutes into hours and hours into days.
    /// Saturates at [`WorldTime::END`].
    pub fn advanced_by_minutes(self, minutes: u64) -> Self {
        let Some(total_minutes) = (self.minute as u64).checked_add(minutes) else {
            return Self::END;
        };
        let total_hours = self.hour as u64 + total_minutes / 60;
        let days = self.day as u64 + total_hours / 24;
        if days > u32::MAX as u64 {
            return Self::END;
        }

        Self {
            day: days as u32,
            hour: (total_hours % 24) as u8,
            minute: (total_minutes % 60) as u8,
        }
    }
}

impl std::fmt::Display for WorldTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day {} {:02}:{:02}", self.day, self.hour, self.minute)
    }
}
