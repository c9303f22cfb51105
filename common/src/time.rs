//! Time samples and display state fed to the faces on every tick.

use chrono::{Datelike, Timelike};
use heapless::String;

use crate::geometry::{hour_angle_degrees, minute_angle_degrees, second_angle_degrees};

/// Wall-clock snapshot taken on a tick.
///
/// Fields are expected in range (hour 0-23, minute/second 0-59, day 1-31) but
/// nothing here fails on out-of-range values: angles wrap modulo 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Day of month.
    pub day: u8,
}

impl TimeSample {
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
        day: u8,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            day,
        }
    }

    /// Snapshot any chrono date-time (`NaiveDateTime`, `DateTime<Tz>`, ...).
    pub fn from_datetime<T>(t: &T) -> Self
    where
        T: Timelike + Datelike,
    {
        Self::new(t.hour() as u8, t.minute() as u8, t.second() as u8, t.day() as u8)
    }

    #[inline]
    pub fn hour_angle(&self) -> f32 { hour_angle_degrees(self.hour, self.minute) }

    #[inline]
    pub fn minute_angle(&self) -> f32 { minute_angle_degrees(self.minute) }

    #[inline]
    pub fn second_angle(&self) -> f32 { second_angle_degrees(self.second) }

    /// Whether anything coarser than the second differs from `other`.
    #[inline]
    pub fn same_minute(
        &self,
        other: &TimeSample,
    ) -> bool {
        self.hour == other.hour && self.minute == other.minute && self.day == other.day
    }

    /// Day of month as decimal text, without padding.
    pub fn day_text(&self) -> String<3> {
        let mut s = String::new();
        push_u32(&mut s, u32::from(self.day));
        s
    }
}

/// Interactive (high-power) vs ambient (low-power) display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub active: bool,
}

impl DisplayState {
    pub const ACTIVE: Self = Self { active: true };
    pub const AMBIENT: Self = Self { active: false };

    #[inline]
    pub const fn new(active: bool) -> Self { Self { active } }
}

impl Default for DisplayState {
    fn default() -> Self { Self::ACTIVE }
}

/// Push a u32 value to a heapless string (no format! machinery).
fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}
