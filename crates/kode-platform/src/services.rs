//! Time service trait and desktop implementation.

use kode_types::error::Result;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A simple UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Day of week, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        // Tomohiko Sakamoto's algorithm.
        let t = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let month = self.month.clamp(1, 12) as usize;
        let y = if month < 3 {
            self.year as i32 - 1
        } else {
            self.year as i32
        };
        ((y + y / 4 - y / 100 + y / 400 + t[month - 1] + self.day as i32).rem_euclid(7)) as u8
    }

    fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday() as usize]
    }

    fn month_name(&self) -> &'static str {
        MONTHS[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// Browser-style date: `Mon Oct 19 2026`.
    pub fn date_string(&self) -> String {
        format!(
            "{} {} {:02} {:04}",
            self.weekday_name(),
            self.month_name(),
            self.day,
            self.year
        )
    }

    /// Browser-style full timestamp, always in UTC:
    /// `Mon Oct 19 2026 14:30:45 GMT+0000 (Coordinated Universal Time)`.
    pub fn long_string(&self) -> String {
        format!(
            "{} {:02}:{:02}:{:02} GMT+0000 (Coordinated Universal Time)",
            self.date_string(),
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using the system clock.
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        Ok(from_unix_secs(dur.as_secs()))
    }
}

/// Break a Unix timestamp down into UTC calendar fields.
pub(crate) fn from_unix_secs(secs: u64) -> SystemTime {
    let days = secs / 86400;
    let time_of_day = secs % 86400;
    let (year, month, day) = days_to_ymd(days);
    SystemTime {
        year,
        month,
        day,
        hour: (time_of_day / 3600) as u8,
        minute: ((time_of_day % 3600) / 60) as u8,
        second: (time_of_day % 60) as u8,
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day). Dates past the end
/// of year `u16::MAX` clamp to its last day.
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        if year == u16::MAX {
            return (u16::MAX, 12, 31);
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}
