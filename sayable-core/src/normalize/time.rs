//! Clock time reading

use super::numbers::{digit_word, number_to_words};
use crate::config::{Config, TimeStyle, TimeZero};

/// Meridiem marker as written in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse "am", "p.m.", "PM", ...
    pub fn parse(marker: &str) -> Option<Self> {
        match marker.trim().chars().next()?.to_ascii_lowercase() {
            'a' => Some(Meridiem::Am),
            'p' => Some(Meridiem::Pm),
            _ => None,
        }
    }

    fn spoken(self) -> &'static str {
        match self {
            Meridiem::Am => "a m",
            Meridiem::Pm => "p m",
        }
    }
}

/// Speak an hour (0-23) and minute (0-59) under the configured time policy
pub fn time_to_words(hour: u32, minute: u32, meridiem: Option<Meridiem>, config: &Config) -> String {
    let hour_words = match config.time_style {
        TimeStyle::TwelveHour => match hour % 12 {
            0 => number_to_words(12),
            h => number_to_words(u64::from(h)),
        },
        TimeStyle::TwentyFourHour => number_to_words(u64::from(hour)),
    };

    let base = match minute {
        0 => match config.time_zero {
            TimeZero::Oclock => format!("{hour_words} o'clock"),
            TimeZero::Hundred => format!("{hour_words} hundred"),
        },
        1..=9 => format!(
            "{hour_words} {} {}",
            config.minute_leading_zero,
            digit_word(minute)
        ),
        _ => format!("{hour_words} {}", number_to_words(u64::from(minute))),
    };

    match (config.time_style, meridiem) {
        (TimeStyle::TwelveHour, Some(marker)) if config.time_include_am_pm => {
            format!("{base} {}", marker.spoken())
        }
        _ => base,
    }
}
