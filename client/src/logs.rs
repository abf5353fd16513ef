//! Leveled, colorized log lines written to standard error.
//!
//! Standard output is reserved for the pipeline's result lines.

use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    let color = level.get_color();
    eprintln!(
        "[{}] {} {}",
        level.to_string().color(color),
        label.to_string().color(LogColor::Debug),
        msg.to_string().bright_black()
    );
}

impl Level {
    fn get_color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Debug,
    Error,
    Warning,
    Header,
    Info,
    Gray,
    FadedGray,
}

/// Formats a `label: value` pair with the label in `color`. Used by [`fmt_kv!`] and
/// [`print_kv!`].
pub fn format_kv(label: impl Display, value: impl Display, color: LogColor) -> String {
    format!(
        "{}: {}",
        label.to_string().color(color),
        value.to_string().bright_black()
    )
}

/// Formats a colorized `label: value` string. The color defaults to [`LogColor::Debug`].
#[macro_export]
macro_rules! fmt_kv {
    ($label:expr, $value:expr $(,)?) => {
        $crate::logs::format_kv(&$label, &$value, $crate::LogColor::Debug)
    };
    ($label:expr, $value:expr, $color:expr $(,)?) => {
        $crate::logs::format_kv(&$label, &$value, $color)
    };
}

/// Writes a colorized `label: value` line to standard error.
#[macro_export]
macro_rules! print_kv {
    ($($args:tt)*) => {
        eprintln!("{}", $crate::fmt_kv!($($args)*))
    };
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn log_info(label: impl Display, msg: impl Display) { log(Level::Info, label, msg) }
    pub fn log_success(label: impl Display, msg: impl Display) { log(Level::Success, label, msg) }
    pub fn log_warning(label: impl Display, msg: impl Display) { log(Level::Warning, label, msg) }
    pub fn log_error(label: impl Display, msg: impl Display) { log(Level::Error, label, msg) }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Debug      => Color::TrueColor { r: 40, g: 100,  b: 153 },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Header     => Color::TrueColor { r: 0,   g: 255, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::Gray       => Color::TrueColor { r: 192, g: 192, b: 192 },
                LogColor::FadedGray  => Color::TrueColor { r: 95,  g: 95,  b: 95  },
            }
        }
    }
}

pub use unformatted::*;
