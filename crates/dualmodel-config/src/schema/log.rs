use derive_more::Display;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

///
/// LogLevel
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display("off")]
    Off,

    #[display("error")]
    Error,

    #[display("warn")]
    Warn,

    #[default]
    #[display("info")]
    Info,

    #[display("debug")]
    Debug,

    #[display("trace")]
    Trace,
}

impl LogLevel {
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

///
/// LogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
}
