mod log;
mod transform;

pub use self::log::*;
pub use transform::*;

use serde::{Deserialize, Serialize};

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub transform: TransformConfig,

    #[serde(default)]
    pub log: LogConfig,
}
