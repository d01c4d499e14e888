use dualmodel_primitives::CoercionPolicy;
use serde::{Deserialize, Serialize};

///
/// TransformConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TransformConfig {
    /// Which declared-type pairs the transformer may bridge.
    #[serde(default)]
    pub coercion: CoercionPolicy,
}
