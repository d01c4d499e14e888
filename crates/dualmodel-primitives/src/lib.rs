//! Scalar vocabulary shared by the schema and runtime crates.
//!
//! - `Primitive`: the declared type of a field, on either side of a model pair.
//! - `Value`: a dynamic field value carried by instances and patches.
//! - `Timestamp`: second-resolution wall-clock time.
//! - `CoercionPolicy`: which declared-type pairs the transformer may bridge.

mod coercion;
mod primitive;
mod timestamp;
mod value;

pub use coercion::CoercionPolicy;
pub use primitive::Primitive;
pub use timestamp::Timestamp;
pub use value::Value;

/// Largest integer magnitude that survives a round trip through `f64`.
pub const F64_SAFE_I64: i64 = 1i64 << 53;
