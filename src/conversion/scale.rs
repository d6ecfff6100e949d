//! Temperature scale types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Supported temperature scale.
///
/// String forms are the lowercase scale names. Callers are expected to
/// lowercase raw input before parsing; the HTTP layer does this for query
/// parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Scale {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}
