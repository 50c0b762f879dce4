//! Modelos del sistema
//!
//! Zonas, vehículos, estado de las consultas y navegación.

pub mod fetch_state;
pub mod navigation;
pub mod vehicle;
pub mod zone;

pub use fetch_state::FetchState;
pub use navigation::Route;
pub use vehicle::Vehicle;
pub use zone::{Thana, Zone};

use serde::{Deserialize, Deserializer};

/// `null` del backend se trata como campo ausente
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
