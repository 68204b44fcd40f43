pub mod angles;
pub mod nutation;
pub mod sidereal;
pub mod types;

pub use angles::{ascendant, midheaven};
pub use sidereal::{greenwich_mean_sidereal_time, local_sidereal_time, obliquity};
pub use types::{Angles, GeoPosition};
