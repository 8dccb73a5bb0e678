//! Generator for synthetic city-block road maps.
//!
//! A map is filled frontier by frontier, from the far corner towards
//! `(0, 0)`, and dumped as whitespace separated codes.

pub mod city_map;
pub mod connectivity;
pub mod error;
pub mod filler;
pub mod io;
pub mod road;

pub use city_map::{CityMap, CityMap80, MAP_SIZE};
pub use error::MapError;
pub use road::RoadCode;
