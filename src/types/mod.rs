pub mod model;
pub mod osm;
