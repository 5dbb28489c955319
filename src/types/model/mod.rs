pub mod osm_node;
