use serde::{Deserialize, Serialize};

/// Description used when a node carries no `description` tag.
pub const NO_DESCRIPTION: &str = "n/a";

/// A validated OpenStreetMap point of interest, ready to be turned into a POS.
///
/// Only built by the OSM pipeline once every required tag has been found, so
/// none of the address fields can be empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OsmNode {
    pub node_id: u64,
    pub name: String,
    pub amenity: OsmAmenity,
    pub city: String,
    pub street: String,
    pub house_number: String,
    pub postcode: String,
    pub description: String,
}

/// Amenity kinds a POS can be imported from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OsmAmenity {
    Cafe,
    Restaurant,
    FastFood,
    Bar,
    Pub,
    IceCream,
    FoodCourt,
    VendingMachine,
}

impl OsmAmenity {
    pub const ALL: [OsmAmenity; 8] = [
        Self::Cafe,
        Self::Restaurant,
        Self::FastFood,
        Self::Bar,
        Self::Pub,
        Self::IceCream,
        Self::FoodCourt,
        Self::VendingMachine,
    ];

    /// The value of the `amenity` tag in OSM.
    pub fn as_osm_value(self) -> &'static str {
        match self {
            Self::Cafe => "cafe",
            Self::Restaurant => "restaurant",
            Self::FastFood => "fast_food",
            Self::Bar => "bar",
            Self::Pub => "pub",
            Self::IceCream => "ice_cream",
            Self::FoodCourt => "food_court",
            Self::VendingMachine => "vending_machine",
        }
    }

    /// Looks up the amenity for an OSM tag value. Returns `None` for
    /// amenities we don't import.
    pub fn from_osm_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|amenity| amenity.as_osm_value() == value)
    }
}
