use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::{
    osm_client::{OsmClient, OsmClientError},
    types::{
        model::osm_node::{OsmAmenity, OsmNode, NO_DESCRIPTION},
        osm::OsmResponse,
    },
};

const NAME: &str = "name";
const CITY: &str = "addr:city";
const STREET: &str = "addr:street";
const HOUSE_NUMBER: &str = "addr:housenumber";
const POSTCODE: &str = "addr:postcode";
const AMENITY: &str = "amenity";
const DESCRIPTION: &str = "description";

/// Name tags in order of preference.
const NAME_PRIORITY: [&str; 3] = ["name:en", "name:de", NAME];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OsmError {
    /// The node could not be obtained or read, whatever the upstream reason.
    #[error("OSM node {0} not found")]
    NodeNotFound(u64),
    /// The node exists but lacks a tag we need, or has an amenity we don't support.
    #[error("OSM node {node_id} is missing required field '{field}'")]
    MissingField { node_id: u64, field: &'static str },
}

/// Fetches OSM nodes and turns them into [`OsmNode`]s.
pub struct OsmDataService<C> {
    client: C,
}

impl<C: OsmClient> OsmDataService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn fetch_node(&self, node_id: u64) -> Result<OsmNode, OsmError> {
        debug!("Fetching OSM node {}...", node_id);
        let xml = self
            .client
            .fetch_node(node_id)
            .await
            .map_err(|err| node_not_found(node_id, err))?;

        if xml.trim().is_empty() {
            error!("Empty response from OSM API for node {}", node_id);
            return Err(OsmError::NodeNotFound(node_id));
        }

        let response = OsmResponse::from_xml(&xml).map_err(|err| {
            error!("Failed to parse OSM response for node {}: {}", node_id, err);
            OsmError::NodeNotFound(node_id)
        })?;
        if response.node.id != node_id {
            warn!(
                "OSM API answered node {} when asked for node {}",
                response.node.id, node_id
            );
        }

        let node = parse_osm_node(node_id, response.tags())?;
        debug!("Successfully fetched and parsed OSM node {}", node_id);
        Ok(node)
    }
}

/// Every client failure means the node can't be used. Kept in one place so
/// timeouts or service errors can get their own kinds later.
fn node_not_found(node_id: u64, err: OsmClientError) -> OsmError {
    match &err {
        OsmClientError::NotFound => warn!("OSM node {} not found", node_id),
        OsmClientError::Timeout => error!("Timed out fetching OSM node {}", node_id),
        OsmClientError::Status { status, body } => {
            error!("HTTP error fetching OSM node {}: {} - {}", node_id, status, body)
        }
        OsmClientError::Http(_) | OsmClientError::Url(_) => {
            error!("Error fetching OSM node {}: {}", node_id, err)
        }
    }
    OsmError::NodeNotFound(node_id)
}

fn parse_osm_node(node_id: u64, tags: HashMap<String, String>) -> Result<OsmNode, OsmError> {
    let name = required_tag(&tags, NAME, node_id)?;
    let city = required_tag(&tags, CITY, node_id)?;
    let street = required_tag(&tags, STREET, node_id)?;
    let house_number = required_tag(&tags, HOUSE_NUMBER, node_id)?;
    let postcode = required_tag(&tags, POSTCODE, node_id)?;
    let amenity_value = required_tag(&tags, AMENITY, node_id)?;
    let amenity = OsmAmenity::from_osm_value(amenity_value).ok_or_else(|| {
        warn!(
            "OSM node {} has unsupported amenity type: {}",
            node_id, amenity_value
        );
        OsmError::MissingField {
            node_id,
            field: AMENITY,
        }
    })?;

    Ok(OsmNode {
        node_id,
        name: resolve_name(&tags).unwrap_or(name).to_string(),
        amenity,
        city: city.to_string(),
        street: street.to_string(),
        house_number: house_number.to_string(),
        postcode: postcode.to_string(),
        description: tag(&tags, DESCRIPTION).unwrap_or(NO_DESCRIPTION).to_string(),
    })
}

/// Blank values count as missing.
fn tag<'a>(tags: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    tags.get(key)
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
}

fn required_tag<'a>(
    tags: &'a HashMap<String, String>,
    key: &'static str,
    node_id: u64,
) -> Result<&'a str, OsmError> {
    tag(tags, key).ok_or_else(|| {
        let mut available: Vec<&str> = tags.keys().map(String::as_str).collect();
        available.sort_unstable();
        warn!(
            "OSM node {} is missing required field: '{}'. Available tags: {:?}",
            node_id, key, available
        );
        OsmError::MissingField {
            node_id,
            field: key,
        }
    })
}

fn resolve_name(tags: &HashMap<String, String>) -> Option<&str> {
    NAME_PRIORITY.iter().find_map(|key| tag(tags, key))
}
