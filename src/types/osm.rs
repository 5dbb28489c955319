use std::collections::HashMap;

use serde::Deserialize;

/// Body of `GET /api/0.6/node/{id}`.
#[derive(Deserialize, Debug)]
pub struct OsmResponse {
    pub node: OsmXmlNode,
}

#[derive(Deserialize, Debug)]
pub struct OsmXmlNode {
    #[serde(rename = "@id")]
    pub id: u64,
    #[serde(rename = "tag", default)]
    pub tags: Vec<OsmTag>,
}

#[derive(Deserialize, Debug)]
pub struct OsmTag {
    #[serde(rename = "@k")]
    pub key: String,
    #[serde(rename = "@v")]
    pub value: String,
}

impl OsmResponse {
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::de::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// Tags of the node keyed by tag name. OSM keys are unique per element,
    /// if a document repeats one the last value wins.
    pub fn tags(self) -> HashMap<String, String> {
        self.node
            .tags
            .into_iter()
            .map(|tag| (tag.key, tag.value))
            .collect()
    }
}
