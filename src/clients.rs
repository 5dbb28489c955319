use color_eyre::eyre::Result;

use crate::{config::AppConfig, osm_client::OsmApiClient, osm_processing::OsmDataService};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn init_reqwest_client(config: &AppConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.osm_timeout)
        .build()?)
}

pub fn init_osm_service(config: &AppConfig) -> Result<OsmDataService<OsmApiClient>> {
    let client = OsmApiClient::new(config.osm_api_url.clone(), init_reqwest_client(config)?);
    Ok(OsmDataService::new(client))
}
