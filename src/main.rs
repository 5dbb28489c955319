mod clients;
mod config;
mod net;
mod osm_client;
mod osm_processing;
mod types;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use config::AppConfig;
use net::response::{ResponseError, Result};
use osm_client::OsmClient;
use osm_processing::OsmDataService;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use types::model::osm_node::OsmNode;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    info!("Using OSM API at {}", config.osm_api_url);
    let osm_service = clients::init_osm_service(&config)?;

    let app = app(Arc::new(osm_service));

    info!("Running on {}", config.bind_addr);

    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn app<C>(osm_service: Arc<OsmDataService<C>>) -> Router
where
    C: OsmClient + 'static,
{
    Router::new()
        .route("/osm/nodes/:node_id", get(get_osm_node::<C>))
        .layer(CorsLayer::permissive())
        .with_state(osm_service)
}

#[instrument(skip(osm_service))]
async fn get_osm_node<C: OsmClient>(
    State(osm_service): State<Arc<OsmDataService<C>>>,
    Path(node_id): Path<u64>,
) -> Result<Json<OsmNode>> {
    let node = osm_service
        .fetch_node(node_id)
        .await
        .map_err(ResponseError::osm)?;
    Ok(Json(node))
}
