use std::net::SocketAddr;

use anyhow::Context;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQL, GraphQLSubscription};
use axum::{
    http::header::CONTENT_TYPE,
    http::Method,
    response::Html,
    routing::get,
    Router,
};
use dotenvy::dotenv;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod fixtures;
mod graphql;

use crate::config::AppConfig;
use crate::graphql::schema::build_schema;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = AppConfig::load()?;

    let schema = build_schema();

    let allowed_origins: Vec<axum::http::HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(config.cors.allow_credentials);

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema.clone())))
        .route_service("/ws", GraphQLSubscription::new(schema))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port)
        .parse()
        .context("invalid bind address")?;
    tracing::info!(%addr, "mock data index ready at http://localhost:{}/graphql", config.server.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind listener")?;
    axum::serve(listener, app).await.context("serve app")?;
    Ok(())
}

async fn health_check() -> &'static str {
    "ok"
}

async fn graphiql() -> Html<String> {
    let html = playground_source(GraphQLPlaygroundConfig::new("/graphql").subscription_endpoint("/ws"));
    Html(html)
}
