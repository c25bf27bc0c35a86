use std::sync::Arc;

use anyhow::Result;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::health;
use crate::app_context::AppContext;
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let app_context = Arc::new(AppContext::new(db));
    let state = AppState {
        db: app_context.db().clone(),
        graphql_schema: build_schema(GraphQLContext::new(app_context)),
    };

    let cors = match cors_origin {
        Some("*") | None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // GraphQL endpoint and playground
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    tracing::debug!(errors = response.errors.len(), "GraphQL request completed");
    response.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
