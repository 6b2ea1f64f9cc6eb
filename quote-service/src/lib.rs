pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use axum::{
    Json, Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
};
use service_core::error::AppError;
use service_core::middleware::{
    create_ip_rate_limiter, ip_rate_limit_middleware, request_id_middleware,
    security_headers_middleware,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::SecurityScheme,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::QuoteConfig;
use crate::services::{AccessGate, DedupService, KeyService, QuoteService, SessionService};
use crate::store::KeyValueStore;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        handlers::quotes::random_reply,
        handlers::quotes::add_quote,
        handlers::maintenance::dedup,
        handlers::admin::login,
        handlers::admin::create_key,
        handlers::admin::list_keys,
        handlers::admin::revoke_key,
        handlers::admin::list_quotes,
        handlers::admin::update_quote,
        handlers::admin::delete_quote,
    ),
    components(
        schemas(
            dtos::ErrorResponse,
            dtos::quote::AddQuoteRequest,
            dtos::quote::UpdateQuoteRequest,
            dtos::quote::RandomQuoteResponse,
            dtos::quote::QuoteListResponse,
            dtos::quote::DedupResponse,
            dtos::admin::LoginRequest,
            dtos::admin::LoginResponse,
            dtos::admin::CreateKeyRequest,
            dtos::admin::KeyInfo,
            dtos::admin::KeyListResponse,
            models::Quote,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Quotes", description = "Public quote wall"),
        (name = "Admin", description = "Administrator login and curation"),
        (name = "Maintenance", description = "On-demand housekeeping"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .build(),
                ),
            );
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: QuoteConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub quotes: QuoteService,
    pub dedup: DedupService,
    pub keys: KeyService,
    pub sessions: SessionService,
    pub gate: AccessGate,
    pub login_rate_limiter: service_core::middleware::rate_limit::IpRateLimiter,
    pub submit_rate_limiter: service_core::middleware::rate_limit::IpRateLimiter,
}

impl AppState {
    /// Wire every service onto one store handle. The store is the only
    /// stateful collaborator; services are cheap clones around it.
    pub fn new(config: QuoteConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let quotes = QuoteService::new(store.clone());
        let dedup = DedupService::new(store.clone());
        let keys = KeyService::new(store.clone());
        let sessions = SessionService::new(
            store.clone(),
            config.security.admin_password.clone(),
            config.security.session_ttl_minutes,
        );
        let gate = AccessGate::new(keys.clone(), sessions.clone());

        let login_rate_limiter = create_ip_rate_limiter(
            config.rate_limit.login_attempts,
            config.rate_limit.login_window_seconds,
        );
        let submit_rate_limiter = create_ip_rate_limiter(
            config.rate_limit.submit_attempts,
            config.rate_limit.submit_window_seconds,
        );

        Self {
            config,
            store,
            quotes,
            dedup,
            keys,
            sessions,
            gate,
            login_rate_limiter,
            submit_rate_limiter,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Everything under /api/admin except login sits behind the session check
    let admin_routes = Router::new()
        .route(
            "/api/admin/keys",
            post(handlers::admin::create_key).get(handlers::admin::list_keys),
        )
        .route("/api/admin/keys/:key", delete(handlers::admin::revoke_key))
        .route("/api/admin/quotes", get(handlers::admin::list_quotes))
        .route(
            "/api/admin/quotes/:id",
            put(handlers::admin::update_quote).delete(handlers::admin::delete_quote),
        )
        .layer(from_fn_with_state(
            state.clone(),
            middleware::admin_auth_middleware,
        ));

    let login_limiter = state.login_rate_limiter.clone();
    let login_route = Router::new()
        .route("/api/admin/login", post(handlers::admin::login))
        .layer(from_fn_with_state(login_limiter, ip_rate_limit_middleware));

    let submit_limiter = state.submit_rate_limiter.clone();
    let submit_route = Router::new()
        .route("/api/add", post(handlers::quotes::add_quote))
        .layer(from_fn_with_state(submit_limiter, ip_rate_limit_middleware));

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/api/reply", get(handlers::quotes::random_reply))
        .route("/api/dedup", post(handlers::maintenance::dedup));

    if state.config.swagger.enabled == config::SwaggerMode::Public {
        app = app.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    } else {
        // keep the OpenAPI document reachable for tooling even with the UI off
        app = app.route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    // "*" keeps the wall answerable from anywhere; a restricted deployment
    // lists explicit origins instead
    let cors = if state
        .config
        .security
        .allowed_origins
        .iter()
        .any(|o| o == "*")
    {
        CorsLayer::new().allow_origin(Any)
    } else {
        CorsLayer::new().allow_origin(
            state
                .config
                .security
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect::<Vec<axum::http::HeaderValue>>(),
        )
    };
    let cors = cors
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    app.merge(login_route)
        .merge(submit_route)
        .merge(admin_routes)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
}

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 500, description = "Store unreachable")
    ),
    tag = "Observability"
)]
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.store.health_check().await.map_err(|e| {
        tracing::error!(error = %e, "Store health check failed");
        AppError::StoreError(e)
    })?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": state.config.service_name,
        "version": state.config.service_version,
        "checks": {
            "store": "up"
        }
    })))
}
