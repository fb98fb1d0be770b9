pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::middleware::jwt_auth_middleware;
use state::AppState;

/// Start the HTTP gateway
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    let jwt = |state: &Arc<AppState>| from_fn_with_state(state.clone(), jwt_auth_middleware);

    // ==========================================================================
    // Auth routes: register/login public, logout needs a live token
    // ==========================================================================
    let auth_routes = Router::new()
        .route("/register", post(crate::auth::handlers::register))
        .route("/login", post(crate::auth::handlers::login))
        .route(
            "/logout",
            post(crate::auth::handlers::logout).layer(jwt(&state)),
        );

    // ==========================================================================
    // User management - JWT, policy-checked per handler
    // ==========================================================================
    let user_routes = Router::new()
        .route("/", get(handlers::users::list_users))
        .route(
            "/{user_id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route("/{user_id}/promote", post(handlers::users::promote_user))
        .layer(jwt(&state));

    // ==========================================================================
    // Catalog - reads public, mutations JWT + ManageProducts.
    // The JWT layer goes on the mutating method routers only.
    // ==========================================================================
    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::products::list_products)
                .merge(post(handlers::products::create_product).layer(jwt(&state))),
        )
        .route(
            "/{product_id}",
            get(handlers::products::get_product).merge(
                put(handlers::products::update_product)
                    .delete(handlers::products::delete_product)
                    .layer(jwt(&state)),
            ),
        );

    let cart_routes = Router::new()
        .route("/", get(handlers::cart::list_cart))
        .route("/add", post(handlers::cart::add_to_cart))
        .route("/update/{product_id}", put(handlers::cart::update_quantity))
        .route(
            "/remove/{product_id}",
            delete(handlers::cart::remove_from_cart),
        )
        .route("/clear", delete(handlers::cart::clear_cart))
        .layer(jwt(&state));

    let order_routes = Router::new()
        .route("/create", post(handlers::orders::create_order))
        .route("/history", get(handlers::orders::order_history))
        .route("/track/{order_id}", get(handlers::orders::track_order))
        .route(
            "/update/{order_id}",
            put(handlers::orders::update_order_status),
        )
        .layer(jwt(&state));

    let payment_routes = Router::new()
        .route("/checkout", post(handlers::payments::checkout))
        .route("/history", get(handlers::payments::payment_history))
        .layer(jwt(&state));

    let analytics_routes = Router::new()
        .route("/summary", get(handlers::analytics::sales_summary))
        .route("/top-products", get(handlers::analytics::top_products))
        .layer(jwt(&state));

    // Build complete router
    let app = Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/users", user_routes)
        .nest("/api/v1/products", product_routes)
        .nest("/api/v1/cart", cart_routes)
        .nest("/api/v1/order", order_routes)
        .nest("/api/v1/payment", payment_routes)
        .nest("/api/v1/analytics", analytics_routes)
        .with_state(state)
        // Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Gateway listening on http://{}", addr);
    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
