//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::gateway::handlers::HealthResponse;
use crate::gateway::handlers::cart::{AddToCartRequest, UpdateQuantityRequest};
use crate::gateway::handlers::orders::{
    PlaceOrderResponse, UpdateStatusRequest, UpdateStatusResponse,
};
use crate::gateway::handlers::payments::CheckoutRequest;
use crate::gateway::handlers::products::{CreateProductRequest, UpdateProductRequest};
use crate::gateway::handlers::users::UpdateProfileRequest;
use crate::orders::service::{OrderItemView, OrderView, TrackingView};
use crate::store::analytics::{SalesSummary, TopProduct};
use crate::store::cart::CartLineView;
use crate::store::models::{Payment, Product, UserProfile};

/// Bearer JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some(
                            "JWT issued by /api/v1/auth/login; revoked by /api/v1/auth/logout",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "UniShop API",
        version = "1.0.0",
        description = "E-commerce REST backend: accounts, catalog, cart, orders, payments, analytics.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        // Auth
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::logout,
        // Users
        crate::gateway::handlers::users::list_users,
        crate::gateway::handlers::users::get_user,
        crate::gateway::handlers::users::update_user,
        crate::gateway::handlers::users::delete_user,
        crate::gateway::handlers::users::promote_user,
        // Catalog
        crate::gateway::handlers::products::list_products,
        crate::gateway::handlers::products::get_product,
        crate::gateway::handlers::products::create_product,
        crate::gateway::handlers::products::update_product,
        crate::gateway::handlers::products::delete_product,
        // Cart
        crate::gateway::handlers::cart::list_cart,
        crate::gateway::handlers::cart::add_to_cart,
        crate::gateway::handlers::cart::update_quantity,
        crate::gateway::handlers::cart::remove_from_cart,
        crate::gateway::handlers::cart::clear_cart,
        // Orders
        crate::gateway::handlers::orders::create_order,
        crate::gateway::handlers::orders::order_history,
        crate::gateway::handlers::orders::track_order,
        crate::gateway::handlers::orders::update_order_status,
        // Payments
        crate::gateway::handlers::payments::checkout,
        crate::gateway::handlers::payments::payment_history,
        // Analytics
        crate::gateway::handlers::analytics::sales_summary,
        crate::gateway::handlers::analytics::top_products,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UserProfile,
            UpdateProfileRequest,
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            CartLineView,
            AddToCartRequest,
            UpdateQuantityRequest,
            PlaceOrderResponse,
            UpdateStatusRequest,
            UpdateStatusResponse,
            OrderView,
            OrderItemView,
            TrackingView,
            CheckoutRequest,
            Payment,
            SalesSummary,
            TopProduct,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration, login, logout"),
        (name = "Users", description = "Profile management (self or admin)"),
        (name = "Catalog", description = "Product catalog; mutations are admin-only"),
        (name = "Cart", description = "Per-user shopping cart"),
        (name = "Orders", description = "Order placement and lifecycle"),
        (name = "Payments", description = "Payment capture for pending orders"),
        (name = "Analytics", description = "Sales aggregates (admin-only)"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "UniShop API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        let json_str = json.unwrap();
        assert!(json_str.contains("UniShop API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(paths.paths.contains_key("/api/v1/auth/register"));
        assert!(paths.paths.contains_key("/api/v1/products"));
        assert!(paths.paths.contains_key("/api/v1/order/create"));
        assert!(paths.paths.contains_key("/api/v1/order/track/{order_id}"));
        assert!(paths.paths.contains_key("/api/v1/payment/checkout"));
        assert!(paths.paths.contains_key("/api/v1/analytics/summary"));
    }

    #[test]
    fn test_security_scheme_registered() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("should have components");
        assert!(components.security_schemes.contains_key("bearer_jwt"));
    }
}
