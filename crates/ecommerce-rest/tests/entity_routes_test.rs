//! Router tests driving the full Axum stack with a mocked entity service.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use ecommerce_core::{
    CreateProductRequest, CreateUserRequest, EcommerceError, EcommerceResult, EntityId, Product,
    User,
};
use ecommerce_rest::{create_health_router, create_router};
use ecommerce_service::EntityService;
use http_body_util::BodyExt;
use mockall::{mock, predicate::eq};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub UserService {}

    #[async_trait]
    impl EntityService<User> for UserService {
        async fn create(&self, request: CreateUserRequest) -> EcommerceResult<User>;
        async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<User>>;
    }
}

mock! {
    pub ProductService {}

    #[async_trait]
    impl EntityService<Product> for ProductService {
        async fn create(&self, request: CreateProductRequest) -> EcommerceResult<Product>;
        async fn get_by_id(&self, id: EntityId) -> EcommerceResult<Option<Product>>;
    }
}

fn stored_user(id: i64, name: &str, email: &str) -> User {
    let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    User {
        id: EntityId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        created_at: ts,
        updated_at: ts,
    }
}

fn users_app(service: MockUserService) -> Router {
    create_router::<User>(Arc::new(service), "users")
}

fn products_app(service: MockProductService) -> Router {
    create_router::<Product>(Arc::new(service), "products")
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn error_body(error: &str, message: &str) -> Value {
    json!({ "error": error, "message": message })
}

// =============================================================================
// POST /api/v1/users
// =============================================================================

#[tokio::test]
async fn test_create_user_returns_201() {
    let mut service = MockUserService::new();
    service
        .expect_create()
        .withf(|req| req.name == "John Doe" && req.email == "john@example.com")
        .times(1)
        .returning(|req| Ok(stored_user(1, &req.name, &req.email)));

    let (status, body) = send(
        users_app(service),
        Method::POST,
        "/api/v1/users",
        Some(r#"{"name":"John Doe","email":"john@example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["created_at"], "2024-01-02T03:04:05Z");
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[tokio::test]
async fn test_create_without_content_type_is_accepted() {
    let mut service = MockUserService::new();
    service
        .expect_create()
        .times(1)
        .returning(|req| Ok(stored_user(2, &req.name, &req.email)));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/users")
        .body(Body::from(r#"{"name":"Jane","email":"jane@example.com"}"#))
        .unwrap();
    let response = users_app(service).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let mut service = MockUserService::new();
    service.expect_create().times(0);

    let (status, body) = send(
        users_app(service),
        Method::POST,
        "/api/v1/users",
        Some(r#"{"name": "John""#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body("Bad Request", "Invalid JSON"));
}

#[tokio::test]
async fn test_create_failure_returns_500() {
    let mut service = MockUserService::new();
    service
        .expect_create()
        .times(1)
        .returning(|_| Err(EcommerceError::Database("connection refused".to_string())));

    let (status, body) = send(
        users_app(service),
        Method::POST,
        "/api/v1/users",
        Some(r#"{"name":"John Doe","email":"john@example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, error_body("Internal Server Error", "Failed to create user"));
}

#[tokio::test]
async fn test_duplicate_email_is_reported_as_server_failure() {
    let mut service = MockUserService::new();
    service
        .expect_create()
        .returning(|_| Err(EcommerceError::Conflict("duplicate key".to_string())));

    let (status, _) = send(
        users_app(service),
        Method::POST,
        "/api/v1/users",
        Some(r#"{"name":"John Doe","email":"john@example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_wrong_method_on_collection_returns_405() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (status, body) = send(
            users_app(MockUserService::new()),
            method,
            "/api/v1/users",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, error_body("Method Not Allowed", "Method not allowed"));
    }
}

// =============================================================================
// GET /api/v1/users/:id
// =============================================================================

#[tokio::test]
async fn test_get_user_returns_200() {
    let mut service = MockUserService::new();
    service
        .expect_get_by_id()
        .with(eq(EntityId::new(1)))
        .times(1)
        .returning(|id| Ok(Some(stored_user(id.into_inner(), "John Doe", "john@example.com"))));

    let (status, body) = send(users_app(service), Method::GET, "/api/v1/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "John Doe");
}

#[tokio::test]
async fn test_get_user_not_found_returns_404() {
    let mut service = MockUserService::new();
    service.expect_get_by_id().returning(|_| Ok(None));

    let (status, body) = send(users_app(service), Method::GET, "/api/v1/users/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, error_body("Not Found", "User not found"));
}

#[tokio::test]
async fn test_get_user_with_invalid_id_returns_400() {
    for uri in ["/api/v1/users/abc", "/api/v1/users/"] {
        let mut service = MockUserService::new();
        service.expect_get_by_id().times(0);

        let (status, body) = send(users_app(service), Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, error_body("Bad Request", "Invalid user ID"));
    }
}

#[tokio::test]
async fn test_get_user_failure_returns_500() {
    let mut service = MockUserService::new();
    service
        .expect_get_by_id()
        .returning(|_| Err(EcommerceError::Database("connection refused".to_string())));

    let (status, body) = send(users_app(service), Method::GET, "/api/v1/users/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, error_body("Internal Server Error", "Failed to get user"));
}

#[tokio::test]
async fn test_wrong_method_on_item_returns_405() {
    let (status, body) = send(
        users_app(MockUserService::new()),
        Method::DELETE,
        "/api/v1/users/1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn test_responses_are_json() {
    let mut service = MockUserService::new();
    service.expect_get_by_id().returning(|_| Ok(None));

    let request = Request::builder()
        .uri("/api/v1/users/5")
        .body(Body::empty())
        .unwrap();
    let response = users_app(service).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_create_product_returns_201() {
    let mut service = MockProductService::new();
    service.expect_create().times(1).returning(|req| {
        Ok(Product {
            id: EntityId::new(10),
            ..Product::new(req.name, req.description, req.price)
        })
    });

    let (status, body) = send(
        products_app(service),
        Method::POST,
        "/api/v1/products",
        Some(r#"{"name":"Gaming Mouse","description":"Wireless","price":79.99}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 10);
    assert!((body["price"].as_f64().unwrap() - 79.99).abs() < 1e-9);
}

#[tokio::test]
async fn test_product_messages_use_product_kind() {
    let mut service = MockProductService::new();
    service.expect_get_by_id().returning(|_| Ok(None));
    let app = products_app(service);

    let (status, body) = send(app.clone(), Method::GET, "/api/v1/products/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");

    let (status, body) = send(app, Method::GET, "/api/v1/products/xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product ID");
}

#[tokio::test]
async fn test_user_routes_absent_from_products_service() {
    let (status, body) = send(
        products_app(MockProductService::new()),
        Method::GET,
        "/api/v1/users/1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = users_app(MockUserService::new());
    let (status, body) = send(app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "service": "users", "status": "ok" }));
}

#[tokio::test]
async fn test_gateway_health_router() {
    let app = create_health_router("gateway");

    let (status, body) = send(app.clone(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "service": "gateway", "status": "ok" }));

    let (status, _) = send(app, Method::GET, "/api/v1/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
