use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;
use wayfinder_core::RecordId;
use wayfinder_resolver::{MemoryResolver, Resolver, ResolverError};
use wayfinder_server::{App, AppState, DataUriTemplate};

const TEMPLATE: &str = "https://raw.githubusercontent.com/sfomuseum-data/{repo}/main/data";

fn app(resolver: Arc<dyn Resolver>) -> Router {
    let template = DataUriTemplate::parse(TEMPLATE).unwrap();
    let state = AppState::builder()
        .resolver(resolver)
        .template(template)
        .build();
    App::router(state)
}

fn seeded_app() -> Router {
    let resolver = MemoryResolver::new();
    resolver.insert(RecordId::new(1360391327), "sfomuseum-data-maps");
    app(Arc::new(resolver))
}

async fn get(router: Router, path: &str) -> Response {
    router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn known_identifier_redirects() {
    let response = get(seeded_app(), "/1360391327").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "https://raw.githubusercontent.com/sfomuseum-data/sfomuseum-data-maps/main/data/136/039/132/7/1360391327.geojson"
    );
}

#[tokio::test]
async fn full_data_path_redirects() {
    let response = get(seeded_app(), "/136/039/132/7/1360391327.geojson").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "https://raw.githubusercontent.com/sfomuseum-data/sfomuseum-data-maps/main/data/136/039/132/7/1360391327.geojson"
    );
}

#[tokio::test]
async fn alternate_geometry_redirects() {
    let response = get(seeded_app(), "/1360391327-alt-quattroshapes.geojson").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "https://raw.githubusercontent.com/sfomuseum-data/sfomuseum-data-maps/main/data/136/039/132/7/1360391327-alt-quattroshapes.geojson"
    );
}

#[tokio::test]
async fn malformed_path_is_bad_request() {
    let response = get(seeded_app(), "/index.html").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_identifier_is_not_found() {
    let response = get(seeded_app(), "/99999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[derive(Debug)]
struct FailingResolver;

#[async_trait::async_trait]
impl Resolver for FailingResolver {
    async fn get_repo(&self, _id: RecordId) -> Result<String, ResolverError> {
        Err(ResolverError::Backend("connection reset".to_string()))
    }
}

#[tokio::test]
async fn backend_failure_is_internal_error() {
    let response = get(app(Arc::new(FailingResolver)), "/1360391327").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn unsupported_qualifier_is_internal_error() {
    let response = get(seeded_app(), "/1360391327-display.geojson").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn favicon_never_reaches_the_parser() {
    let response = get(seeded_app(), "/favicon.ico").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn health_endpoint() {
    let response = get(seeded_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}
