use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;
use trips::{
    config::AppConfig,
    db::{init_pool, Backend},
    services::store::{SqlTripStore, TripRepository},
    state::AppState,
};

const ADMIN_TOKEN: &str = "test-admin-token";

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn test_app(admin_token: Option<&str>) -> Result<(Router, TempDir), Box<dyn std::error::Error>> {
    let root = TempDir::new()?;
    let db_path = root.path().join("http.sqlite");
    let database_url = format!("sqlite://{}?mode=rwc", db_path.to_string_lossy());

    let config = AppConfig {
        database_url: database_url.clone(),
        backend: Backend::Sqlite,
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        public_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"),
        admin_token: admin_token.map(str::to_string),
    };

    let pool = init_pool(&config.database_url).await?;
    let store = SqlTripStore::new(pool, config.backend);
    store.ensure_schema().await?;

    let app = trips::routes::create_router(AppState::new(config, Arc::new(store)));
    Ok((app, root))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn admin_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-admin-token", token)
        .body(Body::empty())
        .expect("request")
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_text(response: axum::response::Response) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn index_and_create_form_render() -> TestResult {
    let (app, _root) = test_app(None).await?;

    let response = app.clone().oneshot(get("/")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains(r#"action="/add""#));

    let response = app.oneshot(get("/createTrip")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains(r#"action="/formTrip""#));
    Ok(())
}

#[tokio::test]
async fn form_trip_renders_day_count() -> TestResult {
    let (app, _root) = test_app(None).await?;

    let response = app
        .oneshot(post_form(
            "/formTrip",
            "tripName=X&departure=A&destination=B&startdate=2021-06-01&enddate=2021-06-05",
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains("days: 4"), "body was: {body}");
    assert!(body.contains("<dd>X</dd>"));
    Ok(())
}

#[tokio::test]
async fn form_trip_with_bad_dates_renders_empty_days() -> TestResult {
    let (app, _root) = test_app(None).await?;

    let response = app
        .oneshot(post_form("/formTrip", "tripName=Y&startdate=tomorrow"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains("days: </p>"));
    Ok(())
}

#[tokio::test]
async fn add_redirects_and_display_all_lists_rows() -> TestResult {
    let (app, _root) = test_app(None).await?;

    for name in ["Alps", "Coast"] {
        let response = app
            .clone()
            .oneshot(post_form(
                "/add",
                &format!("tripName={name}&departure=Here&destination=There&startdate=2022-01-01&enddate=2022-01-02"),
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/displayAll")
        );
    }

    let response = app.oneshot(get("/displayAll")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains(">Alps</a>"));
    assert!(body.contains(">Coast</a>"));
    assert!(body.contains("&quot;tripName&quot;"));
    Ok(())
}

#[tokio::test]
async fn find_decodes_path_and_handles_misses() -> TestResult {
    let (app, _root) = test_app(None).await?;

    app.clone()
        .oneshot(post_form(
            "/add",
            "tripName=Road+Trip&departure=Denver&destination=Moab&startdate=2022-05-01&enddate=2022-05-04",
        ))
        .await?;

    let response = app.clone().oneshot(get("/find/Road%20Trip")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains("<h1>Road Trip</h1>"));
    assert!(body.contains("Moab"));

    let response = app.oneshot(get("/find/nonexistent")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains(r#"<p class="empty"></p>"#));
    Ok(())
}

#[tokio::test]
async fn admin_endpoints_are_disabled_without_token() -> TestResult {
    let (app, _root) = test_app(None).await?;

    let response = app.clone().oneshot(get("/destroyAll")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = app.oneshot(admin_get("/createDB", "anything")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_endpoints_check_token() -> TestResult {
    let (app, _root) = test_app(Some(ADMIN_TOKEN)).await?;

    let response = app.clone().oneshot(get("/destroyAll")).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.clone().oneshot(admin_get("/destroyAll", "wrong")).await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.oneshot(admin_get("/createDB", ADMIN_TOKEN)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await?, "Database Created");
    Ok(())
}

#[tokio::test]
async fn destroy_all_empties_the_listing() -> TestResult {
    let (app, _root) = test_app(Some(ADMIN_TOKEN)).await?;

    app.clone()
        .oneshot(post_form("/add", "tripName=Temp&startdate=2022-01-01&enddate=2022-01-02"))
        .await?;

    let response = app.clone().oneshot(admin_get("/destroyAll", ADMIN_TOKEN)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await?, "destroy all");

    let response = app.oneshot(get("/displayAll")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await?;
    assert!(body.contains("No trips stored yet."));
    assert!(body.contains(r#"<pre class="dbresponse">[]</pre>"#));
    Ok(())
}

#[tokio::test]
async fn serves_static_files_or_404() -> TestResult {
    let (app, _root) = test_app(None).await?;

    let response = app.clone().oneshot(get("/style.css")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/missing.txt")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}
