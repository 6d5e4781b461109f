//! HTTP API tests against an in-process server.

use std::sync::Arc;

use ecourts_scraper::api::{router, AppState};
use ecourts_scraper::Config;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestApi {
    base: String,
    client: reqwest::Client,
    _output: TempDir,
    output_dir: std::path::PathBuf,
}

impl TestApi {
    async fn start(portal_url: String) -> Self {
        let output = TempDir::new().unwrap();
        let output_dir = output.path().to_path_buf();
        let config = Config {
            portal_url,
            output_dir: output_dir.clone(),
            ..Default::default()
        };
        let app = router(AppState {
            config: Arc::new(config),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            client: reqwest::Client::new(),
            _output: output,
            output_dir,
        }
    }

    async fn get(&self, route: &str) -> (u16, Value) {
        let response = self
            .client
            .get(format!("{}{route}", self.base))
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }

    async fn post(&self, route: &str, body: Value) -> (u16, Value) {
        let response = self
            .client
            .post(format!("{}{route}", self.base))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

async fn mock_portal() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>eCourts Services</title></head><body>
                 <form action="/search" method="post">
                   <input name="cino"><input name="fcaptcha_code">
                 </form>
                 <img src="/captcha.php" alt="captcha image">
               </body></html>"#,
        ))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_health() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_api_docs() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api.get("/api").await;
    assert_eq!(status, 200);
    assert_eq!(body["endpoints"]["search_by_cnr"], "POST /search/cnr");
}

#[tokio::test]
async fn test_cnr_validation_errors() {
    let api = TestApi::start(closed_port_url()).await;

    let (status, body) = api.post("/search/cnr", json!({"date": "today"})).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "CNR is required"}));

    let (status, body) = api.post("/search/cnr", json!({"cnr": "SHORT"})).await;
    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Invalid CNR format"}));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let api = TestApi::start(closed_port_url()).await;
    let response = api
        .client
        .post(format!("{}/search/cnr", api.base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_demo_cnr_is_saved() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api
        .post("/search/cnr", json!({"cnr": "DEMO123", "date": "tomorrow"}))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["demo_data"], true);
    assert_eq!(body["data"]["status"], "case_found");
    assert_eq!(body["data"]["case_details"]["case_number"], "DEMO/123/2024");
    assert_eq!(body["search_params"]["cnr"], "DEMO123");

    let saved = body["saved_to_file"].as_str().unwrap();
    assert!(std::path::Path::new(saved).starts_with(&api.output_dir));
    assert!(std::path::Path::new(saved).exists());
}

#[tokio::test]
async fn test_captcha_required_is_not_saved() {
    let portal = mock_portal().await;
    let api = TestApi::start(format!("{}/", portal.uri())).await;

    let (status, body) = api
        .post("/search/cnr", json!({"cnr": "DLCT010012342023"}))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body["captcha_required"], true);
    assert_eq!(body["data"]["status"], "captcha_required");
    assert_eq!(body["data"]["captcha_url"], format!("{}/captcha.php", portal.uri()));
    assert!(body.get("saved_to_file").is_none());
    assert_eq!(std::fs::read_dir(&api.output_dir).map(|d| d.count()).unwrap_or(0), 0);
}

#[tokio::test]
async fn test_unreachable_portal_is_500() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api
        .post("/search/cnr", json!({"cnr": "DLCT010012342023"}))
        .await;
    assert_eq!(status, 500);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to connect to eCourts"));
}

#[tokio::test]
async fn test_case_search() {
    let portal = mock_portal().await;
    let api = TestApi::start(format!("{}/", portal.uri())).await;

    let (status, body) = api
        .post(
            "/search/case",
            json!({"case_type": "CRL", "case_number": "12345", "case_year": 2023}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "connected");
    assert_eq!(body["data"]["page_title"], "eCourts Services");
    assert_eq!(body["search_params"]["case_year"], "2023");
}

#[tokio::test]
async fn test_case_search_rejects_bad_year() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api
        .post(
            "/search/case",
            json!({"case_type": "CRL", "case_number": "12345", "case_year": "1949"}),
        )
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid case details");
}

#[tokio::test]
async fn test_demo_cause_list() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api.get("/causelist/Demo%20Court/16-10-2026").await;

    assert_eq!(status, 200);
    assert_eq!(body["demo_data"], true);
    assert_eq!(body["data"]["status"], "connected");
    assert_eq!(body["data"]["date"], "16-10-2026");
    assert_eq!(body["data"]["sample_cases"].as_array().unwrap().len(), 5);
    assert!(body["saved_to_file"]
        .as_str()
        .unwrap()
        .ends_with("causelist_Demo_Court_16-10-2026.json"));
}

#[tokio::test]
async fn test_cause_list_rejects_bad_date() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api.get("/causelist/demo/2026-10-16").await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("DD-MM-YYYY"));
}

#[tokio::test]
async fn test_cause_list_for_unreachable_portal_is_500() {
    let api = TestApi::start(closed_port_url()).await;
    let (status, body) = api.get("/causelist/District%20Court/16-10-2026").await;
    assert_eq!(status, 500);
    assert!(body["error"].is_string());
}
