//! End-to-end search flow against a mock portal.
//!
//! These tests run the full fetch, locate, submit and classify sequence over
//! `wiremock` servers; no real network access is needed.

use std::sync::Arc;

use ecourts_scraper::{CaseSearch, Config, OutcomeRecord, SearchOutcome, SearchRequest};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CNR: &str = "DLCT010012342023";
const DATE: &str = "16-10-2026";

fn search_for(server: &MockServer) -> CaseSearch {
    CaseSearch::new(Arc::new(Config {
        portal_url: format!("{}/", server.uri()),
        ..Default::default()
    }))
}

fn portal_page(method: &str) -> String {
    format!(
        r#"<html><head><title>eCourts Services</title></head><body>
          <form action="/cnr_status/searchByCNR" method="{method}">
            <input type="text" name="cino">
            <input type="text" name="fcaptcha_code">
            <input type="hidden" name="app_token" value="tok123">
          </form>
          <img src="/vendor/securimage/securimage_show.php" alt="Captcha">
        </body></html>"#
    )
}

async fn mount_portal(server: &MockServer, form_method: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "PHPSESSID=abc123; Path=/")
                .set_body_string(portal_page(form_method)),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_captcha_required_without_token() {
    let server = MockServer::start().await;
    mount_portal(&server, "get").await;

    let record = search_for(&server)
        .run(&SearchRequest::cnr(CNR, DATE))
        .await;

    let OutcomeRecord::VerificationRequired {
        captcha_url, date, ..
    } = record
    else {
        panic!("expected captcha_required, got {record:?}");
    };
    assert_eq!(date, DATE);
    assert_eq!(
        captcha_url,
        Some(format!("{}/vendor/securimage/securimage_show.php", server.uri()))
    );
}

#[tokio::test]
async fn test_get_submission_reuses_session_and_finds_case() {
    let server = MockServer::start().await;
    mount_portal(&server, "get").await;

    Mock::given(method("GET"))
        .and(path("/cnr_status/searchByCNR"))
        .and(query_param("cino", CNR))
        .and(query_param("fcaptcha_code", "X7K2"))
        .and(query_param("app_token", "tok123"))
        .and(header("cookie", "PHPSESSID=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><table>\
               <tr><th>Case Status</th><td>Pending</td></tr>\
               <tr><th>Court Number and Judge</th><td>12 - District Judge</td></tr>\
             </table></body></html>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest::cnr(CNR, DATE).with_verification_token(Some("X7K2".into()));
    let record = search_for(&server).run(&request).await;

    let OutcomeRecord::CaseFound {
        cnr, case_details, ..
    } = record
    else {
        panic!("expected case_found, got {record:?}");
    };
    assert_eq!(cnr, CNR);
    assert_eq!(case_details["case status"], "Pending");
    assert_eq!(case_details["court number and judge"], "12 - District Judge");
}

#[tokio::test]
async fn test_post_submission_with_wrong_captcha_fails_search() {
    let server = MockServer::start().await;
    mount_portal(&server, "POST").await;

    Mock::given(method("POST"))
        .and(path("/cnr_status/searchByCNR"))
        .and(body_string_contains(format!("cino={CNR}")))
        .and(body_string_contains("app_token=tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><style>.error { color: red; }</style></head>\
             <body><div class=\"error\">Invalid Captcha</div></body></html>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = search_for(&server).search_by_cnr(CNR, Some("WRONG")).await;
    assert_eq!(
        outcome,
        SearchOutcome::Classified(OutcomeRecord::SearchFailed {
            message: "Search failed: Invalid Captcha".to_string(),
            cnr: CNR.to_string(),
        })
    );
}

#[tokio::test]
async fn test_submission_error_status_is_reported() {
    let server = MockServer::start().await;
    mount_portal(&server, "post").await;
    Mock::given(method("POST"))
        .and(path("/cnr_status/searchByCNR"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = search_for(&server).search_by_cnr(CNR, Some("X7K2")).await;
    let SearchOutcome::Failed(message) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(message.starts_with("Search submission failed"));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_page_without_form_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Maintenance</body></html>"),
        )
        .mount(&server)
        .await;

    let record = search_for(&server)
        .run(&SearchRequest::cnr(CNR, DATE))
        .await;
    assert_eq!(
        record,
        OutcomeRecord::Error {
            message: "CNR search form not found on services page".to_string(),
            date: Some(DATE.to_string()),
        }
    );
}

#[tokio::test]
async fn test_portal_error_status_is_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let record = search_for(&server)
        .run(&SearchRequest::cnr(CNR, DATE))
        .await;
    let OutcomeRecord::ConnectionFailed { reason, .. } = record else {
        panic!("expected connection_failed, got {record:?}");
    };
    assert!(reason.contains("503"));
}

#[tokio::test]
async fn test_demo_cnr_needs_no_network() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let search = CaseSearch::new(Arc::new(Config {
        portal_url: format!("http://127.0.0.1:{port}/"),
        ..Default::default()
    }));
    let record = search.run(&SearchRequest::cnr("DEMO123", DATE)).await;

    let OutcomeRecord::CaseFound {
        case_details,
        demo_mode,
        ..
    } = record
    else {
        panic!("expected demo case, got {record:?}");
    };
    assert!(demo_mode);
    assert_eq!(case_details["case_number"], "DEMO/123/2024");
    assert_eq!(case_details["status"], "Pending");

    let record = search.run(&SearchRequest::cnr("DLCT010012342023", DATE)).await;
    assert_eq!(record.status(), "connection_failed");
}

#[tokio::test]
async fn test_case_details_search_reports_page_title() {
    let server = MockServer::start().await;
    mount_portal(&server, "post").await;

    let record = search_for(&server)
        .run(&SearchRequest::case_details("CRL", "12345", "2023", DATE))
        .await;
    assert_eq!(
        record,
        OutcomeRecord::Connected {
            message: "Successfully connected to eCourts website".to_string(),
            date: DATE.to_string(),
            website_status: "Connected to eCourts".to_string(),
            page_title: "eCourts Services".to_string(),
        }
    );
}

#[tokio::test]
async fn test_untitled_page_gets_default_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let outcome = search_for(&server)
        .search_by_case_details("CIV", "1", "2020")
        .await;
    assert_eq!(
        outcome,
        SearchOutcome::PortalReached {
            page_title: "eCourts Services".to_string()
        }
    );
}

#[tokio::test]
async fn test_cause_list_counts_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body>\
               <a href=\"/cl1\">Cause List</a>\
               <a href=\"/cl2\">Download cause list (PDF)</a>\
               <a href=\"/other\">Orders</a>\
             </body></html>",
        ))
        .mount(&server)
        .await;

    let report = search_for(&server)
        .cause_list("District Court Pune", DATE)
        .await
        .unwrap();
    assert_eq!(report.cause_list_links_found, 2);
    assert_eq!(report.court, "District Court Pune");
    assert!(!report.demo_mode);
    assert!(report.sample_cases.is_empty());
}
