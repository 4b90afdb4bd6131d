//! Integration tests for the check-in endpoint.

mod helpers;

use axum::http::StatusCode;
use regex::Regex;

use helpers::{TestApp, VALID_FORM};

fn record_pattern() -> Regex {
    Regex::new(r"^\d{14}:.*:.*:.*:.*:.*\n$").unwrap()
}

#[tokio::test]
async fn test_valid_checkin_creates_file_with_one_line() {
    let app = TestApp::new();
    assert!(app.target_contents().is_none());

    let response = app.post_form("/log-ips.php", VALID_FORM).await;

    assert_eq!(response.status, StatusCode::OK);
    let contents = app.target_contents().expect("target file was not created");
    assert!(record_pattern().is_match(&contents), "bad record: {contents:?}");
    assert!(contents.ends_with(":srv1:10.0.0.5:203.0.113.9:2024-01-01:ok\n"));
    assert_eq!(contents.len(), 55);
    assert_eq!(response.body, "55 bytes written to file");
}

#[tokio::test]
async fn test_root_path_accepts_checkins() {
    let app = TestApp::new();

    let response = app.post_form("/", VALID_FORM).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "55 bytes written to file");
}

#[tokio::test]
async fn test_each_request_appends_a_line() {
    let app = TestApp::new();

    app.post_form("/log-ips.php", VALID_FORM).await;
    app.post_form("/log-ips.php", "hostname=srv2&intip=&extip=&mydate=&note=second")
        .await;

    let contents = app.target_contents().unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(":srv1:10.0.0.5:203.0.113.9:2024-01-01:ok"));
    assert!(lines[1].ends_with(":srv2::::second"));
}

#[tokio::test]
async fn test_empty_values_are_accepted() {
    let app = TestApp::new();

    let response = app
        .post_form("/log-ips.php", "hostname=&intip=&extip=&mydate=&note=")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let contents = app.target_contents().unwrap();
    assert!(Regex::new(r"^\d{14}:::::\n$").unwrap().is_match(&contents));
    assert_eq!(response.body, "20 bytes written to file");
}

#[tokio::test]
async fn test_missing_any_field_is_rejected_without_io() {
    let fields = ["hostname", "intip", "extip", "mydate", "note"];

    for missing in fields {
        let app = TestApp::new();
        let body = fields
            .iter()
            .filter(|f| **f != missing)
            .map(|f| format!("{f}=x"))
            .collect::<Vec<_>>()
            .join("&");

        let response = app.post_form("/log-ips.php", &body).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "missing {missing}");
        assert_eq!(response.body, "no post data to process");
        assert!(app.target_contents().is_none(), "file touched when {missing} absent");
    }
}

#[tokio::test]
async fn test_rejection_leaves_existing_file_untouched() {
    let app = TestApp::new();
    app.post_form("/log-ips.php", VALID_FORM).await;
    let before = app.target_contents().unwrap();

    let response = app.post_form("/log-ips.php", "hostname=srv1").await;

    assert_eq!(response.body, "no post data to process");
    assert_eq!(app.target_contents().unwrap(), before);
}

#[tokio::test]
async fn test_non_form_bodies_are_rejected() {
    let app = TestApp::new();

    let json = app
        .request(
            "POST",
            "/log-ips.php",
            Some("application/json"),
            r#"{"hostname":"srv1","intip":"a","extip":"b","mydate":"c","note":"d"}"#.to_string(),
        )
        .await;
    assert_eq!(json.status, StatusCode::BAD_REQUEST);
    assert_eq!(json.body, "no post data to process");

    let untyped = app
        .request("POST", "/log-ips.php", None, VALID_FORM.to_string())
        .await;
    assert_eq!(untyped.body, "no post data to process");

    assert!(app.target_contents().is_none());
}

#[tokio::test]
async fn test_get_is_treated_as_missing_post_data() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/log-ips.php?hostname=srv1", None, String::new())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "no post data to process");
    assert!(app.target_contents().is_none());
}

#[tokio::test]
async fn test_colons_are_stored_verbatim() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/log-ips.php",
            "hostname=srv1&intip=fe80%3A%3A1&extip=203.0.113.9&mydate=2024-01-01+10%3A30&note=ok",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let contents = app.target_contents().unwrap();
    assert!(contents.ends_with(":srv1:fe80::1:203.0.113.9:2024-01-01 10:30:ok\n"));
    assert_eq!(response.body, format!("{} bytes written to file", contents.len()));
}

#[tokio::test]
async fn test_multipart_checkin() {
    let app = TestApp::new();
    let boundary = "checkinboundary";
    let mut body = String::new();
    for (name, value) in [
        ("hostname", "srv3"),
        ("intip", "10.0.0.7"),
        ("extip", "203.0.113.11"),
        ("mydate", "2024-03-03"),
        ("note", "SCHEDULED"),
    ] {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));

    let response = app
        .request(
            "POST",
            "/log-ips.php",
            Some(&format!("multipart/form-data; boundary={boundary}")),
            body,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let contents = app.target_contents().unwrap();
    assert!(contents.ends_with(":srv3:10.0.0.7:203.0.113.11:2024-03-03:SCHEDULED\n"));
}

#[tokio::test]
async fn test_uncreatable_target_reports_create_error() {
    let app = TestApp::with_uncreatable_target();

    let response = app.post_form("/log-ips.php", VALID_FORM).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Can't create file");
    assert!(app.target_contents().is_none());
}

#[tokio::test]
async fn test_unwritable_target_reports_write_error() {
    let app = TestApp::new();
    std::fs::create_dir(&app.target).unwrap();

    let response = app.post_form("/log-ips.php", VALID_FORM).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "There was an error writing this file");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = checkin_core::config::AppConfig::default();
    config.server.max_body_bytes = 128;
    let app = TestApp::with_config(config);

    let body = format!("{VALID_FORM}&padding={}", "x".repeat(512));
    let response = app.post_form("/log-ips.php", &body).await;

    assert_eq!(response.body, "no post data to process");
    assert!(app.target_contents().is_none());
}

#[tokio::test]
async fn test_custom_route_and_target_name() {
    let mut config = checkin_core::config::AppConfig::default();
    config.server.route_path = "checkin".into();
    config.storage.target_file = "hosts.log".into();
    let app = TestApp::with_config(config);

    let response = app.post_form("/checkin", VALID_FORM).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(app.target.ends_with("hosts.log"));
    assert!(app.target_contents().is_some());

    let old_route = app.post_form("/log-ips.php", VALID_FORM).await;
    assert_eq!(old_route.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_utf8_value_is_rejected_not_rewritten() {
    let app = TestApp::new();

    let response = app
        .post_form("/log-ips.php", "hostname=%FF&intip=&extip=&mydate=&note=")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "no post data to process");
    assert!(app.target_contents().is_none());
}

#[tokio::test]
async fn test_multibyte_values_are_stored_byte_for_byte() {
    let app = TestApp::new();

    let response = app
        .post_form("/log-ips.php", "hostname=caf%C3%A9&intip=&extip=&mydate=&note=")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let raw = std::fs::read(&app.target).unwrap();
    assert!(raw.ends_with(b":caf\xc3\xa9::::\n"));
    assert_eq!(raw.len(), 14 + 5 + 5 + 1);
    assert_eq!(response.body, format!("{} bytes written to file", raw.len()));
}
