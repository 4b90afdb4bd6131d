//! Concurrent check-ins against one target file.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::StatusCode;
use regex::Regex;

use helpers::TestApp;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_fifty_concurrent_checkins_produce_fifty_clean_lines() {
    let app = Arc::new(TestApp::new());
    let note = "n".repeat(256);

    let requests = (0..50).map(|i| {
        let app = Arc::clone(&app);
        let body = format!(
            "hostname=host{i:02}&intip=10.0.0.{i}&extip=203.0.113.{i}&mydate=2024-01-01&note={note}"
        );
        tokio::spawn(async move { app.post_form("/log-ips.php", &body).await })
    });

    for response in futures::future::join_all(requests).await {
        let response = response.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.ends_with(" bytes written to file"));
    }

    let contents = app.target_contents().unwrap();
    let pattern = Regex::new(&format!(
        r"^\d{{14}}:host(\d\d):10\.0\.0\.\d+:203\.0\.113\.\d+:2024-01-01:{note}$"
    ))
    .unwrap();

    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 50);

    let hosts: HashSet<String> = lines
        .iter()
        .map(|line| {
            let caps = pattern
                .captures(line)
                .unwrap_or_else(|| panic!("corrupted line: {line:?}"));
            caps[1].to_string()
        })
        .collect();
    assert_eq!(hosts.len(), 50);
}
