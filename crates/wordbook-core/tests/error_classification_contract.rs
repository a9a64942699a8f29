//! Contract test: error classification at each stage
//!
//! Verifies the failure taxonomy the orchestrator surfaces:
//!
//! - configuration errors short-circuit before any network call
//! - transport failure, non-2xx status, and failing envelopes map to the
//!   network, HTTP-status, and business classes with their stage attached
//! - a failed fetch means submit never runs
//!
//! If this test fails, callers can no longer tell failure modes apart.

mod common;

use chrono::NaiveDate;
use common::*;
use serde_json::json;
use wordbook_core::{ApiKind, Collector, ConfigError, Credentials, Error, Stage};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let mut config = minimal_config();
    config.credentials = Credentials::new("", "1234");

    let (transport, requests) = ScriptedTransport::new(vec![]);
    let collector = Collector::new(config, Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Config(ConfigError::MissingToken)));
    assert_eq!(err.stage(), None);
    assert_eq!(requests.lock().unwrap().len(), 0, "no network call expected");
}

#[tokio::test]
async fn missing_notebook_fails_before_any_request() {
    let mut config = minimal_config();
    config.credentials = Credentials::new("abc", "");

    let (transport, requests) = ScriptedTransport::new(vec![]);
    let collector = Collector::new(config, Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Config(ConfigError::MissingNotebook)));
    assert_eq!(requests.lock().unwrap().len(), 0, "no network call expected");
}

#[tokio::test]
async fn fetch_http_401_short_circuits_submit() {
    let (transport, requests) = ScriptedTransport::new(vec![Outcome::Respond {
        status: 401,
        body: json!({ "msg": "unauthorized" }),
    }]);
    let collector = Collector::new(minimal_config(), Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
    assert_eq!(err.stage(), Some(Stage::Fetch));
    assert!(err.to_string().contains("401"));
    assert_eq!(requests.lock().unwrap().len(), 1, "submit must not run");
}

#[tokio::test]
async fn fetch_transport_failure_is_network_class() {
    let (transport, _requests) =
        ScriptedTransport::new(vec![Outcome::Fail("connection refused".to_string())]);
    let collector = Collector::new(minimal_config(), Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Network { .. }));
    assert_eq!(err.stage(), Some(Stage::Fetch));
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn fetch_business_failure_carries_the_service_reason() {
    let (transport, requests) = ScriptedTransport::new(vec![Outcome::Respond {
        status: 200,
        body: json!({ "success": false, "msg": "notepad not found" }),
    }]);
    let collector = Collector::new(minimal_config(), Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Business { .. }));
    assert!(err.to_string().contains("notepad not found"));
    assert_eq!(requests.lock().unwrap().len(), 1, "submit must not run");
}

#[tokio::test]
async fn missing_notepad_in_envelope_is_business_class() {
    let (transport, _requests) = ScriptedTransport::new(vec![Outcome::Respond {
        status: 200,
        body: json!({ "success": true, "data": {} }),
    }]);
    let collector = Collector::new(minimal_config(), Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Business { .. }));
    assert_eq!(err.stage(), Some(Stage::Fetch));
}

#[tokio::test]
async fn submit_failure_is_reported_with_submit_stage() {
    let (transport, requests) = ScriptedTransport::new(vec![
        Outcome::Respond {
            status: 200,
            body: fetch_envelope(""),
        },
        Outcome::Respond {
            status: 500,
            body: json!("internal error"),
        },
    ]);
    let collector = Collector::new(minimal_config(), Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert_eq!(err.stage(), Some(Stage::Submit));
    assert_eq!(requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn submit_envelope_rejection_is_business_class() {
    let (transport, _requests) = ScriptedTransport::new(vec![
        Outcome::Respond {
            status: 200,
            body: fetch_envelope(""),
        },
        Outcome::Respond {
            status: 200,
            body: json!({ "success": false, "msg": "quota exceeded" }),
        },
    ]);
    let collector = Collector::new(minimal_config(), Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Business { .. }));
    assert_eq!(err.stage(), Some(Stage::Submit));
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn vocabulary_nonzero_code_is_business_class() {
    let mut config = minimal_config();
    config.api = ApiKind::Vocabulary;

    let (transport, _requests) = ScriptedTransport::new(vec![Outcome::Respond {
        status: 200,
        body: json!({ "code": 1101, "msg": "word already collected" }),
    }]);
    let collector = Collector::new(config, Box::new(transport));

    let err = collector
        .collect_on("dog", day(2024, 1, 1))
        .await
        .expect_err("collect must fail");

    assert!(matches!(err, Error::Business { .. }));
    assert_eq!(err.stage(), Some(Stage::Vocabulary));
    assert!(err.to_string().contains("word already collected"));
}
