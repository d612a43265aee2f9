use std::fs;
use tracing::{error, info};

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const CURRENCIES: &str = r#"{
        "AUD": "Australian Dollar",
        "EUR": "Euro",
        "USD": "United States Dollar"
    }"#;

    pub async fn create_mock_server() -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CURRENCIES))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"amount": 1.0, "base": "AUD", "date": "2024-06-14", "rates": {"USD": 0.6612}}"#,
            ))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/\d{4}-\d{2}-\d{2}\.\.\d{4}-\d{2}-\d{2}$"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"amount": 1.0, "base": "AUD", "start_date": "2024-06-12", "end_date": "2024-06-14",
                    "rates": {
                        "2024-06-12": {"USD": 0.6601},
                        "2024-06-13": {"USD": 0.6635},
                        "2024-06-14": {"USD": 0.6612}
                    }}"#,
            ))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/2023-03-15"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"amount": 1.0, "base": "AUD", "date": "2023-03-15", "rates": {"EUR": 0.6231}}"#,
            ))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(dir: &tempfile::TempDir, base_url: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yaml");
        let config_content = format!(
            r#"
providers:
  frankfurter:
    base_url: {base_url}
    timeout_secs: 5
"#
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

#[test_log::test(tokio::test)]
async fn test_latest_flow_with_mock() {
    let mock_server = test_utils::create_mock_server().await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(
        fxconv::AppCommand::Latest {
            amount: Some(100.0),
            from: None,
            to: None,
            show_chart: true,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Latest command failed with: {:?}",
        result.err()
    );

    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[0], "/currencies");
    assert_eq!(paths[1], "/latest");
    assert!(paths[2].contains(".."));
    // Default pair is AUD -> USD.
    assert_eq!(requests[1].url.query(), Some("from=AUD&to=USD"));
}

#[test_log::test(tokio::test)]
async fn test_latest_without_chart_skips_trend() {
    let mock_server = test_utils::create_mock_server().await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(
        fxconv::AppCommand::Latest {
            amount: None,
            from: Some("aud".to_string()),
            to: Some("USD".to_string()),
            show_chart: false,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Latest command failed: {:?}", result.err());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[test_log::test(tokio::test)]
async fn test_convert_flow_with_mock() {
    let mock_server = test_utils::create_mock_server().await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(
        fxconv::AppCommand::Convert {
            amount: Some(250.0),
            from: Some("AUD".to_string()),
            to: Some("EUR".to_string()),
            date: chrono::NaiveDate::from_ymd_opt(2023, 3, 15),
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Convert command failed: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_unknown_currency_is_rejected() {
    let mock_server = test_utils::create_mock_server().await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(
        fxconv::AppCommand::Latest {
            amount: None,
            from: Some("AUD".to_string()),
            to: Some("XYZ".to_string()),
            show_chart: true,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    let err = result.expect_err("unknown currency should fail");
    assert_eq!(err.to_string(), "Unknown currency code: XYZ");
}

#[test_log::test(tokio::test)]
async fn test_provider_failure_is_reported() {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(fxconv::AppCommand::Currencies, Some(config_path.to_str().unwrap()))
        .await;
    let err = result.expect_err("provider failure should surface");
    assert_eq!(err.to_string(), "Failed to fetch currencies");
    assert!(format!("{err:#}").contains("503"));
}

#[test_log::test(tokio::test)]
async fn test_inverse_needs_no_config() {
    let result = fxconv::run_command(
        fxconv::AppCommand::Inverse { rate: 4.0 },
        Some("/nonexistent/config.yaml"),
    )
    .await;
    assert!(result.is_ok());

    let result = fxconv::run_command(fxconv::AppCommand::Inverse { rate: 0.0 }, None).await;
    assert!(result.is_err());
}

#[test]
fn test_missing_config_path_fails() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.yaml");
    assert!(!missing.exists());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let result = runtime.block_on(fxconv::run_command(
        fxconv::AppCommand::Currencies,
        Some(missing.to_str().unwrap()),
    ));
    assert!(result.is_err());
    assert!(fs::metadata(&missing).is_err());
}

#[test_log::test(tokio::test)]
#[ignore = "hits the live Frankfurter API"]
async fn test_real_frankfurter_api() {
    use fxconv::core::config::FrankfurterConfig;
    use fxconv::core::exchange;
    use fxconv::providers::FrankfurterProvider;

    let provider =
        FrankfurterProvider::new(&FrankfurterConfig::default()).expect("client should build");

    let from_currency = "AUD";
    let to_currency = "USD";
    info!(?from_currency, ?to_currency, "Fetching latest rate from Frankfurter");

    match exchange::latest_rate(&provider, from_currency, to_currency).await {
        Ok(point) => {
            info!(?point, "Received successful rate response");
            assert!(point.rate > 0.0, "Rate should be positive");
        }
        Err(e) => {
            error!("Rate API request failed: {e}\n{e:?}");
            panic!("Rate API request failed: {e}");
        }
    }

    let trend = exchange::rate_trend(&provider, from_currency, to_currency, 1)
        .await
        .expect("trend request failed");
    assert!(!trend.is_empty(), "Trend should have data points");
}
