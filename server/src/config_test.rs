use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_base_url, None);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_values_count_as_unset() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("LMS_API_BASE_URL", "")])).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_base_url, None);
}

#[test]
fn reads_port_and_backend() {
    let config =
        HostConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("LMS_API_BASE_URL", "https://lms.example.com")]))
            .expect("config");
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_base_url.as_deref(), Some("https://lms.example.com"));
}

#[test]
fn rejects_bad_port() {
    for raw in ["0", "70000", "http"] {
        let err = HostConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}

#[test]
fn rejects_non_http_backend() {
    let err = HostConfig::from_lookup(lookup(&[("LMS_API_BASE_URL", "ftp://x")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid LMS_API_BASE_URL \"ftp://x\": expected an http(s) URL");
}
