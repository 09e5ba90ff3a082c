use super::*;

// Env manipulation requires unsafe in edition 2024; tests go through
// `from_lookup` with a fixed table instead.
fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn empty_environment_uses_defaults() {
    let config = HostConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_host_are_read() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).expect("config");
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", "")])).expect("config");
    assert_eq!(config, HostConfig::default());
}

#[test]
fn port_is_trimmed() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).expect("config");
    assert_eq!(config.port, 4000);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).expect_err("bad port");
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).expect_err("bad port");
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn zero_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "0")])).expect_err("bad port");
    assert_eq!(err.to_string(), "invalid PORT \"0\": port must be non-zero");
}

#[test]
fn bad_host_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("HOST", "not-an-ip")])).expect_err("bad host");
    assert_eq!(err, ConfigError::InvalidHost { value: "not-an-ip".to_owned() });
}
