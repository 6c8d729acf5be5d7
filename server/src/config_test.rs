use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn port_defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn port_is_read_and_trimmed() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value } if value == "eighty"));
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
