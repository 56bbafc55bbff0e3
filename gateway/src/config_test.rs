use super::*;
use crate::state::test_helpers::EnvGuard;

const GATEWAY_VARS: &[&str] = &["HOST", "PORT", "SITE_DIR"];

#[test]
fn from_env_defaults() {
    let _env = EnvGuard::clear(GATEWAY_VARS);

    let cfg = GatewayConfig::from_env().unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_dir.is_none());
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_env_overrides() {
    let _env = EnvGuard::clear(GATEWAY_VARS);
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", " 8080 ");
        std::env::set_var("SITE_DIR", "/srv/my-thien");
    }

    let cfg = GatewayConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_dir, Some(PathBuf::from("/srv/my-thien")));
}

#[test]
fn from_env_blank_site_dir_is_none() {
    let _env = EnvGuard::clear(GATEWAY_VARS);
    unsafe {
        std::env::set_var("SITE_DIR", "");
    }

    assert!(GatewayConfig::from_env().unwrap().site_dir.is_none());
}

#[test]
fn from_env_invalid_port_errors() {
    let _env = EnvGuard::clear(GATEWAY_VARS);
    unsafe {
        std::env::set_var("PORT", "eighty");
    }

    let err = GatewayConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
    assert!(err.contains("eighty"));
}
