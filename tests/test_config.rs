use std::sync::Mutex;

use staticd::config::Config;

// Environment variables are process-global; serialize the tests that
// touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("STATICD_CONFIG");
    }
}

#[test]
fn test_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.document_root.to_str().unwrap(), "./public");
    assert!(!cfg.server_name.is_empty());
}

#[test]
fn test_config_listen_override_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");

    clear_env();
}

#[test]
fn test_config_from_yaml_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join(format!("staticd-cfg-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "listen_addr: \"127.0.0.1:9000\"\ndocument_root: \"/srv/www\"\nserver_name: \"my-server\"\n",
    )
    .unwrap();

    unsafe {
        std::env::set_var("STATICD_CONFIG", &path);
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.document_root.to_str().unwrap(), "/srv/www");
    assert_eq!(cfg.server_name, "my-server");

    clear_env();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join(format!("staticd-cfg-partial-{}.yaml", std::process::id()));
    std::fs::write(&path, "server_name: \"only-name\"\n").unwrap();

    unsafe {
        std::env::set_var("STATICD_CONFIG", &path);
    }
    let cfg = Config::load();
    assert_eq!(cfg.server_name, "only-name");
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");

    clear_env();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    unsafe {
        std::env::set_var("STATICD_CONFIG", "/nonexistent/staticd.yaml");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");

    clear_env();
}

#[test]
fn test_config_clone() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg1 = Config::load();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.server_name, cfg2.server_name);
}
