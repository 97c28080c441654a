use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_calmo_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CALMO_CONFIG_PATH", "/tmp/calmo-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/calmo-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("calmo")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("calmo")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
background_volume = 0.2
skip_seconds = 30
autoplay_delay_ms = 250

[assets]
root = "/srv/meditations"
extensions = ["mp3"]

[reminders]
enabled = false
hour = 21
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CALMO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CALMO__AUDIO__SKIP_SECONDS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.background_volume, 0.2);
    assert_eq!(s.audio.skip_seconds, 30);
    assert_eq!(s.audio.autoplay_delay_ms, 250);
    assert_eq!(s.assets.root, "/srv/meditations");
    assert_eq!(s.assets.extensions, vec!["mp3".to_string()]);
    assert!(!s.reminders.enabled);
    assert_eq!(s.reminders.hour, 21);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
skip_seconds = 15
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CALMO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CALMO__AUDIO__SKIP_SECONDS", "45");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.skip_seconds, 45);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.audio.background_volume = 1.5;
    assert!(s.validate().is_err());
    s.audio.background_volume = 0.3;

    s.reminders.hour = 24;
    assert!(s.validate().is_err());
    s.reminders.hour = 8;

    s.audio.skip_seconds = 0;
    assert!(s.validate().is_err());
}
