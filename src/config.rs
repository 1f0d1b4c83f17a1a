use actix_web::cookie::Key;
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// `Key::derive_from` requires at least this much key material.
const SESSION_KEY_MIN_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub session_key: Option<String>,
    pub cookie_secure: bool,
    pub static_dir: PathBuf,
    pub media_dir: PathBuf,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("POSTGRES_URI");

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url,
            session_key: env::var("SESSION_KEY").ok(),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v != "0")
                .unwrap_or(false),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            media_dir: env::var("MEDIA_DIR")
                .unwrap_or_else(|_| "media".to_string())
                .into(),
        }
    }

    /// Pattern images live under the static root; the customizer page lists
    /// their stem names.
    pub fn pattern_dir(&self) -> PathBuf {
        self.static_dir.join("patterns")
    }

    /// Signing key for the session cookie. Missing or too-short key material
    /// degrades to an ephemeral key so the server still starts; sessions then
    /// do not survive a restart.
    pub fn session_cookie_key(&self) -> Key {
        match &self.session_key {
            Some(secret) if secret.len() >= SESSION_KEY_MIN_LEN => {
                Key::derive_from(secret.as_bytes())
            }
            Some(_) => {
                warn!(
                    "SESSION_KEY holds fewer than {} bytes, using an ephemeral session key",
                    SESSION_KEY_MIN_LEN
                );
                Key::generate()
            }
            None => {
                warn!("SESSION_KEY not set, sessions will not survive a restart");
                Key::generate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(session_key: Option<&str>) -> EnvConfig {
        EnvConfig {
            port: 8080,
            db_url: "unused".to_string(),
            session_key: session_key.map(str::to_string),
            cookie_secure: false,
            static_dir: "static".into(),
            media_dir: "media".into(),
        }
    }

    #[test]
    fn long_session_key_derives_deterministically() {
        let config = config_with_key(Some(&"s".repeat(64)));
        let first = config.session_cookie_key();
        let second = config.session_cookie_key();
        assert_eq!(first.master(), second.master());
    }

    #[test]
    fn short_session_key_falls_back_to_ephemeral() {
        let config = config_with_key(Some("too-short"));
        // Must not panic; the generated key differs per call.
        let first = config.session_cookie_key();
        let second = config.session_cookie_key();
        assert_ne!(first.master(), second.master());
    }

    #[test]
    fn missing_session_key_falls_back_to_ephemeral() {
        let config = config_with_key(None);
        let _ = config.session_cookie_key();
    }
}
