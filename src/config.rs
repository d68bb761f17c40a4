use rand::rngs::OsRng;
use rand::TryRngCore;
use std::env;
use std::path::PathBuf;

/// Immutable application configuration, built once at startup and shared
/// through the router state. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Key used to sign session tokens.
    pub secret_key: String,
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Directory served under /static.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::info!("DATABASE_URL not set, using ./db.sqlite");
            "db.sqlite".to_string()
        });

        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            tracing::warn!("SECRET_KEY not set, generating one; sessions will not survive restart");
            generate_secret()
        });

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Self {
            database_url,
            secret_key,
            bind_addr,
            static_dir,
        }
    }

    /// Directory the background picker scans.
    pub fn backgrounds_dir(&self) -> PathBuf {
        self.static_dir.join("backgrounds")
    }
}

fn generate_secret() -> String {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .expect("Failed to generate random bytes");
    hex::encode(bytes)
}
