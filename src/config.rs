use std::{env, net::SocketAddr, path::PathBuf};

use crate::{db::Backend, error::AppError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub backend: Backend,
    pub listen_addr: SocketAddr,
    pub public_root: PathBuf,
    /// Token expected in `x-admin-token`. `None` disables the admin endpoints.
    pub admin_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let backend = Backend::from_url(&database_url)?;

        let listen_addr = match lookup("APP_LISTEN_ADDR") {
            Some(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?,
            None => {
                let port = match lookup("PORT") {
                    Some(raw) => raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|err| AppError::Config(format!("invalid PORT: {err}")))?,
                    None => DEFAULT_PORT,
                };
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let public_root = lookup("PUBLIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));

        let admin_token = lookup("ADMIN_TOKEN").filter(|token| !token.is_empty());

        Ok(Self {
            database_url,
            backend,
            listen_addr,
            public_root,
            admin_token,
        })
    }
}
