//! Runtime configuration read from the environment.
//!
//! Values are taken from process environment variables, optionally seeded
//! from a `.env` file in the working directory. Every setting has a default,
//! so the server starts without any configuration.
//!
//! | variable         | default                  |
//! |------------------|--------------------------|
//! | `APP_HOST`       | `127.0.0.1`              |
//! | `APP_PORT`       | `8080`                   |
//! | `DATABASE_PATH`  | `documents.sqlite`       |
//! | `EXTRACTION_URL` | hosted extraction service |
//! | `OPEN_BROWSER`   | `true`                   |

use common::model::settings::{ClientSettings, DEFAULT_EXTRACTION_URL};
use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_PATH: &str = "documents.sqlite";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file backing the `documents` collection.
    pub database_path: PathBuf,
    /// Extraction endpoint handed to the client through `/api/settings`.
    pub extraction_url: String,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unparseable
    /// values fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("APP_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("APP_PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let open_browser = match non_empty("OPEN_BROWSER") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    warn!("OPEN_BROWSER={} is not a boolean, using true", raw);
                    true
                }
            },
            None => true,
        };

        Self {
            host: non_empty("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_path: non_empty("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            extraction_url: non_empty("EXTRACTION_URL")
                .unwrap_or_else(|| DEFAULT_EXTRACTION_URL.to_string()),
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            extraction_url: self.extraction_url.clone(),
            ..ClientSettings::default()
        }
    }
}
