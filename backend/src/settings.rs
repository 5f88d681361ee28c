//! Application settings loaded via OrthoConfig.
//!
//! Values come from `PHARMACY_*` environment variables, configuration files
//! and command-line flags, in OrthoConfig's usual precedence order.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::PageSizeLimits;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Errors raised when settings are internally inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("host is not a valid IP address: {0}")]
    InvalidHost(String),
    #[error("page sizes must be at least 1")]
    ZeroPageSize,
    #[error("default page size {default} exceeds the maximum {max}")]
    DefaultAboveMax { default: usize, max: usize },
}

/// Runtime configuration for the pharmacy backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHARMACY")]
pub struct AppSettings {
    /// Address to bind; defaults to every interface.
    pub host: Option<String>,
    /// Port to bind; defaults to 8080.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Without one, records are kept in memory.
    pub database_url: Option<String>,
    /// Rows per inventory page when the client does not ask for a size.
    pub default_page_size: Option<usize>,
    /// Upper bound applied to client-requested page sizes.
    pub max_page_size: Option<usize>,
    /// Apply pending database migrations on startup; defaults to `true`.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Socket address built from `host` and `port`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidHost(raw.to_owned()))?,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Whether pending migrations run before the server starts.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Page-size limits for paginated endpoints.
    ///
    /// # Errors
    /// Returns an error when either size is zero or the default exceeds the
    /// maximum.
    pub fn page_limits(&self) -> Result<PageSizeLimits, SettingsError> {
        let default_page_size = self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let max_page_size = self.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE);
        if default_page_size == 0 || max_page_size == 0 {
            return Err(SettingsError::ZeroPageSize);
        }
        if default_page_size > max_page_size {
            return Err(SettingsError::DefaultAboveMax {
                default: default_page_size,
                max: max_page_size,
            });
        }
        Ok(PageSizeLimits {
            default_page_size,
            max_page_size,
        })
    }
}
