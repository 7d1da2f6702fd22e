mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Cors, Postgres, Service, Storage};

use std::{env, fs, net::SocketAddr, path::Path};

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	apply_env_overrides(&mut cfg, env::var(DATABASE_URL_ENV).ok());

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Replaces the configured Postgres DSN with `database_url` when it is set and non-blank.
pub fn apply_env_overrides(cfg: &mut Config, database_url: Option<String>) {
	if let Some(dsn) = database_url.filter(|value| !value.trim().is_empty()) {
		cfg.storage.postgres.dsn = dsn;
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.catalog.result_limit == 0 {
		return Err(Error::Validation {
			message: "catalog.result_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.catalog.min_word_len == 0 {
		return Err(Error::Validation {
			message: "catalog.min_word_len must be greater than zero.".to_string(),
		});
	}

	for method in &cfg.cors.allowed_methods {
		if method.is_empty() || !method.chars().all(|ch| ch.is_ascii_uppercase()) {
			return Err(Error::Validation {
				message: format!("cors.allowed_methods contains an invalid method {method:?}."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.storage.postgres.dsn = cfg.storage.postgres.dsn.trim().to_string();

	for method in &mut cfg.cors.allowed_methods {
		*method = method.trim().to_ascii_uppercase();
	}

	cfg.cors.allowed_origins.retain(|origin| !origin.trim().is_empty());
	cfg.cors.allowed_headers.retain(|header| !header.trim().is_empty());
}
