use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub catalog: Catalog,
	#[serde(default)]
	pub cors: Cors,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Catalog {
	/// Upper bound on entries returned by search, the popular listing, and suggestions.
	pub result_limit: u32,
	/// Query words shorter than this earn no per-word relevance bonus.
	pub min_word_len: u32,
}
impl Default for Catalog {
	fn default() -> Self {
		Self { result_limit: 10, min_word_len: 3 }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cors {
	pub allowed_origins: Vec<String>,
	pub allowed_methods: Vec<String>,
	pub allowed_headers: Vec<String>,
}
impl Default for Cors {
	fn default() -> Self {
		Self {
			allowed_origins: vec!["*".to_string()],
			allowed_methods: ["GET", "POST", "PUT", "DELETE"].map(String::from).to_vec(),
			allowed_headers: ["Content-Type", "Authorization"].map(String::from).to_vec(),
		}
	}
}
