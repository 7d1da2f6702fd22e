use std::sync::Arc;

use medcat_config::Config;
use medcat_service::CatalogService;
use medcat_storage::db::Db;

use crate::middleware::CorsPolicy;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CatalogService>,
	pub cors: Arc<CorsPolicy>,
}
impl AppState {
	pub async fn new(config: Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let cors = CorsPolicy::new(&config.cors)?;
		let service = CatalogService::new(config.catalog, db);

		Ok(Self::with_service(service, cors))
	}

	pub fn with_service(service: CatalogService, cors: CorsPolicy) -> Self {
		Self { service: Arc::new(service), cors: Arc::new(cors) }
	}
}
