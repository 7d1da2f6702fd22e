pub mod list;
pub mod search;
pub mod suggest;

mod error;

pub use error::{Error, Result};
pub use list::{ListResponse, MedicineItem};
pub use search::{POPULAR_MESSAGE, SearchRequest, SearchResponse};
pub use suggest::{SuggestResponse, Suggestion};

use std::{future::Future, pin::Pin, sync::Arc};

use medcat_config::Catalog;
use medcat_domain::{Medicine, MedicineQuery, relevance::RankingLimits};
use medcat_storage::{db::Db, queries};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to the medicine catalog.
///
/// Implementations must honor every part of a [`MedicineQuery`]: case-insensitive predicates
/// combined with OR, the id exclusion list, the row limit, and name-then-id ascending order.
pub trait MedicineStore
where
	Self: Send + Sync,
{
	fn find<'a>(&'a self, query: &'a MedicineQuery) -> BoxFuture<'a, Result<Vec<Medicine>>>;
}

pub struct PgMedicineStore {
	pub db: Db,
}
impl MedicineStore for PgMedicineStore {
	fn find<'a>(&'a self, query: &'a MedicineQuery) -> BoxFuture<'a, Result<Vec<Medicine>>> {
		Box::pin(async move { Ok(queries::find_medicines(&self.db, query).await?) })
	}
}

pub struct CatalogService {
	pub catalog: Catalog,
	pub store: Arc<dyn MedicineStore>,
}
impl CatalogService {
	pub fn new(catalog: Catalog, db: Db) -> Self {
		Self { catalog, store: Arc::new(PgMedicineStore { db }) }
	}

	pub fn with_store(catalog: Catalog, store: Arc<dyn MedicineStore>) -> Self {
		Self { catalog, store }
	}

	pub(crate) fn ranking_limits(&self) -> RankingLimits {
		RankingLimits {
			limit: self.catalog.result_limit as usize,
			min_word_len: self.catalog.min_word_len as usize,
		}
	}

	pub(crate) async fn fetch(&self, query: &MedicineQuery, stage: &str) -> Result<Vec<Medicine>> {
		match self.store.find(query).await {
			Ok(rows) => {
				tracing::debug!(stage, rows = rows.len(), "Medicine store query returned.");

				Ok(rows)
			},
			Err(err) => {
				tracing::warn!(stage, error = %err, "Medicine store query failed.");

				Err(err)
			},
		}
	}
}
