use medcat_domain::{Field, MatchMode, MedicineQuery, Predicate, normalize_term, relevance};

use crate::{CatalogService, MedicineItem, Result};

pub const POPULAR_MESSAGE: &str = "Showing popular medicines";

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub data: Vec<MedicineItem>,
	pub message: String,
}

impl CatalogService {
	/// Ranked free-text search. A missing or blank query lists the first entries by name instead.
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let raw = req.query.unwrap_or_default();
		let Some(term) = normalize_term(&raw) else { return self.popular().await };
		let query = MedicineQuery::matching(Predicate::new(Field::Name, MatchMode::Contains, &term))
			.or(Predicate::new(Field::Type, MatchMode::Contains, &term));
		let candidates = self.fetch(&query, "search_candidates").await?;
		let candidate_count = candidates.len();
		let ranked = relevance::rank(candidates, &term, self.ranking_limits());

		tracing::debug!(candidate_count, returned = ranked.len(), "Ranked search candidates.");

		let message = if ranked.is_empty() {
			format!("No matches found for \"{raw}\"")
		} else {
			format!("Showing top {} relevant results for \"{raw}\"", ranked.len())
		};

		Ok(SearchResponse { data: ranked.into_iter().map(MedicineItem::from).collect(), message })
	}

	pub async fn popular(&self) -> Result<SearchResponse> {
		let query = MedicineQuery::all().take(self.catalog.result_limit as usize);
		let rows = self.fetch(&query, "popular").await?;

		Ok(SearchResponse {
			data: rows.into_iter().map(MedicineItem::from).collect(),
			message: POPULAR_MESSAGE.to_string(),
		})
	}
}
