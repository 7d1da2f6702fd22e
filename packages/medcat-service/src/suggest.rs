use medcat_domain::{
	Medicine, normalize_term,
	suggest::{SuggestionSet, Tier},
};

use crate::{CatalogService, Error, Result};

/// Autocomplete projection of a medicine, without its timestamps.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Suggestion {
	pub id: i64,
	pub name: String,
	#[serde(rename = "type")]
	pub medicine_type: String,
	pub price: f64,
}
impl From<Medicine> for Suggestion {
	fn from(medicine: Medicine) -> Self {
		Self {
			id: medicine.id,
			name: medicine.name,
			medicine_type: medicine.r#type,
			price: medicine.price,
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SuggestResponse {
	pub suggestions: Vec<Suggestion>,
}

impl CatalogService {
	/// Fills up to `result_limit` suggestions from name-prefix, then name-substring, then
	/// type-substring matches. Tiers run in order because each one excludes what came before.
	pub async fn suggest(&self, term: &str) -> Result<SuggestResponse> {
		let Some(term) = normalize_term(term) else {
			return Err(Error::InvalidRequest { message: "Search term is required".to_string() });
		};
		let mut set = SuggestionSet::new(self.catalog.result_limit as usize);

		for tier in Tier::ALL {
			if set.is_full() {
				break;
			}

			let query = set.next_query(tier, &term);
			let batch = self.fetch(&query, tier.as_str()).await?;
			let added = set.extend(batch);

			tracing::debug!(tier = tier.as_str(), added, total = set.len(), "Suggestion tier done.");
		}

		let suggestions = set.into_items().into_iter().map(Suggestion::from).collect();

		Ok(SuggestResponse { suggestions })
	}
}
