use medcat_domain::{Medicine, MedicineQuery};

use crate::{CatalogService, Result};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineItem {
	pub id: i64,
	pub name: String,
	#[serde(rename = "type")]
	pub medicine_type: String,
	pub price: f64,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: time::OffsetDateTime,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: time::OffsetDateTime,
}
impl From<Medicine> for MedicineItem {
	fn from(medicine: Medicine) -> Self {
		Self {
			id: medicine.id,
			name: medicine.name,
			medicine_type: medicine.r#type,
			price: medicine.price,
			created_at: medicine.created_at,
			updated_at: medicine.updated_at,
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ListResponse {
	pub data: Vec<MedicineItem>,
}

impl CatalogService {
	pub async fn list(&self) -> Result<ListResponse> {
		let rows = self.fetch(&MedicineQuery::all(), "list").await?;

		Ok(ListResponse { data: rows.into_iter().map(MedicineItem::from).collect() })
	}
}
