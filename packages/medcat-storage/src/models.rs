use time::OffsetDateTime;

use medcat_domain::Medicine;

#[derive(Debug, sqlx::FromRow)]
pub struct MedicineRow {
	pub id: i64,
	pub name: String,
	#[sqlx(rename = "type")]
	pub r#type: String,
	pub price: f64,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
impl From<MedicineRow> for Medicine {
	fn from(row: MedicineRow) -> Self {
		Self {
			id: row.id,
			name: row.name,
			r#type: row.r#type,
			price: row.price,
			created_at: row.created_at,
			updated_at: row.updated_at,
		}
	}
}

#[derive(Debug)]
pub struct NewMedicine<'a> {
	pub name: &'a str,
	pub r#type: &'a str,
	pub price: f64,
}
