use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Medicine {
	pub id: i64,
	pub name: String,
	pub r#type: String,
	pub price: f64,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}
