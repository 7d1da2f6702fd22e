use sqlx::{Postgres, QueryBuilder};

use crate::{
	Error, Result,
	db::Db,
	models::{MedicineRow, NewMedicine},
};
use medcat_domain::{MatchMode, Medicine, MedicineQuery};

const SELECT_MEDICINES: &str = "\
SELECT id, name, type, price, created_at, updated_at
FROM medicines";

/// Escapes `LIKE` metacharacters so the term only ever matches literally.
pub fn escape_like(term: &str) -> String {
	let mut out = String::with_capacity(term.len());

	for ch in term.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}

pub fn like_pattern(mode: MatchMode, term: &str) -> String {
	let escaped = escape_like(term);

	match mode {
		MatchMode::Contains => format!("%{escaped}%"),
		MatchMode::StartsWith => format!("{escaped}%"),
	}
}

/// Renders `query` as SQL. Rows come back ordered by name bytes, then id.
pub fn build_find_query(query: &MedicineQuery) -> Result<QueryBuilder<'static, Postgres>> {
	let take = query
		.take
		.map(|limit| {
			i64::try_from(limit)
				.map_err(|_| Error::InvalidArgument(format!("Row limit {limit} is out of range.")))
		})
		.transpose()?;
	let mut builder = QueryBuilder::new(SELECT_MEDICINES);
	let mut has_where = false;

	if !query.any_of.is_empty() {
		builder.push(" WHERE (");

		for (idx, predicate) in query.any_of.iter().enumerate() {
			if idx > 0 {
				builder.push(" OR ");
			}

			builder.push(predicate.field.column());
			builder.push(" ILIKE ");
			builder.push_bind(like_pattern(predicate.mode, &predicate.term));
			builder.push(" ESCAPE '\\'");
		}

		builder.push(")");

		has_where = true;
	}
	if !query.exclude_ids.is_empty() {
		builder.push(if has_where { " AND " } else { " WHERE " });
		builder.push("NOT (id = ANY(");
		builder.push_bind(query.exclude_ids.clone());
		builder.push("))");
	}

	builder.push(r#" ORDER BY name COLLATE "C" ASC, id ASC"#);

	if let Some(take) = take {
		builder.push(" LIMIT ");
		builder.push_bind(take);
	}

	Ok(builder)
}

pub async fn find_medicines(db: &Db, query: &MedicineQuery) -> Result<Vec<Medicine>> {
	if query.take == Some(0) {
		return Ok(Vec::new());
	}

	let mut builder = build_find_query(query)?;
	let rows: Vec<MedicineRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows.into_iter().map(Medicine::from).collect())
}

pub async fn insert_medicine(db: &Db, medicine: &NewMedicine<'_>) -> Result<Medicine> {
	if medicine.name.trim().is_empty() || medicine.r#type.trim().is_empty() {
		return Err(Error::InvalidArgument("Medicine name and type must be non-empty.".to_string()));
	}
	if !medicine.price.is_finite() || medicine.price < 0.0 {
		return Err(Error::InvalidArgument(
			"Medicine price must be a finite, non-negative number.".to_string(),
		));
	}

	let row: MedicineRow = sqlx::query_as(
		"\
INSERT INTO medicines (name, type, price)
VALUES ($1, $2, $3)
RETURNING id, name, type, price, created_at, updated_at",
	)
	.bind(medicine.name)
	.bind(medicine.r#type)
	.bind(medicine.price)
	.fetch_one(&db.pool)
	.await?;

	Ok(row.into())
}
