//! Store-agnostic description of a medicine lookup.
//!
//! A [`MedicineQuery`] is what the catalog asks of its record store: an OR of case-insensitive
//! field predicates, an id exclusion list and an optional row limit. Results are always ordered by
//! name ascending, compared byte-wise (so "Zinc" sorts before "aspirin"), then id ascending.
//! [`MedicineQuery::evaluate`] is the in-memory reference for those semantics; the Postgres store
//! translates the same query to SQL and pins the `C` collation to get the same order.

use crate::Medicine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Name,
	Type,
}
impl Field {
	pub fn column(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Type => "type",
		}
	}

	pub fn value(self, medicine: &Medicine) -> &str {
		match self {
			Self::Name => medicine.name.as_str(),
			Self::Type => medicine.r#type.as_str(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
	Contains,
	StartsWith,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
	pub field: Field,
	pub mode: MatchMode,
	/// Lower-cased needle.
	pub term: String,
}
impl Predicate {
	pub fn new(field: Field, mode: MatchMode, term: &str) -> Self {
		Self { field, mode, term: term.to_lowercase() }
	}

	pub fn matches(&self, medicine: &Medicine) -> bool {
		let haystack = self.field.value(medicine).to_lowercase();

		match self.mode {
			MatchMode::Contains => haystack.contains(self.term.as_str()),
			MatchMode::StartsWith => haystack.starts_with(self.term.as_str()),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineQuery {
	/// Empty means every record matches.
	pub any_of: Vec<Predicate>,
	pub exclude_ids: Vec<i64>,
	pub take: Option<usize>,
}
impl MedicineQuery {
	pub fn all() -> Self {
		Self::default()
	}

	pub fn matching(predicate: Predicate) -> Self {
		Self { any_of: vec![predicate], ..Self::default() }
	}

	pub fn or(mut self, predicate: Predicate) -> Self {
		self.any_of.push(predicate);

		self
	}

	pub fn excluding(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
		self.exclude_ids.extend(ids);

		self
	}

	pub fn take(mut self, limit: usize) -> Self {
		self.take = Some(limit);

		self
	}

	pub fn matches(&self, medicine: &Medicine) -> bool {
		if self.exclude_ids.contains(&medicine.id) {
			return false;
		}

		self.any_of.is_empty() || self.any_of.iter().any(|predicate| predicate.matches(medicine))
	}

	/// Runs the query against an in-memory record set.
	pub fn evaluate<'a, I>(&self, records: I) -> Vec<Medicine>
	where
		I: IntoIterator<Item = &'a Medicine>,
	{
		let mut out: Vec<Medicine> =
			records.into_iter().filter(|medicine| self.matches(medicine)).cloned().collect();

		out.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

		if let Some(limit) = self.take {
			out.truncate(limit);
		}

		out
	}
}
