pub mod filter;
pub mod medicine;
pub mod relevance;
pub mod suggest;

pub use filter::{Field, MatchMode, MedicineQuery, Predicate};
pub use medicine::Medicine;

/// Trims and lower-cases a raw search term. Returns `None` when nothing is left.
pub fn normalize_term(raw: &str) -> Option<String> {
	let trimmed = raw.trim();

	if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
}
