use std::collections::HashSet;

use crate::{Field, MatchMode, Medicine, MedicineQuery, Predicate};

/// Fallback stages for autocomplete, in the order they are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
	NamePrefix,
	NameSubstring,
	TypeSubstring,
}
impl Tier {
	pub const ALL: [Self; 3] = [Self::NamePrefix, Self::NameSubstring, Self::TypeSubstring];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::NamePrefix => "name_prefix",
			Self::NameSubstring => "name_substring",
			Self::TypeSubstring => "type_substring",
		}
	}

	pub fn predicate(self, term: &str) -> Predicate {
		match self {
			Self::NamePrefix => Predicate::new(Field::Name, MatchMode::StartsWith, term),
			Self::NameSubstring => Predicate::new(Field::Name, MatchMode::Contains, term),
			Self::TypeSubstring => Predicate::new(Field::Type, MatchMode::Contains, term),
		}
	}
}

/// Ordered, id-deduplicated, size-capped accumulator for suggestion batches.
#[derive(Debug)]
pub struct SuggestionSet {
	items: Vec<Medicine>,
	seen: HashSet<i64>,
	limit: usize,
}
impl SuggestionSet {
	pub fn new(limit: usize) -> Self {
		Self { items: Vec::with_capacity(limit), seen: HashSet::with_capacity(limit), limit }
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn remaining(&self) -> usize {
		self.limit.saturating_sub(self.items.len())
	}

	pub fn is_full(&self) -> bool {
		self.remaining() == 0
	}

	/// Builds the store query for `tier`, excluding everything accumulated so far.
	pub fn next_query(&self, tier: Tier, term: &str) -> MedicineQuery {
		MedicineQuery::matching(tier.predicate(term))
			.excluding(self.items.iter().map(|medicine| medicine.id))
			.take(self.remaining())
	}

	/// Appends a batch in order, skipping ids already present and stopping at the cap.
	/// Returns how many records were added.
	pub fn extend(&mut self, batch: Vec<Medicine>) -> usize {
		let before = self.items.len();

		for medicine in batch {
			if self.is_full() {
				break;
			}
			if self.seen.insert(medicine.id) {
				self.items.push(medicine);
			}
		}

		self.items.len() - before
	}

	pub fn into_items(self) -> Vec<Medicine> {
		self.items
	}
}
