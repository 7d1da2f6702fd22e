//! Additive relevance scoring for catalog search.
//!
//! Candidates arrive pre-filtered (their name or type contains the term). Each one earns points
//! for exact, prefix and substring hits on name and type, plus a bonus per long-enough query word
//! found in either field. Rules stack: an exact name hit also counts as a prefix and a substring
//! hit, and per-word bonuses are added on top even when the word is the whole term.

use crate::Medicine;

pub const NAME_EXACT: u32 = 100;
pub const TYPE_EXACT: u32 = 80;
pub const NAME_PREFIX: u32 = 60;
pub const TYPE_PREFIX: u32 = 40;
pub const NAME_CONTAINS: u32 = 30;
pub const TYPE_CONTAINS: u32 = 20;
pub const NAME_WORD: u32 = 10;
pub const TYPE_WORD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingLimits {
	/// Maximum number of ranked results kept.
	pub limit: usize,
	/// Minimum length, in UTF-16 code units, of a query word that earns a per-word bonus.
	pub min_word_len: usize,
}
impl Default for RankingLimits {
	fn default() -> Self {
		Self { limit: 10, min_word_len: 3 }
	}
}

/// Scores one candidate against a trimmed, lower-cased `term`.
pub fn score(medicine: &Medicine, term: &str, min_word_len: usize) -> u32 {
	let name = medicine.name.to_lowercase();
	let kind = medicine.r#type.to_lowercase();
	let mut score = 0;

	if name == term {
		score += NAME_EXACT;
	}
	if kind == term {
		score += TYPE_EXACT;
	}
	if name.starts_with(term) {
		score += NAME_PREFIX;
	}
	if kind.starts_with(term) {
		score += TYPE_PREFIX;
	}
	if name.contains(term) {
		score += NAME_CONTAINS;
	}
	if kind.contains(term) {
		score += TYPE_CONTAINS;
	}

	// Runs of spaces produce empty words, which never qualify.
	for word in term.split(' ') {
		if word.encode_utf16().count() < min_word_len {
			continue;
		}
		if name.contains(word) {
			score += NAME_WORD;
		}
		if kind.contains(word) {
			score += TYPE_WORD;
		}
	}

	score
}

/// Orders candidates by descending score and keeps the first `limits.limit`.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank(candidates: Vec<Medicine>, term: &str, limits: RankingLimits) -> Vec<Medicine> {
	let mut scored: Vec<(u32, Medicine)> = candidates
		.into_iter()
		.map(|medicine| (score(&medicine, term, limits.min_word_len), medicine))
		.collect();

	scored.sort_by(|a, b| b.0.cmp(&a.0));
	scored.truncate(limits.limit);

	scored.into_iter().map(|(_, medicine)| medicine).collect()
}
