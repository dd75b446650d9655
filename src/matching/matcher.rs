//! Confidence-graded client matching.
//!
//! Titles are matched against roster names in tiers. A tier hit produces a
//! [`MatchCandidate`]; EXACT and HIGH candidates are confident enough for
//! automatic assignment, MEDIUM and LOW require a human decision. The
//! matcher is a pure function of its inputs and never touches state.

use serde::{Deserialize, Serialize};

use crate::matching::normalize::{normalize_title, tokenize};

/// How certain a title-to-client match is.
///
/// Variants are declared best-first so that sorting candidates ascending
/// by confidence ranks EXACT matches ahead of everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// The full client name appears in the title as a contiguous token
    /// sequence.
    Exact,
    /// The name appears reversed or hyphen-joined (calendar "Surname-Name"
    /// conventions).
    High,
    /// Only the surname token matches.
    Medium,
    /// Only the first-name token matches.
    Low,
}

impl MatchConfidence {
    /// Whether this tier is strong enough for automatic assignment.
    pub fn is_confident(&self) -> bool {
        matches!(self, MatchConfidence::Exact | MatchConfidence::High)
    }
}

/// A single ranked match produced for one event title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The roster client name (or keyword pseudo-client) that matched.
    pub client_name: String,
    /// The confidence tier of the match.
    pub confidence: MatchConfidence,
    /// The normalized text fragment that produced the match.
    pub matched_text: String,
    /// Human-readable reason for the tier assignment.
    pub rationale: String,
}

/// An event whose best match was below the confident tiers.
///
/// Carries every MEDIUM/LOW candidate plus the single suggested one, so a
/// reviewer can either accept the suggestion or pick another candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertainMatch {
    /// Identity of the event needing a decision.
    pub event_id: String,
    /// The raw event title as it appeared in the calendar.
    pub event_title: String,
    /// All MEDIUM/LOW candidates, ranked.
    pub candidates: Vec<MatchCandidate>,
    /// The highest-confidence candidate, offered as the default choice.
    pub suggested: MatchCandidate,
}

impl UncertainMatch {
    /// Builds an uncertain match from ranked candidates, or `None` when
    /// the candidate list is empty.
    pub fn from_candidates(
        event_id: String,
        event_title: String,
        candidates: Vec<MatchCandidate>,
    ) -> Option<Self> {
        let suggested = candidates.first()?.clone();
        Some(UncertainMatch {
            event_id,
            event_title,
            candidates,
            suggested,
        })
    }
}

/// Returns only confident (EXACT/HIGH) matches for automatic assignment.
///
/// Keyword pseudo-clients rank ahead of roster clients within the same
/// tier; among several candidates of equal tier the stable input order
/// decides, so the first result is deterministic.
///
/// # Example
///
/// ```
/// use payroll_engine::matching::find_client_matches;
///
/// let clients = vec!["Maria Papadopoulou".to_string()];
/// let matches = find_client_matches("Maria Papadopoulou 10:00", &clients, &[]);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].client_name, "Maria Papadopoulou");
/// ```
pub fn find_client_matches(
    title: &str,
    client_names: &[String],
    keywords: &[String],
) -> Vec<MatchCandidate> {
    find_client_matches_with_confidence(title, client_names, keywords)
        .into_iter()
        .filter(|c| c.confidence.is_confident())
        .collect()
}

/// Returns the full ranked candidate list across all tiers.
///
/// Used to build uncertain-match candidates out of the MEDIUM/LOW results
/// when no confident match exists.
pub fn find_client_matches_with_confidence(
    title: &str,
    client_names: &[String],
    keywords: &[String],
) -> Vec<MatchCandidate> {
    let normalized = normalize_title(title);
    let title_tokens = tokenize(&normalized);
    if title_tokens.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();

    // Keywords go in first so that stable sorting keeps them ahead of
    // roster clients of the same tier.
    for keyword in keywords {
        let keyword_norm = normalize_title(keyword);
        let keyword_tokens = tokenize(&keyword_norm);
        if !keyword_tokens.is_empty() && contains_contiguous(&title_tokens, &keyword_tokens) {
            candidates.push(MatchCandidate {
                client_name: keyword.clone(),
                confidence: MatchConfidence::Exact,
                matched_text: keyword_norm.clone(),
                rationale: "keyword present in title".to_string(),
            });
        }
    }

    for name in client_names {
        let name_norm = normalize_title(name);
        let name_tokens = tokenize(&name_norm);
        if let Some((confidence, matched_text, rationale)) =
            classify_name(&title_tokens, &name_tokens)
        {
            candidates.push(MatchCandidate {
                client_name: name.clone(),
                confidence,
                matched_text,
                rationale: rationale.to_string(),
            });
        }
    }

    // Stable: ties keep input order, which makes suggestion picks
    // deterministic.
    candidates.sort_by_key(|c| c.confidence);
    candidates
}

/// Classifies one normalized client name against the title tokens.
fn classify_name(
    title_tokens: &[&str],
    name_tokens: &[&str],
) -> Option<(MatchConfidence, String, &'static str)> {
    if name_tokens.is_empty() {
        return None;
    }

    if contains_contiguous(title_tokens, name_tokens) {
        return Some((
            MatchConfidence::Exact,
            name_tokens.join(" "),
            "full name present in title",
        ));
    }

    if let [first, .., last] = name_tokens {
        let reversed: Vec<&str> = name_tokens.iter().rev().copied().collect();
        if contains_contiguous(title_tokens, &reversed) {
            return Some((
                MatchConfidence::High,
                reversed.join(" "),
                "name tokens in reversed order",
            ));
        }

        let joined = name_tokens.join("-");
        let joined_reversed = reversed.join("-");
        for token in title_tokens {
            if *token == joined || *token == joined_reversed {
                return Some((
                    MatchConfidence::High,
                    (*token).to_string(),
                    "hyphen-joined name",
                ));
            }
        }

        if title_tokens.contains(last) {
            return Some((MatchConfidence::Medium, (*last).to_string(), "surname only"));
        }

        if title_tokens.contains(first) {
            return Some((MatchConfidence::Low, (*first).to_string(), "first name only"));
        }
    }

    None
}

/// Whether `needle` occurs in `haystack` as a contiguous run.
fn contains_contiguous(haystack: &[&str], needle: &[&str]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_on_full_name() {
        let matches = find_client_matches(
            "Maria Papadopoulou 10:00",
            &names(&["Maria Papadopoulou"]),
            &[],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].confidence, MatchConfidence::Exact);
        assert_eq!(matches[0].client_name, "Maria Papadopoulou");
    }

    #[test]
    fn test_exact_match_is_case_and_diacritic_insensitive() {
        let matches = find_client_matches(
            "ΜΑΡΊΑ ΠΑΠΑΔΟΠΟΎΛΟΥ",
            &names(&["Μαρια Παπαδοπουλου"]),
            &[],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].confidence, MatchConfidence::Exact);
    }

    #[test]
    fn test_reversed_order_is_high() {
        let matches = find_client_matches(
            "Papadopoulou Maria",
            &names(&["Maria Papadopoulou"]),
            &[],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].confidence, MatchConfidence::High);
    }

    #[test]
    fn test_hyphen_joined_is_high_in_either_order() {
        for title in ["Maria-Papadopoulou", "Papadopoulou-Maria session"] {
            let matches =
                find_client_matches(title, &names(&["Maria Papadopoulou"]), &[]);
            assert_eq!(matches.len(), 1, "title: {title}");
            assert_eq!(matches[0].confidence, MatchConfidence::High, "title: {title}");
        }
    }

    #[test]
    fn test_en_dash_joined_is_high() {
        let matches = find_client_matches(
            "Papadopoulou\u{2013}Maria",
            &names(&["Maria Papadopoulou"]),
            &[],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].confidence, MatchConfidence::High);
    }

    #[test]
    fn test_surname_only_is_medium_and_not_confident() {
        let all = find_client_matches_with_confidence(
            "Papadopoulou",
            &names(&["Maria Papadopoulou"]),
            &[],
        );
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].confidence, MatchConfidence::Medium);

        let confident =
            find_client_matches("Papadopoulou", &names(&["Maria Papadopoulou"]), &[]);
        assert!(confident.is_empty());
    }

    #[test]
    fn test_shared_surname_yields_ambiguous_medium_candidates() {
        let clients = names(&["Maria Papadopoulou", "Eleni Papadopoulou"]);
        let all = find_client_matches_with_confidence("Παπαδοπούλου", &clients, &[]);
        // Greek title, Latin roster: no overlap. Use matching scripts.
        assert!(all.is_empty());

        let greek_clients = names(&["Μαρια Παπαδοπουλου", "Ελενη Παπαδοπουλου"]);
        let all = find_client_matches_with_confidence("Παπαδοπούλου", &greek_clients, &[]);
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|c| c.confidence == MatchConfidence::Medium));
        // Stable tie-break: input order decides the ranking.
        assert_eq!(all[0].client_name, "Μαρια Παπαδοπουλου");
    }

    #[test]
    fn test_first_name_only_is_low() {
        let all = find_client_matches_with_confidence(
            "Maria 18:00",
            &names(&["Maria Papadopoulou"]),
            &[],
        );
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].confidence, MatchConfidence::Low);
    }

    #[test]
    fn test_no_token_overlap_yields_nothing() {
        let all = find_client_matches_with_confidence(
            "Dentist appointment",
            &names(&["Maria Papadopoulou"]),
            &[],
        );
        assert!(all.is_empty());
    }

    #[test]
    fn test_keyword_matches_at_exact_tier() {
        let matches = find_client_matches(
            "Group supervision 17:00",
            &names(&["Maria Papadopoulou"]),
            &["supervision".to_string()],
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].client_name, "supervision");
        assert_eq!(matches[0].confidence, MatchConfidence::Exact);
    }

    #[test]
    fn test_keyword_ranks_ahead_of_exact_client_match() {
        let matches = find_client_matches(
            "supervision with Maria Papadopoulou",
            &names(&["Maria Papadopoulou"]),
            &["supervision".to_string()],
        );
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].client_name, "supervision");
        assert_eq!(matches[1].client_name, "Maria Papadopoulou");
    }

    #[test]
    fn test_ranking_orders_tiers_best_first() {
        let clients = names(&["Maria Ioannou", "Giorgos Papadopoulou", "Maria Papadopoulou"]);
        let all = find_client_matches_with_confidence("Maria Papadopoulou", &clients, &[]);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].confidence, MatchConfidence::Exact);
        assert_eq!(all[0].client_name, "Maria Papadopoulou");
        assert_eq!(all[1].confidence, MatchConfidence::Medium);
        assert_eq!(all[1].client_name, "Giorgos Papadopoulou");
        assert_eq!(all[2].confidence, MatchConfidence::Low);
        assert_eq!(all[2].client_name, "Maria Ioannou");
    }

    #[test]
    fn test_single_token_client_name_matches_exact_only() {
        let all = find_client_matches_with_confidence("Maria 10:00", &names(&["Maria"]), &[]);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].confidence, MatchConfidence::Exact);
    }

    #[test]
    fn test_blank_title_matches_nothing() {
        assert!(find_client_matches_with_confidence("   ", &names(&["Maria"]), &[]).is_empty());
    }

    #[test]
    fn test_uncertain_match_suggests_first_candidate() {
        let candidates = vec![
            MatchCandidate {
                client_name: "Maria Papadopoulou".to_string(),
                confidence: MatchConfidence::Medium,
                matched_text: "papadopoulou".to_string(),
                rationale: "surname only".to_string(),
            },
            MatchCandidate {
                client_name: "Eleni Papadopoulou".to_string(),
                confidence: MatchConfidence::Medium,
                matched_text: "papadopoulou".to_string(),
                rationale: "surname only".to_string(),
            },
        ];
        let uncertain = UncertainMatch::from_candidates(
            "evt_001".to_string(),
            "Παπαδοπούλου".to_string(),
            candidates,
        )
        .unwrap();
        assert_eq!(uncertain.suggested.client_name, "Maria Papadopoulou");
        assert_eq!(uncertain.candidates.len(), 2);
    }

    #[test]
    fn test_uncertain_match_requires_candidates() {
        assert!(
            UncertainMatch::from_candidates("evt".to_string(), "title".to_string(), vec![])
                .is_none()
        );
    }
}
