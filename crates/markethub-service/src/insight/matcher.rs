//! Pure preference-matching logic for marketing insights.
//!
//! Scoring is additive over four criteria. The classification criteria
//! (property type, location, category) act as hard gates when the user has
//! stated a preference AND the insight carries the field: a stated preference
//! that does not match disqualifies the insight outright. Keyword criteria
//! only ever add score. An empty preference list, or a missing insight field,
//! means that criterion is skipped entirely.

use uuid::Uuid;

use markethub_entity::insight::MarketingInsight;
use markethub_entity::notification::NotificationPreference;

/// Score contribution for a property type match.
const WEIGHT_PROPERTY_TYPE: i32 = 1;
/// Score contribution for a location match.
const WEIGHT_LOCATION: i32 = 1;
/// Score contribution for a category match (double weight).
const WEIGHT_CATEGORY: i32 = 2;
/// Score contribution for exact keyword-list overlap.
const WEIGHT_KEYWORD_OVERLAP: i32 = 3;
/// Score contribution per preference keyword found in the summary.
const WEIGHT_SUMMARY_KEYWORD: i32 = 1;

/// The outcome of evaluating one preference against one insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDecision {
    /// Whether the preference matched (gates passed and threshold met).
    pub matched: bool,
    /// The accumulated relevance score, whether or not it matched.
    pub score: i32,
}

/// A matched user together with the relevance score that matched them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The user whose preference matched.
    pub user_id: Uuid,
    /// The relevance score.
    pub score: i32,
}

/// Evaluate a single preference against an insight.
///
/// Pure and deterministic: same inputs always produce the same decision.
/// A disabled preference never matches and scores zero.
pub fn evaluate(insight: &MarketingInsight, pref: &NotificationPreference) -> MatchDecision {
    if !pref.enabled {
        return MatchDecision {
            matched: false,
            score: 0,
        };
    }

    let mut matches = true;
    let mut score = 0i32;

    // Property type: hard gate when both sides are present.
    if !pref.property_types.is_empty() {
        if let Some(property_type) = &insight.property_type {
            if pref.property_types.iter().any(|p| p == property_type) {
                score += WEIGHT_PROPERTY_TYPE;
            } else {
                matches = false;
            }
        }
    }

    // Location: any preferred location as a case-insensitive substring.
    if !pref.locations.is_empty() {
        if let Some(location) = &insight.location {
            let location_lower = location.to_lowercase();
            if pref
                .locations
                .iter()
                .any(|l| location_lower.contains(&l.to_lowercase()))
            {
                score += WEIGHT_LOCATION;
            } else {
                matches = false;
            }
        }
    }

    // Category: double weight.
    if !pref.categories.is_empty() {
        if let Some(category) = &insight.category {
            if pref.categories.iter().any(|c| c == category) {
                score += WEIGHT_CATEGORY;
            } else {
                matches = false;
            }
        }
    }

    // Keyword-list overlap boosts but never gates.
    if !pref.keyword_matches.is_empty() {
        if insight
            .keywords
            .iter()
            .any(|k| pref.keyword_matches.iter().any(|p| p == k))
        {
            score += WEIGHT_KEYWORD_OVERLAP;
        }

        // Each preference keyword found in the summary adds, cumulatively.
        let summary_lower = insight.summary.to_lowercase();
        for keyword in &pref.keyword_matches {
            if summary_lower.contains(&keyword.to_lowercase()) {
                score += WEIGHT_SUMMARY_KEYWORD;
            }
        }
    }

    // Scores never go negative, so a threshold of zero or below is always
    // satisfied once the gates pass.
    let matched = matches && score >= pref.relevance_threshold;

    MatchDecision { matched, score }
}

/// Evaluate an insight against a preference set, returning matched users.
///
/// Output order follows the input preference order.
pub fn match_preferences(
    insight: &MarketingInsight,
    prefs: &[NotificationPreference],
) -> Vec<MatchOutcome> {
    prefs
        .iter()
        .filter_map(|pref| {
            let decision = evaluate(insight, pref);
            decision.matched.then_some(MatchOutcome {
                user_id: pref.user_id,
                score: decision.score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn insight() -> MarketingInsight {
        MarketingInsight {
            id: Uuid::new_v4(),
            category: Some("luxury".to_string()),
            property_type: Some("condo".to_string()),
            location: Some("Downtown Seattle".to_string()),
            summary: "Waterfront condo demand is rising sharply this quarter".to_string(),
            keywords: vec!["waterfront".to_string(), "demand".to_string()],
            campaign_id: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn pref() -> NotificationPreference {
        NotificationPreference::default_for_user(Uuid::new_v4())
    }

    #[test]
    fn test_disabled_preference_never_matches() {
        let mut p = pref();
        p.enabled = false;
        let d = evaluate(&insight(), &p);
        assert!(!d.matched);
        assert_eq!(d.score, 0);
    }

    #[test]
    fn test_empty_preference_matches_everything_at_zero() {
        let d = evaluate(&insight(), &pref());
        assert!(d.matched);
        assert_eq!(d.score, 0);
    }

    #[test]
    fn test_property_type_gate_and_weight() {
        let mut p = pref();
        p.property_types = vec!["condo".to_string()];
        let d = evaluate(&insight(), &p);
        assert!(d.matched);
        assert_eq!(d.score, 1);

        p.property_types = vec!["farm".to_string()];
        assert!(!evaluate(&insight(), &p).matched);
    }

    #[test]
    fn test_location_substring_is_case_insensitive() {
        let mut p = pref();
        p.locations = vec!["seattle".to_string()];
        let d = evaluate(&insight(), &p);
        assert!(d.matched);
        assert_eq!(d.score, 1);

        p.locations = vec!["Portland".to_string()];
        assert!(!evaluate(&insight(), &p).matched);
    }

    #[test]
    fn test_category_has_double_weight() {
        let mut p = pref();
        p.categories = vec!["luxury".to_string()];
        let d = evaluate(&insight(), &p);
        assert!(d.matched);
        assert_eq!(d.score, 2);
    }

    #[test]
    fn test_missing_insight_field_skips_criterion() {
        let mut i = insight();
        i.category = None;
        let mut p = pref();
        p.categories = vec!["luxury".to_string()];
        // Stated preference but the insight carries no category: neither
        // gate nor boost.
        let d = evaluate(&i, &p);
        assert!(d.matched);
        assert_eq!(d.score, 0);
    }

    #[test]
    fn test_keyword_overlap_boosts_but_never_gates() {
        let mut p = pref();
        p.keyword_matches = vec!["waterfront".to_string()];
        let d = evaluate(&insight(), &p);
        assert!(d.matched);
        // +3 overlap, +1 "waterfront" appears in the summary.
        assert_eq!(d.score, 4);

        // No overlap at all: still matched, just unscored.
        p.keyword_matches = vec!["acreage".to_string()];
        let d = evaluate(&insight(), &p);
        assert!(d.matched);
        assert_eq!(d.score, 0);
    }

    #[test]
    fn test_summary_keyword_hits_accumulate() {
        let mut p = pref();
        p.keyword_matches = vec!["demand".to_string(), "quarter".to_string()];
        let d = evaluate(&insight(), &p);
        // +3 overlap ("demand" in keyword list), +1 "demand" in summary,
        // +1 "quarter" in summary.
        assert_eq!(d.score, 5);
    }

    #[test]
    fn test_threshold_gates_low_scores() {
        let mut p = pref();
        p.categories = vec!["luxury".to_string()];
        p.relevance_threshold = 3;
        let d = evaluate(&insight(), &p);
        assert!(!d.matched);
        assert_eq!(d.score, 2);

        p.relevance_threshold = 2;
        assert!(evaluate(&insight(), &p).matched);
    }

    #[test]
    fn test_negative_threshold_always_satisfied() {
        let mut p = pref();
        p.relevance_threshold = -5;
        assert!(evaluate(&insight(), &p).matched);
    }

    #[test]
    fn test_full_combination_score() {
        let mut p = pref();
        p.property_types = vec!["condo".to_string()];
        p.locations = vec!["Seattle".to_string()];
        p.categories = vec!["luxury".to_string()];
        p.keyword_matches = vec!["waterfront".to_string()];
        let d = evaluate(&insight(), &p);
        assert!(d.matched);
        // 1 + 1 + 2 + 3 + 1 (summary hit)
        assert_eq!(d.score, 8);
    }

    #[test]
    fn test_match_preferences_preserves_order_and_filters() {
        let i = insight();
        let enabled = pref();
        let mut disabled = pref();
        disabled.enabled = false;
        let mut gated = pref();
        gated.categories = vec!["pricing".to_string()];

        let outcomes = match_preferences(&i, &[enabled.clone(), disabled, gated]);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].user_id, enabled.user_id);
    }
}
