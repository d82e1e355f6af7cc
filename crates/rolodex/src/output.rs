//! JSON views of search results

use rolodex_core::{Contact, FieldMatch, MatchResult, SearchHit};
use serde::Serialize;

/// One attributed field match, reported by kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchView {
    pub field: String,
    pub kind: &'static str,
    pub score: f64,
}

impl From<&FieldMatch> for MatchView {
    fn from(m: &FieldMatch) -> Self {
        Self {
            field: m.field.to_string(),
            kind: m.tier.kind(),
            score: m.score,
        }
    }
}

/// A ranked contact as printed by `rolodex search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitView {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub matches: Vec<MatchView>,
}

impl From<&SearchHit<'_, Contact>> for HitView {
    fn from(hit: &SearchHit<'_, Contact>) -> Self {
        Self {
            id: hit.record.id.clone(),
            name: hit.record.name.clone(),
            score: hit.scoring.total_score,
            matches: hit.scoring.matches.iter().map(MatchView::from).collect(),
        }
    }
}

/// Result of `rolodex match`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResultView {
    pub tier: String,
    pub kind: &'static str,
    pub score: f64,
}

impl From<MatchResult> for MatchResultView {
    fn from(result: MatchResult) -> Self {
        Self {
            tier: result.tier.to_string(),
            kind: result.tier.kind(),
            score: result.score,
        }
    }
}

/// Serialize as compact or pretty JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_core::{fuzzy_match, SearchEngine};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hit_view() {
        let records = vec![Contact::new("7", "John Doe").with_tags(["john"])];
        let hits = SearchEngine::new().search(&records, "john");
        let view = HitView::from(&hits[0]);

        assert_eq!(view.id, "7");
        assert_eq!(view.score, 1.0);
        assert_eq!(
            view.matches,
            vec![
                MatchView {
                    field: "name".to_string(),
                    kind: "exact",
                    score: 0.95,
                },
                MatchView {
                    field: "tag".to_string(),
                    kind: "exact",
                    score: 0.9,
                },
            ]
        );
    }

    #[test]
    fn test_match_view_reports_word_as_exact() {
        let view = MatchResultView::from(fuzzy_match("john", "john doe"));
        assert_eq!(view.tier, "word");
        assert_eq!(view.kind, "exact");
        assert_eq!(view.score, 0.95);
    }

    #[test]
    fn test_to_json() {
        let view = MatchResultView::from(MatchResult::none());
        assert_eq!(
            to_json(&view, false).unwrap(),
            r#"{"tier":"none","kind":"none","score":0.0}"#
        );
    }
}
