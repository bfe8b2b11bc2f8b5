//! Per-kind rule matching.

use companion_core::{Rule, RuleKind};

use crate::scoring::rule_score;

/// Find the best-scoring rule of the given kind, if any.
///
/// Ties are broken first-wins: a later rule replaces the current best
/// only with a strictly higher score, so rule list order decides equal
/// scores deterministically. Rules with empty trigger lists are skipped
/// defensively.
pub fn best_match<'a>(
    rules: &'a [Rule],
    kind: RuleKind,
    message: &str,
    message_tokens: &[String],
) -> Option<&'a Rule> {
    let mut best: Option<(&Rule, u32)> = None;

    for rule in rules.iter().filter(|r| r.kind == kind) {
        if rule.trigger_phrases.is_empty() {
            continue;
        }
        let score = rule_score(rule, message, message_tokens);
        if score == 0 {
            continue;
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((rule, score));
        }
    }

    best.map(|(rule, _)| rule)
}
