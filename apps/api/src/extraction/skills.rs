use std::collections::HashSet;

use tracing::debug;

use crate::extraction::lexicon::SkillLexicon;

/// Lower-cases and trims a skill token.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalizes a skill list, dropping blanks and duplicates while keeping the
/// first-seen order.
pub fn normalize_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    skills
        .into_iter()
        .map(|s| normalize_skill(s.as_ref()))
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

/// Extracts every lexicon skill mentioned in `text`, ordered by where it
/// first appears. Category information is discarded.
pub fn extract_skills(text: &str, lexicon: &SkillLexicon) -> Vec<String> {
    let mut hits = lexicon.scan(text);
    // stable sort: ties keep lexicon order
    hits.sort_by_key(|h| h.position);
    let skills = normalize_skills(hits.into_iter().map(|h| h.skill));
    debug!(count = skills.len(), "extracted skills");
    skills
}
