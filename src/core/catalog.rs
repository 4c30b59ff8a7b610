// id -> skill resolution
use std::collections::HashMap;

use crate::core::types::Skill;

/// Constant-time `id -> &Skill` index over a borrowed catalog.
///
/// Built once per engine call. On duplicate ids the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct SkillIndex<'a> {
    by_id: HashMap<&'a str, &'a Skill>,
}

impl<'a> SkillIndex<'a> {
    pub fn new(catalog: &'a [Skill]) -> Self {
        let by_id = catalog.iter().map(|s| (s.id.as_str(), s)).collect();
        Self { by_id }
    }

    //None for ids outside the catalog; callers drop those silently
    pub fn resolve(&self, skill_id: &str) -> Option<&'a Skill> {
        let found = self.by_id.get(skill_id).copied();
        if found.is_none() {
            tracing::trace!(skill_id, "skill id not in catalog, dropped");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
