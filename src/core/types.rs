// shared ids + plain data model
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub type SkillId = String;
pub type PositionId = String;
pub type PersonId = String;

/// Skill level. 1..=3 by convention, but never range checked by the engine.
pub type Level = i32;

/// Sparse `skill_id -> level` mapping. A missing key reads as level 0.
///
/// Insertion order is kept: it is the "input order" that stable sorts fall back to on ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillLevels(IndexMap<SkillId, Level>);

impl SkillLevels {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    //default lookup: absent means 0
    pub fn level_of(&self, skill_id: &str) -> Level {
        self.0.get(skill_id).copied().unwrap_or(0)
    }

    /// `true` when the skill has a non-zero level. An explicit 0 counts as not held.
    pub fn holds(&self, skill_id: &str) -> bool {
        self.level_of(skill_id) != 0
    }

    pub fn contains(&self, skill_id: &str) -> bool {
        self.0.contains_key(skill_id)
    }

    pub fn set(&mut self, skill_id: impl Into<SkillId>, level: Level) -> Option<Level> {
        self.0.insert(skill_id.into(), level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> + '_ {
        self.0.iter().map(|(id, &lvl)| (id.as_str(), lvl))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<SkillId>> FromIterator<(K, Level)> for SkillLevels {
    fn from_iter<I: IntoIterator<Item = (K, Level)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

impl Skill {
    pub fn new(id: impl Into<SkillId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: PositionId,
    pub name: String,
    #[serde(default, alias = "skills_needed")]
    pub requirements: SkillLevels,
}

impl Position {
    pub fn new(id: impl Into<PositionId>, name: impl Into<String>, requirements: SkillLevels) -> Self {
        Self { id: id.into(), name: name.into(), requirements }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub position_id: PositionId,
    #[serde(default, alias = "skills_acquired")]
    pub acquired: SkillLevels,
}

impl Person {
    pub fn new(
        id: impl Into<PersonId>,
        name: impl Into<String>,
        position_id: impl Into<PositionId>,
        acquired: SkillLevels,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position_id: position_id.into(),
            acquired,
        }
    }
}
