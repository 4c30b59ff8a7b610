// non-fatal integrity lint over a Dataset.
// the engine never calls this: it degrades by omission instead.
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::state::SkillRank;
use crate::core::types::{Level, SkillLevels};
use crate::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Skill,
    Position,
    Person,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Skill => "skill",
            EntityKind::Position => "position",
            EntityKind::Person => "person",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum DatasetIssue {
    DuplicateId { kind: EntityKind, id: String },
    EmptyName { kind: EntityKind, id: String },
    /// Two entries whose names match once trimmed and lowercased.
    DuplicateName { kind: EntityKind, name: String },
    /// A person's `position_id` that no position carries.
    UnknownPosition { person: String, position_id: String },
    /// A requirement or acquired entry for a skill id outside the catalog.
    UnknownSkill { owner: EntityKind, owner_id: String, skill_id: String },
    /// Level outside `1..=3`.
    LevelOutOfRange { owner: EntityKind, owner_id: String, skill_id: String, level: Level },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::DuplicateId { kind, id } => write!(f, "duplicate {kind} id '{id}'"),
            DatasetIssue::EmptyName { kind, id } => write!(f, "{kind} '{id}' has an empty name"),
            DatasetIssue::DuplicateName { kind, name } => write!(f, "duplicate {kind} name '{name}'"),
            DatasetIssue::UnknownPosition { person, position_id } => {
                write!(f, "person '{person}' references unknown position '{position_id}'")
            }
            DatasetIssue::UnknownSkill { owner, owner_id, skill_id } => {
                write!(f, "{owner} '{owner_id}' references unknown skill '{skill_id}'")
            }
            DatasetIssue::LevelOutOfRange { owner, owner_id, skill_id, level } => {
                write!(f, "{owner} '{owner_id}' has level {level} for '{skill_id}', expected 1..=3")
            }
        }
    }
}

impl Dataset {
    /// Every integrity problem found, in dataset order. Empty means clean.
    pub fn validate(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();

        let skill_ids = collect_ids(EntityKind::Skill, self.skills.iter().map(|s| (&s.id, &s.name)), &mut issues);
        let position_ids =
            collect_ids(EntityKind::Position, self.positions.iter().map(|p| (&p.id, &p.name)), &mut issues);
        collect_ids(EntityKind::Person, self.people.iter().map(|p| (&p.id, &p.name)), &mut issues);
        check_names(EntityKind::Skill, self.skills.iter().map(|s| &s.name), &mut issues);

        for position in &self.positions {
            check_levels(EntityKind::Position, &position.id, &position.requirements, &skill_ids, &mut issues);
        }

        for person in &self.people {
            if !position_ids.contains(person.position_id.as_str()) {
                issues.push(DatasetIssue::UnknownPosition {
                    person: person.id.clone(),
                    position_id: person.position_id.clone(),
                });
            }
            check_levels(EntityKind::Person, &person.id, &person.acquired, &skill_ids, &mut issues);
        }

        for issue in &issues {
            tracing::warn!(%issue, "dataset integrity issue");
        }
        issues
    }
}

//ids seen, plus duplicate/empty-name findings
fn collect_ids<'a>(
    kind: EntityKind,
    entries: impl Iterator<Item = (&'a String, &'a String)>,
    issues: &mut Vec<DatasetIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for (id, name) in entries {
        if !seen.insert(id.as_str()) {
            issues.push(DatasetIssue::DuplicateId { kind, id: id.clone() });
        }
        if name.trim().is_empty() {
            issues.push(DatasetIssue::EmptyName { kind, id: id.clone() });
        }
    }
    seen
}

//names compared trimmed + lowercased; empty names are EmptyName's business
fn check_names<'a>(kind: EntityKind, names: impl Iterator<Item = &'a String>, issues: &mut Vec<DatasetIssue>) {
    let mut seen = HashSet::new();
    for name in names {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        if !seen.insert(key) {
            issues.push(DatasetIssue::DuplicateName { kind, name: name.clone() });
        }
    }
}

fn check_levels(
    owner: EntityKind,
    owner_id: &str,
    levels: &SkillLevels,
    skill_ids: &HashSet<&str>,
    issues: &mut Vec<DatasetIssue>,
) {
    for (skill_id, level) in levels.iter() {
        if !skill_ids.contains(skill_id) {
            issues.push(DatasetIssue::UnknownSkill {
                owner,
                owner_id: owner_id.to_string(),
                skill_id: skill_id.to_string(),
            });
        }
        if SkillRank::from_level(level).is_none() {
            issues.push(DatasetIssue::LevelOutOfRange {
                owner,
                owner_id: owner_id.to_string(),
                skill_id: skill_id.to_string(),
                level,
            });
        }
    }
}
