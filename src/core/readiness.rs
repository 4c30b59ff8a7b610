// readiness verdicts + ranking across positions
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::catalog::SkillIndex;
use crate::core::classify::SkillGap;
use crate::core::delta::needed_with_index;
use crate::core::types::{Person, Position, Skill};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerReadiness {
    pub position: Position,
    /// `missing_skills.is_empty()`
    pub is_ready: bool,
    /// Deficit rows only, largest shortfall first.
    pub missing_skills: Vec<SkillGap>,
}

impl CareerReadiness {
    pub(crate) fn evaluate(person: &Person, position: &Position, index: &SkillIndex<'_>) -> Self {
        let missing_skills = needed_with_index(person, position, index);
        Self {
            position: position.clone(),
            is_ready: missing_skills.is_empty(),
            missing_skills,
        }
    }

    pub fn gap_count(&self) -> usize {
        self.missing_skills.len()
    }
}

//ready first, then fewest missing skills
fn rank_order(a: &CareerReadiness, b: &CareerReadiness) -> Ordering {
    b.is_ready
        .cmp(&a.is_ready)
        .then_with(|| a.missing_skills.len().cmp(&b.missing_skills.len()))
}

/// One verdict per position in `positions`, including the person's current one.
///
/// Ordering: ready positions first, then ascending by number of missing skills.
/// The sort is stable, so anything still tied stays in input order.
pub fn rank_positions_by_readiness(person: &Person, positions: &[Position], catalog: &[Skill]) -> Vec<CareerReadiness> {
    let index = SkillIndex::new(catalog);

    let mut ranked: Vec<CareerReadiness> = positions
        .iter()
        .map(|position| CareerReadiness::evaluate(person, position, &index))
        .collect();
    ranked.sort_by(rank_order);

    tracing::debug!(
        person = %person.id,
        positions = ranked.len(),
        ready = ranked.iter().filter(|r| r.is_ready).count(),
        "ranked positions by readiness"
    );
    ranked
}

/// Readiness of one person for one position. Same check as a single-entry ranking.
pub fn readiness_for(person: &Person, position: &Position, catalog: &[Skill]) -> CareerReadiness {
    let index = SkillIndex::new(catalog);
    CareerReadiness::evaluate(person, position, &index)
}

/// A ranking split into "ready now" and "within reach".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerOutlook {
    pub ready: Vec<CareerReadiness>,
    /// Not ready, but at most `near_ready_max_gaps` skills short.
    pub within_reach: Vec<CareerReadiness>,
}

impl CareerOutlook {
    /// Keeps ranked order inside each bucket. Positions further away are left out.
    pub fn from_ranked(ranked: Vec<CareerReadiness>, config: &EngineConfig) -> Self {
        let mut outlook = CareerOutlook::default();
        for r in ranked {
            if r.is_ready {
                outlook.ready.push(r);
            } else if r.gap_count() <= config.near_ready_max_gaps {
                outlook.within_reach.push(r);
            }
        }
        outlook
    }
}
