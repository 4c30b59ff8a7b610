// organisation-wide totals for the dashboard
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::classify::compute_gaps_for_current_role;
use crate::core::types::{Person, Position, Skill};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationOverview {
    pub total_people: usize,
    /// Distinct `position_id` values among people.
    pub staffed_positions: usize,
    pub total_skills: usize,
    /// Share of current-role requirements that are met or exceeded, 0..=100.
    pub readiness_percentage: u32,
}

impl OrganizationOverview {
    /// People whose `position_id` does not resolve are left out of the percentage.
    pub fn compute(people: &[Person], positions: &[Position], skills: &[Skill]) -> Self {
        let by_id: HashMap<&str, &Position> = positions.iter().map(|p| (p.id.as_str(), p)).collect();
        let staffed: HashSet<&str> = people.iter().map(|p| p.position_id.as_str()).collect();

        let mut required_total = 0usize;
        let mut met_total = 0usize;

        for person in people {
            let Some(position) = by_id.get(person.position_id.as_str()) else {
                tracing::trace!(person = %person.id, position = %person.position_id, "position not found, skipped");
                continue;
            };

            for gap in compute_gaps_for_current_role(person, position, skills) {
                if gap.required > 0 {
                    required_total += 1;
                    if gap.gap >= 0 {
                        met_total += 1;
                    }
                }
            }
        }

        Self {
            total_people: people.len(),
            staffed_positions: staffed.len(),
            total_skills: skills.len(),
            readiness_percentage: percentage(met_total, required_total),
        }
    }
}

//rounded half up, 0 when there is nothing to measure
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
