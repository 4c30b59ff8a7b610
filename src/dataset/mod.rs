// the three flat datasets a caller holds in memory
pub mod loader;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::classify::{SkillGap, compute_gaps_for_current_role};
use crate::core::delta::compute_gaps_for_target_role;
use crate::core::overview::OrganizationOverview;
use crate::core::readiness::{CareerOutlook, CareerReadiness, rank_positions_by_readiness};
use crate::core::supply::{PositionSupply, supply_by_position};
use crate::core::types::{Person, Position, Skill};

/// Skills, positions and people as loaded by the caller.
///
/// Every analysis method is a thin delegation to the engine. Nothing is cached:
/// edit the vectors and call again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub people: Vec<Person>,
}

impl Dataset {
    pub fn new(skills: Vec<Skill>, positions: Vec<Position>, people: Vec<Person>) -> Self {
        Self { skills, positions, people }
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn current_position_of(&self, person: &Person) -> Option<&Position> {
        self.position(&person.position_id)
    }

    /// Empty when the person's current position is not in the dataset.
    pub fn current_role_gaps(&self, person: &Person) -> Vec<SkillGap> {
        match self.current_position_of(person) {
            Some(position) => compute_gaps_for_current_role(person, position, &self.skills),
            None => Vec::new(),
        }
    }

    pub fn needed_for(&self, person: &Person, target: &Position) -> Vec<SkillGap> {
        compute_gaps_for_target_role(person, target, &self.skills)
    }

    pub fn career_ranking(&self, person: &Person) -> Vec<CareerReadiness> {
        rank_positions_by_readiness(person, &self.positions, &self.skills)
    }

    pub fn career_outlook(&self, person: &Person, config: &EngineConfig) -> CareerOutlook {
        CareerOutlook::from_ranked(self.career_ranking(person), config)
    }

    pub fn supply(&self) -> Vec<PositionSupply> {
        supply_by_position(&self.people, &self.positions, &self.skills)
    }

    pub fn overview(&self) -> OrganizationOverview {
        OrganizationOverview::compute(&self.people, &self.positions, &self.skills)
    }

    /// People currently in `position_id`, in dataset order.
    pub fn holders_of<'a>(&'a self, position_id: &'a str) -> impl Iterator<Item = &'a Person> + 'a {
        self.people.iter().filter(move |p| p.position_id == position_id)
    }
}
