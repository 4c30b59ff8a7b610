// supply side: for each position, who holds it and who is ready for it
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::core::catalog::SkillIndex;
use crate::core::readiness::CareerReadiness;
use crate::core::types::{Person, Position, Skill};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyStatus {
    Critical,
    Low,
    Medium,
    High,
}

impl SupplyStatus {
    pub fn classify(total: usize, config: &EngineConfig) -> Self {
        if total == 0 {
            SupplyStatus::Critical
        } else if total <= config.supply_low_max {
            SupplyStatus::Low
        } else if total <= config.supply_medium_max {
            SupplyStatus::Medium
        } else {
            SupplyStatus::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyStatus::Critical => "critical",
            SupplyStatus::Low => "low",
            SupplyStatus::Medium => "medium",
            SupplyStatus::High => "high",
        }
    }
}

impl fmt::Display for SupplyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSupply {
    pub position: Position,
    /// People whose `position_id` is this position.
    pub current_holders: Vec<Person>,
    /// People who meet every requirement of this position.
    pub ready_candidates: Vec<Person>,
}

impl PositionSupply {
    pub fn current_count(&self) -> usize {
        self.current_holders.len()
    }

    pub fn ready_count(&self) -> usize {
        self.ready_candidates.len()
    }

    /// Ready + current. A holder who is also ready is counted twice.
    pub fn total_supply(&self) -> usize {
        self.ready_count() + self.current_count()
    }

    pub fn status(&self, config: &EngineConfig) -> SupplyStatus {
        SupplyStatus::classify(self.total_supply(), config)
    }
}

/// One entry per position, in input order. People keep input order inside each list.
///
/// Readiness is the same per-pair verdict the career ranking produces; no
/// separate matching rule lives here.
pub fn supply_by_position(people: &[Person], positions: &[Position], catalog: &[Skill]) -> Vec<PositionSupply> {
    let index = SkillIndex::new(catalog);

    let supply: Vec<PositionSupply> = positions
        .iter()
        .map(|position| {
            let ready_candidates = people
                .iter()
                .filter(|p| CareerReadiness::evaluate(p, position, &index).is_ready)
                .cloned()
                .collect();

            let current_holders = people
                .iter()
                .filter(|p| p.position_id == position.id)
                .cloned()
                .collect();

            PositionSupply {
                position: position.clone(),
                current_holders,
                ready_candidates,
            }
        })
        .collect();

    tracing::debug!(
        positions = supply.len(),
        people = people.len(),
        "computed supply by position"
    );
    supply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Level, SkillLevels};

    fn mk_levels(pairs: &[(&str, Level)]) -> SkillLevels {
        pairs.iter().map(|&(id, lvl)| (id, lvl)).collect()
    }

    fn mk_person(id: &str, position_id: &str, acquired: &[(&str, Level)]) -> Person {
        Person::new(id, id, position_id, mk_levels(acquired))
    }

    fn names(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn splits_holders_and_ready_candidates() {
        let catalog = vec![Skill::new("a", "A")];
        let positions = vec![
            Position::new("p_lead", "Lead", mk_levels(&[("a", 3)])),
            Position::new("p_junior", "Junior", mk_levels(&[("a", 1)])),
        ];
        let people = vec![
            mk_person("ann", "p_junior", &[("a", 3)]),
            mk_person("bob", "p_lead", &[("a", 2)]),
            mk_person("cat", "p_junior", &[]),
        ];

        let supply = supply_by_position(&people, &positions, &catalog);

        let lead = &supply[0];
        assert_eq!(names(&lead.current_holders), vec!["bob"]);
        assert_eq!(names(&lead.ready_candidates), vec!["ann"]);
        assert_eq!(lead.total_supply(), 2);

        let junior = &supply[1];
        assert_eq!(names(&junior.current_holders), vec!["ann", "cat"]);
        assert_eq!(names(&junior.ready_candidates), vec!["ann", "bob"]);
    }

    ///a holder who also meets the requirements shows up in both lists
    #[test]
    fn holder_who_is_ready_is_counted_twice() {
        let catalog = vec![Skill::new("a", "A")];
        let positions = vec![Position::new("p", "P", mk_levels(&[("a", 1)]))];
        let people = vec![mk_person("ann", "p", &[("a", 1)])];

        let supply = supply_by_position(&people, &positions, &catalog);

        assert_eq!(supply[0].current_count(), 1);
        assert_eq!(supply[0].ready_count(), 1);
        assert_eq!(supply[0].total_supply(), 2);
    }

    #[test]
    fn status_bands_follow_config() {
        let config = EngineConfig::default();

        assert_eq!(SupplyStatus::classify(0, &config), SupplyStatus::Critical);
        assert_eq!(SupplyStatus::classify(1, &config), SupplyStatus::Low);
        assert_eq!(SupplyStatus::classify(2, &config), SupplyStatus::Low);
        assert_eq!(SupplyStatus::classify(3, &config), SupplyStatus::Medium);
        assert_eq!(SupplyStatus::classify(5, &config), SupplyStatus::Medium);
        assert_eq!(SupplyStatus::classify(6, &config), SupplyStatus::High);

        let tight = EngineConfig { supply_low_max: 0, supply_medium_max: 1, ..EngineConfig::default() };
        assert_eq!(SupplyStatus::classify(1, &tight), SupplyStatus::Medium);
        assert_eq!(SupplyStatus::classify(2, &tight), SupplyStatus::High);
    }

    #[test]
    fn empty_position_is_critical() {
        let positions = vec![Position::new("p", "P", mk_levels(&[]))];
        let supply = supply_by_position(&[], &positions, &[]);

        assert_eq!(supply[0].total_supply(), 0);
        assert_eq!(supply[0].status(&EngineConfig::default()), SupplyStatus::Critical);
    }
}
