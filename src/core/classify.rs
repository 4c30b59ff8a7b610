// per-skill gap classification against the current role
use serde::{Deserialize, Serialize};

use crate::core::catalog::SkillIndex;
use crate::core::state::GapStatus;
use crate::core::types::{Level, Person, Position, Skill};

/// One row of a gap table. Freshly built on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: Skill,
    pub required: Level,
    pub acquired: Level,
    /// `acquired - required`
    pub gap: Level,
    pub status: GapStatus,
}

impl SkillGap {
    pub fn new(skill: &Skill, required: Level, acquired: Level) -> Self {
        let gap = acquired.saturating_sub(required);
        Self {
            skill: skill.clone(),
            required,
            acquired,
            gap,
            status: GapStatus::classify(required, gap),
        }
    }

    //rows that only exist because something blocks: always Deficit
    pub(crate) fn deficit(skill: &Skill, required: Level, acquired: Level) -> Self {
        Self {
            skill: skill.clone(),
            required,
            acquired,
            gap: acquired.saturating_sub(required),
            status: GapStatus::Deficit,
        }
    }
}

/// Gap detail for `person` against `position`, ordered by skill name.
///
/// Reports every skill the person holds (required or not) plus every required
/// skill they do not hold. Skill ids missing from `catalog` are dropped. Every
/// entry of `person.acquired` is reported, an explicit level 0 included, and
/// required skills only get a second-pass row when they have no entry at all,
/// so a skill never shows up twice.
///
/// Name ordering is a plain byte-wise comparison: `"Zebra"` sorts before `"apple"`.
pub fn compute_gaps_for_current_role(person: &Person, position: &Position, catalog: &[Skill]) -> Vec<SkillGap> {
    let index = SkillIndex::new(catalog);
    let mut gaps = Vec::with_capacity(person.acquired.len() + position.requirements.len());

    //1) every entry the person has, level 0 included
    for (skill_id, acquired) in person.acquired.iter() {
        let Some(skill) = index.resolve(skill_id) else {
            continue;
        };
        let required = position.requirements.level_of(skill_id);
        gaps.push(SkillGap::new(skill, required, acquired));
    }

    //2) required skills with no entry at all
    for (skill_id, required) in position.requirements.iter() {
        if required <= 0 || person.acquired.contains(skill_id) {
            continue;
        }
        let Some(skill) = index.resolve(skill_id) else {
            continue;
        };
        gaps.push(SkillGap::deficit(skill, required, 0));
    }

    //stable: equal names keep the order above
    gaps.sort_by(|a, b| a.skill.name.cmp(&b.skill.name));

    tracing::debug!(
        person = %person.id,
        position = %position.id,
        rows = gaps.len(),
        "computed current role gaps"
    );
    gaps
}

/// Counts behind the summary tiles of a gap table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapSummary {
    pub deficit: usize,
    /// met + excess
    pub satisfied: usize,
    /// held but not required
    pub extra: usize,
}

impl GapSummary {
    pub fn from_gaps(gaps: &[SkillGap]) -> Self {
        let mut summary = GapSummary::default();
        for g in gaps {
            match g.status {
                GapStatus::Deficit => summary.deficit += 1,
                GapStatus::Met | GapStatus::Excess => summary.satisfied += 1,
                GapStatus::NotRequired => summary.extra += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.deficit + self.satisfied + self.extra
    }

    /// No deficits on a non-empty table. An empty table is not "ready", it is unknown.
    pub fn is_ready(&self) -> bool {
        self.deficit == 0 && self.total() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SkillLevels;

    fn mk_levels(pairs: &[(&str, Level)]) -> SkillLevels {
        pairs.iter().map(|&(id, lvl)| (id, lvl)).collect()
    }

    fn mk_person(acquired: &[(&str, Level)]) -> Person {
        Person::new("e_test", "Test Person", "p_test", mk_levels(acquired))
    }

    fn mk_position(requirements: &[(&str, Level)]) -> Position {
        Position::new("p_test", "Test Position", mk_levels(requirements))
    }

    fn mk_catalog(names: &[(&str, &str)]) -> Vec<Skill> {
        names.iter().map(|&(id, name)| Skill::new(id, name)).collect()
    }

    fn row<'a>(gaps: &'a [SkillGap], name: &str) -> &'a SkillGap {
        gaps.iter().find(|g| g.skill.name == name).unwrap()
    }

    ///person {A:2, B:3} against position {A:3, C:1}
    ///expected: three rows ordered by name with A and C in deficit, B not required
    #[test]
    fn end_to_end_rows_and_statuses() {
        let catalog = mk_catalog(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let person = mk_person(&[("a", 2), ("b", 3)]);
        let position = mk_position(&[("a", 3), ("c", 1)]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);

        let names: Vec<&str> = gaps.iter().map(|g| g.skill.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let a = row(&gaps, "A");
        assert_eq!((a.required, a.acquired, a.gap, a.status), (3, 2, -1, GapStatus::Deficit));

        let b = row(&gaps, "B");
        assert_eq!((b.required, b.acquired, b.gap, b.status), (0, 3, 3, GapStatus::NotRequired));

        let c = row(&gaps, "C");
        assert_eq!((c.required, c.acquired, c.gap, c.status), (1, 0, -1, GapStatus::Deficit));
    }

    #[test]
    fn orders_by_skill_name_not_by_input() {
        let catalog = mk_catalog(&[("s_sql", "SQL"), ("s_comm", "Communication")]);
        let person = mk_person(&[("s_sql", 3), ("s_comm", 1)]);
        let position = mk_position(&[("s_comm", 2)]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);

        assert_eq!(gaps[0].skill.name, "Communication");
        assert_eq!(gaps[0].status, GapStatus::Deficit);
        assert_eq!(gaps[1].skill.name, "SQL");
        assert_eq!(gaps[1].status, GapStatus::NotRequired);
    }

    #[test]
    fn name_order_is_case_sensitive() {
        let catalog = mk_catalog(&[("x", "apple"), ("y", "Zebra")]);
        let person = mk_person(&[("x", 1), ("y", 1)]);
        let position = mk_position(&[]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);
        let names: Vec<&str> = gaps.iter().map(|g| g.skill.name.as_str()).collect();

        //uppercase sorts before lowercase byte-wise
        assert_eq!(names, vec!["Zebra", "apple"]);
    }

    #[test]
    fn unknown_skill_ids_are_dropped_not_reported() {
        let catalog = mk_catalog(&[("a", "A")]);
        let person = mk_person(&[("a", 1), ("ghost_held", 3)]);
        let position = mk_position(&[("a", 1), ("ghost_required", 2)]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].skill.id, "a");
        assert_eq!(gaps[0].status, GapStatus::Met);
    }

    ///scenario: person {a:0, b:0} against position {a:2}
    ///expected: one deficit row for a, and b still reported as not required
    #[test]
    fn explicit_zero_level_yields_single_row_per_skill() {
        let catalog = mk_catalog(&[("a", "A"), ("b", "B")]);
        let person = mk_person(&[("a", 0), ("b", 0)]);
        let position = mk_position(&[("a", 2)]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);

        assert_eq!(gaps.len(), 2, "a skill must never appear twice");

        let a = row(&gaps, "A");
        assert_eq!((a.required, a.acquired, a.gap, a.status), (2, 0, -2, GapStatus::Deficit));

        let b = row(&gaps, "B");
        assert_eq!((b.required, b.acquired, b.gap, b.status), (0, 0, 0, GapStatus::NotRequired));
    }

    #[test]
    fn zero_level_entry_only_skips_the_second_pass() {
        let catalog = mk_catalog(&[("a", "A"), ("c", "C"), ("x", "X")]);
        let person = mk_person(&[("x", 0), ("a", 0)]);
        let position = mk_position(&[("a", 2), ("c", 1)]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);

        let ids: Vec<&str> = gaps.iter().map(|g| g.skill.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "x"]);
        //a and c are both deficits, one reached through the entry, one through its absence
        assert_eq!(row(&gaps, "A").status, GapStatus::Deficit);
        assert_eq!(row(&gaps, "C").status, GapStatus::Deficit);
        assert_eq!(row(&gaps, "X").status, GapStatus::NotRequired);
        assert_eq!(GapSummary::from_gaps(&gaps), GapSummary { deficit: 2, satisfied: 0, extra: 1 });
    }

    #[test]
    fn zero_requirement_is_not_a_requirement() {
        let catalog = mk_catalog(&[("a", "A")]);
        let person = mk_person(&[]);
        let position = mk_position(&[("a", 0)]);

        assert!(compute_gaps_for_current_role(&person, &position, &catalog).is_empty());
    }

    #[test]
    fn equal_names_keep_input_order() {
        //names are not unique across ids
        let catalog = mk_catalog(&[("first", "Same"), ("second", "Same")]);
        let person = mk_person(&[("second", 1), ("first", 2)]);
        let position = mk_position(&[]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);
        let ids: Vec<&str> = gaps.iter().map(|g| g.skill.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn repeated_calls_are_deep_equal() {
        let catalog = mk_catalog(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let person = mk_person(&[("a", 2), ("b", 3)]);
        let position = mk_position(&[("a", 3), ("c", 1)]);

        let first = compute_gaps_for_current_role(&person, &position, &catalog);
        let second = compute_gaps_for_current_role(&person, &position, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_counts_each_bucket() {
        let catalog = mk_catalog(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")]);
        let person = mk_person(&[("a", 2), ("b", 3), ("c", 2)]);
        let position = mk_position(&[("a", 3), ("c", 1), ("d", 1)]);

        let gaps = compute_gaps_for_current_role(&person, &position, &catalog);
        let summary = GapSummary::from_gaps(&gaps);

        assert_eq!(summary, GapSummary { deficit: 2, satisfied: 1, extra: 1 });
        assert_eq!(summary.total(), gaps.len());
        assert!(!summary.is_ready());
    }

    #[test]
    fn summary_ready_needs_at_least_one_row() {
        assert!(!GapSummary::from_gaps(&[]).is_ready());

        let skill = Skill::new("a", "A");
        let met = SkillGap::new(&skill, 2, 2);
        assert!(GapSummary::from_gaps(&[met]).is_ready());
    }
}
