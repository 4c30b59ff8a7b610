// what must improve to reach a target role
use crate::core::catalog::SkillIndex;
use crate::core::classify::SkillGap;
use crate::core::types::{Person, Position, Skill};

/// Deficits only: one row per requirement of `target` that `person` falls short of.
///
/// Skills already met or exceeded and skills the role does not require are left
/// out entirely. Rows come out largest shortfall first (`gap` ascending); equal
/// gaps keep the requirement order of `target`.
pub fn compute_gaps_for_target_role(person: &Person, target: &Position, catalog: &[Skill]) -> Vec<SkillGap> {
    let index = SkillIndex::new(catalog);
    let needed = needed_with_index(person, target, &index);

    tracing::debug!(
        person = %person.id,
        target = %target.id,
        deficits = needed.len(),
        "computed target role gaps"
    );
    needed
}

//caller owns the index; rankings reuse one across positions
pub(crate) fn needed_with_index(person: &Person, target: &Position, index: &SkillIndex<'_>) -> Vec<SkillGap> {
    let mut needed: Vec<SkillGap> = target
        .requirements
        .iter()
        .filter_map(|(skill_id, required)| {
            let skill = index.resolve(skill_id)?;
            let acquired = person.acquired.level_of(skill_id);
            let row = SkillGap::deficit(skill, required, acquired);
            (row.gap < 0).then_some(row)
        })
        .collect();

    needed.sort_by_key(|g| g.gap);
    needed
}
