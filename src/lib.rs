//! Capability matching: per-skill gaps between what people hold and what
//! positions require, and readiness verdicts across positions.
//!
//! Everything under `core` is pure and synchronous: no I/O, no shared state,
//! inputs are only borrowed. `dataset` is the in-memory holder a surrounding
//! application loads and hands to the engine.

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;

pub use crate::config::EngineConfig;
pub use crate::core::catalog::SkillIndex;
pub use crate::core::classify::{GapSummary, SkillGap, compute_gaps_for_current_role};
pub use crate::core::delta::compute_gaps_for_target_role;
pub use crate::core::overview::OrganizationOverview;
pub use crate::core::readiness::{CareerOutlook, CareerReadiness, rank_positions_by_readiness, readiness_for};
pub use crate::core::state::{GapStatus, SkillRank};
pub use crate::core::supply::{PositionSupply, SupplyStatus, supply_by_position};
pub use crate::core::types::{Level, Person, PersonId, Position, PositionId, Skill, SkillId, SkillLevels};
pub use crate::dataset::Dataset;
pub use crate::dataset::validate::{DatasetIssue, EntityKind};
pub use crate::error::{ConfigError, DatasetError};
