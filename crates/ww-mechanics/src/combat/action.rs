//! Combat actions and event logging.

use rand::rngs::StdRng;

use crate::error::{MechError, MechResult};
use crate::rules::{self, CheckRequest, CheckResult, RuleSet};
use crate::sheet::CharacterSheet;

use super::Combat;

/// An action a participant can take during their turn.
#[derive(Debug, Clone)]
pub enum CombatAction {
    /// Attack a target participant.
    Attack {
        /// Index of the target participant.
        target: usize,
    },
    /// Take a defensive stance.
    Defend,
    /// Move to a different zone.
    Move {
        /// Index of the destination zone.
        to_zone: usize,
    },
    /// Use a skill, optionally targeting a participant.
    UseSkill {
        /// Name of the skill to use.
        skill: String,
        /// Optional target participant index.
        target: Option<usize>,
    },
    /// A free-form action described by text.
    Custom(String),
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack { target } => write!(f, "Attack target #{target}"),
            Self::Defend => write!(f, "Defend"),
            Self::Move { to_zone } => write!(f, "Move to zone #{to_zone}"),
            Self::UseSkill { skill, target } => {
                if let Some(t) = target {
                    write!(f, "Use {skill} on #{t}")
                } else {
                    write!(f, "Use {skill}")
                }
            }
            Self::Custom(desc) => write!(f, "{desc}"),
        }
    }
}

/// A recorded combat event.
#[derive(Debug, Clone)]
pub struct CombatEvent {
    /// Which round this happened in.
    pub round: u32,
    /// Index of the acting participant.
    pub actor: usize,
    /// What action was taken.
    pub action: CombatAction,
    /// The mechanical result of the action.
    pub result: CheckResult,
    /// A narrative description of what happened.
    pub description: String,
}

/// Resolve a combat action, producing a check result and effects.
pub fn resolve_action(
    combat: &Combat,
    ruleset: &RuleSet,
    actor_index: usize,
    action: &CombatAction,
    rng: &mut StdRng,
) -> MechResult<CheckResult> {
    let actor = combat.participants.get(actor_index).ok_or_else(|| {
        MechError::CombatError(format!("actor index {actor_index} out of bounds"))
    })?;

    let request = build_request_for_action(action, &actor.sheet, ruleset)?;
    rules::perform_check(ruleset, &actor.sheet, &request, rng)
}

/// Build a check request appropriate for the given action.
fn build_request_for_action(
    action: &CombatAction,
    sheet: &CharacterSheet,
    ruleset: &RuleSet,
) -> MechResult<CheckRequest> {
    match action {
        CombatAction::Attack { .. } => {
            // Use the first combat-relevant attribute and skill
            let attribute = find_combat_attribute(ruleset);
            let skill = find_combat_skill(ruleset);
            Ok(CheckRequest {
                attribute: Some(attribute),
                skill: Some(skill),
                difficulty: Some(1),
                ..CheckRequest::default()
            })
        }
        CombatAction::Defend => {
            let attribute = find_defense_attribute(ruleset);
            Ok(CheckRequest {
                attribute: Some(attribute),
                difficulty: Some(1),
                ..CheckRequest::default()
            })
        }
        CombatAction::UseSkill { skill, .. } => {
            // Validate skill exists
            let _ = sheet.skill(skill);
            Ok(CheckRequest {
                skill: Some(skill.clone()),
                difficulty: Some(1),
                ..CheckRequest::default()
            })
        }
        CombatAction::Move { to_zone } => {
            // Movement is usually free but may require a check
            let _ = to_zone;
            Ok(CheckRequest::default())
        }
        CombatAction::Custom(_) => Ok(CheckRequest::default()),
    }
}

/// Find the best attribute for attack checks in this ruleset.
fn find_combat_attribute(ruleset: &RuleSet) -> String {
    let combat_attrs = ["Brawn", "Prowess", "Strength", "Agility"];
    for attr in &combat_attrs {
        if ruleset
            .attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(attr))
        {
            return (*attr).to_string();
        }
    }
    ruleset
        .attributes
        .first()
        .cloned()
        .unwrap_or_else(|| "Brawn".to_string())
}

/// Find the best attribute for defense checks in this ruleset.
fn find_defense_attribute(ruleset: &RuleSet) -> String {
    let defense_attrs = ["Agility", "Finesse", "Coordination", "Cunning"];
    for attr in &defense_attrs {
        if ruleset
            .attributes
            .iter()
            .any(|a| a.eq_ignore_ascii_case(attr))
        {
            return (*attr).to_string();
        }
    }
    ruleset
        .attributes
        .first()
        .cloned()
        .unwrap_or_else(|| "Agility".to_string())
}

/// Find the best skill for combat checks in this ruleset.
fn find_combat_skill(ruleset: &RuleSet) -> String {
    let combat_skills = ["Melee", "Fighting", "Warfare", "Athletics"];
    for skill in &combat_skills {
        if ruleset.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            return (*skill).to_string();
        }
    }
    ruleset
        .skills
        .first()
        .cloned()
        .unwrap_or_else(|| "Melee".to_string())
}
