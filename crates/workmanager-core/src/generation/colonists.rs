//! Colonist generation

use hecs::Entity;
use rand::Rng;
use workmanager_logic::catalog::WorkCatalog;
use workmanager_logic::skills::{Passion, Skill, MAX_SKILL_LEVEL};

use super::names::generate_name;
use crate::components::*;
use crate::engine::ColonyMap;

/// Generate free, spawned colonists on a map
pub fn generate_colonists(
    map: &mut ColonyMap,
    count: u32,
    catalog: &WorkCatalog,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let name = generate_name(rng);
        let skills = random_skills(rng);
        let condition = random_condition(rng);
        let traits = Traits {
            brawler: rng.gen_range(0..100) < 10,
        };
        let work = random_work_settings(catalog, rng);

        let entity = map.spawn_colonist(name, condition, traits, skills, work);
        entities.push(entity);
    }

    log::debug!("Generated {} colonists on '{}'", count, map.name);
    entities
}

/// Random levels across the full range, passions weighted toward none
fn random_skills(rng: &mut impl Rng) -> SkillSet {
    let mut skills = SkillSet::default();
    for skill in Skill::ALL {
        let level = rng.gen_range(0.0..=MAX_SKILL_LEVEL).floor();
        let passion = match rng.gen_range(0..100) {
            0..=64 => Passion::None,
            65..=89 => Passion::Minor,
            _ => Passion::Major,
        };
        skills.set_level(skill, level);
        skills.set_passion(skill, passion);
    }
    skills
}

fn random_condition(rng: &mut impl Rng) -> Condition {
    Condition {
        idle: rng.gen_range(0..100) < 20,
        drafted: rng.gen_range(0..100) < 5,
        ..Condition::default()
    }
}

/// Occasionally hard-disable one general work type
fn random_work_settings(catalog: &WorkCatalog, rng: &mut impl Rng) -> WorkSettings {
    let settings = WorkSettings::new(catalog.len());
    let general = catalog.general_types();
    if general.is_empty() || rng.gen_range(0..100) >= 15 {
        return settings;
    }
    settings.with_disabled(general[rng.gen_range(0..general.len())])
}
