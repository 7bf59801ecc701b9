//! Work priority system - snapshots colonists, runs the pipeline, and
//! publishes the resulting priorities back onto the entities.

use hecs::{Entity, World};
use workmanager_logic::catalog::WorkCatalog;
use workmanager_logic::config::AssignmentConfig;
use workmanager_logic::pipeline::assign_priorities;
use workmanager_logic::priorities::PriorityTable;
use workmanager_logic::worker::{WorkerId, WorkerSnapshot};

use crate::components::{
    Colonist, Condition, Name, PrioritiesChanged, SkillSet, Spawned, Traits, WorkSettings,
};

/// Snapshot every eligible colonist (free and spawned), ordered by id.
///
/// Only `WorkSettings` is required besides the markers, since the result is
/// written back into it. A colonist without a name, condition, or skills is
/// treated as unnamed, healthy, and unskilled.
pub fn snapshot_workers(world: &World) -> Vec<(Entity, WorkerSnapshot)> {
    let mut workers: Vec<(Entity, WorkerSnapshot)> = world
        .query::<(
            &Colonist,
            &WorkSettings,
            Option<&Name>,
            Option<&Condition>,
            Option<&SkillSet>,
            Option<&Traits>,
        )>()
        .with::<&Spawned>()
        .iter()
        .filter(|(_, (colonist, ..))| colonist.is_free())
        .map(
            |(entity, (colonist, settings, name, condition, skills, traits))| {
                let condition = condition.copied().unwrap_or_default();
                let snapshot = WorkerSnapshot {
                    id: colonist.id,
                    name: match name {
                        Some(name) => name.display_name().to_string(),
                        None => format!("Colonist #{}", colonist.id.0),
                    },
                    dead: condition.dead,
                    downed: condition.downed,
                    mental_break: condition.mental_break,
                    drafted: condition.drafted,
                    idle: condition.idle,
                    brawler: traits.map(|t| t.brawler).unwrap_or(false),
                    disabled: settings.disabled().clone(),
                    skills: skills.cloned().unwrap_or_default(),
                };
                (entity, snapshot)
            },
        )
        .collect();

    // ECS storage order is not stable across archetype moves
    workers.sort_by_key(|(_, w)| w.id);
    workers
}

/// Write each table row into its entity's `WorkSettings` and mark the
/// entity with `PrioritiesChanged`. Returns how many entities were updated.
pub fn apply_priorities(world: &mut World, entities: &[Entity], table: &PriorityTable) -> usize {
    let mut published = 0;
    for (&entity, row) in entities.iter().zip(table.rows()) {
        let updated = match world.get::<&mut WorkSettings>(entity) {
            Ok(mut settings) => {
                settings.replace_all(row.as_slice());
                true
            }
            Err(_) => false,
        };
        if updated && world.insert_one(entity, PrioritiesChanged).is_ok() {
            published += 1;
        }
    }
    published
}

/// Snapshot, assign, and publish in one go.
pub fn recompute_priorities(
    world: &mut World,
    catalog: &WorkCatalog,
    config: &AssignmentConfig,
) -> PriorityTable {
    let (entities, workers): (Vec<Entity>, Vec<WorkerSnapshot>) =
        snapshot_workers(world).into_iter().unzip();

    let table = assign_priorities(&workers, catalog, config);
    let published = apply_priorities(world, &entities, &table);
    log::debug!("Published work priorities for {} colonists", published);
    table
}

/// Drain pending change notifications, returning the affected colonist ids.
pub fn take_priority_notifications(world: &mut World) -> Vec<WorkerId> {
    let changed: Vec<(Entity, WorkerId)> = world
        .query::<&Colonist>()
        .with::<&PrioritiesChanged>()
        .iter()
        .map(|(entity, colonist)| (entity, colonist.id))
        .collect();

    for (entity, _) in &changed {
        let _ = world.remove_one::<PrioritiesChanged>(*entity);
    }

    let mut ids: Vec<WorkerId> = changed.into_iter().map(|(_, id)| id).collect();
    ids.sort();
    ids
}
