//! Work manager engine - main entry point for hosts

use hecs::{Entity, World};
use workmanager_logic::catalog::WorkCatalog;
use workmanager_logic::config::AssignmentConfig;
use workmanager_logic::priorities::PriorityTable;
use workmanager_logic::schedule::RecomputeSchedule;
use workmanager_logic::worker::WorkerId;

use crate::clock::SimClock;
use crate::components::*;
use crate::settings::WorkManagerSettings;
use crate::systems::recompute_priorities;

/// One worker pool: a colony map with its own world and schedule.
pub struct ColonyMap {
    /// Display name of the map
    pub name: String,
    /// ECS world holding this map's colonists
    pub world: World,
    pub(crate) schedule: RecomputeSchedule,
    pub(crate) next_worker_id: u32,
    runs: u64,
    last_table: Option<PriorityTable>,
}

impl ColonyMap {
    /// Create an empty map whose check tick is offset by `stagger`.
    pub fn new(name: impl Into<String>, stagger: u64) -> Self {
        Self {
            name: name.into(),
            world: World::new(),
            schedule: RecomputeSchedule::new(stagger),
            next_worker_id: 1,
            runs: 0,
            last_table: None,
        }
    }

    /// Allocate the next unused worker id.
    pub fn next_worker_id(&mut self) -> WorkerId {
        let id = WorkerId(self.next_worker_id);
        self.next_worker_id += 1;
        id
    }

    /// Spawn a free, spawned colonist with a fresh id.
    pub fn spawn_colonist(
        &mut self,
        name: Name,
        condition: Condition,
        traits: Traits,
        skills: SkillSet,
        work: WorkSettings,
    ) -> Entity {
        let id = self.next_worker_id();
        self.world.spawn((
            Colonist::free(id),
            Spawned,
            name,
            condition,
            traits,
            skills,
            work,
        ))
    }

    /// Look up the entity for a worker id.
    pub fn find_colonist(&self, id: WorkerId) -> Option<Entity> {
        self.world
            .query::<&Colonist>()
            .iter()
            .find(|(_, c)| c.id == id)
            .map(|(entity, _)| entity)
    }

    /// Count colonists on the map, eligible or not
    pub fn colonist_count(&self) -> usize {
        self.world.query::<&Colonist>().iter().count()
    }

    /// Run the pipeline now and publish the result.
    pub fn recompute(&mut self, catalog: &WorkCatalog, config: &AssignmentConfig) -> &PriorityTable {
        let table = recompute_priorities(&mut self.world, catalog, config);
        self.runs += 1;
        self.last_table.insert(table)
    }

    pub fn schedule(&self) -> &RecomputeSchedule {
        &self.schedule
    }

    /// Number of completed recomputes
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Result of the most recent recompute, if any
    pub fn last_priorities(&self) -> Option<&PriorityTable> {
        self.last_table.as_ref()
    }
}

/// Main work manager engine
pub struct WorkManager {
    catalog: WorkCatalog,
    settings: WorkManagerSettings,
    clock: SimClock,
    maps: Vec<ColonyMap>,
}

impl WorkManager {
    pub fn new(catalog: WorkCatalog, settings: WorkManagerSettings) -> Self {
        Self {
            catalog,
            settings,
            clock: SimClock::new(),
            maps: Vec::new(),
        }
    }

    /// Add an empty map. Its index doubles as its tick stagger.
    pub fn add_map(&mut self, name: impl Into<String>) -> usize {
        let index = self.maps.len();
        self.maps.push(ColonyMap::new(name, index as u64));
        index
    }

    /// Add a pre-built map, e.g. one loaded from a save.
    pub fn insert_map(&mut self, map: ColonyMap) -> usize {
        self.maps.push(map);
        self.maps.len() - 1
    }

    pub fn map(&self, index: usize) -> Option<&ColonyMap> {
        self.maps.get(index)
    }

    pub fn map_mut(&mut self, index: usize) -> Option<&mut ColonyMap> {
        self.maps.get_mut(index)
    }

    pub fn maps(&self) -> &[ColonyMap] {
        &self.maps
    }

    pub fn catalog(&self) -> &WorkCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &WorkManagerSettings {
        &self.settings
    }

    /// Settings changes apply from the next recompute on.
    pub fn settings_mut(&mut self) -> &mut WorkManagerSettings {
        &mut self.settings
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Advance one tick and recompute every map that is due.
    /// Returns how many maps recomputed.
    pub fn update(&mut self) -> usize {
        self.clock.advance(1);
        let tick = self.clock.ticks();
        let hour = self.clock.hour_of_day();

        let mut recomputed = 0;
        for map in &mut self.maps {
            if !map.schedule.is_due(tick, hour) {
                continue;
            }
            // Settings are read once per run
            let config = self.settings.snapshot();
            let colonists = map.recompute(&self.catalog, &config).len();
            log::info!(
                "Recomputed work priorities for '{}' at hour {} ({} colonists)",
                map.name,
                hour,
                colonists
            );
            map.schedule.mark_ran(hour);
            recomputed += 1;
        }
        recomputed
    }

    /// Run `ticks` updates.
    pub fn advance(&mut self, ticks: u64) -> usize {
        (0..ticks).map(|_| self.update()).sum()
    }

    /// Recompute a map immediately, ignoring its schedule.
    pub fn force_recompute(&mut self, index: usize) -> Option<&PriorityTable> {
        let hour = self.clock.hour_of_day();
        let config = self.settings.snapshot();
        let map = self.maps.get_mut(index)?;
        log::info!("Forced work priority recompute for '{}'", map.name);
        map.schedule.mark_ran(hour);
        Some(map.recompute(&self.catalog, &config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TICKS_PER_HOUR;
    use crate::systems::take_priority_notifications;
    use workmanager_logic::skills::{Passion, Skill};
    use workmanager_logic::work_types::WorkTypeDef;

    fn catalog() -> WorkCatalog {
        WorkCatalog::new(vec![
            WorkTypeDef::new("Firefighter", "fight fires", &[]),
            WorkTypeDef::new("Doctor", "doctor", &[Skill::Medicine]),
            WorkTypeDef::new("Cooking", "cook", &[Skill::Cooking]),
            WorkTypeDef::new("Hauling", "haul", &[]),
            WorkTypeDef::new("Cleaning", "clean", &[]),
        ])
        .unwrap()
    }

    fn populated_manager() -> WorkManager {
        let catalog = catalog();
        let count = catalog.len();
        let mut manager = WorkManager::new(catalog, WorkManagerSettings::default());
        let map = manager.add_map("Home");
        let home = manager.map_mut(map).unwrap();
        for (given, cooking) in [("Ada", 14.0), ("Bo", 3.0)] {
            home.spawn_colonist(
                Name::new(given, "Test"),
                Condition::healthy(),
                Traits::default(),
                SkillSet::default().with(Skill::Cooking, cooking, Passion::None),
                WorkSettings::new(count),
            );
        }
        manager
    }

    #[test]
    fn test_manager_creation() {
        let manager = WorkManager::new(catalog(), WorkManagerSettings::default());
        assert!(manager.maps().is_empty());
        assert_eq!(manager.clock().ticks(), 0);
    }

    #[test]
    fn test_worker_ids_are_sequential() {
        let manager = populated_manager();
        let home = manager.map(0).unwrap();
        assert_eq!(home.colonist_count(), 2);
        assert!(home.find_colonist(WorkerId(1)).is_some());
        assert!(home.find_colonist(WorkerId(2)).is_some());
        assert!(home.find_colonist(WorkerId(3)).is_none());
    }

    #[test]
    fn test_recompute_on_check_tick() {
        let mut manager = populated_manager();
        assert_eq!(manager.advance(59), 0);
        assert_eq!(manager.update(), 1);
        assert_eq!(manager.map(0).unwrap().runs(), 1);
        assert_eq!(manager.map(0).unwrap().schedule().last_hour(), Some(0));
    }

    #[test]
    fn test_same_hour_is_debounced() {
        let mut manager = populated_manager();
        manager.advance(60);
        // Rest of hour 0
        manager.advance(TICKS_PER_HOUR - 60 - 1);
        assert_eq!(manager.map(0).unwrap().runs(), 1);

        // First check tick of hour 1 is 2520
        manager.advance(1 + 60);
        assert_eq!(manager.clock().hour_of_day(), 1);
        assert_eq!(manager.map(0).unwrap().runs(), 2);
    }

    #[test]
    fn test_maps_are_staggered() {
        let mut manager = populated_manager();
        manager.add_map("Outpost");

        // Outpost has stagger 1: first check tick is 59
        manager.advance(59);
        assert_eq!(manager.map(0).unwrap().runs(), 0);
        assert_eq!(manager.map(1).unwrap().runs(), 1);

        manager.advance(1);
        assert_eq!(manager.map(0).unwrap().runs(), 1);
        assert_eq!(manager.map(1).unwrap().runs(), 1);
    }

    #[test]
    fn test_priorities_published_after_run() {
        let mut manager = populated_manager();
        manager.advance(60);

        let cooking = manager.catalog().id_of("Cooking").unwrap();
        let home = manager.map_mut(0).unwrap();
        let table = home.last_priorities().unwrap();
        assert_eq!(table.get(WorkerId(1), cooking), Some(1));

        let ada = home.find_colonist(WorkerId(1)).unwrap();
        assert_eq!(home.world.get::<&WorkSettings>(ada).unwrap().priority(cooking), 1);

        let notified = take_priority_notifications(&mut home.world);
        assert_eq!(notified, vec![WorkerId(1), WorkerId(2)]);
    }

    #[test]
    fn test_settings_apply_on_next_run() {
        let mut manager = populated_manager();
        let hauling = manager.catalog().id_of("Hauling").unwrap();

        manager.force_recompute(0);
        assert_eq!(
            manager.map(0).unwrap().last_priorities().unwrap().workers_assigned(hauling),
            2
        );

        manager.settings_mut().set_all_haulers(false);
        let table = manager.force_recompute(0).unwrap();
        // Coverage still hands hauling to one colonist
        assert_eq!(table.workers_assigned(hauling), 1);
    }

    #[test]
    fn test_force_recompute_marks_hour() {
        let mut manager = populated_manager();
        assert!(manager.force_recompute(0).is_some());
        assert!(manager.force_recompute(5).is_none());
        assert_eq!(manager.map(0).unwrap().runs(), 1);

        // Already ran this hour, scheduled check is skipped
        manager.advance(60);
        assert_eq!(manager.map(0).unwrap().runs(), 1);
    }

    #[test]
    fn test_insert_loaded_map_keeps_schedule() {
        let mut manager = populated_manager();
        manager.advance(60);

        let mut buffer = Vec::new();
        crate::persistence::save_colony(&mut buffer, manager.map(0).unwrap()).unwrap();
        let loaded = crate::persistence::load_colony(&buffer[..]).unwrap();

        let index = manager.insert_map(loaded);
        assert_eq!(index, 1);
        assert_eq!(manager.map(index).unwrap().colonist_count(), 2);

        // Loaded map already ran this hour
        manager.advance(60);
        assert_eq!(manager.map(index).unwrap().runs(), 0);
    }
}
