//! Save/Load for colony maps
//!
//! Uses bincode for a compact binary snapshot of one map: every colonist's
//! components plus the schedule state, so a reloaded map does not recompute
//! again within the hour it last ran.

use hecs::World;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::components::*;
use crate::engine::ColonyMap;

/// Version number for save file format (increment when format changes)
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot of one colony map
#[derive(Serialize, Deserialize)]
pub struct ColonySave {
    /// Save format version
    pub version: u32,
    pub name: String,
    pub stagger: u64,
    /// Hour of the last recompute
    pub last_hour: Option<u32>,
    pub next_worker_id: u32,
    pub colonists: Vec<SavedColonist>,
}

/// One colonist entity with its components
#[derive(Serialize, Deserialize)]
pub struct SavedColonist {
    pub colonist: Colonist,
    pub spawned: bool,
    pub name: Option<Name>,
    pub condition: Option<Condition>,
    pub traits: Option<Traits>,
    pub skills: Option<SkillSet>,
    pub work: Option<WorkSettings>,
}

/// Extract all colonists from a world, in id order
fn serialize_colonists(world: &World) -> Vec<SavedColonist> {
    let mut colonists: Vec<SavedColonist> = world
        .query::<(
            &Colonist,
            Option<&Spawned>,
            Option<&Name>,
            Option<&Condition>,
            Option<&Traits>,
            Option<&SkillSet>,
            Option<&WorkSettings>,
        )>()
        .iter()
        .map(
            |(_, (colonist, spawned, name, condition, traits, skills, work))| SavedColonist {
                colonist: *colonist,
                spawned: spawned.is_some(),
                name: name.cloned(),
                condition: condition.copied(),
                traits: traits.copied(),
                skills: skills.cloned(),
                work: work.cloned(),
            },
        )
        .collect();

    colonists.sort_by_key(|c| c.colonist.id);
    colonists
}

/// Spawn a colonist with whatever components were saved
fn spawn_colonist(world: &mut World, saved: SavedColonist) {
    let entity = world.spawn((saved.colonist,));

    if saved.spawned {
        let _ = world.insert_one(entity, Spawned);
    }
    if let Some(c) = saved.name {
        let _ = world.insert_one(entity, c);
    }
    if let Some(c) = saved.condition {
        let _ = world.insert_one(entity, c);
    }
    if let Some(c) = saved.traits {
        let _ = world.insert_one(entity, c);
    }
    if let Some(c) = saved.skills {
        let _ = world.insert_one(entity, c);
    }
    if let Some(c) = saved.work {
        let _ = world.insert_one(entity, c);
    }
}

/// Save a colony map to a writer
pub fn save_colony<W: Write>(writer: W, map: &ColonyMap) -> Result<(), SaveError> {
    let save_data = ColonySave {
        version: SAVE_VERSION,
        name: map.name.clone(),
        stagger: map.schedule.stagger(),
        last_hour: map.schedule.last_hour(),
        next_worker_id: map.next_worker_id,
        colonists: serialize_colonists(&map.world),
    };

    bincode::serialize_into(writer, &save_data)?;
    Ok(())
}

/// Load a colony map from a reader
pub fn load_colony<R: Read>(reader: R) -> Result<ColonyMap, SaveError> {
    let save_data: ColonySave = bincode::deserialize_from(reader)?;

    if save_data.version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: SAVE_VERSION,
            found: save_data.version,
        });
    }

    let mut map = ColonyMap::new(save_data.name, save_data.stagger);
    map.schedule.restore(save_data.last_hour);
    map.next_worker_id = save_data.next_worker_id;
    for saved in save_data.colonists {
        spawn_colonist(&mut map.world, saved);
    }

    Ok(map)
}

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "Colony save IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Colony save encoding error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Colony save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}
