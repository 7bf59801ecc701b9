//! Name generation utilities

use crate::components::Name;
use rand::Rng;

/// Chance in percent that a colonist goes by a nickname.
const NICKNAME_CHANCE: u32 = 30;

/// Generate a random name, sometimes with a nickname
pub fn generate_name(rng: &mut impl Rng) -> Name {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    let name = Name::new(given, family);

    if rng.gen_range(0..100) < NICKNAME_CHANCE {
        name.with_nickname(NICKNAMES[rng.gen_range(0..NICKNAMES.len())])
    } else {
        name
    }
}

static GIVEN_NAMES: &[&str] = &[
    "Ada", "Bertram", "Calla", "Dorian", "Edda", "Faron", "Greta", "Hollis",
    "Ingrid", "Jasper", "Kaia", "Lazlo", "Mireille", "Nils", "Odette", "Pascal",
    "Quinn", "Rosalind", "Silas", "Tamsin", "Ulric", "Vesna", "Wendell", "Ximena",
    "Yusuf", "Zelda", "Amara", "Bodhi", "Corin", "Delphine", "Emrys", "Fenna",
];

static FAMILY_NAMES: &[&str] = &[
    "Ashdown", "Blackwood", "Carrow", "Dunmore", "Eastwick", "Fairweather",
    "Greaves", "Holloway", "Ironside", "Jessup", "Kettering", "Larkin",
    "Marlowe", "Northcott", "Oakes", "Pendry", "Quarrie", "Rook", "Stroud",
    "Thorne", "Underhill", "Vance", "Whitlock", "Yardley",
];

static NICKNAMES: &[&str] = &[
    "Doc", "Sparky", "Boomer", "Patch", "Tinker", "Scout", "Moss", "Flint",
    "Rusty", "Pip", "Ghost", "Chef", "Nails", "Sarge", "Wren", "Bones",
];
