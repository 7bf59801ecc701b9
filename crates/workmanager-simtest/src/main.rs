//! WorkManager Headless Simulation Harness
//!
//! Sweeps generated colonies through the assignment pipeline and the engine
//! and checks the properties every run must hold. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p workmanager-simtest
//!   cargo run -p workmanager-simtest -- --verbose

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use workmanager_core::clock::{HOURS_PER_DAY, TICKS_PER_HOUR};
use workmanager_core::components::{Condition, PrioritiesChanged, WorkSettings};
use workmanager_core::engine::{ColonyMap, WorkManager};
use workmanager_core::generation::generate_colonists;
use workmanager_core::persistence::{load_colony, save_colony};
use workmanager_core::settings::WorkManagerSettings;
use workmanager_core::systems::{snapshot_workers, take_priority_notifications};
use workmanager_core::universe::{vanilla_catalog, vanilla_universe};
use workmanager_logic::catalog::WorkCatalog;
use workmanager_logic::config::AssignmentConfig;
use workmanager_logic::constants::priorities;
use workmanager_logic::pipeline::assign_priorities;
use workmanager_logic::priorities::PriorityTable;
use workmanager_logic::worker::WorkerSnapshot;

/// Seeds swept by the pipeline checks.
const SEEDS: u64 = 40;
const COLONY_SIZE: u32 = 16;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== WorkManager Simulation Harness ===\n");

    let catalog = match vanilla_catalog() {
        Ok(c) => c,
        Err(e) => {
            println!("  ✗ vanilla_catalog: {}", e);
            std::process::exit(1);
        }
    };

    let mut results = Vec::new();

    // 1. Bundled universe
    results.extend(validate_universe(&catalog, verbose));

    // 2. Pipeline invariants over generated colonies
    results.extend(validate_pipeline_sweep(&catalog, verbose));

    // 3. Medical coverage
    results.extend(validate_doctor_coverage(&catalog, verbose));

    // 4. Engine schedule over a full day
    results.extend(validate_schedule(&catalog, verbose));

    // 5. Save/load and settings persistence
    results.extend(validate_persistence(&catalog, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

/// A generated colony with a random share of downed, dead and broken colonists.
fn troubled_colony(catalog: &WorkCatalog, seed: u64) -> Vec<WorkerSnapshot> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = ColonyMap::new("Sweep", 0);
    generate_colonists(&mut map, COLONY_SIZE, catalog, &mut rng);

    for (_, condition) in map.world.query_mut::<&mut Condition>() {
        match rng.gen_range(0..100) {
            0..=9 => condition.downed = true,
            10..=12 => condition.dead = true,
            13..=20 => condition.mental_break = true,
            _ => {}
        }
    }

    snapshot_workers(&map.world)
        .into_iter()
        .map(|(_, w)| w)
        .collect()
}

// ── 1. Universe ─────────────────────────────────────────────────────────

fn validate_universe(catalog: &WorkCatalog, verbose: bool) -> Vec<TestResult> {
    println!("--- Universe ---");
    let mut results = Vec::new();

    let universe = vanilla_universe();
    results.push(TestResult {
        name: "universe_parse".into(),
        passed: universe.is_ok(),
        detail: match &universe {
            Ok(u) => format!("'{}' with {} work types", u.name, u.work_types.len()),
            Err(e) => format!("parse error: {}", e),
        },
    });

    results.push(TestResult {
        name: "universe_special_types".into(),
        passed: catalog.medical().is_some()
            && catalog.hunting().is_some()
            && catalog.hauling().is_some()
            && catalog.cleaning().is_some(),
        detail: format!(
            "doctor={} hunting={} hauling={} cleaning={}",
            catalog.medical().is_some(),
            catalog.hunting().is_some(),
            catalog.hauling().is_some(),
            catalog.cleaning().is_some()
        ),
    });

    results.push(TestResult {
        name: "universe_always_on".into(),
        passed: catalog.always_on_types().len() == 4,
        detail: format!("{} always-on types", catalog.always_on_types().len()),
    });

    let unlabeled: Vec<_> = catalog
        .all()
        .filter(|&id| catalog.label(id).is_empty())
        .collect();
    results.push(TestResult {
        name: "universe_labels".into(),
        passed: unlabeled.is_empty(),
        detail: format!("{} work types without label", unlabeled.len()),
    });

    if verbose {
        println!("  Work types:");
        for id in catalog.all() {
            let def = catalog.def(id);
            println!("    {:16} {:?}", def.key, def.relevant_skills);
        }
    }

    results
}

// ── 2. Pipeline Sweep ───────────────────────────────────────────────────

fn validate_pipeline_sweep(catalog: &WorkCatalog, _verbose: bool) -> Vec<TestResult> {
    println!("--- Pipeline Sweep ---");
    let mut results = Vec::new();

    for (label, config) in [
        ("default", AssignmentConfig::default()),
        (
            "assign_all",
            AssignmentConfig {
                assign_all_work_types: true,
                ..AssignmentConfig::default()
            },
        ),
    ] {
        let mut failures: Vec<String> = Vec::new();

        for seed in 0..SEEDS {
            let workers = troubled_colony(catalog, seed);
            let table = assign_priorities(&workers, catalog, &config);

            if assign_priorities(&workers, catalog, &config) != table {
                failures.push(format!("seed {}: nondeterministic", seed));
            }
            failures.extend(
                check_table(&workers, catalog, &table)
                    .into_iter()
                    .map(|f| format!("seed {}: {}", seed, f)),
            );
        }

        results.push(TestResult {
            name: format!("pipeline_invariants_{}", label),
            passed: failures.is_empty(),
            detail: if failures.is_empty() {
                format!("{} colonies of {} hold every invariant", SEEDS, COLONY_SIZE)
            } else {
                failures.join("; ")
            },
        });
    }

    results
}

/// Properties every table must satisfy regardless of configuration.
fn check_table(workers: &[WorkerSnapshot], catalog: &WorkCatalog, table: &PriorityTable) -> Vec<String> {
    let mut failures = Vec::new();

    for worker in workers {
        let Some(row) = table.row(worker.id) else {
            failures.push(format!("{} missing from table", worker.name));
            continue;
        };
        for id in catalog.all() {
            let p = row.get(id);
            if !priorities::is_valid(p) {
                failures.push(format!("{} has priority {}", worker.name, p));
            }
            if worker.is_disabled(id) && p != priorities::DISABLED {
                failures.push(format!("{} assigned disabled {}", worker.name, catalog.label(id)));
            }
            if worker.is_incapacitated() && p != priorities::DISABLED {
                failures.push(format!("incapacitated {} assigned work", worker.name));
            }
        }
        if !worker.is_incapacitated() {
            for &id in catalog.always_on_types() {
                if !worker.is_disabled(id) && row.get(id) != priorities::HIGHEST {
                    failures.push(format!("{} lost always-on {}", worker.name, catalog.label(id)));
                }
            }
        }
        if worker.mental_break && !worker.is_incapacitated() {
            for &id in catalog.fallback_types() {
                if !worker.is_disabled(id) && row.get(id) != priorities::MENTAL_FALLBACK {
                    failures.push(format!("broken {} not on fallback work", worker.name));
                }
            }
        }
    }

    // Every general type someone could do is covered by an active worker
    for &id in catalog.general_types() {
        let able: Vec<_> = workers
            .iter()
            .filter(|w| w.is_active() && !w.is_disabled(id))
            .collect();
        if able.is_empty() {
            continue;
        }
        if !able.iter().any(|w| table.get(w.id, id) != Some(priorities::DISABLED)) {
            failures.push(format!("{} uncovered", catalog.label(id)));
        }
    }

    failures
}

// ── 3. Doctor Coverage ──────────────────────────────────────────────────

fn validate_doctor_coverage(catalog: &WorkCatalog, _verbose: bool) -> Vec<TestResult> {
    println!("--- Doctor Coverage ---");
    let mut results = Vec::new();
    let Some(doctor) = catalog.medical() else {
        return results;
    };

    let mut short = 0;
    let mut checked = 0;
    for seed in 0..SEEDS {
        let workers = troubled_colony(catalog, 1000 + seed);
        let table = assign_priorities(&workers, catalog, &AssignmentConfig::default());

        let patients = workers.iter().filter(|w| w.is_patient()).count();
        let candidates = workers
            .iter()
            .filter(|w| w.is_active() && !w.is_disabled(doctor))
            .count();
        let doctors = table.workers_assigned(doctor);
        checked += 1;
        if doctors < patients.min(candidates) {
            short += 1;
        }
    }
    results.push(TestResult {
        name: "doctors_cover_patients".into(),
        passed: short == 0,
        detail: format!("{} of {} colonies short on doctors", short, checked),
    });

    // With the policy off, only the top-skilled tie gets the job
    let single = AssignmentConfig {
        assign_multiple_doctors: false,
        ..AssignmentConfig::default()
    };
    let workers = troubled_colony(catalog, 7);
    let multi = assign_priorities(&workers, catalog, &AssignmentConfig::default());
    let solo = assign_priorities(&workers, catalog, &single);
    results.push(TestResult {
        name: "single_doctor_policy".into(),
        passed: solo.workers_assigned(doctor) <= multi.workers_assigned(doctor),
        detail: format!(
            "{} doctors single vs {} multiple",
            solo.workers_assigned(doctor),
            multi.workers_assigned(doctor)
        ),
    });

    results
}

// ── 4. Engine Schedule ──────────────────────────────────────────────────

fn validate_schedule(catalog: &WorkCatalog, verbose: bool) -> Vec<TestResult> {
    println!("--- Engine Schedule ---");
    let mut results = Vec::new();
    let mut rng = StdRng::seed_from_u64(99);

    let mut manager = WorkManager::new(catalog.clone(), WorkManagerSettings::default());
    for name in ["Home", "Outpost", "Mine"] {
        let index = manager.add_map(name);
        if let Some(map) = manager.map_mut(index) {
            generate_colonists(map, 10, catalog, &mut rng);
        }
    }

    // Stop one tick short of the next day so hour 0 is not seen twice
    let ticks = TICKS_PER_HOUR * HOURS_PER_DAY - 1;
    let total = manager.advance(ticks);

    let runs: Vec<u64> = manager.maps().iter().map(|m| m.runs()).collect();
    results.push(TestResult {
        name: "schedule_hourly_runs".into(),
        passed: runs.iter().all(|&r| r == HOURS_PER_DAY),
        detail: format!("runs per map over one day: {:?}", runs),
    });
    results.push(TestResult {
        name: "schedule_total_runs".into(),
        passed: total as u64 == HOURS_PER_DAY * manager.maps().len() as u64,
        detail: format!("{} recomputes in {} ticks", total, ticks),
    });

    // Every colonist was notified; draining clears the markers
    let mut notified = 0;
    let mut leftover = 0;
    for index in 0..manager.maps().len() {
        if let Some(map) = manager.map_mut(index) {
            notified += take_priority_notifications(&mut map.world).len();
            leftover += map.world.query::<&PrioritiesChanged>().iter().count();
        }
    }
    results.push(TestResult {
        name: "schedule_notifications".into(),
        passed: notified == 30 && leftover == 0,
        detail: format!("{} notified, {} markers left", notified, leftover),
    });

    if verbose {
        for map in manager.maps() {
            println!(
                "  {:8} stagger={:2} last_hour={:?}",
                map.name,
                map.schedule().stagger(),
                map.schedule().last_hour()
            );
        }
    }

    results
}

// ── 5. Persistence ──────────────────────────────────────────────────────

fn validate_persistence(catalog: &WorkCatalog, _verbose: bool) -> Vec<TestResult> {
    println!("--- Persistence ---");
    let mut results = Vec::new();
    let config = AssignmentConfig::default();
    let mut rng = StdRng::seed_from_u64(5);

    let mut map = ColonyMap::new("Home", 2);
    generate_colonists(&mut map, 20, catalog, &mut rng);
    let before = map.recompute(catalog, &config).clone();

    let mut buffer = Vec::new();
    let roundtrip = save_colony(&mut buffer, &map).and_then(|_| load_colony(&buffer[..]));
    match roundtrip {
        Ok(mut loaded) => {
            let settings_match = loaded
                .world
                .query::<&WorkSettings>()
                .iter()
                .count()
                == 20;
            let after = loaded.recompute(catalog, &config).clone();
            results.push(TestResult {
                name: "colony_save_roundtrip".into(),
                passed: settings_match && before == after,
                detail: format!("{} bytes, identical recompute={}", buffer.len(), before == after),
            });
        }
        Err(e) => results.push(TestResult {
            name: "colony_save_roundtrip".into(),
            passed: false,
            detail: format!("{}", e),
        }),
    }

    let mut settings = WorkManagerSettings::default();
    settings.set_update_interval(8);
    settings.set_assign_all_work_types(true);
    let mut json = Vec::new();
    let reloaded = settings
        .save(&mut json)
        .and_then(|_| WorkManagerSettings::load(&json[..]));
    results.push(TestResult {
        name: "settings_json_roundtrip".into(),
        passed: matches!(&reloaded, Ok(s) if *s == settings),
        detail: format!("{} bytes of JSON", json.len()),
    });

    results
}
