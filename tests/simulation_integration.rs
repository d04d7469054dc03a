mod common;

use common::render_loop;
use forage_core::config::SimConfig;
use forage_core::{SharedEngine, Simulation, SimulationEngine};
use forage_lib::driver::{DrawList, FrameBudget, StopToken, TrainingTrigger};

fn small_config(seed: u64) -> SimConfig {
    let mut config = SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    };
    config.world.num_animals = 10;
    config.world.num_foods = 15;
    config.evolution.generation_length = 50;
    config
}

#[test]
fn driver_draws_every_entity_of_the_real_engine() {
    let mut engine = Simulation::new(small_config(1)).unwrap();
    let mut driver = render_loop(800.0, 600.0, 10).with_strict_bounds(true);
    let mut surface = DrawList::new();

    for _ in 0..20 {
        let stats = driver.tick(&mut engine, &mut surface).unwrap();
        assert_eq!(stats.foods, 15);
        assert_eq!(stats.animals, 10);
    }

    assert_eq!(surface.circles().count(), 15);
    assert_eq!(surface.triangles().count(), 10);
    assert_eq!(driver.metrics().step_count(), 200);
}

#[test]
fn generations_roll_over_while_rendering() {
    let mut engine = Simulation::new(small_config(2)).unwrap();
    let mut driver = render_loop(800.0, 600.0, 10);
    let mut surface = DrawList::new();
    let stop = StopToken::new();
    let mut budget = FrameBudget::new(12, stop.clone());

    let frames = driver
        .run(&mut engine, &mut surface, &mut budget, &stop)
        .unwrap();

    assert_eq!(frames, 12);
    assert_eq!(engine.generation(), 2);
}

#[test]
fn training_reports_generation_statistics() {
    let mut engine = Simulation::new(small_config(3)).unwrap();
    let mut trigger = TrainingTrigger::new();

    let report = trigger.activate(&mut engine).unwrap();

    assert_eq!(report.generation, 1);
    assert_eq!(engine.generation(), 1);
    assert_eq!(engine.age(), 0);
    let line = report.to_string();
    assert!(line.starts_with("min="), "{line}");
    assert!(line.ends_with(", gene=1"), "{line}");
}

#[test]
fn same_seed_same_frames() {
    let draw = |seed| {
        let mut engine = Simulation::new(small_config(seed)).unwrap();
        let mut driver = render_loop(640.0, 480.0, 10);
        let mut surface = DrawList::new();
        for _ in 0..8 {
            driver.tick(&mut engine, &mut surface).unwrap();
        }
        surface.commands().to_vec()
    };

    assert_eq!(draw(11), draw(11));
    assert_ne!(draw(11), draw(12));
}

#[test]
fn shared_engine_trains_from_another_thread() {
    let mut engine = SharedEngine::new(Simulation::new(small_config(4)).unwrap());
    let trainer = engine.clone();

    let handle = std::thread::spawn(move || {
        let mut trainer = trainer;
        let mut trigger = TrainingTrigger::new();
        trigger.activate(&mut trainer).map(|report| report.generation)
    });

    let mut driver = render_loop(800.0, 600.0, 5);
    let mut surface = DrawList::new();
    for _ in 0..10 {
        driver.tick(&mut engine, &mut surface).unwrap();
    }

    assert_eq!(handle.join().unwrap().unwrap(), 1);
    assert!(engine.lock().unwrap().generation() >= 1);
    assert_eq!(engine.world().unwrap().animals.len(), 10);
}
