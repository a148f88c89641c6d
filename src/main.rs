//! Shape Arena demo driver
//!
//! Runs a small scripted match: seed an inventory, load two loaders, stage
//! and fire a few shapes, resolve the arena and report the outcome. The
//! real front end (description/command file parsing, SVG output) lives
//! outside this crate and drives the same API.

use glam::dvec2;

use shape_arena::sim::{Anchor, Discipline, Session, Shape, Side};

fn seed_inventory(session: &mut Session) {
    session
        .inventory
        .push(Shape::circle(1, dvec2(0.0, 0.0), 2.0, "crimson", "gold"));
    session
        .inventory
        .push(Shape::rect(2, dvec2(0.0, 0.0), 8.0, 6.0, "navy", "skyblue"));
    session
        .inventory
        .push(Shape::circle(3, dvec2(0.0, 0.0), 6.0, "black", "white"));
    session
        .inventory
        .push(Shape::segment(4, dvec2(0.0, 0.0), dvec2(12.0, 0.0), "green"));
    session.inventory.push(Shape::text(
        5,
        dvec2(0.0, 0.0),
        Anchor::Middle,
        "boom",
        "purple",
        "orange",
    ));
}

fn main() {
    env_logger::init();

    let mut session = Session::new(Discipline::Fifo);
    seed_inventory(&mut session);
    log::info!("inventory seeded with {} shapes", session.inventory.len());

    session.armory.position_launcher(0, dvec2(100.0, 100.0));
    session.armory.attach(0, 1, 2);
    session.load(1, 3);
    session.load(2, 2);

    // Two aimed shots at the same spot, then a burst from the other side
    session.armory.stage(0, Side::Right, 1);
    session.fire(0, dvec2(0.0, 0.0));
    session.armory.stage(0, Side::Right, 1);
    session.fire(0, dvec2(0.5, 0.5));
    session.burst(0, Side::Left, dvec2(-20.0, 0.0), dvec2(4.0, 0.0));

    log::info!(
        "{} shots fired, arena holds {} shapes",
        session.shots_fired,
        session.arena.len()
    );

    let report = session.resolve();
    log::info!(
        "resolution pass: {} crushed, {} cloned, score delta {:.2}",
        report.crushed,
        report.cloned,
        report.score_delta
    );

    println!("final score: {:.2}", session.score);
    println!(
        "shots: {}  crushed: {}  cloned: {}  inventory: {}",
        session.shots_fired,
        session.crushed_total,
        session.cloned_total,
        session.inventory.len()
    );

    // Survivors in their post-resolution pairing order
    for shape in session.inventory.iter() {
        let pos = shape.position();
        println!(
            "  {:?} id={} at ({:.1}, {:.1})  border={} fill={}  area={:.2}",
            shape.kind(),
            shape.id,
            pos.x,
            pos.y,
            shape.border_color(),
            shape.fill_color(),
            shape.area()
        );
    }
}
