//! Fixed placement of the process components in scene coordinates.

use crate::{Pipe, Pump, Tank};

/// Extent of the scene. The origin is the top-left corner, y grows downwards.
pub const SCENE_SIZE: (f64, f64) = (1000., 760.);

const OFFSET: (f64, f64) = (100., 30.);

fn at(x: f64, y: f64) -> (f64, f64) {
    (x + OFFSET.0, y + OFFSET.1)
}

pub(crate) fn tanks() -> [Tank; 4] {
    let tank = |label: &str, (x, y): (f64, f64)| Tank::new(label, x, y);
    [
        tank("T1", at(100., 50.)),
        tank("T2", at(400., 300.)),
        tank("T3", at(200., 550.)),
        tank("T4", at(600., 550.)),
    ]
}

pub(crate) fn pipes() -> [Pipe; 3] {
    [
        Pipe::new([
            at(150., 200.),
            at(150., 215.),
            at(450., 215.),
            at(450., 300.),
        ]),
        Pipe::new([
            at(450., 450.),
            at(450., 500.),
            at(250., 500.),
            at(250., 550.),
        ]),
        Pipe::new([
            at(450., 450.),
            at(450., 500.),
            at(650., 500.),
            at(650., 550.),
        ]),
    ]
}

pub(crate) fn pump(angle_per_speed: f64) -> Pump {
    let (x, y) = at(300., 215.);
    Pump::new(x, y).with_angle_per_speed(angle_per_speed)
}
