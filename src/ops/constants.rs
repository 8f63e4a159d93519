//! Nullary operations: physical constants, binary unit prefixes, randomness

use crate::eval::{EvalError, Stack};
use crate::registry::{Operation, Registry};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;
pub const STANDARD_GRAVITY: f64 = 9.81;

pub const KILO: f64 = 1024.0;
pub const MEGA: f64 = KILO * 1024.0;
pub const GIGA: f64 = MEGA * 1024.0;
pub const TERA: f64 = GIGA * 1024.0;

pub(super) fn register(r: &mut Registry) {
    r.register(
        Operation::new(
            "rand",
            "pushes a random number between 0 and 1 onto the stack",
            random,
        ),
        &[],
    );
    r.register(
        Operation::new(
            "c",
            "pushes the speed of light c (299792458 ms⁻¹) onto the stack",
            |s| push(s, SPEED_OF_LIGHT),
        ),
        &[],
    );
    r.register(
        Operation::new(
            "G",
            "pushes the gravitational constant (6.674×10⁻¹¹ m³kg⁻¹s⁻²)",
            |s| push(s, GRAVITATIONAL_CONSTANT),
        ),
        &[],
    );
    r.register(
        Operation::new(
            "g",
            "pushes earth gravitational acceleration (9.81 ms⁻²) onto the stack",
            |s| push(s, STANDARD_GRAVITY),
        ),
        &[],
    );
    r.register(
        Operation::new("kilo", "pushes kilo unit (1024) onto the stack", |s| {
            push(s, KILO)
        }),
        &[],
    );
    r.register(
        Operation::new("mega", "pushes mega unit (1024²) onto the stack", |s| {
            push(s, MEGA)
        }),
        &[],
    );
    r.register(
        Operation::new("giga", "pushes giga unit (1024³) onto the stack", |s| {
            push(s, GIGA)
        }),
        &[],
    );
    r.register(
        Operation::new("tera", "pushes tera unit (1024⁴) onto the stack", |s| {
            push(s, TERA)
        }),
        &[],
    );
}

fn push(stack: &mut Stack, value: f64) -> Result<(), EvalError> {
    stack.push(value);
    Ok(())
}

/// Fresh generator per call, seeded from the wall clock
fn random(stack: &mut Stack) -> Result<(), EvalError> {
    let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    stack.push(rng.gen::<f64>());
    Ok(())
}
