//! Transcendental functions. Trigonometry is always in radians.

use super::unary;
use crate::registry::{Operation, Registry};
use std::f64::consts::PI;

pub(super) fn register(r: &mut Registry) {
    r.register(
        Operation::new("$", "(e**x) raises e to the power of x on the stack", |s| {
            unary(s, "$", f64::exp)
        }),
        &[],
    );
    r.register(
        Operation::new("log", "(log x) natural logarithm of x on the stack", |s| {
            unary(s, "log", f64::ln)
        }),
        &[],
    );
    r.register(
        Operation::new("sqrt", "(sqrt x) square root of x on the stack", |s| {
            unary(s, "sqrt", f64::sqrt)
        }),
        &["sq"],
    );
    r.register(
        Operation::new("pi", "(pi) pushes π on the stack", |s| {
            s.push(PI);
            Ok(())
        }),
        &[],
    );
    r.register(
        Operation::new("sin", "(sin x) sine of x on the stack", |s| {
            unary(s, "sin", f64::sin)
        }),
        &[],
    );
    r.register(
        Operation::new("cos", "(cos x) cosine of x on the stack", |s| {
            unary(s, "cos", f64::cos)
        }),
        &[],
    );
    r.register(
        Operation::new("tan", "(tan x) tangent of x on the stack", |s| {
            unary(s, "tan", f64::tan)
        }),
        &[],
    );
    r.register(
        Operation::new("asin", "(asin x) arcsine of x on the stack", |s| {
            unary(s, "asin", f64::asin)
        }),
        &[],
    );
    r.register(
        Operation::new("acos", "(acos x) arccosine of x on the stack", |s| {
            unary(s, "acos", f64::acos)
        }),
        &[],
    );
    r.register(
        Operation::new("atan", "(atan x) arctangent of x on the stack", |s| {
            unary(s, "atan", f64::atan)
        }),
        &[],
    );
}
