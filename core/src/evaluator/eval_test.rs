//! Unit tests for the evaluator.

use super::*;
use crate::parser;
use approx::assert_relative_eq;
use std::f64::consts::{E, PI};

fn run(input: &str, x: f64) -> f64 {
    let tree = parser::parse(input).expect("parsing failed");
    eval(&tree, x)
}

#[test]
fn test_literals_and_variable() {
    assert_eq!(run("42", 0.0), 42.0);
    assert_eq!(run("x", 7.5), 7.5);
    assert_eq!(run("-x", 7.5), -7.5);
}

#[test]
fn test_constants() {
    assert_eq!(run("pi", 0.0), PI);
    assert_eq!(run("e", 0.0), E);
    assert_eq!(run("2*pi/5", 0.0), 2.0 * PI / 5.0);
}

#[test]
fn test_polynomial() {
    assert_eq!(run("x^2 + 3*x + 1", 2.0), 11.0);
    assert_eq!(run("x**2 + 3*x + 1", -1.0), -1.0);
}

#[test]
fn test_precedence_in_values() {
    assert_eq!(run("-x^2", 3.0), -9.0);
    assert_eq!(run("(-x)^2", 3.0), 9.0);
    assert_eq!(run("2^3^2", 0.0), 512.0);
    assert_eq!(run("1 - 2 - 3", 0.0), -4.0);
    assert_eq!(run("8 / 4 / 2", 0.0), 1.0);
}

#[test]
fn test_functions() {
    assert_eq!(run("sin(x)", 0.0), 0.0);
    assert_eq!(run("cos(x)", 0.0), 1.0);
    assert_eq!(run("sqrt(x)", 16.0), 4.0);
    assert_eq!(run("log(x)", 1.0), 0.0);
    assert_relative_eq!(run("exp(x)", 1.0), E);
    assert_relative_eq!(run("tan(x)", PI / 4.0), 1.0, epsilon = 1e-12);
    assert_relative_eq!(run("exp(-x^2)", 1.0), 1.0 / E);
}

#[test]
fn test_e_inside_exp_is_not_substituted() {
    // `exp` stays the exponential function even though it contains `e`.
    assert_relative_eq!(run("exp(1)", 0.0), E);
    assert_relative_eq!(run("e^x", 2.0), E * E, epsilon = 1e-12);
}

#[test]
fn test_domain_failures_are_non_finite() {
    assert_eq!(run("1/x", 0.0), f64::INFINITY);
    assert_eq!(run("log(x)", 0.0), f64::NEG_INFINITY);
    assert!(run("log(x)", -1.0).is_nan());
    assert!(run("sqrt(x)", -1.0).is_nan());
}

#[test]
fn test_batch_preserves_shape_and_markers() {
    let tree = parser::parse("log(x)").unwrap();
    let ys = eval_batch(&tree, &[-1.0, 0.0, 1.0, E]);
    assert_eq!(ys.len(), 4);
    assert!(ys[0].is_nan());
    assert_eq!(ys[1], f64::NEG_INFINITY);
    assert_eq!(ys[2], 0.0);
    assert_relative_eq!(ys[3], 1.0);
}

#[test]
fn test_batch_of_empty_input() {
    let tree = parser::parse("x").unwrap();
    assert!(eval_batch(&tree, &[]).is_empty());
}

#[test]
fn test_evaluator_is_reusable() {
    let tree = parser::parse("x * x").unwrap();
    let evaluator = Evaluator::new(&tree);
    assert_eq!(evaluator.eval(2.0), 4.0);
    assert_eq!(evaluator.eval(3.0), 9.0);
    assert_eq!(evaluator.eval_batch(&[1.0, 2.0]), vec![1.0, 4.0]);
}
