use cxkit::prelude::*;
use cxkit::{polar, rect};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

fn inspect<T: ComplexValue + fmt::Display>(label: &str, z: &T) {
    println!("{} = {}", label, z);
    println!("  |{}| = {}", label, z.magnitude());
    println!("  rectangular: {}", z.to_rectangular());
    println!("  polar: {}", z.to_polar());
    println!("  real? {}  imaginary? {}", z.is_real(), z.is_imaginary());
}

fn main() {
    println!("=== Rectangular form ===");
    let c1 = rect![3.0, 4.0];
    let c2 = rect![1.0, 2.0];
    inspect("c1", &c1);
    inspect("c2", &c2);
    println!("c1 + c2 = {}", c1 + c2);
    println!("c1 - c2 = {}", c1 - c2);
    println!("c1 * c2 = {}", c1 * c2);
    println!("c1 / c2 = {}", c1 / c2);
    println!("c1* = {}", c1.conj());
    println!("c1^3 = {}", c1.ipow(3).unwrap());
    println!("c1^0.5 = {}", c1.powf(0.5));
    println!("2 + c1 = {}", 2.0 + c1);
    println!("2 - c1 = {}", 2.0 - c1);

    println!("\n=== Polar form ===");
    let p1 = polar![2.0, FRAC_PI_2];
    let p2 = polar![0.5, 1.0];
    inspect("p1", &p1);
    inspect("p2", &p2);
    println!("p1 * p2 = {}", p1 * p2);
    println!("p1 / p2 = {}", p1 / p2);
    println!("p1^2.5 = {}", p1.powf(2.5));
    println!("p1* = {}", p1.conj());

    println!("\n=== Conversions and comparison ===");
    println!("p1 as rectangular: {}", p1.to_rectangular());
    println!("c1 as polar: {}", c1.to_polar());
    println!("p1 ≈ 2i? {}", p1.approx_eq(&2.i()));
    println!("5.i() = {}", 5.i());
    println!("(-5).i_polar() = {}", (-5).i_polar());

    println!("\n=== Parsing ===");
    let parsed: Rectangular = "3 - 4i".parse().unwrap();
    println!("\"3 - 4i\" -> {}", parsed);
    let parsed: Polar = "2∠1.5".parse().unwrap();
    println!("\"2∠1.5\" -> {}", parsed);

    println!("\n=== Domain errors ===");
    match c1.try_div(&Rectangular::ZERO) {
        Ok(quot) => println!("c1 / 0 = {}", quot),
        Err(err) => println!("c1 / 0 -> error: {}", err),
    }
    match c1.ipow(-2) {
        Ok(pow) => println!("c1^-2 = {}", pow),
        Err(err) => println!("c1^-2 -> error: {}", err),
    }
}
