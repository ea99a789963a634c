// src/io/mod.rs

//! Structure-file readers. POSCAR is the one format the tool consumes.

pub mod poscar;

pub use poscar::ParseError;
