//src/model/mod.rs
pub mod species;
pub mod structure;

// Re-exports for cleaner imports
pub use species::{assign_types, TypeMap};
pub use structure::{Atom, Structure};
