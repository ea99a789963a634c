// src/utils/linalg.rs

use nalgebra::{Matrix3, Vector3};

/// Signed cell volume of a lattice (scalar triple product of its rows).
///
/// A magnitude below roughly 1e-8 means the vectors are linearly
/// dependent and the cell is degenerate.
pub fn cell_volume(lattice: [[f64; 3]; 3]) -> f64 {
  let lat_mat = Matrix3::from_row_slice(&[
    lattice[0][0],
    lattice[0][1],
    lattice[0][2],
    lattice[1][0],
    lattice[1][1],
    lattice[1][2],
    lattice[2][0],
    lattice[2][1],
    lattice[2][2],
  ]);

  lat_mat.determinant()
}

/// Convert Cartesian coordinates to fractional using lattice matrix
///
/// # Arguments
/// * `cart` - Cartesian coordinates in Angstroms
/// * `lattice` - Lattice vectors as row matrix [[ax, ay, az], [bx, by, bz], [cx, cy, cz]]
///
/// # Returns
/// Fractional coordinates [x, y, z] or None if lattice is singular
///
/// # Formula
/// ```text
/// Fractional = (Lattice^T)^-1 × Cartesian
/// ```
pub fn cart_to_frac(cart: [f64; 3], lattice: [[f64; 3]; 3]) -> Option<[f64; 3]> {
  let cart_vec = Vector3::from(cart);
  let lat_mat = Matrix3::from_row_slice(&[
    lattice[0][0],
    lattice[0][1],
    lattice[0][2],
    lattice[1][0],
    lattice[1][1],
    lattice[1][2],
    lattice[2][0],
    lattice[2][1],
    lattice[2][2],
  ]);

  // Invert lattice matrix transpose
  let inv_lat = lat_mat.transpose().try_inverse()?;

  let frac_vec = inv_lat * cart_vec;

  Some([frac_vec.x, frac_vec.y, frac_vec.z])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cubic_lattice() {
    // Simple cubic lattice 5.0 Å
    let lattice = [[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]];

    let frac = cart_to_frac([2.5, 2.5, 2.5], lattice).unwrap();

    assert!((frac[0] - 0.5).abs() < 1e-10);
    assert!((frac[1] - 0.5).abs() < 1e-10);
    assert!((frac[2] - 0.5).abs() < 1e-10);
  }

  #[test]
  fn test_non_orthogonal_lattice() {
    let lattice = [[4.0, 0.0, 0.0], [2.0, 3.46, 0.0], [0.0, 0.0, 5.0]];

    // cart = 0.25 * a + 0.5 * b + 0.1 * c
    let cart = [0.25 * 4.0 + 0.5 * 2.0, 0.5 * 3.46, 0.1 * 5.0];
    let frac = cart_to_frac(cart, lattice).unwrap();

    assert!((frac[0] - 0.25).abs() < 1e-10);
    assert!((frac[1] - 0.5).abs() < 1e-10);
    assert!((frac[2] - 0.1).abs() < 1e-10);
  }

  #[test]
  fn test_singular_lattice_has_no_inverse() {
    // second vector is a multiple of the first
    let lattice = [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]];

    assert!(cart_to_frac([0.5, 0.5, 0.5], lattice).is_none());
  }

  #[test]
  fn test_cell_volume() {
    let lattice = [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]];
    assert!((cell_volume(lattice) - 24.0).abs() < 1e-10);

    let degenerate = [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    assert!(cell_volume(degenerate).abs() < 1e-12);
  }
}
