use crate::model::Atom;

/// Atom list regrouped by species, with a dense 1-based type per entry.
///
/// Symmetry engines take a flat position list and a parallel list of
/// integer type tags; this is that shape. `species[i]` carries type
/// `i + 1`, assigned in first-seen order, and `positions`/`types` are the
/// atoms re-emitted one species block at a time.
#[derive(Clone, Debug, Default)]
pub struct TypeMap {
    /// Distinct species labels in first-occurrence order.
    pub species: Vec<String>,
    /// Fractional positions, contiguous per species block.
    pub positions: Vec<[f64; 3]>,
    /// 1-based type index aligned with `positions`.
    pub types: Vec<i32>,
}

/// Collapse species labels into dense 1-based type indices.
///
/// Two atoms get the same index iff their labels are equal, the indices
/// assigned are exactly `1..=k` for `k` distinct labels, and the original
/// relative order is preserved within each species block. An empty atom
/// list yields an empty map.
pub fn assign_types(atoms: &[Atom]) -> TypeMap {
    let mut species: Vec<String> = Vec::new();
    for atom in atoms {
        if !species.contains(&atom.species) {
            species.push(atom.species.clone());
        }
    }

    let mut positions = Vec::with_capacity(atoms.len());
    let mut types = Vec::with_capacity(atoms.len());
    for (i, label) in species.iter().enumerate() {
        for atom in atoms {
            if atom.species == *label {
                positions.push(atom.position);
                types.push(i as i32 + 1);
            }
        }
    }

    TypeMap {
        species,
        positions,
        types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(species: &str, position: [f64; 3]) -> Atom {
        Atom {
            species: species.to_string(),
            position,
        }
    }

    #[test]
    fn test_two_species_in_first_seen_order() {
        let atoms = vec![
            atom("H", [0.0, 0.0, 0.0]),
            atom("He", [0.5, 0.5, 0.5]),
        ];
        let map = assign_types(&atoms);

        assert_eq!(map.species, vec!["H", "He"]);
        assert_eq!(map.types, vec![1, 2]);
        assert_eq!(map.positions, vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]);
    }

    #[test]
    fn test_same_label_shares_one_index() {
        let atoms = vec![
            atom("O", [0.1, 0.0, 0.0]),
            atom("Ti", [0.0, 0.0, 0.0]),
            atom("O", [0.2, 0.0, 0.0]),
        ];
        let map = assign_types(&atoms);

        assert_eq!(map.species, vec!["O", "Ti"]);
        // O block first (both O atoms, file order), then Ti
        assert_eq!(map.types, vec![1, 1, 2]);
        assert_eq!(
            map.positions,
            vec![[0.1, 0.0, 0.0], [0.2, 0.0, 0.0], [0.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let atoms = vec![
            atom("H", [0.0, 0.0, 0.0]),
            atom("O", [0.1, 0.1, 0.1]),
            atom("H", [0.2, 0.2, 0.2]),
            atom("Fe", [0.3, 0.3, 0.3]),
            atom("O", [0.4, 0.4, 0.4]),
        ];
        let map = assign_types(&atoms);

        assert_eq!(map.positions.len(), atoms.len());
        assert_eq!(map.types.len(), atoms.len());

        // every atom appears exactly once in exactly one block
        for a in &atoms {
            let n = map
                .positions
                .iter()
                .filter(|p| **p == a.position)
                .count();
            assert_eq!(n, 1);
        }

        // indices cover exactly 1..=k
        let mut seen = map.types.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen, vec![1, 2, 3]);

        // blocks are contiguous after the regrouping
        assert_eq!(map.types, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_duplicate_species_blocks_collapse() {
        // "H O H" on the species line is legal VASP; both H blocks share
        // one type
        let atoms = vec![
            atom("H", [0.0, 0.0, 0.0]),
            atom("O", [0.5, 0.0, 0.0]),
            atom("H", [0.0, 0.5, 0.0]),
        ];
        let map = assign_types(&atoms);

        assert_eq!(map.species, vec!["H", "O"]);
        assert_eq!(map.types, vec![1, 1, 2]);
    }

    #[test]
    fn test_empty_list_yields_empty_map() {
        let map = assign_types(&[]);
        assert!(map.species.is_empty());
        assert!(map.positions.is_empty());
        assert!(map.types.is_empty());
    }
}
