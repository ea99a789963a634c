#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    /// Species label exactly as it appeared in the input file. Atoms are
    /// grouped by exact string equality of this label, nothing smarter.
    pub species: String,
    /// Fractional coordinates relative to the lattice vectors.
    pub position: [f64; 3],
}

#[derive(Clone, Debug)]
pub struct Structure {
    /// Title line of the input file, kept verbatim.
    pub comment: String,
    // Lattice vectors: [a_vec, b_vec, c_vec]
    pub lattice: [[f64; 3]; 3],
    pub atoms: Vec<Atom>,
}
