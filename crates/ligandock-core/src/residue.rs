use std::fmt;

/// The unit of comparison between two contact sets: one residue identified by
/// name, sequence number and chain.
///
/// The sequence number is kept as text so the derived ordering sorts it
/// lexicographically (name, then sequence number as a string, then chain).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueKey {
    pub res_name: String,
    pub res_seq: String,
    pub chain_id: String,
}

impl ResidueKey {
    pub fn new(res_name: &str, res_seq: i32, chain_id: &str) -> Self {
        ResidueKey {
            res_name: res_name.to_string(),
            res_seq: res_seq.to_string(),
            chain_id: chain_id.to_string(),
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.res_name, self.res_seq, self.chain_id)
    }
}
