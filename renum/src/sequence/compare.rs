use super::sequence_core::Sequence;

impl PartialEq for Sequence {
    /// Sequences are equal if they have the same length and their items are
    /// pairwise equal, regardless of representation.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
