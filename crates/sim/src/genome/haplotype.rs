use crate::base::Sequence;
use serde::{Deserialize, Serialize};

/// An identified haplotype sequence.
///
/// Records read from input act as mutation sources; every generated
/// descendant is a new record whose id is derived from its source with
/// [`HaplotypeRecord::derived_id`] and whose description is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaplotypeRecord {
    id: String,
    description: String,
    sequence: Sequence,
}

impl HaplotypeRecord {
    /// Create a new record.
    pub fn new(id: impl Into<String>, description: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            sequence,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free text following the id on the header line. May be empty.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Length of the sequence in bases.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Id of the `index`-th descendant of this record: `{id}_mut{index}`.
    pub fn derived_id(&self, index: usize) -> String {
        format!("{}_mut{index}", self.id)
    }

    /// Build the `index`-th descendant carrying `sequence`.
    pub fn descendant(&self, index: usize, sequence: Sequence) -> Self {
        Self {
            id: self.derived_id(index),
            description: self.description.clone(),
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record() -> HaplotypeRecord {
        HaplotypeRecord::new("chr1_hapA", "sample 7", Sequence::from_str("ACGT").unwrap())
    }

    #[test]
    fn test_record_accessors() {
        let rec = record();
        assert_eq!(rec.id(), "chr1_hapA");
        assert_eq!(rec.description(), "sample 7");
        assert_eq!(rec.len(), 4);
        assert!(!rec.is_empty());
    }

    #[test]
    fn test_derived_id() {
        let rec = record();
        assert_eq!(rec.derived_id(0), "chr1_hapA_mut0");
        assert_eq!(rec.derived_id(12), "chr1_hapA_mut12");
    }

    #[test]
    fn test_descendant_copies_description() {
        let rec = record();
        let child = rec.descendant(3, Sequence::from_str("TT").unwrap());
        assert_eq!(child.id(), "chr1_hapA_mut3");
        assert_eq!(child.description(), "sample 7");
        assert_eq!(child.sequence().to_string(), "TT");

        // Source is untouched
        assert_eq!(rec.sequence().to_string(), "ACGT");
    }

    #[test]
    fn test_descendant_of_descendant() {
        let child = record().descendant(1, Sequence::new());
        let grandchild = child.descendant(0, Sequence::new());
        assert_eq!(grandchild.id(), "chr1_hapA_mut1_mut0");
    }
}
