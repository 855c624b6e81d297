use super::Nucleotide;
use crate::errors::InvalidSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nucleotide sequence backed by a vector of `Nucleotide`s.
///
/// Sequences read from input are never modified; every mutation builds a
/// new `Sequence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    ///
    /// Example:
    ///
    /// ```rust
    /// # use synthap_sim::base::Sequence;
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Borrow at most the first `max_len` bases.
    ///
    /// Asking for more bases than exist yields the whole sequence.
    #[inline]
    pub fn prefix(&self, max_len: usize) -> &[Nucleotide] {
        &self.0[..max_len.min(self.0.len())]
    }

    /// Uppercase ASCII bytes of the sequence.
    pub fn to_ascii(&self) -> Vec<u8> {
        self.0.iter().map(|n| n.to_ascii()).collect()
    }

    /// Consume the sequence and return its bases.
    pub fn into_inner(self) -> Vec<Nucleotide> {
        self.0
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }
}

impl AsRef<[Nucleotide]> for Sequence {
    fn as_ref(&self) -> &[Nucleotide] {
        &self.0
    }
}

impl From<&[Nucleotide]> for Sequence {
    fn from(nucleotides: &[Nucleotide]) -> Self {
        Self(nucleotides.to_vec())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Characters not present in the standard DNA alphabet produce an
    /// `InvalidSequence` error. This function is case-insensitive for ASCII letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar(c))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl TryFrom<&[u8]> for Sequence {
    type Error = InvalidSequence;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        bytes
            .iter()
            .map(|&b| Nucleotide::from_ascii(b).ok_or(InvalidSequence::InvalidChar(b as char)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
