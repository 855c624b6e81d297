use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidNucleotide;

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of DNA bases backed by
/// a single byte (u8). The mapping of variants to integers is stable and used
/// throughout the crate (A=0, C=1, G=2, T=3); random draws index into
/// [`Nucleotide::ALL`] in that order, so changing it changes every seeded
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// The alphabet in index order.
    pub const ALL: [Nucleotide; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Convert from u8 index (0-3)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// The three bases that differ from `self`, in index order.
    #[inline]
    pub const fn others(self) -> [Nucleotide; 3] {
        match self {
            Self::A => [Self::C, Self::G, Self::T],
            Self::C => [Self::A, Self::G, Self::T],
            Self::G => [Self::A, Self::C, Self::T],
            Self::T => [Self::A, Self::C, Self::G],
        }
    }

    /// Draw a base uniformly from the alphabet.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..4)]
    }

    /// Draw uniformly one of the three bases that differ from `self`.
    #[inline]
    pub fn random_other<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        self.others()[rng.random_range(0..3)]
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidNucleotide(byte))
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.to_index()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_nucleotide_from_index() {
        assert_eq!(Nucleotide::from_index(0), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_index(3), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_index(4), None);
        assert_eq!(Nucleotide::from_index(255), None);
    }

    #[test]
    fn test_all_matches_index_order() {
        for (i, nuc) in Nucleotide::ALL.iter().enumerate() {
            assert_eq!(nuc.to_index() as usize, i);
        }
    }

    #[test]
    fn test_nucleotide_from_ascii() {
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));

        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'-'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_ascii_and_char() {
        assert_eq!(Nucleotide::C.to_ascii(), b'C');
        assert_eq!(Nucleotide::G.to_char(), 'G');
        let c: char = Nucleotide::A.into();
        assert_eq!(c, 'A');
        assert_eq!(Nucleotide::T.to_string(), "T");
    }

    #[test]
    fn test_nucleotide_try_from_u8() {
        assert_eq!(Nucleotide::try_from(b'A'), Ok(Nucleotide::A));
        assert_eq!(Nucleotide::try_from(b'c'), Ok(Nucleotide::C));

        let err = Nucleotide::try_from(b'X').unwrap_err();
        assert_eq!(err.0, b'X');
    }

    #[test]
    fn test_others_never_contains_self() {
        for nuc in Nucleotide::ALL {
            let others = nuc.others();
            assert!(!others.contains(&nuc));
            // Together with self they cover the alphabet
            for other in Nucleotide::ALL {
                assert!(other == nuc || others.contains(&other));
            }
        }
    }

    #[test]
    fn test_random_other_differs() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for nuc in Nucleotide::ALL {
            for _ in 0..200 {
                assert_ne!(nuc.random_other(&mut rng), nuc);
            }
        }
    }

    #[test]
    fn test_random_covers_alphabet() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[Nucleotide::random(&mut rng).to_index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
