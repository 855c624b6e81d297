//! Batch generation of mutated descendants.
//!
//! The requested total is spread evenly over the input haplotypes:
//! each gets `ceil(count / h)` descendants, and generation stops as soon as
//! `count` records have been emitted. Haplotypes are visited in input
//! order, so for a fixed seed the output order and the random stream are
//! both fixed.

use crate::errors::ConfigError;
use crate::evolution::Mutator;
use crate::genome::HaplotypeRecord;
use crate::simulation::GenerationConfig;
use rand::Rng;
use std::iter::FusedIterator;

/// Number of descendants allotted to each of `num_haplotypes` sources.
pub fn per_haplotype(count: usize, num_haplotypes: usize) -> Result<usize, ConfigError> {
    if num_haplotypes == 0 {
        return if count == 0 {
            Ok(0)
        } else {
            Err(ConfigError::NoHaplotypes { count })
        };
    }
    Ok(count.div_ceil(num_haplotypes))
}

/// Lazily generate `count` mutated descendants of `records`.
///
/// Every descendant of a haplotype is mutated from the same source, cut to
/// its first `truncate` bases when `truncate` is a positive length. The
/// `i`-th descendant of a source is named `{source_id}_mut{i}` and keeps the
/// source description.
///
/// All checks happen here, before any random number is drawn; the returned
/// iterator itself cannot fail.
pub fn generate<'a, R: Rng + ?Sized>(
    records: &'a [HaplotypeRecord],
    error_rate: f64,
    count: usize,
    truncate: Option<usize>,
    rng: &'a mut R,
) -> Result<MutatedRecords<'a, R>, ConfigError> {
    let mutator = Mutator::new(error_rate)?;
    let per_haplotype = per_haplotype(count, records.len())?;

    Ok(MutatedRecords {
        records,
        mutator,
        count,
        per_haplotype,
        truncate: truncate.filter(|&t| t > 0),
        rng,
        haplotype: 0,
        descendant: 0,
        emitted: 0,
    })
}

/// Like [`generate`], reading the options from a [`GenerationConfig`].
///
/// The config's seed is not used; the caller owns the generator.
pub fn generate_with<'a, R: Rng + ?Sized>(
    records: &'a [HaplotypeRecord],
    config: &GenerationConfig,
    rng: &'a mut R,
) -> Result<MutatedRecords<'a, R>, ConfigError> {
    generate(records, config.error_rate, config.count, config.truncate, rng)
}

/// Iterator over generated descendants, see [`generate`].
#[derive(Debug)]
pub struct MutatedRecords<'a, R: ?Sized> {
    records: &'a [HaplotypeRecord],
    mutator: Mutator,
    count: usize,
    per_haplotype: usize,
    truncate: Option<usize>,
    rng: &'a mut R,
    /// Index of the source currently being expanded
    haplotype: usize,
    /// Descendants already produced for that source
    descendant: usize,
    emitted: usize,
}

impl<R: ?Sized> MutatedRecords<'_, R> {
    /// Descendants allotted to each source.
    pub fn per_haplotype(&self) -> usize {
        self.per_haplotype
    }

    /// Records emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<R: Rng + ?Sized> Iterator for MutatedRecords<'_, R> {
    type Item = HaplotypeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.count {
            return None;
        }

        if self.descendant >= self.per_haplotype {
            self.haplotype += 1;
            self.descendant = 0;
        }
        let source = self.records.get(self.haplotype)?;

        if self.descendant == 0 {
            log::info!("Mutating {}", source.id());
        }

        let bases = match self.truncate {
            Some(max_len) => source.sequence().prefix(max_len),
            None => source.sequence().as_slice(),
        };
        let sequence = self.mutator.mutate(bases, &mut *self.rng);
        let record = source.descendant(self.descendant, sequence);
        log::debug!("Generated {} ({} bp)", record.id(), record.len());

        self.descendant += 1;
        self.emitted += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let capacity = self.records.len().saturating_mul(self.per_haplotype);
        let remaining = self.count.min(capacity).saturating_sub(self.emitted);
        (remaining, Some(remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for MutatedRecords<'_, R> {}

impl<R: Rng + ?Sized> FusedIterator for MutatedRecords<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Sequence;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn records(n: usize, len: usize) -> Vec<HaplotypeRecord> {
        (0..n)
            .map(|i| {
                let seq = Sequence::from_str(&"ACGT".repeat(len.div_ceil(4))[..len]).unwrap();
                HaplotypeRecord::new(format!("hap{i}"), format!("source {i}"), seq)
            })
            .collect()
    }

    #[test]
    fn test_per_haplotype() {
        assert_eq!(per_haplotype(10, 3).unwrap(), 4);
        assert_eq!(per_haplotype(9, 3).unwrap(), 3);
        assert_eq!(per_haplotype(1, 5).unwrap(), 1);
        assert_eq!(per_haplotype(0, 5).unwrap(), 0);
        assert_eq!(per_haplotype(0, 0).unwrap(), 0);
        assert_eq!(
            per_haplotype(10, 0),
            Err(ConfigError::NoHaplotypes { count: 10 })
        );
    }

    #[test]
    fn test_generate_caps_at_count() {
        let recs = records(3, 40);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let out: Vec<_> = generate(&recs, 0.05, 10, None, &mut rng)
            .unwrap()
            .collect();

        assert_eq!(out.len(), 10);

        // 4 + 4 + 2
        let ids: Vec<&str> = out.iter().map(|r| r.id()).collect();
        assert_eq!(&ids[..4], ["hap0_mut0", "hap0_mut1", "hap0_mut2", "hap0_mut3"]);
        assert_eq!(ids[8], "hap2_mut0");
        assert_eq!(ids[9], "hap2_mut1");
    }

    #[test]
    fn test_generate_fewer_than_haplotypes() {
        let recs = records(5, 20);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let out: Vec<_> = generate(&recs, 0.1, 2, None, &mut rng).unwrap().collect();

        let ids: Vec<&str> = out.iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["hap0_mut0", "hap1_mut0"]);
    }

    #[test]
    fn test_generate_unique_ids_and_descriptions() {
        let recs = records(4, 30);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let out: Vec<_> = generate(&recs, 0.1, 37, None, &mut rng).unwrap().collect();

        assert_eq!(out.len(), 37);
        let ids: HashSet<&str> = out.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), out.len());

        for rec in &out {
            let source = rec.id().split("_mut").next().unwrap();
            let index: usize = source.trim_start_matches("hap").parse().unwrap();
            assert_eq!(rec.description(), format!("source {index}"));
        }
    }

    #[test]
    fn test_generate_exact_size() {
        let recs = records(3, 10);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let mut iter = generate(&recs, 0.1, 7, None, &mut rng).unwrap();
        assert_eq!(iter.per_haplotype(), 3);
        assert_eq!(iter.len(), 7);
        iter.next();
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.emitted(), 1);
        assert_eq!(iter.count(), 6);
    }

    #[test]
    fn test_generate_empty_haplotypes() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let err = generate(&[], 0.01, 5, None, &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::NoHaplotypes { count: 5 });

        let mut iter = generate(&[], 0.01, 0, None, &mut rng).unwrap();
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_mutated_records_debug() {
        let recs = records(1, 8);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let iter = generate(&recs, 0.1, 2, None, &mut rng).unwrap();
        let text = format!("{iter:?}");
        assert!(text.contains("per_haplotype: 2"));
    }

    #[test]
    fn test_generate_rejects_bad_rate_before_drawing() {
        let recs = records(2, 10);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut fresh = Xoshiro256PlusPlus::seed_from_u64(42);

        assert!(generate(&recs, -0.1, 5, None, &mut rng).is_err());
        assert!(generate(&recs, 1.5, 5, None, &mut rng).is_err());
        assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn test_generate_deterministic() {
        let recs = records(3, 200);
        let run = |seed| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            generate(&recs, 0.05, 20, None, &mut rng)
                .unwrap()
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12));
    }

    #[test]
    fn test_generate_zero_rate_copies_sources() {
        let recs = records(2, 12);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        for rec in generate(&recs, 0.0, 4, None, &mut rng).unwrap() {
            assert_eq!(rec.sequence(), recs[0].sequence());
        }
    }

    #[test]
    fn test_generate_truncates_source() {
        let recs = records(1, 20);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        for rec in generate(&recs, 0.0, 3, Some(5), &mut rng).unwrap() {
            assert_eq!(rec.sequence().to_string(), "ACGTA");
        }

        // Zero means no truncation
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        for rec in generate(&recs, 0.0, 3, Some(0), &mut rng).unwrap() {
            assert_eq!(rec.len(), 20);
        }
    }

    #[test]
    fn test_generate_with_config() {
        let recs = records(2, 50);
        let config = GenerationConfig::new(0.02, 6).with_truncate(Some(10));

        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(4);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(4);
        let a: Vec<_> = generate_with(&recs, &config, &mut rng1).unwrap().collect();
        let b: Vec<_> = generate(&recs, 0.02, 6, Some(10), &mut rng2)
            .unwrap()
            .collect();
        assert_eq!(a, b);
    }
}
