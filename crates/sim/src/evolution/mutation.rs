//! Mutation of whole sequences in a single left-to-right pass.
//!
//! A call to [`mutate`] models sequencing or replication errors at a fixed
//! per-base error rate. It works in three steps:
//!
//! ## Planning
//! The planned number of events is `round(L × error_rate)` (ties to even),
//! capped at `L`. That many distinct positions are drawn without replacement
//! and sorted ascending. When the count rounds to zero the input is returned
//! unchanged and the random source is not touched at all.
//!
//! ## Event assignment
//! Every planned position draws an event type from a fixed categorical
//! distribution: substitution 0.75, deletion 0.125, insertion 0.125.
//!
//! - **Substitution** replaces the base with one of the three other bases.
//! - **Insertion** keeps the base and appends 0, 1 or 2 random bases.
//! - **Deletion** removes 0, 1 or 2 bases starting at the position.
//!
//! ## Overlap resolution
//! A cursor tracks the first base not yet consumed by an applied event. A
//! planned position that falls behind the cursor (only possible right after a
//! two-base deletion) is skipped. Its event type has already been drawn and
//! is discarded, so the random stream consumed by a call depends only on the
//! plan and the applied events, never on how skipped positions would have
//! resolved.

use crate::base::{Nucleotide, Sequence};
use crate::errors::ConfigError;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

/// Longest run an insertion adds or a deletion removes.
pub const MAX_INDEL_LENGTH: usize = 2;

/// Event types with their fixed probabilities, in draw order.
pub const EVENT_PROBABILITIES: [(EventKind, f64); 3] = [
    (EventKind::Substitution, 0.75),
    (EventKind::Deletion, 0.125),
    (EventKind::Insertion, 0.125),
];

/// The type of a mutation event, before its details are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Substitution,
    Deletion,
    Insertion,
}

impl EventKind {
    /// Draw an event type from [`EVENT_PROBABILITIES`].
    #[inline]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r = rng.random::<f64>();

        let mut cumulative = 0.0;
        for (kind, p) in EVENT_PROBABILITIES {
            cumulative += p;
            if r < cumulative {
                return kind;
            }
        }

        // Only reachable through floating point round-off
        EVENT_PROBABILITIES[EVENT_PROBABILITIES.len() - 1].0
    }
}

/// An event that was applied to the output, in source coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEvent {
    Substitution {
        position: usize,
        from: Nucleotide,
        to: Nucleotide,
    },
    Insertion {
        position: usize,
        inserted: Vec<Nucleotide>,
    },
    /// `length` is the number of bases actually removed, after clamping to
    /// the end of the sequence.
    Deletion { position: usize, length: usize },
}

impl AppliedEvent {
    /// Source position the event was planned at.
    pub fn position(&self) -> usize {
        match self {
            Self::Substitution { position, .. }
            | Self::Insertion { position, .. }
            | Self::Deletion { position, .. } => *position,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Substitution { .. } => EventKind::Substitution,
            Self::Insertion { .. } => EventKind::Insertion,
            Self::Deletion { .. } => EventKind::Deletion,
        }
    }

    /// Change in sequence length caused by this event.
    pub fn length_delta(&self) -> isize {
        match self {
            Self::Substitution { .. } => 0,
            Self::Insertion { inserted, .. } => inserted.len() as isize,
            Self::Deletion { length, .. } => -(*length as isize),
        }
    }
}

/// Number of mutation events planned for a sequence of length `len`.
///
/// Halfway cases round to the nearest even count. The result never exceeds
/// `len`, and a negative or NaN rate plans nothing.
pub fn planned_mutation_count(len: usize, error_rate: f64) -> usize {
    if len == 0 || error_rate.is_nan() || error_rate <= 0.0 {
        return 0;
    }

    let count = (len as f64 * error_rate).round_ties_even();
    (count as usize).min(len)
}

/// Sorted, distinct positions selected for mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationPlan {
    positions: Vec<usize>,
}

impl MutationPlan {
    /// Draw a plan for a sequence of length `len`.
    ///
    /// No random numbers are consumed when the planned count is zero.
    pub fn sample<R: Rng + ?Sized>(len: usize, error_rate: f64, rng: &mut R) -> Self {
        let count = planned_mutation_count(len, error_rate);
        if count == 0 {
            return Self {
                positions: Vec::new(),
            };
        }

        let mut positions = index::sample(rng, len, count).into_vec();
        positions.sort_unstable();

        Self { positions }
    }

    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Result of a traced mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// The mutated sequence.
    pub sequence: Sequence,
    /// Number of positions in the plan.
    pub planned: usize,
    /// Events that contributed to the output, in position order.
    pub events: Vec<AppliedEvent>,
}

impl MutationOutcome {
    /// Planned positions that were swallowed by an earlier deletion.
    pub fn skipped(&self) -> usize {
        self.planned - self.events.len()
    }

    /// Count of applied events of the given type.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

/// Source of the random choices made while applying a plan.
///
/// Calls happen in a fixed order: `kind` once per planned position, then the
/// detail draws of that event if it is applied.
trait EventDraws {
    fn kind(&mut self) -> EventKind;
    fn substitute(&mut self, from: Nucleotide) -> Nucleotide;
    fn indel_length(&mut self) -> usize;
    fn base(&mut self) -> Nucleotide;
}

struct RngDraws<'a, R: Rng + ?Sized>(&'a mut R);

impl<R: Rng + ?Sized> EventDraws for RngDraws<'_, R> {
    #[inline]
    fn kind(&mut self) -> EventKind {
        EventKind::sample(self.0)
    }

    #[inline]
    fn substitute(&mut self, from: Nucleotide) -> Nucleotide {
        from.random_other(self.0)
    }

    #[inline]
    fn indel_length(&mut self) -> usize {
        self.0.random_range(0..=MAX_INDEL_LENGTH)
    }

    #[inline]
    fn base(&mut self) -> Nucleotide {
        Nucleotide::random(self.0)
    }
}

/// Mutate `sequence` at the given error rate and return the new sequence.
///
/// The input is left untouched. Given the same RNG state and inputs the
/// output is identical byte for byte.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
/// use std::str::FromStr;
/// use synthap_sim::base::Sequence;
/// use synthap_sim::evolution::mutate;
///
/// let seq = Sequence::from_str("ACGTACGTACGTACGTACGT").unwrap();
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
/// let mutated = mutate(&seq, 0.1, &mut rng);
/// assert!(mutated.len() <= seq.len() + 4);
/// ```
pub fn mutate<S, R>(sequence: &S, error_rate: f64, rng: &mut R) -> Sequence
where
    S: AsRef<[Nucleotide]> + ?Sized,
    R: Rng + ?Sized,
{
    mutate_traced(sequence, error_rate, rng).sequence
}

/// Like [`mutate`], but also report which events were applied.
///
/// Consumes exactly the same random numbers as [`mutate`].
pub fn mutate_traced<S, R>(sequence: &S, error_rate: f64, rng: &mut R) -> MutationOutcome
where
    S: AsRef<[Nucleotide]> + ?Sized,
    R: Rng + ?Sized,
{
    let src = sequence.as_ref();
    let plan = MutationPlan::sample(src.len(), error_rate, rng);
    apply_plan(src, plan.positions(), &mut RngDraws(rng))
}

fn apply_plan<D: EventDraws>(src: &[Nucleotide], positions: &[usize], draws: &mut D) -> MutationOutcome {
    let Some(&first) = positions.first() else {
        return MutationOutcome {
            sequence: Sequence::from(src),
            planned: 0,
            events: Vec::new(),
        };
    };

    let len = src.len();
    let mut out = Vec::with_capacity(len + positions.len() * MAX_INDEL_LENGTH);
    let mut events = Vec::with_capacity(positions.len());
    out.extend_from_slice(&src[..first]);

    // First source index not yet consumed by an applied event
    let mut next_index = 0;

    for (i, &pos) in positions.iter().enumerate() {
        let kind = draws.kind();

        if pos >= next_index {
            match kind {
                EventKind::Substitution => {
                    let from = src[pos];
                    let to = draws.substitute(from);
                    out.push(to);
                    next_index = pos + 1;
                    events.push(AppliedEvent::Substitution {
                        position: pos,
                        from,
                        to,
                    });
                }
                EventKind::Insertion => {
                    let n = draws.indel_length();
                    let inserted: Vec<Nucleotide> = (0..n).map(|_| draws.base()).collect();
                    out.push(src[pos]);
                    out.extend_from_slice(&inserted);
                    next_index = pos + 1;
                    events.push(AppliedEvent::Insertion {
                        position: pos,
                        inserted,
                    });
                }
                EventKind::Deletion => {
                    let n = draws.indel_length();
                    next_index = (pos + n).min(len);
                    events.push(AppliedEvent::Deletion {
                        position: pos,
                        length: next_index - pos,
                    });
                }
            }
        }

        // Untouched bases up to the next planned position. This runs for
        // skipped positions too, on purpose: skipping the copy there would
        // silently drop the bases after a swallowing deletion.
        let end = positions.get(i + 1).copied().unwrap_or(len);
        if next_index < end {
            out.extend_from_slice(&src[next_index..end]);
        }
    }

    MutationOutcome {
        sequence: Sequence::from_nucleotides(out),
        planned: positions.len(),
        events,
    }
}

/// A validated error rate bundled with the mutation routine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mutator {
    error_rate: f64,
}

impl Mutator {
    /// Create a mutator for `error_rate`, which must lie in `[0, 1]`.
    pub fn new(error_rate: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&error_rate) {
            return Err(ConfigError::InvalidErrorRate(error_rate));
        }
        Ok(Self { error_rate })
    }

    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// See [`mutate`].
    #[inline]
    pub fn mutate<S, R>(&self, sequence: &S, rng: &mut R) -> Sequence
    where
        S: AsRef<[Nucleotide]> + ?Sized,
        R: Rng + ?Sized,
    {
        mutate(sequence, self.error_rate, rng)
    }
}
