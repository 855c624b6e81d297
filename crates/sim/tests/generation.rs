//! Integration tests for batch generation and dataset sweeps.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::HashSet;
use std::str::FromStr;
use synthap_sim::base::Sequence;
use synthap_sim::evolution::{EventKind, mutate_traced};
use synthap_sim::genome::HaplotypeRecord;
use synthap_sim::io::fasta;
use synthap_sim::simulation::{GenerationConfig, SweepConfig, create_rng, generate, run_sweep};
use synthap_sim::storage::find_datasets;
use tempfile::TempDir;

fn haplotypes(n: usize, len: usize) -> Vec<HaplotypeRecord> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1000);
    (0..n)
        .map(|i| {
            let bases = (0..len)
                .map(|_| synthap_sim::Nucleotide::random(&mut rng))
                .collect::<Vec<_>>();
            HaplotypeRecord::new(format!("h{i}"), format!("desc {i}"), Sequence::from(bases))
        })
        .collect()
}

#[test]
fn batch_distribution_matches_allotment() {
    let haps = haplotypes(4, 100);
    for count in [0, 1, 3, 4, 5, 17, 40, 41] {
        let mut rng = create_rng(Some(3));
        let out: Vec<_> = generate(&haps, 0.02, count, None, &mut rng)
            .unwrap()
            .collect();

        let per = count.div_ceil(haps.len());
        assert_eq!(out.len(), count.min(haps.len() * per), "count {count}");

        let ids: HashSet<&str> = out.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), out.len());
    }
}

#[test]
fn truncated_descendants_stay_within_bounds() {
    let haps = haplotypes(1, 20);
    let truncated = Sequence::from(haps[0].sequence().prefix(5));

    // Replay the generator's draws one descendant at a time to learn the
    // planned events, then check the generated lengths against them.
    let mut rng = create_rng(Some(99));
    let mut replay = create_rng(Some(99));
    let out: Vec<_> = generate(&haps, 0.4, 50, Some(5), &mut rng).unwrap().collect();
    assert_eq!(out.len(), 50);

    for rec in &out {
        let outcome = mutate_traced(&truncated, 0.4, &mut replay);
        assert_eq!(rec.sequence(), &outcome.sequence);

        let planned_deletions = outcome.count(EventKind::Deletion);
        let planned_insertions = outcome.count(EventKind::Insertion);
        let len = rec.len();
        assert!(len + 2 * planned_deletions >= 5, "{}: {len}", rec.id());
        assert!(len <= 5 + 2 * planned_insertions, "{}: {len}", rec.id());
    }
}

#[test]
fn generated_sequences_stay_in_alphabet() {
    let haps = haplotypes(2, 300);
    let mut rng = create_rng(Some(5));
    for rec in generate(&haps, 0.2, 20, None, &mut rng).unwrap() {
        assert!(rec.sequence().to_string().chars().all(|c| "ACGT".contains(c)));
    }
}

#[test]
fn fasta_generation_workflow_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("base.fa.gz");

    let mut writer = fasta::create_writer(Some(&input)).unwrap();
    writer.write_haplotypes(&haplotypes(3, 250)).unwrap();
    writer.finish().unwrap();

    let config = GenerationConfig::new(0.05, 10).with_seed(Some(2024));
    let run = |name: &str| {
        let haps = fasta::read_haplotypes(&input).unwrap();
        let mut rng = create_rng(config.seed);
        let out = dir.path().join(name);
        let mut writer = fasta::create_writer(Some(&out)).unwrap();
        writer
            .write_haplotypes(synthap_sim::simulation::generate_with(&haps, &config, &mut rng).unwrap())
            .unwrap();
        writer.finish().unwrap();
        std::fs::read_to_string(out).unwrap()
    };

    let first = run("a.fa");
    assert_eq!(first, run("b.fa"));
    assert!(first.starts_with(">h0_mut0 desc 0\n"));
    assert_eq!(first.lines().count(), 20);
}

#[test]
fn sweep_creates_discoverable_datasets() {
    let dir = TempDir::new().unwrap();
    let base_path = dir.path().join("base.fa");
    std::fs::write(&base_path, format!(">base\n{}\n", "ACGTAGGCTA".repeat(30))).unwrap();

    let mut config = SweepConfig::new(&base_path, dir.path().join("datasets"));
    config.num_haplotypes = vec![3, 5];
    config.error_rates = vec![0.01, 0.03];
    config.lengths = vec![Some(100)];
    config.num_sequences = 8;
    config.seed = Some(1);

    let summaries = run_sweep(&config, |_| {}).unwrap();
    assert_eq!(summaries.len(), 4);

    let found = find_datasets(&config.output_dir, None).unwrap();
    let names: Vec<&str> = found.iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        [
            "hap3_err0.01_len100",
            "hap3_err0.03_len100",
            "hap5_err0.01_len100",
            "hap5_err0.03_len100",
        ]
    );

    for ds in &found {
        let align = ds.load_align_sequences().unwrap();
        assert_eq!(align.len(), 8);
        assert_eq!(ds.meta().length, Some(100));
    }
}
