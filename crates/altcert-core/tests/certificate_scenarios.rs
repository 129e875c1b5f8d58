//! End-to-end certificate scenarios on hand-checked inputs.

use altcert_core::{
    brute_force_delta, sequences_from, verify_certificate, Bound, BuilderConfig, Certificate,
    CertificateBuilder, IntervalKind, Sequence,
};

fn build_both(lists: Vec<Vec<i64>>) -> anyhow::Result<(Vec<Sequence>, Certificate)> {
    let seqs = sequences_from(lists);
    let raw = CertificateBuilder::new(BuilderConfig::raw()).build_sequences(&seqs)?;
    let compressed = CertificateBuilder::new(BuilderConfig::compressed()).build_sequences(&seqs)?;
    assert_eq!(raw.intervals(), compressed.intervals());
    verify_certificate(&seqs, &raw)?;
    assert!(raw.delta() <= brute_force_delta(&seqs));
    Ok((seqs, raw))
}

fn witnesses(cert: &Certificate) -> Vec<Option<usize>> {
    cert.intervals().iter().map(|i| i.witness()).collect()
}

#[test]
fn paper_example_has_three_intervals() -> anyhow::Result<()> {
    let (seqs, cert) = build_both(vec![
        vec![9],
        vec![1, 2, 9, 11],
        vec![3, 9, 12, 13],
        vec![9, 14, 15, 16],
        vec![4, 10, 17, 18],
        vec![5, 6, 7, 10],
        vec![8, 10, 19, 20],
    ])?;

    assert_eq!(cert.delta(), 3);
    assert_eq!(cert.to_string(), "[(-∞, 9), [9, 10), [10, +∞)]");
    assert_eq!(witnesses(&cert), vec![Some(0), Some(4), Some(0)]);
    assert!(cert.intersection().is_empty());
    assert_eq!(brute_force_delta(&seqs), 3);
    assert_eq!(cert.label_runs((1, 20)), vec![1, 5, 1]);
    Ok(())
}

#[test]
fn interleaved_sequences_alternate_every_step() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![
        vec![1, 4, 7, 10, 13, 16],
        vec![2, 5, 8, 11, 14, 17],
        vec![3, 6, 9, 12, 15, 18],
    ])?;

    assert_eq!(cert.delta(), 9);
    assert_eq!(
        cert.to_string(),
        "[(-∞, 3), [3, 5), [5, 7), [7, 9), [9, 11), [11, 13), [13, 15), [15, 17), [17, +∞)]"
    );
    let expected: Vec<Option<usize>> = [2, 1, 0].iter().cycle().take(9).map(|&w| Some(w)).collect();
    assert_eq!(witnesses(&cert), expected);
    Ok(())
}

#[test]
fn disjoint_blocks_need_two_intervals() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![vec![1, 2, 3], vec![5, 6, 7], vec![9, 10, 11]])?;
    assert_eq!(cert.delta(), 2);
    assert_eq!(cert.to_string(), "[(-∞, 9), [9, +∞)]");
    assert_eq!(witnesses(&cert), vec![Some(2), Some(0)]);
    Ok(())
}

#[test]
fn one_list_always_ahead() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![vec![100, 200, 300], vec![1, 5, 10, 50], vec![2, 6, 12, 60]])?;
    assert_eq!(cert.to_string(), "[(-∞, 100), [100, +∞)]");
    assert_eq!(witnesses(&cert), vec![Some(0), Some(1)]);
    Ok(())
}

#[test]
fn identical_lists_alternate_points_and_gaps() -> anyhow::Result<()> {
    let (seqs, cert) = build_both(vec![vec![5, 10, 15]; 3])?;

    assert_eq!(cert.delta(), 7);
    assert_eq!(
        cert.to_string(),
        "[(-∞, 5), {5}, (5, 10), {10}, (10, 15), {15}, (15, +∞)]"
    );
    assert_eq!(cert.intersection(), vec![5, 10, 15]);
    assert_eq!(brute_force_delta(&seqs), 7);
    // Restricted to the observed universe the label view has five runs.
    assert_eq!(cert.label_runs((5, 15)), vec![0, 1, 0, 1, 0]);
    Ok(())
}

#[test]
fn dense_lists_with_small_intersection() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![
        vec![1, 2, 3, 4, 8, 9, 10],
        vec![1, 3, 4, 5, 6, 8, 10],
        vec![1, 2, 4, 6, 7, 9, 10],
    ])?;
    assert_eq!(
        cert.to_string(),
        "[(-∞, 1), {1}, (1, 3), [3, 4), {4}, (4, 8), [8, 9), [9, 10), {10}, (10, +∞)]"
    );
    assert_eq!(cert.intersection(), vec![1, 4, 10]);
    Ok(())
}

#[test]
fn realistic_intersection() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![
        vec![3, 5, 10, 12, 18, 25, 30],
        vec![5, 11, 12, 15, 20, 25, 30],
        vec![1, 2, 5, 12, 21, 25, 30],
    ])?;
    assert_eq!(cert.delta(), 10);
    assert_eq!(cert.intersection(), vec![5, 12, 25, 30]);
    assert_eq!(
        cert.to_string(),
        "[(-∞, 5), {5}, (5, 12), {12}, (12, 21), [21, 25), {25}, (25, 30), {30}, (30, +∞)]"
    );
    Ok(())
}

#[test]
fn consecutive_shared_points_stay_separate_singletons() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![vec![5, 6, 7], vec![1, 5, 6, 7, 9]])?;
    assert_eq!(
        cert.to_string(),
        "[(-∞, 5), {5}, {6}, {7}, (7, +∞)]"
    );
    let zero_width = cert
        .intervals()
        .iter()
        .filter(|i| !i.is_singleton())
        .any(|i| {
            let (start, end) = i.coverage();
            start >= end
        });
    assert!(!zero_width);
    Ok(())
}

#[test]
fn empty_input_is_one_unwitnessed_interval() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![])?;
    assert_eq!(cert.delta(), 1);
    let only = cert.intervals()[0];
    assert_eq!((only.left, only.right), (Bound::NegInf, Bound::PosInf));
    assert_eq!(only.kind, IntervalKind::Certified { witness: None });
    Ok(())
}

#[test]
fn all_empty_lists_are_witnessed_by_the_first() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![vec![], vec![], vec![]])?;
    assert_eq!(cert.delta(), 1);
    assert_eq!(cert.to_string(), "[(-∞, +∞)]");
    assert_eq!(witnesses(&cert), vec![Some(0)]);
    Ok(())
}

#[test]
fn one_empty_list_certifies_everything() -> anyhow::Result<()> {
    let (_, cert) = build_both(vec![vec![1, 2, 3], vec![], vec![2]])?;
    assert_eq!(cert.delta(), 1);
    assert_eq!(witnesses(&cert), vec![Some(1)]);
    Ok(())
}

#[test]
fn unsorted_and_duplicated_input_is_normalised() -> anyhow::Result<()> {
    let (_, messy) = build_both(vec![vec![15, 5, 10, 5], vec![10, 15, 5, 15]])?;
    let (_, clean) = build_both(vec![vec![5, 10, 15], vec![5, 10, 15]])?;
    assert_eq!(messy.intervals(), clean.intervals());
    Ok(())
}
