//! End-to-end mining scenarios with known top-K output.

use std::collections::HashSet;

use topk_fpgrowth::{
    generate_f_list, CacheEviction, FPGrowth, MinerConfig, MiningError, OutputCollector,
    SilentStatus, TopKPatterns,
};

type Mined = Vec<(Vec<&'static str>, u64)>;

/// Records every collected list in call order.
#[derive(Default)]
struct RecordingCollector {
    calls: Vec<(&'static str, Mined)>,
}

impl OutputCollector<&'static str> for RecordingCollector {
    fn collect(&mut self, item: &'static str, patterns: Mined) {
        self.calls.push((item, patterns));
    }
}

fn scenario_a() -> Vec<(Vec<&'static str>, u64)> {
    vec![
        (vec!["E", "A", "D", "B"], 1),
        (vec!["D", "A", "C", "E", "B"], 1),
        (vec!["C", "A", "B", "E"], 1),
        (vec!["B", "A", "D"], 1),
        (vec!["D"], 1),
        (vec!["D", "B"], 1),
        (vec!["A", "D", "E"], 1),
        (vec!["B", "C"], 1),
    ]
}

fn scenario_b() -> Vec<(Vec<&'static str>, u64)> {
    vec![(vec!["X"], 12), (vec!["Y"], 4), (vec!["X", "Y"], 10)]
}

fn scenario_c() -> Vec<(Vec<&'static str>, u64)> {
    let mut transactions = scenario_b();
    transactions.push((vec!["X", "Y", "Z"], 11));
    transactions
}

fn mine(
    transactions: &[(Vec<&'static str>, u64)],
    config: MinerConfig,
    wanted: &[&'static str],
) -> TopKPatterns<&'static str> {
    FPGrowth::new(config).unwrap().top_k(transactions, wanted).unwrap()
}

fn owned(patterns: &TopKPatterns<&'static str>, item: &'static str) -> Mined {
    patterns
        .patterns_for(&item)
        .into_iter()
        .map(|(items, support)| (items.to_vec(), support))
        .collect()
}

fn as_set(mined: &Mined) -> HashSet<(Vec<&'static str>, u64)> {
    mined.iter().cloned().collect()
}

fn assert_descending(mined: &Mined) {
    for pair in mined.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "not descending: {:?}", mined);
    }
}

#[test]
fn test_scenario_a_exact_order_for_a() {
    let patterns = mine(&scenario_a(), MinerConfig::new(3, 100), &[]);

    assert_eq!(
        owned(&patterns, "A"),
        vec![
            (vec!["A"], 5),
            (vec!["A", "D"], 4),
            (vec!["A", "E"], 4),
            (vec!["A", "B"], 4),
            (vec!["A", "B", "E"], 3),
            (vec!["A", "D", "E"], 3),
            (vec!["A", "B", "D"], 3),
        ]
    );
}

#[test]
fn test_scenario_a_other_items() {
    let patterns = mine(&scenario_a(), MinerConfig::new(3, 100), &[]);

    let expected: [(&str, Mined); 4] = [
        ("C", vec![(vec!["B", "C"], 3)]),
        (
            "E",
            vec![(vec!["A", "E"], 4), (vec!["A", "B", "E"], 3), (vec!["A", "D", "E"], 3)],
        ),
        (
            "D",
            vec![
                (vec!["D"], 6),
                (vec!["B", "D"], 4),
                (vec!["A", "D"], 4),
                (vec!["A", "D", "E"], 3),
                (vec!["A", "B", "D"], 3),
            ],
        ),
        (
            "B",
            vec![
                (vec!["B"], 6),
                (vec!["A", "B"], 4),
                (vec!["B", "D"], 4),
                (vec!["A", "B", "D"], 3),
                (vec!["A", "B", "E"], 3),
                (vec!["B", "C"], 3),
            ],
        ),
    ];

    for (item, want) in expected {
        let got = owned(&patterns, item);
        assert_descending(&got);
        assert_eq!(as_set(&got), as_set(&want), "patterns for {item}");
        assert_eq!(got.len(), want.len(), "duplicates for {item}");
    }
}

#[test]
fn test_scenario_a_emits_least_frequent_first() {
    let transactions = scenario_a();
    let f_list = generate_f_list(&transactions, 3);
    assert_eq!(f_list, vec![("B", 6), ("D", 6), ("A", 5), ("E", 4), ("C", 3)]);

    let miner = FPGrowth::new(MinerConfig::new(3, 100)).unwrap();
    let mut collector = RecordingCollector::default();
    miner
        .generate_top_k_frequent_patterns(&transactions, &f_list, &[], &mut collector, &mut SilentStatus)
        .unwrap();

    let order: Vec<&str> = collector.calls.iter().map(|(item, _)| *item).collect();
    assert_eq!(order, vec!["C", "E", "A", "D", "B"]);
}

#[test]
fn test_scenario_a_display() {
    let patterns = mine(&scenario_a(), MinerConfig::new(3, 100), &["A"]);

    assert_eq!(
        patterns.to_string(),
        "A\t([A],5), ([A,D],4), ([A,E],4), ([A,B],4), ([A,B,E],3), ([A,D,E],3), ([A,B,D],3)\n"
    );
}

#[test]
fn test_scenario_a_small_k() {
    let patterns = mine(&scenario_a(), MinerConfig::new(3, 2), &["A"]);
    let got = owned(&patterns, "A");

    assert_eq!(got.len(), 2);
    assert_eq!(got[0], (vec!["A"], 5));
    assert_eq!(got[1].1, 4);
    assert!(got[1].0.contains(&"A"));
}

#[test]
fn test_scenario_b() {
    let patterns = mine(&scenario_b(), MinerConfig::new(2, 100), &[]);

    assert_eq!(owned(&patterns, "Y"), vec![(vec!["Y"], 14), (vec!["X", "Y"], 10)]);
    assert_eq!(owned(&patterns, "X"), vec![(vec!["X"], 22), (vec!["X", "Y"], 10)]);
}

#[test]
fn test_scenario_c() {
    let patterns = mine(&scenario_c(), MinerConfig::new(2, 100), &[]);

    assert_eq!(owned(&patterns, "Z"), vec![(vec!["X", "Y", "Z"], 11)]);
    assert_eq!(
        owned(&patterns, "Y"),
        vec![(vec!["Y"], 25), (vec!["X", "Y"], 21), (vec!["X", "Y", "Z"], 11)]
    );
    assert_eq!(
        owned(&patterns, "X"),
        vec![(vec!["X"], 33), (vec!["X", "Y"], 21), (vec!["X", "Y", "Z"], 11)]
    );
}

#[test]
fn test_wanted_items_restrict_mining() {
    let patterns = mine(&scenario_c(), MinerConfig::new(2, 100), &["Z"]);

    assert_eq!(patterns.items(), &["Z"]);
    assert!(owned(&patterns, "X").is_empty());
}

#[test]
fn test_infrequent_wanted_item_yields_nothing() {
    let transactions = vec![(vec!["X", "Y"], 3), (vec!["Q"], 1)];
    let patterns = mine(&transactions, MinerConfig::new(2, 10), &["Q"]);

    assert!(patterns.is_empty());
    assert!(owned(&patterns, "Q").is_empty());
}

#[test]
fn test_empty_input() {
    let transactions: Vec<(Vec<&'static str>, u64)> = Vec::new();
    let patterns = mine(&transactions, MinerConfig::default(), &[]);

    assert!(patterns.is_empty());
    assert_eq!(patterns.pattern_count(), 0);
}

#[test]
fn test_idempotent() {
    let config = MinerConfig::new(3, 100);
    let first = mine(&scenario_a(), config.clone(), &[]).to_string();
    let second = mine(&scenario_a(), config, &[]).to_string();

    assert_eq!(first, second);
}

#[test]
fn test_cache_eviction_policies_agree() {
    let lru = MinerConfig::new(3, 100).with_first_level_cache_capacity(1);
    let least = lru.clone().with_cache_eviction(CacheEviction::LeastAttribute);

    assert_eq!(
        mine(&scenario_a(), lru, &[]).to_string(),
        mine(&scenario_a(), least, &[]).to_string()
    );
}

#[test]
fn test_zero_k_is_rejected() {
    assert!(matches!(
        FPGrowth::new(MinerConfig::new(1, 0)),
        Err(MiningError::Configuration { .. })
    ));
}

#[test]
fn test_unsorted_frequency_list_is_rejected() {
    let miner = FPGrowth::new(MinerConfig::new(1, 10)).unwrap();
    let mut collector = RecordingCollector::default();

    let result = miner.generate_top_k_frequent_patterns(
        &scenario_b(),
        &[("Y", 14), ("X", 22)],
        &[],
        &mut collector,
        &mut SilentStatus,
    );

    assert!(matches!(result, Err(MiningError::InvalidArgument { .. })));
    assert!(collector.calls.is_empty());
}
