use linesort::ALL_ALGORITHMS;
use linesort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: usize = 12;

/// Random byte strings without NUL, so zero padding cannot tie with content.
fn random_input(rng: &mut StdRng, count: usize, alphabet: std::ops::RangeInclusive<u8>) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=WIDTH);
            (0..len).map(|_| rng.random_range(alphabet.clone())).collect()
        })
        .collect()
}

fn config() -> SortConfig {
    SortConfig::default().with_width(WIDTH).with_seed(0x5EED_2026)
}

#[test]
fn test_matches_std_sort() {
    let mut rng = StdRng::seed_from_u64(42);

    for &count in &[2_usize, 3, 8, 31, 64, 257, 600] {
        let input = random_input(&mut rng, count, 1..=255);
        let mut expected = input.clone();
        expected.sort();

        for algo in ALL_ALGORITHMS {
            let mut data = input.clone();
            sort_with_config(algo, &mut data, &Direction::Ascending, &config()).unwrap();
            assert_eq!(data, expected, "algorithm={algo} count={count}");
        }
    }
}

#[test]
fn test_direction_inversion() {
    let mut rng = StdRng::seed_from_u64(7);
    let input = random_input(&mut rng, 300, b'a'..=b'd');

    for algo in ALL_ALGORITHMS {
        let mut up = input.clone();
        sort_with_config(algo, &mut up, &Direction::Ascending, &config()).unwrap();
        up.reverse();

        let mut down = input.clone();
        sort_with_config(algo, &mut down, &Direction::Descending, &config()).unwrap();

        assert_eq!(up, down, "algorithm={algo}");
    }
}

#[test]
fn test_idempotent_on_sorted_input() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut sorted = random_input(&mut rng, 200, b'a'..=b'z');
    sorted.sort();

    for algo in ALL_ALGORITHMS {
        let mut data = sorted.clone();
        sort_with_config(algo, &mut data, &Direction::Ascending, &config()).unwrap();
        assert_eq!(data, sorted, "algorithm={algo}");
    }
}

#[test]
fn test_stable_algorithms_keep_duplicate_order() {
    let mut rng = StdRng::seed_from_u64(0xD0D1);
    // Few distinct keys, so plenty of duplicates. Empty vectors share a
    // dangling pointer, so keep every element non-empty.
    let input: Vec<Vec<u8>> = (0..400)
        .map(|_| vec![rng.random_range(b'a'..=b'e'); rng.random_range(1..=3)])
        .collect();

    for algo in ALL_ALGORITHMS.into_iter().filter(|algo| algo.is_stable()) {
        for direction in [Direction::Ascending, Direction::Descending] {
            let data_in = input.clone();
            let original_rank: std::collections::HashMap<*const u8, usize> =
                data_in.iter().enumerate().map(|(i, v)| (v.as_ptr(), i)).collect();

            let mut data = data_in;
            sort_with_config(algo, &mut data, &direction, &config()).unwrap();

            for pair in data.windows(2) {
                if pair[0] == pair[1] {
                    assert!(
                        original_rank[&pair[0].as_ptr()] < original_rank[&pair[1].as_ptr()],
                        "algorithm={algo} direction={direction}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_many_duplicates_and_extremes() {
    let cases: Vec<Vec<Vec<u8>>> = vec![
        vec![b"same".to_vec(); 128],
        (0..64u8).map(|i| vec![b'a' + i % 26]).rev().collect(),
        vec![vec![0xff; WIDTH], vec![0x01], Vec::new(), vec![0x80, 0x7f], vec![0xff; WIDTH]],
    ];

    for case in &cases {
        let mut expected = case.clone();
        expected.sort();
        for algo in ALL_ALGORITHMS {
            let mut data = case.clone();
            sort_with_config(algo, &mut data, &Direction::Ascending, &config()).unwrap();
            assert_eq!(data, expected, "algorithm={algo}");
        }
    }
}

#[test]
fn test_quick_sort_large_input() {
    let mut rng = rand::rng();
    let input: Vec<String> = (0..20_000).map(|_| format!("{:08x}", rng.random::<u32>())).collect();
    let mut expected = input.clone();
    expected.sort();

    let mut data = input;
    sort(Algorithm::Quick, &mut data, &Direction::Ascending).unwrap();
    assert_eq!(data, expected);
}
