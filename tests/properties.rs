use proptest::prelude::*;
use wordbench::count::{CountMap, count_buffer, merge_all, tokenize};
use wordbench::parallel::{ParallelCountEngine, PartitionPolicy, Partitioner};

/// Reference tokenizer: split on every non-letter byte, drop empties, lowercase
fn naive_tokens(bytes: &[u8]) -> Vec<String> {
    bytes
        .split(|b| !b.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| String::from_utf8_lossy(word).to_ascii_lowercase())
        .collect()
}

fn text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::sample::select(b"abcXYZ".to_vec()),
            2 => Just(b' '),
            1 => any::<u8>(),
        ],
        0..400,
    )
}

fn count_maps() -> impl Strategy<Value = Vec<CountMap>> {
    prop::collection::vec(
        prop::collection::vec(("[a-e]{1,3}", 1u64..50), 0..8).prop_map(|entries| {
            entries
                .iter()
                .map(|(word, count)| (word.as_str(), *count))
                .collect::<CountMap>()
        }),
        1..6,
    )
}

proptest! {
    #[test]
    fn tokenizer_matches_naive_split(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let tokens: Vec<String> = tokenize(&bytes).collect();
        prop_assert_eq!(tokens, naive_tokens(&bytes));
    }

    #[test]
    fn tokens_are_lowercase_letters(bytes in text()) {
        for token in tokenize(&bytes) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn merge_is_order_independent(maps in count_maps(), seed in any::<u64>()) {
        let forward = merge_all(maps.clone());

        let mut shuffled = maps.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        prop_assert_eq!(&merge_all(shuffled), &forward);
        prop_assert_eq!(forward.total(), maps.iter().map(CountMap::total).sum::<u64>());
    }

    #[test]
    fn merge_is_associative(maps in count_maps()) {
        let flat = merge_all(maps.clone());

        let (left, right) = maps.split_at(maps.len() / 2);
        let nested = merge_all([merge_all(left.to_vec()), merge_all(right.to_vec())]);

        prop_assert_eq!(nested, flat);
    }

    #[test]
    fn token_aligned_equals_single_threaded(bytes in text(), workers in 1usize..9) {
        let engine = ParallelCountEngine::new(workers, PartitionPolicy::TokenAligned);
        prop_assert_eq!(engine.count(&bytes).unwrap(), count_buffer(&bytes));
    }

    #[test]
    fn truncating_equals_single_when_boundaries_are_separators(
        words in prop::collection::vec("[a-z]{1,7}", 1..20),
        workers in 1usize..6,
    ) {
        // one fixed-width, space-padded chunk per worker keeps every boundary clean
        let line = words.join(" ");
        let chunk = line.len() + 1;
        let mut buffer = Vec::with_capacity(chunk * workers);
        for _ in 0..workers {
            buffer.extend_from_slice(line.as_bytes());
            buffer.push(b' ');
        }
        prop_assert_eq!(buffer.len() % workers, 0);

        let engine = ParallelCountEngine::new(workers, PartitionPolicy::Truncating);
        prop_assert_eq!(engine.count(&buffer).unwrap(), count_buffer(&buffer));
    }

    #[test]
    fn truncating_partitions_are_contiguous_and_drop_only_the_tail(
        len in 0usize..10_000,
        workers in 1usize..16,
    ) {
        let buffer = vec![b'a'; len];
        let parts = Partitioner::new(workers, PartitionPolicy::Truncating).split(&buffer);

        prop_assert_eq!(parts.len(), workers);
        prop_assert_eq!(parts[0].start, 0);
        for pair in parts.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
        let covered = parts[workers - 1].end;
        prop_assert_eq!(covered, workers * (len / workers));
        prop_assert!(len - covered < workers);
    }

    #[test]
    fn token_aligned_partitions_cover_everything(bytes in text(), workers in 1usize..9) {
        let parts = Partitioner::new(workers, PartitionPolicy::TokenAligned).split(&bytes);

        prop_assert_eq!(parts.len(), workers);
        prop_assert_eq!(parts[0].start, 0);
        prop_assert_eq!(parts[workers - 1].end, bytes.len());
        for pair in parts.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn top_n_covers_the_largest_counts(maps in count_maps(), n in 0usize..6) {
        let counts = merge_all(maps);
        let top = counts.top_n(n);

        prop_assert_eq!(top.len(), n.min(counts.distinct()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        // nothing left out beats the smallest entry kept
        if let Some(&(_, floor)) = top.last() {
            let kept: Vec<&str> = top.iter().map(|(word, _)| *word).collect();
            for (word, count) in &counts {
                if !kept.contains(&word.as_str()) {
                    prop_assert!(*count <= floor);
                }
            }
        }
    }
}
