use std::collections::HashMap;
use std::collections::hash_map;

/// Word → frequency mapping
///
/// Equality compares keys and values only; iteration order is unspecified.
/// Use [`CountMap::top_n`] or [`CountMap::sorted`] for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    counts: HashMap<String, u64>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`
    pub fn record(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Add `count` occurrences of `word`
    pub fn add(&mut self, word: String, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(word).or_insert(0) += count;
    }

    /// Frequency of `word`, zero if never seen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all frequencies (number of tokens counted)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }

    /// Fold `other` into `self`, summing the counts of shared words
    pub fn merge(&mut self, other: CountMap) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (word, count) in other.counts {
            self.add(word, count);
        }
    }

    /// All entries, highest frequency first, ties by ascending word
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// The `n` most frequent words, highest first
    ///
    /// Ties are broken by ascending word so the result is stable across runs.
    /// Returns every entry when the map holds fewer than `n` words.
    pub fn top_n(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries = self.sorted();
        entries.truncate(n);
        entries
    }

    /// Number of words whose counts differ between `self` and `other`
    pub fn divergence(&self, other: &CountMap) -> usize {
        let changed = self
            .counts
            .iter()
            .filter(|(word, count)| other.counts.get(word.as_str()) != Some(*count))
            .count();
        let missing = other
            .counts
            .keys()
            .filter(|word| !self.counts.contains_key(word.as_str()))
            .count();
        changed + missing
    }
}

/// Count a token stream
pub fn count_tokens<I>(tokens: I) -> CountMap
where
    I: IntoIterator<Item = String>,
{
    tokens.into_iter().collect()
}

/// Merge every map in `results` into one aggregate
pub fn merge_all<I>(results: I) -> CountMap
where
    I: IntoIterator<Item = CountMap>,
{
    results.into_iter().fold(CountMap::new(), |mut aggregate, part| {
        aggregate.merge(part);
        aggregate
    })
}

impl FromIterator<String> for CountMap {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut map = CountMap::new();
        for token in iter {
            map.record(token);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, u64)> for CountMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, u64)>>(iter: T) -> Self {
        let mut map = CountMap::new();
        for (word, count) in iter {
            map.add(word.to_string(), count);
        }
        map
    }
}

impl<'a> IntoIterator for &'a CountMap {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
