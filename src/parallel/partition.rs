//! Splitting an input buffer into contiguous per-worker byte ranges

use std::ops::Range;

/// How partition boundaries are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionPolicy {
    /// Fixed-size chunks of `len / workers` bytes.
    ///
    /// Any remainder past `workers * (len / workers)` is not scanned, and a
    /// word straddling a boundary is counted as two shorter words.
    #[default]
    Truncating,
    /// Nominal boundaries are pushed forward to the end of any word they would
    /// cut, and the last partition runs to the end of the buffer.
    TokenAligned,
}

/// Half-open byte range `[start, end)` assigned to one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Produces `workers` partitions over a buffer
#[derive(Debug, Clone, Copy)]
pub struct Partitioner {
    workers: usize,
    policy: PartitionPolicy,
}

impl Partitioner {
    pub fn new(workers: usize, policy: PartitionPolicy) -> Self {
        Self { workers, policy }
    }

    /// Partition `buffer`; returns an empty list when `workers` is zero
    pub fn split(&self, buffer: &[u8]) -> Vec<Partition> {
        match self.policy {
            PartitionPolicy::Truncating => truncating(buffer.len(), self.workers),
            PartitionPolicy::TokenAligned => token_aligned(buffer, self.workers),
        }
    }
}

/// Partition `i` covers `[i * (len / workers), i * (len / workers) + len / workers)`
pub fn truncating(len: usize, workers: usize) -> Vec<Partition> {
    if workers == 0 {
        return Vec::new();
    }
    let chunk = len / workers;
    (0..workers)
        .map(|index| Partition {
            index,
            start: index * chunk,
            end: index * chunk + chunk,
        })
        .collect()
}

/// Contiguous partitions covering the whole buffer without splitting a word
///
/// Partitions may be empty when a single word spans several nominal chunks.
pub fn token_aligned(buffer: &[u8], workers: usize) -> Vec<Partition> {
    if workers == 0 {
        return Vec::new();
    }
    let len = buffer.len();
    let chunk = len / workers;

    let mut partitions = Vec::with_capacity(workers);
    let mut start = 0;
    for index in 0..workers {
        let end = if index + 1 == workers {
            len
        } else {
            let mut end = ((index + 1) * chunk).max(start);
            while end > 0 && end < len && inside_word(buffer, end) {
                end += 1;
            }
            end
        };
        partitions.push(Partition { index, start, end });
        start = end;
    }
    partitions
}

/// True when the boundary before `pos` falls between two letters
fn inside_word(buffer: &[u8], pos: usize) -> bool {
    buffer[pos - 1].is_ascii_alphabetic() && buffer[pos].is_ascii_alphabetic()
}
