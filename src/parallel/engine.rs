use crate::count::{CountMap, count_tokens, merge_all, tokenize};
use crate::error::CountError;
use crate::parallel::partition::{Partition, PartitionPolicy, Partitioner};
use crossbeam::channel::{Receiver, Sender, bounded};

/// Count map produced by one worker over its partition
#[derive(Debug)]
pub struct WorkerResult {
    pub partition: Partition,
    pub counts: CountMap,
}

/// Fixed-size thread pool that counts words over disjoint partitions
///
/// Workers only read their own slice and build a private [`CountMap`]. The
/// maps are sent back by value and merged on the calling thread once every
/// worker has finished, so no lock guards the aggregate.
#[derive(Debug, Clone, Copy)]
pub struct ParallelCountEngine {
    workers: usize,
    policy: PartitionPolicy,
}

impl ParallelCountEngine {
    pub fn new(workers: usize, policy: PartitionPolicy) -> Self {
        Self { workers, policy }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn policy(&self) -> PartitionPolicy {
        self.policy
    }

    /// Count `buffer` across all workers and return the merged result
    ///
    /// Blocks until every worker has been joined. Fails without a partial
    /// result if a worker thread cannot be spawned or panics.
    pub fn count(&self, buffer: &[u8]) -> Result<CountMap, CountError> {
        let mut results = self.count_partitions(buffer)?;
        results.sort_by_key(|result| result.partition.index);
        Ok(merge_all(results.into_iter().map(|result| result.counts)))
    }

    /// Run every worker and return their unmerged results in completion order
    pub fn count_partitions(&self, buffer: &[u8]) -> Result<Vec<WorkerResult>, CountError> {
        if self.workers == 0 {
            return Err(CountError::NoWorkers);
        }

        let partitions = Partitioner::new(self.workers, self.policy).split(buffer);
        tracing::debug!(
            "Counting {} bytes with {} workers ({:?})",
            buffer.len(),
            partitions.len(),
            self.policy
        );

        // Capacity for every result so a worker never blocks on send
        let (result_tx, result_rx): (Sender<WorkerResult>, Receiver<WorkerResult>) =
            bounded(partitions.len());

        crossbeam::thread::scope(|s| -> Result<Vec<WorkerResult>, CountError> {
            for partition in &partitions {
                let partition = *partition;
                let slice = &buffer[partition.range()];
                let result_tx = result_tx.clone();

                s.builder()
                    .name(format!("count-worker-{}", partition.index))
                    .spawn(move |_| {
                        let counts = count_tokens(tokenize(slice));
                        tracing::trace!(
                            "worker-{} counted {} distinct words in {} bytes",
                            partition.index,
                            counts.distinct(),
                            partition.len()
                        );
                        // Receiver outlives the scope
                        let _ = result_tx.send(WorkerResult { partition, counts });
                    })
                    .map_err(|source| CountError::ResourceExhaustion {
                        what: format!("worker thread {}", partition.index),
                        source,
                    })?;
            }

            // Drop the original sender so the collector sees the channel close
            drop(result_tx);

            Ok(result_rx.iter().collect())
        })
        .map_err(|_| CountError::WorkerPanicked)?
    }
}
