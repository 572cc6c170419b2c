//! Fixed-size fan-out/fan-in over bounded queues.

use std::thread;

use crossbeam::channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A fixed number of scoped worker threads draining one batch.
///
/// Each [`run`](Self::run) call sizes both the work queue and the result queue to the batch,
/// so neither the feeder nor the workers block on a full queue. Results arrive in completion
/// order, not input order.
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Creates a pool of `workers` threads (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Applies `work` to every item and collects the outputs.
    ///
    /// `work` receives the worker index alongside the item. Returns once every worker has
    /// drained the queue and exited.
    pub fn run<T, R, F>(&self, items: Vec<T>, work: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(usize, T) -> R + Sync,
    {
        if items.is_empty() {
            return Vec::new();
        }

        let capacity = items.len();
        let (task_tx, task_rx) = channel::bounded::<T>(capacity);
        let (result_tx, result_rx) = channel::bounded::<R>(capacity);

        thread::scope(|scope| {
            for worker_id in 0..self.workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                let work = &work;

                scope.spawn(move || {
                    for item in task_rx.iter() {
                        if result_tx.send(work(worker_id, item)).is_err() {
                            break;
                        }
                    }
                });
            }

            // Only the workers hold senders now; the result channel disconnects when the
            // last of them exits.
            drop(task_rx);
            drop(result_tx);

            for item in items {
                if task_tx.send(item).is_err() {
                    break;
                }
            }
            drop(task_tx);

            result_rx.iter().collect()
        })
    }
}
