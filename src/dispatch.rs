//! ParallelDispatch: fan-out/fan-in over independent units of work.
//!
//! A [`Dispatcher`] owns a fixed-size worker pool and applies a pure
//! function to every element of a slice, returning results in input order
//! whatever the completion order. The same engine serves both
//! granularities: the digrams of one message and the words of a batch.
//!
//! # Strategies
//!
//! ```text
//! Sequential  caller thread, one pass
//! Unordered   slice split into chunks, one task per chunk; tasks finish
//!             in any order and write into their own pre-sized result slots
//! Ordered     indexed parallel iterator collecting in input order
//! ```
//!
//! Inputs shorter than the configured minimum chunk never leave the
//! calling thread.

use std::time::{Duration, Instant};

use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{CipherConfig, Strategy};
use crate::error::{PlayfairError, Result};

/// Applies a function across independent units with a configured strategy.
#[derive(Debug)]
pub struct Dispatcher {
    strategy: Strategy,
    min_chunk: usize,
    pool: Option<ThreadPool>,
}

impl Dispatcher {
    /// Creates a dispatcher from a session configuration.
    ///
    /// A worker pool of `config.threads()` threads is started unless the
    /// strategy is [`Strategy::Sequential`].
    ///
    /// # Errors
    /// Returns [`PlayfairError::ThreadPool`] if the pool cannot be started.
    pub fn new(config: &CipherConfig) -> Result<Self> {
        let pool = match config.strategy() {
            Strategy::Sequential => None,
            Strategy::Unordered | Strategy::Ordered => Some(
                ThreadPoolBuilder::new()
                    .num_threads(config.threads())
                    .thread_name(|i| format!("playfair-worker-{}", i))
                    .build()
                    .map_err(|e| PlayfairError::ThreadPool(e.to_string()))?,
            ),
        };
        debug!(
            "dispatcher ready: {:?} strategy, {} threads, min chunk {}",
            config.strategy(),
            pool.as_ref().map_or(1, |p| p.current_num_threads()),
            config.min_chunk()
        );
        Ok(Dispatcher {
            strategy: config.strategy(),
            min_chunk: config.min_chunk(),
            pool,
        })
    }

    /// Creates a dispatcher that runs everything on the calling thread.
    pub fn sequential() -> Self {
        Dispatcher {
            strategy: Strategy::Sequential,
            min_chunk: 1,
            pool: None,
        }
    }

    /// Returns the number of threads work can run on.
    pub fn threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |p| p.current_num_threads())
    }

    /// Applies `f` to every unit and returns the results in input order.
    ///
    /// # Parameters
    /// - `units`: The independent inputs.
    /// - `f`: A pure function; it may run on any worker thread.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::{CipherConfig, Dispatcher, Strategy};
    ///
    /// let config = CipherConfig::default()
    ///     .with_strategy(Strategy::Unordered)
    ///     .with_min_chunk(1);
    /// let dispatcher = Dispatcher::new(&config).unwrap();
    ///
    /// let squares = dispatcher.map(&[1u64, 2, 3, 4, 5], |x| x * x);
    /// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
    /// ```
    pub fn map<T, R, F>(&self, units: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        trace!("dispatching {} units ({:?})", units.len(), self.strategy);

        let pool = match &self.pool {
            Some(pool) if units.len() >= self.min_chunk => pool,
            _ => return units.iter().map(f).collect(),
        };

        match self.strategy {
            Strategy::Sequential => units.iter().map(f).collect(),
            Strategy::Ordered => {
                let min_len = self.min_chunk;
                pool.install(|| units.par_iter().with_min_len(min_len).map(&f).collect())
            }
            Strategy::Unordered => self.map_into_slots(pool, units, &f),
        }
    }

    /// Splits `units` into chunks, one task per chunk, each task writing
    /// only the result slots that mirror its own inputs.
    fn map_into_slots<T, R, F>(&self, pool: &ThreadPool, units: &[T], f: &F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        let chunk = self.chunk_len(units.len(), pool.current_num_threads());
        let mut slots: Vec<Option<R>> = Vec::with_capacity(units.len());
        slots.resize_with(units.len(), || None);

        pool.scope(|scope| {
            for (inputs, outputs) in units.chunks(chunk).zip(slots.chunks_mut(chunk)) {
                scope.spawn(move |_| {
                    for (unit, slot) in inputs.iter().zip(outputs.iter_mut()) {
                        *slot = Some(f(unit));
                    }
                });
            }
        });

        // Every slot is written once the scope has joined all tasks.
        let results: Vec<R> = slots.into_iter().flatten().collect();
        debug_assert_eq!(results.len(), units.len());
        results
    }

    /// Chunk length giving each worker about one chunk, never below the
    /// configured minimum.
    fn chunk_len(&self, len: usize, threads: usize) -> usize {
        len.div_ceil(threads.max(1)).max(self.min_chunk).max(1)
    }
}

/// Start and end instants around a unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub started: Instant,
    pub finished: Instant,
}

impl Timing {
    /// Wall-clock time between start and finish.
    pub fn elapsed(&self) -> Duration {
        self.finished.duration_since(self.started)
    }
}

/// Runs `f` and records the instants around it.
///
/// ```
/// use playfair::timed;
///
/// let (sum, timing) = timed(|| (1..=10).sum::<u32>());
/// assert_eq!(sum, 55);
/// assert!(timing.finished >= timing.started);
/// ```
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Timing) {
    let started = Instant::now();
    let value = f();
    let finished = Instant::now();
    (value, Timing { started, finished })
}

/// Splits a whitespace-delimited word list into words.
///
/// ```
/// use playfair::words;
///
/// let list: Vec<&str> = words("apple\nbanana  cherry\r\n").collect();
/// assert_eq!(list, ["apple", "banana", "cherry"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
