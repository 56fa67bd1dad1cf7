//! Cipher session configuration.
//!
//! [`CipherConfig`] gathers the tunables of a Playfair session: filler
//! letters, the non-letter policy, and how work is spread across threads.
//! Builder methods validate eagerly, so a config that exists is usable.

use crate::error::{PlayfairError, Result};
use crate::grid::fold_letter;

/// Default filler inserted between equal letters and after an odd tail.
pub const DEFAULT_FILLER: char = 'X';

/// Default filler used when the letter being separated is the filler itself.
pub const DEFAULT_ALTERNATE_FILLER: char = 'Q';

/// Default number of worker threads.
pub const DEFAULT_THREADS: usize = 4;

/// Default smallest number of units handed to one parallel task.
pub const DEFAULT_MIN_CHUNK: usize = 64;

/// How characters outside A-Z are treated during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePolicy {
    /// Drop them silently.
    #[default]
    Strip,
    /// Fail with [`PlayfairError::InvalidCharacter`].
    Reject,
}

/// How independent units of work are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Everything runs on the calling thread.
    Sequential,
    /// Chunks complete in any order, each writing into its own result slots.
    Unordered,
    /// An indexed parallel iterator collects results in input order.
    #[default]
    Ordered,
}

/// Configuration for a [`Playfair`](crate::Playfair) session.
///
/// # Examples
///
/// ```
/// use playfair::{CipherConfig, NormalizePolicy, Strategy};
///
/// let config = CipherConfig::default()
///     .with_policy(NormalizePolicy::Reject)
///     .with_strategy(Strategy::Unordered)
///     .with_threads(2)
///     .unwrap();
/// assert_eq!(config.threads(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    filler: char,
    alternate_filler: char,
    policy: NormalizePolicy,
    strategy: Strategy,
    threads: usize,
    min_chunk: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            filler: DEFAULT_FILLER,
            alternate_filler: DEFAULT_ALTERNATE_FILLER,
            policy: NormalizePolicy::default(),
            strategy: Strategy::default(),
            threads: DEFAULT_THREADS,
            min_chunk: DEFAULT_MIN_CHUNK,
        }
    }
}

impl CipherConfig {
    /// Sets the primary and alternate filler letters.
    ///
    /// Lowercase letters are accepted and folded like message text.
    ///
    /// # Errors
    /// Returns [`PlayfairError::InvalidFiller`] if either letter is not in
    /// the Playfair alphabet (`J` included, since it has no cell of its
    /// own) or if both fold to the same letter.
    ///
    /// ```
    /// use playfair::CipherConfig;
    ///
    /// assert!(CipherConfig::default().with_fillers('Z', 'Q').is_ok());
    /// assert!(CipherConfig::default().with_fillers('J', 'Q').is_err());
    /// assert!(CipherConfig::default().with_fillers('Q', 'q').is_err());
    /// ```
    pub fn with_fillers(mut self, filler: char, alternate: char) -> Result<Self> {
        let filler = Self::check_filler(filler)?;
        let alternate = Self::check_filler(alternate)?;
        if filler == alternate {
            return Err(PlayfairError::InvalidFiller(alternate));
        }
        self.filler = filler;
        self.alternate_filler = alternate;
        Ok(self)
    }

    /// Sets the non-letter policy.
    pub fn with_policy(mut self, policy: NormalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the scheduling strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the size of the worker pool.
    ///
    /// # Errors
    /// Returns [`PlayfairError::InvalidThreadCount`] if `threads == 0`.
    pub fn with_threads(mut self, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(PlayfairError::InvalidThreadCount(threads));
        }
        self.threads = threads;
        Ok(self)
    }

    /// Sets the smallest number of units a parallel task processes.
    ///
    /// Values below 1 are raised to 1.
    pub fn with_min_chunk(mut self, min_chunk: usize) -> Self {
        self.min_chunk = min_chunk.max(1);
        self
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn alternate_filler(&self) -> char {
        self.alternate_filler
    }

    pub fn policy(&self) -> NormalizePolicy {
        self.policy
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn min_chunk(&self) -> usize {
        self.min_chunk
    }

    /// Returns the filler that separates or pads `letter`.
    pub(crate) fn filler_for(&self, letter: char) -> char {
        if letter == self.filler {
            self.alternate_filler
        } else {
            self.filler
        }
    }

    fn check_filler(letter: char) -> Result<char> {
        if letter.eq_ignore_ascii_case(&'J') {
            return Err(PlayfairError::InvalidFiller(letter));
        }
        fold_letter(letter).ok_or(PlayfairError::InvalidFiller(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CipherConfig::default();
        assert_eq!(config.filler(), 'X');
        assert_eq!(config.alternate_filler(), 'Q');
        assert_eq!(config.policy(), NormalizePolicy::Strip);
        assert_eq!(config.strategy(), Strategy::Ordered);
        assert_eq!(config.threads(), 4);
        assert_eq!(config.min_chunk(), 64);
    }

    #[test]
    fn test_fillers_are_folded() {
        let config = CipherConfig::default().with_fillers('z', 'k').unwrap();
        assert_eq!(config.filler(), 'Z');
        assert_eq!(config.alternate_filler(), 'K');
    }

    #[test]
    fn test_invalid_fillers() {
        assert_eq!(
            CipherConfig::default().with_fillers('1', 'Q'),
            Err(PlayfairError::InvalidFiller('1'))
        );
        assert_eq!(
            CipherConfig::default().with_fillers('X', 'j'),
            Err(PlayfairError::InvalidFiller('j'))
        );
        assert_eq!(
            CipherConfig::default().with_fillers('X', 'X'),
            Err(PlayfairError::InvalidFiller('X'))
        );
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert_eq!(
            CipherConfig::default().with_threads(0),
            Err(PlayfairError::InvalidThreadCount(0))
        );
    }

    #[test]
    fn test_min_chunk_floor() {
        assert_eq!(CipherConfig::default().with_min_chunk(0).min_chunk(), 1);
    }

    #[test]
    fn test_filler_for() {
        let config = CipherConfig::default();
        assert_eq!(config.filler_for('L'), 'X');
        assert_eq!(config.filler_for('X'), 'Q');
    }
}
