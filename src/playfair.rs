//! Playfair: a cipher session over one key.
//!
//! Builds the key square once, then serves any number of single-message
//! and word-batch requests from it through a shared [`Dispatcher`].

use log::{debug, warn};

use crate::codec::TextCodec;
use crate::config::CipherConfig;
use crate::digram::Mode;
use crate::dispatch::{timed, Dispatcher, Timing};
use crate::error::{PlayfairError, Result};
use crate::grid::Grid;

/// Playfair cipher session.
///
/// # Architecture
///
/// The session owns an immutable [`Grid`], its [`CipherConfig`] and a
/// [`Dispatcher`] with a fixed worker pool. Single messages are split into
/// digrams on the calling thread and the digram transforms are dispatched;
/// word batches dispatch one whole word per unit instead. Workers only read
/// the grid, and every result lands in the slot of the unit it came from.
#[derive(Debug)]
pub struct Playfair {
    grid: Grid,
    config: CipherConfig,
    dispatcher: Dispatcher,
}

impl Playfair {
    /// Creates a session with the default configuration.
    ///
    /// # Errors
    /// Returns [`PlayfairError::InvalidKey`] if the key has no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::Playfair;
    ///
    /// let cipher = Playfair::new("monarchy").unwrap();
    /// assert_eq!(cipher.encrypt("balloon").unwrap(), "IBSUPMNA");
    /// ```
    pub fn new(key: &str) -> Result<Self> {
        Self::with_config(key, CipherConfig::default())
    }

    /// Creates a session with a custom configuration.
    ///
    /// # Errors
    /// Returns [`PlayfairError::InvalidKey`] if the key has no letters, or
    /// [`PlayfairError::ThreadPool`] if the worker pool cannot be started.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::{CipherConfig, Playfair, Strategy};
    ///
    /// let config = CipherConfig::default().with_strategy(Strategy::Sequential);
    /// let cipher = Playfair::with_config("monarchy", config).unwrap();
    /// assert_eq!(cipher.decrypt("IBSUPMNA").unwrap(), "BALXLOON");
    /// ```
    pub fn with_config(key: &str, config: CipherConfig) -> Result<Self> {
        let grid = Grid::build(key)?;
        let dispatcher = Dispatcher::new(&config)?;
        debug!(
            "playfair session ready ({:?}, {:?} non-letters)",
            config.strategy(),
            config.policy()
        );
        Ok(Playfair {
            grid,
            config,
            dispatcher,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Returns a codec bound to this session's grid and configuration.
    pub fn codec(&self) -> TextCodec<'_> {
        TextCodec::new(&self.grid, &self.config)
    }

    /// Encrypts one message, dispatching its digrams across the pool.
    ///
    /// # Errors
    /// Returns [`PlayfairError::InvalidCharacter`] under the `Reject` policy
    /// when the text holds a non-letter.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        self.codec().encode_on(plaintext, &self.dispatcher)
    }

    /// Decrypts one message, dispatching its digrams across the pool.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        self.codec().decode_on(ciphertext, &self.dispatcher)
    }

    /// Encrypts each word independently, one word per unit of work.
    ///
    /// Results keep the order of `words`. A word that fails does not affect
    /// the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::{words, Playfair};
    ///
    /// let cipher = Playfair::new("monarchy").unwrap();
    /// let list: Vec<&str> = words("balloon instruments").collect();
    /// let out = cipher.encrypt_words(&list);
    /// assert_eq!(out[0].as_deref(), Ok("IBSUPMNA"));
    /// assert_eq!(out[1].as_deref(), Ok("GATLMZCLRQXA"));
    /// ```
    pub fn encrypt_words<S>(&self, words: &[S]) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        self.run_words(words, Mode::Encrypt)
    }

    /// Decrypts each word independently, one word per unit of work.
    pub fn decrypt_words<S>(&self, words: &[S]) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        self.run_words(words, Mode::Decrypt)
    }

    /// Encrypts a word batch and records the time the dispatch took.
    pub fn encrypt_words_timed<S>(&self, words: &[S]) -> BatchReport
    where
        S: AsRef<str> + Sync,
    {
        let (results, timing) = timed(|| self.run_words(words, Mode::Encrypt));
        BatchReport { results, timing }
    }

    /// Decrypts a word batch and records the time the dispatch took.
    pub fn decrypt_words_timed<S>(&self, words: &[S]) -> BatchReport
    where
        S: AsRef<str> + Sync,
    {
        let (results, timing) = timed(|| self.run_words(words, Mode::Decrypt));
        BatchReport { results, timing }
    }

    fn run_words<S>(&self, words: &[S], mode: Mode) -> Vec<Result<String>>
    where
        S: AsRef<str> + Sync,
    {
        let codec = self.codec();
        let results = self.dispatcher.map(words, |word| match mode {
            Mode::Encrypt => codec.encode(word.as_ref()),
            Mode::Decrypt => codec.decode(word.as_ref()),
        });

        for (i, result) in results.iter().enumerate() {
            if let Err(e) = result {
                warn!("word {} failed: {}", i, e);
            }
        }
        results
    }
}

/// Outcome of a timed word batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Per-word results, in input order.
    pub results: Vec<Result<String>>,
    /// Instants around the dispatch.
    pub timing: Timing,
}

impl BatchReport {
    /// Number of words processed successfully.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    /// Number of words that failed.
    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// Failures with the index of the word that caused them.
    pub fn errors(&self) -> impl Iterator<Item = (usize, &PlayfairError)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
    }
}
