//! TextCodec: message normalization, digram splitting and reassembly.
//!
//! Text goes through three stages:
//!
//! ```text
//! raw text ──normalize──▶ letters ──split_digrams──▶ [Digram] ──transform──▶ String
//!           (uppercase,             (sequential:                (per digram,
//!            J → I,                  filler between               any thread,
//!            strip/reject)           equal letters and            reassembled
//!                                    after an odd tail)           in order)
//! ```
//!
//! Splitting is a single left-to-right pass because each boundary depends
//! on how the previous digram consumed its letters. Only the transform
//! stage is handed to the [`Dispatcher`].

use crate::config::{CipherConfig, NormalizePolicy};
use crate::digram::{Digram, Mode};
use crate::dispatch::Dispatcher;
use crate::error::{PlayfairError, Result};
use crate::grid::{fold_letter, Grid};

/// Folds `text` into Playfair letters.
///
/// ASCII letters are uppercased and `J` becomes `I`. Any other character is
/// dropped under [`NormalizePolicy::Strip`] and reported under
/// [`NormalizePolicy::Reject`].
///
/// # Errors
/// Returns [`PlayfairError::InvalidCharacter`] for the first non-letter when
/// the policy is `Reject`. `position` counts characters, not bytes.
///
/// # Examples
///
/// ```
/// use playfair::{normalize, NormalizePolicy};
///
/// let letters = normalize("Jump, jive!", NormalizePolicy::Strip).unwrap();
/// assert_eq!(letters.iter().collect::<String>(), "IUMPIIVE");
///
/// assert!(normalize("Jump, jive!", NormalizePolicy::Reject).is_err());
/// ```
pub fn normalize(text: &str, policy: NormalizePolicy) -> Result<Vec<char>> {
    let mut letters = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        match (fold_letter(character), policy) {
            (Some(letter), _) => letters.push(letter),
            (None, NormalizePolicy::Strip) => {}
            (None, NormalizePolicy::Reject) => {
                return Err(PlayfairError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
    }
    Ok(letters)
}

/// Splits normalized letters into digrams.
///
/// At each step the current letter is paired with the next one. If the two
/// are equal, or no next letter exists, the filler is paired with the
/// current letter instead and the next letter starts the following digram.
/// The alternate filler stands in when the current letter is the filler.
///
/// # Errors
/// Returns [`PlayfairError::RepeatedLetter`] only if the configuration lets
/// a filler collide with the letter it pads, which validated configs rule
/// out.
///
/// # Examples
///
/// ```
/// use playfair::{normalize, split_digrams, CipherConfig, NormalizePolicy};
///
/// let letters = normalize("balloon", NormalizePolicy::Strip).unwrap();
/// let pairs: Vec<String> = split_digrams(&letters, &CipherConfig::default())
///     .unwrap()
///     .iter()
///     .map(|d| [d.first(), d.second()].iter().collect())
///     .collect();
/// assert_eq!(pairs, ["BA", "LX", "LO", "ON"]);
/// ```
pub fn split_digrams(letters: &[char], config: &CipherConfig) -> Result<Vec<Digram>> {
    let mut digrams = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                digrams.push(Digram::new(first, second)?);
                i += 2;
            }
            _ => {
                digrams.push(Digram::new(first, config.filler_for(first))?);
                i += 1;
            }
        }
    }
    Ok(digrams)
}

/// Encodes and decodes whole messages over one key square.
#[derive(Debug, Clone, Copy)]
pub struct TextCodec<'a> {
    grid: &'a Grid,
    config: &'a CipherConfig,
}

impl<'a> TextCodec<'a> {
    pub fn new(grid: &'a Grid, config: &'a CipherConfig) -> Self {
        TextCodec { grid, config }
    }

    /// Encrypts `plaintext` on the calling thread.
    ///
    /// # Errors
    /// See [`normalize`]; lookup errors indicate a normalization bug.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair::{CipherConfig, Grid, TextCodec};
    ///
    /// let grid = Grid::build("MONARCHY").unwrap();
    /// let config = CipherConfig::default();
    /// let codec = TextCodec::new(&grid, &config);
    /// assert_eq!(codec.encode("instruments").unwrap(), "GATLMZCLRQXA");
    /// assert_eq!(codec.encode("instruments z").unwrap(), "GATLMZCLRQTX");
    /// ```
    pub fn encode(&self, plaintext: &str) -> Result<String> {
        self.run(plaintext, Mode::Encrypt, &Dispatcher::sequential())
    }

    /// Decrypts `ciphertext` on the calling thread.
    ///
    /// Fillers inserted during encryption are kept in the output.
    pub fn decode(&self, ciphertext: &str) -> Result<String> {
        self.run(ciphertext, Mode::Decrypt, &Dispatcher::sequential())
    }

    /// Encrypts `plaintext`, transforming its digrams through `dispatcher`.
    pub fn encode_on(&self, plaintext: &str, dispatcher: &Dispatcher) -> Result<String> {
        self.run(plaintext, Mode::Encrypt, dispatcher)
    }

    /// Decrypts `ciphertext`, transforming its digrams through `dispatcher`.
    pub fn decode_on(&self, ciphertext: &str, dispatcher: &Dispatcher) -> Result<String> {
        self.run(ciphertext, Mode::Decrypt, dispatcher)
    }

    fn run(&self, text: &str, mode: Mode, dispatcher: &Dispatcher) -> Result<String> {
        let letters = normalize(text, self.config.policy())?;
        let digrams = split_digrams(&letters, self.config)?;

        let grid = self.grid;
        let transformed = dispatcher.map(&digrams, |digram| digram.transform(grid, mode));

        let mut output = String::with_capacity(digrams.len() * 2);
        for digram in transformed {
            let digram = digram?;
            output.push(digram.first());
            output.push(digram.second());
        }
        Ok(output)
    }
}
