//! Playfair digraph substitution cipher engine.
//!
//! Playfair encrypts letter pairs (digrams) using a 5×5 key square built
//! from a secret key. This crate provides the key square, the three
//! substitution rules, message normalization and splitting, and a dispatch
//! layer that spreads independent digrams or whole words across a fixed
//! worker pool while keeping output in input order.
//!
//! # Architecture
//!
//! ```text
//! Grid            (key square, built once per key, read-only afterwards)
//!     │ PositionIndex (letter → row/col, precomputed with the grid)
//!     ▼
//! Digram          (same row / same column / rectangle rules)
//!     ▲
//! TextCodec       (normalize → split into digrams → transform → join)
//!     │
//! Dispatcher      (Sequential | Unordered | Ordered over a rayon pool)
//!     ▲
//! Playfair        (session: grid + config + dispatcher, messages and word batches)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use playfair::Playfair;
//!
//! let cipher = Playfair::new("monarchy").unwrap();
//!
//! // An odd tail is padded with the filler 'X'
//! let encrypted = cipher.encrypt("instruments").unwrap();
//! assert_eq!(encrypted, "GATLMZCLRQXA");
//!
//! // Decryption keeps the filler
//! let decrypted = cipher.decrypt(&encrypted).unwrap();
//! assert_eq!(decrypted, "INSTRUMENTSX");
//!
//! // Non-letters are stripped before pairing
//! assert_eq!(cipher.encrypt("instruments z").unwrap(), "GATLMZCLRQTX");
//! ```
//!
//! Encrypt a word list in parallel, one word per unit of work:
//!
//! ```
//! use playfair::{words, CipherConfig, Playfair, Strategy};
//!
//! let config = CipherConfig::default()
//!     .with_strategy(Strategy::Unordered)
//!     .with_threads(2)
//!     .unwrap();
//! let cipher = Playfair::with_config("monarchy", config).unwrap();
//!
//! let list: Vec<&str> = words("balloon\ninstruments\n").collect();
//! let report = cipher.encrypt_words_timed(&list);
//! assert_eq!(report.succeeded(), 2);
//! assert_eq!(report.results[0].as_deref(), Ok("IBSUPMNA"));
//! ```

#![deny(clippy::all)]

pub mod error;

mod codec;
mod config;
mod digram;
mod dispatch;
mod grid;
mod playfair;
mod position;

pub use codec::{normalize, split_digrams, TextCodec};
pub use config::{CipherConfig, NormalizePolicy, Strategy};
pub use digram::{Digram, Mode};
pub use dispatch::{timed, words, Dispatcher, Timing};
pub use error::{PlayfairError, Result};
pub use grid::{Grid, ALPHABET};
pub use playfair::{BatchReport, Playfair};
pub use position::{Position, PositionIndex};
