//! NFA to DFA conversion by in-place subset construction.
//!
//! An automaton is built from labeled transition records, pruned of useless
//! states, determinized by merging sets of simultaneously-reachable states
//! into composite states, pruned of unreachable states, and finally used to
//! test input strings for acceptance:
//!
//! ```
//! use std::io::BufReader;
//! use fsm::{accepts, determinize, remove_unreachable, remove_useless, Automaton};
//!
//! let records = "A,a=B\nA,a=C\nB,b=fD\nC,b=fD\n";
//! let mut automaton = Automaton::from_reader(BufReader::new(records.as_bytes()))?;
//! remove_useless(&mut automaton);
//! determinize(&mut automaton);
//! remove_unreachable(&mut automaton);
//! assert!(accepts(&automaton, "ab"));
//! assert!(!accepts(&automaton, "aa"));
//! # Ok::<(), fsm::Error>(())
//! ```

pub mod alphabet;
pub mod automaton;
pub mod determinize;
pub mod error;
pub mod ingest;
pub mod prune;
pub mod state;
pub mod validate;

pub use alphabet::Alphabet;
pub use automaton::Automaton;
pub use determinize::determinize;
pub use error::{Error, RecordDefect, Result};
pub use ingest::{parse_record, read_records, Record, ACCEPT_MARKER};
pub use prune::{remove_unreachable, remove_useless};
pub use state::{State, NAME_SEPARATOR};
pub use validate::accepts;
