//! Embedded word list
//!
//! Compiled into the binary from `data/words.txt` at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
