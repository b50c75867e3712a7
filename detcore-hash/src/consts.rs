//! Domain-separation prefixes. One byte each, distinct and frozen: changing
//! any of these changes every digest downstream of it and breaks
//! cross-implementation/cross-version compatibility silently.
//!
//! `PROVENANCE_INIT`/`EPOCH_CHAIN` name the provenance-chain prefixes
//! distinctly from the tree-hashing prefixes above; these are the values
//! this implementation commits to.

pub const LEAF: u8 = 0x00;
pub const INTERNAL: u8 = 0x01;
pub const BATCH: u8 = 0x02;
pub const PROVENANCE_INIT: u8 = 0x03;
pub const EPOCH_CHAIN: u8 = 0x04;
