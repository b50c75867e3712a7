//! Hashing primitives: a from-scratch SHA-256, canonical sample/leaf/node
//! serialization, Merkle tree construction with odd-leaf promotion, and the
//! provenance chain that binds a dataset, its config and seed, and every
//! epoch it has been through into one rolling commitment.
//!
//! Domain-separation prefixes in [`consts`] ensure a leaf digest, an
//! interior-node digest and a provenance-chain digest can never collide even
//! if their raw byte inputs happened to coincide.

pub mod consts;
pub mod merkle;
pub mod provenance;
pub mod sha256;

pub use merkle::{hash_internal, hash_sample, merkle_root, verify_batch};
pub use provenance::{provenance_advance, provenance_init};
pub use sha256::{sha256, Sha256};
