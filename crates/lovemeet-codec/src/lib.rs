//! LoveMeet share codec
//!
//! Plans travel to recipients inside the link itself: the plan is serialized
//! to JSON and base64-encoded into a `data` query parameter, so a recipient on
//! another device can view it without any backend.
//!
//! Identifiers are generated locally and only need to be unique within one
//! browser's store.

pub mod ids;
pub mod token;

pub use ids::{generate_proposal_id, generate_share_id};
pub use token::{CodecError, decode, encode, try_encode};
