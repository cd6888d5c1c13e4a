//! O-DF model types for OmiStack.
//!
//! This crate defines the data that an O-MI read request enumerates: the
//! [`Hierarchy`] of O-DF object identifiers and the optional [`Newest`]
//! read parameter. Both are plain values constructed by the caller and
//! handed to `omistack-xml` for rendering; nothing here performs I/O.
//!
//! Hierarchies typically originate as literal configuration data, so both
//! types carry serde implementations: a JSON object maps to a mapping node,
//! a JSON array to a leaf list, and entry order is preserved end to end.

mod hierarchy;
mod newest;

pub use hierarchy::Hierarchy;
pub use newest::Newest;
