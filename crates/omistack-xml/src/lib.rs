//! O-MI XML serialization for OmiStack.
//!
//! This crate provides the XML layer for O-MI read requests, converting an
//! O-DF [`Hierarchy`](omistack_model::Hierarchy) from `omistack-model` into
//! a complete `omiEnvelope` document ready to hand to a transport.
//!
//! # Key components
//!
//! - [`objects_to_xml`] for rendering a hierarchy as nested `<Object>` elements
//! - [`read_request_to_xml`] for wrapping that body in the full read envelope
//!
//! # O-MI XML conventions
//!
//! - Envelope namespace: `http://www.opengroup.org/xsd/omi/1.0/`
//! - Payload namespace: `http://www.opengroup.org/xsd/odf/1.0/`
//! - Schema version 1.0, `ttl="0"` (no request expiry)
//! - Identifier text is interpolated verbatim — no escaping is applied, so
//!   callers must supply XML-safe identifiers

pub mod serialize;

pub use serialize::{ODF_NAMESPACE, OMI_NAMESPACE, objects_to_xml, read_request_to_xml};
