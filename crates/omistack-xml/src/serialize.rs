//! O-MI read-request serialization: converting an O-DF hierarchy to XML.
//!
//! The output follows the O-MI 1.0 read envelope: nested `<Object>/<id>`
//! elements inside `<Objects>`, wrapped in `<msg>`, `<read>`, and
//! `<omiEnvelope>`. Rendering is template-based and deterministic — the same
//! hierarchy always produces byte-identical output — and identifiers are
//! interpolated verbatim, without escaping.
//!
//! Nested `<Object>` blocks are inlined into their parent right after the
//! `</id>` tag, keeping each block's own indentation; the whitespace is
//! cosmetic as far as the protocol is concerned.

use omistack_model::{Hierarchy, Newest};

/// The O-MI envelope namespace.
pub const OMI_NAMESPACE: &str = "http://www.opengroup.org/xsd/omi/1.0/";

/// The O-DF payload namespace.
pub const ODF_NAMESPACE: &str = "http://www.opengroup.org/xsd/odf/1.0/";

/// Render a hierarchy as a sequence of sibling `<Object>` elements.
///
/// Mapping entries recurse into their children; leaf-list entries are
/// terminal. Entries are emitted in insertion order with no separator, and
/// an empty node renders as the empty string. This is the body that
/// [`read_request_to_xml`] places inside `<Objects>`; it is exposed
/// separately for callers assembling their own envelope.
#[must_use]
pub fn objects_to_xml(hierarchy: &Hierarchy) -> String {
    let mut xml = String::new();
    match hierarchy {
        Hierarchy::Mapping(entries) => {
            for (id, child) in entries {
                let children = objects_to_xml(child);
                xml.push_str(&object_fragment(id, &children));
            }
        }
        Hierarchy::List(ids) => {
            for id in ids {
                xml.push_str(&object_fragment(id, ""));
            }
        }
    }
    xml
}

/// Render a complete O-MI read request for the given hierarchy.
///
/// The document is the fixed `omiEnvelope` template with `version="1.0"`
/// and `ttl="0"`, a `<read msgformat="odf">` operation, and the hierarchy
/// body inside `<Objects>`. When `newest` is present it is rendered as a
/// `newest="..."` attribute on the `<read>` element, value verbatim; when
/// absent the attribute is omitted entirely.
#[must_use]
pub fn read_request_to_xml(hierarchy: &Hierarchy, newest: Option<&Newest>) -> String {
    let newest_attr = match newest {
        Some(value) => format!(" newest=\"{value}\""),
        None => String::new(),
    };
    let body = objects_to_xml(hierarchy);
    let document = format!(
        r#"<omiEnvelope xmlns="{omi}" version="1.0" ttl="0">
    <read msgformat="odf"{newest_attr}>
        <msg>
            <Objects xmlns="{odf}">
                {body}
            </Objects>
        </msg>
    </read>
</omiEnvelope>"#,
        omi = OMI_NAMESPACE,
        odf = ODF_NAMESPACE,
    );
    tracing::debug!(
        bytes = document.len(),
        newest = newest.is_some(),
        "rendered O-MI read request"
    );
    document
}

/// Render one `<Object>` block.
///
/// This is the only place identifier text reaches the output, so an
/// escaping policy would slot in here without touching the traversal.
fn object_fragment(id: &str, children: &str) -> String {
    format!("<Object>\n    <id>{id}</id>{children}\n</Object>")
}
