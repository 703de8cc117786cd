//! Boundary with the upstream WebIDL parser.
//!
//! The upstream parser (webidl2) validates the IDL grammar and dumps
//! its AST as JSON; this loader deserializes that dump into the crate's
//! declaration model. A top-level `type` tag outside the supported
//! declaration set fails here, before the engine ever runs.

use crate::decl::Declaration;

/// Deserialize a webidl2 JSON dump into the ordered declaration list.
///
/// Source order is preserved: the merge passes downstream depend on
/// encounter order for partials and includes.
pub fn from_json(json: &str) -> serde_json::Result<Vec<Declaration>> {
    serde_json::from_str(json)
}
