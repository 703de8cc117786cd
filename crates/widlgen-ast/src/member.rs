//! Interface, mixin, and namespace members.

use serde::Deserialize;

use crate::idl_type::IdlType;

/// A member of an interface, mixin, or namespace, tagged by the
/// webidl2 `type` field. Which member kinds are legal where is a
/// property of the emit phase, not of the data model: webidl2 accepts
/// a `const` inside an interface just as it does inside a namespace.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Member {
    #[serde(rename = "attribute")]
    Attribute(AttributeMember),
    #[serde(rename = "operation")]
    Operation(OperationMember),
    #[serde(rename = "constructor")]
    Constructor,
    #[serde(rename = "const")]
    Const(ConstMember),
    #[serde(rename = "setlike")]
    Setlike(SetlikeMember),
}

impl Member {
    /// Member kind name for error messages.
    pub const fn kind_str(&self) -> &'static str {
        match self {
            Member::Attribute(_) => "attribute",
            Member::Operation(_) => "operation",
            Member::Constructor => "constructor",
            Member::Const(_) => "const",
            Member::Setlike(_) => "setlike",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AttributeMember {
    pub name: String,
    #[serde(default)]
    pub readonly: bool,
    #[serde(rename = "idlType")]
    pub idl_type: IdlType,
}

/// An operation. Its `idl_type` is the return type; argument lists are
/// intentionally not modeled (externs declare zero-argument methods).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OperationMember {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: IdlType,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConstMember {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: IdlType,
}

/// `setlike<T>` — webidl2 encodes the element type as a one-element
/// `idlType` array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SetlikeMember {
    #[serde(default)]
    pub readonly: bool,
    #[serde(rename = "idlType")]
    pub idl_type: Vec<IdlType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_str_names() {
        assert_eq!(Member::Constructor.kind_str(), "constructor");
        let setlike = Member::Setlike(SetlikeMember {
            readonly: true,
            idl_type: vec![IdlType::Name("DOMString".to_string())],
        });
        assert_eq!(setlike.kind_str(), "setlike");
    }
}
