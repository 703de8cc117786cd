//! Type expressions.
//!
//! A type position in webidl2's AST is either a bare name string (the
//! nested `idlType` of a simple type) or a node carrying nullability,
//! union, and generic structure. Both shapes appear in the same field,
//! so `IdlType` deserializes untagged.

use serde::{Deserialize, Deserializer};

/// A type expression: a bare name referencing a declaration or builtin
/// primitive, or a composite node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdlType {
    Name(String),
    Node(Box<TypeNode>),
}

/// Composite type node. When `union` is set, `idl_type` holds the
/// union's member types; when `generic` is non-empty, it holds the
/// generic's type arguments; otherwise it holds the single wrapped
/// type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypeNode {
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub union: bool,
    #[serde(default)]
    pub generic: GenericKind,
    #[serde(rename = "idlType")]
    pub idl_type: TypeArgs,
}

/// The nested type(s) of a `TypeNode`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypeArgs {
    One(IdlType),
    Many(Vec<IdlType>),
}

impl TypeArgs {
    /// View the nested types uniformly as a slice.
    pub fn as_slice(&self) -> &[IdlType] {
        match self {
            TypeArgs::One(ty) => std::slice::from_ref(ty),
            TypeArgs::Many(list) => list,
        }
    }

    /// The single nested type, if there is exactly one.
    pub fn single(&self) -> Option<&IdlType> {
        match self.as_slice() {
            [ty] => Some(ty),
            _ => None,
        }
    }
}

/// Generic container shape. webidl2 reports this as a string; only
/// `sequence` and `Promise` are supported downstream, and `Other`
/// keeps the offending tag so the resolver can name it when it fails.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GenericKind {
    #[default]
    None,
    Sequence,
    Promise,
    Other(String),
}

impl<'de> Deserialize<'de> for GenericKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "" => GenericKind::None,
            "sequence" => GenericKind::Sequence,
            "Promise" => GenericKind::Promise,
            _ => GenericKind::Other(tag),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_deserializes_untagged() {
        let ty: IdlType = serde_json::from_str(r#""DOMString""#).unwrap();
        assert_eq!(ty, IdlType::Name("DOMString".to_string()));
    }

    #[test]
    fn simple_node() {
        let ty: IdlType = serde_json::from_str(
            r#"{"type": "attribute-type", "generic": "", "nullable": false,
                "union": false, "idlType": "boolean"}"#,
        )
        .unwrap();
        let IdlType::Node(node) = ty else {
            panic!("expected a composite node");
        };
        assert!(!node.nullable);
        assert_eq!(node.generic, GenericKind::None);
        assert_eq!(
            node.idl_type.single(),
            Some(&IdlType::Name("boolean".to_string()))
        );
    }

    #[test]
    fn union_node_has_many_members() {
        let ty: IdlType = serde_json::from_str(
            r#"{"generic": "", "nullable": false, "union": true,
                "idlType": [
                  {"generic": "", "nullable": false, "union": false, "idlType": "GPUBuffer"},
                  {"generic": "", "nullable": false, "union": false, "idlType": "GPUTexture"}
                ]}"#,
        )
        .unwrap();
        let IdlType::Node(node) = ty else {
            panic!("expected a composite node");
        };
        assert!(node.union);
        assert_eq!(node.idl_type.as_slice().len(), 2);
        assert_eq!(node.idl_type.single(), None);
    }

    #[test]
    fn unknown_generic_tag_is_preserved() {
        let ty: IdlType = serde_json::from_str(
            r#"{"generic": "FrozenArray", "nullable": false, "union": false,
                "idlType": ["unsigned long"]}"#,
        )
        .unwrap();
        let IdlType::Node(node) = ty else {
            panic!("expected a composite node");
        };
        assert_eq!(node.generic, GenericKind::Other("FrozenArray".to_string()));
    }
}
