//! Top-level declarations.
//!
//! The serde tag spellings follow the upstream webidl2 AST
//! (`"interface mixin"`, `"includes"`, `"enum-value"`, ...), so the
//! parser's JSON dump deserializes directly into this model.

use serde::Deserialize;

use crate::idl_type::IdlType;
use crate::member::Member;

/// A top-level declaration, tagged by the webidl2 `type` field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Declaration {
    #[serde(rename = "interface")]
    Interface(InterfaceDecl),
    #[serde(rename = "interface mixin")]
    Mixin(MixinDecl),
    #[serde(rename = "namespace")]
    Namespace(NamespaceDecl),
    #[serde(rename = "dictionary")]
    Dictionary(DictionaryDecl),
    #[serde(rename = "enum")]
    Enum(EnumDecl),
    #[serde(rename = "typedef")]
    Typedef(TypedefDecl),
    #[serde(rename = "includes")]
    Includes(IncludesEdge),
}

/// Declaration kind discriminant for index partitioning and error
/// messages. Includes-edges have no kind: they name other declarations
/// instead of introducing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Interface,
    Mixin,
    Namespace,
    Dictionary,
    Enum,
    Typedef,
}

impl DeclKind {
    /// Human-readable kind name, matching the webidl2 spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclKind::Interface => "interface",
            DeclKind::Mixin => "interface mixin",
            DeclKind::Namespace => "namespace",
            DeclKind::Dictionary => "dictionary",
            DeclKind::Enum => "enum",
            DeclKind::Typedef => "typedef",
        }
    }
}

impl Declaration {
    /// Kind discriminant, or `None` for an includes-edge.
    pub fn kind(&self) -> Option<DeclKind> {
        match self {
            Declaration::Interface(_) => Some(DeclKind::Interface),
            Declaration::Mixin(_) => Some(DeclKind::Mixin),
            Declaration::Namespace(_) => Some(DeclKind::Namespace),
            Declaration::Dictionary(_) => Some(DeclKind::Dictionary),
            Declaration::Enum(_) => Some(DeclKind::Enum),
            Declaration::Typedef(_) => Some(DeclKind::Typedef),
            Declaration::Includes(_) => None,
        }
    }

    /// Declared name, or `None` for an includes-edge (its `target` and
    /// `mixin` fields reference names declared elsewhere).
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Interface(d) => Some(&d.name),
            Declaration::Mixin(d) => Some(&d.name),
            Declaration::Namespace(d) => Some(&d.name),
            Declaration::Dictionary(d) => Some(&d.name),
            Declaration::Enum(d) => Some(&d.name),
            Declaration::Typedef(d) => Some(&d.name),
            Declaration::Includes(_) => None,
        }
    }

    /// Whether this declaration extends a canonical one of the same name.
    pub fn is_partial(&self) -> bool {
        match self {
            Declaration::Interface(d) => d.partial,
            Declaration::Mixin(d) => d.partial,
            Declaration::Namespace(d) => d.partial,
            Declaration::Dictionary(d) => d.partial,
            _ => false,
        }
    }
}

/// An extended attribute (`[Exposed=Window]` etc.). Only the name is
/// kept; argument lists are irrelevant to externs generation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExtendedAttribute {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    #[serde(default)]
    pub partial: bool,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MixinDecl {
    pub name: String,
    #[serde(default)]
    pub partial: bool,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NamespaceDecl {
    pub name: String,
    #[serde(default)]
    pub partial: bool,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// A dictionary is indexed (its name participates in duplicate
/// detection and type lookup) but never emitted: in this IDL family
/// dictionaries only appear in argument position, which externs
/// generation does not model.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DictionaryDecl {
    pub name: String,
    #[serde(default)]
    pub partial: bool,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(default)]
    pub members: Vec<DictionaryField>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DictionaryField {
    pub name: String,
    #[serde(rename = "idlType")]
    pub idl_type: IdlType,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnumDecl {
    pub name: String,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnumValue {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypedefDecl {
    pub name: String,
    #[serde(default, rename = "extAttrs")]
    pub ext_attrs: Vec<ExtendedAttribute>,
    #[serde(rename = "idlType")]
    pub idl_type: IdlType,
}

/// `Target includes Mixin;` — attaches a mixin's members to a target
/// interface or to one of the fixed external pseudo-targets.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IncludesEdge {
    pub target: String,
    #[serde(rename = "includes")]
    pub mixin: String,
}
