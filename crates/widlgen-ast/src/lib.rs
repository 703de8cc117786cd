//! WebIDL declaration data model for the widlgen externs generator.
//!
//! This crate defines the declaration shapes the engine consumes:
//! - Top-level declarations (`Declaration` and its payload structs)
//! - Interface/mixin/namespace members (`Member`)
//! - Type expressions (`IdlType`, `TypeNode`, `GenericKind`)
//! - The loader for the upstream parser's JSON output (`loader`)
//!
//! The model is deliberately narrow: it covers exactly the declaration
//! shapes used by the WebGPU family of IDL files, not general WebIDL.
//! Every "kind" tag is a closed enum, so an input outside the supported
//! shape set is rejected when the JSON is deserialized rather than deep
//! inside the pipeline.

pub mod decl;
pub mod idl_type;
pub mod loader;
pub mod member;

pub use decl::{
    Declaration, DeclKind, DictionaryDecl, EnumDecl, ExtendedAttribute, IncludesEdge,
    InterfaceDecl, MixinDecl, NamespaceDecl, TypedefDecl,
};
pub use idl_type::{GenericKind, IdlType, TypeArgs, TypeNode};
pub use member::{
    AttributeMember, ConstMember, Member, OperationMember, SetlikeMember,
};
