//! Declaration Index - name-keyed lookup tables over the declaration list.
//!
//! Builds one table per declaration kind (encounter order preserved,
//! since emit order follows declaration order) plus a global
//! name-to-declaration table used for type-reference lookup. Partials
//! and includes-edges are not indexed: they reference canonical names
//! instead of introducing their own.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;
use widlgen_ast::decl::{
    Declaration, DeclKind, DictionaryDecl, EnumDecl, InterfaceDecl, MixinDecl, NamespaceDecl,
    TypedefDecl,
};

use crate::error::{Result, WidlError};

/// Read-only lookup tables over a declaration slice.
#[derive(Debug)]
pub struct DeclarationIndex<'a> {
    pub interfaces: IndexMap<&'a str, &'a InterfaceDecl>,
    pub mixins: IndexMap<&'a str, &'a MixinDecl>,
    pub namespaces: IndexMap<&'a str, &'a NamespaceDecl>,
    pub dictionaries: IndexMap<&'a str, &'a DictionaryDecl>,
    pub enums: IndexMap<&'a str, &'a EnumDecl>,
    pub typedefs: IndexMap<&'a str, &'a TypedefDecl>,
    /// Global name table across all kinds, for type-reference lookup.
    /// On a cross-kind name collision the first declaration wins, so
    /// the binding never depends on how later entries are ordered.
    pub by_name: FxHashMap<&'a str, &'a Declaration>,
}

impl<'a> DeclarationIndex<'a> {
    /// Index every canonical (non-partial, non-includes) declaration.
    ///
    /// Fails if the same name appears twice within one kind.
    pub fn build(decls: &'a [Declaration]) -> Result<Self> {
        let mut index = DeclarationIndex {
            interfaces: IndexMap::new(),
            mixins: IndexMap::new(),
            namespaces: IndexMap::new(),
            dictionaries: IndexMap::new(),
            enums: IndexMap::new(),
            typedefs: IndexMap::new(),
            by_name: FxHashMap::default(),
        };

        for decl in decls {
            if decl.is_partial() {
                continue;
            }
            match decl {
                Declaration::Interface(d) => {
                    insert(&mut index.interfaces, DeclKind::Interface, &d.name, d)?;
                }
                Declaration::Mixin(d) => {
                    insert(&mut index.mixins, DeclKind::Mixin, &d.name, d)?;
                }
                Declaration::Namespace(d) => {
                    insert(&mut index.namespaces, DeclKind::Namespace, &d.name, d)?;
                }
                Declaration::Dictionary(d) => {
                    insert(&mut index.dictionaries, DeclKind::Dictionary, &d.name, d)?;
                }
                Declaration::Enum(d) => {
                    insert(&mut index.enums, DeclKind::Enum, &d.name, d)?;
                }
                Declaration::Typedef(d) => {
                    insert(&mut index.typedefs, DeclKind::Typedef, &d.name, d)?;
                }
                Declaration::Includes(_) => continue,
            }
            if let Some(name) = decl.name() {
                index.by_name.entry(name).or_insert(decl);
            }
        }

        debug!(
            interfaces = index.interfaces.len(),
            mixins = index.mixins.len(),
            namespaces = index.namespaces.len(),
            dictionaries = index.dictionaries.len(),
            enums = index.enums.len(),
            typedefs = index.typedefs.len(),
            "declaration index built"
        );
        Ok(index)
    }
}

fn insert<'a, T>(
    table: &mut IndexMap<&'a str, &'a T>,
    kind: DeclKind,
    name: &'a str,
    decl: &'a T,
) -> Result<()> {
    if table.insert(name, decl).is_some() {
        return Err(WidlError::DuplicateName {
            kind: kind.as_str(),
            name: name.to_string(),
        });
    }
    Ok(())
}
