//! Merge Engine - folds partials and includes into a merged graph.
//!
//! Two order-dependent passes over the source declaration list:
//!
//! 1. Include folding: every `Target includes Mixin;` edge attaches the
//!    mixin to its target interface, or to the side table of one of the
//!    fixed external pseudo-targets (`Navigator`, `WorkerNavigator`) —
//!    objects that receive injected members without being modeled as
//!    first-class interfaces.
//! 2. Partial folding: every `partial interface` / `partial interface
//!    mixin` appends its extended attributes and members onto the
//!    canonical declaration of the same name.
//!
//! The result is a new immutable [`MergedGraph`] built by copy-and-append;
//! the input declarations are never mutated. Appends happen in source
//! encounter order, which downstream emission depends on.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;
use widlgen_ast::decl::{Declaration, DeclKind, ExtendedAttribute, MixinDecl};
use widlgen_ast::idl_type::IdlType;
use widlgen_ast::member::Member;

use crate::error::{Result, WidlError};
use crate::index::DeclarationIndex;

/// The fixed external pseudo-targets an includes-edge may name without
/// a corresponding interface declaration.
pub const EXTERNAL_TARGETS: [&str; 2] = ["Navigator", "WorkerNavigator"];

/// The immutable output of the merge step. Read-only for the rest of
/// the run; the resolver and emitter only ever borrow it.
#[derive(Debug)]
pub struct MergedGraph {
    /// External pseudo-targets with their included mixins, in the fixed
    /// [`EXTERNAL_TARGETS`] order. A target with no includes stays
    /// empty and produces no output.
    pub externals: Vec<ExternalTarget>,
    /// Namespaces in declaration encounter order.
    pub namespaces: Vec<MergedNamespace>,
    /// Interfaces in declaration encounter order, partials folded in
    /// and owned mixins attached.
    pub interfaces: Vec<MergedInterface>,
    /// Global name table for type-reference lookup.
    types: FxHashMap<String, TypeBinding>,
}

impl MergedGraph {
    /// Look up what a type name refers to, if it is declared at all.
    pub fn binding(&self, name: &str) -> Option<&TypeBinding> {
        self.types.get(name)
    }
}

/// What a declared name means when reached from type position.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeBinding {
    Interface,
    Enum,
    Typedef(IdlType),
    Dictionary,
    Namespace,
    Mixin,
}

/// One of the fixed pseudo-targets with its attached mixins.
#[derive(Debug)]
pub struct ExternalTarget {
    pub name: &'static str,
    pub mixins: Vec<OwnedMixin>,
}

/// A mixin as attached to its owner: canonical members plus any
/// partial-mixin members, in encounter order.
#[derive(Debug)]
pub struct OwnedMixin {
    pub name: String,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub members: Vec<Member>,
}

#[derive(Debug)]
pub struct MergedNamespace {
    pub name: String,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub members: Vec<Member>,
}

/// An interface with its owned mixins (includes-encounter order) and
/// its own members (canonical first, then partials in encounter order).
#[derive(Debug)]
pub struct MergedInterface {
    pub name: String,
    pub ext_attrs: Vec<ExtendedAttribute>,
    pub mixins: Vec<OwnedMixin>,
    pub members: Vec<Member>,
}

/// Per-name accumulator for partial-declaration content.
#[derive(Default)]
struct PartialExtras {
    ext_attrs: Vec<ExtendedAttribute>,
    members: Vec<Member>,
}

/// Fold includes-edges and partials over the indexed declarations into
/// a new merged graph.
pub fn merge(decls: &[Declaration], index: &DeclarationIndex<'_>) -> Result<MergedGraph> {
    let _span = tracing::info_span!("merge_declarations").entered();

    // Pass 1: include folding. Mixin names are collected per owner so
    // the later assembly can copy post-partial-fold member lists.
    let mut external_mixins: IndexMap<&'static str, Vec<&str>> =
        EXTERNAL_TARGETS.iter().map(|t| (*t, Vec::new())).collect();
    let mut owned_mixins: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for decl in decls {
        let Declaration::Includes(edge) = decl else {
            continue;
        };
        if !index.mixins.contains_key(edge.mixin.as_str()) {
            return Err(WidlError::UnknownMixin(edge.mixin.clone()));
        }
        if let Some(slot) = external_mixins.get_mut(edge.target.as_str()) {
            slot.push(&edge.mixin);
        } else if index.interfaces.contains_key(edge.target.as_str()) {
            owned_mixins
                .entry(edge.target.as_str())
                .or_default()
                .push(&edge.mixin);
        } else {
            return Err(WidlError::UnknownIncludeTarget(edge.target.clone()));
        }
    }

    // Pass 2: partial folding. Only interfaces and interface mixins may
    // be partial; each partial's canonical declaration must exist.
    let mut extras: FxHashMap<(DeclKind, &str), PartialExtras> = FxHashMap::default();
    for decl in decls {
        if !decl.is_partial() {
            continue;
        }
        match decl {
            Declaration::Interface(d) => {
                if !index.interfaces.contains_key(d.name.as_str()) {
                    return Err(missing_canonical(DeclKind::Interface, &d.name));
                }
                let entry = extras.entry((DeclKind::Interface, d.name.as_str())).or_default();
                entry.ext_attrs.extend(d.ext_attrs.iter().cloned());
                entry.members.extend(d.members.iter().cloned());
            }
            Declaration::Mixin(d) => {
                if !index.mixins.contains_key(d.name.as_str()) {
                    return Err(missing_canonical(DeclKind::Mixin, &d.name));
                }
                let entry = extras.entry((DeclKind::Mixin, d.name.as_str())).or_default();
                entry.ext_attrs.extend(d.ext_attrs.iter().cloned());
                entry.members.extend(d.members.iter().cloned());
            }
            Declaration::Namespace(d) => {
                return Err(unsupported_partial(DeclKind::Namespace, &d.name));
            }
            Declaration::Dictionary(d) => {
                return Err(unsupported_partial(DeclKind::Dictionary, &d.name));
            }
            // Enums, typedefs, and includes-edges carry no partial flag.
            _ => unreachable!("is_partial is false for this declaration kind"),
        }
    }

    // Assembly: copy-and-append into owned merged records.
    let fold_mixin = |name: &str| -> OwnedMixin {
        let base: &MixinDecl = index.mixins[name];
        let mut ext_attrs = base.ext_attrs.clone();
        let mut members = base.members.clone();
        if let Some(extra) = extras.get(&(DeclKind::Mixin, name)) {
            ext_attrs.extend(extra.ext_attrs.iter().cloned());
            members.extend(extra.members.iter().cloned());
        }
        OwnedMixin {
            name: name.to_string(),
            ext_attrs,
            members,
        }
    };

    let externals = external_mixins
        .into_iter()
        .map(|(target, mixins)| ExternalTarget {
            name: target,
            mixins: mixins.into_iter().map(fold_mixin).collect(),
        })
        .collect();

    let namespaces = index
        .namespaces
        .values()
        .map(|d| MergedNamespace {
            name: d.name.clone(),
            ext_attrs: d.ext_attrs.clone(),
            members: d.members.clone(),
        })
        .collect();

    let interfaces: Vec<MergedInterface> = index
        .interfaces
        .iter()
        .map(|(name, d)| {
            let mut ext_attrs = d.ext_attrs.clone();
            let mut members = d.members.clone();
            if let Some(extra) = extras.get(&(DeclKind::Interface, *name)) {
                ext_attrs.extend(extra.ext_attrs.iter().cloned());
                members.extend(extra.members.iter().cloned());
            }
            MergedInterface {
                name: name.to_string(),
                ext_attrs,
                mixins: owned_mixins
                    .get(name)
                    .map(|mixins| mixins.iter().map(|m| fold_mixin(m)).collect())
                    .unwrap_or_default(),
                members,
            }
        })
        .collect();

    let mut types = FxHashMap::default();
    for (name, decl) in &index.by_name {
        let binding = match decl {
            Declaration::Interface(_) => TypeBinding::Interface,
            Declaration::Mixin(_) => TypeBinding::Mixin,
            Declaration::Namespace(_) => TypeBinding::Namespace,
            Declaration::Dictionary(_) => TypeBinding::Dictionary,
            Declaration::Enum(_) => TypeBinding::Enum,
            Declaration::Typedef(d) => TypeBinding::Typedef(d.idl_type.clone()),
            Declaration::Includes(_) => continue,
        };
        types.insert(name.to_string(), binding);
    }

    let graph = MergedGraph {
        externals,
        namespaces,
        interfaces,
        types,
    };
    debug!(
        interfaces = graph.interfaces.len(),
        namespaces = graph.namespaces.len(),
        types = graph.types.len(),
        "declaration graph merged"
    );
    Ok(graph)
}

fn missing_canonical(kind: DeclKind, name: &str) -> WidlError {
    WidlError::MissingCanonical {
        kind: kind.as_str(),
        name: name.to_string(),
    }
}

fn unsupported_partial(kind: DeclKind, name: &str) -> WidlError {
    WidlError::UnsupportedPartialKind {
        kind: kind.as_str(),
        name: name.to_string(),
    }
}
