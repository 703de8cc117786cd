//! Fatal pipeline errors.
//!
//! Every invariant violation aborts the whole run; no error here is
//! recoverable, and output accumulated before a failure must be
//! discarded by the caller.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, WidlError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidlError {
    /// Two non-partial declarations of one kind share a name.
    #[error("duplicate {kind} declaration `{name}`")]
    DuplicateName { kind: &'static str, name: String },

    /// An includes-edge names a mixin that was never declared.
    #[error("includes statement references unknown mixin `{0}`")]
    UnknownMixin(String),

    /// An includes-edge targets a name that is neither a declared
    /// interface nor one of the external pseudo-targets.
    #[error("includes statement targets unknown interface `{0}`")]
    UnknownIncludeTarget(String),

    /// A partial declaration has no canonical declaration to extend.
    #[error("partial {kind} `{name}` has no non-partial declaration to extend")]
    MissingCanonical { kind: &'static str, name: String },

    /// A declaration kind outside {interface, interface mixin} was
    /// marked partial.
    #[error("partial {kind} declarations are not supported (`{name}`)")]
    UnsupportedPartialKind { kind: &'static str, name: String },

    /// A type name resolves to neither a declaration nor a recognized
    /// builtin primitive.
    #[error("unknown builtin type `{0}`")]
    UnknownBuiltin(String),

    /// Nullability on builtins, unions, and typedefs is a documented
    /// unsupported input, not a policy with invented semantics.
    #[error("nullable {0} types are not supported")]
    UnsupportedNullable(&'static str),

    /// A generic container outside {sequence, Promise}, or one with a
    /// type-argument count other than one.
    #[error("unsupported generic type `{0}`")]
    UnimplementedGeneric(String),

    /// A declaration kind that cannot be rendered as an annotation was
    /// reached in type position (dictionary, namespace, mixin).
    #[error("{kind} `{name}` cannot appear in type position")]
    UnimplementedTypeRole { kind: &'static str, name: String },

    /// A typedef chain loops back on itself.
    #[error("typedef cycle detected while resolving `{0}`")]
    CyclicType(String),

    /// A member kind that is not supported in its context (operation
    /// on a namespace, writable setlike, non-attribute on an external
    /// pseudo-target, ...).
    #[error("unsupported {member} member `{name}` on {context}")]
    UnsupportedMember {
        member: &'static str,
        name: String,
        context: String,
    },
}
