//! Type Resolver - convert a type expression to a Closure annotation.
//!
//! This module handles type reification: converting an [`IdlType`] from
//! the merged declaration graph into the Closure Compiler's annotation
//! syntax (`string`, `!GPUDevice`, `?Array<!GPUBindGroupLayout>`, ...).
//!
//! Resolution is a pure structural recursion over the read-only graph.
//! Bare names that are not declared anywhere dispatch to a fixed
//! builtin-primitive table. Typedefs are transparent; a visiting stack
//! guards against typedef chains that loop back on themselves.
//!
//! Nullability on builtins, unions, and typedefs is rejected rather
//! than given invented semantics: no builtin annotation has a spot for
//! a `?` prefix, and the IDL family this tool targets never produces
//! those combinations.

use widlgen_ast::idl_type::{GenericKind, IdlType};

use crate::error::{Result, WidlError};
use crate::merge::{MergedGraph, TypeBinding};

/// Resolves type expressions against a merged graph.
///
/// # Examples
///
/// ```
/// # use widlgen_core::{DeclarationIndex, TypeResolver, merge::merge};
/// # use widlgen_ast::idl_type::IdlType;
/// let decls: Vec<widlgen_ast::Declaration> = Vec::new();
/// let index = DeclarationIndex::build(&decls).unwrap();
/// let graph = merge(&decls, &index).unwrap();
/// let resolver = TypeResolver::new(&graph);
/// let ty = IdlType::Name("DOMString".to_string());
/// assert_eq!(resolver.resolve(&ty, false).unwrap(), "string");
/// ```
pub struct TypeResolver<'a> {
    graph: &'a MergedGraph,
}

impl<'a> TypeResolver<'a> {
    pub fn new(graph: &'a MergedGraph) -> Self {
        Self { graph }
    }

    /// Resolve a type expression to its annotation string.
    ///
    /// `outer_nullable` requests nullability from the surrounding
    /// context (the forced-nullable carve-out in the emitter); it ORs
    /// into the expression's own `nullable` flag.
    pub fn resolve(&self, ty: &IdlType, outer_nullable: bool) -> Result<String> {
        let mut visiting = Vec::new();
        self.resolve_inner(ty, outer_nullable, &mut visiting)
    }

    fn resolve_inner(
        &self,
        ty: &IdlType,
        nullable: bool,
        visiting: &mut Vec<String>,
    ) -> Result<String> {
        let node = match ty {
            IdlType::Name(name) => return self.resolve_name(name, nullable, visiting),
            IdlType::Node(node) => node,
        };

        if node.union {
            // No spot for a `?` prefix on a bare `A|B` annotation.
            if node.nullable || nullable {
                return Err(WidlError::UnsupportedNullable("union"));
            }
            let members = node
                .idl_type
                .as_slice()
                .iter()
                .map(|member| self.resolve_inner(member, false, visiting))
                .collect::<Result<Vec<_>>>()?;
            return Ok(members.join("|"));
        }

        let nullable = node.nullable || nullable;
        match &node.generic {
            GenericKind::None => {
                let inner = node
                    .idl_type
                    .single()
                    .ok_or_else(|| WidlError::UnimplementedGeneric("<non-generic>".to_string()))?;
                self.resolve_inner(inner, nullable, visiting)
            }
            GenericKind::Sequence => {
                let element = self.resolve_argument(node.idl_type.as_slice(), "sequence", visiting)?;
                Ok(format!("{}Array<{element}>", prefix(nullable)))
            }
            GenericKind::Promise => {
                let element = self.resolve_argument(node.idl_type.as_slice(), "Promise", visiting)?;
                Ok(format!("{}Promise<{element}>", prefix(nullable)))
            }
            GenericKind::Other(tag) => Err(WidlError::UnimplementedGeneric(tag.clone())),
        }
    }

    /// Resolve the single type argument of a generic container.
    fn resolve_argument(
        &self,
        args: &[IdlType],
        container: &str,
        visiting: &mut Vec<String>,
    ) -> Result<String> {
        let [arg] = args else {
            return Err(WidlError::UnimplementedGeneric(format!(
                "{container} with {} type arguments",
                args.len()
            )));
        };
        self.resolve_inner(arg, false, visiting)
    }

    fn resolve_name(
        &self,
        name: &str,
        nullable: bool,
        visiting: &mut Vec<String>,
    ) -> Result<String> {
        let Some(binding) = self.graph.binding(name) else {
            return resolve_builtin(name, nullable);
        };
        match binding {
            TypeBinding::Typedef(underlying) => {
                if nullable {
                    return Err(WidlError::UnsupportedNullable("typedef"));
                }
                if visiting.iter().any(|n| n == name) {
                    return Err(WidlError::CyclicType(name.to_string()));
                }
                visiting.push(name.to_string());
                let resolved = self.resolve_inner(underlying, false, visiting);
                visiting.pop();
                resolved
            }
            TypeBinding::Interface => Ok(format!("{}{name}", prefix(nullable))),
            // Enum values are strings on the wire; the annotation is the
            // plain string primitive.
            TypeBinding::Enum => Ok("string".to_string()),
            TypeBinding::Dictionary => Err(type_role(name, "dictionary")),
            TypeBinding::Namespace => Err(type_role(name, "namespace")),
            TypeBinding::Mixin => Err(type_role(name, "interface mixin")),
        }
    }
}

const fn prefix(nullable: bool) -> &'static str {
    if nullable { "?" } else { "!" }
}

fn type_role(name: &str, kind: &'static str) -> WidlError {
    WidlError::UnimplementedTypeRole {
        kind,
        name: name.to_string(),
    }
}

/// Fixed builtin-primitive table for names with no declaration.
fn resolve_builtin(name: &str, nullable: bool) -> Result<String> {
    if nullable {
        return Err(WidlError::UnsupportedNullable("builtin"));
    }
    let annotation = match name {
        "boolean" => "boolean",
        "byte" | "octet" | "short" | "unsigned short" | "long" | "unsigned long"
        | "long long" | "unsigned long long" | "float" | "unrestricted float" | "double"
        | "unrestricted double" => "number",
        "DOMString" | "USVString" | "ByteString" => "string",
        "undefined" => "undefined",
        "object" => "!Object",
        // Host object types defined outside this IDL; referenced by
        // name, always non-null.
        "ArrayBuffer" | "SharedArrayBuffer" | "ArrayBufferView" | "Uint32Array"
        | "ImageBitmap" | "ImageData" | "HTMLImageElement" | "HTMLVideoElement"
        | "HTMLCanvasElement" | "OffscreenCanvas" | "VideoFrame" | "EventTarget" | "Event"
        | "DOMException" | "AbortSignal" => {
            return Ok(format!("!{name}"));
        }
        "EventHandler" => "?function(!Event)",
        _ => return Err(WidlError::UnknownBuiltin(name.to_string())),
    };
    Ok(annotation.to_string())
}
