//! Extern Emitter - walk the merged graph and produce externs text.
//!
//! Output is a single line-oriented document for the Closure Compiler:
//! a provenance comment, then one block per external pseudo-target,
//! namespace, and interface, separated by blank lines. Every typed
//! member is an annotation comment followed by a declaration statement:
//!
//! ```text
//! /** @type {string} */
//! GPUDevice.prototype.label;
//! ```
//!
//! Ordering is a correctness requirement, not a style choice: blocks
//! follow declaration encounter order, and an interface's members are
//! emitted as owned-mixin members (includes order) followed by its own
//! members, so regenerated output is reproducible byte for byte.

use tracing::debug;
use widlgen_ast::member::Member;

use crate::error::{Result, WidlError};
use crate::merge::MergedGraph;
use crate::resolve::TypeResolver;

const PROVENANCE: &str = "// Generated by widlgen. DO NOT EDIT.";

/// The one attribute that is forced nullable regardless of its declared
/// type: `navigator.gpu` is absent on browsers without WebGPU support,
/// and consumers must null-check it. Scoped to exactly this name on
/// exactly this target.
const FORCED_NULLABLE_TARGET: &str = "Navigator";
const FORCED_NULLABLE_ATTRIBUTE: &str = "gpu";

/// Emits the externs document for a merged graph.
pub struct ExternEmitter<'a> {
    graph: &'a MergedGraph,
    resolver: TypeResolver<'a>,
    out: String,
}

impl<'a> ExternEmitter<'a> {
    pub fn new(graph: &'a MergedGraph) -> Self {
        Self {
            graph,
            resolver: TypeResolver::new(graph),
            out: String::with_capacity(4096),
        }
    }

    /// Produce the full externs document.
    ///
    /// On error the partially accumulated text is dropped with the
    /// emitter; no partial output escapes.
    pub fn emit(mut self) -> Result<String> {
        let _span = tracing::info_span!("emit_externs").entered();
        self.out.push_str(PROVENANCE);
        self.out.push('\n');

        for target in &self.graph.externals {
            if target.mixins.iter().all(|m| m.members.is_empty()) {
                continue;
            }
            self.out.push('\n');
            for mixin in &target.mixins {
                for member in &mixin.members {
                    let Member::Attribute(attr) = member else {
                        return Err(unsupported_member(
                            member,
                            format!("external target `{}` (mixin `{}`)", target.name, mixin.name),
                        ));
                    };
                    let force_nullable = target.name == FORCED_NULLABLE_TARGET
                        && attr.name == FORCED_NULLABLE_ATTRIBUTE;
                    let annotation = self.resolver.resolve(&attr.idl_type, force_nullable)?;
                    self.write_type_property(target.name, &attr.name, &annotation);
                }
            }
        }

        for namespace in &self.graph.namespaces {
            self.out.push('\n');
            self.out.push_str("/** @const */\n");
            self.out.push_str(&format!("var {} = {{}};\n", namespace.name));
            for member in &namespace.members {
                let Member::Const(constant) = member else {
                    return Err(unsupported_member(
                        member,
                        format!("namespace `{}`", namespace.name),
                    ));
                };
                let annotation = self.resolver.resolve(&constant.idl_type, false)?;
                self.out.push_str(&format!("/** @type {{{annotation}}} */\n"));
                self.out
                    .push_str(&format!("{}.{};\n", namespace.name, constant.name));
            }
        }

        for interface in &self.graph.interfaces {
            self.out.push('\n');
            self.out.push_str("/** @constructor */\n");
            self.out
                .push_str(&format!("function {}() {{}}\n", interface.name));
            let mixin_members = interface.mixins.iter().flat_map(|m| m.members.iter());
            for member in mixin_members.chain(interface.members.iter()) {
                self.write_interface_member(&interface.name, member)?;
            }
        }

        debug!(bytes = self.out.len(), "externs emitted");
        Ok(self.out)
    }

    fn write_interface_member(&mut self, owner: &str, member: &Member) -> Result<()> {
        match member {
            // Structural presence only; the IDL constructor argument
            // list is intentionally not modeled.
            Member::Constructor => Ok(()),
            Member::Attribute(attr) => {
                let annotation = self.resolver.resolve(&attr.idl_type, false)?;
                self.write_type_property(owner, &attr.name, &annotation);
                Ok(())
            }
            Member::Operation(op) => {
                let annotation = self.resolver.resolve(&op.idl_type, false)?;
                self.write_method(owner, &op.name, &annotation);
                Ok(())
            }
            Member::Setlike(setlike) => {
                if !setlike.readonly {
                    return Err(WidlError::UnsupportedMember {
                        member: "writable setlike",
                        name: "setlike".to_string(),
                        context: format!("interface `{owner}`"),
                    });
                }
                let [element] = setlike.idl_type.as_slice() else {
                    return Err(WidlError::UnimplementedGeneric(format!(
                        "setlike with {} type arguments",
                        setlike.idl_type.len()
                    )));
                };
                let element = self.resolver.resolve(element, false)?;
                let iterable = format!("!Iterable<{element}>");
                self.write_type_property(owner, "size", "number");
                self.write_method(owner, "entries", &iterable);
                self.write_method(owner, "keys", &iterable);
                self.write_method(owner, "values", &iterable);
                self.write_method(owner, "forEach", "undefined");
                self.write_method(owner, "has", "boolean");
                Ok(())
            }
            Member::Const(_) => Err(unsupported_member(member, format!("interface `{owner}`"))),
        }
    }

    fn write_type_property(&mut self, owner: &str, property: &str, annotation: &str) {
        self.out.push_str(&format!("/** @type {{{annotation}}} */\n"));
        self.out.push_str(&format!("{owner}.prototype.{property};\n"));
    }

    fn write_method(&mut self, owner: &str, method: &str, return_annotation: &str) {
        self.out
            .push_str(&format!("/** @return {{{return_annotation}}} */\n"));
        self.out
            .push_str(&format!("{owner}.prototype.{method} = function() {{}};\n"));
    }
}

fn unsupported_member(member: &Member, context: String) -> WidlError {
    let name = match member {
        Member::Attribute(a) => a.name.clone(),
        Member::Operation(o) => o.name.clone(),
        Member::Const(c) => c.name.clone(),
        Member::Constructor => "constructor".to_string(),
        Member::Setlike(_) => "setlike".to_string(),
    };
    WidlError::UnsupportedMember {
        member: member.kind_str(),
        name,
        context,
    }
}
