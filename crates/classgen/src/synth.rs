//! Method Synthesizer (spec §4.6): turns a class's surviving methods into
//! dispatcher functions, per-name method tables, and master dispatchers.
//!
//! Grounded on `vtkWrapPython_GenerateMethods`
//! (original_source/Wrapping/vtkWrapPython.c): filter to wrappable
//! signatures, prune dominated overloads, then emit one dispatcher per
//! survivor plus a method table and master dispatcher whenever a name
//! keeps more than one signature (or is a constructor set). The state
//! machine in spec §4.6 (`Unvisited`/`Skipped`/`Emitted`) is made
//! explicit here as [`MethodState`] rather than left as the original's
//! implicit control flow.

use classgen_model::{Argument, BaseKind, Indirection, MethodDescription};

use crate::abi;
use crate::diagnostics::{SkipReason, SkippedMethod};
use crate::emit::{Slot, emit_arg_check_descriptor, emit_parse_format, emit_return_marshal, emit_temp_variable};
use crate::prune::prune_overloads;
use crate::target::TargetProfile;
use crate::wrap::{is_wrappable, rejection_rule};

/// Outcome of running one method through the synthesizer's state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
enum MethodState {
    Unvisited,
    Skipped(SkipReason),
    Emitted,
}

/// One generated dispatcher function for a single surviving overload.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    /// `dispatch_<Class>_<name>` or `dispatch_<Class>_<name>_s<N>` when
    /// the name keeps more than one surviving signature.
    pub function_name: String,
    pub descriptor: String,
    pub source: String,
    pub is_legacy: bool,
}

/// Everything synthesized for one surviving method name.
#[derive(Clone, Debug)]
pub struct NameGroup {
    pub name: String,
    pub dispatchers: Vec<Dispatcher>,
    /// `Some` iff more than one signature survived, or a constructor set
    /// was requested (spec §4.6.2: "only when the name has more than one
    /// surviving signature or when emitting constructors").
    pub method_table: Option<String>,
    /// `Some` iff `method_table` is (spec §4.6.3: multi-signature only).
    pub master_dispatcher: Option<String>,
    /// Aggregated signature text: the survivor's own signature, plus one
    /// line per sibling it dominated (spec §4.6, post-pass bookkeeping).
    pub docstring_signatures: Vec<String>,
    /// AND of every surviving signature's `is_legacy` (spec §4.6).
    pub is_legacy: bool,
}

fn is_destructor(m: &MethodDescription) -> bool {
    m.signature.split('(').next().is_some_and(|head| head.contains('~'))
}

/// Synthesize every method name for one pass over `methods` (either the
/// ordinary-method pass or the constructor pass — spec §4.7 runs the
/// synthesizer once per class for instance methods, and the class
/// assembler separately collects constructors for value-kind classes).
///
/// `methods` is mutated in place: the wrappability filter and overload
/// pruner both tombstone rejected/dominated entries by clearing `name`.
pub fn synthesize_pass(
    class_name: &str,
    is_object_kind: bool,
    want_constructors: bool,
    methods: &mut [MethodDescription],
    profile: &TargetProfile,
) -> (Vec<NameGroup>, Vec<SkippedMethod>) {
    let n = methods.len();
    let original_names: Vec<Option<String>> = methods.iter().map(|m| m.name.clone()).collect();
    let mut skipped = Vec::new();
    let mut state = vec![MethodState::Unvisited; n];

    // Stage filter: constructors and destructors partition into disjoint
    // passes; everything else is eligible for both only in the sense that
    // a non-constructor pass should never see a constructor survive.
    let mut eligible = vec![false; n];
    for i in 0..n {
        if is_destructor(&methods[i]) {
            continue;
        }
        let is_ctor = methods[i].is_constructor(class_name);
        eligible[i] = is_ctor == want_constructors;
    }

    // Wrappability filter: ineligible-for-this-pass and unwrappable
    // methods are blanked out of `name` so the pruner's name-equality
    // comparisons never consider them; ineligible names are restored
    // afterward (they belong to the other pass), unwrappable ones stay
    // tombstoned for good.
    for i in 0..n {
        if !eligible[i] {
            methods[i].name = None;
            continue;
        }
        if methods[i].is_legacy && profile.legacy_removed {
            state[i] = MethodState::Skipped(SkipReason::LegacyRemoved);
            if let Some(name) = &original_names[i] {
                skipped.push(SkippedMethod {
                    name: name.clone(),
                    reason: SkipReason::LegacyRemoved,
                });
            }
            methods[i].name = None;
            continue;
        }
        if let Some(rule) = rejection_rule(&methods[i]) {
            state[i] = MethodState::Skipped(SkipReason::Unwrappable { rule });
            if let Some(name) = &original_names[i] {
                skipped.push(SkippedMethod {
                    name: name.clone(),
                    reason: SkipReason::Unwrappable { rule },
                });
            }
            methods[i].name = None;
        }
    }

    let dominated_by = prune_overloads(methods);

    for i in 0..n {
        if eligible[i] && state[i] == MethodState::Unvisited {
            if methods[i].name.is_none() {
                state[i] = MethodState::Skipped(SkipReason::Dominated);
                if let Some(name) = &original_names[i] {
                    skipped.push(SkippedMethod {
                        name: name.clone(),
                        reason: SkipReason::Dominated,
                    });
                }
            } else {
                state[i] = MethodState::Emitted;
            }
        }
    }

    // Append each dominated sibling's signature text to its survivor for
    // docstring aggregation, before grouping (spec §4.6 post-pass step).
    for (loser, winner) in dominated_by.iter().enumerate() {
        if let Some(winner) = winner {
            let extra = methods[loser].signature.clone();
            methods[*winner].append_signature(&extra);
        }
    }

    // Restore ineligible methods' names; they weren't processed by this
    // pass and must remain intact for whichever pass does handle them.
    for i in 0..n {
        if !eligible[i] {
            methods[i].name = original_names[i].clone();
        }
    }

    // Group surviving indices by first-occurrence order of their name.
    let mut groups: Vec<NameGroup> = Vec::new();
    let mut group_index_of: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    let mut members: Vec<Vec<usize>> = Vec::new();

    for i in 0..n {
        if state[i] != MethodState::Emitted {
            continue;
        }
        let name = methods[i].name.clone().expect("emitted state implies a surviving name");
        let group_idx = *group_index_of.entry(name.clone()).or_insert_with(|| {
            members.push(Vec::new());
            members.len() - 1
        });
        members[group_idx].push(i);
        if groups.len() <= group_idx {
            groups.push(NameGroup {
                name,
                dispatchers: Vec::new(),
                method_table: None,
                master_dispatcher: None,
                docstring_signatures: Vec::new(),
                is_legacy: true,
            });
        }
    }

    for (group_idx, indices) in members.into_iter().enumerate() {
        let group = &mut groups[group_idx];
        let multi = indices.len() > 1;
        for (slot, &i) in indices.iter().enumerate() {
            let m = &methods[i];
            group.is_legacy &= m.is_legacy;
            group.docstring_signatures.push(m.signature.clone());

            let suffix = if multi { format!("_s{slot}") } else { String::new() };
            let function_name = format!("dispatch_{class_name}_{}{suffix}", group.name);
            let is_instance = !m.is_static() && is_object_kind && !m.is_constructor(class_name);
            let descriptor = emit_arg_check_descriptor(m, is_instance, profile);
            let source = emit_dispatcher_body(class_name, is_object_kind, &function_name, m, profile);

            group.dispatchers.push(Dispatcher {
                function_name,
                descriptor,
                source,
                is_legacy: m.is_legacy,
            });
        }

        if multi || want_constructors {
            group.method_table = Some(emit_method_table(class_name, &group.name, &group.dispatchers));
        }
        if multi {
            group.master_dispatcher = Some(emit_master_dispatcher(class_name, &group.name));
        }
    }

    (groups, skipped)
}

/// Emit the `(descriptor, dispatcher)*` table for one surviving name.
fn emit_method_table(class_name: &str, name: &str, dispatchers: &[Dispatcher]) -> String {
    let mut out = format!("static {entry} {class_name}_{name}_methods[] = {{\n", entry = abi::METHOD_TABLE_ENTRY_TYPE);
    for d in dispatchers {
        out.push_str(&format!("  {{ \"{}\", {} }},\n", d.descriptor, d.function_name));
    }
    out.push_str("  { NULL, NULL }\n};\n");
    out
}

/// Emit the thin master dispatcher that hands `(self, args)` plus the
/// per-name table to the runtime's overloaded-dispatch helper.
fn emit_master_dispatcher(class_name: &str, name: &str) -> String {
    format!(
        "static {sig_ty} dispatch_{class_name}_{name}(RtObject *self, RtObject *args)\n{{\n  return {call}(self, args, {class_name}_{name}_methods);\n}}\n",
        sig_ty = "RtObject *",
        call = abi::CALL_OVERLOADED_METHOD,
    )
}

/// Emit the complete body of one overload's dispatcher function
/// (spec §4.6, state `EMIT_OVERLOAD`).
fn emit_dispatcher_body(
    class_name: &str,
    is_object_kind: bool,
    function_name: &str,
    m: &MethodDescription,
    profile: &TargetProfile,
) -> String {
    let is_static = m.is_static();
    let is_ctor = m.is_constructor(class_name);
    let is_instance = !is_static && is_object_kind && !is_ctor;
    let has_receiver = !is_static && !is_ctor;
    let has_owning_handle_args = m.arguments.iter().any(|a| a.type_tag.is_object_ref() || a.type_tag.is_object_value());
    let needs_cleanup = has_owning_handle_args;

    let mut out = String::new();
    out.push_str(&format!(
        "static RtObject *{function_name}(RtObject *self, RtObject *args)\n{{\n  RtObject *result = NULL;\n"
    ));

    if has_receiver {
        out.push_str(&format!(
            "  {class_name} *op = ({class_name} *){self_ptr}(self);\n",
            self_ptr = abi::SELF_POINTER,
        ));
    }

    for (i, _) in m.arguments.iter().enumerate() {
        out.push_str(&emit_temp_variable(m, Slot::Arg(i)));
    }
    out.push_str(&emit_temp_variable(m, Slot::Return));

    if m.is_pure_virtual && is_object_kind {
        out.push_str(&format!(
            "  if (RtPythonUtil_SelfRepresentsClass(self)) {{\n    {set_err}(\"pure virtual method {class_name}::{name} cannot be called on the class\");\n    return NULL;\n  }}\n",
            set_err = abi::SET_TYPE_ERROR,
            name = m.name.as_deref().unwrap_or("?"),
        ));
    }

    let format_str = emit_parse_format(m, profile);
    let cleanup_label = if needs_cleanup { "cleanup" } else { "" };
    out.push_str(&format!(
        "  if (!{parse}(args, (char *)\"{format_str}\"",
        parse = abi::PARSE_TUPLE
    ));
    for (i, a) in m.arguments.iter().enumerate() {
        out.push_str(&emit_parse_arg_refs(i, a));
    }
    out.push_str(")) {\n");
    if needs_cleanup {
        out.push_str(&format!("    goto {cleanup_label};\n"));
    } else {
        out.push_str("    return NULL;\n");
    }
    out.push_str("  }\n");

    for (i, a) in m.arguments.iter().enumerate() {
        out.push_str(&emit_arg_resolution(i, a, needs_cleanup));
    }

    out.push_str(&emit_call(class_name, m, is_instance, is_static, is_ctor));

    for (i, a) in m.arguments.iter().enumerate() {
        if is_mutable_numeric_array(a) {
            out.push_str(&format!(
                "  if (!{check}(args, {i}, temp{i}, {count})) {{\n    goto {cleanup_label};\n  }}\n",
                check = abi::CHECK_ARRAY,
                count = a.array_count,
            ));
        }
    }

    out.push_str(&emit_return_marshal(m, profile));

    if needs_cleanup {
        out.push_str(&format!("  {cleanup_label}:\n"));
        for (i, a) in m.arguments.iter().enumerate() {
            if a.type_tag.is_object_ref() || a.type_tag.is_object_value() {
                out.push_str(&format!("  if (handle{i}) {{ {decref}(handle{i}); }}\n", decref = abi::DECREF));
            }
        }
    }

    out.push_str("  return result;\n}\n");
    out
}

/// Build the `&temp{i}`-shaped vararg(s) the parse-tuple call takes for one
/// argument. Every auxiliary temporary `emit_temp_variable` declares for a
/// type has exactly one slot here: objects parse into their handle, bools
/// and unicode strings parse into their raw object, C strings parse
/// straight into `c_str{i}`, `void*` takes a pointer/size pair, and a fixed
/// numeric array takes one element pointer per array slot (spec §4.6,
/// grounded on `vtkWrapPython_GenerateMethods`,
/// original_source/Wrapping/vtkWrapPython.c:1816-1858).
fn emit_parse_arg_refs(i: usize, a: &Argument) -> String {
    let t = a.type_tag;
    if t.is_object() {
        return format!(", &handle{i}");
    }
    if t.base_kind == BaseKind::Bool {
        return format!(", &raw_b{i}");
    }
    if t.is_string() {
        return format!(", &c_str{i}");
    }
    if t.is_unicode() {
        return format!(", &raw_u{i}");
    }
    if t.is_void_ptr() {
        return format!(", &temp{i}, &size{i}");
    }
    if t.is_array(a.array_count) {
        let mut out = String::new();
        for j in 0..a.array_count {
            out.push_str(&format!(", temp{i} + {j}"));
        }
        return out;
    }
    format!(", &temp{i}")
}

fn is_mutable_numeric_array(a: &Argument) -> bool {
    a.type_tag.indirection == Indirection::Pointer
        && a.type_tag.base_kind.is_numeric()
        && !a.type_tag.is_const
        && !a.type_tag.is_object()
        && a.array_count > 0
}

/// Resolve one parsed temporary into the value the C++ call needs:
/// object pointer/value/ref via the pointer-from-object helpers, C strings
/// via a plain assignment, bool via truth-test, unicode via UTF-8 decode,
/// void* via unmangling, function pointers via the command-function
/// trampoline (spec §4.6, "Resolve").
fn emit_arg_resolution(i: usize, a: &Argument, needs_cleanup: bool) -> String {
    let t = a.type_tag;
    let bail = if needs_cleanup { "goto cleanup;" } else { "return NULL;" };

    if t.is_function() {
        return format!(
            "  if (!RtCallable_Check(temp{i})) {{\n    {set_err}(\"argument must be callable\");\n    return NULL;\n  }}\n  {incref}(temp{i});\n",
            set_err = abi::SET_VALUE_ERROR,
            incref = abi::INCREF,
        );
    }
    if t.is_object_ptr() {
        let class = a.class_name.as_deref().unwrap_or("?");
        return format!(
            "  temp{i} = ({class} *){get_ptr}(handle{i}, \"{class}\");\n",
            get_ptr = abi::GET_POINTER_FROM_OBJECT,
        );
    }
    if t.is_object_ref() || t.is_object_value() {
        let class = a.class_name.as_deref().unwrap_or("?");
        return format!(
            "  temp{i} = ({class} *){get_special}(handle{i}, &handle{i}, \"{class}\");\n",
            get_special = abi::GET_SPECIAL_POINTER_FROM_OBJECT,
        );
    }
    if t.is_string() {
        return format!("  temp{i} = c_str{i};\n");
    }
    if t.base_kind == BaseKind::Bool {
        return format!(
            "  bool{i} = {is_true}(raw_b{i});\n  if (bool{i} < 0) {{\n    {bail}\n  }}\n",
            is_true = abi::OBJECT_IS_TRUE,
        );
    }
    if t.is_unicode() {
        return format!(
            "  utf8_{i} = {as_utf8}(raw_u{i});\n  if (!utf8_{i}) {{\n    {bail}\n  }}\n",
            as_utf8 = abi::UNICODE_AS_UTF8,
        );
    }
    if t.is_void_ptr() {
        return format!(
            "  if (size{i} == -1) {{\n    {set_err}(\"incorrect type\");\n    {bail}\n  }}\n  if (size{i} == -2) {{\n    {set_err}(\"poorly formed\");\n    {bail}\n  }}\n",
            set_err = abi::SET_VALUE_ERROR,
        );
    }
    String::new()
}

/// Emit the actual C++ invocation. Object-kind, non-static,
/// non-pure-virtual, non-constructor methods get two call sites (a
/// class-qualified call when `self` stands for the class, and an
/// ordinary virtual call otherwise — spec §4.6, "Invoke").
fn emit_call(class_name: &str, m: &MethodDescription, is_instance: bool, is_static: bool, is_ctor: bool) -> String {
    let name = m.name.as_deref().unwrap_or("?");
    let args: Vec<String> = m
        .arguments
        .iter()
        .enumerate()
        .map(|(i, a)| if a.type_tag.is_reference() { format!("*temp{i}") } else { format!("temp{i}") })
        .collect();
    let arglist = args.join(", ");

    let assign = if m.return_type.is_void() && m.return_type.indirection == Indirection::None {
        String::new()
    } else {
        "temp_ret = ".to_string()
    };

    if is_ctor {
        return format!("  {assign}new {class_name}({arglist});\n");
    }
    if is_static {
        return format!("  {assign}{class_name}::{name}({arglist});\n");
    }
    if is_instance {
        return format!(
            "  if (RtPythonUtil_SelfRepresentsClass(self)) {{\n    {assign}op->{class_name}::{name}({arglist});\n  }} else {{\n    {assign}op->{name}({arglist});\n  }}\n"
        );
    }
    format!("  {assign}op->{name}({arglist});\n")
}

#[cfg(test)]
mod synth_tests;
