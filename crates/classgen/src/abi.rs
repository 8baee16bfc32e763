//! Names of the abstract scripting-runtime C ABI the emitter targets
//! (spec §6). The engine does not define this vocabulary, only consumes
//! it: every symbol named here is assumed to exist in a header the
//! generated source `#include`s, exactly as the original tool assumes
//! the CPython C API headers are on the include path.
//!
//! Collected in one place so every emitter module spells a given runtime
//! operation identically; the spec lists these by name ("`CheckArray`",
//! "`CallOverloadedMethod`", "the object-from-pointer helper"), so the
//! identifiers below are close paraphrases of spec §6 rather than an
//! invented ABI.

/// Opaque runtime-value type every dispatcher traffics in.
pub const VALUE_TYPE: &str = "RtObject";

/// The runtime's `None`/unit singleton, as an expression.
pub const NONE: &str = "Rt_None()";

/// Increment the refcount of a runtime value (borrowed -> owned).
pub const INCREF: &str = "Rt_INCREF";

/// Decrement the refcount of a runtime value, releasing a handle.
pub const DECREF: &str = "Rt_DECREF";

/// Tuple-parser entry point: `(self_and_args, format, ...) -> bool`.
pub const PARSE_TUPLE: &str = "RtArg_ParseTuple";

/// Construct a runtime value from a C `double`.
pub const FLOAT_FROM_DOUBLE: &str = "Rt_FloatFromDouble";

/// Construct a runtime value from a signed C long.
pub const INT_FROM_LONG: &str = "Rt_IntFromLong";

/// Construct a runtime value from an unsigned C long.
pub const INT_FROM_UNSIGNED_LONG: &str = "Rt_IntFromUnsignedLong";

/// Construct a runtime value from a signed 64-bit integer.
pub const INT_FROM_LONG_LONG: &str = "Rt_IntFromLongLong";

/// Construct a runtime value from an unsigned 64-bit integer.
pub const INT_FROM_UNSIGNED_LONG_LONG: &str = "Rt_IntFromUnsignedLongLong";

/// Construct the runtime boolean value from a C truth value.
pub const BOOL_FROM_LONG: &str = "Rt_BoolFromLong";

/// Construct a runtime string from a NUL-terminated C string (copies).
pub const STRING_FROM_C_STRING: &str = "Rt_StringFromString";

/// Construct a runtime string from a UTF-8 byte buffer of known length.
pub const STRING_FROM_UTF8: &str = "Rt_StringFromUTF8";

/// Construct a runtime string tagging a mangled pointer value.
pub const STRING_FROM_MANGLED_POINTER: &str = "Rt_ManglePointerAsString";

/// Unmangle a tagged pointer string back into a raw pointer plus size
/// sentinel (`-1` incorrect type, `-2` poorly formed, per spec §7).
pub const UNMANGLE_POINTER: &str = "Rt_UnmanglePointer";

/// Build a fixed-size numeric tuple from a C array, given the element
/// format code and count.
pub const BUILD_NUMERIC_TUPLE: &str = "Rt_BuildNumericTuple";

/// Resolve a C++ pointer from a runtime object, given the expected class
/// name; returns null (and sets an error) on mismatch.
pub const GET_POINTER_FROM_OBJECT: &str = "RtPythonUtil_GetPointerFromObject";

/// Wrap a raw object-kind pointer as a runtime value.
pub const GET_OBJECT_FROM_POINTER: &str = "RtPythonUtil_GetObjectFromPointer";

/// Resolve a value-type pointer plus owning handle from a runtime object.
pub const GET_SPECIAL_POINTER_FROM_OBJECT: &str = "RtPythonUtil_GetSpecialPointerFromObject";

/// Wrap a value-type pointer as a runtime value, given its class name.
pub const GET_SPECIAL_OBJECT_FROM_POINTER: &str = "RtPythonUtil_GetSpecialObjectFromPointer";

/// Truth-test a runtime value (`bool` argument decode); negative on error.
pub const OBJECT_IS_TRUE: &str = "Rt_IsTrue";

/// Decode a runtime unicode value's UTF-8 byte representation.
pub const UNICODE_AS_UTF8: &str = "Rt_UnicodeAsUTF8";

/// Propagate mutations in a C array argument back to the caller's
/// runtime sequence after the call.
pub const CHECK_ARRAY: &str = "RtPythonUtil_CheckArray";

/// Dispatch `(self, args)` among a per-name method table.
pub const CALL_OVERLOADED_METHOD: &str = "RtPythonUtil_CallOverloadedMethod";

/// Verify a runtime value is callable and wrap it as a C++ command
/// object (used for the sole-function-pointer-argument case, spec §4.6).
pub const NEW_COMMAND_FUNCTION: &str = "RtPythonUtil_NewCommandFunction";

/// Release a command-function wrapper registered as call cleanup
/// (spec §4.6: "emit an `ArgDelete` call after the C++ call").
pub const ARG_DELETE: &str = "RtPythonUtil_ArgDelete";

/// Set a runtime `TypeError`-equivalent exception with the given message.
pub const SET_TYPE_ERROR: &str = "Rt_SetTypeError";

/// Set a runtime `ValueError`-equivalent exception with the given message.
pub const SET_VALUE_ERROR: &str = "Rt_SetValueError";

/// The runtime's per-method-table entry type, pairing a descriptor string
/// with a dispatcher function pointer (spec §4.6.2).
pub const METHOD_TABLE_ENTRY_TYPE: &str = "RtMethodDef";

/// The generated dispatcher function pointer signature:
/// `RtObject *(*)(RtObject *self, RtObject *args)`.
pub const DISPATCH_SIGNATURE: &str = "RtObject *(RtObject *self, RtObject *args)";

/// Resolve the C++ instance pointer a runtime value wraps, without the
/// per-class type check `GetPointerFromObject` performs (used by the
/// generated `New`/`Delete`/`Copy` shims and by every ordinary instance
/// method's `op` receiver, object-kind or value-kind alike, since all of
/// these already know their own type).
pub const SELF_POINTER: &str = "RtPythonUtil_SelfPointer";

/// Bundles a value-kind class's `Copy`/`Delete`/`Print`/`Compare`/`Hash`
/// shims into the descriptor the runtime's special-type registration
/// reads (spec §4.7.3, grounded on `PyVTKSpecialMethods`).
pub const SPECIAL_METHODS_TYPE: &str = "RtSpecialTypeMethods";

/// Register a value-kind class's constructor factory, special-methods
/// bundle (`Copy`/`Delete`/`Print`/`Compare`/`Hash`), ordinary instance
/// method table, and docstring with the runtime (spec §4.7.3).
pub const ADD_SPECIAL_TYPE: &str = "RtPythonUtil_AddSpecialTypeToModule";

/// Register an object-kind class's factory and method table with the
/// runtime, chaining to its primary base's registration (spec §4.7.4).
pub const ADD_OBJECT_TYPE: &str = "RtPythonUtil_AddObjectTypeToModule";

/// Three-way comparison result constructor (used by generated `Compare`
/// shims for classes that opt into ordering, spec §4.7.3).
pub const RICH_COMPARE_FROM_INT: &str = "Rt_RichCompareFromInt";

/// Combine a hash seed with a field's hash (used by generated `Hash`
/// shims for classes that opt into hashing, spec §4.7.3).
pub const HASH_COMBINE: &str = "RtPythonUtil_HashCombine";
