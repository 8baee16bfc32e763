//! Overlay registry (spec §4.7.2): hand-written dispatcher bodies that
//! replace a parsed method's synthesized one for a handful of root
//! object-kind base classes.
//!
//! Grounded on `vtkWrapPython_CustomMethods`
//! (original_source/Wrapping/vtkWrapPython.c): the original hard-codes
//! `if (!strcmp(classname, "vtkObject"))` / `"vtkObjectBase"` branches
//! that tombstone a parsed method's ordinary signature and substitute a
//! hand-written dispatcher reaching into runtime machinery the generic
//! synthesizer can't express (observer callbacks, address-as-string
//! introspection). Spec §9 directs this be represented as a registry
//! keyed on base-class name rather than identity branches scattered
//! through the assembler.

/// One entry of an overlay: the name whose synthesized dispatcher(s)
/// should be tombstoned, and the hand-written replacement source plus
/// method-table descriptor to splice in instead.
pub struct OverlayMethod {
    pub name: &'static str,
    pub descriptor: &'static str,
    pub function_name: &'static str,
    pub source: &'static str,
}

/// Every overlay method for the class named `class_name`.
///
/// The overlay applies only to the class whose own hand-written methods
/// these are — not to every class that descends from it. A derived class
/// picks up `AddObserver` through ordinary runtime inheritance of
/// `vtkObject`'s generated type, the same way it picks up any other
/// inherited method; its own generated source carries no copy of it.
pub fn overlay_for(class_name: &str) -> &'static [OverlayMethod] {
    match class_name {
        "vtkObjectBase" => OBJECT_BASE_OVERLAY,
        "vtkObject" => OBJECT_OVERLAY,
        _ => &[],
    }
}

const OBJECT_BASE_OVERLAY: &[OverlayMethod] = &[
    OverlayMethod {
        name: "GetAddressAsString",
        descriptor: "GetAddressAsString(s)",
        function_name: "overlay_GetAddressAsString",
        source: concat!(
            "static RtObject *overlay_GetAddressAsString(RtObject *self, RtObject *args)\n{\n",
            "  RtObjectBase *op = (RtObjectBase *)RtPythonUtil_SelfPointer(self);\n",
            "  char *dummy;\n",
            "  if (!RtArg_ParseTuple(args, (char *)\"s\", &dummy)) {\n    return NULL;\n  }\n",
            "  return Rt_StringFromMangledPointer(op, dummy);\n}\n",
        ),
    },
    OverlayMethod {
        name: "PrintRevisions",
        descriptor: "PrintRevisions()",
        function_name: "overlay_PrintRevisions",
        source: concat!(
            "static RtObject *overlay_PrintRevisions(RtObject *self, RtObject *args)\n{\n",
            "  RtObjectBase *op = (RtObjectBase *)RtPythonUtil_SelfPointer(self);\n",
            "  if (!RtArg_ParseTuple(args, (char *)\"\")) {\n    return NULL;\n  }\n",
            "  return Rt_StringFromRevisions(op);\n}\n",
        ),
    },
];

const OBJECT_OVERLAY: &[OverlayMethod] = &[OverlayMethod {
    name: "AddObserver",
    descriptor: "AddObserver(sO)",
    function_name: "overlay_AddObserver",
    source: concat!(
        "static RtObject *overlay_AddObserver(RtObject *self, RtObject *args)\n{\n",
        "  vtkObject *op = (vtkObject *)RtPythonUtil_SelfPointer(self);\n",
        "  char *event;\n  RtObject *callable;\n  unsigned long tag;\n",
        "  if (!RtArg_ParseTuple(args, (char *)\"sO\", &event, &callable)) {\n    return NULL;\n  }\n",
        "  if (!RtCallable_Check(callable)) {\n    Rt_SetValueError(\"argument must be callable\");\n    return NULL;\n  }\n",
        "  Rt_INCREF(callable);\n",
        "  tag = op->AddObserver(event, RtPythonUtil_NewCommandFunction(callable));\n",
        "  return Rt_IntFromUnsignedLong(tag);\n}\n",
    ),
}];
