use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Source primitive type -> canonical protobuf type. Widths below 32 bits widen to
    /// the 32-bit type, unsigned stays unsigned.
    pub static ref BUILTIN_TYPE_MAPPING: HashMap<&'static str, &'static str> = HashMap::from([
        ("bool",    "bool"),
        ("float32", "float"),
        ("float64", "float"),
        ("int",     "int32"),
        ("int8",    "int32"),
        ("int16",   "int32"),
        ("int32",   "int32"),
        ("int64",   "int64"),
        ("rune",    "rune"),
        ("string",  "string"),
        ("uint",    "uint32"),
        ("uint8",   "uint32"),
        ("uint16",  "uint32"),
        ("uint32",  "uint32"),
        ("uint64",  "uint64"),
    ]);
}

pub fn is_primitive(type_name: &str) -> bool {
    BUILTIN_TYPE_MAPPING.contains_key(type_name)
}

/// Canonical protobuf name for a primitive, `None` for named types.
pub fn canonical_type(type_name: &str) -> Option<&'static str> {
    BUILTIN_TYPE_MAPPING.get(type_name).copied()
}
