use serde::Serialize;

use crate::{error::ConvError, type_map, utils::quote};

pub const SLICE_PREFIX:   &str = "[]";
pub const POINTER_PREFIX: &str = "*";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDesc {
    /// Field name exactly as written in the source.
    pub orig_name:        String,
    /// Name used when rendering. Same as `orig_name` for now.
    pub name:             String,
    /// Base type with `[]` / `*` stripped.
    pub type_:            String,
    pub is_pointer:       bool,
    pub is_slice:         bool,
    pub is_primitive:     bool,
    /// Map types are not parsed yet; always false.
    pub is_map:           bool,
    pub backtick_comment: Option<String>,
    pub slashed_comment:  Option<String>,
}

impl FieldDesc {
    /// Builds a field from its name and raw type token.
    ///
    /// The slice marker is checked before the pointer marker, so `[]*T` yields
    /// a slice of pointers to `T`.
    pub fn new(name: &str, raw_type: &str) -> Self {
        let mut type_ = raw_type;

        let is_slice = type_.starts_with(SLICE_PREFIX);
        if is_slice {
            type_ = &type_[SLICE_PREFIX.len()..];
        }

        let is_pointer = type_.starts_with(POINTER_PREFIX);
        if is_pointer {
            type_ = &type_[POINTER_PREFIX.len()..];
        }

        FieldDesc {
            orig_name:        name.to_string(),
            name:             name.to_string(),
            type_:            type_.to_string(),
            is_pointer,
            is_slice,
            is_primitive:     type_map::is_primitive(type_),
            is_map:           false,
            backtick_comment: None,
            slashed_comment:  None,
        }
    }

    /// The type as it appears in source, modifiers included.
    pub fn source_type(&self) -> String {
        let mut s = String::with_capacity(self.type_.len() + 3);
        if self.is_slice {
            s.push_str(SLICE_PREFIX);
        }
        if self.is_pointer {
            s.push_str(POINTER_PREFIX);
        }
        s.push_str(&self.type_);
        s
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDesc {
    pub name:   String,
    pub fields: Vec<FieldDesc>,
}

impl StructDesc {
    pub fn field(&self, name: &str) -> Result<&FieldDesc, ConvError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| ConvError::FieldNotFound(quote(name)))
    }
}
