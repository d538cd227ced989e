//! idl-conv-compiler
//!
//! This crate implements:
//!  1) A char cursor and tokenizer for Go-style `type X struct { ... }` declarations,
//!  2) A parser building `StructDesc` / `FieldDesc` values,
//!  3) Renderers for tagged struct declarations and protobuf messages,
//!  4) Error types (`ConvError`).

pub mod error;
pub mod types;
pub mod type_map;
pub mod options;
pub mod utils;
pub mod cursor;
pub mod tokenizer;
pub mod parser;
pub mod compiler;
pub mod gen_go;
pub mod gen_proto;

pub use compiler::{convert_to_proto, convert_to_struct, parse_source};
pub use error::ConvError;
pub use options::RenderOptions;
pub use types::{FieldDesc, StructDesc};
