use tracing::debug;

use crate::{
    error::ConvError,
    gen_go::render_struct_file,
    gen_proto::render_proto_file,
    options::RenderOptions,
    parser::parse_structs,
    tokenizer::tokenize_source,
    types::StructDesc,
};

/// Tokenize and parse source text into struct descriptions.
pub fn parse_source(text: &str) -> Result<Vec<StructDesc>, ConvError> {
    let tokens = tokenize_source(text)?;
    let structs = parse_structs(&tokens)?;
    debug!(tokens = tokens.len(), structs = structs.len(), "parsed source");
    Ok(structs)
}

/// Source text to a complete `.proto` file.
pub fn convert_to_proto(text: &str, opts: &RenderOptions) -> Result<String, ConvError> {
    let structs = parse_source(text)?;
    Ok(render_proto_file(&structs, opts))
}

/// Source text to normalized, tagged struct declarations.
pub fn convert_to_struct(text: &str, opts: &RenderOptions) -> Result<String, ConvError> {
    let structs = parse_source(text)?;
    Ok(render_struct_file(&structs, opts))
}
