use crate::{
    options::RenderOptions,
    types::{FieldDesc, StructDesc},
    utils::{tag_value, to_snake_case},
};

const INDENT: &str = "  ";

/// Field name, source type and struct tag, with an optional trailing `// comment`.
///
/// A tag that already carries `tag_key` is kept as written. Otherwise the generated
/// entry goes in front of whatever tag the field had.
pub fn render_field(field: &FieldDesc, opts: &RenderOptions) -> String {
    let generated = format!("{}:\"{}\"", opts.tag_key, to_snake_case(&field.name));
    let tag = match field.backtick_comment.as_deref().map(str::trim) {
        Some(existing) if tag_value(existing, &opts.tag_key).is_some() => existing.to_string(),
        Some(existing) if !existing.is_empty() => format!("{} {}", generated, existing),
        _ => generated,
    };

    let mut s = format!("{} {} `{}`", field.name, field.source_type(), tag);
    if let Some(comment) = field.slashed_comment.as_deref().filter(|c| !c.is_empty()) {
        s.push_str(" // ");
        s.push_str(comment);
    }
    s
}

pub fn render_struct(desc: &StructDesc, opts: &RenderOptions) -> String {
    let mut s = format!("type {} struct {{\n", desc.name);
    for field in &desc.fields {
        s.push_str(INDENT);
        s.push_str(&render_field(field, opts));
        s.push('\n');
    }
    s.push('}');
    s
}

/// All structs, blank-line separated, behind an optional `package` clause.
pub fn render_struct_file(structs: &[StructDesc], opts: &RenderOptions) -> String {
    let mut out = String::new();
    if let Some(package) = &opts.package {
        out.push_str(&format!("package {}\n\n", package));
    }
    let body: Vec<String> = structs.iter().map(|d| render_struct(d, opts)).collect();
    out.push_str(&body.join("\n\n"));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet() -> StructDesc {
        StructDesc {
            name:   "Pet".into(),
            fields: vec![FieldDesc::new("Name", "string"), FieldDesc::new("Age", "int")],
        }
    }

    #[test]
    fn test_render_struct() {
        let out = render_struct(&pet(), &RenderOptions::default());
        assert_eq!(
            out,
            "type Pet struct {\n  Name string `json:\"name\"`\n  Age int `json:\"age\"`\n}"
        );
    }

    #[test]
    fn test_render_keeps_modifiers() {
        let f = FieldDesc::new("OwnerID", "[]*int64");
        assert_eq!(
            render_field(&f, &RenderOptions::default()),
            "OwnerID []*int64 `json:\"owner_id\"`"
        );
    }

    #[test]
    fn test_render_custom_tag_key() {
        let f = FieldDesc::new("DogName", "string");
        let opts = RenderOptions::default().with_tag_key("yaml");
        assert_eq!(render_field(&f, &opts), "DogName string `yaml:\"dog_name\"`");
    }

    #[test]
    fn test_render_existing_tag_and_comment() {
        let mut f = FieldDesc::new("Name", "string");
        f.backtick_comment = Some("json:\"nick,omitempty\"".into());
        f.slashed_comment = Some("display name".into());
        assert_eq!(
            render_field(&f, &RenderOptions::default()),
            "Name string `json:\"nick,omitempty\"` // display name"
        );

        f.backtick_comment = Some("db:\"name\"".into());
        f.slashed_comment = Some(String::new());
        assert_eq!(
            render_field(&f, &RenderOptions::default()),
            "Name string `json:\"name\" db:\"name\"`"
        );
    }

    #[test]
    fn test_render_struct_file() {
        let opts = RenderOptions::default().with_package("model");
        let empty = StructDesc { name: "Empty".into(), fields: vec![] };
        let out = render_struct_file(&[pet(), empty], &opts);
        assert!(out.starts_with("package model\n\ntype Pet struct {\n"));
        assert!(out.ends_with("}\n\ntype Empty struct {\n}\n"));
    }
}
