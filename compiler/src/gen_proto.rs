use crate::{
    options::RenderOptions,
    type_map::canonical_type,
    types::{FieldDesc, StructDesc},
    utils::{tag_value, to_snake_case},
};

const INDENT: &str = "    ";

/// Field name in the message. A `protobuf:"..."` tag entry wins over the snake-cased
/// Go name; both the `bytes,1,opt,name=x` form and a bare `x` are understood.
fn message_field_name(field: &FieldDesc) -> String {
    let from_tag = field
        .backtick_comment
        .as_deref()
        .and_then(|tag| tag_value(tag, "protobuf"))
        .and_then(|value| {
            value
                .split(',')
                .find_map(|part| part.strip_prefix("name="))
                .or_else(|| (!value.is_empty() && !value.contains(',')).then_some(value))
        });

    match from_tag {
        Some(name) => name.to_string(),
        None => to_snake_case(&field.name),
    }
}

/// One numbered field line. Primitive types are mapped to their canonical name;
/// the field itself is left untouched.
pub fn render_field(field: &FieldDesc, index: usize) -> String {
    let type_ = if field.is_primitive {
        canonical_type(&field.type_).unwrap_or(field.type_.as_str())
    } else {
        field.type_.as_str()
    };

    let mut s = format!("{} {} = {};", type_, message_field_name(field), index);
    if field.is_slice {
        s = format!("repeated {}", s);
    }
    if let Some(comment) = field.slashed_comment.as_deref().filter(|c| !c.is_empty()) {
        s.push_str(" // ");
        s.push_str(comment);
    }
    s
}

/// Fields are numbered from 1 in declaration order.
pub fn render_message(desc: &StructDesc) -> String {
    let mut s = format!("message {} {{\n", desc.name);
    for (i, field) in desc.fields.iter().enumerate() {
        s.push_str(INDENT);
        s.push_str(&render_field(field, i + 1));
        s.push('\n');
    }
    s.push('}');
    s
}

pub fn render_proto_file(structs: &[StructDesc], opts: &RenderOptions) -> String {
    let mut out = String::from("syntax = \"proto3\";\n\n");
    if let Some(package) = &opts.package {
        out.push_str(&format!("package {};\n\n", package));
    }
    let body: Vec<String> = structs.iter().map(render_message).collect();
    out.push_str(&body.join("\n\n"));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_go::render_struct;

    fn pet() -> StructDesc {
        StructDesc {
            name:   "Pet".into(),
            fields: vec![FieldDesc::new("Name", "string"), FieldDesc::new("Age", "int")],
        }
    }

    #[test]
    fn test_render_message_numbers_fields() {
        assert_eq!(
            render_message(&pet()),
            "message Pet {\n    string name = 1;\n    int32 age = 2;\n}"
        );
    }

    #[test]
    fn test_render_repeated_and_named() {
        let desc = StructDesc {
            name:   "Owner".into(),
            fields: vec![
                FieldDesc::new("Tags", "[]string"),
                FieldDesc::new("Pets", "[]*Pet"),
                FieldDesc::new("Best", "*Pet"),
                FieldDesc::new("Small", "uint8"),
            ],
        };
        assert_eq!(
            render_message(&desc),
            "message Owner {\n    repeated string tags = 1;\n    repeated Pet pets = 2;\n    Pet best = 3;\n    uint32 small = 4;\n}"
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let desc = pet();
        let before = render_struct(&desc, &RenderOptions::default());
        let _ = render_message(&desc);
        assert_eq!(desc.fields[1].type_, "int");
        assert_eq!(render_struct(&desc, &RenderOptions::default()), before);
    }

    #[test]
    fn test_protobuf_tag_renames_field() {
        let mut f = FieldDesc::new("DogName", "string");
        f.backtick_comment = Some("json:\"dog\" protobuf:\"bytes,1,opt,name=dog_nick\"".into());
        assert_eq!(render_field(&f, 1), "string dog_nick = 1;");

        f.backtick_comment = Some("protobuf:\"nick\"".into());
        f.slashed_comment = Some("shown to users".into());
        assert_eq!(render_field(&f, 3), "string nick = 3; // shown to users");
    }

    #[test]
    fn test_render_proto_file() {
        let out = render_proto_file(&[pet()], &RenderOptions::default().with_package("zoo"));
        assert_eq!(
            out,
            "syntax = \"proto3\";\n\npackage zoo;\n\nmessage Pet {\n    string name = 1;\n    int32 age = 2;\n}\n"
        );
    }
}
