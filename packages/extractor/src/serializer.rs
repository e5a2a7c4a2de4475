//! Metadata Serializer
//!
//! Canonical JSON rendering of extracted records: two-space indentation,
//! keys in declaration order of the record structs.

use crate::metadata::ClassRecord;

/// Render `records` as a pretty-printed JSON array.
pub fn to_json(records: &[ClassRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::*;

    fn sample_record() -> ClassRecord {
        ClassRecord {
            name: Some("Foo".to_string()),
            decorators: vec![SourceFragment::new("@Injectable()")],
            extends: None,
            implements: vec![],
            properties: vec![PropertyRecord {
                name: "id".to_string(),
                declared_type: SourceFragment::new("number"),
                is_readonly: true,
                is_static: false,
                access: AccessLevel::Private,
            }],
            constructor_params: vec![],
            methods: vec![MethodRecord {
                name: "bar".to_string(),
                return_type: SourceFragment::new("void"),
                parameters: vec![MethodParameterRecord {
                    name: "x".to_string(),
                    declared_type: SourceFragment::new("string"),
                }],
            }],
        }
    }

    #[test]
    fn should_render_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn should_render_fixed_key_order_with_two_space_indent() {
        let json = to_json(&[sample_record()]).unwrap();
        let expected = r#"[
  {
    "name": "Foo",
    "decorators": [
      "@Injectable()"
    ],
    "extends": null,
    "implements": [],
    "properties": [
      {
        "name": "id",
        "type": "number",
        "isReadonly": true,
        "isStatic": false,
        "access": "private"
      }
    ],
    "constructorParams": [],
    "methods": [
      {
        "name": "bar",
        "returnType": "void",
        "parameters": [
          {
            "name": "x",
            "type": "string"
          }
        ]
      }
    ]
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn should_render_anonymous_class_name_as_null() {
        let mut record = sample_record();
        record.name = None;
        let value: serde_json::Value = serde_json::from_str(&to_json(&[record]).unwrap()).unwrap();
        assert!(value[0]["name"].is_null());
        assert!(value[0].as_object().unwrap().contains_key("name"));
    }
}
