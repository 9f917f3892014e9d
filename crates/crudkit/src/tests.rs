use crate::{Error, prelude::*};
use serde_json::json;

const CONFIG: &str = r#"
[fields]
text_align = "center"
sortable = false

[templates.types]
boolean = "crud/field/boolean.html"
"#;

struct Post {
    id: u64,
    title: &'static str,
    published: bool,
}

// Mirrors what an upstream field builder does per (row x field).
fn build_row(config: &CrudConfig, post: &Post) -> Result<Vec<PropertyDescriptor>, Error> {
    let align = default_text_align(&config.fields)?;
    let resolver = TemplateResolver::new(&config.templates);

    let inits = [
        PropertyInit {
            value: Value::from(post.id),
            formatted_value: Value::from(post.id.to_string()),
            text_align: TextAlign::Right,
            ..PropertyInit::new("integer", "id")
        },
        PropertyInit {
            value: Value::from(post.title),
            formatted_value: Value::from(post.title),
            sortable: Some(true),
            text_align: align,
            ..PropertyInit::new("text", "title")
        },
        PropertyInit {
            value: Value::from(post.published),
            formatted_value: Value::from(if post.published { "Yes" } else { "No" }),
            label: Some("Is live".to_string()),
            text_align: align,
            assets: Assets::new().with_js_file("field-boolean.js"),
            ..PropertyInit::new("boolean", "published")
        },
    ];

    inits
        .into_iter()
        .map(|mut init| -> Result<_, Error> {
            resolver.apply(&mut init)?;
            Ok(PropertyDescriptor::new(init))
        })
        .collect()
}

#[test]
fn version_is_exported() {
    assert!(!crate::VERSION.is_empty());
}

#[test]
fn rows_render_with_distinct_field_ids() {
    let config = CrudConfig::from_toml_str(CONFIG).expect("config parses");
    let posts = [
        Post {
            id: 1,
            title: "Hello",
            published: true,
        },
        Post {
            id: 2,
            title: "Hello",
            published: true,
        },
    ];

    let rows: Vec<_> = posts
        .iter()
        .map(|p| build_row(&config, p).expect("row builds"))
        .collect();

    // same field in two rows: identical metadata, distinct identities
    assert_eq!(rows[0][1].init(), rows[1][1].init());
    assert_ne!(rows[0][1].unique_id(), rows[1][1].unique_id());

    let title = &rows[0][1];
    assert_eq!(title.text_align(), TextAlign::Center);
    assert_eq!(title.template_path().expect("resolved"), "crud/field/text.html");
    assert!(resolved_sortable(title, &config.fields));

    let id = &rows[0][0];
    assert!(!resolved_sortable(id, &config.fields));
    assert_eq!(display_label(id), "Id");

    let published = &rows[0][2];
    assert_eq!(display_label(published), "Is live");
    assert_eq!(
        published.template_path().expect("resolved"),
        "crud/field/boolean.html"
    );
}

#[test]
fn page_assets_are_aggregated_once() {
    let config = CrudConfig::default();
    let post = Post {
        id: 7,
        title: "Draft",
        published: false,
    };

    let mut page = Assets::new();
    for _ in 0..3 {
        for field in build_row(&config, &post).expect("row builds") {
            page.merge(field.assets());
        }
    }

    assert_eq!(page.js_files(), ["field-boolean.js"]);
}

#[test]
fn render_context_is_json() {
    let config = CrudConfig::default();
    let post = Post {
        id: 7,
        title: "Draft",
        published: false,
    };

    let row = build_row(&config, &post).expect("row builds");
    let ctx = serde_json::to_value(&row).expect("row serializes");

    assert_eq!(ctx[0]["value"], json!(7));
    assert_eq!(ctx[0]["formattedValue"], json!("7"));
    assert_eq!(ctx[2]["formattedValue"], json!("No"));
    assert_eq!(ctx[2]["templatePath"], json!("crud/field/boolean.html"));
    assert_ne!(ctx[0]["uniqueId"], ctx[1]["uniqueId"]);
}

#[test]
fn invalid_default_alignment_surfaces_through_umbrella_error() {
    let config = CrudConfig::from_toml_str("[fields]\ntext_align = \"middle\"\n").expect("parses");
    let post = Post {
        id: 1,
        title: "x",
        published: true,
    };

    let err = build_row(&config, &post).unwrap_err();
    assert!(matches!(err, Error::Descriptor(_)), "unexpected error: {err}");
}

#[test]
fn config_errors_convert() {
    let err: Error = CrudConfig::from_toml_str("fields = 3").unwrap_err().into();

    assert!(matches!(err, Error::Config(_)));
}
