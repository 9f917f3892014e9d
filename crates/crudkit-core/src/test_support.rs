use crate::{
    asset::Assets,
    bag::ParameterBag,
    descriptor::{PropertyInit, TextAlign},
    value::Value,
};

/// Plain text column: `title = "Hello"`, sortable, left aligned, resolved template.
pub(crate) fn title_init() -> PropertyInit {
    PropertyInit {
        field_type: "string".to_string(),
        name: "title".to_string(),
        value: Value::from("Hello"),
        formatted_value: Value::from("Hello"),
        form_type: None,
        form_type_options: ParameterBag::new(),
        sortable: Some(true),
        is_virtual: false,
        label: None,
        permission: None,
        text_align: TextAlign::Left,
        help: None,
        css_class: None,
        translation_params: ParameterBag::new(),
        template_name: None,
        template_path: Some("crud/field/text.html".to_string()),
        assets: Assets::new(),
        custom_options: ParameterBag::new(),
    }
}

/// Every optional attribute populated.
pub(crate) fn full_init() -> PropertyInit {
    PropertyInit {
        field_type: "association".to_string(),
        name: "author".to_string(),
        value: Value::from(42u64),
        formatted_value: Value::from("Ada Lovelace"),
        form_type: Some("EntityType".to_string()),
        form_type_options: ParameterBag::new().with("multiple", false),
        sortable: Some(false),
        is_virtual: false,
        label: Some("Written by".to_string()),
        permission: Some("ROLE_EDITOR".to_string()),
        text_align: TextAlign::Right,
        help: Some("Primary author of %title%".to_string()),
        css_class: Some("field-author".to_string()),
        translation_params: ParameterBag::new().with("%title%", "Notes"),
        template_name: Some("crud/field/association".to_string()),
        template_path: Some("admin/field/association.html".to_string()),
        assets: Assets::new().with_js_file("autocomplete.js"),
        custom_options: ParameterBag::new().with("autocomplete", true),
    }
}
