mod align;
mod id;


use crate::{
    asset::Assets,
    bag::ParameterBag,
    error::DescriptorError,
    obs::{DescriptorEvent, sink::record},
    value::Value,
};
use serde::{Serialize, Serializer, ser::SerializeStruct};

// re-exports
pub use align::TextAlign;
pub use id::UniqueId;

///
/// PropertyInit
///
/// Every attribute of a descriptor, supplied at once by the field builder.
/// Defaults (alignment, template path) must be applied before construction.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyInit {
    pub field_type: String,
    pub name: String,
    pub value: Value,
    pub formatted_value: Value,
    pub form_type: Option<String>,
    pub form_type_options: ParameterBag,
    pub sortable: Option<bool>,
    pub is_virtual: bool,
    pub label: Option<String>,
    pub permission: Option<String>,
    pub text_align: TextAlign,
    pub help: Option<String>,
    pub css_class: Option<String>,
    pub translation_params: ParameterBag,
    pub template_name: Option<String>,
    pub template_path: Option<String>,
    pub assets: Assets,
    pub custom_options: ParameterBag,
}

impl PropertyInit {
    /// Start from the two identifying strings; every other attribute is empty.
    #[must_use]
    pub fn new(field_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

///
/// PropertyDescriptor
///
/// Display and edit metadata for one field of one entity instance.
/// Read-only once built; the renderer consumes it through accessors or
/// its serialized render context.
///

#[derive(Debug)]
pub struct PropertyDescriptor {
    id: UniqueId,
    init: PropertyInit,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(init: PropertyInit) -> Self {
        let id = UniqueId::next();

        record(DescriptorEvent::Constructed {
            field_type: &init.field_type,
        });
        tracing::trace!(
            %id,
            name = %init.name,
            field_type = %init.field_type,
            "property descriptor constructed"
        );

        Self { id, init }
    }

    /// Identity of this instance, stable for its lifetime.
    #[must_use]
    pub const fn unique_id(&self) -> UniqueId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.init.name
    }

    #[must_use]
    pub fn field_type(&self) -> &str {
        &self.init.field_type
    }

    /// Original value stored in the entity property.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.init.value
    }

    /// Value prepared for display; may or may not equal `value()`.
    #[must_use]
    pub const fn formatted_value(&self) -> &Value {
        &self.init.formatted_value
    }

    /// `None` means the caller derives a caption from `name()`.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.init.label.as_deref()
    }

    #[must_use]
    pub fn form_type(&self) -> Option<&str> {
        self.init.form_type.as_deref()
    }

    #[must_use]
    pub const fn form_type_options(&self) -> &ParameterBag {
        &self.init.form_type_options
    }

    /// `None` defers to the column-level default; it does not mean `false`.
    #[must_use]
    pub const fn is_sortable(&self) -> Option<bool> {
        self.init.sortable
    }

    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        self.init.is_virtual
    }

    #[must_use]
    pub fn permission(&self) -> Option<&str> {
        self.init.permission.as_deref()
    }

    #[must_use]
    pub const fn text_align(&self) -> TextAlign {
        self.init.text_align
    }

    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.init.help.as_deref()
    }

    #[must_use]
    pub fn css_class(&self) -> Option<&str> {
        self.init.css_class.as_deref()
    }

    #[must_use]
    pub const fn translation_params(&self) -> &ParameterBag {
        &self.init.translation_params
    }

    #[must_use]
    pub fn configured_template_name(&self) -> Option<&str> {
        self.init.template_name.as_deref()
    }

    #[must_use]
    pub fn configured_template_path(&self) -> Option<&str> {
        self.init.template_path.as_deref()
    }

    /// Final template path.
    ///
    /// Resolution must happen before construction; reading an unresolved
    /// descriptor fails with `TemplateNotResolved`.
    pub fn template_path(&self) -> Result<&str, DescriptorError> {
        match self.init.template_path.as_deref() {
            Some(path) => Ok(path),
            None => Err(DescriptorError::TemplateNotResolved {
                name: self.init.name.clone(),
            }),
        }
    }

    #[must_use]
    pub const fn assets(&self) -> &Assets {
        &self.init.assets
    }

    #[must_use]
    pub const fn custom_options(&self) -> &ParameterBag {
        &self.init.custom_options
    }

    /// Attributes this descriptor was built from.
    #[must_use]
    pub const fn init(&self) -> &PropertyInit {
        &self.init
    }

    /// Give the attributes back; the identity is dropped with `self`.
    #[must_use]
    pub fn into_init(self) -> PropertyInit {
        self.init
    }
}

// A clone is a new instance and therefore gets a new identity.
impl Clone for PropertyDescriptor {
    fn clone(&self) -> Self {
        Self::new(self.init.clone())
    }
}

impl Serialize for PropertyDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let init = &self.init;
        let mut s = serializer.serialize_struct("PropertyDescriptor", 19)?;

        s.serialize_field("uniqueId", &self.id)?;
        s.serialize_field("type", &init.field_type)?;
        s.serialize_field("name", &init.name)?;
        s.serialize_field("value", &init.value)?;
        s.serialize_field("formattedValue", &init.formatted_value)?;
        s.serialize_field("label", &init.label)?;
        s.serialize_field("formType", &init.form_type)?;
        s.serialize_field("formTypeOptions", &init.form_type_options)?;
        s.serialize_field("sortable", &init.sortable)?;
        s.serialize_field("virtual", &init.is_virtual)?;
        s.serialize_field("permission", &init.permission)?;
        s.serialize_field("textAlign", &init.text_align)?;
        s.serialize_field("help", &init.help)?;
        s.serialize_field("cssClass", &init.css_class)?;
        s.serialize_field("translationParams", &init.translation_params)?;
        s.serialize_field("templateName", &init.template_name)?;
        s.serialize_field("templatePath", &init.template_path)?;
        s.serialize_field("assets", &init.assets)?;
        s.serialize_field("customOptions", &init.custom_options)?;

        s.end()
    }
}
