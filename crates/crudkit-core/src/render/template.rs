use crate::{
    descriptor::PropertyInit,
    error::DescriptorError,
    obs::{DescriptorEvent, TemplateSource, sink::record},
};
use crudkit_config::TemplateConfig;

///
/// TemplateResolver
///
/// Decides the final template path for a field, in priority order:
/// configured path, configured template name, per-type mapping, then
/// `{fallback_dir}/{type}.html`.
///

#[derive(Clone, Copy, Debug)]
pub struct TemplateResolver<'a> {
    config: &'a TemplateConfig,
}

impl<'a> TemplateResolver<'a> {
    #[must_use]
    pub const fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, init: &PropertyInit) -> Result<(String, TemplateSource), DescriptorError> {
        if let Some(path) = &init.template_path {
            return Ok((path.clone(), TemplateSource::ConfiguredPath));
        }

        if let Some(name) = &init.template_name {
            return self
                .config
                .named
                .get(name)
                .map(|path| (path.clone(), TemplateSource::Named))
                .ok_or_else(|| DescriptorError::UnknownTemplate {
                    name: init.name.clone(),
                    template: name.clone(),
                });
        }

        if let Some(path) = self.config.types.get(&init.field_type) {
            return Ok((path.clone(), TemplateSource::ByType));
        }

        let dir = self.config.fallback_dir.trim_end_matches('/');
        let path = if dir.is_empty() {
            format!("{}.html", init.field_type)
        } else {
            format!("{dir}/{}.html", init.field_type)
        };

        Ok((path, TemplateSource::Fallback))
    }

    /// Resolve and store the path in `init.template_path`.
    pub fn apply(&self, init: &mut PropertyInit) -> Result<(), DescriptorError> {
        let (path, source) = self.resolve(init)?;

        record(DescriptorEvent::TemplateResolved { source });
        tracing::debug!(name = %init.name, %path, ?source, "template resolved");

        init.template_path = Some(path);

        Ok(())
    }
}
