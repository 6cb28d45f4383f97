use crate::config::TargetConfig;
use crate::error::CommonResult;
use std::collections::HashMap;
use stylegate_ast::{Declaration, Property};
use stylegate_compat::{
    css_prefix_data, unsupported_css_features, ConstraintSet, CssFeature, CssPrefix,
};
use tracing::{info, instrument};

/// Everything the emitter needs to know about the targets of one build
///
/// Computed once per build from a [`TargetConfig`]; nothing here is cached
/// across builds.
#[derive(Debug, Clone)]
pub struct BuildTargets {
    pub constraints: ConstraintSet,
    /// Features that must be lowered or avoided
    pub unsupported: CssFeature,
    pub prefixes: HashMap<Property, CssPrefix>,
    pub minify: bool,
}

impl BuildTargets {
    #[instrument(skip(config), fields(targets = config.target.len(), minify = config.minify))]
    pub fn resolve(config: &TargetConfig) -> CommonResult<Self> {
        let constraints = config.constraints()?;
        let (overrides, mask) = config.feature_overrides()?;

        let unsupported = unsupported_css_features(&constraints).apply_overrides(overrides, mask);
        let prefixes = css_prefix_data(&constraints);

        info!(
            engines = constraints.len(),
            unsupported = ?unsupported,
            prefixed_properties = prefixes.len(),
            "Resolved build targets"
        );

        Ok(Self {
            constraints,
            unsupported,
            prefixes,
            minify: config.minify,
        })
    }

    pub fn is_unsupported(&self, feature: CssFeature) -> bool {
        self.unsupported.has(feature)
    }

    pub fn prefixes_for(&self, property: Property) -> CssPrefix {
        self.prefixes
            .get(&property)
            .copied()
            .unwrap_or(CssPrefix::NONE)
    }

    /// Minify color declarations if this build has minification enabled
    pub fn process_declarations(&self, decls: &mut [Declaration]) -> usize {
        stylegate_minifier::process_declarations(decls, self.minify)
    }
}
