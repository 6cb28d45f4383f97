use crate::error::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use stylegate_compat::{ConstraintSet, CssFeature, Engine, Version};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "stylegate.config.json";

/// Build target configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfig {
    /// Target strings such as `chrome58`, `safari15.4` or `es2020`
    #[serde(default)]
    pub target: Vec<String>,

    /// Force features on (`true`) or off (`false`) regardless of targets
    #[serde(default)]
    pub supported: BTreeMap<String, bool>,

    /// Rewrite color values to their shortest form
    #[serde(default)]
    pub minify: bool,
}

impl TargetConfig {
    pub fn from_json(json: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> CommonResult<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            debug!(path = %config_path.display(), "Loading target config");
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse every target string into a constraint set
    pub fn constraints(&self) -> CommonResult<ConstraintSet> {
        let mut constraints = ConstraintSet::new();

        for target in &self.target {
            if let Some((engine, version)) = parse_target(target)? {
                if constraints.insert(engine, version).is_some() {
                    return Err(CommonError::duplicate_target(engine));
                }
            }
        }

        Ok(constraints)
    }

    /// Feature overrides as `(overrides, mask)` for [`CssFeature::apply_overrides`]
    ///
    /// The result is a set of *unsupported* features, so `false` in the
    /// config sets the bit.
    pub fn feature_overrides(&self) -> CommonResult<(CssFeature, CssFeature)> {
        let mut overrides = CssFeature::empty();
        let mut mask = CssFeature::empty();

        for (name, &supported) in &self.supported {
            let feature =
                CssFeature::from_key(name).ok_or_else(|| CommonError::unknown_feature(name))?;
            mask |= feature;
            if !supported {
                overrides |= feature;
            }
        }

        Ok((overrides, mask))
    }
}

/// Split a target like `safari15.4` into its engine and version
///
/// `esnext` means "no constraint" and yields `None`.
pub fn parse_target(target: &str) -> CommonResult<Option<(Engine, Version)>> {
    let lower = target.trim().to_ascii_lowercase();
    if lower == "esnext" {
        return Ok(None);
    }

    let split = lower
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(lower.len());
    let (name, version) = lower.split_at(split);

    let engine = Engine::from_name(name).ok_or_else(|| CommonError::unknown_engine(target, name))?;
    let version = version
        .parse::<Version>()
        .map_err(|source| CommonError::invalid_version(target, source))?;

    Ok(Some((engine, version)))
}
