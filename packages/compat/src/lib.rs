//! Engine compatibility data for CSS output.
//!
//! Given the engines a build targets, answers two questions: which optional
//! CSS features may be emitted as-is ([`unsupported_css_features`]) and which
//! properties need vendor-prefixed copies ([`css_prefix_data`]). Both are pure
//! lookups over static tables.

pub mod constraints;
pub mod css_feature;
pub mod css_prefix;
pub mod engine;
pub mod version;

pub use constraints::ConstraintSet;
pub use css_feature::{
    unsupported_css_features, CssFeature, FeatureEntry, FeatureTable, CSS_FEATURE_TABLE,
};
pub use css_prefix::{css_prefix_data, CssPrefix, PrefixEntry, PrefixTable, CSS_PREFIX_TABLE};
pub use engine::Engine;
pub use version::{compare_versions, is_version_supported, Version, VersionParseError, VersionRange};
