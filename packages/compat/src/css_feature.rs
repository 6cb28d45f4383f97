//! CSS language features gated on engine support.

use crate::constraints::ConstraintSet;
use crate::engine::Engine;
use crate::version::{is_version_supported, VersionRange};
use tracing::debug;

bitflags::bitflags! {
    /// Set of optional CSS features
    ///
    /// Bit assignments are part of the configuration surface. New features
    /// get new bits at the end; existing bits never move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CssFeature: u8 {
        /// `#rrggbbaa` and `#rgba` colors
        const HEX_RGBA = 1 << 0;
        /// Output is an inline `style` attribute rather than a style sheet
        const INLINE_STYLE = 1 << 1;
        /// `inset` and the logical inset properties
        const INSET_PROPERTY = 1 << 2;
        /// `:is()`
        const IS_PSEUDO_CLASS = 1 << 3;
        /// Space-separated `rgb()`/`hsl()` with slash alpha
        const MODERN_RGB_HSL = 1 << 4;
        /// Nested style rules
        const NESTING = 1 << 5;
        /// The `rebeccapurple` keyword
        const REBECCA_PURPLE = 1 << 6;
    }
}

impl CssFeature {
    /// Features that only the user can turn on or off
    pub const USER_CONTROLLED: CssFeature = CssFeature::INLINE_STYLE;

    /// Stable configuration keys, one per feature bit
    pub const KEYS: &'static [(&'static str, CssFeature)] = &[
        ("hex-rgba", CssFeature::HEX_RGBA),
        ("inline-style", CssFeature::INLINE_STYLE),
        ("inset-property", CssFeature::INSET_PROPERTY),
        ("is-pseudo-class", CssFeature::IS_PSEUDO_CLASS),
        ("modern-rgb-hsl", CssFeature::MODERN_RGB_HSL),
        ("nesting", CssFeature::NESTING),
        ("rebecca-purple", CssFeature::REBECCA_PURPLE),
    ];

    pub fn from_key(key: &str) -> Option<CssFeature> {
        CssFeature::KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, feature)| *feature)
    }

    /// Configuration key of a single-bit feature
    pub fn key(self) -> Option<&'static str> {
        CssFeature::KEYS
            .iter()
            .find(|(_, feature)| *feature == self)
            .map(|(name, _)| *name)
    }

    pub fn has(self, feature: CssFeature) -> bool {
        self.intersects(feature)
    }

    /// Replace the bits selected by `mask` with the same bits of `overrides`
    pub fn apply_overrides(self, overrides: CssFeature, mask: CssFeature) -> CssFeature {
        (self & !mask) | (overrides & mask)
    }
}

/// Support data for one feature: which engines have it, and from when
#[derive(Debug, Clone, Copy)]
pub struct FeatureEntry {
    pub feature: CssFeature,
    pub engines: &'static [(Engine, &'static [VersionRange])],
}

impl FeatureEntry {
    /// `None` when the engine has no entry at all, as opposed to an empty list
    pub fn ranges(&self, engine: Engine) -> Option<&'static [VersionRange]> {
        self.engines
            .iter()
            .find(|(candidate, _)| *candidate == engine)
            .map(|(_, ranges)| *ranges)
    }
}

/// Feature x engine compatibility matrix
#[derive(Debug, Clone, Copy)]
pub struct FeatureTable {
    entries: &'static [FeatureEntry],
}

impl FeatureTable {
    pub const fn new(entries: &'static [FeatureEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [FeatureEntry] {
        self.entries
    }

    pub fn ranges(&self, feature: CssFeature, engine: Engine) -> Option<&'static [VersionRange]> {
        self.entries
            .iter()
            .find(|entry| entry.feature == feature)
            .and_then(|entry| entry.ranges(engine))
    }

    /// Every feature that at least one targeted browser lacks
    pub fn unsupported_features(&self, constraints: &ConstraintSet) -> CssFeature {
        let mut unsupported = CssFeature::empty();

        for entry in self.entries {
            if entry.feature.intersects(CssFeature::USER_CONTROLLED) {
                continue;
            }

            for (engine, version) in constraints.browsers() {
                let supported = entry
                    .ranges(engine)
                    .map_or(false, |ranges| is_version_supported(ranges, version));

                if !supported {
                    debug!(feature = ?entry.feature, %engine, %version, "CSS feature unsupported by target");
                    unsupported |= entry.feature;
                }
            }
        }

        unsupported
    }
}

const fn since(major: u32, minor: u32) -> VersionRange {
    VersionRange::starting_at(major, minor, 0)
}

static CSS_FEATURE_ENTRIES: &[FeatureEntry] = &[
    FeatureEntry {
        feature: CssFeature::HEX_RGBA,
        engines: &[
            (Engine::Chrome, &[since(62, 0)]),
            (Engine::Edge, &[since(79, 0)]),
            (Engine::Firefox, &[since(49, 0)]),
            (Engine::Ios, &[since(9, 3)]),
            (Engine::Opera, &[since(49, 0)]),
            (Engine::Safari, &[since(9, 1)]),
        ],
    },
    FeatureEntry {
        feature: CssFeature::INSET_PROPERTY,
        engines: &[
            (Engine::Chrome, &[since(87, 0)]),
            (Engine::Edge, &[since(87, 0)]),
            (Engine::Firefox, &[since(66, 0)]),
            (Engine::Ios, &[since(14, 5)]),
            (Engine::Opera, &[since(73, 0)]),
            (Engine::Safari, &[since(14, 1)]),
        ],
    },
    FeatureEntry {
        feature: CssFeature::IS_PSEUDO_CLASS,
        engines: &[
            (Engine::Chrome, &[since(88, 0)]),
            (Engine::Edge, &[since(88, 0)]),
            (Engine::Firefox, &[since(78, 0)]),
            (Engine::Ios, &[since(14, 0)]),
            (Engine::Opera, &[since(75, 0)]),
            (Engine::Safari, &[since(14, 0)]),
        ],
    },
    FeatureEntry {
        feature: CssFeature::MODERN_RGB_HSL,
        engines: &[
            (Engine::Chrome, &[since(66, 0)]),
            (Engine::Edge, &[since(79, 0)]),
            (Engine::Firefox, &[since(52, 0)]),
            (Engine::Ios, &[since(12, 2)]),
            (Engine::Opera, &[since(53, 0)]),
            (Engine::Safari, &[since(12, 1)]),
        ],
    },
    FeatureEntry {
        feature: CssFeature::NESTING,
        engines: &[(Engine::Chrome, &[since(112, 0)])],
    },
    FeatureEntry {
        feature: CssFeature::REBECCA_PURPLE,
        engines: &[
            (Engine::Chrome, &[since(38, 0)]),
            (Engine::Edge, &[since(12, 0)]),
            (Engine::Firefox, &[since(33, 0)]),
            (Engine::Ie, &[since(11, 0)]),
            (Engine::Ios, &[since(8, 0)]),
            (Engine::Opera, &[since(25, 0)]),
            (Engine::Safari, &[since(9, 0)]),
        ],
    },
];

/// Built-in compatibility data
pub static CSS_FEATURE_TABLE: FeatureTable = FeatureTable::new(CSS_FEATURE_ENTRIES);

/// Every feature that at least one targeted browser lacks, per the built-in table
pub fn unsupported_css_features(constraints: &ConstraintSet) -> CssFeature {
    CSS_FEATURE_TABLE.unsupported_features(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    fn targets(items: &[(Engine, u32, u32)]) -> ConstraintSet {
        items
            .iter()
            .map(|&(engine, major, minor)| (engine, Version::new(major, minor, 0)))
            .collect()
    }

    #[test]
    fn test_keys_cover_every_bit() {
        assert_eq!(CssFeature::KEYS.len(), 7);
        let all = CssFeature::KEYS
            .iter()
            .fold(CssFeature::empty(), |acc, (_, feature)| acc | *feature);
        assert_eq!(all, CssFeature::all());
        assert_eq!(CssFeature::from_key("nesting"), Some(CssFeature::NESTING));
        assert_eq!(CssFeature::from_key("rebecca-purple"), Some(CssFeature::REBECCA_PURPLE));
        assert_eq!(CssFeature::from_key("Nesting"), None);
        assert_eq!(CssFeature::HEX_RGBA.key(), Some("hex-rgba"));
        assert_eq!((CssFeature::HEX_RGBA | CssFeature::NESTING).key(), None);
    }

    #[test]
    fn test_bit_assignments_are_stable() {
        assert_eq!(CssFeature::HEX_RGBA.bits(), 1);
        assert_eq!(CssFeature::INLINE_STYLE.bits(), 2);
        assert_eq!(CssFeature::INSET_PROPERTY.bits(), 4);
        assert_eq!(CssFeature::IS_PSEUDO_CLASS.bits(), 8);
        assert_eq!(CssFeature::MODERN_RGB_HSL.bits(), 16);
        assert_eq!(CssFeature::NESTING.bits(), 32);
        assert_eq!(CssFeature::REBECCA_PURPLE.bits(), 64);
    }

    #[test]
    fn test_apply_overrides() {
        let base = CssFeature::HEX_RGBA | CssFeature::NESTING;
        let mask = CssFeature::NESTING | CssFeature::INLINE_STYLE;
        let overrides = CssFeature::INLINE_STYLE;

        let result = base.apply_overrides(overrides, mask);
        assert_eq!(result, CssFeature::HEX_RGBA | CssFeature::INLINE_STYLE);

        // Bits outside the mask are never touched
        assert_eq!(base.apply_overrides(CssFeature::all(), CssFeature::empty()), base);
    }

    #[test]
    fn test_has() {
        let features = CssFeature::HEX_RGBA | CssFeature::NESTING;
        assert!(features.has(CssFeature::NESTING));
        assert!(!features.has(CssFeature::IS_PSEUDO_CLASS));
    }

    #[test]
    fn test_old_chrome() {
        let unsupported = unsupported_css_features(&targets(&[(Engine::Chrome, 30, 0)]));
        assert!(unsupported.has(CssFeature::REBECCA_PURPLE));
        assert!(unsupported.has(CssFeature::HEX_RGBA));
        assert!(!unsupported.has(CssFeature::INLINE_STYLE));
    }

    #[test]
    fn test_modern_chrome_supports_everything() {
        let unsupported = unsupported_css_features(&targets(&[(Engine::Chrome, 120, 0)]));
        assert_eq!(unsupported, CssFeature::empty());
    }

    #[test]
    fn test_missing_engine_entry_is_unsupported() {
        // Nesting has no Firefox entry at all
        let unsupported = unsupported_css_features(&targets(&[(Engine::Firefox, 200, 0)]));
        assert_eq!(unsupported, CssFeature::NESTING);
    }

    #[test]
    fn test_weakest_link() {
        let unsupported = unsupported_css_features(&targets(&[
            (Engine::Chrome, 120, 0),
            (Engine::Safari, 14, 0),
        ]));
        // Safari 14.0 predates inset (14.1) and modern nesting
        assert!(unsupported.has(CssFeature::INSET_PROPERTY));
        assert!(unsupported.has(CssFeature::NESTING));
        assert!(!unsupported.has(CssFeature::IS_PSEUDO_CLASS));
        assert!(!unsupported.has(CssFeature::HEX_RGBA));
    }

    #[test]
    fn test_minor_version_boundary() {
        let at = unsupported_css_features(&targets(&[(Engine::Ios, 9, 3)]));
        assert!(!at.has(CssFeature::HEX_RGBA));

        let before = unsupported_css_features(&targets(&[(Engine::Ios, 9, 2)]));
        assert!(before.has(CssFeature::HEX_RGBA));
    }

    #[test]
    fn test_non_browser_targets_are_ignored() {
        assert_eq!(unsupported_css_features(&ConstraintSet::new()), CssFeature::empty());
        let unsupported = unsupported_css_features(&targets(&[
            (Engine::Node, 8, 0),
            (Engine::Es, 2015, 0),
        ]));
        assert_eq!(unsupported, CssFeature::empty());
    }

    #[test]
    fn test_user_controlled_feature_is_skipped() {
        const ENTRIES: &[FeatureEntry] = &[
            FeatureEntry {
                feature: CssFeature::INLINE_STYLE,
                engines: &[],
            },
            FeatureEntry {
                feature: CssFeature::NESTING,
                engines: &[(Engine::Chrome, &[])],
            },
        ];
        let table = FeatureTable::new(ENTRIES);

        let unsupported = table.unsupported_features(&targets(&[(Engine::Chrome, 200, 0)]));
        assert_eq!(unsupported, CssFeature::NESTING);
    }

    #[test]
    fn test_absent_engine_differs_from_empty_list() {
        const ENTRIES: &[FeatureEntry] = &[FeatureEntry {
            feature: CssFeature::NESTING,
            engines: &[(Engine::Chrome, &[])],
        }];
        let table = FeatureTable::new(ENTRIES);

        assert_eq!(table.ranges(CssFeature::NESTING, Engine::Chrome), Some(&[][..]));
        assert_eq!(table.ranges(CssFeature::NESTING, Engine::Safari), None);
        assert_eq!(table.ranges(CssFeature::HEX_RGBA, Engine::Chrome), None);
    }

    #[test]
    fn test_every_table_range_list_is_ordered() {
        for entry in CSS_FEATURE_TABLE.entries() {
            for (_, ranges) in entry.engines {
                assert!(ranges.windows(2).all(|pair| pair[0].start < pair[1].start));
            }
        }
    }
}
