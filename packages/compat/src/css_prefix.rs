//! Vendor prefixes still required by targeted engines.

use crate::constraints::ConstraintSet;
use crate::engine::Engine;
use crate::version::Version;
use std::collections::HashMap;
use stylegate_ast::Property;
use tracing::debug;

bitflags::bitflags! {
    /// Set of vendor prefix families
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CssPrefix: u8 {
        /// `-webkit-`, used by Blink and WebKit
        const WEBKIT = 1 << 0;
        const MOZ = 1 << 1;
        const MS = 1 << 2;
        /// Presto-era Opera
        const O = 1 << 3;
    }
}

impl CssPrefix {
    pub const NONE: CssPrefix = CssPrefix::empty();

    /// Text of a single-bit prefix, e.g. `-webkit-`
    pub fn text(self) -> Option<&'static str> {
        if self == CssPrefix::WEBKIT {
            Some("-webkit-")
        } else if self == CssPrefix::MOZ {
            Some("-moz-")
        } else if self == CssPrefix::MS {
            Some("-ms-")
        } else if self == CssPrefix::O {
            Some("-o-")
        } else {
            None
        }
    }

    /// Prefixed variants of `property`, in bit order
    ///
    /// These are printed ahead of the standard declaration.
    pub fn prefixed_names(self, property: Property) -> Vec<String> {
        self.iter()
            .filter_map(|prefix| prefix.text())
            .map(|text| format!("{}{}", text, property.name()))
            .collect()
    }
}

/// One engine's prefix requirement for a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixEntry {
    pub engine: Engine,
    pub prefix: CssPrefix,
    /// First version that accepts the bare property, if any does
    pub without_prefix: Option<Version>,
}

impl PrefixEntry {
    /// Whether a target at `version` (or newer) still needs the prefix
    ///
    /// Later versions sometimes went back to needing a prefix after an engine
    /// switch (Edge moving to Chromium). Targets mean "this version or newer",
    /// so an older target keeps its prefix regardless.
    pub fn is_required(&self, version: Version) -> bool {
        self.without_prefix.map_or(true, |cutoff| cutoff > version)
    }
}

/// Property x engine prefix matrix
#[derive(Debug, Clone, Copy)]
pub struct PrefixTable {
    entries: &'static [(Property, &'static [PrefixEntry])],
}

impl PrefixTable {
    pub const fn new(entries: &'static [(Property, &'static [PrefixEntry])]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(Property, &'static [PrefixEntry])] {
        self.entries
    }

    /// Prefixes each property needs to work in every targeted browser
    ///
    /// Properties needing no prefix are left out of the map.
    pub fn prefixes_by_property(&self, constraints: &ConstraintSet) -> HashMap<Property, CssPrefix> {
        let mut result = HashMap::new();

        for (property, items) in self.entries {
            let mut prefixes = CssPrefix::NONE;

            for (engine, version) in constraints.browsers() {
                for item in items.iter().filter(|item| item.engine == engine) {
                    if item.is_required(version) {
                        prefixes |= item.prefix;
                    }
                }
            }

            if prefixes != CssPrefix::NONE {
                debug!(%property, ?prefixes, "Property needs vendor prefixes");
                result.insert(*property, prefixes);
            }
        }

        result
    }
}

const fn webkit(engine: Engine) -> PrefixEntry {
    PrefixEntry {
        engine,
        prefix: CssPrefix::WEBKIT,
        without_prefix: None,
    }
}

const fn webkit_until(engine: Engine, major: u32, minor: u32) -> PrefixEntry {
    PrefixEntry {
        engine,
        prefix: CssPrefix::WEBKIT,
        without_prefix: Some(Version::new(major, minor, 0)),
    }
}

const fn moz_until(major: u32, minor: u32) -> PrefixEntry {
    PrefixEntry {
        engine: Engine::Firefox,
        prefix: CssPrefix::MOZ,
        without_prefix: Some(Version::new(major, minor, 0)),
    }
}

const fn ms(engine: Engine) -> PrefixEntry {
    PrefixEntry {
        engine,
        prefix: CssPrefix::MS,
        without_prefix: None,
    }
}

const fn ms_until(engine: Engine, major: u32, minor: u32) -> PrefixEntry {
    PrefixEntry {
        engine,
        prefix: CssPrefix::MS,
        without_prefix: Some(Version::new(major, minor, 0)),
    }
}

const fn o_until(major: u32, minor: u32) -> PrefixEntry {
    PrefixEntry {
        engine: Engine::Opera,
        prefix: CssPrefix::O,
        without_prefix: Some(Version::new(major, minor, 0)),
    }
}

// Shared by the mask-* longhands
const MASK_PREFIXES: &[PrefixEntry] = &[
    webkit(Engine::Chrome),
    webkit(Engine::Edge),
    webkit_until(Engine::Ios, 15, 4),
    webkit(Engine::Opera),
    webkit_until(Engine::Safari, 15, 4),
];

const TEXT_DECORATION_PREFIXES: &[PrefixEntry] = &[
    moz_until(36, 0),
    webkit_until(Engine::Ios, 12, 2),
    webkit_until(Engine::Safari, 12, 1),
];

const TEXT_EMPHASIS_PREFIXES: &[PrefixEntry] = &[
    webkit_until(Engine::Chrome, 99, 0),
    webkit_until(Engine::Edge, 99, 0),
    webkit_until(Engine::Opera, 85, 0),
];

static CSS_PREFIX_ENTRIES: &[(Property, &[PrefixEntry])] = &[
    (
        Property::Appearance,
        &[
            webkit_until(Engine::Chrome, 84, 0),
            webkit_until(Engine::Edge, 84, 0),
            moz_until(80, 4),
            webkit_until(Engine::Ios, 15, 4),
            webkit_until(Engine::Opera, 73, 4),
            webkit_until(Engine::Safari, 15, 4),
        ],
    ),
    (
        Property::BackdropFilter,
        &[webkit(Engine::Ios), webkit(Engine::Safari)],
    ),
    (
        Property::BackgroundClip,
        &[
            webkit(Engine::Chrome),
            webkit(Engine::Edge),
            webkit_until(Engine::Ios, 14, 0),
            webkit(Engine::Opera),
            webkit_until(Engine::Safari, 14, 0),
        ],
    ),
    (
        Property::BoxDecorationBreak,
        &[
            webkit(Engine::Chrome),
            webkit(Engine::Edge),
            webkit(Engine::Ios),
            webkit(Engine::Opera),
            webkit(Engine::Safari),
        ],
    ),
    (
        Property::ClipPath,
        &[
            webkit_until(Engine::Chrome, 55, 0),
            webkit_until(Engine::Ios, 13, 0),
            webkit_until(Engine::Opera, 42, 0),
            webkit_until(Engine::Safari, 13, 1),
        ],
    ),
    (
        Property::FontKerning,
        &[
            webkit_until(Engine::Chrome, 33, 0),
            webkit_until(Engine::Ios, 12, 0),
            webkit_until(Engine::Opera, 20, 0),
            webkit_until(Engine::Safari, 9, 1),
        ],
    ),
    (
        Property::Hyphens,
        &[
            ms_until(Engine::Edge, 79, 0),
            moz_until(43, 0),
            ms(Engine::Ie),
            webkit(Engine::Ios),
            webkit(Engine::Safari),
        ],
    ),
    (
        Property::InitialLetter,
        &[webkit(Engine::Ios), webkit(Engine::Safari)],
    ),
    (Property::MaskImage, MASK_PREFIXES),
    (Property::MaskOrigin, MASK_PREFIXES),
    (Property::MaskPosition, MASK_PREFIXES),
    (Property::MaskRepeat, MASK_PREFIXES),
    (Property::MaskSize, MASK_PREFIXES),
    (
        Property::Position,
        &[
            webkit_until(Engine::Ios, 13, 0),
            webkit_until(Engine::Safari, 13, 0),
        ],
    ),
    (
        Property::PrintColorAdjust,
        &[
            webkit(Engine::Chrome),
            webkit(Engine::Edge),
            webkit(Engine::Opera),
            webkit_until(Engine::Safari, 15, 4),
        ],
    ),
    (Property::TabSize, &[moz_until(91, 0), o_until(15, 0)]),
    (Property::TextDecorationColor, TEXT_DECORATION_PREFIXES),
    (Property::TextDecorationLine, TEXT_DECORATION_PREFIXES),
    (
        Property::TextDecorationSkip,
        &[
            webkit_until(Engine::Ios, 12, 2),
            webkit_until(Engine::Safari, 12, 1),
        ],
    ),
    (Property::TextEmphasisColor, TEXT_EMPHASIS_PREFIXES),
    (Property::TextEmphasisPosition, TEXT_EMPHASIS_PREFIXES),
    (Property::TextEmphasisStyle, TEXT_EMPHASIS_PREFIXES),
    (
        Property::TextOrientation,
        &[webkit_until(Engine::Safari, 14, 0)],
    ),
    (
        Property::TextSizeAdjust,
        &[ms_until(Engine::Edge, 79, 0), webkit(Engine::Ios)],
    ),
    (
        Property::UserSelect,
        &[
            webkit_until(Engine::Chrome, 54, 0),
            ms_until(Engine::Edge, 79, 0),
            moz_until(69, 0),
            ms(Engine::Ie),
            webkit(Engine::Ios),
            webkit_until(Engine::Opera, 41, 0),
            webkit(Engine::Safari),
        ],
    ),
];

/// Built-in prefix data
pub static CSS_PREFIX_TABLE: PrefixTable = PrefixTable::new(CSS_PREFIX_ENTRIES);

/// Prefixes each property needs for the given targets, per the built-in table
pub fn css_prefix_data(constraints: &ConstraintSet) -> HashMap<Property, CssPrefix> {
    CSS_PREFIX_TABLE.prefixes_by_property(constraints)
}
