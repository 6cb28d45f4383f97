use serde::{Deserialize, Serialize};

macro_rules! properties {
    ($($variant:ident => $name:literal,)*) => {
        /// Known CSS property names
        ///
        /// Covers every property the compatibility tables and the color
        /// minifier care about, plus the common shorthands. Anything else
        /// maps to [`Property::Unknown`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Property {
            $($variant,)*
            Unknown,
        }

        impl Property {
            /// Every known property, in declaration order
            pub const ALL: &'static [Property] = &[$(Property::$variant,)*];

            /// The canonical lowercase property name
            pub fn name(self) -> &'static str {
                match self {
                    $(Property::$variant => $name,)*
                    Property::Unknown => "",
                }
            }

            /// Look up a property by name, ignoring ASCII case
            pub fn from_name(name: &str) -> Property {
                let lower = name.to_ascii_lowercase();
                match lower.as_str() {
                    $($name => Property::$variant,)*
                    _ => Property::Unknown,
                }
            }
        }
    };
}

properties! {
    Appearance => "appearance",
    BackdropFilter => "backdrop-filter",
    Background => "background",
    BackgroundClip => "background-clip",
    BackgroundColor => "background-color",
    Border => "border",
    BorderBlockEndColor => "border-block-end-color",
    BorderBlockStartColor => "border-block-start-color",
    BorderBottomColor => "border-bottom-color",
    BorderColor => "border-color",
    BorderInlineEndColor => "border-inline-end-color",
    BorderInlineStartColor => "border-inline-start-color",
    BorderLeftColor => "border-left-color",
    BorderRightColor => "border-right-color",
    BorderTopColor => "border-top-color",
    BoxDecorationBreak => "box-decoration-break",
    BoxShadow => "box-shadow",
    CaretColor => "caret-color",
    ClipPath => "clip-path",
    Color => "color",
    ColumnRuleColor => "column-rule-color",
    Display => "display",
    Fill => "fill",
    FloodColor => "flood-color",
    Font => "font",
    FontKerning => "font-kerning",
    Hyphens => "hyphens",
    InitialLetter => "initial-letter",
    LightingColor => "lighting-color",
    Margin => "margin",
    MaskImage => "mask-image",
    MaskOrigin => "mask-origin",
    MaskPosition => "mask-position",
    MaskRepeat => "mask-repeat",
    MaskSize => "mask-size",
    Outline => "outline",
    OutlineColor => "outline-color",
    Padding => "padding",
    Position => "position",
    PrintColorAdjust => "print-color-adjust",
    StopColor => "stop-color",
    Stroke => "stroke",
    TabSize => "tab-size",
    TextDecoration => "text-decoration",
    TextDecorationColor => "text-decoration-color",
    TextDecorationLine => "text-decoration-line",
    TextDecorationSkip => "text-decoration-skip",
    TextEmphasisColor => "text-emphasis-color",
    TextEmphasisPosition => "text-emphasis-position",
    TextEmphasisStyle => "text-emphasis-style",
    TextOrientation => "text-orientation",
    TextShadow => "text-shadow",
    TextSizeAdjust => "text-size-adjust",
    UserSelect => "user-select",
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
