use crate::color::canonicalize_color;
use stylegate_ast::{Declaration, Property};
use tracing::{debug, trace};

/// Properties whose whole value is a single color
pub const COLOR_PROPERTIES: &[Property] = &[
    Property::BackgroundColor,
    Property::BorderBlockEndColor,
    Property::BorderBlockStartColor,
    Property::BorderBottomColor,
    Property::BorderColor,
    Property::BorderInlineEndColor,
    Property::BorderInlineStartColor,
    Property::BorderLeftColor,
    Property::BorderRightColor,
    Property::BorderTopColor,
    Property::CaretColor,
    Property::Color,
    Property::ColumnRuleColor,
    Property::FloodColor,
    Property::LightingColor,
    Property::OutlineColor,
    Property::StopColor,
    Property::TextDecorationColor,
    Property::TextEmphasisColor,
];

pub fn is_color_property(property: Property) -> bool {
    COLOR_PROPERTIES.contains(&property)
}

/// Minify the color values of declarations in-place
///
/// Only single-token values are rewritten; shorthands like
/// `border: 1px solid #ffffff` are left alone. Returns the number of
/// declarations that changed.
pub fn process_declarations(decls: &mut [Declaration], minify: bool) -> usize {
    if !minify {
        return 0;
    }

    let mut rewritten = 0;
    for decl in decls.iter_mut() {
        if !is_color_property(decl.property) {
            continue;
        }

        if let [token] = decl.value.as_mut_slice() {
            let canonical = canonicalize_color(token);
            if canonical != *token {
                trace!(property = %decl.property, from = %token, to = %canonical, "Minified color");
                *token = canonical;
                rewritten += 1;
            }
        }
    }

    debug!(declarations = decls.len(), rewritten, "Processed color declarations");
    rewritten
}
