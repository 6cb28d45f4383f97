//! Named color lookup tables.

/// Colors whose name is no longer than their hex form, keyed by 24-bit value
///
/// Sorted by value.
pub(crate) static SHORT_COLOR_NAMES: &[(u32, &str)] = &[
    (0x000080, "navy"),
    (0x008000, "green"),
    (0x008080, "teal"),
    (0x4b0082, "indigo"),
    (0x800000, "maroon"),
    (0x800080, "purple"),
    (0x808000, "olive"),
    (0x808080, "gray"),
    (0xa0522d, "sienna"),
    (0xa52a2a, "brown"),
    (0xc0c0c0, "silver"),
    (0xcd853f, "peru"),
    (0xd2b48c, "tan"),
    (0xda70d6, "orchid"),
    (0xdda0dd, "plum"),
    (0xee82ee, "violet"),
    (0xf0e68c, "khaki"),
    (0xf0ffff, "azure"),
    (0xf5deb3, "wheat"),
    (0xf5f5dc, "beige"),
    (0xfa8072, "salmon"),
    (0xfaf0e6, "linen"),
    (0xff0000, "red"),
    (0xff6347, "tomato"),
    (0xff7f50, "coral"),
    (0xffa500, "orange"),
    (0xffc0cb, "pink"),
    (0xffd700, "gold"),
    (0xffe4c4, "bisque"),
    (0xfffafa, "snow"),
    (0xfffff0, "ivory"),
];

/// Colors whose hex form is shorter than their name
///
/// Sorted by name.
pub(crate) static SHORT_COLOR_HEX: &[(&str, &str)] = &[
    ("aliceblue", "#f0f8ff"),
    ("antiquewhite", "#faebd7"),
    ("aquamarine", "#7fffd4"),
    ("black", "#000"),
    ("blanchedalmond", "#ffebcd"),
    ("blueviolet", "#8a2be2"),
    ("burlywood", "#deb887"),
    ("cadetblue", "#5f9ea0"),
    ("chartreuse", "#7fff00"),
    ("chocolate", "#d2691e"),
    ("cornflowerblue", "#6495ed"),
    ("cornsilk", "#fff8dc"),
    ("darkblue", "#00008b"),
    ("darkcyan", "#008b8b"),
    ("darkgoldenrod", "#b8860b"),
    ("darkgray", "#a9a9a9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#a9a9a9"),
    ("darkkhaki", "#bdb76b"),
    ("darkmagenta", "#8b008b"),
    ("darkolivegreen", "#556b2f"),
    ("darkorange", "#ff8c00"),
    ("darkorchid", "#9932cc"),
    ("darksalmon", "#e9967a"),
    ("darkseagreen", "#8fbc8f"),
    ("darkslateblue", "#483d8b"),
    ("darkslategray", "#2f4f4f"),
    ("darkslategrey", "#2f4f4f"),
    ("darkturquoise", "#00ced1"),
    ("darkviolet", "#9400d3"),
    ("deeppink", "#ff1493"),
    ("deepskyblue", "#00bfff"),
    ("dodgerblue", "#1e90ff"),
    ("firebrick", "#b22222"),
    ("floralwhite", "#fffaf0"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#f0f"),
    ("gainsboro", "#dcdcdc"),
    ("ghostwhite", "#f8f8ff"),
    ("goldenrod", "#daa520"),
    ("greenyellow", "#adff2f"),
    ("honeydew", "#f0fff0"),
    ("indianred", "#cd5c5c"),
    ("lavender", "#e6e6fa"),
    ("lavenderblush", "#fff0f5"),
    ("lawngreen", "#7cfc00"),
    ("lemonchiffon", "#fffacd"),
    ("lightblue", "#add8e6"),
    ("lightcoral", "#f08080"),
    ("lightcyan", "#e0ffff"),
    ("lightgoldenrodyellow", "#fafad2"),
    ("lightgray", "#d3d3d3"),
    ("lightgreen", "#90ee90"),
    ("lightgrey", "#d3d3d3"),
    ("lightpink", "#ffb6c1"),
    ("lightsalmon", "#ffa07a"),
    ("lightseagreen", "#20b2aa"),
    ("lightskyblue", "#87cefa"),
    ("lightslategray", "#789"),
    ("lightslategrey", "#789"),
    ("lightsteelblue", "#b0c4de"),
    ("lightyellow", "#ffffe0"),
    ("limegreen", "#32cd32"),
    ("magenta", "#f0f"),
    ("mediumaquamarine", "#66cdaa"),
    ("mediumblue", "#0000cd"),
    ("mediumorchid", "#ba55d3"),
    ("mediumpurple", "#9370db"),
    ("mediumseagreen", "#3cb371"),
    ("mediumslateblue", "#7b68ee"),
    ("mediumspringgreen", "#00fa9a"),
    ("mediumturquoise", "#48d1cc"),
    ("mediumvioletred", "#c71585"),
    ("midnightblue", "#191970"),
    ("mintcream", "#f5fffa"),
    ("mistyrose", "#ffe4e1"),
    ("moccasin", "#ffe4b5"),
    ("navajowhite", "#ffdead"),
    ("olivedrab", "#6b8e23"),
    ("orangered", "#ff4500"),
    ("palegoldenrod", "#eee8aa"),
    ("palegreen", "#98fb98"),
    ("paleturquoise", "#afeeee"),
    ("palevioletred", "#db7093"),
    ("papayawhip", "#ffefd5"),
    ("peachpuff", "#ffdab9"),
    ("powderblue", "#b0e0e6"),
    ("rebeccapurple", "#663399"),
    ("rosybrown", "#bc8f8f"),
    ("royalblue", "#4169e1"),
    ("saddlebrown", "#8b4513"),
    ("sandybrown", "#f4a460"),
    ("seagreen", "#2e8b57"),
    ("seashell", "#fff5ee"),
    ("slateblue", "#6a5acd"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("springgreen", "#00ff7f"),
    ("steelblue", "#4682b4"),
    ("turquoise", "#40e0d0"),
    ("white", "#fff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ff0"),
    ("yellowgreen", "#9acd32"),
];

pub(crate) fn short_name(value: u32) -> Option<&'static str> {
    SHORT_COLOR_NAMES
        .binary_search_by_key(&value, |(key, _)| *key)
        .ok()
        .map(|index| SHORT_COLOR_NAMES[index].1)
}

/// `name` must already be lowercase
pub(crate) fn short_hex(name: &str) -> Option<&'static str> {
    SHORT_COLOR_HEX
        .binary_search_by_key(&name, |(key, _)| *key)
        .ok()
        .map(|index| SHORT_COLOR_HEX[index].1)
}
