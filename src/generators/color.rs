use rand::Rng;

use crate::extension::{ColorExtension, Extension};
use crate::helper::{random_element, random_hex};

const SAFE_COLOR_NAMES: &[&str] = &[
    "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
    "gray", "yellow", "fuchsia", "aqua", "white",
];

const ALL_COLOR_NAMES: &[&str] = &[
    "AliceBlue", "AntiqueWhite", "Aqua", "Aquamarine", "Azure", "Beige", "Bisque", "Black",
    "BlanchedAlmond", "Blue", "BlueViolet", "Brown", "BurlyWood", "CadetBlue", "Chartreuse",
    "Chocolate", "Coral", "CornflowerBlue", "Cornsilk", "Crimson", "Cyan", "DarkBlue",
    "DarkCyan", "DarkGoldenRod", "DarkGray", "DarkGreen", "DarkKhaki", "DarkMagenta",
    "DarkOliveGreen", "Darkorange", "DarkOrchid", "DarkRed", "DarkSalmon", "DarkSeaGreen",
    "DarkSlateBlue", "DarkSlateGray", "DarkTurquoise", "DarkViolet", "DeepPink", "DeepSkyBlue",
    "DimGray", "DimGrey", "DodgerBlue", "FireBrick", "FloralWhite", "ForestGreen", "Fuchsia",
    "Gainsboro", "GhostWhite", "Gold", "GoldenRod", "Gray", "Green", "GreenYellow", "HoneyDew",
    "HotPink", "IndianRed", "Indigo", "Ivory", "Khaki", "Lavender", "LavenderBlush",
    "LawnGreen", "LemonChiffon", "LightBlue", "LightCoral", "LightCyan",
    "LightGoldenRodYellow", "LightGray", "LightGreen", "LightPink", "LightSalmon",
    "LightSeaGreen", "LightSkyBlue", "LightSlateGray", "LightSteelBlue", "LightYellow", "Lime",
    "LimeGreen", "Linen", "Magenta", "Maroon", "MediumAquaMarine", "MediumBlue", "MediumOrchid",
    "MediumPurple", "MediumSeaGreen", "MediumSlateBlue", "MediumSpringGreen",
    "MediumTurquoise", "MediumVioletRed", "MidnightBlue", "MintCream", "MistyRose", "Moccasin",
    "NavajoWhite", "Navy", "OldLace", "Olive", "OliveDrab", "Orange", "OrangeRed", "Orchid",
    "PaleGoldenRod", "PaleGreen", "PaleTurquoise", "PaleVioletRed", "PapayaWhip", "PeachPuff",
    "Peru", "Pink", "Plum", "PowderBlue", "Purple", "Red", "RosyBrown", "RoyalBlue",
    "SaddleBrown", "Salmon", "SandyBrown", "SeaGreen", "SeaShell", "Sienna", "Silver",
    "SkyBlue", "SlateBlue", "SlateGray", "Snow", "SpringGreen", "SteelBlue", "Tan", "Teal",
    "Thistle", "Tomato", "Turquoise", "Violet", "Wheat", "White", "WhiteSmoke", "Yellow",
    "YellowGreen",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct Color;

impl Color {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for Color {}

impl ColorExtension for Color {
    fn hex_color(&self) -> String {
        let [r, g, b] = self.rgb_color_as_array();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    fn safe_hex_color(&self) -> String {
        let short = random_hex(3);
        let mut color = String::with_capacity(7);
        color.push('#');
        for c in short.chars() {
            color.push(c);
            color.push(c);
        }
        color
    }

    fn rgb_color_as_array(&self) -> [u8; 3] {
        rand::thread_rng().gen()
    }

    fn rgb_color(&self) -> String {
        let [r, g, b] = self.rgb_color_as_array();
        format!("{r},{g},{b}")
    }

    fn rgb_css_color(&self) -> String {
        format!("rgb({})", self.rgb_color())
    }

    fn rgba_css_color(&self) -> String {
        let alpha = rand::thread_rng().gen_range(0..=10) as f32 / 10.0;
        format!("rgba({},{alpha:.1})", self.rgb_color())
    }

    fn safe_color_name(&self) -> &'static str {
        random_element(SAFE_COLOR_NAMES)
    }

    fn color_name(&self) -> &'static str {
        random_element(ALL_COLOR_NAMES)
    }

    fn hsl_color(&self) -> String {
        let [h, s, l] = self.hsl_color_as_array();
        format!("{h},{s},{l}")
    }

    fn hsl_color_as_array(&self) -> [u16; 3] {
        let mut rng = rand::thread_rng();
        [rng.gen_range(0..=360), rng.gen_range(0..=100), rng.gen_range(0..=100)]
    }
}
