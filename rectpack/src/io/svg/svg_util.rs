use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Rectangle;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Write the id of each rectangle at its center
    #[serde(default = "default_true")]
    pub id_labels: bool,
    ///Write the dimensions and density of the floorplan above the bounding box
    #[serde(default = "default_true")]
    pub header: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            id_labels: true,
            header: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub background_fill: Color,
    /// Fill colors, cycled through by rectangle id
    pub palette: [Color; 10],
    /// Label color on fills brighter than `brightness_threshold`
    pub dark_font: Color,
    /// Label color on all other fills
    pub bright_font: Color,
    pub brightness_threshold: f64,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::CATEGORICAL
    }
}

impl SvgTheme {
    pub const CATEGORICAL: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xFF, 0xFF, 0xFF),
        palette: [
            Color(0x1F, 0x77, 0xB4), // BLUE
            Color(0xFF, 0x7F, 0x0E), // ORANGE
            Color(0x2C, 0xA0, 0x2C), // GREEN
            Color(0xD6, 0x27, 0x28), // RED
            Color(0x94, 0x67, 0xBD), // PURPLE
            Color(0x8C, 0x56, 0x4B), // BROWN
            Color(0xE3, 0x77, 0xC2), // PINK
            Color(0x7F, 0x7F, 0x7F), // GRAY
            Color(0xBC, 0xBD, 0x22), // OLIVE
            Color(0x17, 0xBE, 0xCF), // CYAN
        ],
        dark_font: Color(0x00, 0x00, 0x00),
        bright_font: Color(0xFF, 0xFF, 0xFF),
        brightness_threshold: 0.85,
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        background_fill: Color(0xD3, 0xD3, 0xD3),
        palette: [
            Color(0x63, 0x63, 0x63),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x91, 0x91, 0x91),
            Color(0xA8, 0xA8, 0xA8),
            Color(0xBF, 0xBF, 0xBF),
            Color(0x63, 0x63, 0x63),
            Color(0x7A, 0x7A, 0x7A),
            Color(0x91, 0x91, 0x91),
            Color(0xA8, 0xA8, 0xA8),
            Color(0xBF, 0xBF, 0xBF),
        ],
        dark_font: Color(0x00, 0x00, 0x00),
        bright_font: Color(0xFF, 0xFF, 0xFF),
        brightness_threshold: 0.70,
    };

    /// Fill and label color of rectangle `id`
    pub fn colors(&self, id: usize) -> (Color, Color) {
        let fill = self.palette[id % self.palette.len()];
        let font = match fill.brightness() > self.brightness_threshold {
            true => self.dark_font,
            false => self.bright_font,
        };
        (fill, font)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Parses `#RRGGBB` or `RRGGBB`
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color(r, g, b))
    }

    /// Largest channel value, in [0, 1]
    pub fn brightness(&self) -> f64 {
        self.0.max(self.1).max(self.2) as f64 / 255.0
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color: {s}")))
    }
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}
