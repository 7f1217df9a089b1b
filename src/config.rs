use crate::error::{PlacardError, PlacardResult};

/// RGBA8 color parsed from CSS-style hex notation (`#RGB`, `#RRGGBB`,
/// `#RRGGBBAA`). Also doubles as the brush type carried through text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl std::str::FromStr for Rgba8 {
    type Err = PlacardError;

    fn from_str(s: &str) -> PlacardResult<Self> {
        let bad = || PlacardError::validation(format!("invalid hex color '{s}'"));
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(bad());
        }

        let byte = |range: &str| u8::from_str_radix(range, 16).map_err(|_| bad());
        let short = |c: &str| byte(&format!("{c}{c}"));
        match hex.len() {
            3 => Ok(Self::rgb(
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
            )),
            6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            8 => Ok(Self::new(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => Err(bad()),
        }
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = PlacardError;

    fn try_from(s: String) -> PlacardResult<Self> {
        s.parse()
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> String {
        c.to_string()
    }
}

/// Immutable style and geometry for one render call.
///
/// `font_family` is a CSS-style fallback chain and is a best-effort hint:
/// glyph coverage depends on the fonts available on the host.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    pub text: String,
    pub text_color: Rgba8,
    pub background_color: Rgba8,
    pub width: u32,
    pub height: u32,
    pub font_size_px: u32,
    pub font_family: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            text: "create".to_string(),
            text_color: Rgba8::rgb(0xFF, 0xFF, 0xFF),
            background_color: Rgba8::rgb(0x10, 0xB9, 0x81),
            width: 300,
            height: 300,
            font_size_px: 45,
            font_family: "Segoe UI, system-ui, -apple-system, Helvetica".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> PlacardResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PlacardError::validation("canvas width/height must be > 0"));
        }
        if self.font_size_px == 0 {
            return Err(PlacardError::validation("font_size_px must be > 0"));
        }
        Ok(())
    }
}

/// One batch export: shared style plus one raw line of text per output
/// image. The config's `text` field is ignored; each item supplies its own.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BatchRequest {
    pub items: Vec<String>,
    pub config: RenderConfig,
}

impl BatchRequest {
    pub fn new(items: Vec<String>, config: RenderConfig) -> Self {
        Self { items, config }
    }
}

/// Plain JSON dump of the active field values, shaped like the UI's
/// copy-to-clipboard payload (`fontSize`/`width`/`height` carry a `px`
/// suffix).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    pub text: String,
    pub font_size: String,
    pub text_color: Rgba8,
    pub background_color: Rgba8,
    pub width: String,
    pub height: String,
}

impl FieldSnapshot {
    /// Snapshot `config` with `text` as the active text block (single-mode
    /// text or the raw multi-line batch input).
    pub fn new(text: &str, config: &RenderConfig) -> Self {
        Self {
            text: text.to_string(),
            font_size: format!("{}px", config.font_size_px),
            text_color: config.text_color,
            background_color: config.background_color,
            width: format!("{}px", config.width),
            height: format!("{}px", config.height),
        }
    }

    pub fn to_json(&self) -> PlacardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlacardError::serde(e.to_string()))
    }
}
