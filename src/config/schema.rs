use serde::Deserialize;

/// Top-level catalog settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/media-catalog/config.toml` or
/// `~/.config/media-catalog/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MEDIA_CATALOG__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which item fields make up a row label, and in what order.
    ///
    /// Example: ["title", "studio", "duration"]
    pub fields: Vec<DisplayField>,
    /// Separator used to join `fields`.
    pub separator: String,
    /// Optional cap on how deep below the root rows are produced.
    pub max_depth: Option<usize>,
    /// Whether the root item itself gets a row.
    pub include_root: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fields: vec![DisplayField::Title, DisplayField::Subtitle],
            separator: " - ".to_string(),
            max_depth: None,
            include_root: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayField {
    Title,
    Subtitle,
    Studio,
    /// Rendered as `M:SS` or `H:MM:SS`; omitted when zero.
    #[serde(alias = "length")]
    Duration,
    #[serde(alias = "link")]
    Url,
}
