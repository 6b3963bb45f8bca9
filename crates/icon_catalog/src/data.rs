//! Precompiled icon path data generated from the SVG asset folders.

use std::{collections::BTreeMap, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{
    names::{fixed_asset_folder, icon_asset_stem},
    style::IconStyle,
};

/// Default viewBox edge used when no data is known for an icon.
pub const DEFAULT_VIEWBOX_EDGE: u32 = 512;

/// Question-mark glyph rendered when nothing else resolves (512x512 viewBox).
pub const FALLBACK_ICON_PATH: &str = "M256 512A256 256 0 1 0 256 0a256 256 0 1 0 0 512zM169.8 165.3c7.9-22.3 29.1-37.3 52.8-37.3h58.3c34.9 0 63.1 28.3 63.1 63.1c0 22.6-12.1 43.5-31.7 54.8L280 264.4c-.2 13-10.9 23.6-24 23.6c-13.3 0-24-10.7-24-24V250.5c0-8.6 4.6-16.5 12.1-20.8l44.3-25.4c4.7-2.7 7.6-7.7 7.6-13.1c0-8.4-6.8-15.1-15.1-15.1H222.6c-3.4 0-6.4 2.1-7.5 5.3l-.4 1.2c-4.4 12.5-18.2 19-30.6 14.6s-19-18.2-14.6-30.6l.4-1.2zM288 352c0 17.7-14.3 32-32 32s-32-14.3-32-32s14.3-32 32-32s32 14.3 32 32z";

const BUILTIN_ICON_DATA: &str = include_str!("../data/icon-data.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Vector data for one icon variant.
pub struct IconData {
    /// viewBox width.
    pub width: u32,
    /// viewBox height.
    pub height: u32,
    /// First path `d` attribute; empty when the asset must be fetched instead.
    #[serde(default)]
    pub path: String,
    /// Public asset URL the data was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IconData {
    /// Whether inline path data is available.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Placeholder for an icon without precompiled data: default viewBox, no path, and the URL
    /// the markup should be fetched from.
    pub fn placeholder(url: impl Into<String>) -> Self {
        Self {
            width: DEFAULT_VIEWBOX_EDGE,
            height: DEFAULT_VIEWBOX_EDGE,
            path: String::new(),
            url: Some(url.into()),
        }
    }

    /// The built-in question-mark glyph.
    pub fn fallback() -> Self {
        Self {
            width: DEFAULT_VIEWBOX_EDGE,
            height: DEFAULT_VIEWBOX_EDGE,
            path: FALLBACK_ICON_PATH.to_string(),
            url: None,
        }
    }
}

/// Data-table key for `name` in `style`.
///
/// Brand, KPI and app icons live in a single folder and use the bare identifier. Other icons
/// append the style's [`IconStyle::data_key_suffix`] (`Light`, `Regular`).
pub fn icon_data_key(name: &str, style: IconStyle) -> String {
    if fixed_asset_folder(&icon_asset_stem(name)).is_some() {
        return name.to_string();
    }
    format!("{name}{}", style.data_key_suffix())
}

/// Immutable table of generated icon data keyed by [`icon_data_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconDataTable {
    entries: BTreeMap<String, IconData>,
}

impl IconDataTable {
    /// Parses a generated JSON table.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when the document is not a map of icon data records.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Builds a table from explicit entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, IconData)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Raw lookup by composed key.
    pub fn get(&self, key: &str) -> Option<&IconData> {
        self.entries.get(key)
    }

    /// Looks up `name` in `style`, returning only entries that carry inline path data.
    pub fn lookup(&self, name: &str, style: IconStyle) -> Option<&IconData> {
        self.get(&icon_data_key(name, style))
            .filter(|data| data.has_path())
    }

    /// Looks up `name` in `style` including entries without inline path data.
    pub fn lookup_any(&self, name: &str, style: IconStyle) -> Option<&IconData> {
        self.get(&icon_data_key(name, style))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconData)> {
        self.entries.iter().map(|(key, data)| (key.as_str(), data))
    }

    /// Serializes the table as pretty JSON with keys in sorted order.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The table compiled into the crate, parsed on first use.
///
/// A corrupt embedded table degrades to an empty table so rendering falls through to fetched
/// markup and the fallback glyph.
pub fn icon_data() -> &'static IconDataTable {
    static TABLE: OnceLock<IconDataTable> = OnceLock::new();
    TABLE.get_or_init(|| IconDataTable::from_json(BUILTIN_ICON_DATA).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn style_variants_use_suffixed_keys() {
        assert_eq!(icon_data_key("faUser", IconStyle::Light), "faUserLight");
        assert_eq!(icon_data_key("faUser", IconStyle::Regular), "faUserRegular");
        assert_eq!(icon_data_key("faUser", IconStyle::Solid), "faUser");
        assert_eq!(icon_data_key("faGithub", IconStyle::Brands), "faGithub");
    }

    #[test]
    fn single_folder_icons_ignore_the_style_suffix() {
        assert_eq!(icon_data_key("faFacebook", IconStyle::Light), "faFacebook");
        assert_eq!(icon_data_key("faBrandHealth", IconStyle::Light), "faBrandHealth");
        assert_eq!(icon_data_key("faActionIntent", IconStyle::Solid), "faActionIntent");
    }

    #[test]
    fn lookup_skips_entries_without_inline_paths() {
        let table = IconDataTable::from_json(
            r#"{
                "faBell": { "width": 448, "height": 512, "path": "M0 0h1", "url": "/icons/solid/bell.svg" },
                "faBellLight": { "width": 448, "height": 512, "path": "" }
            }"#,
        )
        .expect("parse table");

        let solid = table.lookup("faBell", IconStyle::Solid).expect("solid entry");
        assert_eq!(solid.width, 448);
        assert_eq!(solid.url.as_deref(), Some("/icons/solid/bell.svg"));
        assert_eq!(table.lookup("faBell", IconStyle::Light), None);
        assert!(table.lookup_any("faBell", IconStyle::Light).is_some());
    }

    #[test]
    fn builtin_table_parses_and_has_paths() {
        let table = icon_data();
        assert!(!table.is_empty());
        let user = table.lookup("faUser", IconStyle::Solid).expect("faUser entry");
        assert!(user.path.starts_with('M'));
        assert!(table.lookup("faUser", IconStyle::Light).is_some());
    }

    #[test]
    fn table_serializes_back_to_the_same_shape() {
        let table = IconDataTable::from_entries([(
            "faPlus".to_string(),
            IconData {
                width: 448,
                height: 512,
                path: "M1 1".into(),
                url: None,
            },
        )]);
        let raw = table.to_json_pretty().expect("serialize");
        assert_eq!(IconDataTable::from_json(&raw).expect("reparse"), table);
    }

    #[test]
    fn fallback_glyph_is_a_square_question_mark() {
        let fallback = IconData::fallback();
        assert_eq!((fallback.width, fallback.height), (512, 512));
        assert!(fallback.path.starts_with("M256 512"));
        assert_eq!(IconData::placeholder("/x.svg").url.as_deref(), Some("/x.svg"));
    }
}
