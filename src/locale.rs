//! Administrative-level catalog for spatial axes
//!
//! Spatial columns are bucketed by an administrative-hierarchy tier whose
//! naming depends on the dataset's country and the display language. The
//! validator only tests key membership; the labels are carried for the
//! upstream planning layer.

/// One administrative-hierarchy tier for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminLevel {
    /// Format key used on spatial axes (e.g., `admin_level_4`)
    pub key: &'static str,
    /// Display label in the locale's language
    pub label: &'static str,
}

const TAIWAN_ZH_TW: [AdminLevel; 6] = [
    AdminLevel { key: "admin_level_2", label: "國家" },
    AdminLevel { key: "admin_level_4", label: "直轄市/縣市" },
    AdminLevel { key: "admin_level_7", label: "直轄市的區" },
    AdminLevel { key: "admin_level_8", label: "縣轄市/鄉鎮" },
    AdminLevel { key: "admin_level_9", label: "村/里" },
    AdminLevel { key: "admin_level_10", label: "鄰" },
];

const TAIWAN_ZH_CN: [AdminLevel; 6] = [
    AdminLevel { key: "admin_level_2", label: "国家" },
    AdminLevel { key: "admin_level_4", label: "直辖市/县市" },
    AdminLevel { key: "admin_level_7", label: "直辖市的区" },
    AdminLevel { key: "admin_level_8", label: "县辖市/乡镇" },
    AdminLevel { key: "admin_level_9", label: "村/里" },
    AdminLevel { key: "admin_level_10", label: "邻" },
];

const TAIWAN_EN: [AdminLevel; 6] = [
    AdminLevel { key: "admin_level_2", label: "Country" },
    AdminLevel { key: "admin_level_4", label: "Municipality/County" },
    AdminLevel { key: "admin_level_7", label: "District" },
    AdminLevel { key: "admin_level_8", label: "County-Administered City/Township" },
    AdminLevel { key: "admin_level_9", label: "Village" },
    AdminLevel { key: "admin_level_10", label: "Neighbourhood" },
];

/// Get the admin-level tiers for a (country, language) pair
///
/// Returns `None` when the pair is not in the catalog.
pub fn admin_levels(country: &str, language: &str) -> Option<&'static [AdminLevel]> {
    match (country, language) {
        ("Taiwan", "zh-tw") => Some(&TAIWAN_ZH_TW),
        ("Taiwan", "zh-cn") => Some(&TAIWAN_ZH_CN),
        ("Taiwan", "en") => Some(&TAIWAN_EN),
        _ => None,
    }
}

/// Check whether `key` is a valid admin-level format for the locale
pub fn is_admin_level(country: &str, language: &str, key: &str) -> bool {
    admin_levels(country, language)
        .map(|levels| levels.iter().any(|l| l.key == key))
        .unwrap_or(false)
}
