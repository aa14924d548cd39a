// SPDX-License-Identifier: MPL-2.0
//! Notification categories and the icon each one renders.

/// Kind of notification. Selects the icon drawn on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Success,
    Error,
    Warning,
}

impl Category {
    /// Every category, in the order icons are loaded.
    pub const ALL: [Category; 3] = [Category::Success, Category::Error, Category::Warning];

    /// Key under which the category's icon is cached.
    #[must_use]
    pub fn icon_key(self) -> &'static str {
        match self {
            Category::Success => "success.png",
            Category::Error => "error.png",
            Category::Warning => "warning.png",
        }
    }

    /// Embedded vector source the icon is rasterized from.
    #[must_use]
    pub fn asset_file(self) -> &'static str {
        match self {
            Category::Success => "success.svg",
            Category::Error => "error.svg",
            Category::Warning => "warning.svg",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Ok(Category::Success),
            "error" => Ok(Category::Error),
            "warning" => Ok(Category::Warning),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_keys_match_category_names() {
        assert_eq!(Category::Success.icon_key(), "success.png");
        assert_eq!(Category::Error.icon_key(), "error.png");
        assert_eq!(Category::Warning.icon_key(), "warning.png");
    }

    #[test]
    fn icon_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.icon_key()).collect();
        assert_eq!(keys.len(), Category::ALL.len());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Warning".parse::<Category>(), Ok(Category::Warning));
        assert_eq!("ERROR".parse::<Category>(), Ok(Category::Error));
        assert!("info".parse::<Category>().is_err());
    }
}
