//! Presentation lookups keyed by the free-text category names the model returns.
//!
//! Lookups are lenient: an unrecognised name degrades to the default icon and
//! colour rather than failing. The prompt only ever asks for `KNOWN_CATEGORIES`.

use serde::{Deserialize, Serialize};

/// Icon handles understood by the renderer (lucide icon names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "cog")]
    Cog,
    #[serde(rename = "bar-chart-3")]
    BarChart3,
    #[serde(rename = "file-text")]
    FileText,
    #[serde(rename = "brain")]
    Brain,
    #[serde(rename = "message-square")]
    MessageSquare,
    #[serde(rename = "bot")]
    Bot,
    #[serde(rename = "target")]
    Target,
    #[serde(rename = "calendar")]
    Calendar,
    #[serde(rename = "lightbulb")]
    Lightbulb,
    #[serde(rename = "code")]
    Code,
    #[serde(rename = "zap")]
    Zap,
    #[serde(rename = "sparkles")]
    Sparkles,
}

pub const DEFAULT_CATEGORY_ICON: Icon = Icon::Zap;
/// Every application card carries the same icon.
pub const APPLICATION_ICON: Icon = Icon::Sparkles;
pub const DEFAULT_CATEGORY_COLOR: &str = "from-gray-500 to-slate-600";

pub const KNOWN_CATEGORIES: [&str; 10] = [
    "Automatyzacja Procesów",
    "Analiza i Raporty",
    "Tworzenie Treści",
    "Research i Analiza",
    "Komunikacja",
    "Asystent Biznesowy",
    "Marketing i Sprzedaż",
    "Zarządzanie Projektami",
    "Rozwój Osobisty",
    "Technologia",
];

/// Returns the icon for a category name, or `DEFAULT_CATEGORY_ICON`.
pub fn icon_for(category: &str) -> Icon {
    match category {
        "Automatyzacja Procesów" => Icon::Cog,
        "Analiza i Raporty" => Icon::BarChart3,
        "Tworzenie Treści" => Icon::FileText,
        "Research i Analiza" => Icon::Brain,
        "Komunikacja" => Icon::MessageSquare,
        "Asystent Biznesowy" => Icon::Bot,
        "Marketing i Sprzedaż" => Icon::Target,
        "Zarządzanie Projektami" => Icon::Calendar,
        "Rozwój Osobisty" => Icon::Lightbulb,
        "Technologia" => Icon::Code,
        _ => DEFAULT_CATEGORY_ICON,
    }
}

/// Returns the gradient theme for a category name, or `DEFAULT_CATEGORY_COLOR`.
pub fn color_for(category: &str) -> &'static str {
    match category {
        "Automatyzacja Procesów" => "from-blue-500 to-cyan-500",
        "Analiza i Raporty" => "from-green-500 to-emerald-500",
        "Tworzenie Treści" => "from-purple-500 to-pink-500",
        "Research i Analiza" => "from-orange-500 to-red-500",
        "Komunikacja" => "from-indigo-500 to-blue-500",
        "Asystent Biznesowy" => "from-teal-500 to-green-500",
        "Marketing i Sprzedaż" => "from-pink-500 to-rose-500",
        "Zarządzanie Projektami" => "from-yellow-500 to-orange-500",
        "Rozwój Osobisty" => "from-violet-500 to-purple-500",
        "Technologia" => "from-cyan-500 to-blue-600",
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_categories_have_dedicated_icons() {
        for name in KNOWN_CATEGORIES {
            assert_ne!(icon_for(name), DEFAULT_CATEGORY_ICON, "{name}");
        }
    }

    #[test]
    fn test_known_categories_have_distinct_colors() {
        let colors: HashSet<&str> = KNOWN_CATEGORIES.iter().map(|n| color_for(n)).collect();
        assert_eq!(colors.len(), KNOWN_CATEGORIES.len());
        assert!(!colors.contains(DEFAULT_CATEGORY_COLOR));
    }

    #[test]
    fn test_unknown_category_falls_back_to_defaults() {
        assert_eq!(icon_for("Kategoria spoza listy"), Icon::Zap);
        assert_eq!(color_for("Kategoria spoza listy"), DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(icon_for("technologia"), DEFAULT_CATEGORY_ICON);
    }

    #[test]
    fn test_icon_serializes_as_lucide_name() {
        assert_eq!(
            serde_json::to_string(&Icon::BarChart3).unwrap(),
            r#""bar-chart-3""#
        );
        assert_eq!(serde_json::to_string(&Icon::Sparkles).unwrap(), r#""sparkles""#);
    }
}
