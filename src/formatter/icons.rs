use crate::formatter::category::CATEGORY_ICONS;

/// Dietary codes used on the page with their icon and meaning, in legend order.
pub const DIETARY_ICONS: &[(&str, &str, &str)] = &[
    ("B", "⭐", "Mehr Tierwohl"),
    ("F", "🐟", "Fisch"),
    ("G", "🐔", "Geflügel"),
    ("L", "🐑", "Lamm"),
    ("R", "🐄", "Rind"),
    ("Sch", "🐖", "Schwein"),
    ("Vegan", "🌿", "Vegan"),
    ("Veg", "🥕", "Vegetarisch"),
    ("W", "🦌", "Wild"),
];

pub fn dietary_icon(code: &str) -> Option<&'static str> {
    DIETARY_ICONS
        .iter()
        .find(|(known, _, _)| *known == code)
        .map(|(_, icon, _)| *icon)
}

/// Icons for `codes` joined by single spaces, keeping their order.
/// Unknown codes are skipped.
pub fn dietary_icons<S: AsRef<str>>(codes: &[S]) -> String {
    codes
        .iter()
        .filter_map(|code| dietary_icon(code.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Message explaining every icon the bot uses.
pub fn icon_legend() -> String {
    let mut lines = vec!["*Legende*".to_string()];
    lines.extend(
        CATEGORY_ICONS
            .iter()
            .map(|(category, icon)| format!("{icon} {category}")),
    );
    lines.extend(
        DIETARY_ICONS
            .iter()
            .map(|(_, icon, meaning)| format!("{icon} {meaning}")),
    );
    lines.join("\n")
}
