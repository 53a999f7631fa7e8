/// Categories with their own icon, in legend order.
pub const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Seezeit-Teller", "🌊🕚"),
    ("hin&weg", "💨"),
    ("KombinierBar", "🖇️"),
    ("Beilagen", "🥗"),
    ("Pasta", "🍝"),
    ("Pasta vegetarisch", "🍝"),
];

/// Icon for a category label; empty for categories without one.
pub fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, icon)| *icon)
        .unwrap_or("")
}

/// Split raw category text into the trimmed label and its icon.
pub fn normalize_category(text: &str) -> (String, &'static str) {
    let label = text.trim();
    (label.to_string(), category_icon(label))
}
