mod category;
mod description;
mod icons;
mod price;

pub use category::{category_icon, normalize_category, CATEGORY_ICONS};
pub use description::format_description;
pub use icons::{dietary_icon, dietary_icons, icon_legend, DIETARY_ICONS};
pub use price::parse_price;

use crate::error::EntryError;
use crate::extractors::RawEntry;
use crate::model::Meal;

/// Normalize every field of a meal block into a [`Meal`].
///
/// Fails with [`EntryError`] when category, title or price is missing, or the
/// price has no amount; callers skip such blocks.
pub fn to_meal(entry: &impl RawEntry, show_allergies: bool) -> Result<Meal, EntryError> {
    let category = entry.category().ok_or(EntryError::MissingField("category"))?;
    let title = entry.title().ok_or(EntryError::MissingField("title"))?;
    let price = entry.price().ok_or(EntryError::MissingField("price"))?;

    let (category, category_icon) = normalize_category(&category);
    let description = format_description(&title, show_allergies);
    if category.is_empty() {
        return Err(EntryError::MissingField("category"));
    }
    if description.is_empty() {
        return Err(EntryError::MissingField("title"));
    }

    Ok(Meal {
        category,
        category_icon: category_icon.to_string(),
        dietary_icons: dietary_icons(&entry.icon_codes()),
        description,
        cost: parse_price(&price)?,
    })
}
