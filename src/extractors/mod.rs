use crate::error::MealPlanError;
use scraper::{ElementRef, Html, Selector};

mod speiseplan;

pub use speiseplan::SpeiseplanExtractor;

/// One meal block of the page.
///
/// Every accessor returns `None` when its sub-region is missing instead of
/// failing, so deciding what is required happens in one place (the formatter).
pub trait RawEntry {
    fn category(&self) -> Option<String>;
    fn title(&self) -> Option<String>;
    fn price(&self) -> Option<String>;
    /// Dietary icon codes in document order; empty when the block has none.
    fn icon_codes(&self) -> Vec<String>;
}

pub trait Extractor {
    type Entry<'a>: RawEntry;

    fn extract<'a>(&self, document: &'a Html) -> Result<Vec<Self::Entry<'a>>, MealPlanError>;
}

/// All text below `element`, with runs of whitespace collapsed to one space.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first match of `selector` below `element`, if it has any.
pub(crate) fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}
