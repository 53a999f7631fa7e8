use crate::error::MealPlanError;
use crate::extractors::{element_text, select_text, Extractor, RawEntry};
use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

const CONTAINER: &str = "div.contents_aktiv";
const BLOCK: &str = "div.speiseplanTagKat";
const CATEGORY: &str = "div.category";
const TITLE: &str = "div.title";
const PRICE: &str = "div.preise";
const ICON_CLASS: &str = "speiseplanTagKatIcon";

struct Selectors {
    container: Selector,
    block: Selector,
    category: Selector,
    title: Selector,
    price: Selector,
    icon: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let parse = |s: &str| Selector::parse(s).expect("static selector should be valid");
        Selectors {
            container: parse(CONTAINER),
            block: parse(BLOCK),
            category: parse(CATEGORY),
            title: parse(TITLE),
            price: parse(PRICE),
            icon: parse(&format!(".{ICON_CLASS}")),
        }
    })
}

/// Extractor for the Seezeit "Speiseplan" page layout.
///
/// The active day lives in `div.contents_aktiv`; every `div.speiseplanTagKat`
/// inside it is one meal block.
pub struct SpeiseplanExtractor;

/// A `div.speiseplanTagKat` block borrowed from the parsed page.
#[derive(Debug, Clone, Copy)]
pub struct SpeiseplanEntry<'a> {
    element: ElementRef<'a>,
}

impl RawEntry for SpeiseplanEntry<'_> {
    fn category(&self) -> Option<String> {
        select_text(self.element, &selectors().category)
    }

    fn title(&self) -> Option<String> {
        select_text(self.element, &selectors().title)
    }

    fn price(&self) -> Option<String> {
        // An empty price div still counts as present; the price parser reports it
        self.element.select(&selectors().price).next().map(element_text)
    }

    fn icon_codes(&self) -> Vec<String> {
        self.element
            .select(&selectors().icon)
            .flat_map(|icon| icon.value().classes())
            .filter(|class| *class != ICON_CLASS)
            .map(str::to_string)
            .collect()
    }
}

impl Extractor for SpeiseplanExtractor {
    type Entry<'a> = SpeiseplanEntry<'a>;

    fn extract<'a>(&self, document: &'a Html) -> Result<Vec<SpeiseplanEntry<'a>>, MealPlanError> {
        let selectors = selectors();
        let container = document.select(&selectors.container).next().ok_or_else(|| {
            MealPlanError::StructureError(format!("no {CONTAINER} element on the page"))
        })?;

        let entries: Vec<_> = container
            .select(&selectors.block)
            .map(|element| SpeiseplanEntry { element })
            .collect();

        debug!("Found {} meal blocks in {}", entries.len(), CONTAINER);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_HTML: &str = r#"
        <div class="contents_aktiv">
            <div class="speiseplanTagKat">
                <div class="category">Pasta</div>
                <div class="title_preise_1">
                    <div class="title">Penne
                        mit Tomatensauce (3)</div>
                    <div class="preise">4,20 €</div>
                </div>
                <div class="speiseplanTagKatIcons">
                    <div class="speiseplanTagKatIcon Veg"></div>
                    <div class="speiseplanTagKatIcon B"></div>
                </div>
            </div>
        </div>
    "#;

    #[test]
    fn test_entry_accessors() {
        let document = Html::parse_document(BLOCK_HTML);
        let entries = SpeiseplanExtractor.extract(&document).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.category().as_deref(), Some("Pasta"));
        assert_eq!(
            entry.title().as_deref(),
            Some("Penne mit Tomatensauce (3)")
        );
        assert_eq!(entry.price().as_deref(), Some("4,20 €"));
        assert_eq!(entry.icon_codes(), vec!["Veg", "B"]);
    }

    #[test]
    fn test_missing_sub_regions_are_none() {
        let html = r#"
            <div class="contents_aktiv">
                <div class="speiseplanTagKat">
                    <div class="category">   </div>
                </div>
            </div>
        "#;
        let document = Html::parse_document(html);
        let entries = SpeiseplanExtractor.extract(&document).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.category(), None);
        assert_eq!(entry.title(), None);
        assert_eq!(entry.price(), None);
        assert!(entry.icon_codes().is_empty());
    }

    #[test]
    fn test_inactive_days_are_ignored() {
        let html = r#"
            <div class="contents">
                <div class="speiseplanTagKat"><div class="category">Gestern</div></div>
            </div>
            <div class="contents_aktiv"></div>
        "#;
        let document = Html::parse_document(html);
        let entries = SpeiseplanExtractor.extract(&document).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_container_is_structure_error() {
        let document = Html::parse_document("<html><body><p>Wartung</p></body></html>");
        let result = SpeiseplanExtractor.extract(&document);
        assert!(matches!(result, Err(MealPlanError::StructureError(_))));
    }
}
