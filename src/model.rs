use std::fmt;

use crate::error::EntryError;

/// Price of a meal, either one amount or a large/small pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    Single(String),
    Tiered { large: String, small: String },
}

impl Price {
    /// The amounts alone: `12,90€` or `Groß: 8,50€ | Klein: 6,20€`.
    pub fn amount_text(&self) -> String {
        match self {
            Price::Single(amount) => format!("{amount}€"),
            Price::Tiered { large, small } => format!("Groß: {large}€ | Klein: {small}€"),
        }
    }

    pub fn is_tiered(&self) -> bool {
        matches!(self, Price::Tiered { .. })
    }
}

impl fmt::Display for Price {
    /// `12,90€` or, for two tiers, `\nGroß: 8,50€ | Klein: 6,20€`.
    /// The leading newline puts the pair on its own line in the message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_tiered() {
            f.write_str("\n")?;
        }
        f.write_str(&self.amount_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub category: String,
    pub category_icon: String,
    pub dietary_icons: String,
    pub description: String,
    pub cost: Price,
}

impl Meal {
    /// Render the meal as a WhatsApp-styled text block.
    ///
    /// ```text
    /// 🍝 *Pasta* 🥕 `4,20€`
    /// - Penne mit Tomatensauce
    /// ```
    pub fn render(&self) -> String {
        let mut header = Vec::with_capacity(3);
        if !self.category_icon.is_empty() {
            header.push(self.category_icon.clone());
        }
        header.push(format!("*{}*", self.category));
        if !self.dietary_icons.is_empty() {
            header.push(self.dietary_icons.clone());
        }
        let header = header.join(" ");

        let cost_break = if self.cost.is_tiered() { "\n" } else { " " };
        let cost = format!("{cost_break}`{}`", self.cost.amount_text());

        format!("{header}{cost}\n- {}", self.description)
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Result of one extraction and formatting pass.
#[derive(Debug, Clone, Default)]
pub struct MealPlan {
    /// Converted meals in page order
    pub meals: Vec<Meal>,
    /// Blocks that were dropped, with their position on the page
    pub skipped: Vec<(usize, EntryError)>,
}

impl MealPlan {
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// All rendered meals separated by a blank line; empty when there are no meals.
    pub fn to_message(&self) -> String {
        self.meals
            .iter()
            .map(Meal::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
