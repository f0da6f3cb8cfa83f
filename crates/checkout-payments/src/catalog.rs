//! Plan & Option Catalog
//!
//! Maps the human-readable plan and option names accepted on the checkout URL
//! to Stripe price IDs, and turns a request's selection into line items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Standard price table: (name, Stripe price ID)
///
/// Checkout needs price IDs, not product IDs.
pub const STANDARD_PRICES: &[(&str, &str)] = &[
    ("プランA", "price_XXXA"),
    ("プランB", "price_XXXB"),
    ("プランC", "price_XXXC"),
    ("オプションA", "price_OPTA"),
    ("オプションB", "price_OPTB"),
    ("オプションC", "price_OPTC"),
];

/// A single Checkout line item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stripe price ID
    pub price: String,

    /// Always 1 for plan/option purchases
    pub quantity: u64,
}

impl LineItem {
    pub fn single(price: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            quantity: 1,
        }
    }
}

/// What the caller asked for on the query string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// A single plan name
    pub plan: Option<String>,

    /// Comma-separated option names
    pub option: Option<String>,
}

impl Selection {
    /// Build a selection from decoded query pairs.
    ///
    /// A parameter only counts when it appears exactly once; repeated keys are
    /// treated as absent rather than rejected.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut plan: Vec<String> = Vec::new();
        let mut option: Vec<String> = Vec::new();

        for (key, value) in pairs {
            match key.as_ref() {
                "plan" => plan.push(value.into()),
                "option" => option.push(value.into()),
                _ => {}
            }
        }

        Self {
            plan: single(plan),
            option: single(option),
        }
    }

    /// Option tokens in input order, trimmed
    pub fn option_tokens(&self) -> impl Iterator<Item = &str> {
        self.option
            .as_deref()
            .into_iter()
            .flat_map(|s| s.split(','))
            .map(str::trim)
    }
}

fn single(mut values: Vec<String>) -> Option<String> {
    if values.len() == 1 { values.pop() } else { None }
}

/// Immutable name → price ID table
#[derive(Clone, Debug)]
pub struct Catalog {
    prices: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Catalog with the built-in plans and options
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_PRICES.iter().copied())
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prices: entries
                .into_iter()
                .map(|(name, price)| (name.into(), price.into()))
                .collect(),
        }
    }

    /// Look up the price ID for a plan or option name
    pub fn price_for(&self, name: &str) -> Option<&str> {
        self.prices.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Resolve a selection into line items.
    ///
    /// The plan (if known) comes first, then each known option token in the
    /// order it appeared. Unknown names are dropped.
    pub fn resolve(&self, selection: &Selection) -> Vec<LineItem> {
        let plan = selection.plan.as_deref().and_then(|p| self.price_for(p));
        let options = selection.option_tokens().filter_map(|t| self.price_for(t));

        let items: Vec<LineItem> = plan.into_iter().chain(options).map(LineItem::single).collect();

        tracing::debug!(
            plan = ?selection.plan,
            option = ?selection.option,
            resolved = items.len(),
            "Resolved checkout selection"
        );

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(plan: Option<&str>, option: Option<&str>) -> Selection {
        Selection {
            plan: plan.map(Into::into),
            option: option.map(Into::into),
        }
    }

    #[test]
    fn test_plan_only() {
        let items = Catalog::standard().resolve(&selection(Some("プランA"), None));
        assert_eq!(items, vec![LineItem::single("price_XXXA")]);
    }

    #[test]
    fn test_options_keep_order_and_trim() {
        let items = Catalog::standard().resolve(&selection(None, Some("プランB, オプションA")));
        assert_eq!(
            items,
            vec![LineItem::single("price_XXXB"), LineItem::single("price_OPTA")]
        );
    }

    #[test]
    fn test_unknown_option_dropped() {
        let items = Catalog::standard().resolve(&selection(None, Some("unknown,オプションC")));
        assert_eq!(items, vec![LineItem::single("price_OPTC")]);
    }

    #[test]
    fn test_plan_before_options() {
        let items = Catalog::standard().resolve(&selection(Some("プランC"), Some("オプションB,オプションA")));
        let prices: Vec<_> = items.iter().map(|i| i.price.as_str()).collect();
        assert_eq!(prices, ["price_XXXC", "price_OPTB", "price_OPTA"]);
        assert!(items.iter().all(|i| i.quantity == 1));
    }

    #[test]
    fn test_unknown_plan_and_empty_tokens() {
        let items = Catalog::standard().resolve(&selection(Some("プランZ"), Some(" , ,")));
        assert!(items.is_empty());
    }

    #[test]
    fn test_nothing_selected() {
        assert!(Catalog::standard().resolve(&Selection::default()).is_empty());
    }

    #[test]
    fn test_duplicate_tokens_each_count() {
        let items = Catalog::standard().resolve(&selection(None, Some("オプションA,オプションA")));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_selection_from_pairs() {
        let sel = Selection::from_pairs([("plan", "プランA"), ("option", "オプションA"), ("utm", "x")]);
        assert_eq!(sel, selection(Some("プランA"), Some("オプションA")));
    }

    #[test]
    fn test_repeated_param_treated_as_absent() {
        let sel = Selection::from_pairs([("plan", "プランA"), ("plan", "プランB")]);
        assert_eq!(sel.plan, None);
    }

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.price_for("オプションB"), Some("price_OPTB"));
        assert_eq!(catalog.price_for("prod_S9og5PMvl9k8sY"), None);
    }
}
