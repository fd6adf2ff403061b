//! Gallery category filter.
//!
//! Exactly one filter is active at a time: the UI holds a single `Filter`
//! value and the last selection wins, so the "one active control" invariant
//! holds by construction. A card with no category is visible only under the
//! `All` sentinel.

/// The active gallery filter: the `All` sentinel or a named category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Label shown on the filter control.
    pub fn label(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(name) => name,
        }
    }

    /// Parse a filter control's data value. The literal `"all"` is the
    /// sentinel; anything else names a category.
    pub fn from_value(value: &str) -> Filter {
        if value == "all" {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    /// Whether a card with the given category marker is visible under
    /// this filter.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(name) => category == Some(name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_card() {
        assert!(Filter::All.matches(Some("coding")));
        assert!(Filter::All.matches(Some("travel")));
        assert!(Filter::All.matches(None));
    }

    #[test]
    fn category_matches_only_its_own() {
        let coding = Filter::Category("coding".to_string());
        assert!(coding.matches(Some("coding")));
        assert!(!coding.matches(Some("travel")));
    }

    #[test]
    fn uncategorized_card_hidden_under_specific_filter() {
        let coding = Filter::Category("coding".to_string());
        assert!(!coding.matches(None));
        assert!(Filter::All.matches(None));
    }

    #[test]
    fn from_value_treats_all_as_sentinel() {
        assert_eq!(Filter::from_value("all"), Filter::All);
        assert_eq!(
            Filter::from_value("coding"),
            Filter::Category("coding".to_string())
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Filter::All.label(), "all");
        assert_eq!(Filter::Category("music".to_string()).label(), "music");
    }
}
