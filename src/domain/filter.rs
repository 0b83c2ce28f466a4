//! Search + tab filtering over the catalog. Pure, recomputed on every query.

use crate::domain::catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterTab {
    #[default]
    All,
    Available,
    Used,
}

impl FilterTab {
    pub fn admits(&self, item: &CatalogItem) -> bool {
        match self {
            FilterTab::All => true,
            FilterTab::Available => !item.is_redeemed(),
            FilterTab::Used => item.is_redeemed(),
        }
    }
}

impl FromStr for FilterTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(FilterTab::All),
            "available" => Ok(FilterTab::Available),
            "used" => Ok(FilterTab::Used),
            other => Err(format!("unknown tab '{}' (expected all, available or used)", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    search: String,
    tab: FilterTab,
}

impl ItemFilter {
    pub fn new(search: impl AsRef<str>, tab: FilterTab) -> Self {
        Self {
            search: search.as_ref().to_lowercase(),
            tab,
        }
    }

    pub fn tab(&self) -> FilterTab {
        self.tab
    }

    /// Case-insensitive substring match on the name, combined with the tab predicate.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.tab.admits(item) && item.name().to_lowercase().contains(&self.search)
    }

    /// Matching items in catalog order.
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
