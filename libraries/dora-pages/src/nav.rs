//! Sidebar navigation menu

use serde::{Deserialize, Serialize};
use tracing::trace;

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
    pub is_active: bool,
}

const MENU: [(&str, &str); 3] = [("/", "Home"), ("/search", "Search"), ("/library", "Library")];

/// Build the menu, marking the item whose href equals `current_path`
pub fn navigation_menu(current_path: &str) -> Vec<NavItem> {
    MENU.iter()
        .map(|&(href, label)| {
            let is_active = href == current_path;
            trace!(label, href, is_active, "Nav item");
            NavItem {
                href: href.to_string(),
                label: label.to_string(),
                is_active,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(path: &str) -> Vec<String> {
        navigation_menu(path)
            .into_iter()
            .filter(|item| item.is_active)
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn marks_exact_match_only() {
        assert_eq!(active("/"), vec!["Home"]);
        assert_eq!(active("/library"), vec!["Library"]);
        assert!(active("/playlist/dora-favs").is_empty());
        assert!(active("/now-playing").is_empty());
    }

    #[test]
    fn lists_three_items_in_order() {
        let labels: Vec<String> = navigation_menu("/").into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "Search", "Library"]);
    }
}
