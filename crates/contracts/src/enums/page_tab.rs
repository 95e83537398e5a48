use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level content views of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTab {
    #[default]
    Home,
    Infographic,
    Research,
}

impl PageTab {
    /// Stable code of the tab
    pub fn code(&self) -> &'static str {
        match self {
            PageTab::Home => "home",
            PageTab::Infographic => "infographic",
            PageTab::Research => "research",
        }
    }

    /// Text of the navigation button
    pub fn label(&self) -> &'static str {
        match self {
            PageTab::Home => "Home",
            PageTab::Infographic => "Pitching the Infographic",
            PageTab::Research => "Researching & Brainstorming",
        }
    }

    /// Page heading shown above the article
    pub fn heading(&self) -> &'static str {
        match self {
            PageTab::Home => "Welcome",
            PageTab::Infographic => "Pitching the Infographic",
            PageTab::Research => "Researching & Brainstorming",
        }
    }

    /// All tabs in navigation order
    pub fn all() -> [PageTab; 3] {
        [PageTab::Home, PageTab::Infographic, PageTab::Research]
    }
}

impl fmt::Display for PageTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(PageTab::default(), PageTab::Home);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: std::collections::HashSet<_> =
            PageTab::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes.len(), 3);
    }

    #[test]
    fn test_navigation_labels() {
        let labels: Vec<_> = PageTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Home",
                "Pitching the Infographic",
                "Researching & Brainstorming"
            ]
        );
        assert_eq!(PageTab::Home.heading(), "Welcome");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&PageTab::Infographic).unwrap();
        assert_eq!(json, "\"infographic\"");
        let tab: PageTab = serde_json::from_str("\"research\"").unwrap();
        assert_eq!(tab, PageTab::Research);
        assert_eq!(PageTab::Research.to_string(), "research");
    }
}
