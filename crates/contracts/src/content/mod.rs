//! Static prose of the site, one block tree per tab.

mod home;
mod infographic;
mod research;

use crate::enums::page_tab::PageTab;

/// One piece of article markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Heading2(&'static str),
    Heading3(&'static str),
    Heading4(&'static str),
    Paragraph(&'static str),
    /// Paragraph rendered without the article paragraph styling
    PlainParagraph(&'static str),
    /// Boxed group of blocks
    Callout(&'static [Block]),
    List {
        ordered: bool,
        items: &'static [ListItem],
    },
    Gallery(&'static [Thumbnail]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItem {
    Text(&'static str),
    /// Bold lead-in followed by text
    Labeled {
        label: &'static str,
        text: &'static str,
    },
}

/// Clickable preview that opens the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: &'static str,
    pub alt: &'static str,
    pub aria_label: &'static str,
    pub caption: &'static str,
}

pub const THUMBNAILS: [Thumbnail; 2] = [
    Thumbnail {
        src: "/Eng15Infographic1.png",
        alt: "Eng15 Infographic 1",
        aria_label: "Open infographic page 1",
        caption: "Page 1",
    },
    Thumbnail {
        src: "/Eng15Infographic2.png",
        alt: "Eng15 Infographic 2",
        aria_label: "Open infographic page 2",
        caption: "Page 2",
    },
];

pub const SITE_TITLE: &str = "English 15 Inforaphic Website ";
pub const DOCUMENT_TITLE: &str = "English 15 Infographic";

pub fn blocks_for(tab: PageTab) -> &'static [Block] {
    match tab {
        PageTab::Home => home::BLOCKS,
        PageTab::Infographic => infographic::BLOCKS,
        PageTab::Research => research::BLOCKS,
    }
}

/// First top-level heading of the tab's article
pub fn first_heading(tab: PageTab) -> Option<&'static str> {
    blocks_for(tab).iter().find_map(|block| match block {
        Block::Heading2(text) | Block::Heading3(text) => Some(*text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galleries(blocks: &[Block]) -> Vec<&'static [Thumbnail]> {
        let mut found = Vec::new();
        for block in blocks {
            match block {
                Block::Gallery(items) => found.push(*items),
                Block::Callout(inner) => found.extend(galleries(inner)),
                _ => {}
            }
        }
        found
    }

    fn paragraphs(blocks: &[Block]) -> Vec<&'static str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(text) | Block::PlainParagraph(text) => Some(*text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_tab_has_content() {
        for tab in PageTab::all() {
            assert!(!blocks_for(tab).is_empty(), "{tab} is empty");
            assert!(first_heading(tab).is_some(), "{tab} has no heading");
        }
    }

    #[test]
    fn test_first_headings() {
        assert_eq!(
            first_heading(PageTab::Home),
            Some("Transforming Text to Infographic")
        );
        assert_eq!(
            first_heading(PageTab::Infographic),
            Some("My Plan for an Infographic")
        );
        assert_eq!(
            first_heading(PageTab::Research),
            Some("Researching & Brainstorming")
        );
    }

    #[test]
    fn test_gallery_only_on_home() {
        let home = galleries(blocks_for(PageTab::Home));
        assert_eq!(home.len(), 1);
        assert_eq!(home[0], &THUMBNAILS[..]);
        assert!(galleries(blocks_for(PageTab::Infographic)).is_empty());
        assert!(galleries(blocks_for(PageTab::Research)).is_empty());
    }

    #[test]
    fn test_thumbnail_sources_are_distinct_root_paths() {
        assert_ne!(THUMBNAILS[0].src, THUMBNAILS[1].src);
        for thumb in THUMBNAILS {
            assert!(thumb.src.starts_with('/'));
            assert!(thumb.src.ends_with(".png"));
        }
    }

    #[test]
    fn test_pitching_keeps_repeated_paragraphs() {
        let texts = paragraphs(blocks_for(PageTab::Infographic));
        let repeated = texts
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .count();
        assert_eq!(repeated, 1);
        // the plan paragraph is reused as the opening of the original paper
        assert_eq!(texts[0], texts[2]);
    }

    #[test]
    fn test_research_outline_is_ordered() {
        let outline = blocks_for(PageTab::Research).iter().find_map(|b| match b {
            Block::List { ordered, items } => Some((*ordered, items.len())),
            _ => None,
        });
        assert_eq!(outline, Some((true, 5)));
    }
}
