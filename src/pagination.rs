//! Pagination bar layout.
//!
//! The inventory API hands back a flat link sequence: previous, one link per
//! page, next. [`plan`] turns it into the controls that are actually drawn,
//! keeping the first page, the last page and a window of one page around the
//! current one, with ellipses marking the collapsed runs.

use serde::Serialize;

use crate::domain::page::PageLink;

/// Previous/next control of the pagination bar.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EdgeControl {
    pub label: String,
    pub url: Option<String>,
    /// Page number carried by the `page` parameter of `url`, when present.
    pub target: Option<u32>,
    pub disabled: bool,
}

impl EdgeControl {
    fn from_link(link: &PageLink) -> Self {
        Self {
            label: link.label.clone(),
            url: link.url.clone(),
            target: link.url.as_deref().and_then(page_from_url),
            disabled: link.url.is_none(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    Page {
        number: u32,
        url: Option<String>,
        active: bool,
    },
    Ellipsis,
}

/// Everything needed to draw the pagination bar.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PaginationPlan {
    pub previous: Option<EdgeControl>,
    pub pages: Vec<PageControl>,
    pub next: Option<EdgeControl>,
}

impl PaginationPlan {
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.pages.is_empty() && self.next.is_none()
    }

    /// Page numbers in render order, `None` standing for an ellipsis.
    pub fn page_numbers(&self) -> Vec<Option<u32>> {
        self.pages
            .iter()
            .map(|control| match control {
                PageControl::Page { number, .. } => Some(*number),
                PageControl::Ellipsis => None,
            })
            .collect()
    }
}

/// Extracts a page number from a link label by dropping every non-digit.
fn parse_page_number(label: &str) -> Option<u32> {
    let digits: String = label.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u32>().ok().filter(|&number| number > 0)
}

/// Reads the `page` query parameter of a link target.
pub fn page_from_url(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|&number| number > 0)
}

fn is_visible(page: u32, current: u32, last: u32) -> bool {
    page == 1
        || page == last
        || (current.saturating_sub(1) <= page && page <= current.saturating_add(1))
}

/// Builds the pagination bar for `links`.
///
/// The first and last links are the previous/next controls. Middle links whose
/// label carries no page number in `1..=last_page` are skipped.
pub fn plan(links: &[PageLink], current_page: u32, last_page: u32) -> PaginationPlan {
    let [first, middle @ .., last] = links else {
        return PaginationPlan::default();
    };

    let mut pages = Vec::with_capacity(middle.len());

    for link in middle {
        let Some(number) = parse_page_number(&link.label) else {
            continue;
        };
        if number > last_page {
            continue;
        }

        if current_page > 3 && number == current_page - 1 && number != 1 {
            pages.push(PageControl::Ellipsis);
        }

        if is_visible(number, current_page, last_page) {
            pages.push(PageControl::Page {
                number,
                url: link.url.clone(),
                active: link.active,
            });
        }

        if current_page.saturating_add(2) < last_page
            && number == current_page + 1
            && number != last_page
        {
            pages.push(PageControl::Ellipsis);
        }
    }

    PaginationPlan {
        previous: Some(EdgeControl::from_link(first)),
        pages,
        next: Some(EdgeControl::from_link(last)),
    }
}
