// SPDX-License-Identifier: MPL-2.0
//! Static page list shown by the viewer.

use crate::domain::error::PageError;

/// Prefix prepended to an image name to get its thumbnail asset name.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// 1-based page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(u32);

impl PageId {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates an id without checking it against any page list.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One viewable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: PageId,
    pub image_name: String,
}

impl Page {
    /// Asset name of the drawer thumbnail, derived from the image name.
    #[must_use]
    pub fn thumbnail_name(&self) -> String {
        format!("{THUMBNAIL_PREFIX}{}", self.image_name)
    }
}

/// Image names of the built-in page list, in display order.
pub const DEFAULT_IMAGE_NAMES: [&str; 4] = [
    "magazine-front-cover",
    "magazine-back-cover",
    "magazine-inside-left",
    "magazine-inside-right",
];

/// Ordered, non-empty page list with ids exactly `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages(Vec<Page>);

impl Pages {
    /// Builds a page list, numbering pages from 1 in the given order.
    ///
    /// Returns `None` for an empty list: the viewer always shows a page.
    pub fn from_image_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages: Vec<Page> = names
            .into_iter()
            .zip(1u32..)
            .map(|(name, id)| Page {
                id: PageId::new(id),
                image_name: name.into(),
            })
            .collect();

        (!pages.is_empty()).then_some(Self(pages))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no pages. Never true once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the page with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::OutOfRange`] if `id` is not in `1..=len`.
    pub fn get(&self, id: PageId) -> Result<&Page, PageError> {
        let index = (id.value() as usize).checked_sub(1);
        index
            .and_then(|i| self.0.get(i))
            .ok_or(PageError::OutOfRange {
                id: id.value(),
                count: self.0.len(),
            })
    }

    /// Whether `id` names a page of this list.
    #[must_use]
    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.0.iter()
    }
}

impl Default for Pages {
    fn default() -> Self {
        Self(
            DEFAULT_IMAGE_NAMES
                .iter()
                .zip(1u32..)
                .map(|(name, id)| Page {
                    id: PageId::new(id),
                    image_name: (*name).to_string(),
                })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_name_is_prefixed() {
        let page = Page {
            id: PageId::FIRST,
            image_name: "magazine-front-cover".into(),
        };
        assert_eq!(page.thumbnail_name(), "thumb-magazine-front-cover");
    }

    #[test]
    fn default_pages_are_numbered_from_one() {
        let pages = Pages::default();
        assert_eq!(pages.len(), 4);
        let ids: Vec<u32> = pages.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn from_image_names_rejects_empty_list() {
        assert!(Pages::from_image_names(Vec::<String>::new()).is_none());
    }

    #[test]
    fn from_image_names_keeps_order() {
        let pages = Pages::from_image_names(["b", "a"]).expect("non-empty");
        assert_eq!(pages.get(PageId::new(1)).unwrap().image_name, "b");
        assert_eq!(pages.get(PageId::new(2)).unwrap().image_name, "a");
    }

    #[test]
    fn get_rejects_zero_and_past_end() {
        let pages = Pages::default();
        assert_eq!(
            pages.get(PageId::new(0)),
            Err(PageError::OutOfRange { id: 0, count: 4 })
        );
        assert_eq!(
            pages.get(PageId::new(5)),
            Err(PageError::OutOfRange { id: 5, count: 4 })
        );
        assert!(pages.contains(PageId::new(4)));
    }
}
