//! Two-level AAC board model: a root menu of categories, each a flat set of
//! image-location/spoken-text items, persisted through a line-oriented text
//! format. Selection either navigates into a category or yields the text to
//! speak; every absorbed error goes to an injected diagnostic sink.

use std::rc::Rc;

use assoc::AssocArray;

mod category;
mod codec;
mod diag;
mod error;

pub use category::Category;
pub use diag::{DiagEvent, DiagSink, StderrDiag};
pub use error::BoardError;


/// The board registry. Navigation is either at the root menu or inside one
/// registered category; `current` holds the category's key, never a
/// reference into the registry.
pub struct Board {
    root: Category,
    categories: AssocArray<String, Category>,
    current: Option<String>,
    diag: Rc<dyn DiagSink>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_diag(Rc::new(StderrDiag))
    }

    pub fn with_diag(diag: Rc<dyn DiagSink>) -> Self {
        Board {
            root: Category::with_diag("", diag.clone()),
            categories: AssocArray::new(),
            current: None,
            diag,
        }
    }

    /// Go back to the root menu from any state.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Name of the category being shown, empty at the root.
    pub fn category(&self) -> &str {
        match self.current_category() {
            Some(category) => category.name(),
            None => "",
        }
    }

    /// Image locations of the active scope: the category menu at the root,
    /// the category's items otherwise.
    pub fn image_locs(&self) -> Vec<String> {
        match self.current_category() {
            Some(category) => category.image_locs(),
            None => self.root.image_locs(),
        }
    }

    pub fn has_image(&self, image_loc: &str) -> bool {
        match self.current_category() {
            Some(category) => category.has_image(image_loc),
            None => self.root.has_image(image_loc),
        }
    }

    /// Act on a picked image. At the root a known category key navigates
    /// into that category and yields the empty string; inside a category the
    /// item's spoken text is returned and the state stays put. An unknown
    /// location fails without touching the navigation state.
    pub fn select(&mut self, image_loc: &str) -> Result<String, BoardError> {
        match self.current.clone() {
            None => {
                if !self.categories.has_key(image_loc) {
                    return Err(BoardError::ElementNotFound(image_loc.to_owned()));
                }
                self.current = Some(image_loc.to_owned());
                Ok(String::new())
            }
            Some(key) => match self.categories.get(key.as_str()) {
                Ok(category) => category.select(image_loc),
                Err(_) => Err(BoardError::ElementNotFound(image_loc.to_owned())),
            },
        }
    }

    /// Store an item in the active scope. At the root this registers (or
    /// replaces) a category named `text` under `image_loc` and mirrors the
    /// pair into the root menu. A missing location is dropped and reported.
    pub fn add_item(&mut self, image_loc: Option<&str>, text: &str) {
        match self.current.clone() {
            None => {
                let Some(loc) = image_loc else {
                    self.diag.report(DiagEvent::MissingKey {
                        category: String::new(),
                    });
                    return;
                };
                self.root.add_item(Some(loc), text);
                let category = Category::with_diag(text, self.diag.clone());
                // The key is always present here, so this cannot fail.
                self.categories.set(Some(loc.to_owned()), category).ok();
            }
            Some(key) => {
                if let Ok(category) = self.categories.get_mut(key.as_str()) {
                    category.add_item(image_loc, text);
                }
            }
        }
    }

    fn current_category(&self) -> Option<&Category> {
        let key = self.current.as_deref()?;
        self.categories.get(key).ok()
    }

    pub(crate) fn diag(&self) -> &Rc<dyn DiagSink> {
        &self.diag
    }

    pub(crate) fn categories(&self) -> &AssocArray<String, Category> {
        &self.categories
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
