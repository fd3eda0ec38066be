use std::rc::Rc;

use assoc::AssocArray;

use crate::diag::{DiagEvent, DiagSink, StderrDiag};
use crate::BoardError;

/// A named group of selectable items: image location mapped to the text
/// spoken when that image is picked.
pub struct Category {
    name: String,
    items: AssocArray<String, String>,
    diag: Rc<dyn DiagSink>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_diag(name, Rc::new(StderrDiag))
    }

    pub fn with_diag(name: impl Into<String>, diag: Rc<dyn DiagSink>) -> Self {
        Category {
            name: name.into(),
            items: AssocArray::new(),
            diag,
        }
    }

    /// Display name. Empty for the synthetic root category.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store an item. A missing image location is dropped and reported,
    /// never propagated; a bad write must not take the board down.
    pub fn add_item(&mut self, image_loc: Option<&str>, text: &str) {
        let stored = self
            .items
            .set(image_loc.map(str::to_owned), text.to_owned());
        if stored.is_err() {
            self.diag.report(DiagEvent::MissingKey {
                category: self.name.clone(),
            });
        }
    }

    /// Image locations in insertion order.
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }

    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }

    /// The text to speak for `image_loc`.
    pub fn select(&self, image_loc: &str) -> Result<String, BoardError> {
        self.items
            .get(image_loc)
            .cloned()
            .map_err(|_| BoardError::ElementNotFound(image_loc.to_owned()))
    }

    pub(crate) fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|(loc, text)| (loc.as_str(), text.as_str()))
    }
}
