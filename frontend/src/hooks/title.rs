use yew::prelude::*;

/// Applies a title through an explicit callback, skipping repeats so calling
/// it after every state change is harmless.
pub struct TitleSync {
    apply: Callback<AttrValue>,
    last: Option<AttrValue>,
}

impl TitleSync {
    pub fn new(apply: Callback<AttrValue>) -> Self {
        Self { apply, last: None }
    }

    /// Returns whether the callback ran.
    pub fn sync(&mut self, title: AttrValue) -> bool {
        if self.last.as_ref() == Some(&title) {
            return false;
        }

        self.apply.emit(title.clone());
        self.last = Some(title);
        true
    }
}

pub fn set_document_title(title: AttrValue) {
    gloo_utils::document().set_title(&title);
}
