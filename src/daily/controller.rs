//! UI-side state for the daily word widget
//!
//! The controller owns the reveal toggle and the last successful selection.
//! Each event handler calls the pure selector and then re-renders the five
//! display slots; no word state lives anywhere else.

use super::selector::{DailyWordSelector, Selection};
use crate::core::WORD_LENGTH;
use crate::error::Result;
use chrono::NaiveDate;
use tracing::debug;

/// Contents of the five letter slots; `None` is an empty slot
pub type Slots = [Option<char>; WORD_LENGTH];

/// Whether the selected word is shown or masked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked { Self::Revealed } else { Self::Hidden }
    }

    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Revealed,
            Self::Revealed => Self::Hidden,
        }
    }
}

/// Daily word widget controller
#[derive(Debug, Clone)]
pub struct DailyController<'a> {
    selector: DailyWordSelector<'a>,
    selection: Option<Selection<'a>>,
    reveal: RevealState,
    slots: Slots,
}

impl<'a> DailyController<'a> {
    /// Start with no selection and the word hidden
    #[must_use]
    pub const fn new(selector: DailyWordSelector<'a>) -> Self {
        Self {
            selector,
            selection: None,
            reveal: RevealState::Hidden,
            slots: [None; WORD_LENGTH],
        }
    }

    /// Date picker changed
    ///
    /// On a parse failure the previous selection and slots are kept.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidDate` if `input` is not a valid date.
    pub fn on_date_input(&mut self, input: &str) -> Result<&Selection<'a>> {
        let selection = self.selector.select_str(input)?;
        Ok(self.apply(selection))
    }

    /// Select the word for an already-parsed date
    pub fn on_date(&mut self, date: NaiveDate) -> &Selection<'a> {
        let selection = self.selector.select(date);
        self.apply(selection)
    }

    /// Reveal checkbox changed
    pub fn on_toggle(&mut self, checked: bool) {
        self.reveal = RevealState::from_checked(checked);
        self.render();
    }

    /// Flip the reveal checkbox
    pub fn toggle(&mut self) {
        self.reveal = self.reveal.toggled();
        self.render();
    }

    fn apply(&mut self, selection: Selection<'a>) -> &Selection<'a> {
        debug!(
            date = %selection.date,
            day_index = selection.day_index,
            "selected word of the day"
        );
        self.slots = render_slots(Some(&selection), self.reveal);
        self.selection.insert(selection)
    }

    fn render(&mut self) {
        self.slots = render_slots(self.selection.as_ref(), self.reveal);
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&Selection<'a>> {
        self.selection.as_ref()
    }

    #[must_use]
    pub const fn reveal(&self) -> RevealState {
        self.reveal
    }

    #[must_use]
    pub const fn slots(&self) -> &Slots {
        &self.slots
    }

    #[must_use]
    pub const fn selector(&self) -> &DailyWordSelector<'a> {
        &self.selector
    }
}

/// Write the selected word into the slots, or clear them
fn render_slots(selection: Option<&Selection<'_>>, reveal: RevealState) -> Slots {
    match (selection, reveal) {
        (Some(selection), RevealState::Revealed) => selection.word.slots().map(Some),
        _ => [None; WORD_LENGTH],
    }
}
