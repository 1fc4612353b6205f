//! Word of the day
//!
//! A pure date-to-word selector plus the small controller a UI needs to
//! show or mask the selected word.

mod controller;
mod date;
mod selector;

pub use controller::{DailyController, RevealState, Slots};
pub use date::{DATE_FORMAT, DateInput, Timezone, parse_date};
pub use selector::{DailyWordSelector, Selection, day_index, default_epoch, select_word};
