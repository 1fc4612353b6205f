//! Integration tests for word of the day selection

use chrono::{Days, NaiveDate};
use wordle_daily::WordleError;
use wordle_daily::daily::{
    DailyController, DailyWordSelector, day_index, default_epoch, select_word,
};
use wordle_daily::wordlists::WORDS;
use wordle_daily::wordlists::loader::words_from_slice;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_rotation_repeats_every_list_length() {
    let words = words_from_slice(WORDS);
    let n = words.len() as u64;
    let start = date(2023, 3, 7);

    let first = select_word(start, &words).unwrap();
    let later = select_word(start.checked_add_days(Days::new(n)).unwrap(), &words).unwrap();
    let earlier = select_word(start.checked_sub_days(Days::new(n * 3)).unwrap(), &words).unwrap();

    assert_eq!(first, later);
    assert_eq!(first, earlier);
}

#[test]
fn test_consecutive_days_walk_the_list() {
    let words = words_from_slice(WORDS);
    let epoch = default_epoch();

    for offset in 0..words.len() as u64 {
        let day = epoch.checked_add_days(Days::new(offset)).unwrap();
        assert_eq!(
            select_word(day, &words).unwrap().text(),
            WORDS[offset as usize]
        );
    }
}

#[test]
fn test_index_always_in_range() {
    for len in [1, 2, 3, 7, 387] {
        for day in [
            date(1900, 1, 1),
            date(2021, 6, 18),
            default_epoch(),
            date(2100, 12, 31),
        ] {
            assert!(day_index(day, default_epoch(), len).unwrap() < len);
        }
    }
}

#[test]
fn test_empty_and_single_word_lists() {
    assert!(matches!(
        select_word(default_epoch(), &[]),
        Err(WordleError::EmptyWordList)
    ));

    let words = words_from_slice(&["alone"]);
    for day in [date(2000, 1, 1), default_epoch(), date(2050, 5, 5)] {
        assert_eq!(select_word(day, &words).unwrap().text(), "alone");
    }
}

#[test]
fn test_widget_flow() {
    let words = words_from_slice(&["apple", "bravo", "crazy"]);
    let mut controller = DailyController::new(DailyWordSelector::new(&words).unwrap());

    controller.on_date_input("2021-06-21").unwrap();
    controller.on_toggle(true);
    let shown: String = controller.slots().iter().flatten().collect();
    assert_eq!(shown, "CRAZY");

    assert!(controller.on_date_input("not-a-date").is_err());
    let shown: String = controller.slots().iter().flatten().collect();
    assert_eq!(shown, "CRAZY");

    controller.on_toggle(false);
    assert!(controller.slots().iter().all(Option::is_none));
}
