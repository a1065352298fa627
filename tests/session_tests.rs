mod common;

use bikeshare::cli::prompts::get_filters;
use bikeshare::cli::raw_view::view_raw_data;
use bikeshare::cli::session::run_session;
use bikeshare::errors::AppError;
use bikeshare::models::{City, FilterMode, Month};
use chrono::Weekday;
use common::{chicago, config_for, empty_data_dir, output, scripted, setup_data_dir};

#[test]
fn test_get_filters_reprompts_until_valid() {
    let mut console = scripted("weekly\nBOTH\nparis\n New York City \nJuly\nmay\nmon\nFriday\n");
    let selection = get_filters(&mut console).expect("selection");

    assert_eq!(selection.mode, FilterMode::Both);
    assert_eq!(selection.city, City::NewYorkCity);
    assert_eq!(selection.month, Some(Month::May));
    assert_eq!(selection.day, Some(Weekday::Fri));

    let out = output(console);
    assert!(out.contains("please type a valid filter"));
    assert!(out.contains("please type a valid city name"));
    assert!(out.contains("please type a valid month"));
    assert!(out.contains("please type a valid day"));
    assert!(out.contains(&"-".repeat(40)));
}

#[test]
fn test_get_filters_skips_unused_questions() {
    let mut console = scripted("without filter\nwashington\n");
    let selection = get_filters(&mut console).expect("selection");
    assert_eq!(selection.mode, FilterMode::None);
    assert_eq!(selection.month, None);
    assert_eq!(selection.day, None);

    let out = output(console);
    assert!(!out.contains("Please type the month"));
    assert!(!out.contains("Please type the day"));
}

#[test]
fn test_get_filters_accepts_all() {
    let mut console = scripted("month\nchicago\nall\n");
    let selection = get_filters(&mut console).expect("selection");
    assert_eq!(selection.mode, FilterMode::Month);
    assert_eq!(selection.month, None);
}

#[test]
fn test_get_filters_on_closed_input() {
    let mut console = scripted("day\n");
    let err = get_filters(&mut console).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn test_raw_view_stops_at_end_of_table() {
    let t = chicago();
    let answers = "yes\n".repeat(10);
    let mut console = scripted(&answers);
    let pages = view_raw_data(&mut console, &t, 5).expect("raw view");

    // 7 rows → at most ⌈7/5⌉ pages
    assert_eq!(pages, 2);
    let out = output(console);
    assert!(out.contains("day_of_week"));
    assert!(out.contains("Streeter Dr & Grand Ave"));
    assert!(out.contains("No more rows to show."));
}

#[test]
fn test_raw_view_stops_on_other_answers() {
    let t = chicago();
    let mut console = scripted("YES\ny\nyes\n");
    let pages = view_raw_data(&mut console, &t, 2).expect("raw view");
    assert_eq!(pages, 1);
}

#[test]
fn test_raw_view_on_empty_table() {
    let t = chicago().filter(Some(Month::June), Some(Weekday::Mon));
    let mut console = scripted("yes\n");
    assert_eq!(view_raw_data(&mut console, &t, 5).expect("raw view"), 0);
}

#[test]
fn test_session_month_filter_scenario() {
    let dir = setup_data_dir("session_month_filter");
    let cfg = config_for(&dir);

    let mut console = scripted("month\nchicago\njanuary\nno\nno\n");
    run_session(&mut console, &cfg).expect("session");

    let out = output(console);
    assert!(out.contains("3 trips selected"));
    assert!(!out.contains("The most common month is"));
    assert!(out.contains("The most common day is: Monday"));
    assert!(out.contains("The most common hour is: 9"));
    assert!(out.contains("Canal St & Adams St, with count of: 2"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_session_washington_has_no_demographics() {
    let dir = setup_data_dir("session_washington");
    let cfg = config_for(&dir);

    let mut console = scripted("none\nwashington\nno\nno\n");
    run_session(&mut console, &cfg).expect("session");

    let out = output(console);
    assert!(out.contains("The user type (Registered) has count of 2"));
    assert!(out.contains("The user type (Casual) has count of 1"));
    assert!(!out.contains("gender"));
    assert!(!out.contains("year of birth"));
}

#[test]
fn test_session_empty_selection_reports_no_data() {
    let dir = setup_data_dir("session_empty_selection");
    let cfg = config_for(&dir);

    let mut console = scripted("both\nchicago\njune\nmonday\nno\nno\n");
    run_session(&mut console, &cfg).expect("session");

    let out = output(console);
    assert!(out.contains("0 trips selected"));
    assert!(out.contains("The total travel time in minutes is: 0.00"));
    assert!(out.contains("The mean travel time in minutes is: no data"));
    assert!(out.contains("The most common hour is: no data"));
    assert!(out.contains("The most commonly used start station is: no data"));
    assert!(out.contains("The most commonly used end station is: no data"));
}

#[test]
fn test_session_day_filter_skips_day_finding() {
    let dir = setup_data_dir("session_day_filter");
    let cfg = config_for(&dir);

    let mut console = scripted("day\nchicago\nsunday\nno\nno\n");
    run_session(&mut console, &cfg).expect("session");

    let out = output(console);
    assert!(out.contains("3 trips selected"));
    assert!(!out.contains("The most common day is"));
    assert!(out.contains("The most common month is: January"));
    assert!(out.contains("The most common hour is"));
}

#[test]
fn test_session_survives_missing_file_and_restarts() {
    let dir = empty_data_dir("session_missing_file");
    let cfg = config_for(&dir);

    let mut console = scripted("none\nchicago\nyes\nnone\nwashington\nno\n");
    run_session(&mut console, &cfg).expect("session");

    let out = output(console);
    assert_eq!(out.matches("is unavailable").count(), 2);
    assert_eq!(out.matches("Hello! Let's explore").count(), 2);
}

#[test]
fn test_session_ends_on_closed_input() {
    let dir = setup_data_dir("session_closed_input");
    let cfg = config_for(&dir);

    let mut console = scripted("none\n");
    run_session(&mut console, &cfg).expect("session");
    assert!(output(console).contains("Goodbye!"));
}
