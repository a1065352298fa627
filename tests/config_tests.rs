use bikeshare::config::Config;
use bikeshare::errors::AppError;
use bikeshare::models::City;
use std::path::{Path, PathBuf};

#[test]
fn test_defaults_map_cities_to_working_directory() {
    let cfg = Config::load(None).expect("defaults");
    assert_eq!(cfg.page_size, 5);
    assert_eq!(cfg.separator(), "-".repeat(40));
    assert_eq!(cfg.city_path(City::Chicago), Path::new(".").join("chicago.csv"));
    assert_eq!(
        cfg.city_path(City::NewYorkCity),
        Path::new(".").join("new_york_city.csv")
    );
    assert_eq!(
        cfg.city_path(City::Washington),
        Path::new(".").join("washington.csv")
    );
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("data_dir: /srv/bikeshare\ncities:\n  washington: dc.csv\n")
        .expect("partial config");
    assert_eq!(cfg.data_dir, PathBuf::from("/srv/bikeshare"));
    assert_eq!(cfg.cities.washington, "dc.csv");
    assert_eq!(cfg.cities.chicago, "chicago.csv");
    assert_eq!(cfg.page_size, 5);
}

#[test]
fn test_zero_page_size_is_rejected() {
    let err = Config::from_yaml("page_size: 0\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_blank_city_file_is_rejected() {
    let err = Config::from_yaml("cities:\n  chicago: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("chicago"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = Config::load(Some(Path::new("/definitely/not/here/bikeshare.yml"))).unwrap_err();
    assert!(matches!(err, AppError::Config(msg) if msg.contains("cannot read")));
}

#[test]
fn test_empty_separator_char_falls_back_to_dash() {
    let cfg = Config::from_yaml("separator_char: \"\"\nseparator_width: 3\n").unwrap();
    assert_eq!(cfg.separator(), "---");
}
