#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::Config;
use bikeshare::data::{TripTable, read_trips};
use bikeshare::models::City;
use bikeshare::ui::Console;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-02 09:10:00,2017-01-02 09:20:00,600,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1985.0
955915,2017-01-03 09:20:00,2017-01-03 09:40:00,1200,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1990.0
9031,2017-02-06 17:05:00,2017-02-06 17:10:00,300,Clinton St & Madison St,Streeter Dr & Grand Ave,Customer,Male,1985.0
304487,2017-03-05 08:00:00,2017-03-05 08:15:00,900,Canal St & Adams St,Streeter Dr & Grand Ave,Subscriber,Female,1972.0
45207,2017-06-04 09:45:00,2017-06-04 10:15:00,1800,Streeter Dr & Grand Ave,Canal St & Adams St,Customer,,
1473887,2017-06-10 13:30:00,2017-06-10 13:34:00,240,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,2001.0
961916,2017-01-08 09:00:00,2017-01-08 09:06:00,360,Clinton St & Madison St,Canal St & Adams St,Subscriber,Male,1985.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-05-01 07:00:00,2017-05-01 07:11:40,700,W 21 St & 6 Ave,E 17 St & Broadway,Subscriber,Male,1980.0
4096714,2017-05-02 07:30:00,2017-05-02 07:43:20,800,W 21 St & 6 Ave,E 17 St & Broadway,Customer,Female,1995.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-03-13 08:15:00,2017-03-13 08:23:09,489.066,14th & Belmont St NW,15th & K St NW,Registered
482740,2017-03-14 08:30:00,2017-03-14 08:35:00,300.5,14th & Belmont St NW,15th & K St NW,Casual
1330037,2017-04-01 18:00:00,2017-04-01 18:16:40,1000,15th & K St NW,14th & Belmont St NW,Registered
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Create an empty, unique data directory inside the system temp dir
pub fn empty_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path
}

/// Data directory holding the three fixture city files
pub fn setup_data_dir(name: &str) -> PathBuf {
    let dir = empty_data_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc csv");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington.csv");
    dir
}

pub fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: dir.to_path_buf(),
        ..Config::default()
    }
}

pub fn table(city: City, csv: &str) -> TripTable {
    read_trips(city, csv.as_bytes(), "fixture").expect("parse fixture")
}

pub fn chicago() -> TripTable {
    table(City::Chicago, CHICAGO_CSV)
}

pub fn washington() -> TripTable {
    table(City::Washington, WASHINGTON_CSV)
}

/// Console reading the scripted answers and writing into a buffer
pub fn scripted(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

pub fn output(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).expect("utf8 output")
}
