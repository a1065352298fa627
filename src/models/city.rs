/// The three cities a dataset ships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Name as typed at the prompt (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Convert user input → enum (case-insensitive)
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// Washington files carry no `Gender` / `Birth Year` columns.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }
}
