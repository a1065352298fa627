/// Months covered by the datasets (January to June).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based month number, as returned by `chrono::Datelike::month`.
    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn from_number(n: u32) -> Option<Self> {
        Month::ALL.into_iter().find(|m| m.number() == n)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
    }
}
