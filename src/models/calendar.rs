// Calendar identifiers for the upstream layout: Spanish month names and week slots

use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month; serializes to the lowercase Spanish name used in upstream paths (e.g. "octubre").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Enero,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Enero,
        Month::Febrero,
        Month::Marzo,
        Month::Abril,
        Month::Mayo,
        Month::Junio,
        Month::Julio,
        Month::Agosto,
        Month::Septiembre,
        Month::Octubre,
        Month::Noviembre,
        Month::Diciembre,
    ];

    /// 1-based month number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::Enero => "enero",
            Month::Febrero => "febrero",
            Month::Marzo => "marzo",
            Month::Abril => "abril",
            Month::Mayo => "mayo",
            Month::Junio => "junio",
            Month::Julio => "julio",
            Month::Agosto => "agosto",
            Month::Septiembre => "septiembre",
            Month::Octubre => "octubre",
            Month::Noviembre => "noviembre",
            Month::Diciembre => "diciembre",
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self::ALL[number as usize - 1])
        } else {
            None
        }
    }

    /// Parse a Spanish month name; surrounding whitespace and case are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Directory segment in the upstream layout, e.g. "09-septiembre".
    pub fn path_segment(self) -> String {
        format!("{:02}-{}", self.number(), self.name())
    }

    /// Name with the first letter upper-cased, for report headers.
    pub fn title(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Week slot inside a month (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekNumber(u8);

impl WeekNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(week: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&week).then_some(Self(week))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All week slots in order, week 1 first.
    pub fn all() -> impl Iterator<Item = WeekNumber> {
        (Self::MIN..=Self::MAX).map(WeekNumber)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for WeekNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "week_number must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )
        })
    }
}

impl From<WeekNumber> for u8 {
    fn from(week: WeekNumber) -> u8 {
        week.0
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which weeks an aggregation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "week")]
pub enum Scope {
    Week(WeekNumber),
    Month,
}

impl Scope {
    pub fn from_week(week: Option<WeekNumber>) -> Self {
        week.map_or(Scope::Month, Scope::Week)
    }

    pub fn includes(self, week: WeekNumber) -> bool {
        match self {
            Scope::Week(w) => w == week,
            Scope::Month => true,
        }
    }

    /// Week slots the scope asks the fetcher for.
    pub fn weeks(self) -> Vec<WeekNumber> {
        WeekNumber::all().filter(|w| self.includes(*w)).collect()
    }
}
