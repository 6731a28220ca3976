use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Method {
    Overhand,
    Underhand,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Metric {
    Appropriateness,
    Naturalness,
    Predictability,
    Safety,
}

impl Method {
    pub const COUNT: usize = 3;
    pub const ALL: [Method; Method::COUNT] = [Method::Overhand, Method::Underhand, Method::Side];

    pub fn name(self) -> &'static str {
        match self {
            Method::Overhand => "Overhand",
            Method::Underhand => "Underhand",
            Method::Side => "Side",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Metric {
    pub const COUNT: usize = 4;
    /// Column order of a response row.
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::Appropriateness,
        Metric::Naturalness,
        Metric::Predictability,
        Metric::Safety,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Appropriateness => "Appropriateness",
            Metric::Naturalness => "Naturalness",
            Metric::Predictability => "Predictability",
            Metric::Safety => "Safety",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Method pairs compared by the pairwise t-tests, in report order.
pub const METHOD_PAIRS: [(Method, Method); 3] = [
    (Method::Overhand, Method::Underhand),
    (Method::Overhand, Method::Side),
    (Method::Underhand, Method::Side),
];

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown handover method: {s}"))
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown metric: {s}"))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/factors.rs"]
mod tests;
