use std::fmt;

/// One tile in the "How it works" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// The process, in the order it is shown.
pub const STEPS: [Step; 4] = [
    Step {
        icon: "\u{1F4B8}",
        title: "Invest",
        desc: "Choose a verified farm project and fund seeds or inputs.",
    },
    Step {
        icon: "\u{1F331}",
        title: "Grow",
        desc: "Local farmers manage crops, sharing updates in real time.",
    },
    Step {
        icon: "\u{1F4B0}",
        title: "Harvest",
        desc: "Crops are sold and profits are calculated transparently.",
    },
    Step {
        icon: "\u{1F3E0}",
        title: "Build",
        desc: "Proceeds fund homes, schools or community structures.",
    },
];

/// Value shown by a stat card. Displayed exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub enum StatValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Text(s) => f.write_str(s),
            StatValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

impl From<String> for StatValue {
    fn from(s: String) -> Self {
        StatValue::Text(s)
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

impl From<u32> for StatValue {
    fn from(n: u32) -> Self {
        StatValue::Number(f64::from(n))
    }
}

/// One phase of the roadmap: a bold heading followed by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub phase: &'static str,
    pub detail: &'static str,
}

pub const ROADMAP: [Milestone; 4] = [
    Milestone {
        phase: "Foundation",
        detail: "Legal registration, founding volunteers, MVP plan.",
    },
    Milestone {
        phase: "MVP",
        detail: "Landing site + basic investor flow + join form.",
    },
    Milestone {
        phase: "Pilot",
        detail: "Launch 1 farm project and 1 build.",
    },
    Milestone {
        phase: "Scale",
        detail: "Attract partners, NGOs, and impact investors.",
    },
];

/// Copyright line for the footer.
pub fn copyright_notice(year: u32) -> String {
    format!("\u{00A9} {} Agri-Build Initiative \u{2022} Built for impact", year)
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
