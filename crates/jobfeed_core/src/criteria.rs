use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tech stacks offered by the criteria form.
pub const TECH_STACK_OPTIONS: [&str; 10] = [
    "HTML/CSS",
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "Ruby",
    "PHP",
    "C#",
    "Swift",
];

/// Job roles offered by the criteria form.
pub const JOB_ROLE_OPTIONS: [&str; 5] = ["frontend", "backend", "ios", "android", "tech lead"];

/// Minimum base pay choices (USD).
pub const MIN_SALARY_OPTIONS: [u32; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Largest minimum-experience choice (years); choices run from zero.
pub const MAX_EXPERIENCE_OPTION: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RemoteMode {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "on-site")]
    OnSite,
}

impl RemoteMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "remote" => Some(Self::Remote),
            "on-site" | "onsite" => Some(Self::OnSite),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::OnSite => "on-site",
        }
    }
}

/// The complete set of user-selected filters.
///
/// The criteria form always emits a whole value; there are no partial
/// updates. Empty strings and empty sets mean "no constraint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub min_exp: Option<f64>,
    pub company_name: String,
    pub location: String,
    pub remote: BTreeSet<RemoteMode>,
    pub tech_stack: BTreeSet<String>,
    pub job_role: BTreeSet<String>,
    pub min_jd_salary: Option<f64>,
}

impl FilterCriteria {
    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}
