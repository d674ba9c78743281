use std::collections::BTreeSet;

use jobfeed_core::{
    FilterCriteria, RemoteMode, JOB_ROLE_OPTIONS, MAX_EXPERIENCE_OPTION, MIN_SALARY_OPTIONS,
    TECH_STACK_OPTIONS,
};
use thiserror::Error;

use super::constants::DEFAULT_SCROLL_STEP_PX;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),
    #[error("{command}: {value:?} is not one of {allowed}")]
    NotOffered {
        command: &'static str,
        value: String,
        allowed: String,
    },
    #[error("{command}: expected a number, got {value:?}")]
    NotANumber {
        command: &'static str,
        value: String,
    },
}

/// A single edit made in the criteria form.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaEdit {
    Company(String),
    Location(String),
    Remote(BTreeSet<RemoteMode>),
    TechStack(BTreeSet<String>),
    JobRole(BTreeSet<String>),
    MinSalary(Option<f64>),
    MinExp(Option<f64>),
    Clear,
}

impl CriteriaEdit {
    /// Applies the edit to the form's criteria.
    pub fn apply(self, form: &mut FilterCriteria) {
        match self {
            CriteriaEdit::Company(text) => form.company_name = text,
            CriteriaEdit::Location(text) => form.location = text,
            CriteriaEdit::Remote(modes) => form.remote = modes,
            CriteriaEdit::TechStack(stacks) => form.tech_stack = stacks,
            CriteriaEdit::JobRole(roles) => form.job_role = roles,
            CriteriaEdit::MinSalary(value) => form.min_jd_salary = value,
            CriteriaEdit::MinExp(value) => form.min_exp = value,
            CriteriaEdit::Clear => *form = FilterCriteria::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Edit(CriteriaEdit),
    ScrollBy(f64),
    ScrollToBottom,
    Show,
    /// Full card of the n-th (1-based) job in the current view.
    Details(usize),
    Help,
    Quit,
}

/// Parses one line of user input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "company" => UiCommand::Edit(CriteriaEdit::Company(rest.to_string())),
        "location" => UiCommand::Edit(CriteriaEdit::Location(rest.to_string())),
        "remote" => UiCommand::Edit(CriteriaEdit::Remote(parse_remote(rest)?)),
        "tech" => UiCommand::Edit(CriteriaEdit::TechStack(parse_choices(
            "tech",
            rest,
            &TECH_STACK_OPTIONS,
        )?)),
        "role" => UiCommand::Edit(CriteriaEdit::JobRole(parse_choices(
            "role",
            rest,
            &JOB_ROLE_OPTIONS,
        )?)),
        "salary" => UiCommand::Edit(CriteriaEdit::MinSalary(parse_salary(rest)?)),
        "exp" => UiCommand::Edit(CriteriaEdit::MinExp(parse_experience(rest)?)),
        "clear" => UiCommand::Edit(CriteriaEdit::Clear),
        "scroll" => UiCommand::ScrollBy(parse_scroll(rest)?),
        "bottom" => UiCommand::ScrollToBottom,
        "show" => UiCommand::Show,
        "details" => UiCommand::Details(parse_card_number(rest)?),
        "help" | "?" => UiCommand::Help,
        "quit" | "exit" | "q" => UiCommand::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

/// `-` or nothing clears a multi-value field.
fn split_list(raw: &str) -> Vec<&str> {
    if raw == "-" {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_remote(raw: &str) -> Result<BTreeSet<RemoteMode>, CommandError> {
    split_list(raw)
        .into_iter()
        .map(|item| {
            RemoteMode::parse(item).ok_or_else(|| CommandError::NotOffered {
                command: "remote",
                value: item.to_string(),
                allowed: "remote, on-site".to_string(),
            })
        })
        .collect()
}

fn parse_choices(
    command: &'static str,
    raw: &str,
    options: &[&str],
) -> Result<BTreeSet<String>, CommandError> {
    split_list(raw)
        .into_iter()
        .map(|item| {
            options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(item))
                .map(|option| option.to_string())
                .ok_or_else(|| CommandError::NotOffered {
                    command,
                    value: item.to_string(),
                    allowed: options.join(", "),
                })
        })
        .collect()
}

fn parse_optional_number(command: &'static str, raw: &str) -> Result<Option<u32>, CommandError> {
    if raw.is_empty() || raw == "-" {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| CommandError::NotANumber {
            command,
            value: raw.to_string(),
        })
}

fn parse_salary(raw: &str) -> Result<Option<f64>, CommandError> {
    match parse_optional_number("salary", raw)? {
        None => Ok(None),
        Some(value) if MIN_SALARY_OPTIONS.contains(&value) => Ok(Some(f64::from(value))),
        Some(value) => Err(CommandError::NotOffered {
            command: "salary",
            value: value.to_string(),
            allowed: "10, 20, ..., 100".to_string(),
        }),
    }
}

fn parse_experience(raw: &str) -> Result<Option<f64>, CommandError> {
    match parse_optional_number("exp", raw)? {
        None => Ok(None),
        Some(value) if value <= MAX_EXPERIENCE_OPTION => Ok(Some(f64::from(value))),
        Some(value) => Err(CommandError::NotOffered {
            command: "exp",
            value: value.to_string(),
            allowed: format!("0..={MAX_EXPERIENCE_OPTION}"),
        }),
    }
}

fn parse_card_number(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(0) => Err(CommandError::NotOffered {
            command: "details",
            value: raw.to_string(),
            allowed: "a job number from 1".to_string(),
        }),
        Ok(number) => Ok(number),
        Err(_) => Err(CommandError::NotANumber {
            command: "details",
            value: raw.to_string(),
        }),
    }
}

fn parse_scroll(raw: &str) -> Result<f64, CommandError> {
    if raw.is_empty() {
        return Ok(DEFAULT_SCROLL_STEP_PX);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CommandError::NotANumber {
            command: "scroll",
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edit(line: &str) -> CriteriaEdit {
        match parse_command(line) {
            Ok(Some(UiCommand::Edit(edit))) => edit,
            other => panic!("expected an edit for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn multi_select_values_are_normalized_to_offered_options() {
        let expected: BTreeSet<String> = ["Node.js", "React"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(edit("tech react, node.js"), CriteriaEdit::TechStack(expected));
        assert_eq!(edit("role -"), CriteriaEdit::JobRole(BTreeSet::new()));
        assert_eq!(
            edit("remote on-site,remote"),
            CriteriaEdit::Remote([RemoteMode::Remote, RemoteMode::OnSite].into_iter().collect())
        );
    }

    #[test]
    fn unknown_options_are_rejected() {
        assert!(matches!(
            parse_command("tech cobol"),
            Err(CommandError::NotOffered { command: "tech", .. })
        ));
        assert!(matches!(
            parse_command("salary 15"),
            Err(CommandError::NotOffered { command: "salary", .. })
        ));
        assert!(matches!(
            parse_command("exp many"),
            Err(CommandError::NotANumber { command: "exp", .. })
        ));
        assert_eq!(
            parse_command("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn edits_replace_one_field_of_the_form() {
        let mut form = FilterCriteria::default();
        edit("company  Acme Corp ").apply(&mut form);
        edit("salary 30").apply(&mut form);
        edit("exp 0").apply(&mut form);

        assert_eq!(form.company_name, "Acme Corp");
        assert_eq!(form.min_jd_salary, Some(30.0));
        assert_eq!(form.min_exp, Some(0.0));

        edit("salary -").apply(&mut form);
        assert_eq!(form.min_jd_salary, None);

        edit("clear").apply(&mut form);
        assert_eq!(form, FilterCriteria::default());
    }

    #[test]
    fn navigation_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(
            parse_command("scroll"),
            Ok(Some(UiCommand::ScrollBy(DEFAULT_SCROLL_STEP_PX)))
        );
        assert_eq!(parse_command("scroll -120"), Ok(Some(UiCommand::ScrollBy(-120.0))));
        assert_eq!(parse_command("BOTTOM"), Ok(Some(UiCommand::ScrollToBottom)));
        assert_eq!(parse_command("q"), Ok(Some(UiCommand::Quit)));
        assert_eq!(parse_command("details 3"), Ok(Some(UiCommand::Details(3))));
        assert!(matches!(
            parse_command("details 0"),
            Err(CommandError::NotOffered { command: "details", .. })
        ));
        assert!(matches!(
            parse_command("details"),
            Err(CommandError::NotANumber { command: "details", .. })
        ));
    }
}
