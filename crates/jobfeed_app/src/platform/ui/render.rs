use std::fmt::Write;

use jobfeed_core::{AppViewModel, FilterCriteria, JobListing};

use super::constants::{DETAILS_PREVIEW_CHARS, NOT_SPECIFIED, NO_RESULTS_MESSAGE};

/// Continuation lines line up under the card title.
const CARD_INDENT: &str = "      ";

/// Renders the listing view as plain text.
pub fn render(view: &AppViewModel, visible: std::ops::Range<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", status_line(view));

    if view.no_results {
        let _ = writeln!(out, "{NO_RESULTS_MESSAGE}");
    }
    let start = visible.start;
    for (index, job) in view
        .listings
        .iter()
        .enumerate()
        .skip(start)
        .take(visible.len())
    {
        let _ = writeln!(out, "{}", card(index + 1, job, false));
    }
    if view.loading {
        let _ = writeln!(out, "  ... loading more jobs");
    }
    out
}

pub fn status_line(view: &AppViewModel) -> String {
    let mut line = format!(
        "Showing {} of {} loaded jobs | offset {}",
        view.listings.len(),
        view.loaded_count,
        view.offset
    );
    if view.loading {
        line.push_str(" | loading");
    }
    if view.criteria_pending {
        line.push_str(" | applying filters");
    }
    let summary = criteria_summary(&view.criteria);
    if !summary.is_empty() {
        let _ = write!(line, " | filters: {summary}");
    }
    if let Some(error) = &view.last_error {
        let _ = write!(line, " | last fetch failed: {error}");
    }
    line
}

/// The full card for job `number` (1-based) of the current view.
pub fn details(view: &AppViewModel, number: usize) -> Option<String> {
    let job = view.listings.get(number.checked_sub(1)?)?;
    Some(card(number, job, true))
}

fn card(number: usize, job: &JobListing, full_details: bool) -> String {
    let mut text = format!(
        "{number:>4}. {} - {} ({})",
        job.company_name, job.job_role, job.location
    );
    let currency = if job.salary_currency_code.is_empty() {
        "USD"
    } else {
        job.salary_currency_code.as_str()
    };
    let pay = range_text(job.min_jd_salary, job.max_jd_salary, &format!("K {currency}"));
    let exp = range_text(job.min_exp, job.max_exp, " yrs");
    let _ = write!(
        text,
        "\n{CARD_INDENT}pay {} | exp {}",
        pay.as_deref().unwrap_or(NOT_SPECIFIED),
        exp.as_deref().unwrap_or(NOT_SPECIFIED)
    );
    if !job.tech_stack.is_empty() {
        let _ = write!(text, " | {}", job.tech_stack);
    }

    let description = job.job_details_from_company.trim();
    if !description.is_empty() {
        let cut = description
            .char_indices()
            .nth(DETAILS_PREVIEW_CHARS)
            .map(|(at, _)| at);
        match cut {
            Some(at) if !full_details => {
                let _ = write!(
                    text,
                    "\n{CARD_INDENT}{}... (details {number} for more)",
                    &description[..at]
                );
            }
            _ => {
                let _ = write!(text, "\n{CARD_INDENT}{description}");
            }
        }
    }
    if !job.jd_link.is_empty() {
        let _ = write!(text, "\n{CARD_INDENT}Easy Apply: {}", job.jd_link);
    }
    text
}

fn range_text(min: Option<f64>, max: Option<f64>, unit: &str) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{min}-{max}{unit}")),
        (Some(min), None) => Some(format!("{min}+{unit}")),
        (None, Some(max)) => Some(format!("up to {max}{unit}")),
        (None, None) => None,
    }
}

fn criteria_summary(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if !criteria.company_name.is_empty() {
        parts.push(format!("company~{:?}", criteria.company_name));
    }
    if !criteria.location.is_empty() {
        parts.push(format!("location~{:?}", criteria.location));
    }
    if !criteria.remote.is_empty() {
        let modes: Vec<_> = criteria.remote.iter().map(|mode| mode.as_str()).collect();
        parts.push(format!("remote={}", modes.join("/")));
    }
    if !criteria.tech_stack.is_empty() {
        let stacks: Vec<_> = criteria.tech_stack.iter().map(String::as_str).collect();
        parts.push(format!("tech={}", stacks.join("/")));
    }
    if !criteria.job_role.is_empty() {
        let roles: Vec<_> = criteria.job_role.iter().map(String::as_str).collect();
        parts.push(format!("role={}", roles.join("/")));
    }
    if let Some(salary) = criteria.min_jd_salary {
        parts.push(format!("pay>={salary}"));
    }
    if let Some(exp) = criteria.min_exp {
        parts.push(format!("exp>={exp}"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> JobListing {
        JobListing {
            company_name: "Acme".to_string(),
            job_role: "frontend".to_string(),
            location: "remote".to_string(),
            min_exp: Some(2.0),
            max_exp: Some(5.0),
            max_jd_salary: Some(90.0),
            job_details_from_company: "About Acme".to_string(),
            jd_link: "https://jobs.example/acme".to_string(),
            ..JobListing::default()
        }
    }

    #[test]
    fn no_results_message_is_shown_when_idle_and_empty() {
        let view = AppViewModel {
            no_results: true,
            ..AppViewModel::default()
        };
        let text = render(&view, 0..0);
        assert!(text.contains("No jobs found matching the selected criteria."));
        assert!(!text.contains("loading"));
    }

    #[test]
    fn cards_show_ranges_and_loading_indicator() {
        let view = AppViewModel {
            listings: vec![listing()],
            loaded_count: 3,
            loading: true,
            ..AppViewModel::default()
        };
        let text = render(&view, 0..1);
        assert!(text.starts_with("Showing 1 of 3 loaded jobs | offset 0 | loading"));
        assert!(text.contains(
            "   1. Acme - frontend (remote)\n      pay up to 90K USD | exp 2-5 yrs\n"
        ));
        assert!(text.contains("      Easy Apply: https://jobs.example/acme"));
        assert!(text.contains("... loading more jobs"));
        assert!(!text.contains("No jobs found"));
    }

    #[test]
    fn unknown_ranges_read_not_specified() {
        let job = JobListing {
            company_name: "Globex".to_string(),
            ..JobListing::default()
        };
        let view = AppViewModel {
            listings: vec![job],
            ..AppViewModel::default()
        };
        let text = render(&view, 0..1);
        assert!(text.contains("pay Not specified | exp Not specified"));
        assert!(!text.contains("Easy Apply"));
    }

    #[test]
    fn long_descriptions_are_previewed_and_expanded_on_request() {
        let description = "é".repeat(DETAILS_PREVIEW_CHARS + 20);
        let view = AppViewModel {
            listings: vec![
                listing(),
                JobListing {
                    job_details_from_company: description.clone(),
                    ..listing()
                },
            ],
            ..AppViewModel::default()
        };

        let text = render(&view, 0..2);
        let preview = "é".repeat(DETAILS_PREVIEW_CHARS);
        assert!(text.contains(&format!("{preview}... (details 2 for more)")));
        assert!(!text.contains(&"é".repeat(DETAILS_PREVIEW_CHARS + 1)));
        assert!(text.contains("      About Acme\n"));

        let full = details(&view, 2).unwrap();
        assert!(full.starts_with("   2. Acme - frontend (remote)"));
        assert!(full.contains(&description));
        assert!(!full.contains("for more"));

        assert_eq!(details(&view, 0), None);
        assert_eq!(details(&view, 3), None);
    }

    #[test]
    fn status_line_summarizes_applied_filters_and_errors() {
        let mut view = AppViewModel::default();
        view.criteria.company_name = "ac".to_string();
        view.criteria.min_exp = Some(3.0);
        view.last_error = Some("transport failure: timeout".to_string());

        let line = status_line(&view);
        assert!(line.contains("filters: company~\"ac\", exp>=3"));
        assert!(line.ends_with("last fetch failed: transport failure: timeout"));
    }
}
