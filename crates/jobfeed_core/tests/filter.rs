use std::collections::BTreeSet;

use jobfeed_core::{filter_listings, matches_criteria, FilterCriteria, JobListing, RemoteMode};
use pretty_assertions::assert_eq;

fn job(
    company: &str,
    min_exp: f64,
    salary: f64,
    location: &str,
    stack: &str,
    role: &str,
) -> JobListing {
    JobListing {
        company_name: company.to_string(),
        min_exp: Some(min_exp),
        min_jd_salary: Some(salary),
        location: location.to_string(),
        tech_stack: stack.to_string(),
        job_role: role.to_string(),
        ..JobListing::default()
    }
}

fn catalog() -> Vec<JobListing> {
    vec![
        job("Acme", 2.0, 15.0, "Remote", "React", "frontend"),
        job("Globex", 5.0, 5.0, "NYC", "Java", "backend"),
        job("Initech", 4.0, 40.0, "remote (US)", "Python", "backend"),
        job("Umbrella", 7.0, 60.0, "Bangalore", "React", "tech lead"),
        job("acme labs", 3.0, 25.0, "Delhi NCR", "Swift", "ios"),
    ]
}

fn set<T: Ord + Clone>(items: &[T]) -> BTreeSet<T> {
    items.iter().cloned().collect()
}

fn strings(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn companies(listings: &[JobListing]) -> Vec<&str> {
    listings.iter().map(|l| l.company_name.as_str()).collect()
}

#[test]
fn end_to_end_scenario_filters_everything_out() {
    let listings = vec![
        job("Acme", 2.0, 15.0, "Remote", "React", "frontend"),
        job("Globex", 5.0, 5.0, "NYC", "Java", "backend"),
    ];
    let criteria = FilterCriteria {
        min_exp: Some(3.0),
        remote: set(&[RemoteMode::Remote]),
        ..FilterCriteria::default()
    };

    assert!(filter_listings(&listings, &criteria).is_empty());
}

#[test]
fn unconstrained_criteria_keep_everything_in_order() {
    let listings = catalog();
    let criteria = FilterCriteria::default();
    assert!(criteria.is_unconstrained());
    assert_eq!(filter_listings(&listings, &criteria), listings);
}

#[test]
fn filtering_is_idempotent() {
    let listings = catalog();
    let criteria = FilterCriteria {
        tech_stack: strings(&["React", "Python"]),
        ..FilterCriteria::default()
    };

    let first = filter_listings(&listings, &criteria);
    let second = filter_listings(&listings, &criteria);
    assert_eq!(first, second);
    assert_eq!(companies(&first), vec!["Acme", "Initech", "Umbrella"]);
}

#[test]
fn result_is_an_order_preserving_subsequence() {
    let listings = catalog();
    let criteria = FilterCriteria {
        min_jd_salary: Some(20.0),
        ..FilterCriteria::default()
    };

    let filtered = filter_listings(&listings, &criteria);
    let mut cursor = listings.iter();
    for kept in &filtered {
        assert!(
            cursor.any(|candidate| candidate == kept),
            "{} is out of order or not from the input",
            kept.company_name
        );
    }
    assert_eq!(companies(&filtered), vec!["Initech", "Umbrella", "acme labs"]);
}

#[test]
fn every_kept_listing_passes_each_rule_on_its_own() {
    let listings = catalog();
    let criteria = FilterCriteria {
        min_exp: Some(3.0),
        company_name: "a".to_string(),
        remote: set(&[RemoteMode::OnSite]),
        tech_stack: strings(&["React", "Swift", "Java"]),
        job_role: strings(&["tech lead", "ios", "backend"]),
        min_jd_salary: Some(10.0),
        ..FilterCriteria::default()
    };

    let filtered = filter_listings(&listings, &criteria);
    assert_eq!(companies(&filtered), vec!["Umbrella", "acme labs"]);

    let single_rules = [
        FilterCriteria {
            min_exp: criteria.min_exp,
            ..FilterCriteria::default()
        },
        FilterCriteria {
            company_name: criteria.company_name.clone(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            remote: criteria.remote.clone(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            tech_stack: criteria.tech_stack.clone(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            job_role: criteria.job_role.clone(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            min_jd_salary: criteria.min_jd_salary,
            ..FilterCriteria::default()
        },
    ];
    for listing in &filtered {
        for rule in &single_rules {
            assert!(matches_criteria(listing, rule), "{rule:?}");
        }
    }
}

#[test]
fn company_name_matches_substring_ignoring_case() {
    let criteria = FilterCriteria {
        company_name: "ACME".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["Acme", "acme labs"]
    );
}

#[test]
fn remote_only_keeps_remote_locations() {
    let criteria = FilterCriteria {
        remote: set(&[RemoteMode::Remote]),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["Acme", "Initech"]
    );
}

#[test]
fn on_site_only_drops_remote_locations() {
    let criteria = FilterCriteria {
        remote: set(&[RemoteMode::OnSite]),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["Globex", "Umbrella", "acme labs"]
    );
}

#[test]
fn both_remote_modes_pass_but_other_rules_still_apply() {
    let criteria = FilterCriteria {
        remote: set(&[RemoteMode::Remote, RemoteMode::OnSite]),
        job_role: strings(&["backend"]),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["Globex", "Initech"]
    );
}

#[test]
fn tech_stack_and_role_require_exact_membership() {
    let criteria = FilterCriteria {
        tech_stack: strings(&["react"]),
        ..FilterCriteria::default()
    };
    assert!(filter_listings(&catalog(), &criteria).is_empty());

    let criteria = FilterCriteria {
        job_role: strings(&["frontend", "ios"]),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["Acme", "acme labs"]
    );
}

#[test]
fn minimums_are_inclusive() {
    let criteria = FilterCriteria {
        min_exp: Some(4.0),
        min_jd_salary: Some(40.0),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["Initech", "Umbrella"]
    );
}

#[test]
fn unknown_numbers_count_as_zero() {
    let unknown = JobListing {
        company_name: "Mystery".to_string(),
        ..JobListing::default()
    };
    let zero_floor = FilterCriteria {
        min_exp: Some(0.0),
        min_jd_salary: Some(0.0),
        ..FilterCriteria::default()
    };
    assert!(matches_criteria(&unknown, &zero_floor));

    let some_floor = FilterCriteria {
        min_jd_salary: Some(10.0),
        ..FilterCriteria::default()
    };
    assert!(!matches_criteria(&unknown, &some_floor));
}

#[test]
fn location_text_narrows_by_substring() {
    let criteria = FilterCriteria {
        location: "delhi".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(
        companies(&filter_listings(&catalog(), &criteria)),
        vec!["acme labs"]
    );
}

#[test]
fn criteria_deserialize_from_form_json() {
    let criteria: FilterCriteria = serde_json::from_str(
        r#"{ "minExp": 3, "remote": ["remote", "on-site"], "techStack": ["React"] }"#,
    )
    .unwrap();

    assert_eq!(criteria.min_exp, Some(3.0));
    assert_eq!(criteria.remote, set(&[RemoteMode::Remote, RemoteMode::OnSite]));
    assert_eq!(criteria.tech_stack, strings(&["React"]));
    assert!(criteria.company_name.is_empty());
}
