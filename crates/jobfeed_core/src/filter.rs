//! Multi-criteria filter predicate.
//!
//! Every rule is an independent exclusion; a listing is kept only when no
//! rule rejects it. The engine never reorders and never mutates its inputs.

use crate::{FilterCriteria, JobListing, RemoteMode};

/// Returns the listings that satisfy `criteria`, in their original order.
pub fn filter_listings(listings: &[JobListing], criteria: &FilterCriteria) -> Vec<JobListing> {
    listings
        .iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .cloned()
        .collect()
}

/// Whether a single listing passes every rule.
pub fn matches_criteria(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    passes_min_exp(listing, criteria)
        && passes_company(listing, criteria)
        && passes_remote(listing, criteria)
        && passes_tech_stack(listing, criteria)
        && passes_job_role(listing, criteria)
        && passes_min_salary(listing, criteria)
        && passes_location(listing, criteria)
}

fn passes_min_exp(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    criteria
        .min_exp
        .is_none_or(|min| listing.min_exp_or_zero() >= min)
}

fn passes_company(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    contains_ignore_case(&listing.company_name, &criteria.company_name)
}

fn passes_remote(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    let wants_remote = criteria.remote.contains(&RemoteMode::Remote);
    let wants_on_site = criteria.remote.contains(&RemoteMode::OnSite);
    match (wants_remote, wants_on_site) {
        (true, false) => listing.is_remote(),
        (false, true) => !listing.is_remote(),
        // Nothing selected, or both selected: no constraint.
        _ => true,
    }
}

fn passes_tech_stack(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    criteria.tech_stack.is_empty() || criteria.tech_stack.contains(&listing.tech_stack)
}

fn passes_job_role(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    criteria.job_role.is_empty() || criteria.job_role.contains(&listing.job_role)
}

fn passes_min_salary(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    criteria
        .min_jd_salary
        .is_none_or(|min| listing.min_salary_or_zero() >= min)
}

fn passes_location(listing: &JobListing, criteria: &FilterCriteria) -> bool {
    contains_ignore_case(&listing.location, &criteria.location)
}

/// Empty needles match everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
