use serde::{Deserialize, Serialize};

/// One job posting as served by the catalog.
///
/// Listings have no stable identity; the accumulated set is append-only and
/// positional. Numeric fields are optional because the catalog serves `null`
/// for unknown ranges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobListing {
    pub company_name: String,
    pub job_role: String,
    pub location: String,
    pub tech_stack: String,
    pub min_exp: Option<f64>,
    pub max_exp: Option<f64>,
    pub min_jd_salary: Option<f64>,
    pub max_jd_salary: Option<f64>,
    pub salary_currency_code: String,
    pub job_details_from_company: String,
    pub logo_url: String,
    pub jd_link: String,
}

impl JobListing {
    /// Minimum experience, with an unknown value treated as zero.
    pub fn min_exp_or_zero(&self) -> f64 {
        self.min_exp.unwrap_or(0.0)
    }

    /// Minimum salary, with an unknown value treated as zero.
    pub fn min_salary_or_zero(&self) -> f64 {
        self.min_jd_salary.unwrap_or(0.0)
    }

    pub fn is_remote(&self) -> bool {
        self.location.to_lowercase().contains("remote")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_field_names_and_nulls() {
        let listing: JobListing = serde_json::from_str(
            r#"{
                "jdUid": "cfff35ac-053c-11ef-83d3-06301d0a7178-92010",
                "jdLink": "https://weekday.works",
                "jobDetailsFromCompany": "About us",
                "maxJdSalary": 61,
                "minJdSalary": null,
                "salaryCurrencyCode": "USD",
                "location": "delhi ncr",
                "minExp": 3,
                "maxExp": 6,
                "jobRole": "frontend",
                "companyName": "Dropbox",
                "logoUrl": "https://logo.clearbit.com/dropbox.com"
            }"#,
        )
        .unwrap();

        assert_eq!(listing.company_name, "Dropbox");
        assert_eq!(listing.job_role, "frontend");
        assert_eq!(listing.min_exp, Some(3.0));
        assert_eq!(listing.min_jd_salary, None);
        assert_eq!(listing.min_salary_or_zero(), 0.0);
        assert_eq!(listing.max_jd_salary, Some(61.0));
        assert!(listing.tech_stack.is_empty());
    }

    #[test]
    fn remote_detection_ignores_case() {
        let listing = JobListing {
            location: "Fully REMOTE".to_string(),
            ..JobListing::default()
        };
        assert!(listing.is_remote());
    }
}
