//! Lead-capture form model and validation.
//!
//! Validation runs the four field checks independently and surfaces every
//! failure at once; nothing short-circuits. The store never validates, so
//! this is the only gate between the modal and `set_user_details`.

use serde::{Deserialize, Serialize};

use crate::services::enrollment_state::UserDetails;

/// Country dialing codes offered by the lead form.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+91", "India"),
    ("+1", "USA"),
    ("+44", "UK"),
    ("+61", "Australia"),
];

/// Working copy of the lead form fields while the modal is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub full_name: String,
    pub email: String,
    pub country_code: String,
    pub mobile: String,
    pub service: String,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            country_code: COUNTRY_CODES[0].0.to_string(),
            mobile: String::new(),
            service: String::new(),
        }
    }

    pub fn into_details(self) -> UserDetails {
        UserDetails {
            full_name: self.full_name,
            email: self.email,
            country_code: self.country_code,
            mobile: self.mobile,
            service: self.service,
        }
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-field validation errors. A `None` field passed its check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub mobile: Option<&'static str>,
    pub service: Option<&'static str>,
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.mobile.is_none()
            && self.service.is_none()
    }

    pub fn count(&self) -> usize {
        [
            self.full_name.is_some(),
            self.email.is_some(),
            self.mobile.is_some(),
            self.service.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Validate the lead form. All checks run; failures are collected.
pub fn validate(form: &LeadForm) -> LeadFormErrors {
    let mut errors = LeadFormErrors::default();
    if form.full_name.trim().is_empty() {
        errors.full_name = Some("Full name is required");
    }
    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !is_valid_email(email) {
        errors.email = Some("Email is invalid");
    }
    if form.mobile.trim().is_empty() {
        errors.mobile = Some("Mobile number is required");
    }
    if form.service.is_empty() {
        errors.service = Some("Please select a service");
    }
    errors
}

/// Simple `text@text.text` shape check; not an RFC address parser.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !host.contains(char::is_whitespace)
        && !tld.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_collects_all_four_errors() {
        let mut form = LeadForm::new();
        form.country_code.clear();
        let errors = validate(&LeadForm::new());
        assert_eq!(errors.count(), 4);
        // country code is preselected and never validated
        let errors = validate(&form);
        assert_eq!(errors.count(), 4);
    }

    #[test]
    fn test_invalid_email_is_the_only_error() {
        let form = LeadForm {
            full_name: "A B".into(),
            email: "abc".into(),
            country_code: "+91".into(),
            mobile: "9999999999".into(),
            service: "career-launchpad".into(),
        };
        let errors = validate(&form);
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.email, Some("Email is invalid"));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let form = LeadForm {
            full_name: "A B".into(),
            email: "a@b.com".into(),
            country_code: "+91".into(),
            mobile: "9999999999".into(),
            service: "career-launchpad".into(),
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_padded_email_is_accepted() {
        // surrounding whitespace is tolerated; the shape check sees the
        // trimmed value
        let form = LeadForm {
            full_name: "A B".into(),
            email: "  a@b.com ".into(),
            country_code: "+91".into(),
            mobile: "9999999999".into(),
            service: "career-launchpad".into(),
        };
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
    }

    #[test]
    fn test_into_details_preserves_fields() {
        let form = LeadForm {
            full_name: "A B".into(),
            email: "a@b.com".into(),
            country_code: "+1".into(),
            mobile: "5550100".into(),
            service: "study-abroad".into(),
        };
        let details = form.clone().into_details();
        assert_eq!(details.full_name, form.full_name);
        assert_eq!(details.service, form.service);
    }
}
