use crate::logic::forms::FormData;
use crate::model::{NewBikeType, NewBrand, NewModel};
use chrono::NaiveDate;

/// One failed validation rule, tied to the form field that failed it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

// validator-style alphanumeric: ASCII letters and digits, at least one char,
// so an empty name fails this rule as well as the required rule.
fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Build a brand candidate from a decoded form. Always returns the candidate
/// so a failing submission can re-render with what the user typed.
pub fn brand_from_form(form: &FormData) -> (NewBrand, Vec<FieldError>) {
    let mut errors = Vec::new();

    let brand_name = form.value("brand_name").to_string();
    if brand_name.is_empty() {
        errors.push(FieldError::new(
            "brand_name",
            "Brand name must be specified.",
        ));
    }
    if !is_alphanumeric(&brand_name) {
        errors.push(FieldError::new(
            "brand_name",
            "Brand name has non-alphanumeric characters.",
        ));
    }

    let raw_date = form.value("founding_date");
    let founding_date = if raw_date.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new("founding_date", "Invalid founding date"));
                None
            }
        }
    };

    (
        NewBrand {
            brand_name,
            founding_date,
        },
        errors,
    )
}

pub fn biketype_from_form(form: &FormData) -> (NewBikeType, Vec<FieldError>) {
    let mut errors = Vec::new();

    let name = form.value("name").to_string();
    let length = name.chars().count();
    if length < 3 {
        errors.push(FieldError::new(
            "name",
            "BikeType name must contain at least 3 characters",
        ));
    } else if length > 100 {
        errors.push(FieldError::new(
            "name",
            "BikeType name must contain at most 100 characters",
        ));
    }

    (NewBikeType { name }, errors)
}

pub fn model_from_form(form: &FormData) -> (NewModel, Vec<FieldError>) {
    let mut errors = Vec::new();

    let model_name = form.value("model_name").to_string();
    if model_name.is_empty() {
        errors.push(FieldError::new("model_name", "Model name must not be empty."));
    }

    let brand = form.value("brand").to_string();
    if brand.is_empty() {
        errors.push(FieldError::new("brand", "Brand must not be empty."));
    }

    let power = form.value("power").to_string();
    if power.is_empty() {
        errors.push(FieldError::new("power", "Power must not be empty."));
    }

    let yt_url = form.value("yt_url").to_string();
    if yt_url.is_empty() {
        errors.push(FieldError::new("yt_url", "Link must not be empty."));
    }

    // Checkbox group: zero checked boxes is a valid (empty) selection.
    let biketype = form.values("biketype");

    (
        NewModel {
            model_name,
            brand,
            power,
            yt_url,
            biketype,
        },
        errors,
    )
}
