//! Declarative form schemas.
//!
//! Each form lists its fields with the rules they must satisfy. Validation
//! stops at the first failing rule per field and returns every failing
//! field at once so the form can show errors inline. Nothing that fails
//! validation is ever sent to the backend.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use crate::net::types::{ClothingDraft, LoginRequest, OccasionDraft, ProfileUpdate, RegisterRequest, Role};

/// Field name → message for every invalid field.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const MIN_PASSWORD_LEN: usize = 6;

/// One constraint on a text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLen(usize),
    MaxLen(usize),
    /// `YYYY-MM-DD` calendar date.
    Date,
    NonNegativeNumber,
    Phone,
    OneOf(&'static [&'static str]),
}

impl Rule {
    fn check(self, value: &str) -> Result<(), String> {
        let ok = match self {
            Self::Required => !value.is_empty(),
            Self::Email => is_email(value),
            Self::MinLen(n) => value.chars().count() >= n,
            Self::MaxLen(n) => value.chars().count() <= n,
            Self::Date => is_date(value),
            Self::NonNegativeNumber => value.parse::<f64>().is_ok_and(|n| n.is_finite() && n >= 0.0),
            Self::Phone => is_phone(value),
            Self::OneOf(options) => options.iter().any(|o| *o == value),
        };
        if ok { Ok(()) } else { Err(self.message()) }
    }

    fn message(self) -> String {
        match self {
            Self::Required => "This field is required".to_owned(),
            Self::Email => "Enter a valid email address".to_owned(),
            Self::MinLen(n) => format!("Must be at least {n} characters"),
            Self::MaxLen(n) => format!("Must be at most {n} characters"),
            Self::Date => "Enter a date as YYYY-MM-DD".to_owned(),
            Self::NonNegativeNumber => "Enter a number of 0 or more".to_owned(),
            Self::Phone => "Enter a valid phone number".to_owned(),
            Self::OneOf(options) => format!("Choose one of: {}", options.join(", ")),
        }
    }
}

/// Run `rules` against a trimmed value. Optional fields (no `Required`)
/// skip their remaining rules when blank.
fn check(errors: &mut FieldErrors, field: &'static str, value: &str, rules: &[Rule]) {
    check_raw(errors, field, value.trim(), rules);
}

/// Like [`check`] but on the value exactly as typed. Used for secrets,
/// which are sent untrimmed.
fn check_raw(errors: &mut FieldErrors, field: &'static str, value: &str, rules: &[Rule]) {
    if value.is_empty() && !rules.contains(&Rule::Required) {
        return;
    }
    if let Some(message) = rules.iter().find_map(|rule| rule.check(value).err()) {
        errors.insert(field, message);
    }
}

fn finish<T>(errors: FieldErrors, build: impl FnOnce() -> T) -> Result<T, FieldErrors> {
    if errors.is_empty() { Ok(build()) } else { Err(errors) }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

fn is_date(value: &str) -> bool {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    time::Date::parse(value, &format).is_ok()
}

fn is_phone(value: &str) -> bool {
    let allowed = value.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=20).contains(&value.len()) && digits >= 7
}

// =============================================================================
// FORMS
// =============================================================================

/// Login form.
///
/// # Errors
///
/// Returns per-field messages for a missing/malformed email or a short
/// password.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "email", email, &[Rule::Required, Rule::Email]);
    check_raw(&mut errors, "password", password, &[Rule::Required, Rule::MinLen(MIN_PASSWORD_LEN)]);
    finish(errors, || LoginRequest { email: email.trim().to_owned(), password: password.to_owned() })
}

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

/// Roles open to self-registration.
pub const REGISTERABLE_ROLES: &[&str] = &["styler", "partner"];

/// Registration form.
///
/// # Errors
///
/// Returns per-field messages; `confirm_password` fails when it differs
/// from `password`.
pub fn validate_register(form: &RegisterForm) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "name", &form.name, &[Rule::Required, Rule::MaxLen(80)]);
    check(&mut errors, "email", &form.email, &[Rule::Required, Rule::Email]);
    check_raw(&mut errors, "password", &form.password, &[Rule::Required, Rule::MinLen(MIN_PASSWORD_LEN)]);
    check_raw(&mut errors, "confirm_password", &form.confirm_password, &[Rule::Required]);
    if !errors.contains_key("confirm_password") && form.confirm_password != form.password {
        errors.insert("confirm_password", "Passwords do not match".to_owned());
    }
    check(&mut errors, "role", &form.role, &[Rule::Required, Rule::OneOf(REGISTERABLE_ROLES)]);
    let role = Role::parse(form.role.trim());
    match role {
        Some(role) if errors.is_empty() => Ok(RegisterRequest {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            password: form.password.clone(),
            role,
        }),
        _ => Err(errors),
    }
}

/// Raw garment form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClothingForm {
    pub name: String,
    pub category: String,
    pub color: String,
    pub size: String,
    pub price: String,
    pub image_url: String,
}

/// Garment form.
///
/// # Errors
///
/// Returns per-field messages; `price` must parse as a number ≥ 0.
pub fn validate_clothing(form: &ClothingForm) -> Result<ClothingDraft, FieldErrors> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "name", &form.name, &[Rule::Required, Rule::MaxLen(120)]);
    check(&mut errors, "category", &form.category, &[Rule::Required]);
    check(&mut errors, "size", &form.size, &[Rule::MaxLen(10)]);
    check(&mut errors, "price", &form.price, &[Rule::Required, Rule::NonNegativeNumber]);
    check(&mut errors, "image_url", &form.image_url, &[Rule::Required]);
    finish(errors, || ClothingDraft {
        name: form.name.trim().to_owned(),
        category: form.category.trim().to_owned(),
        color: optional(&form.color),
        size: optional(&form.size),
        price: form.price.trim().parse().unwrap_or_default(),
        image_url: form.image_url.trim().to_owned(),
    })
}

/// Raw occasion form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccasionForm {
    pub title: String,
    pub date: String,
    pub location: String,
    pub notes: String,
}

/// Occasion form.
///
/// # Errors
///
/// Returns per-field messages for a missing title or malformed date.
pub fn validate_occasion(form: &OccasionForm) -> Result<OccasionDraft, FieldErrors> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "title", &form.title, &[Rule::Required, Rule::MaxLen(120)]);
    check(&mut errors, "date", &form.date, &[Rule::Required, Rule::Date]);
    check(&mut errors, "notes", &form.notes, &[Rule::MaxLen(500)]);
    finish(errors, || OccasionDraft {
        title: form.title.trim().to_owned(),
        date: form.date.trim().to_owned(),
        location: optional(&form.location),
        notes: optional(&form.notes),
    })
}

/// Raw profile form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub avatar: String,
}

/// Profile form.
///
/// # Errors
///
/// Returns per-field messages for a missing name or malformed phone.
pub fn validate_profile(form: &ProfileForm) -> Result<ProfileUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();
    check(&mut errors, "name", &form.name, &[Rule::Required, Rule::MaxLen(80)]);
    check(&mut errors, "phone", &form.phone, &[Rule::Phone]);
    finish(errors, || ProfileUpdate {
        name: form.name.trim().to_owned(),
        phone: optional(&form.phone),
        avatar: optional(&form.avatar),
    })
}
