//! Concrete schemas for the production and auth forms.

use crate::models::production::Genre;

use super::rules::{Check, FieldRule, FieldSchema, FormSchema};

/// Ceiling for production budgets, in dollars.
pub const MAX_BUDGET: f64 = 500_000_000.0;

/// Image URLs must use http(s) and end in an image-file suffix.
pub const IMAGE_PATTERN: &str = r"^https?://.*\.(?:png|jpeg|jpg)$";

/// Passwords are restricted to latin letters and digits.
pub const PASSWORD_PATTERN: &str = "^[a-zA-Z0-9]+$";

/// Schema for the production create/edit form.
///
/// Description stays free text. The image URL is shape-checked but not
/// required, so a record without artwork still validates as long as the
/// field is left out entirely.
pub fn production_schema() -> FormSchema {
    FormSchema {
        name: "production",
        fields: vec![
            field(
                "title",
                vec![
                    rule(Check::Required, "Title is required"),
                    rule(Check::MinLength(2), "Titles must be at least 2 chars"),
                    rule(Check::MaxLength(50), "Titles must be max 50 chars"),
                ],
            ),
            field(
                "genre",
                vec![
                    rule(Check::Required, "Genre is required"),
                    rule(
                        Check::OneOf(Genre::ALL),
                        "genre must be one of the following values: Drama, Musical, Opera",
                    ),
                ],
            ),
            field(
                "budget",
                vec![
                    rule(Check::Required, "Budget is required"),
                    rule(Check::Positive, "Budget has to be a positive number"),
                    rule(
                        Check::MaxValue(MAX_BUDGET),
                        "Budget cannot be higher than 500000000",
                    ),
                ],
            ),
            field(
                "image",
                vec![rule(
                    Check::Pattern(IMAGE_PATTERN),
                    "Images must be in the valid format (jpg, jpeg, png)",
                )],
            ),
            field(
                "director",
                vec![
                    rule(Check::Required, "Director is required"),
                    rule(Check::MinLength(2), "Directors must be at least 2 chars"),
                ],
            ),
        ],
    }
}

/// Schema for the registration form.
pub fn signup_schema() -> FormSchema {
    FormSchema {
        name: "signup",
        fields: vec![
            field(
                "username",
                vec![
                    rule(Check::Required, "Username is required"),
                    rule(
                        Check::MinLength(2),
                        "Usernames must be at least 2 chars long",
                    ),
                    rule(Check::MaxLength(20), "Usernames must be max 20 chars"),
                ],
            ),
            email_field(),
            password_field(),
        ],
    }
}

/// Schema for the login form. Same email and password rules as signup.
pub fn login_schema() -> FormSchema {
    FormSchema {
        name: "login",
        fields: vec![email_field(), password_field()],
    }
}

// ---- private helpers ----

fn rule(check: Check, message: &'static str) -> FieldRule {
    FieldRule { check, message }
}

fn field(field: &'static str, rules: Vec<FieldRule>) -> FieldSchema {
    FieldSchema { field, rules }
}

fn email_field() -> FieldSchema {
    field(
        "email",
        vec![
            rule(Check::Required, "Email is required"),
            rule(Check::Email, "email must be a valid email"),
        ],
    )
}

fn password_field() -> FieldSchema {
    field(
        "password",
        vec![
            rule(Check::Required, "Password is required"),
            rule(
                Check::MinLength(8),
                "Passwords must be at least 8 chars long",
            ),
            rule(
                Check::Pattern(PASSWORD_PATTERN),
                "Passwords can only contain latin numbers and letters",
            ),
        ],
    )
}
