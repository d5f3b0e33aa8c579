use regex::Regex;
use std::sync::OnceLock;

/// Accepted answers for the interest question.
pub const INTEREST_OPTIONS: [&str; 2] = ["yes", "no"];

/// Budget tier codes offered by the form.
pub const BUDGET_OPTIONS: [&str; 4] = ["90lac-1cr", "1cr-110cr", "110cr-120cr", "flexible"];

/// Validate a mobile number: exactly ten digits, first digit 6-9
/// (Indian mobile numbering plan).
pub fn is_valid_mobile(mobile: &str) -> bool {
    static MOBILE_REGEX: OnceLock<Regex> = OnceLock::new();
    MOBILE_REGEX
        .get_or_init(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap())
        .is_match(mobile)
}

/// Render a budget tier code as the label shown to the sales team.
/// Unknown codes pass through unchanged.
pub fn format_budget(budget: &str) -> String {
    match budget {
        "90lac-1cr" => "₹90 Lakhs - ₹1 Crore",
        "1cr-110cr" => "₹1 Crore - ₹1.10 Crore",
        "110cr-120cr" => "₹1.10 Crore - ₹1.20 Crore",
        "flexible" => "Flexible Budget",
        other => other,
    }
    .to_string()
}
