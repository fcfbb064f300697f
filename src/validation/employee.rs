use thiserror::Error;

use crate::models::employee::Employee;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

/// Outcome of the employee name rule set. Exactly one rule fires per
/// rejection; rules are checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameRuleError {
    #[error("The name cannot contain numbers")]
    ContainsDigits,
    #[error("The name must be at least 2 characters long")]
    TooShort,
    #[error("The name cannot exceed 100 characters")]
    TooLong,
    #[error("The employee name already exists")]
    DuplicateName,
}

/// Validates and canonicalizes a candidate employee name against the
/// current roster.
///
/// Rules run in order and short-circuit: digits, minimum trimmed length,
/// maximum length, then the duplicate scan. Once the length rules pass,
/// `candidate.name` is rewritten with its canonical form ([`format_name`])
/// even if the duplicate check rejects afterwards, so callers must treat
/// the rewritten value as authoritative.
///
/// The duplicate scan formats every roster name through the same
/// canonicalization before comparing, which makes the comparison
/// case-insensitive on the raw input. The record being edited
/// (`existing.id == candidate.id`) never collides with itself.
pub fn validate_employee_name(
    candidate: &mut Employee,
    roster: &[Employee],
) -> Result<(), NameRuleError> {
    if candidate.name.chars().any(|c| c.is_numeric()) {
        return Err(NameRuleError::ContainsDigits);
    }
    if candidate.name.trim().chars().count() < MIN_NAME_LEN {
        return Err(NameRuleError::TooShort);
    }
    if candidate.name.chars().count() > MAX_NAME_LEN {
        return Err(NameRuleError::TooLong);
    }

    candidate.name = format_name(&candidate.name);

    let duplicated = roster.iter().any(|existing| {
        existing.id != candidate.id && format_name(&existing.name) == candidate.name
    });
    if duplicated {
        return Err(NameRuleError::DuplicateName);
    }

    Ok(())
}

/// Canonical capitalization: every token except the last is title-cased,
/// the last token (the surname) is fully upper-cased.
///
/// `"juan carlos chamizo"` becomes `"Juan Carlos CHAMIZO"`. A single-token
/// name yields an empty given-name segment and therefore a leading space
/// (`"doe"` -> `" DOE"`); both legacy implementations of this rule share
/// that artifact, so it is kept rather than corrected.
pub fn format_name(name: &str) -> String {
    let parts: Vec<&str> = name.split(' ').filter(|p| !p.is_empty()).collect();
    let Some((surname, given_names)) = parts.split_last() else {
        return name.to_string();
    };

    let given: Vec<String> = given_names.iter().map(|part| title_case(part)).collect();
    format!("{} {}", given.join(" "), surname.to_uppercase())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
