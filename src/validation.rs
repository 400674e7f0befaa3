// Input validation - runs before anything reaches the store
//
// Works on the raw JSON body so wrong types and misspelled keys are
// reported per field instead of as a single parse failure.

use crate::account::{AccountUpdate, NewAccount, NAME_MAX_LEN};
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// FIELD TOKENS
// ============================================================================

pub const ID_NOT_NULL: &str = "Id_Not_Null";
pub const ID_TYPE_ERROR: &str = "Id_Type_Error";
pub const NAME_NOT_NULL: &str = "Name_Not_Null";
pub const NAME_TYPE_ERROR: &str = "Name_Type_Error";
pub const NAME_SIZE_ERROR: &str = "Name_Size_Error";
pub const BALANCE_NOT_NULL: &str = "Balance_Not_Null";
pub const BALANCE_TYPE_ERROR: &str = "Balance_Type_Error";
pub const BODY_NOT_OBJECT: &str = "Body_Not_Object";

// ============================================================================
// VIOLATIONS
// ============================================================================

/// One failed field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub token: String,
}

impl FieldViolation {
    pub fn new(field: &str, token: &str) -> Self {
        FieldViolation {
            field: field.to_string(),
            token: token.to_string(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.token)
    }
}

pub type ValidationResult<T> = Result<T, Vec<FieldViolation>>;

// ============================================================================
// VALIDATORS
// ============================================================================

/// Validate a PUT body and turn it into an `AccountUpdate`.
///
/// Every violation is collected; the caller gets all of them at once.
pub fn validate_update(body: &Value) -> ValidationResult<AccountUpdate> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => return Err(vec![FieldViolation::new("body", BODY_NOT_OBJECT)]),
    };

    let mut violations = Vec::new();

    let id = check_id(obj, &mut violations);
    let name = check_name(obj, &mut violations);
    let balance = check_balance(obj, &mut violations);

    match (id, name, balance) {
        (Some(id), Some(name), Some(balance)) if violations.is_empty() => {
            Ok(AccountUpdate { id, name, balance })
        }
        _ => Err(violations),
    }
}

/// Validate an account about to be inserted (seeding path)
pub fn validate_new(account: &NewAccount) -> ValidationResult<()> {
    let mut violations = Vec::new();

    if let Some(token) = name_size_violation(&account.name) {
        violations.push(FieldViolation::new("name", token));
    }
    if !account.balance.is_finite() {
        violations.push(FieldViolation::new("balance", BALANCE_TYPE_ERROR));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Parse an id taken from a URL path segment
pub fn parse_path_id(raw: &str) -> ValidationResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| vec![FieldViolation::new("id", ID_TYPE_ERROR)])
}

fn check_id(obj: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Option<i64> {
    match obj.get("id") {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new("id", ID_NOT_NULL));
            None
        }
        // An empty string is treated as an absent id
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(FieldViolation::new("id", ID_NOT_NULL));
            None
        }
        Some(value) => match value.as_i64() {
            Some(id) => Some(id),
            None => {
                violations.push(FieldViolation::new("id", ID_TYPE_ERROR));
                None
            }
        },
    }
}

fn check_name(obj: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Option<String> {
    match obj.get("name") {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new("name", NAME_NOT_NULL));
            None
        }
        Some(Value::String(name)) => match name_size_violation(name) {
            Some(token) => {
                violations.push(FieldViolation::new("name", token));
                None
            }
            None => Some(name.clone()),
        },
        Some(_) => {
            violations.push(FieldViolation::new("name", NAME_TYPE_ERROR));
            None
        }
    }
}

fn check_balance(obj: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Option<f64> {
    match obj.get("balance") {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new("balance", BALANCE_NOT_NULL));
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(balance) => Some(balance),
            None => {
                violations.push(FieldViolation::new("balance", BALANCE_TYPE_ERROR));
                None
            }
        },
        Some(_) => {
            violations.push(FieldViolation::new("balance", BALANCE_TYPE_ERROR));
            None
        }
    }
}

fn name_size_violation(name: &str) -> Option<&'static str> {
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_LEN {
        Some(NAME_SIZE_ERROR)
    } else {
        None
    }
}
