//! Name grammar shared by preheat policies and provider instances.
//!
//! A valid name is one or more ASCII alphanumeric runs joined by single
//! `.`, `_` or `-` separators. The same rule is enforced by the storage
//! layer, so both entity converters must go through [`validate_name`].

use std::sync::LazyLock;

use crate::error::{CoreError, CoreResult};

/// Pattern every policy and instance name must match.
pub const NAME_PATTERN: &str = r"^[A-Za-z0-9]+(?:[._-][A-Za-z0-9]+)*$";

static NAME_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(NAME_PATTERN).expect("valid regex"));

/// Returns `true` when `name` matches [`NAME_PATTERN`].
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Check `name` against [`NAME_PATTERN`], failing with
/// [`CoreError::InvalidName`] on rejection.
pub fn validate_name(name: &str) -> CoreResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidName(format!(
            "'{name}' must contain only letters, digits and single '.', '_' or '-' separators"
        )))
    }
}
