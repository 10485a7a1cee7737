//! Slug derivation from file names

use once_cell::sync::Lazy;
use regex::Regex;

static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").unwrap());
static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Derive a slug from a file's base name.
///
/// The steps run in this order: lower-case, drop the trailing extension,
/// collapse each run of characters outside `[a-z0-9]` into one `-`, then
/// trim hyphens from both ends. Uniqueness is not enforced.
///
/// ```
/// use idstamp::slugify;
///
/// assert_eq!(slugify("My Recipe v2.yaml"), "my-recipe-v2");
/// ```
pub fn slugify(basename: &str) -> String {
    let lowered = basename.to_lowercase();
    let stem = EXTENSION.replace(&lowered, "");
    let hyphenated = NON_ALNUM_RUN.replace_all(&stem, "-");
    hyphenated.trim_matches('-').to_string()
}
