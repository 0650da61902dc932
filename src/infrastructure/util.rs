use crate::application::ports::util::Slugifier;
use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-_]+").unwrap());
static REPEATED_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Lowercases, folds every run of characters outside `[a-z0-9\-_]` into a
/// single `-`, collapses repeated dashes, and trims dashes from both ends.
#[derive(Default, Clone)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn normalize(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let replaced = DISALLOWED.replace_all(&lowered, "-");
        let collapsed = REPEATED_DASH.replace_all(&replaced, "-");
        collapsed.trim_matches('-').to_owned()
    }
}
