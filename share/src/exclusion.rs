//! Process-wide list of native share targets to hide.
//!
//! Entries are platform identifiers, e.g. `UIActivityType` raw values on iOS.
//! Platforms without a matching concept ignore the list.

use std::sync::{OnceLock, RwLock};

/// `UIActivityType.postToFacebook`, hidden unless the host says otherwise.
pub const POST_TO_FACEBOOK: &str = "com.apple.UIKit.activity.PostToFacebook";

fn excluded() -> &'static RwLock<Vec<String>> {
    static LIST: OnceLock<RwLock<Vec<String>>> = OnceLock::new();
    LIST.get_or_init(|| RwLock::new(vec![POST_TO_FACEBOOK.to_string()]))
}

/// Current exclusion list.
///
/// Share calls take a fresh copy each time, so changes apply to the next call.
#[must_use]
pub fn excluded_targets() -> Vec<String> {
    excluded()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

/// Replace the exclusion list.
pub fn set_excluded_targets<I, S>(targets: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
    *excluded()
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner) = targets;
}

/// Hide nothing.
pub fn clear_excluded_targets() {
    set_excluded_targets(std::iter::empty::<String>());
}
