use crate::ui::Ui;
use std::cmp::Ordering;

/// Oldest cloud controller API this client is tested against.
pub const MIN_SUPPORTED_API_VERSION: &str = "3.84.0";

/// UAA version that understands the `--origin` login hint.
pub const MIN_UAA_VERSION_FOR_ORIGIN: &str = "4.19.0";

fn parse(version: &str) -> Option<Vec<u64>> {
    let core = version.trim().trim_start_matches('v');
    let core = core.split(['-', '+']).next()?;
    core.split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()
        .filter(|parts| !parts.is_empty())
}

/// Compare dotted versions; `None` when either side does not parse.
pub fn compare_versions(current: &str, minimum: &str) -> Option<Ordering> {
    let mut current = parse(current)?;
    let mut minimum = parse(minimum)?;
    let len = current.len().max(minimum.len());
    current.resize(len, 0);
    minimum.resize(len, 0);
    Some(current.cmp(&minimum))
}

/// An empty version means the server did not report one; it is not held against it.
pub fn meets_minimum(current: &str, minimum: &str) -> bool {
    current.is_empty()
        || matches!(
            compare_versions(current, minimum),
            Some(Ordering::Equal | Ordering::Greater)
        )
}

pub fn warn_if_api_version_below_supported_minimum(ui: &dyn Ui, api_version: &str) {
    match compare_versions(api_version, MIN_SUPPORTED_API_VERSION) {
        Some(Ordering::Less) => ui.display_warning(
            "Warning: Your targeted API's version ({APIVersion}) is less than the minimum supported API version ({MinSupportedVersion}). Some commands may not function correctly.",
            &[
                ("APIVersion", api_version),
                ("MinSupportedVersion", MIN_SUPPORTED_API_VERSION),
            ],
        ),
        Some(_) => {}
        None => ui.display_warning(
            "Warning: unable to determine whether targeted API's version meets minimum supported.",
            &[],
        ),
    }
}
