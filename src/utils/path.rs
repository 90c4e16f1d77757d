use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// Paths without a leading tilde are returned unchanged. Returns `None` when
/// expansion is needed but `HOME` is not set, or for the `~user` form which
/// is not supported.
///
/// # Examples
///
/// ```
/// use skytap_setup::utils::path::expand_tilde;
///
/// let path = expand_tilde("/var/lib/skytap").unwrap();
/// assert_eq!(path.to_str(), Some("/var/lib/skytap"));
/// ```
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Some(PathBuf::from(path));
    };

    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }

    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(rest.trim_start_matches('/')))
}
