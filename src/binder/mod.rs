pub mod properties;
pub mod session;

pub type Properties = Vec<(String, String)>;

/// Relaxed form of a property key: lower case with `-` and `_` removed.
///
/// ```
/// use sessionware::binder::canonical;
///
/// assert_eq!(canonical("spring.session.store-type"), canonical("spring.session.storeType"));
/// assert_eq!(canonical("spring.session.store_type"), "spring.session.storetype");
/// ```
pub fn canonical(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
