// src/description.rs

/// Leading text of every rendered production.
pub const DESCRIPTION_PREFIX: &str = "Object is composed of\n:";

/// Renders a production description from its kind labels.
///
/// Each label is preceded by a single tab, in iteration order. No trailing
/// newline is appended; the prefix carries the only line break.
///
/// # Arguments
/// * `kinds` - Kind labels in the order the materials were supplied
///
/// # Returns
/// * `String` - The full description text
pub fn describe<'a, I>(kinds: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    kinds
        .into_iter()
        .fold(String::from(DESCRIPTION_PREFIX), |mut description, kind| {
            description.push('\t');
            description.push_str(kind);
            description
        })
}
