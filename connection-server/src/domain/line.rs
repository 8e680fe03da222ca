//! Line labels shown for each leg, e.g. "EC 123" or "R 1234 S4".

/// Build a line label from optional tokens.
///
/// Absent, empty and whitespace-only tokens are dropped; the rest are trimmed
/// and joined with single spaces.
///
/// # Examples
///
/// ```
/// use connection_server::domain::line_label;
///
/// assert_eq!(line_label([Some("EC"), Some("123"), Some(""), None]), "EC 123");
/// assert_eq!(line_label([None, None, None, None]), "");
/// ```
pub fn line_label<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
