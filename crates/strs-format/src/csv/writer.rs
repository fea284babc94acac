//! Row writer for comma-separated values

use std::borrow::Cow;

/// Quote an entry if it contains a comma or a quote
///
/// Embedded quotes are doubled. Anything else, including leading and
/// trailing whitespace, is written as is.
///
/// # Examples
///
/// ```
/// use strs_format::csv::escape;
///
/// assert_eq!(escape("New York"), "New York");
/// assert_eq!(escape("APT 9, REAR"), "\"APT 9, REAR\"");
/// assert_eq!(escape("\"b\""), "\"\"\"b\"\"\"");
/// ```
#[must_use]
pub fn escape(entry: &str) -> Cow<'_, str> {
    if entry.contains([',', '"']) {
        Cow::Owned(format!("\"{}\"", entry.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(entry)
    }
}

/// Escape each entry and join them with commas
#[must_use]
pub fn join<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&escape(entry.as_ref()));
    }
    line
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_only_when_needed() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
        assert!(matches!(escape(" padded "), Cow::Borrowed(_)));
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["a", "b", "", "d"]), "a,b,,d");
        assert_eq!(join(["C000", "APT 9, REAR"]), "C000,\"APT 9, REAR\"");
        assert_eq!(join(Vec::<String>::new()), "");
    }
}
