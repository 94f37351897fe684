//! Field-size estimate from the search API's "<range>-participants" tags.

const PARTICIPANTS_MARKER: &str = "participants";

/// Localized field-size range from the first participants tag, if any.
pub fn estimate_participants<S: AsRef<str>>(tag_labels: &[S]) -> Option<&'static str> {
    tag_labels
        .iter()
        .map(|label| label.as_ref())
        .filter(|label| label.contains(PARTICIPANTS_MARKER))
        .find_map(bucket_label)
}

// Matches on the leading range token so "100-999" is not mistaken for "0-99".
fn bucket_label(label: &str) -> Option<&'static str> {
    let range = label.split("-participants").next().unwrap_or(label);
    match range {
        "0-99" => Some("100명 미만"),
        "100-999" => Some("100~999명"),
        "1000-4999" => Some("1,000~4,999명"),
        "5000-9999" => Some("5,000~9,999명"),
        "10000-24999" => Some("1만~2만5천명"),
        _ if range.starts_with("25000") => Some("2만5천명 이상"),
        _ if range.starts_with("50000") => Some("5만명 이상"),
        _ => None,
    }
}
