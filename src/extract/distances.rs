//! Race distance lists.

/// Distances the Korean calendar dataset keeps, in the site's own spelling.
pub const ALLOWED_DISTANCES: [&str; 4] = ["풀", "하프", "10km", "5km"];

/// Keeps allow-listed entries of a comma-separated list, in order, duplicates included.
pub fn filter_distances(list: &str) -> String {
    list.split(',')
        .map(str::trim)
        .filter(|entry| ALLOWED_DISTANCES.contains(entry))
        .collect::<Vec<_>>()
        .join(",")
}

/// Federation calendar codes ("M, H, R") → distance labels, first occurrence only.
pub fn map_federation_distances(raw: &str) -> Vec<String> {
    let compact: String = raw.chars().filter(|c| *c != ' ').collect();
    let mut out: Vec<String> = Vec::new();
    for code in compact.split(',') {
        let label = match code {
            "M" => "FULL",
            "H" => "HALF",
            "R" => "10K",
            "U" => "ULTRA",
            _ => continue,
        };
        if !out.iter().any(|existing| existing == label) {
            out.push(label.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_keeps_order() {
        assert_eq!(filter_distances("풀,하프,마라톤,5km"), "풀,하프,5km");
        assert_eq!(filter_distances("5km, 풀 ,5km"), "5km,풀,5km");
        assert_eq!(filter_distances("걷기"), "");
        assert_eq!(filter_distances(""), "");
    }

    #[test]
    fn federation_codes_map_and_dedupe() {
        assert_eq!(map_federation_distances("M, H, M, X"), vec!["FULL", "HALF"]);
        assert!(map_federation_distances("").is_empty());
    }
}
