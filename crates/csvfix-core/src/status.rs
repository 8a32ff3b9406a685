/// Canonical spelling of the sold status.
pub const SOLD: &str = "Sold";

/// Recognized status spellings, keyed by lowercase form.
const STATUS_TABLE: [(&str, &str); 4] = [
    ("done", "Done"),
    ("sold", SOLD),
    ("pending", "Pending"),
    ("panding", "Pending"),
];

/// Canonicalize a status value.
///
/// Lookup ignores case and surrounding whitespace. Unrecognized values,
/// including the empty string, are returned unchanged.
pub fn normalize_status(status: &str) -> String {
    let key = status.trim().to_lowercase();
    STATUS_TABLE
        .iter()
        .find(|(raw, _)| *raw == key)
        .map_or_else(|| status.to_string(), |(_, canonical)| (*canonical).to_string())
}
