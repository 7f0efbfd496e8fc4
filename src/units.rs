/// Multiplier that converts a throughput figure into kilobytes.
///
/// mod_status prints byte figures with an optional scale letter in front of
/// the `B` ("271.8 kB/second", "1.2 MB/second", plain "512 B/second"). An
/// unsuffixed figure is raw bytes and gets divided down to KB; suffixed
/// figures are treated as already-scaled and multiplied up. The `k` case
/// therefore stays at 1. Returns `None` for a letter that is not a known
/// scale, which callers treat as "metric absent".
pub fn kb_multiplier(suffix: Option<char>) -> Option<f64> {
    match suffix {
        None => Some(0.000_976_562_5),
        Some(c) => match c.to_ascii_lowercase() {
            'k' => Some(1.0),
            'm' => Some(1024.0),
            'g' => Some(1_048_576.0),
            _ => None,
        },
    }
}
