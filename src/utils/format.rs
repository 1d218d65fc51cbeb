/// Formats a distance in meters as the kilometer label shown in the
/// results panel, e.g. 3500 -> "3.50 kms".
pub fn format_kms(meters: u64) -> String {
    format!("{:.2} kms", meters as f64 / 1000.0)
}
