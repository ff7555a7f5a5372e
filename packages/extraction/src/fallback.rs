//! Heuristic field extraction from free-form model output.
//!
//! Best-effort degraded mode for when the model ignores the JSON
//! instruction: keyword/line matching only, no semantic guarantees.

/// Extract a field value from free text by keyword matching.
///
/// Keywords are tried in order. For the first keyword present anywhere in
/// the lowercased text, the first line containing it (case-insensitive,
/// substring match) is returned trimmed. Returns an empty string when no
/// keyword matches.
pub fn extract_field(text: &str, keywords: &[&str]) -> String {
    let text_lower = text.to_lowercase();
    for keyword in keywords {
        if text_lower.contains(keyword) {
            for line in text.lines() {
                if line.to_lowercase().contains(keyword) {
                    return line.trim().to_string();
                }
            }
        }
    }
    String::new()
}
