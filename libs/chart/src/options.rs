//! Chart appearance and page geometry.

/// Font family guaranteed to resolve in any SVG renderer.
const FALLBACK_FAMILY: &str = "sans-serif";

/// Tunable chart appearance. [`ChartOptions::default`] matches the layout
/// the operators are used to: A4 landscape, front-of-room band at the top,
/// green available seats, blue assigned seats.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Title drawn at the top of every page.
    pub title: String,

    /// Page size in points.
    pub page_width: f32,
    pub page_height: f32,

    /// Outer margin in points.
    pub margin: f32,

    /// Preferred font families, most specific first. A generic family is
    /// always appended at render time, so an empty list is valid.
    pub font_stack: Vec<String>,

    /// Fill colors.
    pub available_fill: String,
    pub assigned_fill: String,
    pub header_fill: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Exam Seating Chart".to_string(),
            // A4 landscape
            page_width: 842.0,
            page_height: 595.0,
            margin: 50.0,
            font_stack: vec!["MingLiU".to_string(), "Helvetica".to_string()],
            available_fill: "#90EE90".to_string(),
            assigned_fill: "#87CEEB".to_string(),
            header_fill: "#FFE4B5".to_string(),
        }
    }
}

impl ChartOptions {
    /// The full font-family list with the guaranteed fallback appended.
    #[must_use]
    pub fn font_family(&self) -> String {
        let mut families: Vec<&str> = self.font_stack.iter().map(String::as_str).collect();
        families.push(FALLBACK_FAMILY);
        families.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_family_always_ends_in_generic() {
        let mut options = ChartOptions::default();
        assert!(options.font_family().ends_with("sans-serif"));

        options.font_stack.clear();
        assert_eq!(options.font_family(), "sans-serif");
    }
}
