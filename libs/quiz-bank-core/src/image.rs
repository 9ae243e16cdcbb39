//! Image lookup for illustrated questions.

/// Maps question text to a known diagram file.
pub trait ImageClassifier {
    /// File name of the diagram for this question, if one is known.
    fn classify(&self, question_text: &str) -> Option<String>;
}

impl<F> ImageClassifier for F
where
    F: Fn(&str) -> Option<String>,
{
    fn classify(&self, question_text: &str) -> Option<String> {
        self(question_text)
    }
}

/// Diagram category recognized by lowercase keywords.
#[derive(Debug, Clone)]
pub struct ImageRule {
    pub keywords: Vec<String>,
    pub filename: String,
}

impl ImageRule {
    pub fn new(keywords: &[&str], filename: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            filename: filename.to_string(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Keyword table lookup; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct KeywordImageClassifier {
    rules: Vec<ImageRule>,
}

impl KeywordImageClassifier {
    pub fn new(rules: Vec<ImageRule>) -> Self {
        Self { rules }
    }
}

impl Default for KeywordImageClassifier {
    fn default() -> Self {
        Self::new(vec![
            ImageRule::new(&["logic interface", "raspberry pi gpio"], "logic_interface.png"),
            ImageRule::new(
                &["water level", "capacitance to detect water"],
                "water_level_sensor.png",
            ),
            ImageRule::new(&["detect change in a sensor", "capacitor"], "capacitor_diagram.png"),
        ])
    }
}

impl ImageClassifier for KeywordImageClassifier {
    fn classify(&self, question_text: &str) -> Option<String> {
        let lowered = question_text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.filename.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_categories() {
        let classifier = KeywordImageClassifier::default();
        assert_eq!(
            classifier.classify("Which Raspberry Pi GPIO pin drives the LED?").as_deref(),
            Some("logic_interface.png")
        );
        assert_eq!(
            classifier.classify("The sensor uses capacitance to detect water").as_deref(),
            Some("water_level_sensor.png")
        );
        assert_eq!(
            classifier.classify("What does the CAPACITOR do here?").as_deref(),
            Some("capacitor_diagram.png")
        );
    }

    #[test]
    fn first_rule_wins() {
        let classifier = KeywordImageClassifier::default();
        assert_eq!(
            classifier.classify("Water level gauge with a capacitor").as_deref(),
            Some("water_level_sensor.png")
        );
    }

    #[test]
    fn unknown_content_has_no_image() {
        assert_eq!(KeywordImageClassifier::default().classify("What is a mutex?"), None);
    }

    #[test]
    fn closures_are_classifiers() {
        let fixed = |_: &str| Some("fixed.png".to_string());
        assert_eq!(fixed.classify("anything").as_deref(), Some("fixed.png"));
    }
}
