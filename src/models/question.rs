use std::fmt;

use serde::{Deserialize, Deserializer};

/// Identifier of a question as given by the feed.
///
/// Feeds use either strings or integers here, both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Position of an option inside [`Question::options`].
///
/// Two options with the same text are still two different tokens, so the
/// selection buffer tracks positions rather than words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(pub usize);

/// A fill-in-the-blank question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(alias = "questionId")]
    pub id: QuestionId,
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    pub correct_answer: Vec<String>,
}

impl Question {
    /// Text of the option at `id`, if it exists.
    pub fn option(&self, id: OptionId) -> Option<&str> {
        self.options.get(id.0).map(String::as_str)
    }

    pub fn option_ids(&self) -> impl Iterator<Item = OptionId> + '_ {
        (0..self.options.len()).map(OptionId)
    }

    /// Resolve a selection to the words it places into the blanks.
    pub fn words_for(&self, selection: &[OptionId]) -> Vec<String> {
        selection
            .iter()
            .filter_map(|id| self.option(*id))
            .map(str::to_owned)
            .collect()
    }

    /// Ordered comparison against the correct answer. Blanks are positional,
    /// so the right words in the wrong order do not count.
    pub fn is_correct(&self, selection: &[OptionId]) -> bool {
        self.words_for(selection) == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: QuestionId::new("q1"),
            prompt: "The ___ ___ ___ ___".to_string(),
            options: ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
            correct_answer: ["a", "b", "c", "d"].map(String::from).to_vec(),
        }
    }

    #[test]
    fn test_is_correct_is_order_sensitive() {
        let q = question();
        let ordered = [OptionId(0), OptionId(1), OptionId(2), OptionId(3)];
        let swapped = [OptionId(1), OptionId(0), OptionId(2), OptionId(3)];

        assert!(q.is_correct(&ordered));
        assert!(!q.is_correct(&swapped));
        assert!(!q.is_correct(&ordered[..2]));
    }

    #[test]
    fn test_unknown_option_resolves_to_nothing() {
        let q = question();
        assert_eq!(q.option(OptionId(9)), None);
        assert_eq!(q.words_for(&[OptionId(4), OptionId(9)]), vec!["e".to_string()]);
    }

    #[test]
    fn test_deserialize_feed_question() {
        let json = r#"{
            "questionId": 17,
            "question": "Fill the blanks",
            "options": ["x", "y", "z", "w"],
            "correctAnswer": ["w", "z", "y", "x"]
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();

        assert_eq!(q.id.as_str(), "17");
        assert_eq!(q.prompt, "Fill the blanks");
        assert_eq!(q.correct_answer[0], "w");
    }
}
