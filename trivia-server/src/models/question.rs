//! Question validation
//!
//! A new question is accepted only when both text fields are non-blank
//! and the difficulty falls within the scoring scale.

use super::ValidationError;

/// Lowest accepted difficulty score
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty score
pub const MAX_DIFFICULTY: i32 = 5;

/// Non-blank question or answer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create question or answer text.
    ///
    /// # Example
    /// ```
    /// use trivia_server::models::QuestionText;
    ///
    /// assert!(QuestionText::new("question", "Who wrote Hamlet?").is_ok());
    /// assert!(QuestionText::new("answer", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Difficulty score within `MIN_DIFFICULTY..=MAX_DIFFICULTY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty(i32);

impl Difficulty {
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Validated question ready for insertion.
///
/// The category reference is checked by the store's foreign key, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: QuestionText,
    pub category: i32,
    pub difficulty: Difficulty,
}

impl NewQuestion {
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            question: QuestionText::new("question", question)?,
            answer: QuestionText::new("answer", answer)?,
            category,
            difficulty: Difficulty::new(difficulty)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text() {
        let text = QuestionText::new("question", "  Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?  ").unwrap();
        assert!(text.as_str().starts_with("Whose"));
        assert!(text.as_str().ends_with('?'));
    }

    #[test]
    fn rejects_blank_text() {
        let err = NewQuestion::new("", "Maya Angelou", 4, 2).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "question" });

        let err = NewQuestion::new("Who?", "\t\n", 4, 2).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn difficulty_bounds() {
        assert!(Difficulty::new(MIN_DIFFICULTY).is_ok());
        assert!(Difficulty::new(MAX_DIFFICULTY).is_ok());

        let err = Difficulty::new(0).unwrap_err();
        assert!(err.is_constraint());
        assert!(Difficulty::new(1000).is_err());
    }

    #[test]
    fn accepts_valid_question() {
        let q = NewQuestion::new("How do magnets work?", "Magic", 1, 3).unwrap();
        assert_eq!(q.category, 1);
        assert_eq!(q.difficulty.get(), 3);
        assert_eq!(q.answer.as_str(), "Magic");
    }
}
