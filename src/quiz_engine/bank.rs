use crate::quiz_engine::error::QuizError;
use crate::quiz_engine::models::{Category, Question};

/// Immutable, validated collection of question categories.
///
/// Built once at process start and shared read-only for the process
/// lifetime. All content invariants are checked here so the rest of the
/// system never inspects raw content: every category has at least one
/// question, every question has at least two options, and every
/// `correct_index` points at a real option.
pub struct QuestionBank {
    categories: Vec<Category>,
}

impl QuestionBank {
    /// Validate and wrap a category list. Definition order is preserved.
    pub fn new(categories: Vec<Category>) -> Result<Self, QuizError> {
        if categories.is_empty() {
            return Err(QuizError::InvalidArgument(
                "question bank has no categories".into(),
            ));
        }
        for (i, cat) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.key == cat.key) {
                return Err(QuizError::InvalidArgument(format!(
                    "duplicate category key: {}",
                    cat.key
                )));
            }
            if cat.questions.is_empty() {
                return Err(QuizError::InvalidArgument(format!(
                    "category {} has no questions",
                    cat.key
                )));
            }
            for q in &cat.questions {
                if q.options.len() < 2 {
                    return Err(QuizError::InvalidArgument(format!(
                        "question in {} has fewer than 2 options: {}",
                        cat.key, q.text
                    )));
                }
                if q.correct_index >= q.options.len() {
                    return Err(QuizError::InvalidArgument(format!(
                        "correct_index {} out of range in {}: {}",
                        q.correct_index, cat.key, q.text
                    )));
                }
            }
        }
        Ok(QuestionBank { categories })
    }

    /// Look up a category by key.
    pub fn get_category(&self, key: &str) -> Result<&Category, QuizError> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| QuizError::CategoryNotFound { key: key.to_string() })
    }

    /// `(key, display_name, question_count)` for every category, in
    /// definition order.
    pub fn list_categories(&self) -> Vec<(&str, &str, usize)> {
        self.categories
            .iter()
            .map(|c| (c.key.as_str(), c.display_name.as_str(), c.questions.len()))
            .collect()
    }

    /// Every question across all categories, each paired with its owning
    /// category's display name. The pool for mixed-mode sessions.
    pub fn all_questions(&self) -> Vec<(Question, String)> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.questions
                    .iter()
                    .map(|q| (q.clone(), c.display_name.clone()))
            })
            .collect()
    }
}
