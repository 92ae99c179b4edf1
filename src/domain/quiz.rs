use serde::{Deserialize, Serialize};

/// Envelope returned by the `extractor` function call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratedQuiz {
    pub quiz: Quiz,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub answer_text: String,
    pub is_correct: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizValidationError {
    #[error("malformed quiz: {0}")]
    Malformed(String),
    #[error("quiz has no questions")]
    NoQuestions,
    #[error("question {index} has no text")]
    EmptyQuestionText { index: usize },
    #[error("question {index} has no answers")]
    NoAnswers { index: usize },
    #[error("answer {answer} of question {question} has no text")]
    EmptyAnswerText { question: usize, answer: usize },
}

impl GeneratedQuiz {
    /// Parses the raw function-call arguments and checks the result before it
    /// is allowed anywhere near storage.
    pub fn from_value(value: serde_json::Value) -> Result<Quiz, QuizValidationError> {
        let generated: GeneratedQuiz = serde_json::from_value(value)
            .map_err(|e| QuizValidationError::Malformed(e.to_string()))?;
        generated.quiz.validate()?;
        Ok(generated.quiz)
    }
}

impl Quiz {
    pub fn validate(&self) -> Result<(), QuizValidationError> {
        if self.questions.is_empty() {
            return Err(QuizValidationError::NoQuestions);
        }

        for (index, question) in self.questions.iter().enumerate() {
            if question.question_text.trim().is_empty() {
                return Err(QuizValidationError::EmptyQuestionText { index });
            }
            if question.answers.is_empty() {
                return Err(QuizValidationError::NoAnswers { index });
            }
            if let Some(answer) = question
                .answers
                .iter()
                .position(|a| a.answer_text.trim().is_empty())
            {
                return Err(QuizValidationError::EmptyAnswerText {
                    question: index,
                    answer,
                });
            }
        }

        Ok(())
    }

    pub fn answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.answers.len()).sum()
    }
}
