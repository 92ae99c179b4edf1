use crate::domain::PageText;

pub const QUIZ_INSTRUCTION: &str = "given the text which is a summary of the document, generate a quiz based on the text. Return json only that contains a quiz object with fields: name, description and questions. The questions is an array of objects with fields: questionText, answers. The answers is an array of objects with fields: answerText, isCorrect.";

/// Appends the page texts to `instruction`, one page per line.
///
/// No truncation is applied; prompt size grows with the document.
pub fn build_prompt(instruction: &str, pages: &[PageText]) -> String {
    let body = pages
        .iter()
        .map(PageText::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    format!("{instruction}\n{body}")
}
