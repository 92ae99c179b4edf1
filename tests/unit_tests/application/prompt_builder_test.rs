use quizgen::application::services::{QUIZ_INSTRUCTION, build_prompt};
use quizgen::domain::PageText;

#[test]
fn given_pages_when_building_prompt_then_joins_in_page_order() {
    let pages = vec![
        PageText::new(1, "first"),
        PageText::new(2, "second"),
        PageText::new(3, "third"),
    ];

    let prompt = build_prompt("do it", &pages);

    assert_eq!(prompt, "do it\nfirst\nsecond\nthird");
}

#[test]
fn given_no_pages_when_building_prompt_then_returns_instruction_and_newline() {
    assert_eq!(build_prompt("do it", &[]), "do it\n");
}

#[test]
fn given_quiz_instruction_when_building_prompt_then_instruction_leads() {
    let pages = vec![PageText::new(1, "The capital of France is Paris.")];

    let prompt = build_prompt(QUIZ_INSTRUCTION, &pages);

    assert_eq!(
        prompt,
        format!("{QUIZ_INSTRUCTION}\nThe capital of France is Paris.")
    );
}
