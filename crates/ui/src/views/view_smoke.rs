use quiz_core::model::{ScoreTier, Verdict};

use super::test_harness::{sample_dataset, setup_quiz_harness};
use crate::vm::QuizIntent;

#[test]
fn quiz_view_smoke_renders_first_question() {
    let harness = setup_quiz_harness(sample_dataset(&[(true, None), (true, None)]));
    let html = harness.render();

    assert!(html.contains("Phishing awareness quiz"), "missing title in {html}");
    assert!(html.contains("Question 1 / 2"), "missing progress in {html}");
    assert!(html.contains("sender1@example.com"), "missing sender in {html}");
    assert!(html.contains("Body of message 1"), "missing body in {html}");
    assert!(html.contains("Legitimate email"), "missing answer button in {html}");
    assert!(!html.contains("quiz-feedback"), "unexpected feedback in {html}");
}

#[test]
fn quiz_view_smoke_shows_feedback_with_indicators() {
    let mut harness = setup_quiz_harness(sample_dataset(&[(true, None), (true, None)]));
    harness.dispatch(QuizIntent::Answer(Verdict::Fraudulent));
    let html = harness.render();

    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("This email is a scam"), "missing truth in {html}");
    assert!(html.contains("Red flag 1a"), "missing indicator in {html}");
    assert!(html.contains("Red flag 1b"), "missing indicator in {html}");
    assert!(html.contains("Next question"), "missing next button in {html}");
    assert!(!html.contains("quiz-answer-legit"), "answer buttons still shown in {html}");
}

#[test]
fn quiz_view_smoke_next_before_answer_is_ignored() {
    let mut harness = setup_quiz_harness(sample_dataset(&[(true, None), (false, None)]));
    harness.dispatch(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "progress moved in {html}");
    assert!(html.contains("quiz-answer-legit"), "answer buttons missing in {html}");
    assert_eq!(harness.with_vm(|vm| vm.session().current_index()), 0);
    assert!(!harness.with_vm(|vm| vm.is_answered()));
}

#[test]
fn quiz_view_smoke_runs_to_results_and_restarts() {
    let mut harness = setup_quiz_harness(sample_dataset(&[(true, None), (true, None)]));
    harness.dispatch(QuizIntent::Answer(Verdict::Fraudulent));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::Answer(Verdict::Legitimate));

    let html = harness.render();
    assert!(html.contains("Question 2 / 2"), "missing progress in {html}");
    assert!(html.contains("Wrong"), "missing verdict in {html}");
    assert!(html.contains("See results"), "missing results button in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Quiz complete!"), "missing results title in {html}");
    assert!(html.contains("Your score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains(ScoreTier::Fair.message()), "missing tier message in {html}");
    assert!(html.contains("Start over"), "missing restart in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "restart did not rewind in {html}");
    assert!(!html.contains("quiz-results"), "results still shown in {html}");
    assert_eq!(harness.with_vm(|vm| vm.session().score()), 0);
}

#[test]
fn quiz_view_smoke_perfect_run() {
    let mut harness = setup_quiz_harness(sample_dataset(&[(true, None), (false, None)]));
    harness.dispatch(QuizIntent::Answer(Verdict::Fraudulent));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::Answer(Verdict::Legitimate));
    harness.dispatch(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains(ScoreTier::Perfect.message()), "missing tier message in {html}");
}

#[test]
fn quiz_view_smoke_renders_image_in_place_of_body() {
    let harness = setup_quiz_harness(sample_dataset(&[(true, Some("quiz-images/quiz1.png"))]));
    let html = harness.render();

    assert!(html.contains("quiz-images/quiz1.png"), "missing image in {html}");
    assert!(!html.contains("Body of message 1"), "body shown next to image in {html}");
    assert!(!html.contains("quiz-image-preview"), "preview open by default in {html}");
}

#[test]
fn quiz_view_smoke_image_preview_opens_and_closes() {
    let mut harness = setup_quiz_harness(sample_dataset(&[(true, Some("quiz-images/quiz1.png"))]));
    assert!(harness.render().contains("quiz-image"), "missing zoom button");

    harness.open_preview();
    let html = harness.render();
    assert!(html.contains("quiz-image-preview"), "preview not shown in {html}");
    assert!(html.contains("image-preview__img"), "preview image missing in {html}");

    harness.close_preview();
    let html = harness.render();
    assert!(!html.contains("quiz-image-preview"), "preview still open in {html}");
}

#[test]
fn quiz_view_smoke_next_and_restart_close_preview() {
    let mut harness = setup_quiz_harness(sample_dataset(&[
        (true, Some("quiz-images/quiz1.png")),
        (false, Some("quiz-images/quiz2.png")),
    ]));

    harness.open_preview();
    harness.dispatch(QuizIntent::Answer(Verdict::Fraudulent));
    assert!(
        harness.render().contains("quiz-image-preview"),
        "answering should keep the preview open"
    );

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 / 2"), "did not advance in {html}");
    assert!(!html.contains("quiz-image-preview"), "Next left preview open in {html}");

    harness.dispatch(QuizIntent::Answer(Verdict::Legitimate));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::Restart);
    harness.open_preview();
    assert!(harness.render().contains("quiz-image-preview"));

    harness.dispatch(QuizIntent::Answer(Verdict::Fraudulent));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::Answer(Verdict::Legitimate));
    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("quiz-results"), "missing results in {html}");
    assert!(!html.contains("quiz-image-preview"), "preview over results in {html}");

    harness.open_preview();
    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "restart did not rewind in {html}");
    assert!(!html.contains("quiz-image-preview"), "Restart left preview open in {html}");
}

#[test]
fn quiz_view_smoke_text_item_never_shows_preview() {
    let mut harness = setup_quiz_harness(sample_dataset(&[(true, None)]));
    harness.open_preview();
    let html = harness.render();
    assert!(!html.contains("quiz-image-preview"), "preview for text item in {html}");
    assert!(html.contains("Body of message 1"), "missing body in {html}");
}
