use std::fs;
use std::io::Write;

use dioxus::prelude::WritableExt;
use services::{QuizMode, QuizSettings};
use tempfile::NamedTempFile;

use super::test_harness::{ViewKind, setup_view_harness};

const TWO_CHOICES: &str = r#"[
    {"question": "Q1", "options": ["A", "B", "C"], "answer": 2},
    {"question": "Q2", "options": ["A", "B", "C"], "answer": 2}
]"#;
const ONE_CHOICE: &str = r#"[{"question": "Q1", "options": ["A", "B", "C"], "answer": 2}]"#;
const ONE_ORDERING: &str = r#"[{
    "question": "Put them in order",
    "items": [{"label": "one"}, {"label": "two"}, {"label": "three"}],
    "correct_order": ["3", "1", "2"]
}]"#;

fn question_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write questions");
    file
}

fn ordering_settings() -> QuizSettings {
    QuizSettings::default().with_mode(QuizMode::Ordering)
}

#[test]
fn choice_view_prompts_for_upload_without_bank() {
    let mut harness = setup_view_harness(ViewKind::Choice, QuizSettings::default(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Upload a questions JSON to start the quiz."),
        "missing prompt in {html}"
    );
    assert!(html.contains("Load"), "missing load button in {html}");
}

#[test]
fn choice_view_renders_first_question_from_launch_file() {
    let file = question_file(TWO_CHOICES);
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        QuizSettings::default(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "missing heading in {html}");
    assert!(html.contains("Score: 0 / 2"), "missing score in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    for option in ["A", "B", "C"] {
        let label = format!("option__label\">{option}<");
        assert!(html.contains(&label), "missing option {option} in {html}");
    }
}

#[test]
fn choice_flow_shows_feedback_then_completion() {
    let file = question_file(ONE_CHOICE);
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        QuizSettings::default(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();

    harness.with_store(|store| {
        let mut quiz = store.choice.quiz;
        quiz.write().submit_answer("B").expect("answer accepted");
    });
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("Finish"), "missing finish in {html}");
    assert!(!html.contains("Submit"), "submit still offered in {html}");

    harness.with_store(|store| store.choice.advance());
    let html = harness.render();
    assert!(
        html.contains("Quiz completed! Score: 1 / 1"),
        "missing completion in {html}"
    );
    assert!(html.contains("Restart"), "missing restart in {html}");

    harness.with_store(|store| store.choice.restart());
    let html = harness.render();
    assert!(html.contains("Question 1 / 1"), "missing heading in {html}");
    assert!(html.contains("Score: 0 / 1"), "score not reset in {html}");
}

#[test]
fn wrong_answer_names_the_correct_option() {
    let file = question_file(ONE_CHOICE);
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        QuizSettings::default(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    harness.with_store(|store| {
        let mut quiz = store.choice.quiz;
        quiz.write().submit_answer("C").expect("answer accepted");
    });
    let html = harness.render();
    assert!(
        html.contains("Wrong. Correct answer: B"),
        "missing verdict in {html}"
    );
}

#[test]
fn rejected_launch_file_shows_format_error() {
    let file = question_file(r#"{"question": "not a list"}"#);
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        QuizSettings::default(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("JSON must be a list of question objects"),
        "missing error in {html}"
    );
    assert!(
        html.contains("Upload a questions JSON to start the quiz."),
        "missing prompt in {html}"
    );
}

#[test]
fn requested_count_limits_the_run_and_applies_on_restart() {
    let file = question_file(TWO_CHOICES);
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        QuizSettings::default().with_requested_count(1),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    assert!(harness.render().contains("Question 1 / 1"));

    harness.with_store(|store| store.set_requested_count(0));
    assert!(
        harness.render().contains("Question 1 / 1"),
        "count changed mid-run"
    );

    harness.with_store(|store| store.choice.restart());
    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "count not applied in {html}");
}

#[test]
fn sound_player_waits_for_play() {
    let file = question_file(
        r#"[{"question": "Listen", "options": ["A"], "answer": 1,
             "playsound": "https://example.com/clip.mp3"}]"#,
    );
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        QuizSettings::default(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("▶️ Play"), "missing play button in {html}");
    assert!(!html.contains("<audio"), "player shown before play in {html}");
}

#[test]
fn ordering_view_renders_items_in_loaded_order() {
    let file = question_file(ONE_ORDERING);
    let mut harness = setup_view_harness(
        ViewKind::Ordering,
        ordering_settings(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 / 1"), "missing heading in {html}");
    assert!(html.contains("Put them in order"), "missing text in {html}");
    let one = html.find(">one<").expect("first item");
    let two = html.find(">two<").expect("second item");
    let three = html.find(">three<").expect("third item");
    assert!(one < two && two < three, "items out of order in {html}");
}

#[test]
fn ordering_verdicts_use_their_own_messages() {
    let file = question_file(ONE_ORDERING);
    let mut harness = setup_view_harness(
        ViewKind::Ordering,
        ordering_settings(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    harness.with_store(|store| {
        let mut quiz = store.ordering.quiz;
        quiz.write()
            .submit_order(&["1", "2", "3"])
            .expect("order accepted");
    });
    let html = harness.render();
    assert!(
        html.contains("❌ Incorrect. Try again!"),
        "missing verdict in {html}"
    );

    harness.with_store(|store| {
        store.ordering.advance();
        store.ordering.restart();
        let mut quiz = store.ordering.quiz;
        quiz.write()
            .submit_order(&["3", "1", "2"])
            .expect("order accepted");
    });
    let html = harness.render();
    assert!(
        html.contains("✅ Correct! Well done."),
        "missing verdict in {html}"
    );
}

#[test]
fn launch_mode_decides_which_quiz_gets_the_file() {
    let file = question_file(ONE_ORDERING);
    let mut harness = setup_view_harness(
        ViewKind::Choice,
        ordering_settings(),
        Some(file.path().to_path_buf()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Upload a questions JSON to start the quiz."),
        "choice quiz should be empty in {html}"
    );
}

#[test]
fn gallery_lists_folders_and_first_image() {
    let root = tempfile::tempdir().expect("temp dir");
    fs::create_dir(root.path().join("planets")).expect("subdir");
    fs::write(root.path().join("b.png"), b"").expect("image");
    fs::write(root.path().join("a.jpg"), b"").expect("image");
    fs::write(root.path().join("notes.txt"), b"").expect("other file");

    let settings = QuizSettings::default().with_gallery_root(root.path());
    let mut harness = setup_view_harness(ViewKind::Gallery, settings, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Root (assets/images)"), "missing root in {html}");
    assert!(html.contains("planets"), "missing subfolder in {html}");
    assert!(html.contains("Image 1 of 2"), "missing caption in {html}");
    assert!(html.contains("a.jpg"), "first image should be a.jpg in {html}");
}

#[test]
fn gallery_without_images_warns() {
    let root = tempfile::tempdir().expect("temp dir");
    let settings = QuizSettings::default().with_gallery_root(root.path().join("missing"));
    let mut harness = setup_view_harness(ViewKind::Gallery, settings, None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No images found in assets/images directory"),
        "missing warning in {html}"
    );
}
