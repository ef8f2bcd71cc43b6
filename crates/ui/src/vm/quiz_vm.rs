use quiz_core::model::{ChoiceQuestion, OrderingQuestion, QuizQuestion};
use quiz_core::session::{ChoiceOutcome, OrderingOutcome};
use services::{
    ChoiceQuiz, Feedback, ItemArrangement, MediaResolver, OrderingQuiz, QuestionView, QuizSession,
};

use super::markdown_vm::markdown_to_html;
use super::media_vm::{ImageVm, SoundVm, map_image, map_sound};

pub const UPLOAD_PROMPT: &str = "Upload a questions JSON to start the quiz.";
pub const EMPTY_BANK_MESSAGE: &str = "The question file does not contain any questions.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceIntent {
    Load(String),
    Select(usize),
    Submit,
    Advance,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderingIntent {
    Load(String),
    MoveLeft(usize),
    MoveRight(usize),
    Submit,
    Advance,
    Restart,
}

/// What a quiz page shows, from "nothing loaded" through completion.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreen<T> {
    AwaitingBank,
    EmptyBank,
    Question(T),
    Completed(CompletionVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub message: String,
    /// Verdict on the final question, still shown next to the score.
    pub feedback: Option<FeedbackVm>,
}

/// Heading, text and controls shared by both question kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionChrome {
    /// Changes whenever a different question is on screen; use it as a component key.
    pub question_key: String,
    pub heading: String,
    pub text_html: String,
    pub score_label: String,
    pub can_submit: bool,
    pub can_advance: bool,
    pub advance_label: &'static str,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChoiceQuestionVm {
    pub chrome: QuestionChrome,
    pub options: Vec<String>,
    pub image: Option<ImageVm>,
    pub sound: Option<SoundVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderingItemVm {
    pub key: String,
    pub label: String,
    pub image: Option<ImageVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderingQuestionVm {
    pub chrome: QuestionChrome,
    pub items: Vec<OrderingItemVm>,
}

#[must_use]
pub fn choice_feedback(outcome: &ChoiceOutcome) -> FeedbackVm {
    match outcome {
        ChoiceOutcome::Correct => FeedbackVm {
            message: "Correct!".to_string(),
            is_correct: true,
        },
        ChoiceOutcome::Incorrect { correct_text } => FeedbackVm {
            message: format!("Wrong. Correct answer: {correct_text}"),
            is_correct: false,
        },
    }
}

#[must_use]
pub fn ordering_feedback(outcome: OrderingOutcome) -> FeedbackVm {
    match outcome {
        OrderingOutcome::Correct => FeedbackVm {
            message: "✅ Correct! Well done.".to_string(),
            is_correct: true,
        },
        OrderingOutcome::Incorrect => FeedbackVm {
            message: "❌ Incorrect. Try again!".to_string(),
            is_correct: false,
        },
    }
}

fn map_feedback(feedback: &Feedback) -> FeedbackVm {
    match feedback {
        Feedback::Choice(outcome) => choice_feedback(outcome),
        Feedback::Ordering(outcome) => ordering_feedback(*outcome),
    }
}

fn map_chrome<Q: QuizQuestion>(quiz: &QuizSession<Q>, view: &QuestionView<'_, Q>) -> QuestionChrome {
    let generation = quiz
        .bank()
        .map(|bank| bank.generation().value())
        .unwrap_or_default();
    QuestionChrome {
        question_key: format!("{generation}-{}-{}", view.progress.number, view.bank_index),
        heading: view.heading(),
        text_html: markdown_to_html(view.text()),
        score_label: view.progress.score_label(),
        can_submit: view.can_submit(),
        can_advance: view.can_advance(),
        advance_label: view.advance_label(),
        feedback: quiz.feedback().map(map_feedback),
    }
}

fn map_screen<Q, T>(
    quiz: &QuizSession<Q>,
    question: impl FnOnce(&Q, QuestionChrome) -> T,
) -> QuizScreen<T>
where
    Q: QuizQuestion,
{
    let Some(bank) = quiz.bank() else {
        return QuizScreen::AwaitingBank;
    };
    if let Some(summary) = quiz.summary() {
        return QuizScreen::Completed(CompletionVm {
            message: summary.message(),
            feedback: quiz.feedback().map(map_feedback),
        });
    }
    if bank.is_empty() {
        return QuizScreen::EmptyBank;
    }
    match quiz.view() {
        Some(view) => {
            let chrome = map_chrome(quiz, &view);
            QuizScreen::Question(question(view.question, chrome))
        }
        None => QuizScreen::AwaitingBank,
    }
}

#[must_use]
pub fn map_choice_screen(
    quiz: &ChoiceQuiz,
    resolver: &MediaResolver,
) -> QuizScreen<ChoiceQuestionVm> {
    map_screen(quiz, |question: &ChoiceQuestion, chrome| ChoiceQuestionVm {
        chrome,
        options: question.options().to_vec(),
        image: map_image(resolver, question.image()),
        sound: map_sound(resolver, question.sound()),
    })
}

/// Items follow `arrangement` when it belongs to the question on screen,
/// otherwise their as-loaded order.
#[must_use]
pub fn map_ordering_screen(
    quiz: &OrderingQuiz,
    arrangement: Option<&ItemArrangement>,
    resolver: &MediaResolver,
) -> QuizScreen<OrderingQuestionVm> {
    map_screen(quiz, |question: &OrderingQuestion, chrome| {
        let keys = arrangement_keys(question, arrangement);
        let items = keys
            .iter()
            .filter_map(|key| question.item(key))
            .map(|item| OrderingItemVm {
                key: item.key().to_string(),
                label: item.label().to_string(),
                image: map_image(resolver, item.image()),
            })
            .collect();
        OrderingQuestionVm { chrome, items }
    })
}

/// The arrangement on screen for `question`: the user's when it fits, else the initial one.
#[must_use]
pub fn current_arrangement(
    question: &OrderingQuestion,
    arrangement: Option<&ItemArrangement>,
) -> ItemArrangement {
    match arrangement {
        Some(arrangement) if arrangement.fits(question) => arrangement.clone(),
        _ => ItemArrangement::for_question(question),
    }
}

/// The order to submit for `question`.
#[must_use]
pub fn arrangement_keys(
    question: &OrderingQuestion,
    arrangement: Option<&ItemArrangement>,
) -> Vec<String> {
    current_arrangement(question, arrangement).into_keys()
}
