use psych_core::error::CoreError;
use psych_core::models::quiz::{questions, Question, QuizNavigator};

#[test]
fn ten_questions_with_four_options_each() {
    let all = questions();
    assert_eq!(all.len(), 10);
    for q in all {
        assert_eq!(q.options.len(), 4, "question {}", q.id);
        assert!(q.correct_index < 4);
    }
    assert_eq!(all[0].correct_option(), Some("Bipolar I Disorder"));
}

#[test]
fn empty_quiz_cannot_be_built() {
    assert!(matches!(QuizNavigator::new(&[]), Err(CoreError::EmptyQuiz)));
}

#[test]
fn starts_on_first_question_unanswered() {
    let quiz = QuizNavigator::new(questions()).unwrap();
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.selected_option(), None);
    assert!(!quiz.is_revealed());
    assert_eq!(quiz.is_correct(), None);
}

#[test]
fn answering_reveals_and_locks_options() {
    let mut quiz = QuizNavigator::new(questions()).unwrap();
    assert!(quiz.select_option(0));
    assert!(quiz.is_revealed());
    assert_eq!(quiz.is_correct(), Some(false));

    assert!(!quiz.select_option(1));
    assert_eq!(quiz.selected_option(), Some(0));
}

#[test]
fn correct_answer_is_recognised() {
    let mut quiz = QuizNavigator::new(questions()).unwrap();
    quiz.select_option(1);
    assert_eq!(quiz.is_correct(), Some(true));
}

#[test]
fn out_of_range_option_is_ignored() {
    let mut quiz = QuizNavigator::new(questions()).unwrap();
    assert!(!quiz.select_option(4));
    assert!(!quiz.is_revealed());
    assert_eq!(quiz.selected_option(), None);
}

#[test]
fn next_from_last_wraps_to_first_and_resets() {
    let mut quiz = QuizNavigator::new(questions()).unwrap();
    for _ in 0..9 {
        quiz.next();
    }
    assert_eq!(quiz.current_index(), 9);
    quiz.select_option(2);

    quiz.next();
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.selected_option(), None);
    assert!(!quiz.is_revealed());
}

#[test]
fn previous_from_first_wraps_to_last_and_resets() {
    let mut quiz = QuizNavigator::new(questions()).unwrap();
    quiz.select_option(3);
    quiz.previous();
    assert_eq!(quiz.current_index(), 9);
    assert_eq!(quiz.current().id, 10);
    assert_eq!(quiz.selected_option(), None);
    assert!(!quiz.is_revealed());
}

#[test]
fn single_question_quiz_wraps_onto_itself() {
    let one = &questions()[..1];
    let mut quiz = QuizNavigator::new(one).unwrap();
    quiz.next();
    assert_eq!(quiz.current_index(), 0);
    quiz.previous();
    assert_eq!(quiz.current_index(), 0);
}

fn question_with_answer(correct_index: usize) -> Question {
    Question {
        id: 42,
        prompt: "Which is correct?".to_string(),
        options: ["w", "x", "y", "z"].iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: "Because.".to_string(),
        category: "General".to_string(),
    }
}

#[test]
fn answer_index_past_the_options_is_rejected() {
    let bad = [question_with_answer(1), question_with_answer(7)];
    let err = QuizNavigator::new(&bad).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidAnswer { id: 42, correct_index: 7, options: 4 }
    ));
    assert_eq!(bad[1].correct_option(), None);
}

#[test]
fn builtin_questions_all_pass_validation() {
    assert!(QuizNavigator::new(questions()).is_ok());
    assert!(questions().iter().all(|q| q.correct_option().is_some()));
}
