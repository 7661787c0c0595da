use std::io::Cursor;

use psych_core::models::case::CaseSet;
use psych_core::models::personality::ClusterKey;
use psych_core::models::quiz::{QuizNavigator, questions};
use psych_criteria::get_criteria;
use psych_master::pages::cases::CasesPage;
use psych_master::pages::checklist::ChecklistPage;
use psych_master::pages::personality::PersonalityPage;
use psych_master::pages::quiz::QuizPage;
use psych_master::pages::{Flow, Page, run_page};
use psych_master::render::Palette;

fn drive(page: &mut dyn Page, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    run_page(page, &Palette::plain(), &mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn last_screen(output: &str) -> &str {
    output.rsplit("> ").nth(1).unwrap_or(output)
}

#[test]
fn checklist_starts_pending() {
    let mut page = ChecklistPage::new(get_criteria("adhd").unwrap());
    let output = drive(&mut page, "q\n");
    assert!(output.contains("Result: Select symptoms to see presentation type"));
    assert!(output.contains("[ ]  1. "));
}

#[test]
fn checklist_numbers_toggle_symptoms() {
    let mut page = ChecklistPage::new(get_criteria("adhd").unwrap());
    let output = drive(&mut page, "1\n2\n3\n4\n5\n6\nq\n");
    assert_eq!(page.selection().len(), 6);
    let screen = last_screen(&output);
    assert!(screen.contains("Inattention: 6/9 (need ≥6)"));
    assert!(screen.contains("Result: Predominantly Inattentive Presentation"));
}

#[test]
fn checklist_toggling_twice_deselects() {
    let mut page = ChecklistPage::new(get_criteria("ptsd").unwrap());
    drive(&mut page, "1\n1\nq\n");
    assert!(page.selection().is_empty());
}

#[test]
fn checklist_clear_returns_to_pending() {
    let mut page = ChecklistPage::new(get_criteria("psychosis").unwrap());
    let output = drive(&mut page, "1\n6\nc\nq\n");
    assert!(page.selection().is_empty());
    assert!(output.contains("MIXED positive and negative symptoms"));
    assert!(last_screen(&output).contains("Result: Select symptoms to see pattern analysis"));
}

#[test]
fn checklist_accepts_ids_and_keeps_unknown_ones_uncounted() {
    let mut page = ChecklistPage::new(get_criteria("adhd").unwrap());
    let output = drive(&mut page, "fidgets\nnightmares\n99\nq\n");
    assert!(page.selection().contains("fidgets"));
    assert!(page.selection().contains("nightmares"));
    assert_eq!(page.selection().len(), 2);
    assert!(last_screen(&output).contains("Hyperactivity-Impulsivity: 1/9"));
}

#[test]
fn session_ends_at_end_of_input() {
    let mut page = ChecklistPage::new(get_criteria("adhd").unwrap());
    drive(&mut page, "1\n");
    assert_eq!(page.selection().len(), 1);
}

#[test]
fn cases_reveal_one_at_a_time() {
    let mut page = CasesPage::new(CaseSet::Mdd);
    let output = drive(&mut page, "2\n3\nq\n");
    assert_eq!(page.reveal().revealed_index(), Some(2));

    let screen = last_screen(&output);
    assert!(screen.contains("Severe Major Depressive Episode with Psychotic Features"));
    assert!(!screen.contains("Severe Major Depressive Episode with Suicidal Ideation"));
    assert!(screen.contains("[3] Hide Classification"));
}

#[test]
fn cases_same_number_hides_again() {
    let mut page = CasesPage::new(CaseSet::Sud);
    drive(&mut page, "1\n1\nq\n");
    assert_eq!(page.reveal().revealed_index(), None);
}

#[test]
fn personality_cluster_expands_and_collapses() {
    let mut page = PersonalityPage::new(Some(ClusterKey::B));
    let output = drive(&mut page, "q\n");
    assert!(output.contains("Borderline"));

    let output = drive(&mut page, "b\nq\n");
    assert_eq!(page.selector().selected(), None);
    assert!(!last_screen(&output).contains("Frantic efforts to avoid abandonment"));
}

#[test]
fn personality_ignores_unknown_cluster() {
    let mut page = PersonalityPage::new(None);
    assert_eq!(page.handle("z"), Flow::Continue);
    assert_eq!(page.selector().selected(), None);
    assert_eq!(page.handle("q"), Flow::Quit);
}

#[test]
fn quiz_answer_reveals_explanation() {
    let mut page = QuizPage::new(QuizNavigator::new(questions()).unwrap());
    let output = drive(&mut page, "b\nq\n");
    let screen = last_screen(&output);
    assert!(screen.contains("Correct!"));
    assert!(screen.contains("Explanation: History of a manic episode"));
}

#[test]
fn quiz_wrong_answer_names_the_right_one() {
    let mut page = QuizPage::new(QuizNavigator::new(questions()).unwrap());
    let output = drive(&mut page, "a\nd\nq\n");
    assert_eq!(page.navigator().selected_option(), Some(0));
    assert!(last_screen(&output).contains("Incorrect. The answer is b) Bipolar I Disorder"));
}

#[test]
fn quiz_previous_from_first_wraps() {
    let mut page = QuizPage::new(QuizNavigator::new(questions()).unwrap());
    let output = drive(&mut page, "a\np\nq\n");
    assert_eq!(page.navigator().current_index(), 9);
    assert!(!page.navigator().is_revealed());
    assert!(last_screen(&output).contains("Question 10 of 10"));
}
