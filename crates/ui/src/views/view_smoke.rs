use chrono::Duration;
use mate_core::model::Choice;
use services::FETCH_FAILED_MESSAGE;

use super::state::ScreenIntent;
use super::test_harness::{
    LOADING, TOKEN, UiHarness, WISH, config_with_offset, two_question_payload,
};

#[tokio::test(flavor = "current_thread")]
async fn landing_shows_countdown_before_the_day() {
    let offset = Duration::days(1) + Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4);
    let flow = UiHarness::controller(config_with_offset(offset), None);
    let mut harness = UiHarness::mount(flow);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Only 1d, 2h, 3m, and 4s until Alex"), "missing countdown in {html}");
    assert!(!html.contains("Begin"), "begin shown early in {html}");
    assert!(html.contains("Made with"), "missing footer in {html}");
    assert!(html.contains("Robin"), "missing footer author in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_shows_begin_once_the_day_has_come() {
    let flow = UiHarness::controller(config_with_offset(-Duration::seconds(1)), None);
    let mut harness = UiHarness::mount(flow);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Begin"), "missing begin button in {html}");
    assert!(!html.contains("Only "), "countdown still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn prompt_shows_generic_error_after_failed_fetch() {
    let flow = UiHarness::controller(config_with_offset(-Duration::seconds(1)), None);
    flow.begin().unwrap();
    flow.submit(TOKEN).await.unwrap();

    let mut harness = UiHarness::mount(flow);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("password"), "missing password input in {html}");
    assert!(html.contains(FETCH_FAILED_MESSAGE), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn playing_shows_both_images_with_token() {
    let flow = UiHarness::controller(
        config_with_offset(-Duration::seconds(1)),
        Some(two_question_payload()),
    );
    flow.begin().unwrap();
    flow.submit(TOKEN).await.unwrap();

    let mut harness = UiHarness::mount(flow);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("/images/choice_a/1.jpg?auth=token"), "missing image a in {html}");
    assert!(html.contains("/images/choice_b/1.jpg?auth=token"), "missing image b in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn won_screen_shows_wish_and_ending_photo() {
    let flow = UiHarness::controller(
        config_with_offset(-Duration::seconds(1)),
        Some(two_question_payload()),
    );
    flow.begin().unwrap();
    flow.submit(TOKEN).await.unwrap();
    flow.answer(Choice::A).unwrap();
    flow.answer(Choice::B).unwrap();

    let mut harness = UiHarness::mount(flow);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(WISH), "missing wish line in {html}");
    assert!(html.contains("/images/ending/us.jpg?auth=token"), "missing ending photo in {html}");
    assert!(html.contains("Play again"), "missing replay button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lost_screen_has_no_wish_or_photo() {
    let flow = UiHarness::controller(
        config_with_offset(-Duration::seconds(1)),
        Some(two_question_payload()),
    );
    flow.begin().unwrap();
    flow.submit(TOKEN).await.unwrap();
    flow.answer(Choice::B).unwrap();

    let mut harness = UiHarness::mount(flow.clone());
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains(WISH), "wish shown after losing in {html}");
    assert!(!html.contains("/images/ending/"), "ending photo shown after losing in {html}");
    assert!(html.contains("Play again"), "missing replay button in {html}");
    assert_eq!(harness.flow.snapshot().title, flow.config().lost_title());
}

#[tokio::test(flavor = "current_thread")]
async fn submitting_from_the_prompt_loads_the_first_question() {
    let flow = UiHarness::delayed_controller(
        config_with_offset(-Duration::seconds(1)),
        Some(two_question_payload()),
        std::time::Duration::from_millis(20),
    );
    let mut harness = UiHarness::mount(flow);
    harness.rebuild();

    harness.dispatch(ScreenIntent::Begin);
    assert!(harness.render().contains("password"), "prompt not shown");

    harness.dispatch(ScreenIntent::Submit(TOKEN.into()));
    let html = harness.render();
    assert!(html.contains(LOADING), "missing loading line in {html}");

    let html = harness.drive_until("Question 1 of 2").await;
    assert!(html.contains("Question 1 of 2"), "fetch never resolved: {html}");
    assert!(!html.contains(LOADING), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_fetch_from_the_prompt_shows_the_generic_error() {
    let flow = UiHarness::delayed_controller(
        config_with_offset(-Duration::seconds(1)),
        None,
        std::time::Duration::from_millis(20),
    );
    let mut harness = UiHarness::mount(flow);
    harness.rebuild();

    harness.dispatch(ScreenIntent::Begin);
    harness.dispatch(ScreenIntent::Submit("wrong".into()));
    assert!(harness.render().contains(LOADING), "loading line not shown");

    let html = harness.drive_until(FETCH_FAILED_MESSAGE).await;
    assert!(html.contains(FETCH_FAILED_MESSAGE), "no rollback to the prompt: {html}");
    assert_eq!(harness.flow.phase(), mate_core::model::Phase::PasswordPrompt);
}

#[tokio::test(flavor = "current_thread")]
async fn answering_through_the_views_wins_and_replays() {
    let flow = UiHarness::controller(
        config_with_offset(-Duration::seconds(1)),
        Some(two_question_payload()),
    );
    let mut harness = UiHarness::mount(flow);
    harness.rebuild();

    harness.dispatch(ScreenIntent::Begin);
    harness.dispatch(ScreenIntent::Submit(TOKEN.into()));
    harness.drive_until("Question 1 of 2").await;

    harness.dispatch(ScreenIntent::Answer(Choice::A));
    assert!(harness.render().contains("Question 2 of 2"));
    harness.dispatch(ScreenIntent::Answer(Choice::B));
    let html = harness.render();
    assert!(html.contains(WISH), "missing wish line in {html}");

    harness.dispatch(ScreenIntent::PlayAgain);
    let html = harness.render();
    assert!(html.contains("Begin"), "not back on landing: {html}");
    assert!(!html.contains(WISH), "wish still shown in {html}");
}
