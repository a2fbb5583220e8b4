#![allow(
    missing_docs,
    dead_code,
    unused,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::all
)]
//! # Deterministic TUI Tests
//!
//! Drive the pure `transition` function with scripted key and tick events.
//! No terminal, no clock: the same inputs always produce the same state.

mod support;

use echo_app::{CategoryFilter, ActivityCategory, Preference, Screen, SetupStep};
use echo_terminal::tui::events::{events, TerminalEvent};
use echo_terminal::tui::state::ToastLevel;
use echo_terminal::tui::{transition, TuiCommand, TuiState};
use proptest::prelude::*;
use support::TestTui;

// ============================================================================
// Onboarding and setup
// ============================================================================

#[test]
fn test_full_onboarding_flow() {
    let mut tui = TestTui::new();
    tui.assert_screen(Screen::Onboarding);

    tui.send_enter();
    tui.assert_screen(Screen::Setup);

    tui.send_text("Sam");
    tui.send_enter();
    assert_eq!(
        tui.state.app.setup().map(|w| w.step()),
        Some(SetupStep::Interests)
    );

    // Pick "Reading"
    tui.send_char(' ');
    tui.send_enter();
    assert_eq!(tui.state.app.setup().map(|w| w.step()), Some(SetupStep::Goals));

    tui.send_enter();
    tui.assert_screen(Screen::Home);
    assert!(tui.state.app.setup().is_none());
    assert!(tui.commands.contains(&TuiCommand::ShowToast {
        message: "Welcome to Echo, Sam!".to_string(),
        level: ToastLevel::Success,
    }));
}

#[test]
fn test_setup_blocks_empty_name() {
    let mut tui = TestTui::new();
    tui.send_enter();
    tui.send_enter();
    tui.assert_screen(Screen::Setup);
    assert_eq!(tui.state.app.setup().map(|w| w.step()), Some(SetupStep::Name));
}

#[test]
fn test_setup_requires_an_interest() {
    let mut tui = TestTui::new();
    tui.send_enter();
    tui.send_text("Sam");
    tui.send_enter();
    // Skip interests, then try to complete
    tui.send_enter();
    tui.send_enter();
    tui.assert_screen(Screen::Setup);
    assert_eq!(tui.state.app.setup().map(|w| w.step()), Some(SetupStep::Goals));
}

#[test]
fn test_setup_back_keeps_answers() {
    let mut tui = TestTui::new();
    tui.send_enter();
    tui.send_text("Sam");
    tui.send_enter();
    tui.send(events::down());
    tui.send_char(' ');
    tui.send_escape();

    let wizard = tui.state.app.setup().unwrap();
    assert_eq!(wizard.step(), SetupStep::Name);
    assert_eq!(wizard.draft().name, "Sam");
    assert!(wizard.draft().interests.contains("Fitness"));
}

#[test]
fn test_q_is_text_on_name_step() {
    let mut tui = TestTui::new();
    tui.send_enter();
    tui.send_char('q');
    assert!(!tui.state.should_exit);
    assert_eq!(tui.state.app.setup().unwrap().draft().name, "q");
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_nav_bar_number_keys() {
    let mut tui = TestTui::at_home();

    tui.send_char('3');
    tui.assert_screen(Screen::Activities);
    tui.send_char('4');
    tui.assert_screen(Screen::Wellness);
    tui.send_char('5');
    tui.assert_screen(Screen::Settings);
    tui.send_char('1');
    tui.assert_screen(Screen::Home);
    tui.send_char('2');
    tui.assert_screen(Screen::Chat);
}

#[test]
fn test_home_shortcuts() {
    let mut tui = TestTui::at_home();
    tui.send_char('w');
    tui.assert_screen(Screen::Wellness);
    tui.send_escape();
    tui.send_char('s');
    tui.assert_screen(Screen::Settings);
    tui.send_escape();
    tui.send_char('c');
    tui.assert_screen(Screen::Chat);
    tui.send_escape();
    tui.assert_screen(Screen::Home);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut tui = TestTui::at_home();
    tui.send_char('?');
    assert!(tui.state.show_help);

    tui.send_char('3');
    tui.assert_screen(Screen::Home);

    tui.send_escape();
    assert!(!tui.state.show_help);
}

#[test]
fn test_quit_and_ctrl_c() {
    let mut tui = TestTui::at_home();
    tui.send_char('q');
    assert!(tui.state.should_exit);
    assert_eq!(tui.commands, vec![TuiCommand::Exit]);

    let mut tui = TestTui::at_home();
    tui.send_char('c');
    tui.send(events::ctrl('c'));
    assert!(tui.state.should_exit);
}

// ============================================================================
// Chat
// ============================================================================

#[test]
fn test_chat_send_appends_message() {
    let mut tui = TestTui::at_home();
    tui.send_char('c');
    let before = tui.state.app.conversation().len();

    tui.send_text("hello there");
    tui.send_enter();

    let log = tui.state.app.conversation();
    assert_eq!(log.len(), before + 1);
    let last = log.last().unwrap();
    assert!(last.is_from_user());
    assert_eq!(last.text, "hello there");
    assert!(tui.state.chat.input.is_empty());
}

#[test]
fn test_chat_blank_message_ignored() {
    let mut tui = TestTui::at_home();
    tui.send_char('c');
    let before = tui.state.app.conversation().len();

    tui.send_text("   ");
    tui.send_enter();

    assert_eq!(tui.state.app.conversation().len(), before);
    assert_eq!(tui.state.chat.input.text(), "   ");
}

#[test]
fn test_chat_listening_toggle() {
    let mut tui = TestTui::at_home();
    tui.send_char('c');
    tui.send(events::ctrl('l'));
    assert!(tui.state.chat.listening);
    tui.send(events::ctrl('l'));
    assert!(!tui.state.chat.listening);
}

// ============================================================================
// Voice call
// ============================================================================

#[test]
fn test_call_timer_counts_ticks() {
    let mut tui = TestTui::at_home();
    tui.send_char('c');
    tui.send(events::ctrl('p'));
    tui.assert_screen(Screen::Voice);

    let generation = tui.state.app.call().unwrap().generation();
    for _ in 0..65 {
        tui.send(TerminalEvent::CallTick { generation });
    }
    assert_eq!(tui.state.app.call().unwrap().display(), "01:05");
}

#[test]
fn test_leaving_voice_stops_timer() {
    let mut tui = TestTui::at_home();
    tui.send_char('v');
    let generation = tui.state.app.call().unwrap().generation();
    assert_eq!(
        tui.take_commands(),
        vec![TuiCommand::StartCallTimer { generation }]
    );

    tui.send_char('e');
    tui.assert_screen(Screen::Chat);
    assert!(tui.state.app.call().is_none());
    assert_eq!(tui.take_commands(), vec![TuiCommand::StopCallTimer]);
}

#[test]
fn test_stale_ticks_are_ignored() {
    let mut tui = TestTui::at_home();
    tui.send_char('v');
    let first = tui.state.app.call().unwrap().generation();
    tui.send_char('e');

    tui.send(events::ctrl('p'));
    let second = tui.state.app.call().unwrap().generation();
    assert_ne!(first, second);

    tui.send(TerminalEvent::CallTick { generation: first });
    assert_eq!(tui.state.app.call().unwrap().elapsed_secs(), 0);

    tui.send(TerminalEvent::CallTick { generation: second });
    assert_eq!(tui.state.app.call().unwrap().elapsed_secs(), 1);
}

#[test]
fn test_new_call_starts_at_zero() {
    let mut tui = TestTui::at_home();
    tui.send_char('v');
    let generation = tui.state.app.call().unwrap().generation();
    tui.send(TerminalEvent::CallTick { generation });
    tui.send_char('e');
    tui.send(events::ctrl('p'));
    assert_eq!(tui.state.app.call().unwrap().display(), "00:00");
}

#[test]
fn test_mute_toggle() {
    let mut tui = TestTui::at_home();
    tui.send_char('v');
    tui.send_char('m');
    assert!(tui.state.app.call().unwrap().is_muted());
    tui.send_char('m');
    assert!(!tui.state.app.call().unwrap().is_muted());
}

#[test]
fn test_voice_reachable_with_voice_features_off() {
    let mut tui = TestTui::at_home();
    tui.state.app.toggle_preference(Preference::VoiceFeatures);
    tui.send_char('v');
    tui.assert_screen(Screen::Voice);
    let generation = tui.state.app.call().unwrap().generation();
    assert_eq!(tui.commands, vec![TuiCommand::StartCallTimer { generation }]);

    let mut tui = TestTui::at_home();
    tui.state.app.toggle_preference(Preference::VoiceFeatures);
    tui.send_char('c');
    tui.send(events::ctrl('p'));
    tui.assert_screen(Screen::Voice);
}

// ============================================================================
// Activities
// ============================================================================

#[test]
fn test_activity_chips_filter() {
    let mut tui = TestTui::at_home();
    tui.send_char('a');
    tui.send(events::right());
    assert_eq!(
        tui.state.activities.filter.category,
        CategoryFilter::Only(ActivityCategory::Social)
    );
    let count = tui
        .state
        .app
        .activities()
        .filtered(&tui.state.activities.filter)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_activity_search_captures_q() {
    let mut tui = TestTui::at_home();
    tui.send_char('a');
    tui.send_char('/');
    tui.send_text("hiq");
    assert!(!tui.state.should_exit);
    assert_eq!(tui.state.activities.filter.query, "hiq");

    tui.send_escape();
    assert!(!tui.state.activities.searching);
    // First Esc outside search clears the query, the second leaves
    tui.send_escape();
    assert!(tui.state.activities.filter.query.is_empty());
    tui.assert_screen(Screen::Activities);
    tui.send_escape();
    tui.assert_screen(Screen::Home);
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_settings_toggle_dark_mode() {
    let mut tui = TestTui::at_home();
    tui.send_char('s');
    tui.send_enter();
    assert!(!tui.state.app.preferences().dark_mode);
    assert_eq!(
        tui.commands,
        vec![TuiCommand::ShowToast {
            message: "Dark Mode off".to_string(),
            level: ToastLevel::Info,
        }]
    );
}

#[test]
fn test_log_out_returns_to_onboarding() {
    let mut tui = TestTui::at_home();
    tui.send_char('s');
    for _ in 0..3 {
        tui.send(events::down());
    }
    tui.send_enter();

    tui.assert_screen(Screen::Onboarding);
    assert_eq!(tui.state.settings.selected, 0);

    // Setup starts over from step 1
    tui.send_enter();
    assert_eq!(tui.state.app.setup().map(|w| w.step()), Some(SetupStep::Name));
}

// ============================================================================
// Toasts
// ============================================================================

#[test]
fn test_toast_expires_after_ticks() {
    let mut tui = TestTui::at_home();
    tui.state
        .push_toast("hello".to_string(), ToastLevel::Info, 2);
    tui.send(TerminalEvent::Tick);
    assert!(tui.state.toast_queue.current().is_some());
    tui.send(TerminalEvent::Tick);
    assert!(tui.state.toast_queue.current().is_none());
}

// ============================================================================
// Properties
// ============================================================================

fn arb_event() -> impl Strategy<Value = TerminalEvent> {
    prop_oneof![
        prop::sample::select(vec!['1', '2', '3', '4', '5', 'a', 'c', 'v', 'w', 's', 'm', 'e', ' ', '/'])
            .prop_map(events::char),
        Just(events::enter()),
        Just(events::escape()),
        Just(events::tab()),
        Just(events::up()),
        Just(events::down()),
        Just(events::left()),
        Just(events::right()),
        Just(TerminalEvent::Tick),
        (0u64..4).prop_map(|generation| TerminalEvent::CallTick { generation }),
    ]
}

proptest! {
    #[test]
    fn prop_transition_is_deterministic(script in prop::collection::vec(arb_event(), 0..60)) {
        let mut a = TuiState::new();
        let mut b = TuiState::new();
        for event in script {
            let (next_a, cmds_a) = transition(&a, event.clone());
            let (next_b, cmds_b) = transition(&b, event);
            prop_assert_eq!(cmds_a, cmds_b);
            a = next_a;
            b = next_b;
        }
        prop_assert_eq!(a.screen(), b.screen());
        prop_assert_eq!(a.app.call().map(|c| c.elapsed_secs()), b.app.call().map(|c| c.elapsed_secs()));
    }

    #[test]
    fn prop_call_exists_only_on_voice(script in prop::collection::vec(arb_event(), 0..80)) {
        let mut tui = TestTui::new();
        for event in script {
            tui.send(event);
            prop_assert_eq!(tui.state.app.call().is_some(), tui.screen() == Screen::Voice);
            prop_assert_eq!(tui.state.app.setup().is_some(), tui.screen() == Screen::Setup);
        }
    }

    #[test]
    fn prop_timer_commands_pair_up(script in prop::collection::vec(arb_event(), 0..80)) {
        let mut tui = TestTui::at_home();
        let mut running = false;
        for event in script {
            tui.send(event);
            for command in tui.take_commands() {
                match command {
                    TuiCommand::StartCallTimer { .. } => {
                        prop_assert!(!running);
                        running = true;
                    }
                    TuiCommand::StopCallTimer => {
                        prop_assert!(running);
                        running = false;
                    }
                    _ => {}
                }
            }
            prop_assert_eq!(running, tui.screen() == Screen::Voice);
        }
    }
}
