//! Key handling, global first and then per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use echo_app::{NavAction, Screen, SetupOutcome, SetupStep, Transition};

use super::views::{
    ActivitiesViewState, ChatViewState, HomeViewState, SettingsRow, SettingsViewState,
};
use super::{TuiCommand, TuiState};
use crate::tui::components::InputAction;

pub(super) fn handle_key(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        exit(state, commands);
        return;
    }

    if state.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::F(1) => {
                state.show_help = false;
            }
            KeyCode::Char('q') => exit(state, commands),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::F(1) {
        state.show_help = true;
        return;
    }

    if !state.is_typing() && !ctrl {
        match key.code {
            KeyCode::Char('q') => {
                exit(state, commands);
                return;
            }
            KeyCode::Char('?') => {
                state.show_help = true;
                return;
            }
            _ => {}
        }

        if state.screen().shows_nav_bar() && handle_nav_bar(state, key, commands) {
            return;
        }
    }

    match state.screen() {
        Screen::Onboarding => handle_onboarding(state, key, commands),
        Screen::Setup => handle_setup(state, key, commands),
        Screen::Home => handle_home(state, key, commands),
        Screen::Chat => handle_chat(state, key, commands),
        Screen::Voice => handle_voice(state, key, commands),
        Screen::Activities => handle_activities(state, key, commands),
        Screen::Wellness => {
            if key.code == KeyCode::Esc {
                state.navigate(NavAction::GoTo(Screen::Home), commands);
            }
        }
        Screen::Settings => handle_settings(state, key, commands),
    }
}

fn exit(state: &mut TuiState, commands: &mut Vec<TuiCommand>) {
    state.should_exit = true;
    commands.push(TuiCommand::Exit);
}

fn handle_nav_bar(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) -> bool {
    let action = match key.code {
        KeyCode::Char(c) => match c.to_digit(10).and_then(|d| Screen::from_key(d as u8)) {
            Some(screen) => NavAction::GoTo(screen),
            None => return false,
        },
        KeyCode::Tab => NavAction::NextTab,
        KeyCode::BackTab => NavAction::PrevTab,
        _ => return false,
    };
    state.navigate(action, commands);
    true
}

fn handle_onboarding(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        state.navigate(NavAction::GoTo(Screen::Setup), commands);
    }
}

fn handle_setup(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    let Some(step) = state.app.setup().map(|wizard| wizard.step()) else {
        return;
    };

    if step == SetupStep::Name {
        match state.setup.name_input.handle_key(key) {
            InputAction::Edited => {
                let name = state.setup.name_input.text().to_string();
                if let Some(wizard) = state.app.setup_mut() {
                    wizard.set_name(name);
                }
            }
            InputAction::Submit(_) => submit_setup(state, commands),
            InputAction::Cancel => state.navigate(NavAction::GoTo(Screen::Onboarding), commands),
            InputAction::None | InputAction::Ignored => {}
        }
        return;
    }

    let options = step.options();
    match key.code {
        KeyCode::Up => {
            state.setup.option_cursor =
                (state.setup.option_cursor + options.len() - 1) % options.len();
        }
        KeyCode::Down => {
            state.setup.option_cursor = (state.setup.option_cursor + 1) % options.len();
        }
        KeyCode::Char(' ') => {
            if let (Some(option), Some(wizard)) =
                (options.get(state.setup.option_cursor), state.app.setup_mut())
            {
                let draft = wizard.draft_mut();
                if step == SetupStep::Interests {
                    draft.toggle_interest(option);
                } else {
                    draft.toggle_goal(option);
                }
            }
        }
        KeyCode::Enter => submit_setup(state, commands),
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => {
            if let Some(wizard) = state.app.setup_mut() {
                wizard.back();
            }
            state.setup.option_cursor = 0;
        }
        _ => {}
    }
}

fn submit_setup(state: &mut TuiState, commands: &mut Vec<TuiCommand>) {
    let name = state
        .app
        .setup()
        .map(|wizard| wizard.draft().name.clone())
        .unwrap_or_default();

    match state.app.submit_setup() {
        SetupOutcome::Advanced(step) => {
            tracing::debug!(step = step.number(), "setup advanced");
            state.setup.option_cursor = 0;
        }
        SetupOutcome::Completed => {
            tracing::info!("setup completed");
            state.after_transition(
                Transition {
                    from: Screen::Setup,
                    to: Screen::Home,
                },
                commands,
            );
            commands.push(TuiCommand::success(format!("Welcome to Echo, {name}!")));
        }
        SetupOutcome::Rejected => {}
    }
}

fn handle_home(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    match key.code {
        KeyCode::Char('m') => state.home.menu_open = !state.home.menu_open,
        KeyCode::Esc => state.home.menu_open = false,
        KeyCode::Char('c') => state.navigate(NavAction::GoTo(Screen::Chat), commands),
        KeyCode::Char('v') => state.navigate(NavAction::GoTo(Screen::Voice), commands),
        KeyCode::Char('a') => state.navigate(NavAction::GoTo(Screen::Activities), commands),
        KeyCode::Char('w') => state.navigate(NavAction::GoTo(Screen::Wellness), commands),
        KeyCode::Char('s') => state.navigate(NavAction::GoTo(Screen::Settings), commands),
        _ => {}
    }
}

fn handle_chat(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('p') => {
                state.navigate(NavAction::GoTo(Screen::Voice), commands);
                return;
            }
            KeyCode::Char('l') => {
                state.chat.listening = !state.chat.listening;
                return;
            }
            _ => {}
        }
    }

    match state.chat.input.handle_key(key) {
        InputAction::Submit(text) => {
            if state.app.send_message(&text).is_some() {
                state.chat.input.commit();
            }
        }
        InputAction::Cancel => state.navigate(NavAction::GoTo(Screen::Home), commands),
        InputAction::Edited | InputAction::None | InputAction::Ignored => {}
    }
}

fn handle_voice(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    match key.code {
        KeyCode::Char('m') => {
            state.app.toggle_mute();
        }
        KeyCode::Char('e') | KeyCode::Enter | KeyCode::Esc => {
            if let Some(transition) = state.app.end_call() {
                state.after_transition(transition, commands);
            }
        }
        _ => {}
    }
}

fn handle_activities(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    let view = &mut state.activities;

    if view.searching {
        match view.search.handle_key(key) {
            InputAction::Edited => {
                view.filter.query = view.search.text().to_string();
                view.selected = 0;
            }
            InputAction::Submit(_) | InputAction::Cancel => view.searching = false,
            InputAction::None | InputAction::Ignored => {}
        }
        return;
    }

    match key.code {
        KeyCode::Left => {
            view.filter.category = view.filter.category.prev();
            view.selected = 0;
        }
        KeyCode::Right => {
            view.filter.category = view.filter.category.next();
            view.selected = 0;
        }
        KeyCode::Up => view.selected = view.selected.saturating_sub(1),
        KeyCode::Down => {
            let count = state.app.activities().filtered(&view.filter).count();
            if view.selected + 1 < count {
                view.selected += 1;
            }
        }
        KeyCode::Char('/') => view.searching = true,
        KeyCode::Esc => {
            if view.filter.query.is_empty() {
                state.navigate(NavAction::GoTo(Screen::Home), commands);
            } else {
                view.search.clear();
                view.filter.query.clear();
                view.selected = 0;
            }
        }
        _ => {}
    }
}

fn handle_settings(state: &mut TuiState, key: KeyEvent, commands: &mut Vec<TuiCommand>) {
    let rows = SettingsRow::all();
    match key.code {
        KeyCode::Up => state.settings.selected = state.settings.selected.saturating_sub(1),
        KeyCode::Down => {
            if state.settings.selected + 1 < rows.len() {
                state.settings.selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.settings.selected_row() {
            Some(SettingsRow::Toggle(pref)) => {
                let value = state.app.toggle_preference(pref);
                let status = if value { "on" } else { "off" };
                commands.push(TuiCommand::info(format!("{} {status}", pref.label())));
            }
            Some(SettingsRow::LogOut) => log_out(state, commands),
            None => {}
        },
        KeyCode::Esc => state.navigate(NavAction::GoTo(Screen::Home), commands),
        _ => {}
    }
}

fn log_out(state: &mut TuiState, commands: &mut Vec<TuiCommand>) {
    if let Some(transition) = state.app.log_out() {
        state.after_transition(transition, commands);
    }
    state.chat = ChatViewState::default();
    state.home = HomeViewState::default();
    state.activities = ActivitiesViewState::default();
    state.settings = SettingsViewState::default();
    tracing::info!("logged out");
    commands.push(TuiCommand::info("Logged out"));
}
