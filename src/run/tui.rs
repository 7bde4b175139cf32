use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::TransactionStore;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::render::CHROME_HEIGHT;

pub(crate) fn as_tui(store: TransactionStore) -> Result<()> {
    let mut app = App::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    log::info!("TUI started with {} transactions", app.store.len());
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("TUI exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

/// One event at a time: apply it, re-project, redraw.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_HEIGHT) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Search => handle_search_input(key, app),
                InputMode::Form => handle_form_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.set_search("");
        }
        KeyCode::Char('a') => app.open_form(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_down();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_up();
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
            if !app.controls.search.is_empty() {
                app.set_search("");
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.set_search("");
        }
        KeyCode::Backspace => {
            // Live search: filter as you type
            let mut search = app.controls.search.clone();
            search.pop();
            app.set_search(&search);
        }
        KeyCode::Char(c) => {
            let mut search = app.controls.search.clone();
            search.push(c);
            app.set_search(&search);
        }
        _ => {}
    }
}

fn handle_form_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => {
            app.close_form();
            app.set_status("Add cancelled");
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(state) = app.form.as_mut() {
                state.field = state.field.next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(state) = app.form.as_mut() {
                state.field = state.field.prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(state) = app.form.as_mut() {
                state.current_mut().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(state) = app.form.as_mut() {
                state.current_mut().push(c);
            }
        }
        _ => {}
    }
}
