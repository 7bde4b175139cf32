use chrono::Local;

use crate::input::{InputError, TransactionForm};
use crate::projection::{summarize, DisplayRow, SortKey, Summary, ViewControls};
use crate::store::TransactionStore;
use crate::ui::theme::ThemeMode;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "ADD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Description,
    Amount,
    Date,
    Kind,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Description, Self::Amount, Self::Date, Self::Kind]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Date => "Date (YYYY-MM-DD)",
            Self::Kind => "Type (income/expense)",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Kind,
            Self::Kind => Self::Description,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Description => Self::Kind,
            Self::Amount => Self::Description,
            Self::Date => Self::Amount,
            Self::Kind => Self::Date,
        }
    }
}

/// The add-transaction form while it is open.
#[derive(Debug, Clone)]
pub(crate) struct FormState {
    pub(crate) form: TransactionForm,
    pub(crate) field: FormField,
}

impl FormState {
    pub(crate) fn new() -> Self {
        Self {
            form: TransactionForm {
                date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
                kind: "expense".into(),
                ..TransactionForm::default()
            },
            field: FormField::Description,
        }
    }

    pub(crate) fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.form.description,
            FormField::Amount => &self.form.amount,
            FormField::Date => &self.form.date,
            FormField::Kind => &self.form.kind,
        }
    }

    pub(crate) fn current_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Description => &mut self.form.description,
            FormField::Amount => &mut self.form.amount,
            FormField::Date => &mut self.form.date,
            FormField::Kind => &mut self.form.kind,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) theme: ThemeMode,

    // Source of truth and the controls applied to it
    pub(crate) store: TransactionStore,
    pub(crate) controls: ViewControls,

    // Derived on every change
    pub(crate) rows: Vec<DisplayRow>,
    pub(crate) summary: Summary,
    pub(crate) row_index: usize,
    pub(crate) row_scroll: usize,

    pub(crate) form: Option<FormState>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: TransactionStore) -> Self {
        let mut app = Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            theme: ThemeMode::default(),

            store,
            controls: ViewControls::default(),

            rows: Vec::new(),
            summary: Summary::default(),
            row_index: 0,
            row_scroll: 0,

            form: None,

            visible_rows: 20,
        };
        app.reproject();
        app
    }

    /// Recompute rows and totals from the store and current controls.
    pub(crate) fn reproject(&mut self) {
        self.rows = self.controls.project(&self.store);
        self.summary = summarize(self.store.all());
        if self.row_index >= self.rows.len() {
            self.row_index = self.rows.len().saturating_sub(1);
        }
        if self.row_scroll > self.row_index {
            self.row_scroll = self.row_index;
        }
    }

    /// Validate and store a submitted form. A rejected form leaves the store
    /// untouched.
    pub(crate) fn submit(&mut self, form: &TransactionForm) -> Result<u64, InputError> {
        let new = match form.parse() {
            Ok(new) => new,
            Err(e) => {
                log::warn!("Rejected submission: {e}");
                return Err(e);
            }
        };
        let stored = self.store.append(new);
        let id = stored.id;
        log::info!(
            "Added transaction #{id}: {} {} {}",
            stored.description,
            stored.kind,
            stored.amount
        );
        self.reproject();
        Ok(id)
    }

    pub(crate) fn set_search(&mut self, raw: &str) {
        self.controls.set_search(raw);
        self.row_index = 0;
        self.row_scroll = 0;
        self.reproject();
    }

    pub(crate) fn set_sort(&mut self, key: SortKey) {
        self.controls.sort = key;
        log::debug!("Sort key: {key}");
        self.reproject();
    }

    pub(crate) fn cycle_sort(&mut self) {
        self.set_sort(self.controls.sort.next());
        self.set_status(format!("Sort: {}", self.controls.sort.label()));
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.set_status(format!("Theme: {}", self.theme));
    }

    pub(crate) fn open_form(&mut self) {
        self.form = Some(FormState::new());
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn close_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Submit the open form. On success the form closes; on failure it stays
    /// open with the error in the status bar.
    pub(crate) fn submit_form(&mut self) {
        let Some(state) = self.form.as_ref() else {
            return;
        };
        let form = state.form.clone();
        match self.submit(&form) {
            Ok(id) => {
                self.close_form();
                self.set_status(format!("Added #{id}: {}", form.description.trim()));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub(crate) fn move_down(&mut self) {
        let page = self.visible_rows.max(1);
        scroll_down(&mut self.row_index, &mut self.row_scroll, self.rows.len(), page);
    }

    pub(crate) fn move_up(&mut self) {
        scroll_up(&mut self.row_index, &mut self.row_scroll);
    }

    pub(crate) fn goto_top(&mut self) {
        scroll_to_top(&mut self.row_index, &mut self.row_scroll);
    }

    pub(crate) fn goto_bottom(&mut self) {
        let page = self.visible_rows.max(1);
        scroll_to_bottom(&mut self.row_index, &mut self.row_scroll, self.rows.len(), page);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
