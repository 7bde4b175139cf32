use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::input::TransactionForm;
use crate::projection::SortKey;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "sort",
        "Sort rows (value-desc, date-desc, default)",
        cmd_sort,
        r
    );
    register_command!("so", "Sort rows (e.g. :so date-desc)", cmd_sort, r);
    register_command!(
        "search",
        "Filter by description (e.g. :search rent)",
        cmd_search,
        r
    );
    register_command!("s", "Filter by description (e.g. :s rent)", cmd_search, r);
    register_command!("clear", "Clear the search filter", cmd_clear, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 2025-01-15 expense 4.50 Coffee)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction (no args opens the form)", cmd_add, r);
    register_command!("theme", "Toggle light/dark theme", cmd_theme, r);
    register_command!("t", "Toggle light/dark theme", cmd_theme, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_sort(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.cycle_sort();
        return Ok(());
    }
    let key = SortKey::parse(args);
    app.set_sort(key);
    if key == SortKey::Unsorted && !matches!(args, "default" | "none") {
        app.set_status(format!("Unknown sort '{args}', showing insertion order"));
    } else {
        app.set_status(format!("Sort: {}", key.label()));
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_search(args);
    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args} ({} matches)", app.rows.len()));
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    cmd_search("", app)
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_form();
        return Ok(());
    }

    let parts: Vec<&str> = args.splitn(4, ' ').collect();
    if parts.len() < 4 {
        app.set_status("Usage: :add <date> <type> <amount> <description>");
        return Ok(());
    }

    let form = TransactionForm::new(parts[3], parts[2], parts[0], parts[1]);
    match app.submit(&form) {
        Ok(id) => app.set_status(format!("Added #{id}: {}", parts[3].trim())),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_theme(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.toggle_theme();
    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
