// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wingdeck dashboard`: the interactive shell over the app list.
//!
//! Keeps one [`AppList`] and one [`SuggestionFinder`] for the whole session.
//! Any operation that comes back 401 ends the shell; the stored session is
//! already gone by then and `wingdeck login` is the way back in.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, warn};

use wingdeck_core::{Application, BackendApi, PackageSuggestion, SESSION_EXPIRED, WingdeckError};
use wingdeck_session::SessionStore;
use wingdeck_state::{AppForm, AppList, ListState, SuggestionFinder, catalog};

use crate::render;
use crate::script::{SCRIPT_FILENAME, copy_to_clipboard, save_script};

/// A parsed shell line.
#[derive(Debug, PartialEq, Eq)]
enum DashCommand {
    List,
    Add,
    Edit(i64),
    Remove(i64),
    Script,
    Popular,
    Search(String),
    Help,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Option<DashCommand> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let rest: Vec<&str> = parts.collect();

    Some(match head.to_ascii_lowercase().as_str() {
        "list" | "ls" => DashCommand::List,
        "add" => DashCommand::Add,
        "edit" => match rest.first().and_then(|s| s.parse().ok()) {
            Some(id) => DashCommand::Edit(id),
            None => DashCommand::Invalid("usage: edit <id>".into()),
        },
        "rm" | "remove" => match rest.first().and_then(|s| s.parse().ok()) {
            Some(id) => DashCommand::Remove(id),
            None => DashCommand::Invalid("usage: rm <id>".into()),
        },
        "script" => DashCommand::Script,
        "popular" => DashCommand::Popular,
        "search" => {
            if rest.is_empty() {
                DashCommand::Invalid("usage: search <query>".into())
            } else {
                DashCommand::Search(rest.join(" "))
            }
        }
        "help" | "?" => DashCommand::Help,
        "quit" | "exit" | "q" => DashCommand::Quit,
        other => DashCommand::Invalid(format!("unknown command: {other} (try help)")),
    })
}

pub async fn run_dashboard(
    api: Arc<dyn BackendApi>,
    session: Arc<SessionStore>,
) -> Result<(), WingdeckError> {
    let Some(user) = session.user().await else {
        eprintln!("Not signed in. Run {} first.", "wingdeck login".yellow());
        std::process::exit(1);
    };

    let mut list = AppList::new(Arc::clone(&api));
    let finder = SuggestionFinder::new(Arc::clone(&api));

    println!("{}", "wingdeck dashboard".bold().green());
    println!(
        "Welcome, {}. Type {} for commands.\n",
        user.email.cyan(),
        "help".yellow()
    );

    if let Err(err) = list.refresh().await
        && bail_on_unauthorized(&err)
    {
        return Ok(());
    }
    render_list(&list);

    let mut rl = DefaultEditor::new()
        .map_err(|e| WingdeckError::Internal(format!("failed to initialize readline: {e}")))?;
    let prompt = format!("{}> ", "wingdeck".green());

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let Some(command) = parse_command(line.trim()) else {
                    continue;
                };
                let _ = rl.add_history_entry(&line);
                if !handle_command(command, &api, &mut rl, &mut list, &finder).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Prints the session-expired notice when the error is a 401. The transport
/// has already dropped the stored session by the time this runs.
fn bail_on_unauthorized(err: &WingdeckError) -> bool {
    if err.is_unauthorized() {
        warn!("server rejected the stored session, ending the shell");
        eprintln!("{}", SESSION_EXPIRED.yellow());
        eprintln!("Run {} to sign in again.", "wingdeck login".yellow());
        true
    } else {
        false
    }
}

fn render_list(list: &AppList) {
    match list.state() {
        ListState::Loading => println!("{}", "loading...".dimmed()),
        ListState::Error(message) => eprintln!("{}", message.red()),
        ListState::Ready(apps) => render::render_apps(apps),
    }
}

/// Executes one shell command. Returns false when the shell should end.
async fn handle_command(
    command: DashCommand,
    api: &Arc<dyn BackendApi>,
    rl: &mut DefaultEditor,
    list: &mut AppList,
    finder: &SuggestionFinder,
) -> bool {
    match command {
        DashCommand::List => {
            if let Err(err) = list.refresh().await
                && bail_on_unauthorized(&err)
            {
                return false;
            }
            render_list(list);
            true
        }
        DashCommand::Add => run_form_flow(rl, list, finder, None).await,
        DashCommand::Edit(id) => match list.get(id).cloned() {
            Some(existing) => run_form_flow(rl, list, finder, Some(existing)).await,
            None => {
                eprintln!("{}", format!("no application with id {id}").red());
                true
            }
        },
        DashCommand::Remove(id) => remove_flow(rl, list, id).await,
        DashCommand::Script => script_flow(rl, list).await,
        DashCommand::Popular => popular_flow(rl, list).await,
        DashCommand::Search(query) => search_flow(api, &query).await,
        DashCommand::Help => {
            print_help();
            true
        }
        DashCommand::Quit => false,
        DashCommand::Invalid(message) => {
            eprintln!("{}", message.red());
            true
        }
    }
}

/// `add`/`edit`: prompt-per-field form with suggestion pick. A validation
/// failure echoes the buffers back for another pass; Ctrl+C cancels.
async fn run_form_flow(
    rl: &mut DefaultEditor,
    list: &mut AppList,
    finder: &SuggestionFinder,
    existing: Option<Application>,
) -> bool {
    let editing = existing.as_ref().map(|app| app.id);
    let mut form = match &existing {
        Some(app) => AppForm::from_application(app),
        None => AppForm::default(),
    };

    let payload = loop {
        match fill_form(rl, finder, &mut form).await {
            Ok(true) => {}
            Ok(false) => {
                finder.invalidate().await;
                println!("Cancelled.");
                return true;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                return true;
            }
        }
        match form.validate() {
            Ok(payload) => break payload,
            Err(e) => eprintln!("{}", e.user_message("Failed to save app").red()),
        }
    };
    finder.invalidate().await;

    let saved = match editing {
        Some(id) => list.update(id, &payload).await.map(|_| ()),
        None => list.create(&payload).await.map(|_| ()),
    };
    match saved {
        Ok(()) => {
            println!("Saved {}.", payload.name.bold());
            render_list(list);
            true
        }
        Err(err) => {
            if bail_on_unauthorized(&err) {
                return false;
            }
            eprintln!("{}", err.user_message("Failed to save app").red());
            true
        }
    }
}

/// Prompts for every field in order, pre-filled with the current buffers.
/// Returns Ok(false) when the user cancelled.
async fn fill_form(
    rl: &mut DefaultEditor,
    finder: &SuggestionFinder,
    form: &mut AppForm,
) -> Result<bool, WingdeckError> {
    let Some(name) = prompt_field(rl, "Name: ", &form.name)? else {
        return Ok(false);
    };
    form.name = name;

    // One lookup per pass; the hits land only while this is still the
    // latest request and the id field is still empty.
    if let Some(handle) = finder.refresh(&form.name, &form.winget_id).await {
        let _ = handle.await;
    }
    let hits = finder.current().await;
    if !hits.is_empty() {
        println!("Suggestions:");
        for (i, hit) in hits.iter().enumerate() {
            render::render_suggestion(i + 1, hit);
        }
    }

    let Some(winget_id) = prompt_field(rl, "Winget ID: ", &form.winget_id)? else {
        return Ok(false);
    };
    match pick_suggestion(&winget_id, &hits) {
        Some(id) => {
            form.winget_id = id;
            finder.invalidate().await;
        }
        None => form.winget_id = winget_id,
    }

    let Some(download_url) = prompt_field(rl, "Download URL: ", &form.download_url)? else {
        return Ok(false);
    };
    form.download_url = download_url;

    let Some(args) = prompt_field(rl, "Install args: ", &form.args)? else {
        return Ok(false);
    };
    form.args = args;

    Ok(true)
}

/// A numeric answer within range picks that suggestion's id.
fn pick_suggestion(input: &str, hits: &[PackageSuggestion]) -> Option<String> {
    let number: usize = input.trim().parse().ok()?;
    if number == 0 || number > hits.len() {
        return None;
    }
    Some(hits[number - 1].id.clone())
}

/// Reads one field with the current value pre-filled. None means cancel.
fn prompt_field(
    rl: &mut DefaultEditor,
    prompt: &str,
    initial: &str,
) -> Result<Option<String>, WingdeckError> {
    match rl.readline_with_initial(prompt, (initial, "")) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(WingdeckError::Internal(format!(
            "failed to read input: {e}"
        ))),
    }
}

async fn remove_flow(rl: &mut DefaultEditor, list: &mut AppList, id: i64) -> bool {
    if list.get(id).is_none() {
        eprintln!("{}", format!("no application with id {id}").red());
        return true;
    }
    if !ask_yes_no(rl, "Are you sure you want to delete this app? [y/N] ") {
        println!("Aborted.");
        return true;
    }

    match list.delete(id).await {
        Ok(()) => {
            println!("Removed application {id}.");
            render_list(list);
            true
        }
        Err(err) => {
            if bail_on_unauthorized(&err) {
                return false;
            }
            eprintln!("{}", err.user_message("Failed to delete app").red());
            true
        }
    }
}

/// `script`: guarded fetch, then offer clipboard and file delivery.
async fn script_flow(rl: &mut DefaultEditor, list: &mut AppList) -> bool {
    if !matches!(list.state(), ListState::Ready(_)) {
        eprintln!("{}", "The list did not load; run list first.".red());
        return true;
    }
    if list.is_empty() {
        println!("No applications to include. Add one first.");
        return true;
    }

    let script = match list.generate_script().await {
        Ok(script) => script,
        Err(err) => {
            if bail_on_unauthorized(&err) {
                return false;
            }
            eprintln!("{}", err.user_message("Failed to generate script").red());
            return true;
        }
    };
    debug!(bytes = script.len(), "script generated");

    println!("{}", "Generated script:".bold());
    println!("{script}");

    if ask_yes_no(rl, "Copy to clipboard? [y/N] ") {
        match copy_to_clipboard(&script) {
            Ok(()) => println!("Script copied to clipboard!"),
            Err(e) => eprintln!("{}", e.to_string().yellow()),
        }
    }
    if ask_yes_no(rl, &format!("Save to {SCRIPT_FILENAME}? [y/N] ")) {
        match save_script(&script, Path::new(SCRIPT_FILENAME)).await {
            Ok(path) => println!("Saved to {}.", path.display()),
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }
    true
}

/// `popular`: render the catalog in its sections and quick-add by number.
async fn popular_flow(rl: &mut DefaultEditor, list: &mut AppList) -> bool {
    println!("{}", "Popular Apps".bold());
    println!("Quick add your favorites with one click.\n");

    let mut number = 0;
    for section in catalog::CATALOG {
        println!("{}", section.title.bold());
        for package in section.packages {
            number += 1;
            println!("  {number:>2}. {}  ({})", package.name, package.id.dimmed());
        }
        println!();
    }

    let answer = match rl.readline("Add which? (number, Enter to skip) ") {
        Ok(line) => line,
        Err(_) => return true,
    };
    let Ok(choice) = answer.trim().parse::<usize>() else {
        return true;
    };
    let Some(package) = choice.checked_sub(1).and_then(catalog::package_at) else {
        eprintln!("{}", format!("no package number {choice}").red());
        return true;
    };

    match list.create(&catalog::quick_add_payload(package)).await {
        Ok(created) => {
            println!("Added {}.", created.name.bold());
            render_list(list);
            true
        }
        Err(err) => {
            if bail_on_unauthorized(&err) {
                return false;
            }
            eprintln!("{}", err.user_message("Failed to save app").red());
            true
        }
    }
}

/// `search <query>`: one catalog search outside the form.
async fn search_flow(api: &Arc<dyn BackendApi>, query: &str) -> bool {
    match api.search_packages(query).await {
        Ok(hits) if hits.is_empty() => {
            println!("No matches.");
            true
        }
        Ok(hits) => {
            for (i, hit) in hits.iter().enumerate() {
                render::render_suggestion(i + 1, hit);
            }
            true
        }
        Err(err) => {
            if bail_on_unauthorized(&err) {
                return false;
            }
            eprintln!("{}", err.user_message("Search failed").red());
            true
        }
    }
}

fn ask_yes_no(rl: &mut DefaultEditor, prompt: &str) -> bool {
    matches!(rl.readline(prompt), Ok(line) if matches!(line.trim(), "y" | "Y" | "yes"))
}

fn print_help() {
    println!("Commands:");
    println!("  {:<16} refresh and show the list", "list");
    println!("  {:<16} add an application", "add");
    println!("  {:<16} edit an application", "edit <id>");
    println!("  {:<16} delete an application", "rm <id>");
    println!("  {:<16} generate the install script", "script");
    println!("  {:<16} browse the popular catalog", "popular");
    println!("  {:<16} search winget packages", "search <query>");
    println!("  {:<16} leave the dashboard", "quit");
}
