//! Numbered interactive menu over an in-process route graph.
//!
//! Launch with `routes` (no subcommand). Each choice that needs two cities
//! prompts for a source and a destination ID. Malformed input re-prompts.

use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::cli::commands;
use crate::graph::RouteGraph;
use crate::types::{CityId, RouteError, RouteResult};

/// Menu entries in display order, with their number.
pub const MENU_ITEMS: &[(u8, &str)] = &[
    (1, "View cities"),
    (2, "Add route"),
    (3, "Remove route"),
    (4, "Check route connectivity"),
    (5, "Display route map"),
    (6, "Find shortest route"),
    (0, "Exit"),
];

/// A menu selection, before any city IDs have been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewCities,
    AddRoute,
    RemoveRoute,
    CheckConnectivity,
    DisplayMap,
    ShortestRoute,
    Exit,
}

impl MenuChoice {
    /// Map a menu number to a choice.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            0 => Some(Self::Exit),
            1 => Some(Self::ViewCities),
            2 => Some(Self::AddRoute),
            3 => Some(Self::RemoveRoute),
            4 => Some(Self::CheckConnectivity),
            5 => Some(Self::DisplayMap),
            6 => Some(Self::ShortestRoute),
            _ => None,
        }
    }

    /// Whether the choice needs a source and destination city.
    pub fn needs_endpoints(self) -> bool {
        matches!(
            self,
            Self::AddRoute | Self::RemoveRoute | Self::CheckConnectivity | Self::ShortestRoute
        )
    }
}

/// A fully specified menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewCities,
    AddRoute(CityId, CityId),
    RemoveRoute(CityId, CityId),
    CheckConnectivity(CityId, CityId),
    DisplayMap,
    ShortestRoute(CityId, CityId),
    Exit,
}

impl MenuAction {
    /// Combine a choice with its endpoints. Returns `None` if the choice
    /// needs endpoints and none were given.
    pub fn new(choice: MenuChoice, endpoints: Option<(CityId, CityId)>) -> Option<Self> {
        let action = match (choice, endpoints) {
            (MenuChoice::ViewCities, _) => Self::ViewCities,
            (MenuChoice::DisplayMap, _) => Self::DisplayMap,
            (MenuChoice::Exit, _) => Self::Exit,
            (MenuChoice::AddRoute, Some((a, b))) => Self::AddRoute(a, b),
            (MenuChoice::RemoveRoute, Some((a, b))) => Self::RemoveRoute(a, b),
            (MenuChoice::CheckConnectivity, Some((a, b))) => Self::CheckConnectivity(a, b),
            (MenuChoice::ShortestRoute, Some((a, b))) => Self::ShortestRoute(a, b),
            (_, None) => return None,
        };
        Some(action)
    }
}

/// Parse a single integer from a line of input.
pub fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Run one action against the graph. Returns `true` if the menu should exit.
pub fn execute(
    action: MenuAction,
    graph: &mut RouteGraph,
    out: &mut impl Write,
) -> RouteResult<bool> {
    match action {
        MenuAction::ViewCities => commands::cmd_cities(graph, false, out)?,
        MenuAction::AddRoute(from, to) => commands::cmd_add_route(graph, from, to, false, out)?,
        MenuAction::RemoveRoute(from, to) => {
            commands::cmd_remove_route(graph, from, to, false, out)?
        }
        MenuAction::CheckConnectivity(from, to) => {
            writeln!(out, "Checking connectivity...")?;
            commands::cmd_reach(graph, from, to, false, out)?
        }
        MenuAction::DisplayMap => commands::cmd_map(graph, false, out)?,
        MenuAction::ShortestRoute(from, to) => commands::cmd_path(graph, from, to, false, out)?,
        MenuAction::Exit => return Ok(true),
    }
    Ok(false)
}

/// Render the menu.
pub fn render_menu() -> String {
    let rule = "=".repeat(40);
    let mut out = format!("\n{rule}\n    AIRLINE ROUTE MANAGEMENT SYSTEM\n{rule}\n");
    for (n, label) in MENU_ITEMS {
        out.push_str(&format!("{n}. {label}\n"));
    }
    out.push_str(&rule);
    out
}

/// Line editor settings. Entered lines go to history automatically.
pub fn editor_config() -> Config {
    Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build()
}

/// Outcome of reading one line.
enum Input {
    Line(String),
    Interrupted,
    Eof,
}

fn read_line(rl: &mut DefaultEditor, prompt: &str) -> RouteResult<Input> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
        Err(ReadlineError::Eof) => Ok(Input::Eof),
        Err(err) => Err(RouteError::Readline(err.to_string())),
    }
}

/// Read a city ID. `Ok(None)` means the input was unusable and the current
/// menu action should be abandoned.
fn read_city_id(rl: &mut DefaultEditor, prompt: &str) -> RouteResult<Option<CityId>> {
    match read_line(rl, prompt)? {
        Input::Line(line) => {
            let id = parse_number(&line);
            if id.is_none() {
                eprintln!("Invalid input!");
            }
            Ok(id)
        }
        Input::Interrupted | Input::Eof => Ok(None),
    }
}

/// Run the interactive menu until the user exits.
pub fn run(graph: &mut RouteGraph) -> RouteResult<()> {
    let mut rl = DefaultEditor::with_config(editor_config())
        .map_err(|e| RouteError::Readline(e.to_string()))?;
    let mut stdout = std::io::stdout();

    loop {
        eprintln!("{}", render_menu());
        let line = match read_line(&mut rl, "Enter choice: ")? {
            Input::Line(line) => line,
            Input::Interrupted => {
                eprintln!("(Ctrl+C) Enter 0 to exit.");
                continue;
            }
            Input::Eof => break,
        };

        let Some(number) = parse_number(&line) else {
            eprintln!("\nError: Invalid input! Please enter a number.");
            continue;
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            eprintln!("\nInvalid choice! Please select a valid option (0-6).");
            continue;
        };

        let endpoints = if choice.needs_endpoints() {
            let Some(from) = read_city_id(&mut rl, "\nEnter source city ID: ")? else {
                continue;
            };
            let Some(to) = read_city_id(&mut rl, "Enter destination city ID: ")? else {
                continue;
            };
            Some((from, to))
        } else {
            None
        };

        let Some(action) = MenuAction::new(choice, endpoints) else {
            continue;
        };
        match execute(action, graph, &mut stdout) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => eprintln!("{e}"),
        }
        stdout.flush()?;
    }

    eprintln!("\nThank you for using Airline Route Management System!");
    Ok(())
}
