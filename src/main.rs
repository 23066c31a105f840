//! notes-suggest driver: mount a popup headlessly and replay input

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;

use notes_suggest::adapters::{
    default_commands, matching_commands, matching_notes, wikilink_text, CommandPopup, CommandRow,
    NotePopup, NoteRow,
};
use notes_suggest::cli::{AdapterKind, CliArgs};
use notes_suggest::config::SuggestConfig;
use notes_suggest::keymap::{parse_key_sequence, Keystroke};
use notes_suggest::messages::PopupMsg;
use notes_suggest::popup::SuggestionPopup;
use notes_suggest::theme::{load_theme, PopupTheme};
use notes_suggest::update::update;
use notes_suggest::view::PopupFrame;

fn main() -> Result<()> {
    notes_suggest::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => SuggestConfig::load_from(path),
        None => SuggestConfig::load(),
    };
    let theme = load_theme(&config.theme).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}", config.theme, e);
        PopupTheme::default()
    });
    let keys = parse_key_sequence(&args.keys).context("Invalid --keys")?;

    let committed = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&committed);

    match args.adapter {
        AdapterKind::Commands => {
            let commands = match &args.candidates {
                Some(path) => read_json(path)?,
                None => default_commands(),
            };
            let items = matching_commands(&commands, &args.query);
            let mut popup = CommandPopup::new(
                items,
                move |cmd| {
                    sink.borrow_mut().push(format!("/{}", cmd.title));
                    Ok(())
                },
                &config,
            );
            replay(popup.popup_mut(), &keys, args.click, &config, &theme, describe_command);
        }
        AdapterKind::Notes => {
            let Some(path) = &args.candidates else {
                bail!("--adapter notes needs --candidates <FILE>");
            };
            let notes = read_json(path)?;
            let items = matching_notes(&notes, &args.query);
            let mut popup = NotePopup::new(
                items,
                move |note| {
                    sink.borrow_mut().push(wikilink_text(note));
                    Ok(())
                },
                &config,
            );
            replay(popup.popup_mut(), &keys, args.click, &config, &theme, describe_note);
        }
    }

    for text in committed.borrow().iter() {
        println!("commit: {}", text);
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidates from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse candidates in {}", path.display()))
}

fn replay<T, C>(
    popup: &mut SuggestionPopup<T, C>,
    keys: &[Keystroke],
    click: Option<usize>,
    config: &SuggestConfig,
    theme: &PopupTheme,
    describe: fn(&C) -> String,
) {
    for key in keys {
        let result = update(popup, None, PopupMsg::Key(*key));
        println!(
            "key {:<6} {}",
            key.to_string(),
            if result.consumed { "consumed" } else { "ignored" }
        );
    }
    if let Some(index) = click {
        update(popup, None, PopupMsg::ClickRow(index));
    }

    let geometry = popup.geometry((0, 0), config);
    println!(
        "popup {}x{} ({} rows, theme {})",
        geometry.bounds.width, geometry.bounds.height, geometry.row_slots, theme.name
    );

    let frame = popup.render();
    match &frame {
        PopupFrame::Empty { text } => println!("  {}", text),
        PopupFrame::List { .. } => {
            for row in frame.visible_rows() {
                let marker = if row.is_selected() { '>' } else { ' ' };
                println!("{} {}", marker, describe(&row.content));
            }
        }
    }
}

fn describe_command(row: &CommandRow) -> String {
    format!("[{}] {}", row.icon, row.title)
}

fn describe_note(row: &NoteRow) -> String {
    match &row.preview {
        Some(preview) => format!("{} - {}", row.title, preview),
        None => row.title.clone(),
    }
}
