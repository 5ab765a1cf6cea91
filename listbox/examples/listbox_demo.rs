// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replays a scripted key sequence against a listbox of animals and prints the result.
//!
//! ```text
//! cargo run --example listbox_demo -- --mode multiple --keys "down down enter e enter"
//! cargo run --example listbox_demo -- --mode single --keys "c r enter" --log-to-stderr
//! ```
//!
//! Script tokens are separated by whitespace. Named keys are `up`, `down`, `home`,
//! `end`, `pgup`, `pgdn`, `enter`, `space`, `esc`, and `tab`. `wait` pauses for longer
//! than the type-ahead timeout. Any other token is typed one character at a time.

use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use r3bl_listbox::{CommonResult, DisplayPreference, EventPropagation, InputEvent, ItemKey,
                   ItemPatch, ItemSource, Listbox, ListboxConfig, ListboxNotification,
                   SelectionMode, TracingConfig, TracingScope, init_tracing, ok};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive a headless listbox from the command line")]
struct Cli {
    /// Selection mode. Defaults to `single` unless `--config-json` sets it.
    #[arg(long, value_enum)]
    mode: Option<SelectionMode>,
    /// Allow a commit to empty the selection, eg: `--allow-empty false`.
    #[arg(long)]
    allow_empty: Option<bool>,
    /// Key script, eg: "down down enter".
    #[arg(long, default_value = "e enter")]
    keys: String,
    /// Comma separated labels of disabled items.
    #[arg(long, default_value = "")]
    disabled: String,
    /// Optional JSON config. Flags override it.
    #[arg(long)]
    config_json: Option<String>,
    #[arg(long, help = "Show debug logs on stderr")]
    log_to_stderr: bool,
}

/// Starts from `--config-json` (or the defaults) and applies only the flags that were
/// passed on the command line.
fn listbox_config(cli: &Cli) -> CommonResult<ListboxConfig> {
    let mut config = match &cli.config_json {
        Some(json) => ListboxConfig::try_from_json_str(json)?,
        None => ListboxConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config = config.with_selection_mode(mode);
    }
    if let Some(allow_empty) = cli.allow_empty {
        config = config.with_allow_empty(allow_empty);
    }
    Ok(config)
}

const ANIMALS: [&str; 6] = ["cheetah", "crocodile", "elephant", "eagle", "cobra", "ant"];

fn main() -> CommonResult<()> {
    let cli = Cli::parse();

    let _guard = if cli.log_to_stderr {
        init_tracing(
            TracingConfig::new_display(DisplayPreference::Stderr)
                .with_scope(TracingScope::ThreadLocal),
        )?
    } else {
        None
    };

    let mut listbox = Listbox::new(listbox_config(&cli)?);
    listbox.add_observer(|it: &ListboxNotification| println!("  📣 {it:?}"));

    listbox.sync_items(ItemSource::from_rows(ANIMALS.to_vec()))?;
    for label in cli.disabled.split(',').map(str::trim).filter(|it| !it.is_empty()) {
        listbox.update_item(&ItemKey::from(label), &ItemPatch::disabled(true))?;
    }

    let mut now = Instant::now();
    for token in cli.keys.split_whitespace() {
        if token == "wait" {
            now += Duration::from_secs(2);
            continue;
        }
        for key_event in script_token_to_key_events(token) {
            now += Duration::from_millis(50);
            let Ok(input_event) = InputEvent::try_from(Event::Key(key_event)) else {
                continue;
            };
            let propagation = listbox.handle_input_event_at(input_event, now);
            println!("⌨️  {token:<8} -> {propagation:?}");
            if propagation == EventPropagation::Propagate {
                println!("  (not handled by the listbox)");
            }
        }
    }

    println!();
    println!(
        "mode: {}, search buffer: {:?}",
        listbox.selection_mode(),
        listbox.search_buffer()
    );
    for state in listbox.render_states() {
        println!(
            "{} {} {}{}",
            if state.is_active { "▶" } else { " " },
            if state.is_selected { "[x]" } else { "[ ]" },
            state.label,
            if state.is_disabled { " (disabled)" } else { "" },
        );
    }

    let selected: Vec<&str> = listbox.selected_keys().iter().map(ItemKey::as_str).collect();
    println!("selected: {selected:?}");

    ok!()
}

fn script_token_to_key_events(token: &str) -> Vec<KeyEvent> {
    let named = |code: KeyCode| vec![KeyEvent::new(code, KeyModifiers::NONE)];
    match token {
        "up" => named(KeyCode::Up),
        "down" => named(KeyCode::Down),
        "home" => named(KeyCode::Home),
        "end" => named(KeyCode::End),
        "pgup" => named(KeyCode::PageUp),
        "pgdn" => named(KeyCode::PageDown),
        "enter" => named(KeyCode::Enter),
        "space" => named(KeyCode::Char(' ')),
        "esc" => named(KeyCode::Esc),
        "tab" => named(KeyCode::Tab),
        _ => token
            .chars()
            .map(|it| {
                let modifiers = if it.is_uppercase() {
                    KeyModifiers::SHIFT
                } else {
                    KeyModifiers::NONE
                };
                KeyEvent::new(KeyCode::Char(it), modifiers)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from_args(args: &[&str]) -> ListboxConfig {
        let cli = Cli::try_parse_from(std::iter::once("listbox_demo").chain(args.iter().copied()))
            .unwrap();
        listbox_config(&cli).unwrap()
    }

    #[test]
    fn test_json_config_is_kept_without_flags() {
        let config = config_from_args(&[
            "--config-json",
            r#"{"selection_mode":"multiple","allow_empty":false}"#,
        ]);
        assert_eq!(config.selection_mode, SelectionMode::Multiple);
        assert!(!config.allow_empty);
    }

    #[test]
    fn test_flags_override_json_config() {
        let config = config_from_args(&[
            "--config-json",
            r#"{"selection_mode":"multiple","allow_empty":false}"#,
            "--mode",
            "none",
            "--allow-empty",
            "true",
        ]);
        assert_eq!(config.selection_mode, SelectionMode::None);
        assert!(config.allow_empty);
    }

    #[test]
    fn test_defaults_without_json_or_flags() {
        let config = config_from_args(&[]);
        assert_eq!(config.selection_mode, SelectionMode::Single);
        assert!(config.allow_empty);
    }
}
