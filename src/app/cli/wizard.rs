//! Interactive parameter collection.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::api::{self, RenderOptions};
use crate::domain::{AppError, CUSTOM_PRESET, GeneratorConfig, PathSelection, Preset};

const KEEP_OPEN_ITEMS: [&str; 2] = ["Laisser Outlook ouvert", "Fermer après envoi"];
const CUSTOM_PATH_ITEM: &str = "Chemin personnalisé";
const BODY_TERMINATOR: &str = ".";

pub(super) fn run_wizard(config: Option<&Path>, output: Option<&Path>) -> Result<(), AppError> {
    let defaults = api::load_config(config)?;
    let Some(options) = prompt_options(&defaults)? else {
        return Ok(());
    };

    let outcome = api::render(config, options)?;
    super::emit_script(&outcome.script, output)
}

fn prompt_options(defaults: &GeneratorConfig) -> Result<Option<RenderOptions>, AppError> {
    let Some(recipient) = prompt_text("Destinataire", &defaults.message.recipient)? else {
        return Ok(None);
    };
    let Some(subject) = prompt_text("Objet", &defaults.message.subject)? else {
        return Ok(None);
    };
    let Some(body) = prompt_body(&defaults.message.body)? else {
        return Ok(None);
    };
    let Some(delay) = prompt_delay(defaults.outlook.startup_delay_seconds)? else {
        return Ok(None);
    };
    let Some(keep_open) = prompt_keep_open(defaults.outlook.keep_open)? else {
        return Ok(None);
    };
    let Some(path_selection) = prompt_path(defaults)? else {
        return Ok(None);
    };

    Ok(Some(RenderOptions {
        recipient: Some(recipient),
        subject: Some(subject),
        body: Some(body),
        startup_delay_seconds: Some(delay),
        keep_open: Some(keep_open),
        path_selection: Some(path_selection),
    }))
}

fn interrupted<T>(err: DialoguerError, what: &str) -> Result<Option<T>, AppError> {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => Ok(None),
        err => Err(AppError::Validation(format!("Failed to read {}: {}", what, err))),
    }
}

fn prompt_text(prompt: &str, default: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).default(default.to_string()).interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(err) => interrupted(err, prompt),
    }
}

fn prompt_body(default: &str) -> Result<Option<String>, AppError> {
    let keep_default = match Confirm::new()
        .with_prompt("Conserver le message actuel ?")
        .default(true)
        .interact_opt()
    {
        Ok(Some(value)) => value,
        Ok(None) => return Ok(None),
        Err(err) => return interrupted(err, "message"),
    };
    if keep_default {
        return Ok(Some(default.to_string()));
    }

    println!("Message : saisissez une ligne à la fois, terminez par « {} » seul.", BODY_TERMINATOR);
    let mut lines = Vec::new();
    loop {
        let line = match Input::<String>::new().allow_empty(true).interact_text() {
            Ok(line) => line,
            Err(err) => return interrupted(err, "message"),
        };
        if line == BODY_TERMINATOR {
            break;
        }
        lines.push(line);
    }
    Ok(Some(lines.join("\n")))
}

fn prompt_delay(default: f64) -> Result<Option<f64>, AppError> {
    match Input::<f64>::new()
        .with_prompt("Attente après le lancement (secondes)")
        .default(default)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(err) => interrupted(err, "delay"),
    }
}

fn prompt_keep_open(default: bool) -> Result<Option<bool>, AppError> {
    match Select::new()
        .with_prompt("Gestion d'Outlook")
        .items(&KEEP_OPEN_ITEMS)
        .default(if default { 0 } else { 1 })
        .interact_opt()
    {
        Ok(selection) => Ok(selection.map(|index| index == 0)),
        Err(err) => interrupted(err, "Outlook behavior"),
    }
}

fn prompt_path(defaults: &GeneratorConfig) -> Result<Option<PathSelection>, AppError> {
    let table = defaults.preset_table();
    let presets: Vec<&Preset> = table.iter().collect();
    let mut items: Vec<&str> = presets.iter().map(|preset| preset.label.as_str()).collect();
    items.push(CUSTOM_PATH_ITEM);

    let selection = match Select::new()
        .with_prompt("Chemin d'Outlook")
        .items(&items)
        .default(default_path_index(&presets, &defaults.outlook.preset))
        .interact_opt()
    {
        Ok(selection) => selection,
        Err(err) => return interrupted(err, "Outlook path"),
    };

    match selection {
        None => Ok(None),
        Some(index) => match preset_at(&presets, index) {
            Some(selection) => Ok(Some(selection)),
            None => Ok(prompt_text("Chemin complet", &defaults.outlook.custom_path)?
                .map(PathSelection::custom)),
        },
    }
}

/// Menu index preselected for `selected`: the custom item for `custom`,
/// the first preset when the key is unknown.
fn default_path_index(presets: &[&Preset], selected: &str) -> usize {
    if selected == CUSTOM_PRESET {
        return presets.len();
    }
    presets.iter().position(|preset| preset.key == selected).unwrap_or(0)
}

/// Preset chosen at `index`, or `None` for the trailing custom item.
fn preset_at(presets: &[&Preset], index: usize) -> Option<PathSelection> {
    presets.get(index).map(|preset| PathSelection::preset(preset.key.clone()))
}
