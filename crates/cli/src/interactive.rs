//! Prompt resolution.
//!
//! Every question is answered here, before the generator or cleaner runs.
//! Flags pre-answer their prompt; `--no-input` takes every default, so
//! scripted invocations never block on a terminal.

use console::style;
use inquire::{Confirm, InquireError, Text};
use modkit_codegen::MakeOptions;
use modkit_core::{parse_columns, ScaffoldError};

fn prompt_failed(err: InquireError) -> ScaffoldError {
    ScaffoldError::validation(format!("Prompt failed: {}", err))
}

pub fn resolve_make_options(
    columns: Option<&str>,
    no_migration: bool,
    seed: bool,
    no_input: bool,
) -> Result<MakeOptions, ScaffoldError> {
    let migration = if no_migration {
        false
    } else if columns.is_some() || no_input {
        true
    } else {
        Confirm::new("Do you want to create a migration?")
            .with_default(true)
            .prompt()
            .map_err(prompt_failed)?
    };

    let columns = if !migration {
        Vec::new()
    } else {
        match columns {
            Some(raw) => parse_columns(raw),
            None if no_input => Vec::new(),
            None => {
                let raw = Text::new("Columns (leave empty for none):")
                    .with_placeholder("title:string, content:text, published_at:datetime")
                    .prompt()
                    .map_err(prompt_failed)?;
                parse_columns(&raw)
            }
        }
    };

    let seeder = if seed {
        true
    } else if no_input {
        false
    } else {
        Confirm::new("Do you want to create a seeder?")
            .with_default(false)
            .prompt()
            .map_err(prompt_failed)?
    };

    Ok(MakeOptions {
        migration,
        columns,
        seeder,
    })
}

pub fn ask_module_name() -> Result<String, ScaffoldError> {
    Text::new("Module to delete (e.g. Post):")
        .prompt()
        .map_err(prompt_failed)
}

pub fn confirm_delete(name: &str) -> Result<bool, ScaffoldError> {
    println!(
        "{}",
        style(format!(
            "⚠️  This permanently removes module '{}', its migrations and its seeder.",
            name
        ))
        .yellow()
    );
    Confirm::new("Are you sure?")
        .with_default(false)
        .prompt()
        .map_err(prompt_failed)
}
