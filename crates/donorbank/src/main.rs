//! `donors` - CLI for donorbank
//!
//! This binary is the presentation layer over the donor registry: it turns
//! command-line arguments into form input, calls the registry, saves the
//! donor file after changes and prints the result.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use donorbank::cli::{
    output, Cli, Command, ConfigCommand, DeleteCommand, ListCommand, RegisterCommand,
    SearchCommand, UpdateCommand,
};
use donorbank::config::OutputFormat;
use donorbank::form::{self, RegistrationForm, UpdateForm};
use donorbank::{init_logging, Config, Donor, LoadOutcome, Registry, Storage};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone())?;
    if let Some(path) = cli.data_file {
        config.storage.data_file = Some(path);
    }

    let storage = Storage::new(config.data_file());
    let mut registry = Registry::new();

    let changed = match cli.command {
        Command::Config(cmd) => return handle_config(&config, cmd),
        Command::Register(cmd) => handle_register(load_registry(&mut registry, &storage), cmd)?,
        Command::Search(cmd) => handle_search(load_registry(&mut registry, &storage), &cmd, &config)?,
        Command::List(cmd) => handle_list(load_registry(&mut registry, &storage), &cmd, &config)?,
        Command::Update(cmd) => handle_update(load_registry(&mut registry, &storage), cmd)?,
        Command::Delete(cmd) => handle_delete(load_registry(&mut registry, &storage), &cmd)?,
    };

    if changed && config.registry.autosave {
        registry.save(&storage).with_context(|| {
            format!("failed to save donors to {}", storage.path().display())
        })?;
    }
    Ok(())
}

/// Reads the donor file into `registry`; config commands never get here.
fn load_registry<'a>(registry: &'a mut Registry, storage: &Storage) -> &'a mut Registry {
    if let LoadOutcome::Reset { reason } = registry.load(storage) {
        eprintln!("Warning: starting with an empty donor list ({reason})");
    }
    registry
}

fn handle_register(registry: &mut Registry, cmd: RegisterCommand) -> anyhow::Result<bool> {
    let new = RegistrationForm::from(cmd).validate()?;
    let name = new.name.clone();
    registry.register(new)?;
    println!("Donor {name} registered successfully!");
    Ok(true)
}

fn handle_search(
    registry: &Registry,
    cmd: &SearchCommand,
    config: &Config,
) -> anyhow::Result<bool> {
    let results = registry.search(&cmd.blood_type, &cmd.location);
    let format = cmd.format.unwrap_or(config.output.format);
    if results.is_empty() && format != OutputFormat::Json {
        println!("No matching donors found.");
    } else {
        print!("{}", output::render(&results, format)?);
        if format == OutputFormat::Json {
            println!();
        }
    }
    Ok(false)
}

fn handle_list(registry: &Registry, cmd: &ListCommand, config: &Config) -> anyhow::Result<bool> {
    let donors: Vec<&Donor> = registry.list().iter().collect();
    let format = cmd.format.unwrap_or(config.output.format);
    if donors.is_empty() && format != OutputFormat::Json {
        println!("No donors registered.");
    } else {
        print!("{}", output::render(&donors, format)?);
        if format == OutputFormat::Json {
            println!();
        }
    }
    Ok(false)
}

fn handle_update(registry: &mut Registry, cmd: UpdateCommand) -> anyhow::Result<bool> {
    let (contact, update) = UpdateForm::from(cmd).validate()?;
    registry.update(&contact, update)?;
    println!("Donor information updated successfully.");
    Ok(true)
}

fn handle_delete(registry: &mut Registry, cmd: &DeleteCommand) -> anyhow::Result<bool> {
    let contact = form::delete_contact(&cmd.contact)?;
    let removed = registry.delete(contact)?;
    println!("Donor {} removed successfully.", removed.name);
    Ok(true)
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data file:          {}", config.data_file().display());
                println!();
                println!("[Registry]");
                println!("  Autosave:           {}", config.registry.autosave);
                println!();
                println!("[Output]");
                println!("  Format:             {:?}", config.output.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
