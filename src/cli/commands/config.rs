use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_config_file, migrate_config_file};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (run `plantlog init`)",
                    path.display()
                ));
            } else {
                let missing = check_config_file(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `plantlog config --migrate` to add them with default values.");
                }
                cfg.validate()?;
            }
        }

        if *migrate {
            if path.exists() {
                migrate_config_file(&path)?;
            } else {
                warning(format!("No configuration file at {}", path.display()));
            }
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        )),
                        _ => error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
