// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use rust_i18n::t;
use std::{env, path::PathBuf};

use crate::commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    let config_arg = Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .default_value("Site.toml")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set);
    let site_dir_arg = Arg::new("site-dir")
        .long("site-dir")
        .help(t!("arg_site_dir", locale = locale).to_string())
        .value_name("SITE_DIR")
        .default_value(".")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set);

    Command::new("runtoweb3")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("build")
                .about(t!("cmd_build_about", locale = locale).to_string())
                .arg(config_arg.clone())
                .arg(site_dir_arg.clone())
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .help(t!("arg_out_dir", locale = locale).to_string())
                        .value_name("OUT_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("check")
                .about(t!("cmd_check_about", locale = locale).to_string())
                .arg(config_arg.clone())
                .arg(site_dir_arg.clone()),
        )
        .subcommand(
            Command::new("search")
                .about(t!("cmd_search_about", locale = locale).to_string())
                .arg(config_arg)
                .arg(site_dir_arg)
                .arg(
                    Arg::new("locale")
                        .short('l')
                        .long("locale")
                        .help(t!("arg_locale", locale = locale).to_string())
                        .value_name("LOCALE")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("query")
                        .help(t!("arg_query", locale = locale).to_string())
                        .value_name("QUERY")
                        .required(true)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help("Create the site skeleton without launching the interactive wizard.")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = crate::resolve_ui_locale(&pre_parse_language());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("build", build_matches)) => {
            let config = build_matches
                .get_one::<PathBuf>("config")
                .unwrap() // Has default
                .clone();
            let site_dir = build_matches
                .get_one::<PathBuf>("site-dir")
                .unwrap() // Has default
                .clone();
            let out = build_matches.get_one::<PathBuf>("out").cloned();

            commands::build::execute(config, site_dir, out, &language).await?;
        }
        Some(("check", check_matches)) => {
            let config = check_matches.get_one::<PathBuf>("config").unwrap().clone();
            let site_dir = check_matches
                .get_one::<PathBuf>("site-dir")
                .unwrap()
                .clone();

            commands::check::execute(config, site_dir, &language).await?;
        }
        Some(("search", search_matches)) => {
            let config = search_matches.get_one::<PathBuf>("config").unwrap().clone();
            let site_dir = search_matches
                .get_one::<PathBuf>("site-dir")
                .unwrap()
                .clone();
            let locale = search_matches.get_one::<String>("locale").cloned();
            let query = search_matches.get_one::<String>("query").unwrap().clone();

            commands::search::execute(config, site_dir, locale, &query, &language).await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if env::args().all(|arg| arg != "--lang") {
                println!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
