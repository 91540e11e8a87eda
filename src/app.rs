use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::core::{resolve, survey};
use crate::engine::Engine;
use crate::error::AppError;
use crate::host::{DryRunSink, LocalHost, RenameSink, TerminalProvider, TitleSink};
use crate::logger::{CATEGORY_ALL, DiagLogger, LogCategory, LogLevel, LoggerConfig};
use crate::output::{ProbeReport, output_probe_json, print_probe_table};
use crate::watch;

pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let mut logger = DiagLogger::new(LoggerConfig::default());
    logger.set_level(cli.effective_level());
    if let Some(categories) = &cli.log_categories {
        logger.set_categories(categories);
    }
    logger.debug(
        LogCategory::Startup,
        &format!(
            "diagnostics: level {}, categories {}",
            logger.level(),
            logger.categories().join(", ")
        ),
    );

    match &cli.command {
        None | Some(Commands::Rename) => handle_rename(&cli, &logger),
        Some(Commands::Probe) => handle_probe(&cli, &logger),
        Some(Commands::Watch) => handle_watch(&cli, &mut logger),
        Some(Commands::SetLevel { level }) => handle_set_level(level.as_deref()),
        Some(Commands::SetCategories { categories }) => handle_set_categories(categories),
        Some(Commands::FilterTip) => {
            logger.show_filter_tip();
            Ok(())
        }
    }
}

fn sink_for(cli: &Cli) -> Box<dyn RenameSink> {
    if cli.dry_run {
        Box::new(DryRunSink)
    } else {
        Box::new(TitleSink)
    }
}

fn handle_rename(cli: &Cli, logger: &DiagLogger) -> Result<(), AppError> {
    let host = LocalHost::detect(cli.overrides());
    let sink = sink_for(cli);
    let engine = Engine {
        strategy: cli.strategy(),
        terminal: &host,
        editor: &host,
        workspace: &host,
        process: &host,
        sink: sink.as_ref(),
    };
    match engine.rename_to_dir(logger) {
        Ok(result) => {
            if !cli.dry_run {
                println!("Renamed terminal to \"{}\" ({})", result.folder, result.source);
            }
            Ok(())
        }
        // resolution failures are non-fatal; the engine already logged them
        Err(_) => Ok(()),
    }
}

fn handle_probe(cli: &Cli, logger: &DiagLogger) -> Result<(), AppError> {
    let host = LocalHost::detect(cli.overrides());
    let engine = Engine {
        strategy: cli.strategy(),
        terminal: &host,
        editor: &host,
        workspace: &host,
        process: &host,
        sink: &DryRunSink,
    };
    logger.info(LogCategory::Probe, "evaluating all candidate sources");
    let ctx = engine.capture(logger);

    let candidates = survey(cli.strategy(), &ctx);
    let selected = resolve(cli.strategy(), &ctx);
    let report = ProbeReport {
        strategy: cli.strategy(),
        candidates: &candidates,
        selected: selected.as_ref(),
        terminal_name: host.active_name(),
        terminal_pid: host.process_id(),
    };
    if cli.json {
        output_probe_json(&report);
    } else {
        print_probe_table(&report);
    }
    Ok(())
}

fn handle_watch(cli: &Cli, logger: &mut DiagLogger) -> Result<(), AppError> {
    let host = LocalHost::detect(cli.overrides());
    let sink = sink_for(cli);
    watch::run(
        host,
        cli.strategy(),
        cli.debounce_window(),
        logger,
        sink.as_ref(),
    );
    Ok(())
}

fn handle_set_level(level: Option<&str>) -> Result<(), AppError> {
    let mut config = Config::load_quiet();
    let level = match level {
        Some(name) => LogLevel::parse(name)?,
        None => {
            let current = config
                .log_level
                .as_deref()
                .and_then(|n| LogLevel::parse(n).ok())
                .unwrap_or_default();
            prompt_level(current)?
        }
    };
    config.log_level = Some(level.label().to_string());
    let path = config.save()?;
    println!("Log level set to {level} in {}", path.display());
    Ok(())
}

fn prompt_level(current: LogLevel) -> Result<LogLevel, AppError> {
    let items: Vec<&str> = LogLevel::ALL.iter().map(|l| l.label()).collect();
    let default = LogLevel::ALL.iter().position(|l| *l == current).unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Diagnostic level")
        .items(&items)
        .default(default)
        .interact()?;
    Ok(LogLevel::ALL[choice])
}

fn handle_set_categories(categories: &[String]) -> Result<(), AppError> {
    let mut config = Config::load_quiet();
    let names: Vec<String> = if categories.is_empty() {
        prompt_categories(&config)?
    } else {
        categories
            .iter()
            .flat_map(|c| c.split(','))
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect()
    };
    // an empty pick would mute everything; keep the current filter instead
    if names.is_empty() {
        println!("Log categories unchanged");
        return Ok(());
    }
    config.log_categories = Some(names.clone());
    let path = config.save()?;
    println!(
        "Log categories set to {} in {}",
        names.join(", "),
        path.display()
    );
    Ok(())
}

fn prompt_categories(config: &Config) -> Result<Vec<String>, AppError> {
    let mut items = vec![CATEGORY_ALL.to_string()];
    items.extend(LogCategory::KNOWN.iter().map(|c| c.as_str().to_string()));
    let current = config
        .log_categories
        .clone()
        .unwrap_or_else(|| vec![CATEGORY_ALL.to_string()]);
    let defaults: Vec<bool> = items.iter().map(|i| current.contains(i)).collect();

    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Diagnostic categories")
        .items(&items)
        .defaults(&defaults)
        .interact()?;
    Ok(chosen.into_iter().map(|i| items[i].clone()).collect())
}
