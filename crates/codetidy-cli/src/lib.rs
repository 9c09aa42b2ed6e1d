//! Argument handling and start-up shared by the codetidy binaries.

use codetidy_config::Config;
use codetidy_engine::io;
use std::path::{Path, PathBuf};
use std::{env, process};

/// Log to stderr at `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

pub fn program_name(args: &[String], fallback: &str) -> String {
    args.first().cloned().unwrap_or_else(|| fallback.to_string())
}

/// Directory a walk tool starts from.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectDir {
    pub path: PathBuf,
    pub from_config: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    /// More than one operand.
    Usage,
    /// No operand and no config file.
    NoConfigFile,
    /// No operand and the config file has no `project_path`.
    NoProjectPath,
}

/// An explicit argument wins; otherwise fall back to the config file.
pub fn resolve_project_dir(
    args: &[String],
    config: Option<&Config>,
) -> Result<ProjectDir, ArgsError> {
    match args.len() {
        2 => Ok(ProjectDir {
            path: PathBuf::from(&args[1]),
            from_config: false,
        }),
        0 | 1 => {
            let config = config.ok_or(ArgsError::NoConfigFile)?;
            let path = config
                .project_path
                .clone()
                .ok_or(ArgsError::NoProjectPath)?;
            Ok(ProjectDir {
                path,
                from_config: true,
            })
        }
        _ => Err(ArgsError::Usage),
    }
}

/// Entry point for the tools that rewrite a project tree in place.
///
/// Resolves the project directory from the arguments or the config file,
/// reports usage problems, then hands over to `run`. Any error from `run` is
/// printed and the process exits with status 1.
pub fn walk_tool_main<F>(default_name: &str, run: F)
where
    F: FnOnce(&Path, &Config) -> anyhow::Result<()>,
{
    init_logging();

    let args: Vec<String> = env::args().collect();
    let program = program_name(&args, default_name);
    let config_path = Config::config_path();

    let loaded = match Config::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let project_dir = match resolve_project_dir(&args, loaded.as_ref()) {
        Ok(project_dir) => project_dir,
        Err(ArgsError::Usage) => {
            eprintln!("Usage: {program} [project-dir]");
            process::exit(1);
        }
        Err(ArgsError::NoConfigFile) => {
            eprintln!("Error: No project path provided and no config file found");
            eprintln!("Usage: {program} <project-dir>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(ArgsError::NoProjectPath) => {
            eprintln!(
                "Error: No project path provided and none set in {}",
                config_path.display()
            );
            eprintln!("Usage: {program} <project-dir>");
            process::exit(1);
        }
    };
    log::info!("Using project directory {}", project_dir.path.display());

    if let Err(e) = io::validate_project_dir(&project_dir.path) {
        let source = if project_dir.from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Project path '{}'{} is invalid: {e}",
            project_dir.path.display(),
            source
        );
        process::exit(1);
    }

    let config = loaded.unwrap_or_default();
    if let Err(e) = run(&project_dir.path, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
