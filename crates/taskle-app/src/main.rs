//! Command-line entry point.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use taskle_app::{AppResult, Script, ShortcutRegistry, Whiteboard, run_script};
use taskle_core::WhiteboardConfig;

/// Taskle project whiteboard.
#[derive(Parser, Debug)]
#[command(name = "taskle-whiteboard", version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Print the keyboard shortcuts and exit.
    #[arg(long)]
    help_keys: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Replay a JSON input script headlessly, writing exports to a directory.
    Replay {
        /// Script file (`{"events":[...]}`).
        #[arg(index = 1)]
        script: PathBuf,

        /// Directory that receives exported PNGs.
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Whiteboard configuration (JSON).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Open the native drawing window.
    Window {
        /// Whiteboard configuration (JSON).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<PathBuf>) -> AppResult<WhiteboardConfig> {
    match path {
        Some(path) => Ok(WhiteboardConfig::load(path)?),
        None => Ok(WhiteboardConfig::default()),
    }
}

fn run(cli: Cli) -> AppResult<()> {
    if cli.help_keys {
        ShortcutRegistry::print_all();
        return Ok(());
    }

    match cli.command {
        Some(Command::Replay { script, out, config }) => {
            let config = load_config(config)?;
            let script = Script::load(&script)?;
            std::fs::create_dir_all(&out)?;

            let mut board: Whiteboard = Whiteboard::new(config);
            board.mount()?;
            let summary = run_script(&mut board, &script, &out)?;
            for path in &summary.exports {
                println!("{}", path.display());
            }
            Ok(())
        }
        Some(Command::Window { config }) => run_window(load_config(config)?),
        None => Ok(()),
    }
}

#[cfg(feature = "window")]
fn run_window(config: WhiteboardConfig) -> AppResult<()> {
    taskle_app::run_window(config)
}

#[cfg(not(feature = "window"))]
fn run_window(_config: WhiteboardConfig) -> AppResult<()> {
    Err(taskle_app::AppError::Window("built without the `window` feature".to_string()))
}

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Taskle whiteboard");

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("taskle-whiteboard").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        assert_eq!(
            parse(&["replay", "s.json", "--out", "dist"]).unwrap().command,
            Some(Command::Replay {
                script: PathBuf::from("s.json"),
                out: PathBuf::from("dist"),
                config: None,
            })
        );
        assert_eq!(
            parse(&["replay", "--config", "c.json", "s.json"]).unwrap().command,
            Some(Command::Replay {
                script: PathBuf::from("s.json"),
                out: PathBuf::from("."),
                config: Some(PathBuf::from("c.json")),
            })
        );
    }

    #[test]
    fn test_parse_other_commands() {
        let cli = parse(&["--help-keys"]).unwrap();
        assert!(cli.help_keys);
        assert_eq!(cli.command, None);
        assert_eq!(parse(&["window"]).unwrap().command, Some(Command::Window { config: None }));
    }

    #[test]
    fn test_parse_usage_errors() {
        for args in [
            &[][..],
            &["replay"][..],
            &["replay", "a.json", "b.json"][..],
            &["replay", "a.json", "--out"][..],
            &["replay", "a.json", "--verbose"][..],
            &["window", "--out", "dist"][..],
            &["draw"][..],
        ] {
            assert!(parse(args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn test_replay_command_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script.json");
        std::fs::write(
            &script,
            r#"{"events":[
                {"type":"pointer_down","x":10,"y":10},
                {"type":"pointer_move","x":200,"y":10},
                {"type":"pointer_up"},
                {"type":"export"}
            ]}"#,
        )
        .unwrap();
        let out = dir.path().join("out");

        let cli = parse(&[
            "replay",
            script.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
        ])
        .unwrap();
        run(cli).unwrap();
        assert!(out.join("whiteboard.png").exists());
    }
}
