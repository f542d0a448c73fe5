use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use lecture_core::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "lecsimp",
    version,
    about = "Simplify, summarize or rework academic text through a text-processing service"
)]
pub struct Cli {
    /// RON config file (defaults to ./lecsimp.ron when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the processing service.
    #[arg(long, env = "LECSIMP_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Directory that exported .txt files are written to.
    #[arg(long, global = true)]
    pub export_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process one piece of text and print the result.
    Process(ProcessArgs),
    /// Line-oriented session with notes, copy and save.
    Interactive(InteractiveArgs),
    /// List the available modes.
    Modes,
    /// Check that the processing service is reachable.
    Ping,
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Transformation mode (e.g. simplify, bullet, eli5).
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Text to process; stdin is read when neither --text nor --file is given.
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Plain-text (.txt) file to process.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Also save the result to the export directory.
    #[arg(long)]
    pub save: bool,

    /// File name for the saved result (implies --save).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Copy the result to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Mode to start in.
    #[arg(short, long)]
    pub mode: Option<Mode>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use lecture_core::Mode;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn process_flags_parse() {
        let cli = Cli::try_parse_from([
            "lecsimp", "-v", "process", "--mode", "eli5", "--text", "Atoms", "-o", "atoms",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Process(args) => {
                assert_eq!(args.mode, Some(Mode::ExplainLikeIm5));
                assert_eq!(args.text.as_deref(), Some("Atoms"));
                assert_eq!(args.output.as_deref(), Some("atoms"));
                assert!(!args.copy);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn text_and_file_conflict() {
        let err = Cli::try_parse_from([
            "lecsimp", "process", "--text", "a", "--file", "b.txt",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["lecsimp", "process", "--mode", "rhyme"]).is_err());
    }
}
