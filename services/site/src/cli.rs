use crate::demo::{run_demo, DemoArgs};
use crate::export::{run_export, ExportArgs};
use crate::server;
use crate::widgets::{run_widgets, WidgetsArgs};
use clap::{Args, Parser, Subcommand};
use skillkwiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SkillKwiz",
    about = "Serve the SkillKwiz content API or walk through its flows from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Walk a scripted session through sign-in, registration, and scheduling
    Demo(DemoArgs),
    /// Write a blog article to a PDF file
    Export(ExportArgs),
    /// Run the animated home page widgets on the configured timers
    Widgets(WidgetsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Export(args) => run_export(args),
        Command::Widgets(args) => run_widgets(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillkwiz::flows::Role;

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["skillkwiz-site"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn demo_accepts_role_and_invalid_flag() {
        let cli = Cli::try_parse_from(["skillkwiz-site", "demo", "--role", "employer", "--invalid"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.role, Role::Employer);
                assert!(args.invalid);
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }

    #[test]
    fn unknown_roles_are_rejected() {
        let result = Cli::try_parse_from(["skillkwiz-site", "demo", "--role", "admin"]);
        assert!(result.is_err());
    }

    #[test]
    fn export_requires_a_title() {
        assert!(Cli::try_parse_from(["skillkwiz-site", "export"]).is_err());
        let cli = Cli::try_parse_from(["skillkwiz-site", "export", "--title", "Unknown"])
            .expect("parses");
        match cli.command {
            Some(Command::Export(args)) => {
                assert_eq!(args.title, "Unknown");
                assert!(args.out_dir.is_none());
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn widgets_takes_duration_and_frame_period() {
        let cli = Cli::try_parse_from(["skillkwiz-site", "widgets", "--duration-ms", "3000"])
            .expect("parses");
        match cli.command {
            Some(Command::Widgets(args)) => {
                assert_eq!(args.duration_ms, 3000);
                assert_eq!(args.frame_ms, 1000);
            }
            other => panic!("expected widgets command, got {other:?}"),
        }
        assert!(Cli::try_parse_from(["skillkwiz-site", "widgets", "--frame-ms", "0"]).is_err());
    }
}
