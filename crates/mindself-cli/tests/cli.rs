use clap::Parser;

use mindself_cli::cli::{Cli, Commands};
use mindself_instruments::scoring::ScaleCategory;

#[test]
fn log_json_is_off_by_default() {
    let cli = Cli::try_parse_from(["mindself", "stats"]).unwrap();
    assert!(!cli.log_json);
    assert!(matches!(cli.command, Commands::Stats));
}

#[test]
fn log_json_is_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from(["mindself", "history", "--log-json", "--scale", "phq9"]).unwrap();
    assert!(cli.log_json);
    match cli.command {
        Commands::History { scale } => assert_eq!(scale.as_deref(), Some("phq9")),
        other => panic!("expected history, got {other:?}"),
    }
}

#[test]
fn score_needs_answers() {
    assert!(Cli::try_parse_from(["mindself", "score", "phq9"]).is_err());

    let cli = Cli::try_parse_from(["mindself", "score", "gad7", "1", "2", "--dry-run"]).unwrap();
    match cli.command {
        Commands::Score {
            scale_id,
            answers,
            dry_run,
        } => {
            assert_eq!(scale_id, "gad7");
            assert_eq!(answers, [1, 2]);
            assert!(dry_run);
        }
        other => panic!("expected score, got {other:?}"),
    }
}

#[test]
fn category_is_parsed_by_id() {
    let cli = Cli::try_parse_from(["mindself", "list", "--category", "self_esteem"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::List {
            category: Some(ScaleCategory::SelfEsteem)
        }
    ));
    assert!(Cli::try_parse_from(["mindself", "list", "--category", "happiness"]).is_err());
}
