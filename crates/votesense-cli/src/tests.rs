use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["votesense"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_config_show_command() {
    let cli =
        Cli::try_parse_from(["votesense", "config", "show"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    ));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["votesense", "approve", "3"]).is_err());
}
