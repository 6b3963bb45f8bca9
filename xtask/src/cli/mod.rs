//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    /// `icons <subcommand>`: icon data generation and auditing.
    Icons(Vec<String>),
    /// Usage text.
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "icons" => Ok(TopLevelCommand::Icons(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))
        .with_hint("run `cargo xtask help` for the command list")),
    }
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           icons generate [--check]  Rebuild icon data from public SVG assets\n\
           icons audit               Cross-check icon data, asset files and icon names\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()).expect("parse"), TopLevelCommand::Help);
    }

    #[test]
    fn icons_forwards_remaining_args() {
        assert_eq!(
            parse(vec!["icons".into(), "generate".into(), "--check".into()]).expect("parse"),
            TopLevelCommand::Icons(vec!["generate".into(), "--check".into()])
        );
    }

    #[test]
    fn unknown_commands_are_validation_errors() {
        let err = parse(vec!["deploy".into()]).expect_err("unknown");
        assert!(err.to_string().starts_with("unknown xtask command: deploy"));
    }
}
