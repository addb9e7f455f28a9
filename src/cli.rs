//! Command line surface: exactly one action flag per invocation.

use std::str::FromStr;

use clap::error::ErrorKind;
use clap::Parser;
use clip_app::Action;

pub const USAGE: &str = "clipper [c|C|v|P|x]";

/// Exit status for a missing or unknown action.
pub const USAGE_EXIT_CODE: u8 = 1;

#[derive(Debug, Parser)]
#[command(
    name = "clipper",
    version,
    about = "Clipboard history with an interactive chooser",
    override_usage = USAGE,
    after_help = "Actions:\n  c  copy the selection, then record the clipboard\n  C  record the clipboard as is\n  v  paste the most recent entry\n  P  choose an entry to paste\n  x  delete the history"
)]
pub struct Cli {
    /// Action flag (case-sensitive)
    #[arg(value_name = "ACTION", value_parser = Action::from_str)]
    pub action: Action,
}

/// Exit status for a failed parse. Help and version requests are not errors.
pub fn exit_code_for(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("clipper").chain(args.iter().copied()))
    }

    #[test]
    fn every_flag_maps_to_its_action() {
        let cases = [
            ("c", Action::CaptureWithEmission),
            ("C", Action::CaptureOnly),
            ("v", Action::PasteLast),
            ("P", Action::PasteSelect),
            ("x", Action::Clear),
        ];
        for (flag, action) in cases {
            assert_eq!(parse(&[flag]).unwrap().action, action);
        }
    }

    #[test]
    fn missing_action_is_a_usage_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(exit_code_for(&err), USAGE_EXIT_CODE);
    }

    #[test]
    fn unknown_or_extra_arguments_are_usage_errors() {
        for args in [&["q"][..], &["V"], &["cv"], &["c", "v"], &["-c"]] {
            let err = parse(args).unwrap_err();
            assert_eq!(exit_code_for(&err), USAGE_EXIT_CODE, "{args:?}");
        }
    }

    #[test]
    fn help_exits_successfully() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(exit_code_for(&err), 0);
        assert!(err.to_string().contains(USAGE));
    }
}
