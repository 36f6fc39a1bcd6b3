use billtrace_core::commands;
use billtrace_core::{CoreResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> CoreResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Process {
            input,
            output,
            json: _,
        } => commands::process::run(input, output),
        Commands::Bills { input, json: _ } => commands::bills::run(input),
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    use super::dispatch;

    #[test]
    fn missing_input_surfaces_the_core_error() {
        let parsed = parse_from(["billtrace", "bills", "definitely-missing.csv"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let result = dispatch(&cli);
            assert!(result.is_err());
            if let Err(error) = result {
                assert_eq!(error.code, "input_file_unreadable");
            }
        }
    }

    #[test]
    fn process_dispatch_reports_the_process_command() {
        let temp = tempfile::tempdir();
        assert!(temp.is_ok());
        let Ok(dir) = temp else {
            return;
        };

        let input = dir.path().join("in.csv");
        let header = "externalId,createdAt,type,amount,date,description,category,counterParty,tag,accountExternalId,location\n";
        assert!(std::fs::write(&input, header).is_ok());

        let output = dir.path().join("out.csv");
        let parsed = parse_from([
            "billtrace",
            "process",
            &input.display().to_string(),
            &output.display().to_string(),
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            let result = dispatch(&cli);
            assert!(result.is_ok());
            if let Ok(success) = result {
                assert_eq!(success.command, "process");
            }
        }
    }
}
