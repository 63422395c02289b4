use clap::Parser;

/// Reconstruct `cloudhealth_perspective` config blocks from a Terraform
/// state file. Output is a best-effort approximation of the original HCL
/// and needs manual review before use.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a Terraform state file; reads standard input when omitted
    /// or '-'
    #[arg(value_name = "STATE_FILE")]
    pub state_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_state_file_from_positional() {
        let cli = Cli::parse_from(["chtcfg", "terraform.tfstate"]);
        assert_eq!(cli.state_file, Some("terraform.tfstate".to_string()));
    }

    #[test]
    fn test_state_file_absent_means_stdin() {
        let cli = Cli::parse_from(["chtcfg"]);
        assert!(cli.state_file.is_none());
    }

    #[test]
    fn test_state_file_dash_is_kept_verbatim() {
        let cli = Cli::parse_from(["chtcfg", "-"]);
        assert_eq!(cli.state_file, Some("-".to_string()));
    }

    #[test]
    fn test_rejects_extra_positionals() {
        let result = Cli::try_parse_from(["chtcfg", "a.tfstate", "b.tfstate"]);
        assert!(result.is_err());
    }
}
