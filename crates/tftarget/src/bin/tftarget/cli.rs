//! tftarget cli interface

use clap::Parser;

/// Run a terraform action restricted to the blocks declared in the given files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Declaration files to target, comma separated
    ///
    /// Names are relative to the terraform/ directory, e.g. `s3.tf,network.tf`
    #[arg(long = "tf-files")]
    pub tf_files: String,

    /// Terraform action, e.g. plan, apply or destroy
    #[arg(long)]
    pub action: String,

    /// Target environment
    ///
    /// Selects config/<env>.tfvars
    #[arg(long)]
    pub env: String,

    /// Target environment id
    #[arg(long = "env-id")]
    pub env_id: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn all_flags_required() {
        let args = ["tftarget", "--tf-files", "a.tf", "--action", "plan", "--env", "dev"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
