//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run one build: generate a Makefile, simulate compilation, analyze and fix
    Build(BuildArgs),

    /// Serve the browser workbench
    Web {
        /// Port to listen on
        #[arg(short, long, env = "AUTODRIVER_PORT")]
        port: Option<u16>,
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Restrict API CORS to this origin (repeatable; default allows any)
        #[arg(long = "allow-origin", value_name = "ORIGIN")]
        allow_origins: Vec<String>,
    },

    /// List target architectures and kernel versions
    Options,

    /// Print the response schema sent with every build
    Schema,

    /// Print the prompt a build would send, without sending it
    Prompt(InputArgs),
}

/// Driver inputs and target selection shared by `build` and `prompt`.
///
/// Omitted source files fall back to the built-in sample SDK header and
/// driver.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// SDK header / definitions file
    #[arg(long, value_name = "FILE")]
    pub sdk: Option<PathBuf>,

    /// Driver source file (.c)
    #[arg(long, value_name = "FILE")]
    pub driver: Option<PathBuf>,

    /// Target architecture (x86_64, arm64, riscv)
    #[arg(short, long)]
    pub arch: Option<String>,

    /// Kernel version (5.15, 6.1, 6.6, latest)
    #[arg(short, long)]
    pub kernel: Option<String>,

    /// Extra compiler flags
    #[arg(long, allow_hyphen_values = true)]
    pub flags: Option<String>,
}

/// Arguments for `autodriver build`.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the generated Makefile here
    #[arg(long, value_name = "FILE")]
    pub makefile_out: Option<PathBuf>,

    /// Write the corrected driver source here, if fixes were proposed
    #[arg(long, value_name = "FILE")]
    pub fixed_out: Option<PathBuf>,

    /// Print the build result as JSON instead of panels
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use crate::commands::Commands;
    use clap::Parser;

    #[test]
    fn test_build_args() {
        let cli = Cli::parse_from([
            "autodriver",
            "build",
            "--sdk",
            "sdk.h",
            "--driver",
            "drv.c",
            "--arch",
            "arm64",
            "--kernel",
            "6.1",
            "--flags",
            "-Wall -O2",
            "--makefile-out",
            "Makefile",
            "--json",
        ]);

        let Some(Commands::Build(args)) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.input.sdk.unwrap().to_str(), Some("sdk.h"));
        assert_eq!(args.input.arch.as_deref(), Some("arm64"));
        assert_eq!(args.input.kernel.as_deref(), Some("6.1"));
        assert_eq!(args.input.flags.as_deref(), Some("-Wall -O2"));
        assert!(args.makefile_out.is_some());
        assert!(args.fixed_out.is_none());
        assert!(args.json);
    }

    #[test]
    fn test_web_defaults() {
        let cli = Cli::parse_from(["autodriver", "web", "--port", "9000"]);
        let Some(Commands::Web {
            port,
            host,
            allow_origins,
        }) = cli.command
        else {
            panic!("expected web command");
        };
        assert_eq!(port, Some(9000));
        assert_eq!(host, "127.0.0.1");
        assert!(allow_origins.is_empty());
    }

    #[test]
    fn test_web_allow_origin_repeats() {
        let cli = Cli::parse_from([
            "autodriver",
            "web",
            "--allow-origin",
            "http://localhost:5173",
            "--allow-origin",
            "https://lab.example",
        ]);
        let Some(Commands::Web { allow_origins, .. }) = cli.command else {
            panic!("expected web command");
        };
        assert_eq!(allow_origins, ["http://localhost:5173", "https://lab.example"]);
    }

    #[test]
    fn test_prompt_without_files() {
        let cli = Cli::parse_from(["autodriver", "prompt", "-a", "riscv"]);
        let Some(Commands::Prompt(input)) = cli.command else {
            panic!("expected prompt command");
        };
        assert!(input.sdk.is_none());
        assert_eq!(input.arch.as_deref(), Some("riscv"));
    }
}
