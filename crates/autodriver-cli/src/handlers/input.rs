//! Turn `--sdk/--driver/--arch/--kernel/--flags` into an input update.

use std::path::Path;

use autodriver_core::{KernelVersion, TargetArch};
use autodriver_gui::InputUpdate;

use crate::commands::InputArgs;
use crate::error::CliError;

/// Read source files and parse target selectors.
///
/// Fields the user did not pass stay `None`, so the workbench keeps its
/// defaults for them.
pub fn to_update(args: &InputArgs) -> Result<InputUpdate, CliError> {
    Ok(InputUpdate {
        sdk_header: args.sdk.as_deref().map(read_source).transpose()?,
        driver_source: args.driver.as_deref().map(read_source).transpose()?,
        arch: args
            .arch
            .as_deref()
            .map(str::parse::<TargetArch>)
            .transpose()?,
        kernel: args
            .kernel
            .as_deref()
            .map(str::parse::<KernelVersion>)
            .transpose()?,
        extra_flags: args.flags.clone(),
    })
}

fn read_source(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::io(path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_args_yield_empty_update() {
        let update = to_update(&InputArgs::default()).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_reads_files_and_parses_targets() {
        let mut sdk = tempfile::NamedTempFile::new().unwrap();
        write!(sdk, "#define SDK_VERSION 2").unwrap();
        let mut driver = tempfile::NamedTempFile::new().unwrap();
        write!(driver, "int init_module(void) {{ return 0; }}").unwrap();

        let args = InputArgs {
            sdk: Some(sdk.path().to_path_buf()),
            driver: Some(driver.path().to_path_buf()),
            arch: Some("riscv".to_string()),
            kernel: Some("5.15".to_string()),
            flags: Some("-O2".to_string()),
        };
        let update = to_update(&args).unwrap();

        assert_eq!(update.sdk_header.as_deref(), Some("#define SDK_VERSION 2"));
        assert!(update.driver_source.unwrap().contains("init_module"));
        assert_eq!(update.arch, Some(TargetArch::Riscv));
        assert_eq!(update.kernel, Some(KernelVersion::V5_15));
        assert_eq!(update.extra_flags.as_deref(), Some("-O2"));
    }

    #[test]
    fn test_missing_file_is_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.c");
        let args = InputArgs {
            driver: Some(missing.clone()),
            ..Default::default()
        };

        let err = to_update(&args).unwrap_err();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("nope.c"));
    }

    #[test]
    fn test_unknown_arch_is_argument_error() {
        let args = InputArgs {
            arch: Some("mips".to_string()),
            ..Default::default()
        };
        assert_eq!(to_update(&args).unwrap_err().exit_code(), 2);
    }
}
