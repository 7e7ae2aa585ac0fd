//! Prompt command handler.
//!
//! Shows exactly what a build would send, which is useful when tuning
//! driver inputs without spending a model call.

use autodriver_core::{BuildRequest, Settings, build_prompt};

use crate::commands::InputArgs;
use crate::error::CliError;
use crate::handlers::input::to_update;

/// Assemble the request the workbench would build from these arguments.
pub fn request_for(args: &InputArgs, settings: &Settings) -> Result<BuildRequest, CliError> {
    let mut request =
        BuildRequest::sample().with_extra_flags(settings.effective_extra_flags());
    to_update(args)?.apply_to(&mut request);
    Ok(request)
}

/// Print the prompt for the given inputs.
pub fn execute(args: &InputArgs, settings: &Settings) -> Result<(), CliError> {
    let request = request_for(args, settings)?;
    println!("{}", build_prompt(&request));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodriver_core::{KernelVersion, TargetArch};

    #[test]
    fn test_defaults_use_sample_and_settings_flags() {
        let settings = Settings {
            default_extra_flags: Some("-O2 -g".to_string()),
            ..Settings::with_defaults()
        };
        let request = request_for(&InputArgs::default(), &settings).unwrap();

        assert_eq!(request.extra_flags, "-O2 -g");
        assert_eq!(request.sdk_header, BuildRequest::sample().sdk_header);
        assert!(build_prompt(&request).contains("-O2 -g"));
    }

    #[test]
    fn test_cli_targets_override_defaults() {
        let args = InputArgs {
            arch: Some("arm64".to_string()),
            kernel: Some("latest".to_string()),
            flags: Some("-Wextra".to_string()),
            ..Default::default()
        };
        let request = request_for(&args, &Settings::with_defaults()).unwrap();

        assert_eq!(request.arch, TargetArch::Arm64);
        assert_eq!(request.kernel, KernelVersion::Latest);
        assert_eq!(request.extra_flags, "-Wextra");
    }
}
