//! Instruction text sent to the model for a build.

use crate::domain::BuildRequest;

/// Build the natural-language instruction for a request.
///
/// Both code bodies are embedded verbatim; the output shape is enforced
/// separately through [`crate::schema::response_schema`].
pub fn build_prompt(request: &BuildRequest) -> String {
    format!(
        "\
You are a Senior Embedded Linux Kernel Engineer and Compiler Expert.

TASK:
Analyze the provided SDK Header/Code and Driver Source Code.
1. Generate a robust, production-ready 'Makefile' for the target architecture and kernel.
2. Perform a deep static analysis of the C code for common kernel panics, race conditions, memory leaks, or API misuse.
3. Simulate the GCC/Clang compilation process output (stdout/stderr).
4. If there are errors, fix them in an 'optimizedSource' version.

CONTEXT:
Target Arch: {arch}
Kernel Version: {kernel}
Extra Flags: {flags}

SDK/HEADER CODE:
{sdk}

DRIVER SOURCE CODE:
{driver}

OUTPUT FORMAT:
Return a pure JSON object adhering to this schema.
",
        arch = request.arch,
        kernel = request.kernel,
        flags = request.extra_flags,
        sdk = request.sdk_header,
        driver = request.driver_source,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{KernelVersion, TargetArch};

    #[test]
    fn test_prompt_embeds_context() {
        let request = BuildRequest::new("struct a;", "int main;")
            .with_arch(TargetArch::Riscv)
            .with_kernel(KernelVersion::V5_15)
            .with_extra_flags("-O2 -DDEBUG");
        let prompt = build_prompt(&request);

        assert!(prompt.contains("Target Arch: riscv"));
        assert!(prompt.contains("Kernel Version: 5.15 LTS"));
        assert!(prompt.contains("Extra Flags: -O2 -DDEBUG"));
    }

    #[test]
    fn test_prompt_embeds_sources_verbatim() {
        let header = "#define REG(x) ((x) << 2)\n  // indented {braces}";
        let source = "static int {weird} = 0;\n\treturn -EINVAL;";
        let prompt = build_prompt(&BuildRequest::new(header, source));

        assert!(prompt.contains(&format!("SDK/HEADER CODE:\n{header}\n")));
        assert!(prompt.contains(&format!("DRIVER SOURCE CODE:\n{source}\n")));
    }

    #[test]
    fn test_prompt_lists_all_four_tasks() {
        let prompt = build_prompt(&BuildRequest::sample());
        for step in ["1. Generate", "2. Perform", "3. Simulate", "4. If there are errors"] {
            assert!(prompt.contains(step), "missing task: {step}");
        }
        assert!(prompt.find("SDK/HEADER CODE").unwrap() < prompt.find("DRIVER SOURCE CODE").unwrap());
    }
}
