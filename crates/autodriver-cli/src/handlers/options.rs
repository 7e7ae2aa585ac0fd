//! Options command handler.

use autodriver_gui::WorkbenchOptions;

use crate::presentation::print_separator;
use crate::presentation::tables::option_line;

/// Print the selectable architectures and kernels, marking the defaults.
pub fn execute(options: &WorkbenchOptions) {
    println!("Target architectures:");
    print_separator(32);
    for entry in &options.architectures {
        let is_default = entry.value == options.default_arch.as_str();
        println!("{}", option_line(entry, is_default));
    }

    println!();
    println!("Kernel versions:");
    print_separator(32);
    for entry in &options.kernels {
        let is_default = entry.value == options.default_kernel.as_str();
        println!("{}", option_line(entry, is_default));
    }

    println!();
    println!("Default extra flags: {}", options.default_extra_flags);
}
