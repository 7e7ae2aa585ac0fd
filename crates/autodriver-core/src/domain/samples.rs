//! Sample inputs pre-filled into the workbench editors.

/// Compiler flags used when the user does not supply any.
pub const DEFAULT_EXTRA_FLAGS: &str = "-Wall -Werror";

/// Example vendor SDK header.
pub const DEFAULT_SDK_HEADER: &str = r"// example_sdk.h
#ifndef EXAMPLE_SDK_H
#define EXAMPLE_SDK_H

struct sdk_device_t {
    int id;
    void *regs;
    void (*interrupt_handler)(void*);
};

int sdk_register_device(struct sdk_device_t *dev);
void sdk_write_reg(struct sdk_device_t *dev, int reg, int val);

#endif";

/// Example kernel module written against [`DEFAULT_SDK_HEADER`].
///
/// The register pointer is deliberately left unset so the analysis has
/// something to report.
pub const DEFAULT_DRIVER_SOURCE: &str = r#"#include <linux/module.h>
#include <linux/kernel.h>
#include <linux/init.h>
#include "example_sdk.h"

static struct sdk_device_t my_dev;

static int __init my_driver_init(void) {
    printk(KERN_INFO "Loading My Driver\n");
    // Potential Bug: Uninitialized pointer usage often simulated here
    // my_dev.regs = NULL;
    sdk_register_device(&my_dev);
    return 0;
}

static void __exit my_driver_exit(void) {
    printk(KERN_INFO "Unloading My Driver\n");
}

module_init(my_driver_init);
module_exit(my_driver_exit);
MODULE_LICENSE("GPL");"#;
