//! Target architecture and kernel version selections.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ports::CoreError;

/// CPU architecture the driver is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetArch {
    #[default]
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "arm64")]
    Arm64,
    #[serde(rename = "riscv")]
    Riscv,
}

impl TargetArch {
    /// All selectable architectures, in selector order.
    pub const ALL: [Self; 3] = [Self::X86_64, Self::Arm64, Self::Riscv];

    /// Wire and display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Arm64 => "arm64",
            Self::Riscv => "riscv",
        }
    }

    /// Parse an architecture name.
    ///
    /// Accepts the wire names plus the common aliases `amd64`, `aarch64`
    /// and `riscv64`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "x86-64" | "amd64" => Some(Self::X86_64),
            "arm64" | "aarch64" => Some(Self::Arm64),
            "riscv" | "riscv64" => Some(Self::Riscv),
            _ => None,
        }
    }
}

impl std::fmt::Display for TargetArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetArch {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "unknown architecture '{s}' (expected one of: x86_64, arm64, riscv)"
            ))
        })
    }
}

/// Kernel release the driver targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KernelVersion {
    #[serde(rename = "5.15 LTS")]
    V5_15,
    #[serde(rename = "6.1 LTS")]
    V6_1,
    #[default]
    #[serde(rename = "6.6 LTS")]
    V6_6,
    #[serde(rename = "Latest Stable")]
    Latest,
}

impl KernelVersion {
    /// All selectable kernel versions, in selector order.
    pub const ALL: [Self; 4] = [Self::V5_15, Self::V6_1, Self::V6_6, Self::Latest];

    /// Wire name, e.g. `6.6 LTS`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V5_15 => "5.15 LTS",
            Self::V6_1 => "6.1 LTS",
            Self::V6_6 => "6.6 LTS",
            Self::Latest => "Latest Stable",
        }
    }

    /// Label shown in selectors, e.g. `Linux 6.6 LTS`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Linux {}", self.as_str())
    }

    /// Parse a kernel version.
    ///
    /// Accepts the wire names (`6.6 LTS`), bare versions (`6.6`) and
    /// `latest`, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized
            .strip_prefix("linux ")
            .unwrap_or(&normalized)
            .trim_end_matches(" lts");
        match normalized {
            "5.15" => Some(Self::V5_15),
            "6.1" => Some(Self::V6_1),
            "6.6" => Some(Self::V6_6),
            "latest" | "latest stable" | "stable" => Some(Self::Latest),
            _ => None,
        }
    }
}

impl std::fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "unknown kernel version '{s}' (expected one of: 5.15, 6.1, 6.6, latest)"
            ))
        })
    }
}
