//! Reporting of the host's SIMD support, memory and graphics adapter.

use std::{fmt, process::Command};
use sysinfo::System;

/// Information about the machine the library runs on. Purely diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostInfo {
    /// The SIMD instruction set the vector types were compiled for.
    pub simd_backend: &'static str,
    /// SIMD-related CPU features detected at runtime.
    pub cpu_features: Vec<&'static str>,
    /// Total installed memory in megabytes, if it could be determined.
    pub memory_mb: Option<u64>,
    /// Name of the first graphics adapter found, if any.
    pub graphics_adapter: Option<String>,
}

impl HostInfo {
    /// Probes the host. Anything that cannot be determined is left out of the
    /// report and logged at debug level.
    pub fn gather() -> Self {
        Self {
            simd_backend: compiled_simd_backend(),
            cpu_features: detect_cpu_features(),
            memory_mb: orbit_log::with_trace_logging!("Reading installed memory"; {
                installed_memory_mb()
            }),
            graphics_adapter: orbit_log::with_trace_logging!("Querying graphics adapter"; {
                graphics_adapter()
            }),
        }
    }
}

impl fmt::Display for HostInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SIMD backend: {}", self.simd_backend)?;
        if self.cpu_features.is_empty() {
            writeln!(f, "CPU features: none detected")?;
        } else {
            writeln!(f, "CPU features: {}", self.cpu_features.join(", "))?;
        }
        match self.memory_mb {
            Some(memory_mb) => writeln!(f, "Installed memory: {memory_mb} MB")?,
            None => writeln!(f, "Installed memory: unknown")?,
        }
        match &self.graphics_adapter {
            Some(adapter) => write!(f, "Graphics adapter: {adapter}"),
            None => write!(f, "Graphics adapter: unknown"),
        }
    }
}

fn compiled_simd_backend() -> &'static str {
    if cfg!(target_feature = "sse2") {
        "SSE2"
    } else if cfg!(all(target_arch = "aarch64", target_feature = "neon")) {
        "NEON"
    } else if cfg!(all(target_arch = "wasm32", target_feature = "simd128")) {
        "WASM SIMD128"
    } else {
        "scalar"
    }
}

#[allow(unused_mut)]
fn detect_cpu_features() -> Vec<&'static str> {
    let mut features = Vec::new();

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        macro_rules! push_detected {
            ($($feature:tt),*) => {
                $(
                    if std::arch::is_x86_feature_detected!($feature) {
                        features.push($feature);
                    }
                )*
            };
        }
        push_detected!(
            "sse", "sse2", "sse3", "ssse3", "sse4.1", "sse4.2", "avx", "avx2", "fma"
        );
    }

    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            features.push("neon");
        }
    }

    features
}

fn installed_memory_mb() -> Option<u64> {
    let mut system = System::new();
    system.refresh_memory();
    let memory_mb = bytes_to_mb(system.total_memory());
    if memory_mb.is_none() {
        orbit_log::debug!("Total memory is not reported on this platform");
    }
    memory_mb
}

/// Zero bytes means the platform reported nothing.
fn bytes_to_mb(bytes: u64) -> Option<u64> {
    (bytes > 0).then_some(bytes / (1024 * 1024))
}

fn graphics_adapter() -> Option<String> {
    match Command::new("lspci").output() {
        Ok(output) if output.status.success() => {
            let adapter = find_graphics_adapter(&String::from_utf8_lossy(&output.stdout));
            if adapter.is_none() {
                orbit_log::debug!("No graphics adapter listed by lspci");
            }
            adapter
        }
        Ok(output) => {
            orbit_log::debug!("lspci exited with {}", output.status);
            None
        }
        Err(error) => {
            orbit_log::debug!("Could not run lspci: {error}");
            None
        }
    }
}

/// Finds the first display device in `lspci` output and returns its
/// description without the bus address and device class.
fn find_graphics_adapter(lspci_output: &str) -> Option<String> {
    lspci_output
        .lines()
        .find(|line| {
            line.contains("VGA compatible controller")
                || line.contains("3D controller")
                || line.contains("Display controller")
        })
        .map(|line| match line.split_once(": ") {
            Some((_, description)) => description.trim().to_string(),
            None => line.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSPCI: &str = "\
00:00.0 Host bridge: Intel Corporation 8th Gen Core Processor Host Bridge
00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 630
01:00.0 3D controller: NVIDIA Corporation TU117M
";

    #[test]
    fn memory_bytes_are_converted_to_megabytes() {
        assert_eq!(bytes_to_mb(16_695_717_888), Some(15922));
        assert_eq!(bytes_to_mb(1024 * 1024), Some(1));
    }

    #[test]
    fn unreported_memory_gives_none() {
        assert_eq!(bytes_to_mb(0), None);
    }

    #[test]
    fn first_graphics_adapter_is_found() {
        assert_eq!(
            find_graphics_adapter(LSPCI).as_deref(),
            Some("Intel Corporation UHD Graphics 630")
        );
    }

    #[test]
    fn non_display_devices_are_ignored() {
        let output = "00:00.0 Host bridge: Intel Corporation Host Bridge\n";
        assert_eq!(find_graphics_adapter(output), None);
        assert_eq!(
            find_graphics_adapter("02:00.0 Display controller: Some GPU\n").as_deref(),
            Some("Some GPU")
        );
    }

    #[test]
    fn report_lists_every_entry() {
        let info = HostInfo {
            simd_backend: "SSE2",
            cpu_features: vec!["sse", "sse2"],
            memory_mb: Some(2048),
            graphics_adapter: None,
        };
        assert_eq!(
            info.to_string(),
            "SIMD backend: SSE2\n\
             CPU features: sse, sse2\n\
             Installed memory: 2048 MB\n\
             Graphics adapter: unknown"
        );
    }

    #[test]
    fn report_without_features_says_so() {
        let info = HostInfo {
            simd_backend: "scalar",
            cpu_features: Vec::new(),
            memory_mb: None,
            graphics_adapter: Some("GPU".to_string()),
        };
        let report = info.to_string();
        assert!(report.contains("CPU features: none detected"));
        assert!(report.contains("Installed memory: unknown"));
        assert!(report.ends_with("Graphics adapter: GPU"));
    }

    #[test]
    fn gathering_host_info_succeeds() {
        let info = HostInfo::gather();
        assert!(!info.simd_backend.is_empty());
        if sysinfo::IS_SUPPORTED_SYSTEM {
            assert!(info.memory_mb.is_some_and(|memory_mb| memory_mb > 0));
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn sse2_is_always_detected_on_x86_64() {
        assert_eq!(compiled_simd_backend(), "SSE2");
        assert!(detect_cpu_features().contains(&"sse2"));
    }
}
