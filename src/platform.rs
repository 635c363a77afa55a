//! # Platform information
//!
//! Informazioni sulla piattaforma corrente, usate nel banner di avvio
//! (`<<< jpeger 0.3.0 linux/x86_64 >>>`).

/// System information structure
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
}

impl SystemInfo {
    /// Get system information for the running binary
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            family: std::env::consts::FAMILY,
        }
    }
}

impl std::fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info() {
        let info = SystemInfo::current();
        assert!(!info.os.is_empty());
        assert!(!info.arch.is_empty());
        assert!(!info.family.is_empty());
    }

    #[test]
    fn test_system_info_display() {
        let info = SystemInfo {
            os: "linux",
            arch: "x86_64",
            family: "unix",
        };
        assert_eq!(info.to_string(), "linux/x86_64");
    }
}
