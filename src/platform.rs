use crate::error::{Error, Result};
use nix::sys::utsname::uname;
use tracing::debug;

pub const SUPPORTED_SYSTEM: &str = "SunOS";

/// Kernel identification as reported by uname(2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub system: String,
    pub release: String,
}

impl PlatformInfo {
    pub fn current() -> Result<Self> {
        let uts = uname().map_err(std::io::Error::from)?;
        let info = PlatformInfo {
            system: uts.sysname().to_string_lossy().into_owned(),
            release: uts.release().to_string_lossy().into_owned(),
        };
        debug!(system = %info.system, release = %info.release, "detected platform");
        Ok(info)
    }

    /// Fails unless this is a SunOS kernel of exactly `required_release`.
    pub fn ensure_supported(&self, required_release: &str) -> Result<()> {
        if self.system != SUPPORTED_SYSTEM {
            return Err(Error::UnsupportedPlatform {
                system: self.system.clone(),
            });
        }
        if self.release != required_release {
            return Err(Error::UnsupportedRelease {
                release: self.release.clone(),
                required: required_release.to_string(),
            });
        }
        Ok(())
    }
}
