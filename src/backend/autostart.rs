use std::path::Path;

use auto_launch::{AutoLaunch, AutoLaunchBuilder};

use crate::error::ClipdeckError;

const APP_NAME: &str = "clipdeck";

/// Login-item control the backend drives from `set_config`.
pub trait AutostartPort: Send {
    fn is_enabled(&self) -> Result<bool, ClipdeckError>;

    fn enable(&self) -> Result<(), ClipdeckError>;

    /// Succeeds when no entry exists.
    fn disable(&self) -> Result<(), ClipdeckError>;

    fn set_enabled(&self, enabled: bool) -> Result<(), ClipdeckError> {
        if enabled {
            self.enable()
        } else {
            self.disable()
        }
    }
}

/// Platform login item for the clipdeck executable.
///
/// XDG autostart entry on Linux, LaunchAgent on macOS, `Run` registry
/// value on Windows.
pub struct Autostart {
    launcher: AutoLaunch,
}

impl Autostart {
    pub fn new(exe: &Path) -> Result<Self, ClipdeckError> {
        let app_path = exe
            .to_str()
            .ok_or_else(|| ClipdeckError::NonUtf8Path(exe.to_path_buf()))?;

        let mut builder = AutoLaunchBuilder::new();
        builder.set_app_name(APP_NAME).set_app_path(app_path);
        #[cfg(target_os = "macos")]
        builder.set_use_launch_agent(true);

        Ok(Self {
            launcher: builder.build()?,
        })
    }

    /// Entry for the running executable, or `None` when it cannot be built.
    pub fn for_current_exe() -> Option<Self> {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                log::warn!("autostart unavailable, no executable path: {}", e);
                return None;
            }
        };

        match Self::new(&exe) {
            Ok(autostart) => Some(autostart),
            Err(e) => {
                log::warn!("autostart unavailable for {:?}: {}", exe, e);
                None
            }
        }
    }

    pub fn app_name(&self) -> &str {
        self.launcher.get_app_name()
    }

    pub fn app_path(&self) -> &str {
        self.launcher.get_app_path()
    }
}

impl AutostartPort for Autostart {
    fn is_enabled(&self) -> Result<bool, ClipdeckError> {
        Ok(self.launcher.is_enabled()?)
    }

    fn enable(&self) -> Result<(), ClipdeckError> {
        self.launcher.enable()?;
        log::info!("autostart enabled for {}", self.app_path());
        Ok(())
    }

    fn disable(&self) -> Result<(), ClipdeckError> {
        if self.launcher.is_enabled()? {
            self.launcher.disable()?;
            log::info!("autostart disabled for {}", self.app_path());
        }
        Ok(())
    }
}
