use std::fmt;
use std::str::FromStr;

use crate::error::ClipdeckError;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Clipboard history list
    #[default]
    Root,
    About,
    Prefs,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::About => "/about",
            Route::Prefs => "/prefs",
        }
    }
}

impl FromStr for Route {
    type Err = ClipdeckError;

    /// Accepts paths with or without the leading and trailing slash.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path.trim().trim_matches('/') {
            "" => Ok(Route::Root),
            "about" => Ok(Route::About),
            "prefs" => Ok(Route::Prefs),
            _ => Err(ClipdeckError::UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
