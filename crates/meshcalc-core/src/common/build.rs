use std::fmt::{Display, Formatter};

/// Build identity baked in at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStamp {
    pub version: &'static str,
    pub commit: &'static str,
    pub build_date: &'static str,
}

impl BuildStamp {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: match option_env!("MESHCALC_GIT_COMMIT") {
                Some(commit) => commit,
                None => "dev",
            },
            build_date: match option_env!("MESHCALC_BUILD_DATE") {
                Some(date) => date,
                None => "unknown",
            },
        }
    }

    pub fn is_dev(&self) -> bool {
        self.commit == "dev"
    }
}

impl Display for BuildStamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_dev() {
            return write!(f, "{} (development build)", self.version);
        }
        write!(
            f,
            "{} (build {}, {})",
            self.version, self.commit, self.build_date
        )
    }
}
