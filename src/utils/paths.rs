use crate::utils::error::MaliceError;
use std::str::FromStr;

/// Separator convention used by [`path_join`], independent of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    #[default]
    Unix,
    Windows,
}

impl PathStyle {
    pub fn separator(self) -> char {
        match self {
            PathStyle::Unix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Unix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }
}

impl FromStr for PathStyle {
    type Err = MaliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unix" => Ok(PathStyle::Unix),
            "windows" => Ok(PathStyle::Windows),
            other => Err(MaliceError::InvalidArgumentError {
                name: "path_style".to_string(),
                reason: format!("unknown os type {:?}", other),
            }),
        }
    }
}

/// Joins path segments for a target system rather than the local one.
///
/// Redundant separators at each join boundary are dropped, so
/// `path_join(PathStyle::Unix, "/a/", &["/b/", "c"])` gives `/a/b/c`.
pub fn path_join<S: AsRef<str>>(style: PathStyle, first: &str, rest: &[S]) -> String {
    let is_sep = |c: char| style.is_separator(c);
    let mut result = first.trim_end_matches(is_sep).to_string();
    for segment in rest {
        result.push(style.separator());
        result.push_str(segment.as_ref().trim_matches(is_sep));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_join() {
        assert_eq!(path_join(PathStyle::Unix, "/a/", &["/b/", "c"]), "/a/b/c");
        assert_eq!(path_join(PathStyle::Unix, "srv", &["data"]), "srv/data");
        assert_eq!(path_join::<&str>(PathStyle::Unix, "/opt/", &[]), "/opt");
    }

    #[test]
    fn test_windows_join() {
        assert_eq!(
            path_join(PathStyle::Windows, "C:\\a\\", &["\\b\\", "c"]),
            "C:\\a\\b\\c"
        );
        assert_eq!(path_join(PathStyle::Windows, "\\a\\", &["/b/", "c"]), "\\a\\b\\c");
    }

    #[test]
    fn test_path_style_from_str() {
        assert_eq!("unix".parse::<PathStyle>().unwrap(), PathStyle::Unix);
        assert_eq!("Windows".parse::<PathStyle>().unwrap(), PathStyle::Windows);
        assert!("amiga".parse::<PathStyle>().is_err());
    }
}
