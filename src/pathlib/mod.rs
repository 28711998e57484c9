use std::fmt;
use std::ops::Div;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

/// A path value. Purely lexical: nothing on this type touches the
/// filesystem, so derived paths can be computed for files that do not
/// exist yet.
#[derive(Clone, Debug, Default, Hash, Ord, PartialOrd, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilePath {
    buf: PathBuf,
}

impl FilePath {
    pub fn new() -> FilePath {
        FilePath {
            buf: PathBuf::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buf.components().count() == 0
    }

    /// Returns the path of the directory containing `self`.
    ///
    /// The empty path is returned for a bare filename, so joining onto the
    /// result never introduces a leading separator.
    pub fn parent(&self) -> FilePath {
        match self.buf.parent() {
            Some(p) => FilePath {
                buf: p.to_path_buf(),
            },
            None => FilePath::new(),
        }
    }

    /// Creates an owned [`FilePath`] like `self` but with the extension
    /// replaced. An empty extension strips the final one, if any; a file
    /// name without an embedded `.` is left untouched by stripping.
    pub fn with_extension<S: AsRef<str>>(&self, ext: S) -> FilePath {
        FilePath {
            buf: self.buf.with_extension(ext.as_ref()),
        }
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.buf.display())
    }
}

impl<T: Into<PathBuf>> From<T> for FilePath {
    fn from(s: T) -> FilePath {
        FilePath { buf: s.into() }
    }
}

impl FromStr for FilePath {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<FilePath, &'static str> {
        Ok(FilePath { buf: s.into() })
    }
}

impl<T: AsRef<Path>> Div<T> for FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> Self::Output {
        FilePath {
            buf: self.buf.join(rhs),
        }
    }
}

impl<'a, T: AsRef<Path>> Div<T> for &'a FilePath {
    type Output = FilePath;

    fn div(self, rhs: T) -> Self::Output {
        FilePath {
            buf: self.buf.join(rhs),
        }
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.buf.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_nested_path() {
        assert_eq!(FilePath::from("src/app.emoji").parent(), "src".into());
    }

    #[test]
    fn parent_of_bare_filename_is_empty() {
        let parent = FilePath::from("app.emoji").parent();
        assert!(parent.is_empty());
        assert_eq!(parent / "interface.emojii", "interface.emojii".into());
    }

    #[test]
    fn with_extension_replaces_and_strips() {
        let main = FilePath::from("src/app.emoji");
        assert_eq!(main.with_extension("o"), "src/app.o".into());
        assert_eq!(main.with_extension(""), "src/app".into());
        assert_eq!(FilePath::from("app").with_extension(""), "app".into());
    }

    #[test]
    fn div_joins_components() {
        let dir = FilePath::from("src");
        assert_eq!(&dir / "libx.a", "src/libx.a".into());
        assert_eq!(dir / "a" / "b", "src/a/b".into());
    }
}
