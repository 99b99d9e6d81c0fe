use std::fmt;

use serde::de::Error as _;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use crate::error::{Error, Result};

static MAX_PATH_BYTES: usize = 4096; // Bytes

/// A `Path` is the ordered list of keys walked from the root of a value tree
/// down to some nested node.
///
/// Components are plain strings. When a component meets an array during a
/// lookup it is parsed as an index, so `path!("users", 0, "name")` walks into
/// the first element of `users`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}", self))
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Path, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;

        Path::parse(&s).map_err(D::Error::custom)
    }
}

/// Build a [`Path`] from a list of components.
///
/// Each argument is converted with `ToString`, so keys and indices can be
/// mixed. Unlike [`Path::parse`], no splitting on `/` happens here.
///
/// ```rust
/// use plainval::{path, Path};
///
/// assert_eq!(path!("users", 0, "name"), Path::parse("users/0/name").unwrap());
/// assert!(path!().is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::default()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::Path::from_components(vec![$(($component).to_string()),+])
    };
}

impl Path {
    /// Parse a slash separated path string.
    ///
    /// Empty components are dropped, so `"a//b/"` and `"a/b"` are the same
    /// path and `""` is the empty path.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Ok(Path { components: vec![] });
        }

        Self::validate_path_length(path)?;

        Ok(Path {
            components: path
                .split('/')
                .filter(|c| !c.is_empty())
                .map(std::borrow::ToOwned::to_owned)
                .collect::<Vec<String>>(),
        })
    }

    pub fn from_components(components: Vec<String>) -> Self {
        Path { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.components.iter()
    }

    /// The final component, which names the node the path points at.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    #[must_use]
    pub fn join(&self, suffix: &Path) -> Path {
        let mut new_path = self.components.clone();
        new_path.extend_from_slice(&suffix.components);

        Path {
            components: new_path,
        }
    }

    pub fn validate_path_length(path_string: &str) -> Result<()> {
        if path_string.len() <= MAX_PATH_BYTES {
            Ok(())
        } else {
            Err(Error::PathInvalid {
                path: path_string.chars().take(64).collect(),
                message: format!("Path length exceeds max of {} bytes", MAX_PATH_BYTES),
            })
        }
    }
}

impl<S: ToString> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            components: iter.into_iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for Path {
    fn from(components: Vec<String>) -> Self {
        Path { components }
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}
