use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

/// A trait to abstract over settings access.
///
/// Settings are string-valued and keyed by name, such as the keys in
/// [`keys`](crate::keys). This trait only requires the implementation of one
/// method and provides typed accessors on top of it. Implementations exist
/// for the process environment ([`Env`]) as well as for hash and b-tree maps.
pub trait Settings {
    /// Try reading the setting as a string.
    fn read(&self, key: &str) -> Option<String>;

    /// Determine whether the setting is defined.
    fn is_defined(&self, key: &str) -> bool {
        self.read(key).is_some()
    }

    /// Try reading and parsing the setting.
    ///
    /// This method returns `None` if the setting is not defined and the
    /// parse result otherwise. Leading and trailing whitespace is ignored.
    fn read_parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.read(key).map(|value| value.trim().parse())
    }

    /// Try reading the setting as a flag.
    ///
    /// Flags are `1`/`0` or `true`/`false`, ignoring case. For any other value,
    /// this method returns the value as error.
    fn read_flag(&self, key: &str) -> Option<Result<bool, String>> {
        self.read(key).map(|value| {
            let trimmed = value.trim();
            if trimmed == "1" || trimmed.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if trimmed == "0" || trimmed.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(value)
            }
        })
    }
}

/// The process environment as settings.
///
/// Keys are upper-cased before lookup, so that `monet_engine_chroma_factor`
/// reads the environment variable `MONET_ENGINE_CHROMA_FACTOR`.
#[derive(Debug, Default)]
pub struct Env();

impl Settings for Env {
    fn read(&self, key: &str) -> Option<String> {
        std::env::var(key.to_ascii_uppercase()).ok()
    }
}

impl<S: std::hash::BuildHasher> Settings for HashMap<String, String, S> {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Settings for BTreeMap<String, String> {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}


#[cfg(test)]
pub(crate) use test::FakeSettings;
