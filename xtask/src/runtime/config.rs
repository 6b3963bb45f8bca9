//! TOML configuration files under `tools/`.

use crate::runtime::error::{XtaskError, XtaskResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Reads one workspace-relative TOML file into `T`.
///
/// Only reading and deserialization happen here; command modules validate the loaded value.
///
/// ```rust
/// # use serde::Deserialize;
/// # use std::path::Path;
/// # use xtask::runtime::config::ConfigLoader;
/// #[derive(Default, Deserialize)]
/// struct Styles {
///     styles: Vec<String>,
/// }
///
/// let loader = ConfigLoader::<Styles>::new(Path::new("/workspace"), "tools/icons.toml");
/// assert!(loader.path().ends_with("tools/icons.toml"));
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Loader for `root/relative_path`.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    fn read(&self) -> Result<String, std::io::Error> {
        fs::read_to_string(&self.path)
    }

    fn parse(&self, body: &str) -> XtaskResult<T> {
        toml::from_str(body).map_err(|err| {
            XtaskError::config(format!("invalid TOML: {err}")).with_path(&self.path)
        })
    }

    /// Reads and parses the file; a missing file is a config error.
    pub fn load(&self) -> XtaskResult<T> {
        let body = self.read().map_err(|err| {
            XtaskError::config(format!("cannot read config: {err}")).with_path(&self.path)
        })?;
        self.parse(&body)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields `T::default()`.
    pub fn load_or_default(&self) -> XtaskResult<T>
    where
        T: Default,
    {
        match self.read() {
            Ok(body) => self.parse(&body),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(err) => Err(
                XtaskError::config(format!("cannot read config: {err}")).with_path(&self.path)
            ),
        }
    }

    /// Absolute location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
