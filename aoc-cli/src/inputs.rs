//! Local puzzle input store

use crate::error::InputError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where puzzle inputs come from
#[derive(Debug, Clone)]
pub enum InputStore {
    /// `{dir}/{year}_day{day:02}.txt`
    Directory(PathBuf),
    /// One input served for whichever solver asks
    Fixed(String),
}

impl InputStore {
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        InputStore::Directory(dir.into())
    }

    /// Read the whole of `path` up front; `-` reads stdin.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let input = if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            buf
        } else {
            fs::read_to_string(path).map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                source,
            })?
        };
        Ok(InputStore::Fixed(input))
    }

    /// On-disk location of an input, if this store reads from a directory
    pub fn input_path(&self, year: u16, day: u8) -> Option<PathBuf> {
        match self {
            InputStore::Directory(dir) => Some(file_in(dir, year, day)),
            InputStore::Fixed(_) => None,
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_none_or(|path| path.is_file())
    }

    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = match self {
            InputStore::Fixed(input) => return Ok(input.clone()),
            InputStore::Directory(dir) => file_in(dir, year, day),
        };

        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                InputError::Missing { year, day, path }
            } else {
                InputError::Read { path, source }
            }
        })
    }
}

fn file_in(dir: &Path, year: u16, day: u8) -> PathBuf {
    dir.join(format!("{}_day{:02}.txt", year, day))
}
