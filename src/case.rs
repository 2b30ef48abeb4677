/*!
Discovery of test cases in a case repository.

A case repository is a directory tree of clause-set files. The expected verdict of
a case is encoded in its file name: `sat*` files must be satisfiable and `unsat*`
files unsatisfiable. Files with any other name are not test cases.
*/

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::{prelude::*, verdict::Verdict};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to walk case repository '{}'", root.display()))]
    WalkError {
        root: PathBuf,
        source: walkdir::Error,
    },
    #[snafu(display("Case repository root '{}' is not a directory", root.display()))]
    NotADirectory { root: PathBuf },
    #[snafu(display("Failed to read test case '{}'", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Expectation encoded in the prefix of a case file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Satisfiable,
    Unsatisfiable,
    Unrecognized,
}

impl Tag {
    pub const SAT_PREFIX: &'static str = "sat";
    pub const UNSAT_PREFIX: &'static str = "unsat";

    pub fn of(file_name: &str) -> Self {
        if file_name.starts_with(Self::SAT_PREFIX) {
            Tag::Satisfiable
        } else if file_name.starts_with(Self::UNSAT_PREFIX) {
            Tag::Unsatisfiable
        } else {
            Tag::Unrecognized
        }
    }

    pub fn expected(self) -> Option<Verdict> {
        match self {
            Tag::Satisfiable => Some(Verdict::Satisfiable),
            Tag::Unsatisfiable => Some(Verdict::Unsatisfiable),
            Tag::Unrecognized => None,
        }
    }
}

/// A regular file found in the repository, before its tag is looked at.
#[derive(Debug, Clone)]
pub struct CaseEntry {
    path: PathBuf,
    name: String,
}

impl CaseEntry {
    /// Symlinks count when they resolve to a file.
    fn is_case_file(entry: &DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    fn from_dir_entry(entry: DirEntry) -> Self {
        let name = entry.file_name().to_string_lossy().into_owned();
        CaseEntry {
            path: entry.into_path(),
            name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Tag {
        Tag::of(&self.name)
    }

    /// Gives the entry back when its file name carries no tag.
    pub fn into_case(self) -> Result<TestCase, CaseEntry> {
        match self.tag().expected() {
            Some(expected) => Ok(TestCase {
                path: self.path,
                name: self.name,
                expected,
            }),
            None => Err(self),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestCase {
    path: PathBuf,
    name: String,
    expected: Verdict,
}

impl TestCase {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected(&self) -> Verdict {
        self.expected
    }

    /// Reads the raw clause set.
    pub fn content(&self) -> Result<Vec<u8>, Error> {
        fs::read(&self.path).context(ReadError { path: &self.path })
    }
}

#[derive(Debug, Clone)]
pub struct CaseRepository {
    root: PathBuf,
}

impl CaseRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CaseRepository { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walks the repository and yields every regular file.
    ///
    /// Entries come in the order the filesystem walk produces them, which is stable
    /// within a run but otherwise unspecified. A missing root, or a root that is not
    /// a directory, yields an error as the first item.
    pub fn entries(&self) -> impl Iterator<Item = Result<CaseEntry, Error>> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.depth() == 0 && !entry.path().is_dir() => {
                    Some(Err(Error::NotADirectory {
                        root: self.root.clone(),
                    }))
                }
                Ok(entry) if CaseEntry::is_case_file(&entry) => {
                    Some(Ok(CaseEntry::from_dir_entry(entry)))
                }
                Ok(_) => None,
                Err(source) => Some(Err(Error::WalkError {
                    root: self.root.clone(),
                    source,
                })),
            })
    }
}
