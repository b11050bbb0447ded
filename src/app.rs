//! Application orchestration layer
//!
//! The [`Dispatcher`] holds the files given on the command line and decides
//! between single-file display and two-file comparison.

use crate::config::{DisplayMode, Settings};
use crate::error::{FilerevError, Result};
use crate::file_handler::{FormatReader, ReaderFactory};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const CONTENT_HEADER: &str = "----- Contenu -----";
pub const REVERSED_LINES_HEADER: &str = "----- Lignes inverses -----";
pub const PALINDROME_HEADER: &str = "----- Palindrome -----";
pub const COMPARISON_HEADER: &str = "----- Comparaison -----";

/// Maximum number of files accepted on the command line
pub const MAX_FILES: usize = 2;

/// Coordinates readers and writes the labeled report sections
#[derive(Debug, Clone)]
pub struct Dispatcher {
    file: Option<PathBuf>,
    second_file: Option<PathBuf>,
    display_mode: DisplayMode,
}

impl Dispatcher {
    /// Build a dispatcher from 0, 1 or 2 paths
    ///
    /// With no path the settings' default file is used; if it does not exist
    /// an error is logged and the dispatcher holds no file at all.
    ///
    /// # Errors
    /// * `InvalidArgument` when more than two paths are given
    pub fn from_paths(paths: Vec<PathBuf>, settings: &Settings) -> Result<Self> {
        if paths.len() > MAX_FILES {
            return Err(FilerevError::invalid_argument(format!(
                "too many files given ({}); pass 0, 1 or 2 files",
                paths.len()
            )));
        }

        let mut paths = paths.into_iter();
        let (file, second_file) = match (paths.next(), paths.next()) {
            (None, _) => {
                let default = settings.default_file.clone();
                if default.exists() {
                    (Some(default), None)
                } else {
                    log::error!("default file {} does not exist", default.display());
                    (None, None)
                }
            }
            (first, second) => (first, second),
        };

        Ok(Self {
            file,
            second_file,
            display_mode: settings.display_mode,
        })
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn second_file(&self) -> Option<&Path> {
        self.second_file.as_deref()
    }

    pub fn set_file(&mut self, file: Option<PathBuf>) {
        self.file = file;
    }

    pub fn set_second_file(&mut self, file: Option<PathBuf>) {
        self.second_file = file;
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }

    /// Pick the reader for `path` from its extension
    pub fn select(path: &Path) -> Result<Box<dyn FormatReader>> {
        ReaderFactory::create(path)
    }

    /// Write the report to standard output
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the report to `out`
    ///
    /// Read and format failures are logged and leave the affected section
    /// empty; only write failures on `out` are returned.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let Some(file) = self.file.as_deref() else {
            log::warn!("no file to process");
            return Ok(());
        };

        let reader = match Self::select(file) {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("{e}");
                return Ok(());
            }
        };

        match self.second_file.as_deref() {
            None => Self::render_single(reader.as_ref(), out),
            Some(second) => {
                let other = match Self::select(second) {
                    Ok(reader) => reader,
                    Err(e) => {
                        log::error!("{e}");
                        return Ok(());
                    }
                };
                Self::render_comparison(reader.as_ref(), other.as_ref(), out)
            }
        }
    }

    fn render_single<W: Write>(reader: &dyn FormatReader, out: &mut W) -> Result<()> {
        writeln!(out, "{CONTENT_HEADER}")?;
        write_body(out, reader.read())?;
        writeln!(out, "{REVERSED_LINES_HEADER}")?;
        write_body(out, reader.read_reverse_line())?;
        writeln!(out, "{PALINDROME_HEADER}")?;
        write_body(out, reader.read_palindrome())?;
        Ok(())
    }

    fn render_comparison<W: Write>(
        reader: &dyn FormatReader,
        other: &dyn FormatReader,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "{COMPARISON_HEADER}")?;
        writeln!(out, "Fichier 1 : {}", reader.file_path().display())?;
        writeln!(out, "Fichier 2 : {}", other.file_path().display())?;
        write_body(out, reader.compare(other))?;
        Ok(())
    }
}

fn write_body<W: Write, T: std::fmt::Display>(out: &mut W, body: Result<T>) -> Result<()> {
    match body {
        Ok(body) => writeln!(out, "{body}")?,
        Err(e) => log::error!("{e}"),
    }
    Ok(())
}
