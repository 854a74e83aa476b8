use super::error::AppError;

use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Directory name of the default store, next to the executable
pub const DEFAULT_STORE_DIR: &str = "init_files";

static CODENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("codename regex is valid")
});

pub fn is_valid_codename(s: &str) -> bool {
    CODENAME_RE.is_match(s)
}

pub fn validate_codename(s: &str) -> Result<String, String> {
    if is_valid_codename(s) {
        Ok(s.to_string())
    } else {
        Err(
            "Invalid codename.
            Allowed characters: letters, digits, '-' and '_' (no spaces, no file suffix)".to_string()
        )
    }
}

/// Shared reference paths stored once under a codename
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SetupRecord {
    pub ref_human_gex: String,
    pub probeset_human_transcriptome: String,
    pub write_bam: bool,
    pub output_dir: String,
}

impl SetupRecord {
    /// Pretty JSON with 4-space indentation, the on-disk format
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        self.write_pretty(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_pretty<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)
    }
}

/// Codename-keyed directory of setup records
#[derive(Debug, Clone)]
pub struct SetupStore {
    root: PathBuf,
}

impl SetupStore {
    /// Opens the store, creating its root directory if needed
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, AppError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// `<exe dir>/init_files`, falling back to the working directory
    pub fn default_root() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_STORE_DIR)
    }

    #[inline]
    pub fn root(&self) -> &Path { self.root.as_path() }

    pub fn record_path(&self, codename: &str) -> Result<PathBuf, AppError> {
        if !is_valid_codename(codename) {
            return Err(AppError::InvalidCodename(codename.to_string()));
        }
        Ok(self.root.join(format!("{codename}.json")))
    }

    /// Writes the record, replacing any previous one under the same codename
    pub fn save(&self, codename: &str, record: &SetupRecord) -> Result<PathBuf, AppError> {
        let path = self.record_path(codename)?;
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        record.write_pretty(&mut writer).map_err(io::Error::from)?;
        writer.flush()?;
        log::debug!("stored setup `{codename}` at {}", path.display());
        Ok(path)
    }

    pub fn load(&self, codename: &str) -> Result<SetupRecord, AppError> {
        let path = self.record_path(codename)?;
        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::SetupNotFound {
                    codename: codename.to_string(),
                    path,
                });
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| AppError::SetupParse { path, source })
    }
}
