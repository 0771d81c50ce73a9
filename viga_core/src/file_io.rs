//! # File I/O Module
//!
//! Project file operations with safety features:
//! - **Atomic saves**: write to a temp file, sync, then rename
//! - **File locking**: advisory locks so two engineers on a shared drive
//!   don't silently overwrite each other
//! - **Version validation**: schema compatibility check on load
//!
//! ## File Format
//!
//! Projects are saved as `.vgc` (VigaCalc) files containing JSON. Lock files
//! use a `.vgc.lock` extension holding metadata about who holds the lock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use viga_core::file_io::{save_project, load_project, FileLock};
//! use viga_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("job.vgc");
//!
//! let lock = FileLock::acquire(path, "engineer@firm.com")?;
//! save_project(&project, path)?;
//! drop(lock);
//! # Ok::<(), viga_core::errors::CalcError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// Locks older than this are treated as abandoned
const LOCK_MAX_AGE_HOURS: i64 = 24;

/// Lock file metadata stored in .vgc.lock files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// User identifier (email or username)
    pub user_id: String,
    /// Machine name where the lock was acquired
    pub machine: String,
    /// Process ID that holds the lock
    pub pid: u32,
    /// When the lock was acquired
    pub locked_at: DateTime<Utc>,
}

impl LockInfo {
    /// Create new lock info for the current process
    pub fn new(user_id: impl Into<String>) -> Self {
        LockInfo {
            user_id: user_id.into(),
            machine: hostname().unwrap_or_else(|| "unknown".to_string()),
            pid: std::process::id(),
            locked_at: Utc::now(),
        }
    }
}

fn hostname() -> Option<String> {
    #[cfg(windows)]
    {
        std::env::var("COMPUTERNAME").ok()
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("HOST").ok())
    }
}

/// File lock guard that releases the lock when dropped.
///
/// Combines an OS-level exclusive lock (via fs2) with a `.lock` sidecar file
/// carrying metadata other users can read.
pub struct FileLock {
    project_path: PathBuf,
    lock_path: PathBuf,
    /// Keeps the OS lock alive
    _lock_file: File,
    /// Lock metadata
    pub info: LockInfo,
}

impl FileLock {
    /// Acquire an exclusive lock on a project file.
    ///
    /// Fails with [`CalcError::FileLocked`] when a live lock from another
    /// user or process exists; stale locks (dead process or older than 24 h)
    /// are taken over silently.
    pub fn acquire(path: &Path, user_id: impl Into<String>) -> CalcResult<Self> {
        let lock_path = lock_path_for(path);
        let info = LockInfo::new(user_id);

        if let Ok(existing) = read_lock_info(&lock_path) {
            if !is_lock_stale(&existing) {
                return Err(CalcError::file_locked(
                    path.display().to_string(),
                    format!("{} ({})", existing.user_id, existing.machine),
                    existing.locked_at.to_rfc3339(),
                ));
            }
        }

        let mut lock_file = OpenOptions::new()
            .write(true)
            .read(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| {
                CalcError::file_error("create lock", lock_path.display().to_string(), e.to_string())
            })?;

        lock_file.try_lock_exclusive().map_err(|_| {
            CalcError::file_locked(
                path.display().to_string(),
                "another process".to_string(),
                "unknown".to_string(),
            )
        })?;

        let lock_json =
            serde_json::to_string_pretty(&info).map_err(|e| CalcError::SerializationError {
                reason: e.to_string(),
            })?;
        lock_file.write_all(lock_json.as_bytes()).map_err(|e| {
            CalcError::file_error("write lock", lock_path.display().to_string(), e.to_string())
        })?;
        lock_file.sync_all().map_err(|e| {
            CalcError::file_error("sync lock", lock_path.display().to_string(), e.to_string())
        })?;

        Ok(FileLock {
            project_path: path.to_path_buf(),
            lock_path,
            _lock_file: lock_file,
            info,
        })
    }

    /// Check whether a file is locked without acquiring the lock.
    ///
    /// Returns `Some(LockInfo)` if a live lock exists, `None` if available.
    pub fn check(path: &Path) -> Option<LockInfo> {
        read_lock_info(&lock_path_for(path))
            .ok()
            .filter(|info| !is_lock_stale(info))
    }

    /// Path to the locked project file
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // The OS lock releases with _lock_file; the sidecar goes with it
        let _ = fs::remove_file(&self.lock_path);
    }
}

/// Lock file path for a project file (`job.vgc` -> `job.vgc.lock`)
fn lock_path_for(project_path: &Path) -> PathBuf {
    let mut lock_path = project_path.to_path_buf();
    let extension = lock_path
        .extension()
        .map(|e| format!("{}.lock", e.to_string_lossy()))
        .unwrap_or_else(|| "lock".to_string());
    lock_path.set_extension(extension);
    lock_path
}

fn read_lock_info(lock_path: &Path) -> CalcResult<LockInfo> {
    let mut contents = String::new();
    File::open(lock_path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| {
            CalcError::file_error("read lock", lock_path.display().to_string(), e.to_string())
        })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

/// A lock is stale when its process is gone (same machine) or it has
/// outlived [`LOCK_MAX_AGE_HOURS`].
fn is_lock_stale(info: &LockInfo) -> bool {
    if hostname().is_some_and(|machine| info.machine == machine) {
        #[cfg(unix)]
        {
            if fs::metadata(format!("/proc/{}", info.pid)).is_err() {
                return true;
            }
        }
        #[cfg(windows)]
        {
            use std::process::Command;
            if let Ok(output) = Command::new("tasklist")
                .args(["/FI", &format!("PID eq {}", info.pid), "/NH"])
                .output()
            {
                let stdout = String::from_utf8_lossy(&output.stdout);
                if stdout.contains("No tasks") || !stdout.contains(&info.pid.to_string()) {
                    return true;
                }
            }
        }
    }

    (Utc::now() - info.locked_at).num_hours() > LOCK_MAX_AGE_HOURS
}

/// Save a project to a file with atomic write semantics.
///
/// Serializes to JSON, writes to a `.tmp` sibling, fsyncs, then renames over
/// the target so an interrupted save never corrupts the existing file.
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json =
        serde_json::to_string_pretty(project).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })?;

    let tmp_path = path.with_extension("vgc.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;
    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a project from a `.vgc` file, validating the schema version.
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let project: Project =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Load a project, also reporting whether another user holds its lock.
pub fn load_project_with_lock_check(path: &Path) -> CalcResult<(Project, Option<LockInfo>)> {
    let project = load_project(path)?;
    Ok((project, FileLock::check(path)))
}

/// A file is compatible when its major version matches ours, and (while we
/// are pre-1.0) its minor version is not newer than ours.
fn validate_version(file_version: &str) -> CalcResult<()> {
    fn parts(version: &str) -> Option<(u32, u32)> {
        let mut it = version.split('.').map(|p| p.parse().ok());
        Some((it.next()??, it.next()??))
    }

    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let (file_major, file_minor) = parts(file_version).ok_or_else(mismatch)?;
    let (our_major, our_minor) = parts(SCHEMA_VERSION).ok_or_else(mismatch)?;

    if file_major != our_major || (our_major == 0 && file_minor > our_minor) {
        return Err(mismatch());
    }

    Ok(())
}
