//! Filesystem operations needed to materialize a link.

use std::ffi::OsStr;
use std::io;
use std::path::Path;

/// Filesystem side of link restoration
pub trait LinkFs {
    /// Create every missing parent directory of `path`; a no-op when they exist
    fn ensure_parent_directories(&self, path: &Path) -> io::Result<()>;

    /// Create a symbolic link at `link` whose target text is `target`.
    ///
    /// Must fail with [`io::ErrorKind::AlreadyExists`] when something is
    /// already present at `link`.
    fn create_symlink(&self, target: &OsStr, link: &Path) -> io::Result<()>;
}

impl<T: LinkFs + ?Sized> LinkFs for &T {
    fn ensure_parent_directories(&self, path: &Path) -> io::Result<()> {
        (**self).ensure_parent_directories(path)
    }

    fn create_symlink(&self, target: &OsStr, link: &Path) -> io::Result<()> {
        (**self).create_symlink(target, link)
    }
}

/// The real filesystem of the running host
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl LinkFs for HostFs {
    fn ensure_parent_directories(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn create_symlink(&self, target: &OsStr, link: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(target, link)
        }

        #[cfg(windows)]
        {
            std::os::windows::fs::symlink_file(target, link)
        }

        #[cfg(not(any(unix, windows)))]
        {
            let _ = (target, link);
            Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "symbolic links are not supported on this platform",
            ))
        }
    }
}
