//! Job-wide error severity.
//!
//! The register only ratchets upward. Any number of callers may raise it in
//! any order and the result is the maximum level anyone asked for.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity observed by an extraction job, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Severity {
    #[default]
    Ok = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Ok,
            1 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Process exit code for this severity (0 ok, 1 warning, 2 error)
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Shared handle to a monotonic severity level.
///
/// Clones observe and raise the same level; separately constructed registers
/// are independent.
#[derive(Debug, Clone, Default)]
pub struct ErrorRegister {
    level: Arc<AtomicU8>,
}

impl ErrorRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the level to `severity` unless it is already at least that high
    pub fn raise_at_least(&self, severity: Severity) {
        self.level.fetch_max(severity as u8, Ordering::AcqRel);
    }

    pub fn current(&self) -> Severity {
        Severity::from_u8(self.level.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_ok() {
        assert_eq!(ErrorRegister::new().current(), Severity::Ok);
    }

    #[test]
    fn never_lowers() {
        let register = ErrorRegister::new();
        register.raise_at_least(Severity::Error);
        register.raise_at_least(Severity::Warning);
        register.raise_at_least(Severity::Ok);
        assert_eq!(register.current(), Severity::Error);
    }

    #[test]
    fn clones_share_state() {
        let register = ErrorRegister::new();
        let handle = register.clone();
        handle.raise_at_least(Severity::Warning);
        assert_eq!(register.current(), Severity::Warning);
        assert_eq!(ErrorRegister::new().current(), Severity::Ok);
    }

    #[test]
    fn concurrent_raises_keep_maximum() {
        let register = ErrorRegister::new();
        let workers: Vec<_> = (0..8)
            .map(|i| {
                let register = register.clone();
                thread::spawn(move || {
                    let level = if i == 3 { Severity::Error } else { Severity::Warning };
                    register.raise_at_least(level);
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(register.current(), Severity::Error);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Error.exit_code(), 2);
    }
}
