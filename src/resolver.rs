use std::env;
use std::fs;
use std::io;
use crate::error::CleanError;

pub const SEPARATOR: char = '/';

/// Result of a filesystem stat, reduced to what resolution needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub is_dir: bool,
}

/// The two filesystem queries the resolver depends on.
pub trait Probe {
    fn working_directory(&self) -> io::Result<String>;
    fn stat(&self, path: &str) -> io::Result<Stat>;
}

/// Probe backed by the process environment and the real filesystem.
pub struct OsProbe;

impl Probe for OsProbe {
    fn working_directory(&self) -> io::Result<String> {
        Ok(env::current_dir()?.to_string_lossy().into_owned())
    }

    fn stat(&self, path: &str) -> io::Result<Stat> {
        let metadata = fs::metadata(path)?;
        Ok(Stat { is_dir: metadata.is_dir() })
    }
}

/// Where the pattern file lives and what it is called.
/// `directory` always ends with a separator, `filename` never contains one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub directory: String,
    pub filename: String,
}

impl Resolution {
    pub fn pattern_file(&self) -> String {
        format!("{}{}", self.directory, self.filename)
    }
}

/// Turns the raw target argument into a (directory, filename) pair.
///
/// An empty argument means the working directory's default pattern file.
/// A directory argument gets the default file name inside it. A file argument
/// is used as is; a bare file name is taken relative to the working directory.
/// At most one `stat` and one working-directory lookup are made.
pub fn resolve(arg: &str, default_file: &str, probe: &dyn Probe) -> Result<Resolution, CleanError> {
    if arg.is_empty() {
        let cwd = probe.working_directory().map_err(CleanError::Environment)?;
        return Ok(Resolution {
            directory: with_trailing_separator(&cwd),
            filename: default_file.to_string(),
        });
    }

    let stat = probe.stat(arg).map_err(|source| CleanError::Path {
        path: arg.to_string(),
        source,
    })?;

    if stat.is_dir {
        return Ok(Resolution {
            directory: with_trailing_separator(arg),
            filename: default_file.to_string(),
        });
    }

    match arg.rsplit_once(SEPARATOR) {
        None => {
            let cwd = probe.working_directory().map_err(CleanError::Environment)?;
            Ok(Resolution {
                directory: with_trailing_separator(&cwd),
                filename: arg.to_string(),
            })
        }
        Some((prefix, file_name)) => Ok(Resolution {
            directory: format!("{}{}", prefix, SEPARATOR),
            filename: file_name.to_string(),
        }),
    }
}

fn with_trailing_separator(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{}{}", path, SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const DEFAULT: &str = ".gitignore";

    struct FakeProbe {
        cwd: Option<&'static str>,
        stat: Option<bool>,
        cwd_calls: Cell<usize>,
        stat_calls: Cell<usize>,
    }

    impl FakeProbe {
        fn new(cwd: Option<&'static str>, stat: Option<bool>) -> Self {
            Self { cwd, stat, cwd_calls: Cell::new(0), stat_calls: Cell::new(0) }
        }
    }

    impl Probe for FakeProbe {
        fn working_directory(&self) -> io::Result<String> {
            self.cwd_calls.set(self.cwd_calls.get() + 1);
            self.cwd
                .map(str::to_string)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cwd removed"))
        }

        fn stat(&self, _path: &str) -> io::Result<Stat> {
            self.stat_calls.set(self.stat_calls.get() + 1);
            self.stat
                .map(|is_dir| Stat { is_dir })
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn resolved(directory: &str, filename: &str) -> Resolution {
        Resolution { directory: directory.to_string(), filename: filename.to_string() }
    }

    #[test]
    fn test_no_arg_uses_working_directory() {
        let probe = FakeProbe::new(Some("/path/to"), Some(true));
        let res = resolve("", DEFAULT, &probe).unwrap();
        assert_eq!(res, resolved("/path/to/", ".gitignore"));
        assert_eq!(probe.stat_calls.get(), 0);
        assert_eq!(probe.cwd_calls.get(), 1);
    }

    #[test]
    fn test_no_arg_without_working_directory() {
        let probe = FakeProbe::new(None, Some(true));
        let err = resolve("", DEFAULT, &probe).unwrap_err();
        assert!(matches!(err, CleanError::Environment(_)));
    }

    #[test]
    fn test_directory_arg_gets_separator() {
        let probe = FakeProbe::new(Some("/elsewhere"), Some(true));
        assert_eq!(resolve("/path/to", DEFAULT, &probe).unwrap(), resolved("/path/to/", ".gitignore"));
        assert_eq!(resolve("/path/to/", DEFAULT, &probe).unwrap(), resolved("/path/to/", ".gitignore"));
        assert_eq!(probe.cwd_calls.get(), 0);
    }

    #[test]
    fn test_directory_arg_uses_configured_default() {
        let probe = FakeProbe::new(Some("/elsewhere"), Some(true));
        let res = resolve("build", ".dockerignore", &probe).unwrap();
        assert_eq!(res, resolved("build/", ".dockerignore"));
    }

    #[test]
    fn test_full_path_to_file() {
        let probe = FakeProbe::new(Some("/path/to"), Some(false));
        let res = resolve("/path/to/.dockerignore", DEFAULT, &probe).unwrap();
        assert_eq!(res, resolved("/path/to/", ".dockerignore"));
        assert_eq!(probe.cwd_calls.get(), 0);

        let res = resolve("/a/b/c.txt", DEFAULT, &probe).unwrap();
        assert_eq!(res, resolved("/a/b/", "c.txt"));
        assert_eq!(res.pattern_file(), "/a/b/c.txt");
    }

    #[test]
    fn test_relative_path_to_file() {
        let probe = FakeProbe::new(Some("/path/to"), Some(false));
        let res = resolve("sub/dir/.ignore", DEFAULT, &probe).unwrap();
        assert_eq!(res, resolved("sub/dir/", ".ignore"));
    }

    #[test]
    fn test_bare_file_name_uses_working_directory() {
        let probe = FakeProbe::new(Some("/path/to"), Some(false));
        let res = resolve(".dockerignore", DEFAULT, &probe).unwrap();
        assert_eq!(res, resolved("/path/to/", ".dockerignore"));
        assert_eq!(probe.cwd_calls.get(), 1);
        assert_eq!(probe.stat_calls.get(), 1);
    }

    #[test]
    fn test_bare_file_name_without_working_directory() {
        let probe = FakeProbe::new(None, Some(false));
        let err = resolve(".dockerignore", DEFAULT, &probe).unwrap_err();
        assert!(matches!(err, CleanError::Environment(_)));
    }

    #[test]
    fn test_stat_failure_is_fatal_for_any_shape() {
        for arg in ["/path/to", "/path/to/", ".dockerignore", "a/b/c.txt"] {
            let probe = FakeProbe::new(Some("/path/to"), None);
            let err = resolve(arg, DEFAULT, &probe).unwrap_err();
            assert!(matches!(err, CleanError::Path { .. }), "arg {:?}", arg);
            assert!(err.is_fatal());
            assert_eq!(probe.cwd_calls.get(), 0);
        }
    }

    #[test]
    fn test_root_working_directory() {
        let probe = FakeProbe::new(Some("/"), Some(true));
        let res = resolve("", DEFAULT, &probe).unwrap();
        assert_eq!(res, resolved("/", ".gitignore"));
    }

    #[test]
    fn test_os_probe_on_real_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".gitignore");
        std::fs::write(&file, "*.tmp\n").unwrap();

        let dir_str = dir.path().to_string_lossy().into_owned();
        let file_str = file.to_string_lossy().into_owned();

        assert_eq!(OsProbe.stat(&dir_str).unwrap(), Stat { is_dir: true });
        assert_eq!(OsProbe.stat(&file_str).unwrap(), Stat { is_dir: false });
        assert!(OsProbe.stat(&format!("{}/missing", dir_str)).is_err());

        let res = resolve(&file_str, DEFAULT, &OsProbe).unwrap();
        assert_eq!(res.directory, format!("{}/", dir_str));
        assert_eq!(res.filename, ".gitignore");
    }
}
