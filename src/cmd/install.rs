use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

pub fn run(config: &AppConfig) -> AppResult<()> {
    let target = install_target(config)?;
    let source = std::env::current_exe()?;

    println!("\n[INSTALLING] Copying {} to {}...", source.display(), target.display());
    install_binary(&source, &target)?;
    println!("\nInstallation is complete! You can now run it using:\n  generate-changelog 5");
    Ok(())
}

/// One-line hint on stderr when the binary is not installed yet.
pub fn hint_if_missing(config: &AppConfig) {
    if let Some(path) = &config.install_path {
        if !path.exists() {
            eprintln!("[INFO] To install as a CLI tool, run: generate-changelog --install");
        }
    }
}

fn install_target(config: &AppConfig) -> AppResult<PathBuf> {
    config.install_path.clone().ok_or_else(|| {
        AppError::Configuration("could not determine the home directory for installation".to_string())
    })
}

/// Copies `source` to `target` and marks it executable. Reinstalling over itself is a no-op copy.
pub fn install_binary(source: &Path, target: &Path) -> AppResult<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let same_file = match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(from), Ok(to)) => from == to,
        _ => false,
    };
    if !same_file {
        fs::copy(source, target)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(target, fs::Permissions::from_mode(0o755))?;
    }

    tracing::debug!(target = %target.display(), "installed binary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_binary_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("build-output");
        fs::write(&source, b"binary").unwrap();
        let target = dir.path().join(".local").join("bin").join("generate-changelog");

        install_binary(&source, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"binary");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&target).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn reinstalling_over_itself_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("generate-changelog");
        fs::write(&target, b"binary").unwrap();

        install_binary(&target, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"binary");
    }

    #[test]
    fn overwrites_previous_install() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("new");
        let target = dir.path().join("generate-changelog");
        fs::write(&source, b"new build").unwrap();
        fs::write(&target, b"old build").unwrap();

        install_binary(&source, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new build");
    }
}
