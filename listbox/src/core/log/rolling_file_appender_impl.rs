// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Creates a file appender that never rotates. The parent folder of `path_str` must
/// already exist.
///
/// Note that if you wrap this up in a non blocking writer, the guard must outlive the
/// subscriber, which doesn't fit the [`crate::init_tracing`] API. So it is used as a
/// blocking writer.
///
/// # Errors
///
/// Returns an error if the path has no parent folder or no file name.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access parent folder of {}. It might not exist.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't get the file name from {}.", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_rejects_root() {
        assert!(try_create("/").is_err());
    }

    #[test]
    fn test_try_create_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("listbox.log");
        let appender = try_create(file_path.to_str().unwrap());
        assert!(appender.is_ok());
    }
}
