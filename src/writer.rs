use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::placeholder;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("could not create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write placeholder {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct Summary {
    pub output_dir: PathBuf,

    /// Written files, in the order the names were given
    pub files: Vec<PathBuf>,
}

/// Writes one SVG per name into `output_dir`, using the name as file name.
///
/// Missing directories are created and existing files are overwritten. Stops
/// at the first I/O failure.
pub fn write_placeholders<S: AsRef<str>>(
    output_dir: &Path,
    names: &[S],
) -> Result<Summary, WriteError> {
    fs::create_dir_all(output_dir).map_err(|source| WriteError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let path = output_dir.join(name);

        fs::write(&path, placeholder::generate(name)).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            name,
            path = %path.display(),
            palette_index = placeholder::palette_index(name),
            "wrote placeholder"
        );

        files.push(path);
    }

    Ok(Summary {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}
