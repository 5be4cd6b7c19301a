use super::replicate_obj;
use crate::math::{HomogeneousMatrix, Point, Real};
use crate::transformation::LoaderTransform;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[cfg(feature = "wavefront")]
use crate::transformation::LoadedMesh;

/// Error raised while writing the replicated meshes.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// An output file could not be created or written.
    #[error("cannot write {path}: {source}")]
    Io {
        /// The output file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The output file is the source file itself.
    #[error("refusing to overwrite the source file {path}")]
    SameFile {
        /// The source file.
        path: PathBuf,
    },
}

/// Parameters of a [`RegistrationExporter`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ExporterConfig {
    /// The directory the replicated files are written to.
    pub out_dir: PathBuf,
    /// If `true`, the inverse of the loader pre-transform of each file is applied to the
    /// positions before they are written.
    pub apply_inverse_transform: bool,
    /// Export every this many [`ExporterEvent::AnimateEnd`] events. Zero disables it.
    pub export_every_n_steps: u32,
    /// Export in [`RegistrationExporter::begin`].
    pub export_at_begin: bool,
    /// Export in [`RegistrationExporter::cleanup`].
    pub export_at_end: bool,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            apply_inverse_transform: false,
            export_every_n_steps: 0,
            export_at_begin: false,
            export_at_end: false,
        }
    }
}

/// Events the host application forwards to a [`RegistrationExporter`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExporterEvent {
    /// A key was pressed. `e` and `E` trigger an export.
    KeyPressed(char),
    /// A simulation step ended.
    AnimateEnd,
}

#[derive(Clone, Debug, PartialEq)]
struct ExportedFile {
    input: PathBuf,
    output: PathBuf,
    inverse: HomogeneousMatrix<Real>,
}

/// Replicates a set of Wavefront files into an output directory, with their vertex positions
/// replaced by the current positions of the registered body.
///
/// The positions are consumed in the order the files were added, so the exporter expects the
/// concatenation of the vertices of all its source files, as they were loaded.
#[derive(Clone, Debug)]
pub struct RegistrationExporter {
    config: ExporterConfig,
    files: Vec<ExportedFile>,
    step_counter: u32,
}

impl RegistrationExporter {
    /// Creates an exporter without any source file.
    pub fn new(config: ExporterConfig) -> Self {
        Self {
            config,
            files: vec![],
            step_counter: 0,
        }
    }

    /// Creates an exporter replicating the files of the given loaded meshes.
    #[cfg(feature = "wavefront")]
    pub fn from_loaded_meshes<'a>(
        config: ExporterConfig,
        meshes: impl IntoIterator<Item = &'a LoadedMesh>,
    ) -> Self {
        let mut result = Self::new(config);
        for mesh in meshes {
            let _ = result.add_source(&mesh.path, &mesh.transform);
        }
        result
    }

    /// Registers a source file, loaded with the pre-transform `transform`.
    ///
    /// Returns the path the file will be replicated to: the output directory joined with the
    /// file name of `path`.
    pub fn add_source(&mut self, path: impl AsRef<Path>, transform: &LoaderTransform) -> PathBuf {
        let input = path.as_ref().to_path_buf();
        let output = match input.file_name() {
            Some(name) => self.config.out_dir.join(name),
            None => self.config.out_dir.join(&input),
        };
        let inverse = transform.inverse_matrix();

        log::debug!("{} -> {}", input.display(), output.display());
        log::debug!("inverse loader transform: {inverse}");

        self.files.push(ExportedFile {
            input,
            output: output.clone(),
            inverse,
        });
        output
    }

    /// The `(input, output)` paths of every registered source file, in order.
    pub fn sources(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.files
            .iter()
            .map(|file| (file.input.as_path(), file.output.as_path()))
    }

    /// Replicates every source file with the given positions.
    ///
    /// Source files that cannot be opened are skipped with a warning. A source file whose output
    /// path resolves to the source itself is an error, and nothing is written for it. Returns the
    /// paths of the files written.
    pub fn write_meshes(&self, positions: &[Point<Real>]) -> Result<Vec<PathBuf>, ExportError> {
        if self.files.is_empty() {
            log::warn!("no source mesh to export");
        }

        let mut cursor = 0;
        let mut written = vec![];

        for file in &self.files {
            let input = match File::open(&file.input) {
                Ok(input) => input,
                Err(err) => {
                    log::warn!("skipping {}: {err}", file.input.display());
                    continue;
                }
            };

            if let (Ok(source), Ok(target)) =
                (fs::canonicalize(&file.input), fs::canonicalize(&file.output))
            {
                if source == target {
                    return Err(ExportError::SameFile { path: source });
                }
            }

            let io_error = |source| ExportError::Io {
                path: file.output.clone(),
                source,
            };
            let output = File::create(&file.output).map_err(io_error)?;
            let inverse = self.config.apply_inverse_transform.then_some(&file.inverse);

            replicate_obj(
                BufReader::new(input),
                BufWriter::new(output),
                positions,
                &mut cursor,
                inverse,
            )
            .map_err(io_error)?;

            log::info!("written {}", file.output.display());
            written.push(file.output.clone());
        }

        if cursor > positions.len() {
            log::warn!(
                "{} vertices had no position and were dropped",
                cursor - positions.len()
            );
        }

        Ok(written)
    }

    /// Reacts to an event of the host application, exporting if it is a trigger.
    ///
    /// Returns the paths of the files written, if an export happened.
    pub fn handle_event(
        &mut self,
        event: ExporterEvent,
        positions: &[Point<Real>],
    ) -> Result<Option<Vec<PathBuf>>, ExportError> {
        match event {
            ExporterEvent::KeyPressed('e' | 'E') => self.write_meshes(positions).map(Some),
            ExporterEvent::KeyPressed(_) => Ok(None),
            ExporterEvent::AnimateEnd => {
                let max_step = self.config.export_every_n_steps;
                if max_step == 0 {
                    return Ok(None);
                }

                self.step_counter += 1;
                if self.step_counter >= max_step {
                    self.step_counter = 0;
                    self.write_meshes(positions).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Exports if the exporter is configured to export at the beginning of the simulation.
    pub fn begin(&self, positions: &[Point<Real>]) -> Result<Option<Vec<PathBuf>>, ExportError> {
        if self.config.export_at_begin {
            self.write_meshes(positions).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Exports if the exporter is configured to export at the end of the simulation.
    pub fn cleanup(&self, positions: &[Point<Real>]) -> Result<Option<Vec<PathBuf>>, ExportError> {
        if self.config.export_at_end {
            self.write_meshes(positions).map(Some)
        } else {
            Ok(None)
        }
    }
}
