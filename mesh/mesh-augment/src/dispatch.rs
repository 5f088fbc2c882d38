//! Applying a named operation to a mesh file.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use mesh_io::{load_off, save_off};
use mesh_transform::{AugmentParams, add_noise, center, normalize, rotate, scale};
use mesh_types::{IndexedMesh, MeshTopology};
use rand::Rng;
use tracing::{info, warn};

use crate::error::{AugmentError, AugmentResult};
use crate::operation::Operation;

/// Applies operations to OFF files with a fixed set of parameters.
///
/// Each call loads the input, transforms its vertices, and writes a new file
/// next to the input. The input file is never modified. No state is shared
/// between calls, so one `Augmenter` may serve any number of files.
///
/// # Example
///
/// ```no_run
/// use mesh_augment::{Augmenter, Operation};
/// use mesh_transform::AugmentParams;
///
/// let augmenter = Augmenter::new(AugmentParams::new().with_seed(7));
/// let output = augmenter.apply(Operation::Rotation, "uploads/bunny.off").unwrap();
/// assert!(output.ends_with("rotated_bunny.off"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Augmenter {
    params: AugmentParams,
}

impl Augmenter {
    /// Create an augmenter with the given parameters.
    #[must_use]
    pub const fn new(params: AugmentParams) -> Self {
        Self { params }
    }

    /// Parameters used by the random operations.
    #[must_use]
    pub const fn params(&self) -> &AugmentParams {
        &self.params
    }

    /// Apply `operation` to the mesh at `input`, drawing randomness from a
    /// generator built from the parameters.
    ///
    /// # Errors
    ///
    /// See [`Augmenter::apply_with_rng`].
    pub fn apply<P: AsRef<Path>>(&self, operation: Operation, input: P) -> AugmentResult<PathBuf> {
        let mut rng = self.params.rng();
        self.apply_with_rng(operation, input, &mut rng)
    }

    /// Apply `operation` to the mesh at `input` using the supplied random source.
    ///
    /// Returns the path of the new file, `<dir>/<prefix>_<name>`.
    ///
    /// # Errors
    ///
    /// - [`AugmentError::Format`] if the input is missing or is not a valid OFF file
    /// - [`AugmentError::DegenerateMesh`] if the geometry cannot support the operation
    /// - [`AugmentError::InvalidParameter`] if the parameters are out of range
    /// - [`AugmentError::Io`] if the output cannot be written
    pub fn apply_with_rng<P, R>(
        &self,
        operation: Operation,
        input: P,
        rng: &mut R,
    ) -> AugmentResult<PathBuf>
    where
        P: AsRef<Path>,
        R: Rng + ?Sized,
    {
        let input = input.as_ref();
        let mesh = load_off(input).map_err(AugmentError::from_load)?;
        let transformed = self.transform_mesh(operation, &mesh, rng)?;

        let output = Self::output_path(operation, input);
        let written = save_off(&transformed, &output).map_err(AugmentError::from_save)?;

        info!(
            operation = operation.name(),
            input = %input.display(),
            output = %written.display(),
            vertices = transformed.vertex_count(),
            faces = transformed.face_count(),
            "Applied mesh operation"
        );
        Ok(written)
    }

    /// Transform the vertices of an in-memory mesh. Faces are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AugmentError::DegenerateMesh`] or [`AugmentError::InvalidParameter`]
    /// when the underlying transform fails.
    pub fn transform_mesh<R: Rng + ?Sized>(
        &self,
        operation: Operation,
        mesh: &IndexedMesh,
        rng: &mut R,
    ) -> AugmentResult<IndexedMesh> {
        let points = mesh.positions();
        let moved = match operation {
            Operation::Normalization => normalize(&points)?,
            Operation::Centering => center(&points)?,
            Operation::Rotation => {
                let (rotated, angles) = rotate(&points, rng);
                info!(x = angles.x, y = angles.y, z = angles.z, "Rotated mesh (degrees)");
                rotated
            }
            Operation::Scaling => {
                let (scaled, factors) = scale(&points, self.params.scale_range, rng)?;
                info!(x = factors.x, y = factors.y, z = factors.z, "Scaled mesh");
                scaled
            }
            Operation::AddingNoise => {
                let (noisy, magnitude) = add_noise(&points, self.params.noise_fraction, rng)?;
                info!(magnitude, "Added noise to mesh");
                noisy
            }
        };
        Ok(mesh.with_positions(moved))
    }

    /// Output location for `operation` applied to `input`.
    ///
    /// The file lands in the input's directory, named with the operation's
    /// prefix followed by `_` and the input's file name.
    ///
    /// ```
    /// use std::path::Path;
    /// use mesh_augment::{Augmenter, Operation};
    ///
    /// let out = Augmenter::output_path(Operation::Centering, Path::new("uploads/cube.off"));
    /// assert_eq!(out, Path::new("uploads/centered_cube.off"));
    /// ```
    #[must_use]
    pub fn output_path(operation: Operation, input: &Path) -> PathBuf {
        let name = input.file_name().unwrap_or_else(|| OsStr::new(""));
        let mut file_name = OsString::from(operation.prefix());
        file_name.push("_");
        file_name.push(name);
        input.with_file_name(file_name)
    }
}

/// Apply a named operation with default parameters and report the outcome as text.
///
/// On success the result is the output path. On failure it is a message
/// beginning with `"Error"`:
/// - `"Error in <operation>: <cause>"` when the operation ran and failed
/// - `"Error: invalid option selected: <name>"` for an unknown name
///
/// # Example
///
/// ```no_run
/// let result = mesh_augment::apply("Centering", "uploads/cube.off");
/// if mesh_augment::is_error(&result) {
///     eprintln!("{result}");
/// }
/// ```
pub fn apply<P: AsRef<Path>>(operation_name: &str, input_path: P) -> String {
    apply_with(&Augmenter::default(), operation_name, input_path)
}

/// Like [`apply`], with an explicit [`Augmenter`].
pub fn apply_with<P: AsRef<Path>>(
    augmenter: &Augmenter,
    operation_name: &str,
    input_path: P,
) -> String {
    let input = input_path.as_ref();
    let operation = match operation_name.parse::<Operation>() {
        Ok(operation) => operation,
        Err(e) => {
            warn!(name = operation_name, "Rejected unknown operation");
            return format!("Error: {e}");
        }
    };

    match augmenter.apply(operation, input) {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            warn!(
                operation = operation.name(),
                input = %input.display(),
                error = %e,
                "Mesh operation failed"
            );
            describe_error(operation, &e)
        }
    }
}

/// Outward message for a failed operation.
#[must_use]
pub fn describe_error(operation: Operation, err: &AugmentError) -> String {
    format!("Error in {}: {err}", operation.label())
}
