//! OFF (Object File Format) support.
//!
//! OFF is a plain-text polygon format:
//!
//! ```text
//! OFF
//! 4 1 0
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! 0 0 1
//! 3 0 1 2
//! ```
//!
//! The header token is followed by a counts line (`vertices faces edges`),
//! one line per vertex with three coordinates, then one line per face
//! holding the arity and that many vertex indices. The edge count is read
//! but ignored, and always written as `0`.
//!
//! # Reader leniency
//!
//! - Blank lines and `#` comments are skipped
//! - The counts may share the header line (`OFF 4 1 0`)
//! - Trailing numbers on vertex and face lines (colors) are ignored
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_off, save_off};
//!
//! let mesh = load_off("model.off").unwrap();
//! save_off(&mesh, "copy/model.off").unwrap();
//! ```

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Write};
use std::path::{Path, PathBuf};

use mesh_types::{Face, IndexedMesh, MeshTopology, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Header token that opens every OFF file.
pub const OFF_HEADER: &str = "OFF";

/// Upper bound on up-front allocation driven by the counts line.
///
/// The counts come from untrusted input; larger meshes still load, they
/// just grow their buffers as lines are read.
const MAX_PREALLOCATION: usize = 1 << 20;

/// Load a mesh from an OFF file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`IoError::FileNotFound`])
/// - The header token is absent ([`IoError::MissingHeader`])
/// - The counts line is malformed ([`IoError::InvalidCounts`])
/// - Fewer vertex or face lines exist than declared ([`IoError::Truncated`])
/// - A line cannot be parsed or a face index is out of range
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_off;
///
/// let mesh = load_off("model.off").unwrap();
/// println!("Loaded {} vertices, {} faces", mesh.vertices.len(), mesh.faces.len());
/// ```
pub fn load_off<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mesh = read_off(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Loaded OFF mesh"
    );
    Ok(mesh)
}

/// Parse an OFF mesh from a buffered reader.
///
/// # Errors
///
/// See [`load_off`]; everything except [`IoError::FileNotFound`] applies.
pub fn read_off<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut lines = DataLines::new(reader);

    let header = lines
        .next_data()?
        .ok_or(IoError::MissingHeader { found: None })?;
    let mut header_tokens = header.split_whitespace();
    match header_tokens.next() {
        Some(OFF_HEADER) => {}
        other => {
            return Err(IoError::MissingHeader {
                found: other.map(str::to_string),
            });
        }
    }

    let inline_counts: Vec<&str> = header_tokens.collect();
    let counts_line = if inline_counts.is_empty() {
        lines.next_data()?.ok_or_else(|| IoError::InvalidCounts {
            line: String::new(),
        })?
    } else {
        inline_counts.join(" ")
    };
    let (vertex_count, face_count) = parse_counts(&counts_line)?;

    let mut mesh = IndexedMesh::with_capacity(
        vertex_count.min(MAX_PREALLOCATION),
        face_count.min(MAX_PREALLOCATION),
    );

    for found in 0..vertex_count {
        let line = lines.next_data()?.ok_or(IoError::Truncated {
            element: "vertex",
            expected: vertex_count,
            found,
        })?;
        mesh.vertices.push(parse_vertex(&line, lines.line_number)?);
    }

    for found in 0..face_count {
        let line = lines.next_data()?.ok_or(IoError::Truncated {
            element: "face",
            expected: face_count,
            found,
        })?;
        mesh.faces.push(parse_face(&line, lines.line_number)?);
    }

    if let Some(bad) = mesh.first_out_of_range() {
        return Err(bad.into());
    }
    Ok(mesh)
}

/// Save a mesh to an OFF file.
///
/// Missing parent directories are created first. The writer is flushed
/// explicitly so that buffered write failures are reported rather than lost
/// when the file handle is dropped. On error a partially written file may
/// remain at `path`.
///
/// # Returns
///
/// The path that was written, for chaining into the next step.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the directory cannot be created or the file
/// cannot be written.
///
/// # Example
///
/// ```no_run
/// use mesh_io::{load_off, save_off};
///
/// let mesh = load_off("input.off").unwrap();
/// let written = save_off(&mesh, "out/input.off").unwrap();
/// assert!(written.ends_with("input.off"));
/// ```
pub fn save_off<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        // Succeeds if the directory already exists.
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_off(mesh, &mut writer)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Saved OFF mesh"
    );
    Ok(path.to_path_buf())
}

/// Write a mesh in OFF format to any writer.
///
/// Coordinates use Rust's shortest round-trip `Display` formatting, so
/// reading the output back reproduces every coordinate exactly.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_off<W: Write>(mesh: &IndexedMesh, writer: &mut W) -> IoResult<()> {
    writeln!(writer, "{OFF_HEADER}")?;
    writeln!(writer, "{} {} 0", mesh.vertices.len(), mesh.faces.len())?;

    for v in &mesh.vertices {
        let p = &v.position;
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    for face in &mesh.faces {
        write!(writer, "{}", face.arity())?;
        for index in face {
            write!(writer, " {index}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Line source that skips blanks and comments and tracks line numbers.
struct DataLines<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> DataLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Next non-empty line with any `#` comment removed.
    fn next_data(&mut self) -> IoResult<Option<String>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line_number = self.line_number;
            let line = line.map_err(|e| {
                if e.kind() == ErrorKind::InvalidData {
                    IoError::invalid_content(format!("line {line_number}: not valid UTF-8"))
                } else {
                    IoError::Io(e)
                }
            })?;
            let data = line.split_once('#').map_or(line.as_str(), |(data, _)| data);
            let data = data.trim();
            if !data.is_empty() {
                return Ok(Some(data.to_string()));
            }
        }
        Ok(None)
    }
}

/// Parse `V F [E]`, returning the vertex and face counts.
fn parse_counts(line: &str) -> IoResult<(usize, usize)> {
    let invalid = || IoError::InvalidCounts {
        line: line.to_string(),
    };

    let counts = line
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match counts.as_slice() {
        [vertices, faces] | [vertices, faces, _] => Ok((*vertices, *faces)),
        _ => Err(invalid()),
    }
}

fn parse_vertex(line: &str, line_number: usize) -> IoResult<Vertex> {
    let mut tokens = line.split_whitespace();
    let mut coord = || -> IoResult<f64> {
        let token = tokens.next().ok_or_else(|| {
            IoError::invalid_content(format!(
                "line {line_number}: vertex needs 3 coordinates: '{line}'"
            ))
        })?;
        token.parse().map_err(|_| {
            IoError::invalid_content(format!(
                "line {line_number}: invalid coordinate '{token}'"
            ))
        })
    };

    let x = coord()?;
    let y = coord()?;
    let z = coord()?;
    Ok(Vertex::from_coords(x, y, z))
}

fn parse_face(line: &str, line_number: usize) -> IoResult<Face> {
    let mut tokens = line.split_whitespace();

    let arity: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| {
            IoError::invalid_content(format!("line {line_number}: invalid face arity: '{line}'"))
        })?;
    if arity < 3 {
        return Err(IoError::invalid_content(format!(
            "line {line_number}: face arity must be at least 3, got {arity}"
        )));
    }

    let indices = tokens
        .by_ref()
        .take(arity)
        .map(|t| {
            t.parse::<u32>().map_err(|_| {
                IoError::invalid_content(format!("line {line_number}: invalid vertex index '{t}'"))
            })
        })
        .collect::<IoResult<Vec<u32>>>()?;

    if indices.len() < arity {
        return Err(IoError::invalid_content(format!(
            "line {line_number}: face declares {arity} indices but lists {}",
            indices.len()
        )));
    }

    Ok(Face::new(indices))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::unit_cube;
    use std::io::Cursor;

    fn read_str(text: &str) -> IoResult<IndexedMesh> {
        read_off(Cursor::new(text))
    }

    fn create_test_triangle() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push(Face::triangle(0, 1, 2));
        mesh
    }

    #[test]
    fn parses_minimal_file() {
        let mesh = read_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();
        assert_eq!(mesh, create_test_triangle());
    }

    #[test]
    fn parses_comments_blank_lines_and_inline_counts() {
        let text = "# exported by hand\nOFF 3 1 0\n\n0 0 0 # origin\n1 0 0\n0 1 0\n\n3 0 1 2\n";
        let mesh = read_str(text).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces[0].indices(), &[0, 1, 2]);
    }

    #[test]
    fn counts_line_without_edge_count() {
        let mesh = read_str("OFF\n3 0\n0 0 0\n1 0 0\n0 1 0\n").unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn ignores_trailing_color_values() {
        let text = "OFF\n3 1 0\n0 0 0 255 0 0\n1 0 0\n0 1 0\n3 0 1 2 0.5 0.5 0.5\n";
        let mesh = read_str(text).unwrap();
        assert_eq!(mesh.vertices[0].coords(), [0.0, 0.0, 0.0]);
        assert_eq!(mesh.faces[0].arity(), 3);
    }

    #[test]
    fn parses_mixed_arity_faces() {
        let text = "OFF\n5 2 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n0.5 0.5 1\n4 0 1 2 3\n3 0 1 4\n";
        let mesh = read_str(text).unwrap();
        assert_eq!(mesh.faces[0].indices(), &[0, 1, 2, 3]);
        assert_eq!(mesh.faces[1].indices(), &[0, 1, 4]);
    }

    #[test]
    fn parses_scientific_notation() {
        let mesh = read_str("OFF\n1 0 0\n1e-3 -2.5E2 .5\n").unwrap();
        assert_relative_eq!(mesh.vertices[0].position.x, 0.001);
        assert_relative_eq!(mesh.vertices[0].position.y, -250.0);
        assert_relative_eq!(mesh.vertices[0].position.z, 0.5);
    }

    #[test]
    fn rejects_missing_header() {
        let err = read_str("3 1 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, IoError::MissingHeader { found: Some(ref t) } if t == "3"));
    }

    #[test]
    fn rejects_empty_file() {
        let err = read_str("").unwrap_err();
        assert!(matches!(err, IoError::MissingHeader { found: None }));
    }

    #[test]
    fn rejects_other_off_variants() {
        let err = read_str("COFF\n1 0 0\n0 0 0 1 1 1 1\n").unwrap_err();
        assert!(matches!(err, IoError::MissingHeader { .. }));
    }

    #[test]
    fn rejects_malformed_counts() {
        for counts in ["3", "3 1 0 7", "three 1 0", "-1 0 0"] {
            let text = format!("OFF\n{counts}\n");
            let err = read_str(&text).unwrap_err();
            assert!(
                matches!(err, IoError::InvalidCounts { ref line } if line == counts),
                "counts '{counts}' gave {err:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_counts_line() {
        let err = read_str("OFF\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidCounts { .. }));
    }

    #[test]
    fn rejects_truncated_vertices() {
        let err = read_str("OFF\n4 0 0\n0 0 0\n1 0 0\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::Truncated {
                element: "vertex",
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_truncated_faces() {
        let err = read_str("OFF\n3 2 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::Truncated {
                element: "face",
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_short_vertex_line() {
        let err = read_str("OFF\n1 0 0\n0 0\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn rejects_bad_coordinate() {
        let err = read_str("OFF\n1 0 0\n0 zero 0\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.to_string().contains("line 3: invalid coordinate 'zero'"));

        let err = read_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 one 2\n").unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.to_string().contains("line 6: invalid vertex index 'one'"));
    }

    #[test]
    fn rejects_degenerate_face_arity() {
        let err = read_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n2 0 1\n").unwrap_err();
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn rejects_face_with_missing_indices() {
        let err = read_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n4 0 1 2\n").unwrap_err();
        assert!(err.to_string().contains("declares 4 indices but lists 3"));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let err = read_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 3\n").unwrap_err();
        assert!(matches!(
            err,
            IoError::IndexOutOfRange {
                face: 0,
                index: 3,
                vertex_count: 3
            }
        ));
    }

    #[test]
    fn reports_first_bad_face() {
        let text = "OFF\n3 2 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n4 0 1 2 7\n";
        let err = read_str(text).unwrap_err();
        assert!(matches!(err, IoError::IndexOutOfRange { face: 1, index: 7, .. }));
    }

    #[test]
    fn rejects_invalid_utf8_as_content() {
        let err = read_off(Cursor::new(b"OFF\n1 0 0\n0 0 \xff\xfe\n".as_slice())).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.is_format_error());
        assert!(err.to_string().contains("line 3: not valid UTF-8"));
    }

    #[test]
    fn huge_declared_count_fails_as_truncated() {
        let err = read_str("OFF\n18446744073709551615 0 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, IoError::Truncated { found: 1, .. }));
    }

    #[test]
    fn writes_expected_text() {
        let mut out = Vec::new();
        write_off(&create_test_triangle(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n");
    }

    #[test]
    fn writes_shortest_float_repr() {
        let mut mesh = IndexedMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.1, -1.5, 1e-20));

        let mut out = Vec::new();
        write_off(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(2), Some("0.1 -1.5 0.00000000000000000001"));
    }

    #[test]
    fn roundtrip_cube_is_exact() {
        let original = unit_cube();
        let mut out = Vec::new();
        write_off(&original, &mut out).unwrap();

        let loaded = read_off(Cursor::new(out)).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("tri.off");

        let written = save_off(&create_test_triangle(), &path).unwrap();
        assert_eq!(written, path);

        let loaded = load_off(&path).unwrap();
        assert_eq!(loaded, create_test_triangle());
    }

    #[test]
    fn save_into_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.off");
        save_off(&create_test_triangle(), &path).unwrap();
        // Second save overwrites the same output without complaint
        save_off(&create_test_triangle(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = save_off(&create_test_triangle(), blocker.join("tri.off")).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_off("nonexistent_file_12345.off");
        assert!(result.is_err());
        if let Err(IoError::FileNotFound { path }) = result {
            assert!(path.to_string_lossy().contains("nonexistent"));
        }
    }
}
