//! Command implementations.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use mesh_augment::{
    ApplyResponse, AugmentParams, Augmenter, Category, Operation, apply_with, is_error, public_url,
};
use mesh_io::load_off;
use mesh_transform::{centroid, extent};
use mesh_types::MeshTopology;
use serde::Serialize;

/// Run one operation. The exit code is 1 when the result is an error message.
pub fn apply(
    operation: &str,
    path: &Path,
    seed: Option<u64>,
    noise_fraction: f64,
    public_prefix: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let mut params = AugmentParams::new().with_noise_fraction(noise_fraction);
    if let Some(seed) = seed {
        params = params.with_seed(seed);
    }

    let mut output = apply_with(&Augmenter::new(params), operation, path);
    if let Some(prefix) = public_prefix {
        output = public_url(&output, prefix);
    }
    let failed = is_error(&output);

    if json {
        println!("{}", serde_json::to_string_pretty(&ApplyResponse::mesh(output))?);
    } else {
        println!("{output}");
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[derive(Serialize)]
struct OperationList {
    preprocess_options: Vec<Operation>,
    augmentation_options: Vec<Operation>,
}

/// Print the supported operations grouped by category.
pub fn list(json: bool) -> Result<()> {
    let of = |category: Category| {
        Operation::ALL
            .into_iter()
            .filter(|op| op.category() == category)
            .collect::<Vec<_>>()
    };
    let listing = OperationList {
        preprocess_options: of(Category::Preprocessing),
        augmentation_options: of(Category::Augmentation),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for (category, ops) in [
        (Category::Preprocessing, &listing.preprocess_options),
        (Category::Augmentation, &listing.augmentation_options),
    ] {
        println!("{}:", category.name());
        for op in ops {
            println!("  {:<14} -> {}_<name>", op.name(), op.prefix());
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct InspectReport {
    path: String,
    vertices: usize,
    faces: usize,
    extent: f64,
    centroid: Option<[f64; 3]>,
}

/// Print a summary of an OFF file.
pub fn inspect(path: &Path, json: bool) -> Result<()> {
    let mesh = load_off(path).with_context(|| format!("failed to load {}", path.display()))?;
    let positions = mesh.positions();
    let report = InspectReport {
        path: path.display().to_string(),
        vertices: mesh.vertex_count(),
        faces: mesh.face_count(),
        extent: extent(&positions),
        centroid: centroid(&positions).map(|c| [c.x, c.y, c.z]),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.path);
    println!("  vertices: {}", report.vertices);
    println!("  faces:    {}", report.faces);
    println!("  extent:   {}", report.extent);
    match report.centroid {
        Some([x, y, z]) => println!("  centroid: {x} {y} {z}"),
        None => println!("  centroid: -"),
    }
    Ok(())
}
