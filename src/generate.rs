//! Descriptor-to-file pipeline used by the command-line tool.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::descriptor::Descriptor;
use crate::emitter::{ConfigEmitter, Emission, PLUGIN_XML_PATH, render_document};
use crate::sink::DirSink;

/// Load, merge and validate descriptors, returning them with any warnings.
pub fn check<P: AsRef<Path>>(paths: &[P]) -> Result<(Descriptor, Vec<String>)> {
    let descriptor = Descriptor::load_all(paths)?;
    descriptor.validate()?;
    let warnings = descriptor.warnings();
    Ok((descriptor, warnings))
}

/// Load, merge and validate descriptors, logging any warnings.
pub fn load_checked<P: AsRef<Path>>(paths: &[P]) -> Result<Descriptor> {
    let (descriptor, warnings) = check(paths)?;

    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    Ok(descriptor)
}

/// Generate `META-INF/plugin.xml` below `output_dir`.
pub fn generate_to_dir<P: AsRef<Path>>(paths: &[P], output_dir: &Path) -> Result<Emission> {
    let descriptor = load_checked(paths)?;

    let mut emitter = ConfigEmitter::new(DirSink::new(output_dir));
    let emission = emitter
        .emit(descriptor.plugin.as_ref(), &descriptor.actions)
        .with_context(|| format!("Failed to generate {}", PLUGIN_XML_PATH))?;

    Ok(emission)
}

/// Render the document without writing it; `None` without a plugin record.
pub fn render<P: AsRef<Path>>(paths: &[P]) -> Result<Option<String>> {
    let descriptor = load_checked(paths)?;
    Ok(render_document(descriptor.plugin.as_ref(), &descriptor.actions)?)
}

/// Absolute location of the generated file for `output_dir`.
pub fn output_path(output_dir: &Path) -> PathBuf {
    output_dir.join(PLUGIN_XML_PATH)
}
