use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::codec::file::{FrameFile, decode};
use crate::foundation::core::SpeedLevel;
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::frame::model::FrameSequence;

/// Metadata header of one bundled example, parsed from a small `key=value`
/// text block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleMeta {
    /// Stable identifier of the example.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short description; empty when the block omits it.
    pub description: String,
    /// Suggested playback speed, when declared.
    pub speed: Option<SpeedLevel>,
}

impl ExampleMeta {
    /// Parse a `key=value` metadata block.
    ///
    /// Recognized keys: `id`, `name`, `description`, `speed`. Blank lines,
    /// `#` comments and unknown keys are ignored; `id` and `name` are
    /// required. A non-numeric `speed` is malformed rather than silently
    /// dropped.
    pub fn parse(text: &str) -> BadgeResult<Self> {
        let mut id = None;
        let mut name = None;
        let mut description = String::new();
        let mut speed = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "id" => id = Some(value.to_owned()),
                "name" => name = Some(value.to_owned()),
                "description" => description = value.to_owned(),
                "speed" => {
                    let level: u8 = value.parse().map_err(|_| {
                        BadgeError::malformed_payload(format!(
                            "example metadata declares non-numeric speed '{value}'"
                        ))
                    })?;
                    speed = Some(SpeedLevel(level));
                }
                _ => {}
            }
        }

        let id = id.ok_or_else(|| {
            BadgeError::malformed_payload("example metadata is missing required key 'id'")
        })?;
        let name = name.ok_or_else(|| {
            BadgeError::malformed_payload("example metadata is missing required key 'name'")
        })?;
        Ok(Self {
            id,
            name,
            description,
            speed,
        })
    }
}

/// One entry of the bundle manifest: an id plus paths (relative to the
/// manifest) to the metadata block and the frame-file payload.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ManifestEntry {
    /// Stable identifier; must match the metadata block's `id`.
    pub id: String,
    /// Path to the `key=value` metadata text.
    pub meta: PathBuf,
    /// Path to the frame-file JSON payload.
    pub frames: PathBuf,
}

/// One fully loaded example: metadata plus its decoded frame sequence.
#[derive(Clone, Debug)]
pub struct ExampleAnimation {
    /// Parsed metadata header.
    pub meta: ExampleMeta,
    /// Decoded frames in playback order.
    pub sequence: FrameSequence,
    /// Speed declared inside the frame file, when present (the metadata
    /// block's `speed` takes priority for display).
    pub file_speed: Option<SpeedLevel>,
}

/// A read-only set of bundled example animations.
///
/// IO is front-loaded: `load` reads and decodes everything up front, so
/// lookups afterwards are infallible and allocation-free.
#[derive(Clone, Debug)]
pub struct ExampleBundle {
    examples: Vec<ExampleAnimation>,
}

impl ExampleBundle {
    /// Load every example listed in the JSON manifest at `manifest_path`.
    ///
    /// Entry paths resolve relative to the manifest's directory. Any
    /// unreadable file, mismatched id or undecodable payload fails the whole
    /// load; a partially loaded bundle is never returned.
    #[tracing::instrument]
    pub fn load(manifest_path: &Path) -> BadgeResult<Self> {
        let text = std::fs::read_to_string(manifest_path)
            .with_context(|| format!("read example manifest '{}'", manifest_path.display()))?;
        let entries: Vec<ManifestEntry> = serde_json::from_str(&text)
            .map_err(|e| BadgeError::serde(format!("example manifest is not valid JSON: {e}")))?;
        let root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

        let mut examples = Vec::with_capacity(entries.len());
        for entry in &entries {
            let meta_path = root.join(&entry.meta);
            let meta_text = std::fs::read_to_string(&meta_path)
                .with_context(|| format!("read example metadata '{}'", meta_path.display()))?;
            let meta = ExampleMeta::parse(&meta_text)?;
            if meta.id != entry.id {
                return Err(BadgeError::malformed_payload(format!(
                    "example '{}': metadata block declares id '{}'",
                    entry.id, meta.id
                )));
            }

            let file = FrameFile::from_path(root.join(&entry.frames))?;
            let (sequence, file_speed) = decode(&file)?;
            examples.push(ExampleAnimation {
                meta,
                sequence,
                file_speed,
            });
        }

        Ok(Self { examples })
    }

    /// Loaded examples in manifest order.
    pub fn examples(&self) -> &[ExampleAnimation] {
        &self.examples
    }

    /// Look up one example by its stable id.
    pub fn get(&self, id: &str) -> Option<&ExampleAnimation> {
        self.examples.iter().find(|ex| ex.meta.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bundle.rs"]
mod tests;
