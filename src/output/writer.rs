use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tokio::fs;
use tracing::{debug, warn};

use crate::config::OutputConfig;
use crate::error::{OutputError, Result};
use crate::transcoder::SceneDocument;

/// Summary of a completed artifact write
#[derive(Debug, Clone)]
pub struct WriteReport {
    /// Path of the scene JSON document
    pub scene_path: PathBuf,

    /// Paths of the extracted image files, in write order
    pub image_paths: Vec<PathBuf>,

    /// Serialized size of the scene document in bytes
    pub json_bytes: usize,
}

/// Writes scene documents and their extracted images to disk.
///
/// Writes are not atomic across files: if an image write fails after earlier
/// files landed, the error reports exactly what was written and what failed
/// so the caller can decide whether to treat it as fatal.
pub struct ArtifactWriter {
    config: OutputConfig,
}

impl ArtifactWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write `<out_dir>/<name>.json` and one `<out_dir>/<key>.png` per
    /// image, creating the destination directory if absent.
    pub async fn write(
        &self,
        scene: &SceneDocument,
        out_dir: &Path,
        name: &str,
    ) -> Result<WriteReport> {
        fs::create_dir_all(out_dir).await.map_err(|_| OutputError::DirectoryCreateFailed {
            path: out_dir.display().to_string(),
        })?;

        let json = if self.config.pretty {
            serde_json::to_vec_pretty(scene)
        } else {
            serde_json::to_vec(scene)
        }
        .map_err(|e| OutputError::ArtifactWriteFailed {
            path: format!("{}.json", name),
            reason: e.to_string(),
        })?;

        let scene_path = out_dir.join(format!("{}.json", name));
        fs::write(&scene_path, &json).await.map_err(|e| OutputError::ArtifactWriteFailed {
            path: scene_path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %scene_path.display(), bytes = json.len(), "wrote scene document");

        let mut written = vec![scene_path.clone()];
        let mut failed: Vec<(PathBuf, String)> = Vec::new();

        if self.config.write_images {
            // BTreeMap keys give a stable write order
            for (key, encoded) in &scene.images {
                let image_path = out_dir.join(format!("{}.png", key));

                let bytes = match BASE64.decode(encoded) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        failed.push((image_path, format!("invalid base64 payload: {}", e)));
                        continue;
                    }
                };

                if image::guess_format(&bytes).map(|f| f != image::ImageFormat::Png).unwrap_or(true)
                {
                    warn!(key = %key, "image payload does not look like PNG, writing as-is");
                }

                match fs::write(&image_path, &bytes).await {
                    Ok(()) => written.push(image_path),
                    Err(e) => failed.push((image_path, e.to_string())),
                }
            }
        }

        if !failed.is_empty() {
            return Err(OutputError::PartialWrite { written, failed }.into());
        }

        Ok(WriteReport {
            scene_path,
            image_paths: written.split_off(1),
            json_bytes: json.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::tempdir;

    use super::*;
    use crate::transcoder::SceneSize;

    // Smallest valid PNG signature prefix for format sniffing
    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    fn scene_with_images(images: BTreeMap<String, String>) -> SceneDocument {
        SceneDocument {
            version: "2.0".to_string(),
            size: SceneSize { width: 10.0, height: 10.0 },
            fps: 20,
            frames: 1,
            images,
            replace_elements: BTreeMap::new(),
            dynamic_elements: BTreeMap::new(),
            sprites: vec![],
        }
    }

    #[tokio::test]
    async fn writes_scene_and_images() {
        let dir = tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("out");

        let images =
            [("img0".to_string(), BASE64.encode(PNG_MAGIC))].into_iter().collect();
        let scene = scene_with_images(images);

        let writer = ArtifactWriter::new(OutputConfig::default());
        let report = writer.write(&scene, &out_dir, "anim").await.unwrap();

        assert_eq!(report.scene_path, out_dir.join("anim.json"));
        assert_eq!(report.image_paths, vec![out_dir.join("img0.png")]);

        // Image bytes land raw, not re-encoded
        let bytes = std::fs::read(out_dir.join("img0.png")).unwrap();
        assert_eq!(bytes, PNG_MAGIC);

        // Scene JSON round-trips
        let json = std::fs::read(out_dir.join("anim.json")).unwrap();
        assert_eq!(json.len(), report.json_bytes);
        let loaded: SceneDocument = serde_json::from_slice(&json).unwrap();
        assert_eq!(loaded, scene);
    }

    #[tokio::test]
    async fn write_images_can_be_disabled() {
        let dir = tempdir().unwrap();

        let images =
            [("img0".to_string(), BASE64.encode(PNG_MAGIC))].into_iter().collect();
        let scene = scene_with_images(images);

        let config = OutputConfig { write_images: false, ..Default::default() };
        let report = ArtifactWriter::new(config).write(&scene, dir.path(), "anim").await.unwrap();

        assert!(report.image_paths.is_empty());
        assert!(!dir.path().join("img0.png").exists());
        assert!(dir.path().join("anim.json").exists());
    }

    #[tokio::test]
    async fn invalid_image_payload_reports_partial_write() {
        let dir = tempdir().unwrap();

        let images = [
            ("bad".to_string(), "!!!not-base64!!!".to_string()),
            ("good".to_string(), BASE64.encode(PNG_MAGIC)),
        ]
        .into_iter()
        .collect();
        let scene = scene_with_images(images);

        let err = ArtifactWriter::new(OutputConfig::default())
            .write(&scene, dir.path(), "anim")
            .await
            .unwrap_err();

        match err {
            crate::error::SvgaError::Output(OutputError::PartialWrite { written, failed }) => {
                // The scene document and the good image were written
                assert!(written.contains(&dir.path().join("anim.json")));
                assert!(written.contains(&dir.path().join("good.png")));
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].0, dir.path().join("bad.png"));
            }
            other => panic!("expected PartialWrite, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn pretty_output_is_larger_than_compact() {
        let dir = tempdir().unwrap();
        let scene = scene_with_images(BTreeMap::new());

        let compact = ArtifactWriter::new(OutputConfig::default())
            .write(&scene, dir.path(), "compact")
            .await
            .unwrap();
        let pretty = ArtifactWriter::new(OutputConfig { pretty: true, ..Default::default() })
            .write(&scene, dir.path(), "pretty")
            .await
            .unwrap();

        assert!(pretty.json_bytes > compact.json_bytes);
    }
}
