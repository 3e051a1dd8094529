//! Award model probing.
//!
//! The host renders either the award model file or a procedural placeholder
//! trophy. [`ModelSource::probe`] makes that call up front by checking that
//! the file exists and looks like a glTF asset. It never fails: anything
//! unusable degrades to the placeholder with a logged warning.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// `glTF` in little-endian byte order.
const GLB_MAGIC: [u8; 4] = *b"glTF";
/// Binary container version this viewer understands.
const GLB_VERSION: u32 = 2;
/// Magic, version, total length.
const GLB_HEADER_LEN: u64 = 12;

/// What the host should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A usable glTF model file.
    Model(PathBuf),
    /// The built-in placeholder trophy.
    Placeholder {
        /// Why the model file was not used.
        reason: String,
    },
}

impl ModelSource {
    /// Decide between the model at `path` and the placeholder.
    #[must_use]
    pub fn probe(path: &Path) -> Self {
        match check_model(path) {
            Ok(()) => {
                log::info!("using award model {}", path.display());
                Self::Model(path.to_path_buf())
            }
            Err(reason) => {
                log::warn!(
                    "could not use award model {}: {reason}; showing placeholder trophy",
                    path.display()
                );
                Self::Placeholder { reason }
            }
        }
    }

    /// Whether the placeholder trophy will be shown.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

impl Default for ModelSource {
    fn default() -> Self {
        Self::Placeholder {
            reason: "no model loaded".into(),
        }
    }
}

fn check_model(path: &Path) -> Result<(), String> {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("glb") => check_glb(path),
        Some("gltf") => check_gltf(path),
        Some(other) => Err(format!("unsupported model extension .{other}")),
        None => Err("model path has no extension".into()),
    }
}

fn check_glb(path: &Path) -> Result<(), String> {
    let mut file = File::open(path).map_err(|e| e.to_string())?;
    let file_len = file.metadata().map_err(|e| e.to_string())?.len();

    let mut header = [0u8; 12];
    file.read_exact(&mut header)
        .map_err(|_| format!("file is {file_len} bytes, shorter than a GLB header"))?;
    let [m0, m1, m2, m3, v0, v1, v2, v3, l0, l1, l2, l3] = header;

    if [m0, m1, m2, m3] != GLB_MAGIC {
        return Err("missing glTF magic".into());
    }
    let version = u32::from_le_bytes([v0, v1, v2, v3]);
    if version != GLB_VERSION {
        return Err(format!("unsupported GLB version {version}"));
    }
    let declared = u64::from(u32::from_le_bytes([l0, l1, l2, l3]));
    if declared < GLB_HEADER_LEN || declared > file_len {
        return Err(format!(
            "declared length {declared} does not fit file of {file_len} bytes"
        ));
    }
    Ok(())
}

fn check_gltf(path: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let doc: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("invalid JSON: {e}"))?;
    doc.get("asset")
        .and_then(|asset| asset.get("version"))
        .and_then(serde_json::Value::as_str)
        .map(|_| ())
        .ok_or_else(|| "missing asset.version".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glb_bytes(version: u32, declared: u32, total: usize) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(total);
        bytes.extend_from_slice(b"glTF");
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&declared.to_le_bytes());
        bytes.resize(total, 0);
        bytes
    }

    #[test]
    fn valid_glb_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("award.glb");
        std::fs::write(&path, glb_bytes(2, 64, 64)).unwrap();
        assert_eq!(ModelSource::probe(&path), ModelSource::Model(path.clone()));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let source = ModelSource::probe(&dir.path().join("award.glb"));
        assert!(source.is_placeholder());
    }

    #[test]
    fn corrupt_glb_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let cases = [
            ("short.glb", b"glTF".to_vec()),
            ("magic.glb", {
                let mut b = glb_bytes(2, 16, 16);
                b[0] = b'x';
                b
            }),
            ("version.glb", glb_bytes(1, 16, 16)),
            ("length.glb", glb_bytes(2, 1024, 16)),
        ];
        for (name, bytes) in cases {
            let path = dir.path().join(name);
            std::fs::write(&path, bytes).unwrap();
            assert!(ModelSource::probe(&path).is_placeholder(), "{name}");
        }
    }

    #[test]
    fn gltf_json_needs_asset_version() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.gltf");
        std::fs::write(&good, r#"{"asset":{"version":"2.0"},"scenes":[]}"#).unwrap();
        assert!(!ModelSource::probe(&good).is_placeholder());

        let bad = dir.path().join("bad.GLTF");
        std::fs::write(&bad, r#"{"scenes":[]}"#).unwrap();
        assert!(ModelSource::probe(&bad).is_placeholder());
    }

    #[test]
    fn unknown_extension_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("award.obj");
        std::fs::write(&path, "o trophy").unwrap();
        match ModelSource::probe(&path) {
            ModelSource::Placeholder { reason } => assert!(reason.contains(".obj")),
            ModelSource::Model(_) => panic!("obj accepted"),
        }
    }
}
