//! Compresses every file under `templates/` and generates the embedded asset table.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEMPLATE_DIR: &str = "templates";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let template_root = manifest_dir.join(TEMPLATE_DIR);

    println!("cargo:rerun-if-changed={TEMPLATE_DIR}/");

    let mut files = Vec::new();
    collect_files(&template_root, &mut files);
    files.sort();

    let mut entries = String::new();
    for path in &files {
        let key = asset_key(&template_root, path);
        let raw = fs::read(path).expect("Failed to read template");

        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&raw).expect("Failed to compress template");
        let compressed = encoder.finish().expect("Failed to finish compression");

        let gz_path = out_dir.join("assets").join(format!("{key}.gz"));
        if let Some(parent) = gz_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create asset output dir");
        }
        fs::write(&gz_path, compressed).expect("Failed to write compressed template");

        entries.push_str(&format!(
            "    EmbeddedAsset::new({key:?}, {}, include_bytes!({:?})),\n",
            raw.len(),
            gz_path.display().to_string()
        ));
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let table = format!(
        "static EMBEDDED: [EmbeddedAsset; {}] = [\n{entries}];\n",
        files.len()
    );
    fs::write(out_dir.join("embedded_assets.rs"), table).expect("Failed to write asset table");
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, files);
        } else if path.is_file() {
            files.push(path);
        }
    }
}

/// Key used at runtime: the path relative to `templates/`, `/`-separated.
fn asset_key(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
