use anyhow::{Context, Result};
use figure::api::ReplayToken;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a figure dump was generated from.
pub struct Payload {
    pub params: Value,
    pub replays: Vec<Value>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            replays: Vec::new(),
        }
    }

    /// Record one `{seed, index}` entry per emitted figure, in output order.
    pub fn with_replays(mut self, tokens: &[ReplayToken]) -> Self {
        self.replays = tokens
            .iter()
            .map(|t| json!({ "seed": t.seed, "index": t.index }))
            .collect();
        self
    }
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let doc = json!({
        "version": figure::VERSION,
        "code_rev": current_git_rev(),
        "params": payload.params,
        "replay": payload.replays,
        "outputs": [artifact.to_string_lossy()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "figures".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time) or `git rev-parse HEAD`, else `unknown`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
