use anyhow::{Context, Result};
use compass::{CompassCfg, Frame, PointerEvent};
use std::fs;
use std::path::Path;

/// Load a JSON config; `None` means defaults. Always validated.
pub fn load_config(path: Option<&Path>) -> Result<CompassCfg> {
    let cfg = match path {
        Some(p) => {
            let bytes = fs::read(p).with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => CompassCfg::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Load a JSON array of pointer events.
pub fn load_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let bytes = fs::read(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing script {}", path.display()))
}

/// Write frames as pretty JSON to `out`, or stdout when `None`.
pub fn write_frames(out: Option<&Path>, frames: &[Frame]) -> Result<()> {
    let body = serde_json::to_vec_pretty(frames)?;
    match out {
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(p, body).with_context(|| format!("writing {}", p.display()))?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}
