use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BUNDLE_ENV: &str = "PHARMALEDGER_FRONTEND_BUNDLE";
const DEFAULT_BUNDLE: &str = "../frontend/dist";
const EMBED_DIR: &str = "static/dist";

/// Mirrors the trunk output into `static/dist` for `include_dir!`. The
/// directory is always created so the host builds before the frontend does.
fn main() -> io::Result<()> {
    let bundle = env::var_os(BUNDLE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE));
    let embed = Path::new(EMBED_DIR);

    refresh(&bundle, embed)?;

    println!("cargo:rerun-if-env-changed={BUNDLE_ENV}");
    println!("cargo:rerun-if-changed={}", bundle.display());
    Ok(())
}

fn refresh(bundle: &Path, embed: &Path) -> io::Result<()> {
    if embed.exists() {
        fs::remove_dir_all(embed)?;
    }
    fs::create_dir_all(embed)?;

    if !bundle.join("index.html").is_file() {
        println!(
            "cargo:warning=no frontend bundle at {}; the host will embed an empty site",
            bundle.display()
        );
        return Ok(());
    }

    let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .content_only(true);
    fs_extra::dir::copy(bundle, embed, &options).map_err(io::Error::other)?;
    Ok(())
}
