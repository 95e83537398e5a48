use contracts::content::THUMBNAILS;
use std::path::Path;

const INDEX: &str = "/index.html";

/// Site-root paths the page needs that are absent from `dist_dir`.
///
/// A missing file is not fatal: `ServeDir` answers 404 and the page renders
/// without it.
pub fn missing_assets(dist_dir: &Path) -> Vec<&'static str> {
    std::iter::once(INDEX)
        .chain(THUMBNAILS.iter().map(|thumbnail| thumbnail.src))
        .filter(|path| !dist_dir.join(path.trim_start_matches('/')).is_file())
        .collect()
}
