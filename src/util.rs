use std::path::{Path, PathBuf};

/// a path under this crate's manifest directory
pub fn manifest_path<I, P>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.extend(segments);
    path
}

/// joins segments into a relative path using the platform separator
pub fn relative_path<I, P>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    segments.into_iter().collect()
}

/// Installs pretty_env_logger at `info` level; `RUST_LOG` still takes precedence.
pub fn init_logging() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_joins_segments() {
        let path = relative_path(["src", "sigogl", "gl_predef_shaders.inc"]);

        assert!(path.is_relative());
        assert_eq!(
            path.components().count(),
            3,
            "unexpected components in {path:?}"
        );
        assert!(path.ends_with("sigogl/gl_predef_shaders.inc"));
    }

    #[test]
    fn manifest_path_is_rooted_at_the_crate() {
        let path = manifest_path(["Cargo.toml"]);

        assert!(path.is_absolute());
        assert!(path.exists());
    }
}
