//! Commit and date stamped in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `lakeside <date> (<commit>)`, as printed by `--version`.
pub fn version_line() -> String {
    format!("lakeside {} ({})", BUILD_DATE, BUILD_COMMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_carries_build_stamp() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(version_line().starts_with("lakeside "));
        assert!(version_line().contains(BUILD_COMMIT));
    }
}
