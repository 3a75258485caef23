use super::RenderContext;

const IGNORED: &[&str] = &[
    "/.bundle/",
    "/.yardoc",
    "/_yardoc/",
    "/coverage/",
    "/doc/",
    "/pkg/",
    "/spec/reports/",
    "/tmp/",
    "",
    "# Bundler lockfile for gems",
    "Gemfile.lock",
    "",
    "# Local tool settings",
    ".claude/",
];

/// `.gitignore`; identical for every package.
pub fn render(_ctx: &RenderContext) -> String {
    let mut out = IGNORED.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{options::ResolvedOptions, render::test_context};

    #[test]
    fn ignores_build_output_and_lockfile() {
        let out = render(&test_context("x", ResolvedOptions::default()));

        assert!(out.lines().any(|l| l == "/pkg/"));
        assert!(out.lines().any(|l| l == "Gemfile.lock"));
        assert!(out.ends_with(".claude/\n"));
    }
}
