use super::RenderContext;

/// `Gemfile`: development dependencies, including the chosen test framework.
pub fn render(ctx: &RenderContext) -> String {
    format!(
        r#"# frozen_string_literal: true

source "https://rubygems.org"

gemspec

gem "irb"
gem "rake", "~> 13.0"
gem "{}"
"#,
        ctx.options.test_framework.gem()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        options::ResolvedOptions, render::test_context, value_objects::TestFramework,
    };

    #[test]
    fn gemfile_lists_the_framework_gem() {
        for (fw, gem) in [
            (TestFramework::TestUnit, "gem \"test-unit\""),
            (TestFramework::Minitest, "gem \"minitest\""),
            (TestFramework::Rspec, "gem \"rspec\""),
        ] {
            let out = render(&test_context(
                "x",
                ResolvedOptions {
                    test_framework: fw,
                    ..ResolvedOptions::default()
                },
            ));
            assert!(out.contains(gem), "{fw}");
            assert!(out.contains("gem \"rake\", \"~> 13.0\""));
            assert!(out.starts_with("# frozen_string_literal: true\n"));
        }
    }
}
