use super::RenderContext;
use crate::domain::value_objects::TestFramework;

/// `Rakefile` whose default task runs the generated suite.
pub fn render(ctx: &RenderContext) -> String {
    match ctx.options.test_framework {
        TestFramework::TestUnit | TestFramework::Minitest => r#"# frozen_string_literal: true

require "bundler/gem_tasks"
require "rake/testtask"

Rake::TestTask.new(:test) do |t|
  t.libs << "test"
  t.libs << "lib"
  t.test_files = FileList["test/**/*_test.rb"]
end

task default: :test
"#
        .to_string(),
        TestFramework::Rspec => r#"# frozen_string_literal: true

require "bundler/gem_tasks"
require "rspec/core/rake_task"

RSpec::Core::RakeTask.new(:spec)

task default: :spec
"#
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{options::ResolvedOptions, render::test_context};

    fn render_for(fw: TestFramework) -> String {
        render(&test_context(
            "x",
            ResolvedOptions {
                test_framework: fw,
                ..ResolvedOptions::default()
            },
        ))
    }

    #[test]
    fn test_task_globs_test_files() {
        for fw in [TestFramework::TestUnit, TestFramework::Minitest] {
            let out = render_for(fw);
            assert!(out.contains("Rake::TestTask.new(:test)"));
            assert!(out.contains(r#"FileList["test/**/*_test.rb"]"#));
            assert!(out.contains("task default: :test"));
        }
    }

    #[test]
    fn rspec_uses_spec_task() {
        let out = render_for(TestFramework::Rspec);
        assert!(out.contains("RSpec::Core::RakeTask.new(:spec)"));
        assert!(out.contains("task default: :spec"));
        assert!(!out.contains("TestTask"));
    }
}
