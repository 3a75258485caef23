//! `<package>.gemspec`

use super::{RenderContext, ruby_str};

pub fn render(ctx: &RenderContext) -> String {
    let names = &ctx.names;
    let opts = &ctx.options;
    let package = &names.package_name;
    let repo = format!("https://github.com/{}/{package}", opts.github_user);

    format!(
        r#"# frozen_string_literal: true

require_relative "lib/{require_path}/version"

Gem::Specification.new do |spec|
  spec.name = "{package}"
  spec.version = {module}::VERSION
  spec.authors = [{author}]
  spec.email = [{email}]

  spec.summary = "{module_name} mode for Textbringer"
  spec.description = "A Textbringer plugin that provides {raw} mode support with syntax highlighting."
  spec.homepage = "{repo}"
  spec.license = "{spdx}"
  spec.required_ruby_version = ">= 3.2.0"

  spec.metadata["allowed_push_host"] = "https://rubygems.org"
  spec.metadata["homepage_uri"] = spec.homepage
  spec.metadata["source_code_uri"] = "{repo}"

  gemspec = File.basename(__FILE__)
  spec.files = IO.popen(%w[git ls-files -z], chdir: __dir__, err: IO::NULL) do |ls|
    ls.readlines("\x0", chomp: true).reject do |f|
      (f == gemspec) ||
        f.start_with?(*%w[bin/ Gemfile .gitignore .rspec spec/ .github/])
    end
  end
  spec.bindir = "exe"
  spec.executables = spec.files.grep(%r{{\Aexe/}}) {{ |f| File.basename(f) }}
  spec.require_paths = ["lib"]

  spec.add_dependency "textbringer", ">= 1.0"
end
"#,
        require_path = names.require_path(),
        module = names.qualified_module(),
        module_name = names.module_name,
        raw = names.raw,
        author = ruby_str(&opts.author),
        email = ruby_str(&opts.email),
        spdx = ctx.options.license.spdx_id(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{options::ResolvedOptions, render::test_context, value_objects::LicenseKind};

    fn ctx() -> RenderContext {
        test_context(
            "my-lang",
            ResolvedOptions {
                license: LicenseKind::Mit,
                author: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                github_user: "AdaLovelace".into(),
                ..ResolvedOptions::default()
            },
        )
    }

    #[test]
    fn manifest_names_the_package_and_version_constant() {
        let out = render(&ctx());

        assert!(out.contains("require_relative \"lib/textbringer/my-lang/version\""));
        assert!(out.contains("spec.name = \"textbringer-my-lang\""));
        assert!(out.contains("spec.version = Textbringer::MyLang::VERSION"));
        assert!(out.contains("spec.summary = \"MyLang mode for Textbringer\""));
        assert!(out.contains("provides my-lang mode support"));
    }

    #[test]
    fn manifest_carries_identity_and_license() {
        let out = render(&ctx());

        assert!(out.contains("spec.authors = [\"Ada Lovelace\"]"));
        assert!(out.contains("spec.email = [\"ada@example.com\"]"));
        assert!(out.contains("spec.license = \"MIT\""));
        assert!(out.contains("https://github.com/AdaLovelace/textbringer-my-lang"));
        assert!(out.contains("spec.add_dependency \"textbringer\", \">= 1.0\""));
    }

    #[test]
    fn manifest_keeps_ruby_literals_intact() {
        let out = render(&ctx());

        assert!(out.contains(r#"ls.readlines("\x0", chomp: true)"#));
        assert!(out.contains(r"spec.files.grep(%r{\Aexe/}) { |f| File.basename(f) }"));
    }

    #[test]
    fn packaged_files_exclude_dev_only_paths() {
        let out = render(&ctx());

        assert!(out.contains("f.start_with?(*%w[bin/ Gemfile .gitignore .rspec spec/ .github/])"));
        assert!(!out.contains(" test/ "));
    }

    #[test]
    fn blank_identity_renders_empty_strings() {
        let out = render(&test_context("x", ResolvedOptions::default()));

        assert!(out.contains("spec.authors = [\"\"]"));
        assert!(out.contains("spec.email = [\"\"]"));
        assert!(out.contains("spec.license = \"WTFPL\""));
    }
}
