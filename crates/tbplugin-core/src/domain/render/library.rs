//! Library sources: the version module, the mode class and the plugin entry.

use super::RenderContext;
use crate::domain::names::HOST_NAMESPACE;

/// Initial version of every generated gem.
pub const INITIAL_VERSION: &str = "0.1.0";

/// `lib/textbringer/<raw>/version.rb`
pub fn render_version(ctx: &RenderContext) -> String {
    format!(
        r#"# frozen_string_literal: true

module {HOST_NAMESPACE}
  module {module}
    VERSION = "{INITIAL_VERSION}"
  end
end
"#,
        module = ctx.names.module_name,
    )
}

/// `lib/textbringer/<raw>.rb`: the mode class skeleton.
pub fn render_main(ctx: &RenderContext) -> String {
    let names = &ctx.names;
    format!(
        r#"# frozen_string_literal: true

require_relative "{raw}/version"

module {HOST_NAMESPACE}
  # Define faces for syntax elements
  # Face.define :{snake}_keyword, foreground: "cyan", bold: true
  # Face.define :{snake}_string, foreground: "green"
  # Face.define :{snake}_comment, foreground: "yellow"

  class {mode} < Mode
    self.file_name_pattern = /\.{raw}\z/i

    # Define syntax highlighting rules
    # define_syntax :{snake}_keyword, /\b(?:if|else|end)\b/
    # define_syntax :{snake}_string, /"(?:[^"\\]|\\.)*"/
    # define_syntax :{snake}_comment, /#.*$/

    def initialize(buffer)
      super(buffer)
      @buffer[:indent_tabs_mode] = false
      @buffer[:tab_width] = 2
    end
  end
end
"#,
        raw = names.raw,
        snake = names.snake_name,
        mode = names.mode_class_name,
    )
}

/// `lib/textbringer_plugin.rb`, the file Textbringer loads plugins through.
pub fn render_plugin_entry(ctx: &RenderContext) -> String {
    format!(
        "# frozen_string_literal: true\n\nrequire \"{}\"\n",
        ctx.names.require_path()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{options::ResolvedOptions, render::test_context};

    fn ctx() -> RenderContext {
        test_context("my-lang", ResolvedOptions::default())
    }

    #[test]
    fn version_module_nests_under_host() {
        let out = render_version(&ctx());
        assert!(out.contains("module Textbringer\n  module MyLang\n"));
        assert!(out.contains("VERSION = \"0.1.0\""));
    }

    #[test]
    fn main_module_defines_mode_class() {
        let out = render_main(&ctx());
        assert!(out.contains("require_relative \"my-lang/version\""));
        assert!(out.contains("class MyLangMode < Mode"));
        assert!(out.contains(r"self.file_name_pattern = /\.my-lang\z/i"));
        assert!(out.contains("@buffer[:tab_width] = 2"));
        assert!(out.contains("# Face.define :my_lang_keyword"));
    }

    #[test]
    fn plugin_entry_requires_main_file() {
        assert_eq!(
            render_plugin_entry(&ctx()),
            "# frozen_string_literal: true\n\nrequire \"textbringer/my-lang\"\n"
        );
    }
}
