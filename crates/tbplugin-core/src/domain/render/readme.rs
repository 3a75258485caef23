use super::RenderContext;

/// `README.md` with install, usage, development and license sections.
pub fn render(ctx: &RenderContext) -> String {
    let names = &ctx.names;
    let opts = &ctx.options;
    let package = &names.package_name;

    format!(
        r#"# {title}

A Textbringer plugin that provides {raw} mode support.

## Installation

Install the gem by executing:

```bash
gem install {package}
```

Or add it to your Gemfile:

```bash
bundle add {package}
```

## Usage

The plugin is loaded automatically when Textbringer starts. Open any `.{raw}` file and the mode is applied.

No additional configuration is required.

## Development

After checking out the repo, run `bundle install` to install dependencies. Then, run `rake {task}` to run the tests.

To install this gem onto your local machine, run `bundle exec rake install`.

## Contributing

Bug reports and pull requests are welcome on GitHub at https://github.com/{github_user}/{package}.

## License

The gem is available as open source under the terms of the [{license_name}]({license_url}).
"#,
        title = names.display_title(),
        raw = names.raw,
        task = opts.test_framework.rake_task(),
        github_user = opts.github_user,
        license_name = opts.license.display_name(),
        license_url = opts.license.url(),
    )
}
