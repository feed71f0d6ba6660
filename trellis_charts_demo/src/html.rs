// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-file HTML report wrapper around the demo SVGs.

pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut body = String::new();
    for section in sections {
        body.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<p>{}</p>\n{}\n</section>\n",
            section.title, section.description, section.svg
        ));
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 860px; margin: 2em auto; }}
section {{ margin-bottom: 2.5em; }}
h2 {{ border-bottom: 1px solid #ccc; padding-bottom: 0.25em; }}
svg {{ background: #fafafa; border: 1px solid #eee; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}</body>
</html>
"#
    )
}
