//! # TreeForge Shared Content Rules
//!
//! File: cli/src/synth/common.rs
//!
//! ## Overview
//!
//! Rules every plugin inherits. Plugins put their own rules in front of these,
//! so a plugin can override any shared file (its own `package.json` with
//! framework dependencies, for instance) while unrecognized names still get
//! sensible boilerplate.
//!
//! - `BASENAME_RULES`: well-known file names (`package.json`, `README.md`,
//!   `.gitignore`, `LICENSE`, `tsconfig.json`, `next.config.js`, ...)
//! - `EXTENSION_RULES`: one generic generator per extension
//!
//! The JSON helpers (`package_json`, `json_text`) build documents with
//! `serde_json`, so generated JSON is always well formed.
//!
use super::gitignore::gitignore_file;
use super::licenses::license_file;
use super::rule::{self, FileContext, Matcher, Rule};
use crate::core::settings::ProjectSettings;
use serde_json::{json, Map, Value};
use tracing::warn;

/// Extensions handled as JavaScript / TypeScript sources.
pub const SCRIPT_EXTENSIONS: &[&str] = &["ts", "js", "mjs", "cjs"];
/// Extensions handled as React component sources.
pub const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// Serializes `value` as pretty JSON with a trailing newline.
pub fn json_text(file: &FileContext<'_>, value: &Value) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(text) => text + "\n",
        Err(e) => {
            warn!("Failed to serialize JSON for '{}': {}", file.path, e);
            rule::placeholder(file)
        }
    }
}

/// npm-compatible package name: lowercase, whitespace replaced with `-`.
pub fn npm_package_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c.to_ascii_lowercase() })
        .collect();
    if cleaned.is_empty() {
        "app".to_string()
    } else {
        cleaned
    }
}

/// Framework-specific parts of a `package.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageManifest<'a> {
    /// `"type"` field (`"module"`), omitted when `None`.
    pub module_type: Option<&'a str>,
    pub main: Option<&'a str>,
    pub scripts: &'a [(&'a str, &'a str)],
    pub dependencies: &'a [(&'a str, &'a str)],
    pub dev_dependencies: &'a [(&'a str, &'a str)],
}

fn string_map(pairs: &[(&str, &str)]) -> Value {
    Value::Object(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect(),
    )
}

/// Builds `package.json` from the project settings and a manifest.
pub fn package_json(
    file: &FileContext<'_>,
    settings: &ProjectSettings,
    manifest: &PackageManifest<'_>,
) -> String {
    let mut pkg = Map::new();
    pkg.insert("name".into(), json!(npm_package_name(&settings.name)));
    pkg.insert("version".into(), json!("0.1.0"));
    if !settings.description.trim().is_empty() {
        pkg.insert("description".into(), json!(settings.description));
    }
    if settings.private {
        pkg.insert("private".into(), json!(true));
    }
    pkg.insert("license".into(), json!(settings.license.spdx()));
    if !settings.author.trim().is_empty() {
        pkg.insert("author".into(), json!(settings.author));
    }
    if let Some(module_type) = manifest.module_type {
        pkg.insert("type".into(), json!(module_type));
    }
    if let Some(main) = manifest.main {
        pkg.insert("main".into(), json!(main));
    }
    if !manifest.scripts.is_empty() {
        pkg.insert("scripts".into(), string_map(manifest.scripts));
    }
    if !manifest.dependencies.is_empty() {
        pkg.insert("dependencies".into(), string_map(manifest.dependencies));
    }
    if !manifest.dev_dependencies.is_empty() {
        pkg.insert("devDependencies".into(), string_map(manifest.dev_dependencies));
    }
    json_text(file, &Value::Object(pkg))
}

// --- Basename generators ---

fn generic_package_json(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    package_json(
        file,
        settings,
        &PackageManifest {
            main: Some("index.js"),
            scripts: &[
                ("start", "node index.js"),
                ("test", "echo \"Error: no test specified\" && exit 1"),
            ],
            ..Default::default()
        },
    )
}

const README: &str = r#"# {{ name }}

{{ description_text }}

## Getting Started

{% if project_type == "python" %}```bash
python -m venv .venv
source .venv/bin/activate
pip install -r requirements.txt
uvicorn main:app --reload
```{% else %}```bash
npm install
npm run dev
```{% endif %}

## License

{% if license == "none" %}Copyright (c) {{ year }} {{ copyright_holder }}. All rights reserved.{% else %}This project is licensed under the {{ license_name }}. See [LICENSE](LICENSE) for details.{% endif %}
"#;

fn readme(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, README)
}

fn tsconfig_json(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2020",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "outDir": "dist"
        },
        "include": ["src"]
    });
    json_text(file, &config)
}

fn next_config(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    "\
/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
};

module.exports = nextConfig;
"
    .to_string()
}

/// `vercel.json`; the framework preset follows the project type.
pub fn vercel_json(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    let mut config = Map::new();
    config.insert("$schema".into(), json!("https://openapi.vercel.sh/vercel.json"));
    match settings.project_type.as_str() {
        "nextjs" => {
            config.insert("framework".into(), json!("nextjs"));
        }
        "react" => {
            config.insert("framework".into(), json!("vite"));
            config.insert("outputDirectory".into(), json!("dist"));
        }
        _ => {}
    }
    config.insert("cleanUrls".into(), json!(true));
    json_text(file, &Value::Object(config))
}

fn vercelignore(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    "\
node_modules
.env*.local
coverage
*.log
.DS_Store
"
    .to_string()
}

fn env_example(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(
        file,
        settings,
        "# Environment variables for {{ name }}\n# Copy to .env.local and fill in real values.\n\nAPP_NAME={{ name }}\nAPI_URL=http://localhost:3000\n",
    )
}

fn editorconfig(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    "\
root = true

[*]
charset = utf-8
end_of_line = lf
indent_style = space
indent_size = 2
insert_final_newline = true
trim_trailing_whitespace = true
"
    .to_string()
}

fn prettierrc(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    json_text(
        file,
        &json!({ "semi": true, "singleQuote": true, "trailingComma": "es5", "printWidth": 100 }),
    )
}

fn eslintrc(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    let extends = match settings.project_type.as_str() {
        "nextjs" => json!(["next/core-web-vitals"]),
        "react" => json!(["eslint:recommended", "plugin:react/recommended"]),
        _ => json!(["eslint:recommended"]),
    };
    json_text(file, &json!({ "root": true, "extends": extends }))
}

fn dockerfile(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(
        file,
        settings,
        "\
FROM node:20-alpine
WORKDIR /app

COPY package*.json ./
RUN npm ci

COPY . .
RUN npm run build --if-present

EXPOSE 3000
CMD [\"npm\", \"start\"]
",
    )
}

fn docker_compose(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(
        file,
        settings,
        "\
services:
  {{ project_name_snake }}:
    build: .
    ports:
      - \"3000:3000\"
    env_file:
      - .env
",
    )
}

fn requirements_txt(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, "# Python dependencies for {{ name }}\n")
}

/// Well-known file names shared by every plugin.
pub const BASENAME_RULES: &[Rule] = &[
    Rule::new("package.json", Matcher::Basename("package.json"), generic_package_json),
    Rule::new("readme", Matcher::AnyBasename(&["README.md", "README"]), readme),
    Rule::new(".gitignore", Matcher::Basename(".gitignore"), gitignore_file),
    Rule::new(
        "license",
        Matcher::AnyBasename(&["LICENSE", "LICENSE.md", "LICENSE.txt"]),
        license_file,
    ),
    Rule::new("tsconfig.json", Matcher::Basename("tsconfig.json"), tsconfig_json),
    Rule::new(
        "next.config",
        Matcher::AnyBasename(&["next.config.js", "next.config.mjs"]),
        next_config,
    ),
    Rule::new("vercel.json", Matcher::Basename("vercel.json"), vercel_json),
    Rule::new(".vercelignore", Matcher::Basename(".vercelignore"), vercelignore),
    Rule::new(
        "env",
        Matcher::AnyBasename(&[".env", ".env.example", ".env.local"]),
        env_example,
    ),
    Rule::new(".editorconfig", Matcher::Basename(".editorconfig"), editorconfig),
    Rule::new(".prettierrc", Matcher::AnyBasename(&[".prettierrc", ".prettierrc.json"]), prettierrc),
    Rule::new(".eslintrc", Matcher::AnyBasename(&[".eslintrc", ".eslintrc.json"]), eslintrc),
    Rule::new("Dockerfile", Matcher::Basename("Dockerfile"), dockerfile),
    Rule::new(
        "docker-compose",
        Matcher::AnyBasename(&["docker-compose.yml", "docker-compose.yaml", "compose.yml"]),
        docker_compose,
    ),
    Rule::new("requirements.txt", Matcher::Basename("requirements.txt"), requirements_txt),
];

// --- Extension generators ---

const COMPONENT: &str = r#"{% if typescript %}import type { ReactNode } from 'react';

interface {{ component_name }}Props {
  className?: string;
  children?: ReactNode;
}

export default function {{ component_name }}({ className = '', children }: {{ component_name }}Props) {
{% else %}export default function {{ component_name }}({ className = '', children }) {
{% endif %}  return (
    <div className={className}>
      <h2>{{ component_name }}</h2>
      {children}
    </div>
  );
}
"#;

/// Generic React component named after the file stem.
pub fn component(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, COMPONENT)
}

fn script_module(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(
        file,
        settings,
        "/**\n * {{ file_name }}\n *\n * Part of {{ name }}.\n */\n\nexport default {};\n",
    )
}

fn stylesheet(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(
        file,
        settings,
        "/* {{ file_name }}: styles for {{ name }} */\n\n.container {\n  max-width: 1200px;\n  margin: 0 auto;\n  padding: 0 1rem;\n}\n",
    )
}

fn markdown(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, "# {{ file_stem }}\n\nDocumentation for {{ name }}.\n")
}

fn json_document(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    "{}\n".to_string()
}

fn html_document(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(
        file,
        settings,
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ name }}</title>
  </head>
  <body>
    <h1>{{ name }}</h1>
    <p>{{ description_text }}</p>
  </body>
</html>
"#,
    )
}

fn python_module(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, "\"\"\"{{ file_name }}: part of {{ name }}.\"\"\"\n")
}

fn yaml_document(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    format!("# {}\n", file.basename)
}

fn shell_script(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    format!(
        "#!/usr/bin/env bash\nset -euo pipefail\n\necho \"Running {}\"\n",
        file.basename
    )
}

fn sql_script(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    format!("-- {}\n", file.basename)
}

fn svg_image(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\"><title>{}</title><circle cx=\"12\" cy=\"12\" r=\"10\" fill=\"currentColor\"/></svg>\n",
        file.stem
    )
}

fn text_file(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    format!("{}\n", file.stem)
}

/// One generic generator per extension, consulted after every basename rule.
pub const EXTENSION_RULES: &[Rule] = &[
    Rule::new("component", Matcher::Extension(COMPONENT_EXTENSIONS), component),
    Rule::new("script", Matcher::Extension(SCRIPT_EXTENSIONS), script_module),
    Rule::new("stylesheet", Matcher::Extension(&["css", "scss", "sass", "less"]), stylesheet),
    Rule::new("markdown", Matcher::Extension(&["md", "mdx"]), markdown),
    Rule::new("json", Matcher::Extension(&["json"]), json_document),
    Rule::new("html", Matcher::Extension(&["html", "htm"]), html_document),
    Rule::new("python", Matcher::Extension(&["py"]), python_module),
    Rule::new("yaml", Matcher::Extension(&["yml", "yaml", "toml"]), yaml_document),
    Rule::new("shell", Matcher::Extension(&["sh"]), shell_script),
    Rule::new("sql", Matcher::Extension(&["sql"]), sql_script),
    Rule::new("svg", Matcher::Extension(&["svg"]), svg_image),
    Rule::new("text", Matcher::Extension(&["txt"]), text_file),
    Rule::new("dotfile", Matcher::Dotfile, rule::dotfile_comment),
];
