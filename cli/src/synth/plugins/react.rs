//! # React Plugin
//!
//! File: cli/src/synth/plugins/react.rs
//!
//! Single-page React applications built with Vite. `main`/`index` entry
//! points and `App` are recognized by name; other components share the
//! frontend templates with the Next.js plugin, dispatched in this order:
//! `button`, `navbar`, `header`, `footer`, `hero`, `pricing`, `product`,
//! `cart`, `stats`, `chart`, `sidebar`, `card`.
//!
use super::frontend;
use crate::core::settings::ProjectSettings;
use crate::synth::common::{self, PackageManifest, COMPONENT_EXTENSIONS, SCRIPT_EXTENSIONS};
use crate::synth::rule::{self, FileContext, Matcher, Rule};
use crate::synth::{compose, Plugin};
use serde_json::json;

const ENTRY: &str = r#"import { StrictMode } from 'react';
import { createRoot } from 'react-dom/client';
import App from './App';
import './index.css';

createRoot(document.getElementById('root'){% if typescript %}!{% endif %}).render(
  <StrictMode>
    <App />
  </StrictMode>,
);
"#;

const APP: &str = r#"import { useState } from 'react';

export default function App() {
  const [count, setCount] = useState(0);

  return (
    <main className="app">
      <h1>{{ name }}</h1>
      <p>{{ description_text }}</p>
      <button onClick={() => setCount((c) => c + 1)}>Clicked {count} times</button>
    </main>
  );
}
"#;

const NAVBAR: &str = r#"const links = [
  { href: '#home', label: 'Home' },
  { href: '#features', label: 'Features' },
  { href: '#contact', label: 'Contact' },
];

export default function {{ component_name }}() {
  return (
    <header className="navbar">
      <a href="/" className="brand">
        {{ name }}
      </a>
      <nav>
        {links.map((link) => (
          <a key={link.href} href={link.href}>
            {link.label}
          </a>
        ))}
      </nav>
    </header>
  );
}
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ name }}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const VITE_CONFIG: &str = "\
import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  server: {
    port: 5173,
  },
});
";

const BASE_CSS: &str = "\
:root {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.5;
  color: #213547;
  background-color: #ffffff;
}

body {
  margin: 0;
  min-height: 100vh;
}

.app {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem;
}
";

fn package_json(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    common::package_json(
        file,
        settings,
        &PackageManifest {
            module_type: Some("module"),
            scripts: &[
                ("dev", "vite"),
                ("build", "tsc -b && vite build"),
                ("preview", "vite preview"),
            ],
            dependencies: &[("react", "^18.3.0"), ("react-dom", "^18.3.0")],
            dev_dependencies: &[
                ("@types/react", "^18.3.0"),
                ("@types/react-dom", "^18.3.0"),
                ("@vitejs/plugin-react", "^4.3.0"),
                ("typescript", "^5.4.0"),
                ("vite", "^5.2.0"),
            ],
            ..Default::default()
        },
    )
}

fn tsconfig_json(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2020",
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "moduleResolution": "bundler",
            "jsx": "react-jsx",
            "strict": true,
            "noEmit": true,
            "isolatedModules": true,
            "skipLibCheck": true
        },
        "include": ["src"]
    });
    common::json_text(file, &config)
}

fn index_html(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, INDEX_HTML)
}

fn vite_config(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    VITE_CONFIG.to_string()
}

fn entry(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, ENTRY)
}

fn app(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, APP)
}

fn navbar(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, NAVBAR)
}

fn base_css(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    BASE_CSS.to_string()
}

const fn on_component(needle: &'static str) -> Matcher {
    Matcher::ExtensionContains {
        extensions: COMPONENT_EXTENSIONS,
        needle,
    }
}

const BASENAME_RULES: &[Rule] = &[
    Rule::new("react package.json", Matcher::Basename("package.json"), package_json),
    Rule::new("react tsconfig.json", Matcher::Basename("tsconfig.json"), tsconfig_json),
    Rule::new("index.html", Matcher::Basename("index.html"), index_html),
    Rule::new(
        "vite.config",
        Matcher::AnyBasename(&["vite.config.ts", "vite.config.js"]),
        vite_config,
    ),
    Rule::new(
        "entry point",
        Matcher::AnyBasename(&["main.tsx", "main.jsx", "index.tsx", "index.jsx"]),
        entry,
    ),
    Rule::new("App", Matcher::AnyBasename(&["App.tsx", "App.jsx"]), app),
    Rule::new(
        "base css",
        Matcher::AnyBasename(&["index.css", "App.css"]),
        base_css,
    ),
];

const EXTENSION_RULES: &[Rule] = &[
    Rule::new("button", on_component("button"), frontend::button),
    Rule::new("navbar", on_component("navbar"), navbar),
    Rule::new("header", on_component("header"), navbar),
    Rule::new("footer", on_component("footer"), frontend::footer),
    Rule::new("hero", on_component("hero"), frontend::hero),
    Rule::new("pricing", on_component("pricing"), frontend::pricing),
    Rule::new("product", on_component("product"), frontend::product),
    Rule::new("cart", on_component("cart"), frontend::cart),
    Rule::new("stats", on_component("stats"), frontend::stats),
    Rule::new("chart", on_component("chart"), frontend::chart),
    Rule::new("sidebar", on_component("sidebar"), frontend::sidebar),
    Rule::new("card", on_component("card"), frontend::card),
    Rule::new(
        "api client",
        Matcher::ExtensionContains {
            extensions: SCRIPT_EXTENSIONS,
            needle: "api",
        },
        frontend::api_client,
    ),
    Rule::new(
        "utils",
        Matcher::ExtensionContains {
            extensions: SCRIPT_EXTENSIONS,
            needle: "utils",
        },
        frontend::utils,
    ),
    Rule::new(
        "types",
        Matcher::ExtensionContains {
            extensions: &["ts"],
            needle: "types",
        },
        frontend::types,
    ),
];

/// React + Vite single-page applications.
pub struct ReactPlugin {
    rules: Vec<Rule>,
}

impl ReactPlugin {
    pub fn new() -> Self {
        Self {
            rules: compose(&[
                BASENAME_RULES,
                common::BASENAME_RULES,
                EXTENSION_RULES,
                common::EXTENSION_RULES,
            ]),
        }
    }
}

impl Default for ReactPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ReactPlugin {
    fn id(&self) -> &'static str {
        "react"
    }

    fn name(&self) -> &'static str {
        "React (Vite)"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tsx", "ts", "jsx", "js", "css", "html", "json"]
    }

    fn config_files(&self) -> &'static [&'static str] {
        &["package.json", "tsconfig.json", "vite.config.ts", "index.html"]
    }

    fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn synth(path: &str) -> String {
        let settings = ProjectSettings {
            project_type: "react".into(),
            ..ProjectSettings::named("panel")
        };
        ReactPlugin::new().generate_content(path, &settings)
    }

    #[test]
    fn test_package_json_is_vite_module() {
        let value: Value = serde_json::from_str(&synth("package.json")).expect("valid JSON");
        assert_eq!(value["name"], "panel");
        assert_eq!(value["type"], "module");
        assert_eq!(value["scripts"]["dev"], "vite");
    }

    #[test]
    fn test_entry_and_app() {
        let main = synth("src/main.tsx");
        assert!(main.contains("createRoot(document.getElementById('root')!)"));
        let main_js = synth("src/main.jsx");
        assert!(main_js.contains("createRoot(document.getElementById('root'))"));
        assert!(synth("src/App.tsx").contains("<h1>panel</h1>"));
        assert!(synth("index.html").contains("src=\"/src/main.tsx\""));
    }

    #[test]
    fn test_components_share_frontend_templates() {
        assert!(synth("src/components/StatsGrid.tsx").contains("'$48,250'"));
        assert!(synth("src/components/Cart.tsx").starts_with("import { useState }"));
        assert!(!synth("src/components/Header.tsx").contains("next/link"));
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(synth("src/assets/logo.webp"), "// logo.webp\n");
    }
}
