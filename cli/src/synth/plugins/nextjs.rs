//! # Next.js Plugin
//!
//! File: cli/src/synth/plugins/nextjs.rs
//!
//! App Router projects with Tailwind CSS. Component files are dispatched on a
//! basename substring; the order below is the priority order:
//!
//! `layout`, `loading`, `not-found`, `error`, `page`, `button`, `navbar`,
//! `header`, `footer`, `hero`, `pricing`, `product`, `cart`, `stats`, `chart`,
//! `sidebar`, `card`
//!
//! Script files: `route` (route handler), `api` (fetch client), `utils`,
//! `types` (`.ts` only). Stylesheets: `globals`.
//!
use super::frontend;
use crate::core::settings::ProjectSettings;
use crate::synth::common::{self, PackageManifest, COMPONENT_EXTENSIONS, SCRIPT_EXTENSIONS};
use crate::synth::rule::{self, FileContext, Matcher, Rule};
use crate::synth::{compose, Plugin};
use serde_json::json;

const LAYOUT: &str = r#"{% if typescript %}import type { Metadata } from 'next';
import type { ReactNode } from 'react';
{% endif %}import './globals.css';

export const metadata{% if typescript %}: Metadata{% endif %} = {
  title: {{ name | json_encode() }},
  description: {{ description_text | json_encode() }},
};

export default function RootLayout({ children }{% if typescript %}: { children: ReactNode }{% endif %}) {
  return (
    <html lang="en">
      <body className="min-h-screen bg-white text-gray-900 antialiased">{children}</body>
    </html>
  );
}
"#;

const LOADING: &str = r#"export default function Loading() {
  return (
    <div className="flex min-h-screen items-center justify-center">
      <div className="h-8 w-8 animate-spin rounded-full border-4 border-blue-600 border-t-transparent" />
    </div>
  );
}
"#;

const NOT_FOUND: &str = r#"import Link from 'next/link';

export default function NotFound() {
  return (
    <main className="flex min-h-screen flex-col items-center justify-center gap-4">
      <h1 className="text-4xl font-bold">404</h1>
      <p className="text-gray-600">This page could not be found.</p>
      <Link href="/" className="text-blue-600 hover:underline">
        Back to {{ name }}
      </Link>
    </main>
  );
}
"#;

const ERROR: &str = r#"'use client';

export default function Error({ error, reset }{% if typescript %}: { error: Error & { digest?: string }; reset: () => void }{% endif %}) {
  return (
    <main className="flex min-h-screen flex-col items-center justify-center gap-4">
      <h2 className="text-2xl font-semibold">Something went wrong</h2>
      <p className="text-gray-600">{error.message}</p>
      <button onClick={() => reset()} className="rounded-md bg-blue-600 px-4 py-2 text-white">
        Try again
      </button>
    </main>
  );
}
"#;

const PAGE: &str = r#"export default function {% if file_stem == "page" %}Home{% else %}{{ component_name }}{% endif %}() {
  return (
    <main className="flex min-h-screen flex-col items-center justify-center p-24">
      <h1 className="text-4xl font-bold">{{ name }}</h1>
      <p className="mt-4 text-lg text-gray-600">{{ description_text }}</p>
    </main>
  );
}
"#;

const NAVBAR: &str = r#"import Link from 'next/link';

const links = [
  { href: '/', label: 'Home' },
  { href: '/about', label: 'About' },
  { href: '/contact', label: 'Contact' },
];

export default function {{ component_name }}() {
  return (
    <header className="border-b">
      <nav className="mx-auto flex max-w-6xl items-center justify-between p-4">
        <Link href="/" className="font-semibold">
          {{ name }}
        </Link>
        <ul className="flex gap-6">
          {links.map((link) => (
            <li key={link.href}>
              <Link href={link.href}>{link.label}</Link>
            </li>
          ))}
        </ul>
      </nav>
    </header>
  );
}
"#;

const ROUTE_HANDLER: &str = r#"import { NextResponse } from 'next/server';

export async function GET() {
  return NextResponse.json({ status: 'ok', service: {{ name | json_encode() }} });
}
"#;

const MIDDLEWARE: &str = r#"import { NextResponse } from 'next/server';
{% if typescript %}import type { NextRequest } from 'next/server';
{% endif %}
export function middleware(request{% if typescript %}: NextRequest{% endif %}) {
  return NextResponse.next();
}

export const config = {
  matcher: ['/((?!_next/static|_next/image|favicon.ico).*)'],
};
"#;

const GLOBALS_CSS: &str = "\
@tailwind base;
@tailwind components;
@tailwind utilities;

:root {
  --foreground: #171717;
  --background: #ffffff;
}

body {
  color: var(--foreground);
  background: var(--background);
}
";

const TAILWIND_CONFIG: &str = "\
/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./app/**/*.{js,ts,jsx,tsx,mdx}', './components/**/*.{js,ts,jsx,tsx,mdx}', './src/**/*.{js,ts,jsx,tsx,mdx}'],
  theme: {
    extend: {},
  },
  plugins: [],
};
";

const POSTCSS_CONFIG: &str = "\
module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
";

const NEXT_ENV: &str = "\
/// <reference types=\"next\" />
/// <reference types=\"next/image-types/global\" />

// NOTE: This file should not be edited
";

fn package_json(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    common::package_json(
        file,
        settings,
        &PackageManifest {
            scripts: &[
                ("dev", "next dev"),
                ("build", "next build"),
                ("start", "next start"),
                ("lint", "next lint"),
            ],
            dependencies: &[
                ("next", "^14.2.0"),
                ("react", "^18.3.0"),
                ("react-dom", "^18.3.0"),
            ],
            dev_dependencies: &[
                ("@types/node", "^20.0.0"),
                ("@types/react", "^18.3.0"),
                ("@types/react-dom", "^18.3.0"),
                ("autoprefixer", "^10.4.0"),
                ("eslint", "^8.57.0"),
                ("eslint-config-next", "^14.2.0"),
                ("postcss", "^8.4.0"),
                ("tailwindcss", "^3.4.0"),
                ("typescript", "^5.4.0"),
            ],
            ..Default::default()
        },
    )
}

fn tsconfig_json(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2017",
            "lib": ["dom", "dom.iterable", "esnext"],
            "allowJs": true,
            "skipLibCheck": true,
            "strict": true,
            "noEmit": true,
            "esModuleInterop": true,
            "module": "esnext",
            "moduleResolution": "bundler",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "jsx": "preserve",
            "incremental": true,
            "plugins": [{ "name": "next" }],
            "paths": { "@/*": ["./*"] }
        },
        "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
        "exclude": ["node_modules"]
    });
    common::json_text(file, &config)
}

fn tailwind_config(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    TAILWIND_CONFIG.to_string()
}

fn postcss_config(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    POSTCSS_CONFIG.to_string()
}

fn next_env(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    NEXT_ENV.to_string()
}

fn middleware(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, MIDDLEWARE)
}

fn layout(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, LAYOUT)
}

fn loading(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, LOADING)
}

fn not_found(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, NOT_FOUND)
}

fn error_boundary(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, ERROR)
}

fn page(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, PAGE)
}

fn navbar(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, NAVBAR)
}

fn route_handler(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, ROUTE_HANDLER)
}

fn globals_css(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    GLOBALS_CSS.to_string()
}

const fn on_component(needle: &'static str) -> Matcher {
    Matcher::ExtensionContains {
        extensions: COMPONENT_EXTENSIONS,
        needle,
    }
}

const fn on_script(needle: &'static str) -> Matcher {
    Matcher::ExtensionContains {
        extensions: SCRIPT_EXTENSIONS,
        needle,
    }
}

const BASENAME_RULES: &[Rule] = &[
    Rule::new("next package.json", Matcher::Basename("package.json"), package_json),
    Rule::new("next tsconfig.json", Matcher::Basename("tsconfig.json"), tsconfig_json),
    Rule::new("next-env.d.ts", Matcher::Basename("next-env.d.ts"), next_env),
    Rule::new(
        "tailwind.config",
        Matcher::AnyBasename(&["tailwind.config.js", "tailwind.config.ts"]),
        tailwind_config,
    ),
    Rule::new(
        "postcss.config",
        Matcher::AnyBasename(&["postcss.config.js", "postcss.config.mjs"]),
        postcss_config,
    ),
    Rule::new(
        "middleware",
        Matcher::AnyBasename(&["middleware.ts", "middleware.js"]),
        middleware,
    ),
];

const EXTENSION_RULES: &[Rule] = &[
    Rule::new("layout", on_component("layout"), layout),
    Rule::new("loading", on_component("loading"), loading),
    Rule::new("not-found", on_component("not-found"), not_found),
    Rule::new("error", on_component("error"), error_boundary),
    Rule::new("page", on_component("page"), page),
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
    Rule::new("route handler", on_script("route"), route_handler),
    Rule::new("api client", on_script("api"), frontend::api_client),
    Rule::new("utils", on_script("utils"), frontend::utils),
    Rule::new(
        "types",
        Matcher::ExtensionContains {
            extensions: &["ts"],
            needle: "types",
        },
        frontend::types,
    ),
    Rule::new(
        "globals.css",
        Matcher::ExtensionContains {
            extensions: &["css"],
            needle: "globals",
        },
        globals_css,
    ),
];

/// Next.js (App Router) projects.
pub struct NextJsPlugin {
    rules: Vec<Rule>,
}

impl NextJsPlugin {
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

impl Default for NextJsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for NextJsPlugin {
    fn id(&self) -> &'static str {
        "nextjs"
    }

    fn name(&self) -> &'static str {
        "Next.js"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tsx", "ts", "jsx", "js", "css", "md", "json"]
    }

    fn config_files(&self) -> &'static [&'static str] {
        &[
            "package.json",
            "tsconfig.json",
            "next.config.js",
            "next-env.d.ts",
            "tailwind.config.js",
            "postcss.config.js",
            ".eslintrc.json",
        ]
    }

    fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
