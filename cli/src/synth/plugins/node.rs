//! # Node.js Plugin
//!
//! File: cli/src/synth/plugins/node.rs
//!
//! Express REST APIs. Script files are dispatched on a basename substring in
//! this order: `.test`/`.spec` (Jest test), `server`, `app`, `index` (Express
//! entry), `route` (router), `controller`, `middleware`, `model`, `config`
//! or `db` (configuration module).
//!
use crate::core::settings::ProjectSettings;
use crate::synth::common::{self, PackageManifest, SCRIPT_EXTENSIONS};
use crate::synth::rule::{self, FileContext, Matcher, Rule};
use crate::synth::{compose, Plugin};
use serde_json::json;

const SERVER: &str = r#"{% if typescript %}import express from 'express';
import cors from 'cors';
import 'dotenv/config';
{% else %}const express = require('express');
const cors = require('cors');
require('dotenv').config();
{% endif %}
const app = express();
const port = Number(process.env.PORT ?? 3000);

app.use(cors());
app.use(express.json());

app.get('/health', (_req, res) => {
  res.json({ status: 'ok', service: {{ name | json_encode() }} });
});

app.listen(port, () => {
  console.log(`{{ name }} listening on port ${port}`);
});
{% if typescript %}
export default app;
{% else %}
module.exports = app;
{% endif %}"#;

const ROUTER: &str = r#"{% if typescript %}import { Router } from 'express';
{% else %}const { Router } = require('express');
{% endif %}
const router = Router();

router.get('/', (_req, res) => {
  res.json({ items: [] });
});

router.get('/:id', (req, res) => {
  res.json({ id: req.params.id });
});

router.post('/', (req, res) => {
  res.status(201).json(req.body);
});
{% if typescript %}
export default router;
{% else %}
module.exports = router;
{% endif %}"#;

const CONTROLLER: &str = r#"{% if typescript %}import type { Request, Response } from 'express';

export async function list(_req: Request, res: Response) {
  res.json({ items: [] });
}

export async function show(req: Request, res: Response) {
  res.json({ id: req.params.id });
}
{% else %}async function list(_req, res) {
  res.json({ items: [] });
}

async function show(req, res) {
  res.json({ id: req.params.id });
}

module.exports = { list, show };
{% endif %}"#;

const MIDDLEWARE: &str = r#"{% if typescript %}import type { NextFunction, Request, Response } from 'express';

export function errorHandler(err: Error, _req: Request, res: Response, _next: NextFunction) {
  console.error(err);
  res.status(500).json({ error: err.message });
}
{% else %}function errorHandler(err, _req, res, _next) {
  console.error(err);
  res.status(500).json({ error: err.message });
}

module.exports = { errorHandler };
{% endif %}"#;

const MODEL: &str = r#"{% if typescript %}export interface {{ component_name }} {
  id: string;
  createdAt: Date;
}

export const {{ file_stem | lower }}Store: {{ component_name }}[] = [];
{% else %}const {{ file_stem | lower }}Store = [];

module.exports = { {{ file_stem | lower }}Store };
{% endif %}"#;

const CONFIG: &str = r#"{% if typescript %}export const config = {
  port: Number(process.env.PORT ?? 3000),
  databaseUrl: process.env.DATABASE_URL ?? '',
  appName: {{ name | json_encode() }},
};
{% else %}const config = {
  port: Number(process.env.PORT ?? 3000),
  databaseUrl: process.env.DATABASE_URL ?? '',
  appName: {{ name | json_encode() }},
};

module.exports = { config };
{% endif %}"#;

const TEST: &str = r#"describe({{ file_stem | json_encode() }}, () => {
  it('works', () => {
    expect(1 + 1).toBe(2);
  });
});
"#;

fn package_json(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    common::package_json(
        file,
        settings,
        &PackageManifest {
            main: Some("src/index.js"),
            scripts: &[
                ("start", "node src/index.js"),
                ("dev", "nodemon src/index.js"),
                ("test", "jest"),
            ],
            dependencies: &[
                ("cors", "^2.8.5"),
                ("dotenv", "^16.4.0"),
                ("express", "^4.19.0"),
            ],
            dev_dependencies: &[("jest", "^29.7.0"), ("nodemon", "^3.1.0")],
            ..Default::default()
        },
    )
}

fn tsconfig_json(file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    let config = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "commonjs",
            "rootDir": "src",
            "outDir": "dist",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true
        },
        "include": ["src"]
    });
    common::json_text(file, &config)
}

fn server(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, SERVER)
}

fn router(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, ROUTER)
}

fn controller(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, CONTROLLER)
}

fn middleware(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, MIDDLEWARE)
}

fn model(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, MODEL)
}

fn config(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, CONFIG)
}

fn jest_test(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, TEST)
}

const fn on_script(needle: &'static str) -> Matcher {
    Matcher::ExtensionContains {
        extensions: SCRIPT_EXTENSIONS,
        needle,
    }
}

const BASENAME_RULES: &[Rule] = &[
    Rule::new("express package.json", Matcher::Basename("package.json"), package_json),
    Rule::new("node tsconfig.json", Matcher::Basename("tsconfig.json"), tsconfig_json),
];

const EXTENSION_RULES: &[Rule] = &[
    Rule::new("test", on_script(".test"), jest_test),
    Rule::new("spec", on_script(".spec"), jest_test),
    Rule::new("server", on_script("server"), server),
    Rule::new("app", on_script("app"), server),
    Rule::new("index", on_script("index"), server),
    Rule::new("route", on_script("route"), router),
    Rule::new("controller", on_script("controller"), controller),
    Rule::new("middleware", on_script("middleware"), middleware),
    Rule::new("model", on_script("model"), model),
    Rule::new("config", on_script("config"), config),
    Rule::new("db", on_script("db"), config),
];

/// Express API servers.
pub struct NodePlugin {
    rules: Vec<Rule>,
}

impl NodePlugin {
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

impl Default for NodePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for NodePlugin {
    fn id(&self) -> &'static str {
        "node"
    }

    fn name(&self) -> &'static str {
        "Node.js (Express)"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["js", "ts", "mjs", "cjs", "json"]
    }

    fn config_files(&self) -> &'static [&'static str] {
        &["package.json", "tsconfig.json", ".env.example", "Dockerfile"]
    }

    fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
