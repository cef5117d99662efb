//! # Python Plugin
//!
//! File: cli/src/synth/plugins/python.rs
//!
//! FastAPI services. `main.py`, `__init__.py`, `requirements.txt`,
//! `pyproject.toml` and the `Dockerfile` are recognized by name; other
//! modules dispatch on a basename substring in this order: `test`, `model`,
//! `schema`, `router`, `route`, `config`, `settings`.
//!
use crate::core::settings::ProjectSettings;
use crate::synth::common;
use crate::synth::rule::{self, FileContext, Matcher, Rule};
use crate::synth::{compose, Plugin};

const MAIN: &str = r#""""Entry point for {{ name }}."""

from fastapi import FastAPI

app = FastAPI(title={{ name | json_encode() }}, description={{ description_text | json_encode() }})


@app.get("/health")
def health() -> dict:
    return {"status": "ok", "service": {{ name | json_encode() }} }
"#;

const REQUIREMENTS: &str = "\
fastapi>=0.110
uvicorn[standard]>=0.29
pydantic>=2.6
pytest>=8.0
httpx>=0.27
";

const PYPROJECT: &str = r#"[project]
name = "{{ project_name_snake }}"
version = "0.1.0"
description = {{ description_text | json_encode() }}
license = { text = "{{ license_spdx }}" }
requires-python = ">=3.10"
dependencies = [
    "fastapi>=0.110",
    "uvicorn[standard]>=0.29",
    "pydantic>=2.6",
]

[project.optional-dependencies]
dev = ["pytest>=8.0", "httpx>=0.27"]
"#;

const DOCKERFILE: &str = "\
FROM python:3.12-slim
WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000
CMD [\"uvicorn\", \"main:app\", \"--host\", \"0.0.0.0\", \"--port\", \"8000\"]
";

const TEST: &str = r#""""Tests for {{ name }}."""

from fastapi.testclient import TestClient

from main import app

client = TestClient(app)


def test_health() -> None:
    response = client.get("/health")
    assert response.status_code == 200
    assert response.json()["status"] == "ok"
"#;

const MODEL: &str = r#""""Data models."""

from datetime import datetime

from pydantic import BaseModel, Field


class {{ component_name }}(BaseModel):
    id: int
    name: str
    created_at: datetime = Field(default_factory=datetime.utcnow)
"#;

const ROUTER: &str = r#""""HTTP routes: {{ file_stem }}."""

from fastapi import APIRouter, HTTPException

router = APIRouter(prefix="/{{ file_stem | replace(from="_router", to="") | replace(from="_routes", to="") }}", tags=["{{ file_stem }}"])

_items: dict[int, dict] = {}


@router.get("/")
def list_items() -> list[dict]:
    return list(_items.values())


@router.get("/{item_id}")
def get_item(item_id: int) -> dict:
    if item_id not in _items:
        raise HTTPException(status_code=404, detail="Item not found")
    return _items[item_id]
"#;

const SETTINGS: &str = r#""""Application settings for {{ name }}."""

import os
from dataclasses import dataclass


@dataclass(frozen=True)
class Settings:
    app_name: str = {{ name | json_encode() }}
    database_url: str = os.getenv("DATABASE_URL", "sqlite:///./app.db")
    debug: bool = os.getenv("DEBUG", "false").lower() == "true"


settings = Settings()
"#;

fn main_module(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, MAIN)
}

fn init_module(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    let package = file.directory().rsplit('/').next().unwrap_or_default();
    if package.is_empty() {
        rule::render(file, settings, "\"\"\"{{ name }} package.\"\"\"\n")
    } else {
        format!("\"\"\"{} package.\"\"\"\n", package)
    }
}

fn requirements(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    REQUIREMENTS.to_string()
}

fn pyproject(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, PYPROJECT)
}

fn dockerfile(_file: &FileContext<'_>, _settings: &ProjectSettings) -> String {
    DOCKERFILE.to_string()
}

fn pytest_module(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, TEST)
}

fn model(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render_with(file, settings, MODEL, |context| {
        let base = ["_models", "_model", "_schemas", "_schema"]
            .iter()
            .find_map(|suffix| file.stem.strip_suffix(suffix))
            .unwrap_or(file.stem);
        context.insert("component_name", &crate::core::naming::component_name(base));
    })
}

fn router(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, ROUTER)
}

fn settings_module(file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    rule::render(file, settings, SETTINGS)
}

const fn on_module(needle: &'static str) -> Matcher {
    Matcher::ExtensionContains {
        extensions: &["py"],
        needle,
    }
}

const BASENAME_RULES: &[Rule] = &[
    Rule::new("main.py", Matcher::AnyBasename(&["main.py", "app.py"]), main_module),
    Rule::new("__init__.py", Matcher::Basename("__init__.py"), init_module),
    Rule::new("requirements.txt", Matcher::Basename("requirements.txt"), requirements),
    Rule::new("pyproject.toml", Matcher::Basename("pyproject.toml"), pyproject),
    Rule::new("python Dockerfile", Matcher::Basename("Dockerfile"), dockerfile),
];

const EXTENSION_RULES: &[Rule] = &[
    Rule::new("test", on_module("test"), pytest_module),
    Rule::new("model", on_module("model"), model),
    Rule::new("schema", on_module("schema"), model),
    Rule::new("router", on_module("router"), router),
    Rule::new("route", on_module("route"), router),
    Rule::new("config", on_module("config"), settings_module),
    Rule::new("settings", on_module("settings"), settings_module),
];

/// FastAPI services.
pub struct PythonPlugin {
    rules: Vec<Rule>,
}

impl PythonPlugin {
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

impl Default for PythonPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PythonPlugin {
    fn id(&self) -> &'static str {
        "python"
    }

    fn name(&self) -> &'static str {
        "Python (FastAPI)"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["py", "txt", "toml"]
    }

    fn config_files(&self) -> &'static [&'static str] {
        &["requirements.txt", "pyproject.toml", "Dockerfile", ".env.example"]
    }

    fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
