//! # TreeForge .gitignore Presets
//!
//! File: cli/src/synth/gitignore.rs
//!
//! `.gitignore` content for each `GitignoreTemplate`. Every preset starts with
//! a shared block (OS files, editors, env files, logs) followed by the
//! ecosystem-specific entries. `none` keeps only the shared block, which is
//! what an explicitly listed `.gitignore` gets when no preset is selected.
//!
use super::rule::FileContext;
use crate::core::settings::{GitignoreTemplate, ProjectSettings};

const COMMON: &str = "\
# OS
.DS_Store
Thumbs.db

# Editors
.idea/
.vscode/
*.swp

# Environment
.env
.env.local
.env.*.local

# Logs
*.log
";

const NODE: &str = "\
# Dependencies
node_modules/
.pnp
.pnp.js

# Build output
dist/
build/
coverage/

# Package manager logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
";

const REACT: &str = "\
# Dependencies
node_modules/

# Vite / CRA build output
dist/
build/
coverage/
*.local

npm-debug.log*
yarn-error.log*
";

const NEXT: &str = "\
# Dependencies
node_modules/
.pnp
.pnp.js

# Next.js
.next/
out/

# Production
build/
coverage/

# Vercel
.vercel

# TypeScript
*.tsbuildinfo
next-env.d.ts

npm-debug.log*
yarn-error.log*
";

const PYTHON: &str = "\
# Byte-compiled files
__pycache__/
*.py[cod]

# Virtual environments
.venv/
venv/
env/

# Packaging
build/
dist/
*.egg-info/

# Tooling caches
.pytest_cache/
.mypy_cache/
.ruff_cache/
.coverage
htmlcov/
";

/// Text for the given preset.
pub fn gitignore_text(template: GitignoreTemplate) -> String {
    let specific = match template {
        GitignoreTemplate::Node => NODE,
        GitignoreTemplate::React => REACT,
        GitignoreTemplate::Next => NEXT,
        GitignoreTemplate::Python => PYTHON,
        GitignoreTemplate::None => return COMMON.to_string(),
    };
    format!("{}\n{}", specific, COMMON)
}

/// Generator for `.gitignore`.
pub fn gitignore_file(_file: &FileContext<'_>, settings: &ProjectSettings) -> String {
    gitignore_text(settings.gitignore)
}
